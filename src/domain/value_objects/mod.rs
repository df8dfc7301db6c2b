//! Domain Value Objects
//!
//! Closed option sets for every user-facing choice. Each set has a stable
//! lowercase wire name shared by YAML documents, JSON output and CLI flags.

/// Declares a closed option set with wire names, `ALL`, `Display` and `FromStr`.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal, default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            clap::ValueEnum,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                #[value(name = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of this option set, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable name of the option set
            pub const LABEL: &'static str = $label;

            /// Stable wire name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Wire names of every value
            pub fn wire_names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::BoxError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| crate::error::BoxError::InvalidOption {
                        option: $label,
                        value: s.to_string(),
                        expected: Self::wire_names().join(", "),
                    })
            }
        }
    };
}

pub(crate) use option_set;

mod config_warning;
mod layout;
mod material;
mod mechanics;
mod mounting;
mod style;

pub use config_warning::ConfigWarning;
pub use layout::{DividerLayout, DividerMode, InsertType, ShellGeometry, SlopeDirection};
pub use material::{MaterialType, PrintMode, PrinterProfile};
pub use mechanics::{AntiWobbleType, FitClass, RailProfile, SoundProfile, WhiskerParams, WhiskerVariant};
pub use mounting::{ConnectionType, HandleMode, LabelSystem, Mount, MountType, SmartCartridge};
pub use style::{
    BelovodieColor, BelovodiePreset, ColorInsert, DesignStyle, HandleProfile, LabelFrameStyle,
    PatternPosition, RunePattern, TokenPattern,
};

/// One option set as listed by `stowbox options`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OptionCatalogEntry {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

macro_rules! catalog {
    ($($ty:ty),+ $(,)?) => {
        vec![$(OptionCatalogEntry {
            name: <$ty>::LABEL,
            values: <$ty>::wire_names(),
        }),+]
    };
}

/// Every option set with its wire values
pub fn option_catalog() -> Vec<OptionCatalogEntry> {
    catalog![
        DesignStyle,
        ConnectionType,
        MaterialType,
        DividerLayout,
        DividerMode,
        RailProfile,
        PrinterProfile,
        SoundProfile,
        RunePattern,
        BelovodieColor,
        BelovodiePreset,
        HandleMode,
        ShellGeometry,
        SlopeDirection,
        ColorInsert,
        SmartCartridge,
        InsertType,
        PrintMode,
        Mount,
        MountType,
        LabelSystem,
        LabelFrameStyle,
        AntiWobbleType,
        WhiskerVariant,
        PatternPosition,
        HandleProfile,
        TokenPattern,
        FitClass,
    ]
}
