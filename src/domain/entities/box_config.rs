//! BoxConfig - the user-facing input record
//!
//! The user supplies external dimensions and preferences; everything else is
//! derived by `DerivedConfig`.

use serde::Serialize;

use crate::domain::value_objects::{
    AntiWobbleType, BelovodieColor, BelovodiePreset, ConnectionType, DesignStyle, DividerLayout,
    DividerMode, HandleMode, LabelFrameStyle, MaterialType, Mount, PatternPosition, PrintMode,
    PrinterProfile, RailProfile, RunePattern, ShellGeometry, SlopeDirection, SmartCartridge,
    SoundProfile, WhiskerVariant,
};

/// Shell shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryConfig {
    pub shape: ShellGeometry,
    /// Degrees
    pub slope_angle: f64,
    pub slope_direction: SlopeDirection,
    /// Back face stays vertical when sloped
    pub maintain_back_vertical: bool,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            shape: ShellGeometry::Rectangular,
            slope_angle: 15.0,
            slope_direction: SlopeDirection::Front,
            maintain_back_vertical: true,
        }
    }
}

/// Drawer mechanics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MechanicsConfig {
    pub rail_profile: RailProfile,
    pub anti_wobble: AntiWobbleType,
    pub whisker_variant: WhiskerVariant,
    pub sound_profile: SoundProfile,
    /// Blow-out channel for dusty environments
    pub service_channel: bool,
}

impl Default for MechanicsConfig {
    fn default() -> Self {
        Self {
            rail_profile: RailProfile::VProfile,
            anti_wobble: AntiWobbleType::SpringWhisker,
            whisker_variant: WhiskerVariant::MedL,
            sound_profile: SoundProfile::SoftClick,
            service_channel: false,
        }
    }
}

/// Relief pattern (belovodie only)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternConfig {
    #[serde(rename = "type")]
    pub kind: RunePattern,
    pub position: PatternPosition,
    pub spacing: f64,
    pub band_height: f64,
    /// Inset only
    pub groove_depth: f64,
    pub groove_width: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            kind: RunePattern::None,
            position: PatternPosition::BackEdge,
            spacing: 8.0,
            band_height: 14.0,
            groove_depth: 0.35,
            groove_width: 0.8,
        }
    }
}

/// Premium detail toggles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsConfig {
    pub shadow_gap: f64,
    /// Alignment cones at the rail entry
    pub guide_cones: bool,
    /// Rune-shaped stacking key
    pub rune_key: bool,
    pub rivet_dots: bool,
    /// Version mark on the bottom
    pub version_mark: bool,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            shadow_gap: 0.4,
            guide_cones: true,
            rune_key: false,
            rivet_dots: false,
            version_mark: true,
        }
    }
}

/// Main configuration for a storage box.
///
/// Dimensions are external, in millimetres. Weights are in grams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxConfig {
    pub width: f64,
    pub depth: f64,
    pub height: f64,

    pub design: DesignStyle,
    pub belovodie_preset: Option<BelovodiePreset>,
    pub color_body: BelovodieColor,
    pub color_accent: BelovodieColor,

    pub material: MaterialType,
    pub printer: PrinterProfile,
    pub print_mode: PrintMode,

    pub dividers: DividerLayout,
    pub divider_mode: DividerMode,
    /// Target cell (width, depth) for automatic divider layout
    pub target_cell_size: (f64, f64),

    pub connection: ConnectionType,

    /// Number of boxes in the stack
    pub stack_levels: u32,
    pub mount: Mount,
    pub expected_weight: f64,

    pub handle_mode: HandleMode,
    pub handle_tactile_zone: bool,

    pub label_frame_style: LabelFrameStyle,

    pub smart_cartridge: SmartCartridge,
    pub hub_connector: bool,

    /// O-profile seal groove
    pub sealed: bool,

    pub geometry: GeometryConfig,
    pub mechanics: MechanicsConfig,
    pub pattern: PatternConfig,
    pub details: DetailsConfig,

    pub description: String,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            depth: 220.0,
            height: 80.0,
            design: DesignStyle::Nordic,
            belovodie_preset: None,
            color_body: BelovodieColor::MistWhite,
            color_accent: BelovodieColor::EmeraldDeep,
            material: MaterialType::HyperPla,
            printer: PrinterProfile::CrealityK1c,
            print_mode: PrintMode::Normal,
            dividers: DividerLayout::Auto,
            divider_mode: DividerMode::Snap,
            target_cell_size: (50.0, 50.0),
            connection: ConnectionType::Dovetail,
            stack_levels: 1,
            mount: Mount::Table,
            expected_weight: 500.0,
            handle_mode: HandleMode::Hook,
            handle_tactile_zone: true,
            label_frame_style: LabelFrameStyle::RecessedPortal,
            smart_cartridge: SmartCartridge::Plain,
            hub_connector: false,
            sealed: false,
            geometry: GeometryConfig::default(),
            mechanics: MechanicsConfig::default(),
            pattern: PatternConfig::default(),
            details: DetailsConfig::default(),
            description: String::new(),
        }
    }
}

impl BoxConfig {
    /// Default config with the given external dimensions
    pub fn with_dimensions(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
            ..Self::default()
        }
    }

    /// Switch to the belovodie style with the given preset applied
    pub fn with_belovodie_preset(mut self, preset: BelovodiePreset) -> Self {
        self.design = DesignStyle::Belovodie;
        self.belovodie_preset = Some(preset);
        self.apply_belovodie_preset();
        self
    }

    /// Apply the selected belovodie preset.
    ///
    /// No-op unless the style is belovodie and a preset is selected.
    pub fn apply_belovodie_preset(&mut self) {
        if self.design != DesignStyle::Belovodie {
            return;
        }
        let Some(preset) = self.belovodie_preset else {
            return;
        };

        match preset {
            BelovodiePreset::Desk => {
                self.color_body = BelovodieColor::MistWhite;
                self.color_accent = BelovodieColor::EmeraldDeep;
                self.pattern.kind = RunePattern::KnotLine;
                self.pattern.position = PatternPosition::LabelFrame;
            }
            BelovodiePreset::Workshop => {
                self.color_body = BelovodieColor::Obsidian;
                self.color_accent = BelovodieColor::BronzeWarm;
                self.pattern.kind = RunePattern::ChevronRune;
                self.pattern.position = PatternPosition::BackEdge;
            }
            BelovodiePreset::Med => {
                self.color_body = BelovodieColor::StoneSand;
                self.color_accent = BelovodieColor::FrostBlue;
                self.pattern.kind = RunePattern::None;
                self.sealed = true;
            }
            BelovodiePreset::Sacred => {
                self.color_body = BelovodieColor::Obsidian;
                self.color_accent = BelovodieColor::BronzeWarm;
                self.pattern.kind = RunePattern::ChevronRune;
                self.pattern.position = PatternPosition::BackEdge;
                self.details.rune_key = true;
                self.details.rivet_dots = true;
            }
        }
    }

    /// Validate the raw input and return human-readable warnings
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.width < 60.0 {
            warnings.push("Width < 60mm may be too small for drawer".to_string());
        }
        if self.width > 400.0 {
            warnings.push("Width > 400mm may have warping issues".to_string());
        }
        if self.depth < 80.0 {
            warnings.push("Depth < 80mm may be too shallow".to_string());
        }
        if self.height < 30.0 {
            warnings.push("Height < 30mm very limited drawer depth".to_string());
        }

        if self.sealed && self.material == MaterialType::HyperPla {
            warnings.push("Sealed version recommended with PETG".to_string());
        }

        if self.pattern.kind != RunePattern::None && self.design != DesignStyle::Belovodie {
            warnings.push("Rune patterns only for BELOVODIE style".to_string());
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_box() {
        let config = BoxConfig::default();
        assert_eq!((config.width, config.depth, config.height), (200.0, 220.0, 80.0));
        assert_eq!(config.design, DesignStyle::Nordic);
        assert_eq!(config.target_cell_size, (50.0, 50.0));
        assert_eq!(config.mechanics.anti_wobble, AntiWobbleType::SpringWhisker);
        assert_eq!(config.label_frame_style, LabelFrameStyle::RecessedPortal);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn belovodie_preset_ignored_for_other_styles() {
        let mut config = BoxConfig {
            belovodie_preset: Some(BelovodiePreset::Sacred),
            ..BoxConfig::default()
        };
        config.apply_belovodie_preset();

        assert_eq!(config.color_body, BelovodieColor::MistWhite);
        assert!(!config.details.rune_key);
    }

    #[test]
    fn sacred_preset_enables_rune_key_and_rivets() {
        let config = BoxConfig::default().with_belovodie_preset(BelovodiePreset::Sacred);

        assert_eq!(config.design, DesignStyle::Belovodie);
        assert_eq!(config.color_body, BelovodieColor::Obsidian);
        assert_eq!(config.color_accent, BelovodieColor::BronzeWarm);
        assert_eq!(config.pattern.kind, RunePattern::ChevronRune);
        assert!(config.details.rune_key);
        assert!(config.details.rivet_dots);
    }

    #[test]
    fn med_preset_seals_and_clears_pattern() {
        let mut config = BoxConfig::default();
        config.pattern.kind = RunePattern::GridRune;
        let config = config.with_belovodie_preset(BelovodiePreset::Med);

        assert!(config.sealed);
        assert_eq!(config.pattern.kind, RunePattern::None);
        assert_eq!(config.color_body, BelovodieColor::StoneSand);
    }

    #[test]
    fn desk_preset_places_knot_on_label_frame() {
        let config = BoxConfig::default().with_belovodie_preset(BelovodiePreset::Desk);
        assert_eq!(config.pattern.kind, RunePattern::KnotLine);
        assert_eq!(config.pattern.position, PatternPosition::LabelFrame);
    }

    #[test]
    fn validate_reports_size_limits_in_order() {
        let config = BoxConfig::with_dimensions(50.0, 70.0, 20.0);
        assert_eq!(
            config.validate(),
            vec![
                "Width < 60mm may be too small for drawer",
                "Depth < 80mm may be too shallow",
                "Height < 30mm very limited drawer depth",
            ]
        );

        let wide = BoxConfig::with_dimensions(450.0, 220.0, 80.0);
        assert_eq!(wide.validate(), vec!["Width > 400mm may have warping issues"]);
    }

    #[test]
    fn validate_flags_sealed_pla_and_stray_runes() {
        let mut config = BoxConfig {
            sealed: true,
            ..BoxConfig::default()
        };
        config.pattern.kind = RunePattern::WaveRune;

        let warnings = config.validate();
        assert_eq!(
            warnings,
            vec![
                "Sealed version recommended with PETG",
                "Rune patterns only for BELOVODIE style",
            ]
        );
    }
}
