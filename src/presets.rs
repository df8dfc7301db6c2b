//! Ready-made configurations for common scenarios

use std::path::PathBuf;

use crate::domain::entities::{BoxConfig, DetailsConfig, MechanicsConfig, PatternConfig};
use crate::domain::ports::ConfigRepository;
use crate::domain::value_objects::{
    option_set, AntiWobbleType, BelovodieColor, BelovodiePreset, ConnectionType, DesignStyle,
    DividerLayout, DividerMode, HandleMode, LabelFrameStyle, MaterialType, Mount, PatternPosition,
    PrintMode, PrinterProfile, RailProfile, RunePattern, SmartCartridge, SoundProfile,
};
use crate::error::{BoxError, BoxResult};

option_set! {
    /// Named preset
    BoxPreset ("preset", default = Mvp) {
        /// Quiet smart home desk box, K1C + Hyper PLA
        SmarthomeDesk => "smarthome_desk",
        /// PETG workshop box with a satisfying click
        WorkshopTools => "workshop_tools",
        /// Sealed PETG box for medicine or optics
        MedicalSealed => "medical_sealed",
        /// Minimal quick-start box
        Mvp => "mvp",
        EntrywayKeys => "entryway_keys",
        DeskTech => "desk_tech",
        WorkshopScrews => "workshop_screws",
        BathroomMeds => "bathroom_meds",
    }
}

impl BoxPreset {
    /// Build the preset's configuration
    pub fn build(&self) -> BoxConfig {
        match self {
            BoxPreset::SmarthomeDesk => smarthome_desk(),
            BoxPreset::WorkshopTools => workshop_tools(),
            BoxPreset::MedicalSealed => medical_sealed(),
            BoxPreset::Mvp => mvp(),
            BoxPreset::EntrywayKeys => entryway_keys(),
            BoxPreset::DeskTech => desk_tech(),
            BoxPreset::WorkshopScrews => workshop_screws(),
            BoxPreset::BathroomMeds => bathroom_meds(),
        }
    }
}

/// Look up a preset by name
pub fn get_preset(name: &str) -> BoxResult<BoxConfig> {
    name.parse::<BoxPreset>()
        .map(|preset| preset.build())
        .map_err(|_| BoxError::UnknownPreset {
            name: name.to_string(),
            available: BoxPreset::wire_names().join(", "),
        })
}

/// Every preset with its configuration, in declaration order
pub fn all_presets() -> Vec<(BoxPreset, BoxConfig)> {
    BoxPreset::ALL.iter().map(|p| (*p, p.build())).collect()
}

/// Save a preset under its own name, with derived values
pub fn save_preset(repo: &dyn ConfigRepository, preset: BoxPreset) -> BoxResult<PathBuf> {
    repo.save(&preset.build(), preset.as_str(), true)
}

fn smarthome_desk() -> BoxConfig {
    BoxConfig {
        description: "Quiet smart home: K1C + Hyper PLA, desktop".to_string(),
        design: DesignStyle::Belovodie,
        belovodie_preset: Some(BelovodiePreset::Desk),
        color_body: BelovodieColor::MistWhite,
        color_accent: BelovodieColor::EmeraldDeep,
        material: MaterialType::HyperPla,
        printer: PrinterProfile::CrealityK1c,
        print_mode: PrintMode::Premium,
        dividers: DividerLayout::Auto,
        divider_mode: DividerMode::Snap,
        connection: ConnectionType::Magnet,
        mount: Mount::Table,
        handle_mode: HandleMode::HiddenHookRune,
        label_frame_style: LabelFrameStyle::RecessedPortal,
        smart_cartridge: SmartCartridge::Nfc13mm,
        mechanics: MechanicsConfig {
            rail_profile: RailProfile::VProfile,
            anti_wobble: AntiWobbleType::SpringWhisker,
            sound_profile: SoundProfile::Silent,
            service_channel: false,
            ..MechanicsConfig::default()
        },
        pattern: PatternConfig {
            kind: RunePattern::KnotLine,
            position: PatternPosition::LabelFrame,
            ..PatternConfig::default()
        },
        details: DetailsConfig {
            shadow_gap: 0.4,
            guide_cones: true,
            ..DetailsConfig::default()
        },
        ..BoxConfig::with_dimensions(200.0, 220.0, 80.0)
    }
    .with_preset_applied()
}

fn workshop_tools() -> BoxConfig {
    BoxConfig {
        description: "Workshop: PETG, tools, satisfying click".to_string(),
        design: DesignStyle::Belovodie,
        belovodie_preset: Some(BelovodiePreset::Workshop),
        color_body: BelovodieColor::Obsidian,
        color_accent: BelovodieColor::BronzeWarm,
        material: MaterialType::Petg,
        printer: PrinterProfile::CrealityK1c,
        print_mode: PrintMode::Normal,
        dividers: DividerLayout::Auto,
        divider_mode: DividerMode::Lock,
        connection: ConnectionType::Dovetail,
        mount: Mount::Table,
        handle_mode: HandleMode::RuneSlot,
        label_frame_style: LabelFrameStyle::RecessedPortal,
        smart_cartridge: SmartCartridge::Plain,
        mechanics: MechanicsConfig {
            rail_profile: RailProfile::VProfile,
            anti_wobble: AntiWobbleType::SpringWhisker,
            sound_profile: SoundProfile::MechClick,
            // dusty environment
            service_channel: true,
            ..MechanicsConfig::default()
        },
        pattern: PatternConfig {
            kind: RunePattern::ChevronRune,
            position: PatternPosition::BackEdge,
            ..PatternConfig::default()
        },
        details: DetailsConfig {
            shadow_gap: 0.4,
            guide_cones: true,
            ..DetailsConfig::default()
        },
        ..BoxConfig::with_dimensions(200.0, 220.0, 80.0)
    }
    .with_preset_applied()
}

fn medical_sealed() -> BoxConfig {
    BoxConfig {
        description: "Medicine/optics: PETG sealed, minimal relief".to_string(),
        design: DesignStyle::Belovodie,
        belovodie_preset: Some(BelovodiePreset::Med),
        color_body: BelovodieColor::StoneSand,
        color_accent: BelovodieColor::FrostBlue,
        material: MaterialType::Petg,
        printer: PrinterProfile::CrealityK1c,
        print_mode: PrintMode::Premium,
        dividers: DividerLayout::Grid2x2,
        divider_mode: DividerMode::Snap,
        connection: ConnectionType::Clip,
        mount: Mount::Table,
        handle_mode: HandleMode::HiddenHookRune,
        label_frame_style: LabelFrameStyle::RecessedPortal,
        smart_cartridge: SmartCartridge::Plain,
        sealed: true,
        // fewer dust traps
        mechanics: MechanicsConfig {
            rail_profile: RailProfile::VProfile,
            anti_wobble: AntiWobbleType::None,
            sound_profile: SoundProfile::Silent,
            service_channel: false,
            ..MechanicsConfig::default()
        },
        pattern: PatternConfig {
            kind: RunePattern::None,
            ..PatternConfig::default()
        },
        details: DetailsConfig {
            shadow_gap: 0.3,
            guide_cones: true,
            ..DetailsConfig::default()
        },
        ..BoxConfig::with_dimensions(180.0, 150.0, 70.0)
    }
    .with_preset_applied()
}

fn mvp() -> BoxConfig {
    BoxConfig {
        description: "Minimal version for quick start".to_string(),
        design: DesignStyle::Nordic,
        material: MaterialType::HyperPla,
        printer: PrinterProfile::CrealityK1c,
        print_mode: PrintMode::Draft,
        dividers: DividerLayout::None,
        connection: ConnectionType::Clip,
        mechanics: MechanicsConfig {
            anti_wobble: AntiWobbleType::None,
            ..MechanicsConfig::default()
        },
        pattern: PatternConfig {
            kind: RunePattern::None,
            ..PatternConfig::default()
        },
        ..BoxConfig::with_dimensions(200.0, 220.0, 80.0)
    }
}

fn entryway_keys() -> BoxConfig {
    BoxConfig {
        description: "Entryway: keys and pocket items".to_string(),
        design: DesignStyle::Nordic,
        material: MaterialType::HyperPla,
        printer: PrinterProfile::CrealityK1c,
        dividers: DividerLayout::None,
        connection: ConnectionType::Clip,
        ..BoxConfig::with_dimensions(150.0, 120.0, 50.0)
    }
}

fn desk_tech() -> BoxConfig {
    BoxConfig {
        description: "Desktop: gadgets and cables".to_string(),
        design: DesignStyle::Techno,
        material: MaterialType::HyperPla,
        printer: PrinterProfile::CrealityK1c,
        dividers: DividerLayout::Auto,
        connection: ConnectionType::Magnet,
        ..BoxConfig::with_dimensions(200.0, 220.0, 80.0)
    }
}

fn workshop_screws() -> BoxConfig {
    BoxConfig {
        description: "Workshop: screws and small parts".to_string(),
        design: DesignStyle::Nordic,
        material: MaterialType::Petg,
        printer: PrinterProfile::CrealityK1c,
        dividers: DividerLayout::Grid3x3,
        divider_mode: DividerMode::Lock,
        connection: ConnectionType::Dovetail,
        ..BoxConfig::with_dimensions(150.0, 200.0, 50.0)
    }
}

fn bathroom_meds() -> BoxConfig {
    BoxConfig {
        description: "Bathroom: medications storage".to_string(),
        design: DesignStyle::Nordic,
        // moisture resistant
        material: MaterialType::Petg,
        printer: PrinterProfile::CrealityK1c,
        dividers: DividerLayout::Grid2x2,
        divider_mode: DividerMode::Snap,
        connection: ConnectionType::Clip,
        sealed: true,
        ..BoxConfig::with_dimensions(120.0, 100.0, 60.0)
    }
}

trait ApplyPreset {
    fn with_preset_applied(self) -> Self;
}

impl ApplyPreset for BoxConfig {
    fn with_preset_applied(mut self) -> Self {
        self.apply_belovodie_preset();
        self
    }
}
