//! Per-style visual parameters
//!
//! A downstream mesh builder reads radii, chamfers, handle and label
//! profiles from `DesignTokens` instead of branching on the style itself.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::{
    BelovodieColor, BelovodiePreset, DesignStyle, HandleProfile, LabelFrameStyle, PatternPosition,
    PrintMode, RunePattern, TokenPattern,
};

/// A single decorative pattern parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenParam {
    Number(f64),
    Text(&'static str),
}

pub type PatternParamMap = BTreeMap<&'static str, TokenParam>;

fn params<const N: usize>(entries: [(&'static str, TokenParam); N]) -> PatternParamMap {
    entries.into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTokens {
    pub radius_outer: f64,
    /// Internal fillet
    pub radius_inner: f64,
    pub chamfer: f64,
    pub chamfer_secondary: f64,
    /// Degrees
    pub chamfer_secondary_angle: f64,

    pub groove_width: f64,
    pub groove_depth: f64,
    pub pattern_type: TokenPattern,
    pub pattern_params: PatternParamMap,

    pub handle_profile: HandleProfile,
    /// At least 2 mm
    pub handle_inner_radius: f64,
    pub handle_tactile_mark: bool,
    pub handle_width: f64,
    pub handle_height: f64,

    pub label_frame_style: LabelFrameStyle,
    pub label_frame_width: f64,
    pub label_shadow_gap: f64,

    /// Gap around the front panel
    pub shadow_gap: f64,
    pub version_mark: bool,
    pub rune_key: bool,
    pub rivet_dots: bool,
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            radius_outer: 5.0,
            radius_inner: 2.0,
            chamfer: 0.0,
            chamfer_secondary: 0.0,
            chamfer_secondary_angle: 22.0,
            groove_width: 0.0,
            groove_depth: 0.0,
            pattern_type: TokenPattern::None,
            pattern_params: PatternParamMap::new(),
            handle_profile: HandleProfile::Hook,
            handle_inner_radius: 2.0,
            handle_tactile_mark: false,
            handle_width: 60.0,
            handle_height: 15.0,
            label_frame_style: LabelFrameStyle::Flush,
            label_frame_width: 2.0,
            label_shadow_gap: 0.0,
            shadow_gap: 0.0,
            version_mark: false,
            rune_key: false,
            rivet_dots: false,
        }
    }
}

impl DesignTokens {
    /// Tokens for a style, scaled by the derived wall thickness
    pub fn from_style(style: DesignStyle, wall: f64) -> Self {
        use TokenParam::{Number, Text};

        let base = Self::default();
        match style {
            DesignStyle::Nordic => Self {
                radius_outer: 5.0,
                radius_inner: wall * 0.6,
                handle_profile: HandleProfile::HiddenBottom,
                handle_inner_radius: 3.0,
                handle_width: 60.0,
                handle_height: 12.0,
                label_frame_style: LabelFrameStyle::Flush,
                label_frame_width: 2.0,
                ..base
            },
            DesignStyle::Techno => Self {
                radius_outer: 0.0,
                radius_inner: 2.0,
                chamfer: 2.0,
                groove_width: 0.8,
                groove_depth: 0.5,
                pattern_type: TokenPattern::Lines,
                pattern_params: params([("spacing", Number(10.0)), ("angle", Number(0.0))]),
                handle_profile: HandleProfile::HorizontalSlot,
                handle_inner_radius: 2.0,
                handle_width: 80.0,
                handle_height: 10.0,
                label_frame_style: LabelFrameStyle::Recessed,
                label_frame_width: 1.5,
                shadow_gap: 0.3,
                ..base
            },
            DesignStyle::Bauhaus => Self {
                radius_outer: 2.0,
                radius_inner: wall * 0.5,
                groove_width: 1.0,
                groove_depth: 0.6,
                pattern_type: TokenPattern::Lines,
                pattern_params: params([("spacing", Number(10.0)), ("angle", Number(0.0))]),
                handle_profile: HandleProfile::Pinch,
                handle_inner_radius: 2.5,
                handle_width: 60.0,
                handle_height: 12.0,
                label_frame_style: LabelFrameStyle::Raised,
                label_frame_width: 3.0,
                ..base
            },
            DesignStyle::Organic => Self {
                radius_outer: (wall * 5.0).min(15.0),
                radius_inner: wall * 0.8,
                pattern_type: TokenPattern::Wave,
                pattern_params: params([("amplitude", Number(1.5)), ("period", Number(20.0))]),
                handle_profile: HandleProfile::Wave,
                handle_inner_radius: 4.0,
                handle_width: 70.0,
                handle_height: 15.0,
                label_frame_style: LabelFrameStyle::Flush,
                label_frame_width: 2.5,
                ..base
            },
            DesignStyle::Parametric => Self {
                radius_outer: 8.0,
                radius_inner: wall * 0.7,
                pattern_type: TokenPattern::SineWave,
                pattern_params: params([
                    ("amplitude", Number(1.5)),
                    ("period", Number(20.0)),
                    ("phase", Number(0.0)),
                ]),
                handle_profile: HandleProfile::Hook,
                handle_inner_radius: 3.0,
                handle_width: 60.0,
                handle_height: 20.0,
                label_frame_style: LabelFrameStyle::Flush,
                label_frame_width: 2.0,
                ..base
            },
            // Touch latch, no visible handle
            DesignStyle::Stealth => Self {
                radius_outer: 0.0,
                radius_inner: 1.5,
                chamfer: 1.0,
                handle_profile: HandleProfile::Invisible,
                handle_inner_radius: 2.0,
                handle_width: 0.0,
                handle_height: 0.0,
                label_frame_style: LabelFrameStyle::Recessed,
                label_frame_width: 1.0,
                shadow_gap: 0.3,
                ..base
            },
            // Two-step chamfer, runes in a single zone, inset grooves only
            DesignStyle::Belovodie => Self {
                radius_outer: 5.0,
                radius_inner: wall * 0.7,
                chamfer: 1.2,
                chamfer_secondary: 0.4,
                chamfer_secondary_angle: 22.0,
                groove_width: 0.8,
                groove_depth: 0.35,
                pattern_type: TokenPattern::Runes,
                pattern_params: params([
                    ("motif", Text("chevron_rune")),
                    ("spacing", Number(8.0)),
                    ("band_height", Number(14.0)),
                    ("band_position", Text("back_edge")),
                ]),
                handle_profile: HandleProfile::HiddenHookRune,
                handle_inner_radius: 2.5,
                handle_tactile_mark: true,
                handle_width: 60.0,
                handle_height: 12.0,
                label_frame_style: LabelFrameStyle::RecessedPortal,
                label_frame_width: 2.0,
                label_shadow_gap: 0.3,
                shadow_gap: 0.4,
                version_mark: true,
                rune_key: true,
                rivet_dots: true,
            },
        }
    }

    /// Simplify for draft prints; normal and premium keep every detail
    pub fn apply_print_mode(self, mode: PrintMode) -> Self {
        match mode {
            PrintMode::Draft => Self {
                radius_outer: self.radius_outer,
                radius_inner: self.radius_inner,
                handle_profile: self.handle_profile,
                handle_inner_radius: self.handle_inner_radius,
                handle_width: self.handle_width,
                handle_height: self.handle_height,
                label_frame_width: self.label_frame_width,
                ..Self::default()
            },
            PrintMode::Normal | PrintMode::Premium => self,
        }
    }
}

/// Colorway, motif and hardware bundled by a belovodie preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BelovodieLook {
    pub preset: BelovodiePreset,
    pub body: BelovodieColor,
    pub accent: BelovodieColor,
    pub motif: RunePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PatternPosition>,
    pub handle: HandleProfile,
    pub sealed: bool,
    pub rivet_dots: bool,
    pub rune_key: bool,
}

impl BelovodieLook {
    pub fn of(preset: BelovodiePreset) -> Self {
        let look = |body, accent, motif, position, handle| Self {
            preset,
            body,
            accent,
            motif,
            position,
            handle,
            sealed: false,
            rivet_dots: false,
            rune_key: false,
        };

        match preset {
            BelovodiePreset::Desk => look(
                BelovodieColor::MistWhite,
                BelovodieColor::EmeraldDeep,
                RunePattern::KnotLine,
                Some(PatternPosition::LabelFrame),
                HandleProfile::HiddenHookRune,
            ),
            BelovodiePreset::Workshop => look(
                BelovodieColor::Obsidian,
                BelovodieColor::BronzeWarm,
                RunePattern::ChevronRune,
                Some(PatternPosition::BackEdge),
                HandleProfile::RuneSlot,
            ),
            BelovodiePreset::Med => Self {
                sealed: true,
                ..look(
                    BelovodieColor::StoneSand,
                    BelovodieColor::FrostBlue,
                    RunePattern::None,
                    None,
                    HandleProfile::HiddenHookRune,
                )
            },
            BelovodiePreset::Sacred => Self {
                rivet_dots: true,
                rune_key: true,
                ..look(
                    BelovodieColor::Obsidian,
                    BelovodieColor::BronzeWarm,
                    RunePattern::ChevronRune,
                    Some(PatternPosition::BackEdge),
                    HandleProfile::RuneSlot,
                )
            },
        }
    }

    /// Every belovodie preset in declaration order
    pub fn catalogue() -> Vec<Self> {
        BelovodiePreset::ALL.iter().copied().map(Self::of).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nordic_scales_inner_radius_with_wall() {
        let tokens = DesignTokens::from_style(DesignStyle::Nordic, 2.0);
        assert_eq!(tokens.radius_outer, 5.0);
        assert!((tokens.radius_inner - 1.2).abs() < 1e-9);
        assert_eq!(tokens.handle_profile, HandleProfile::HiddenBottom);
        assert_eq!(tokens.handle_height, 12.0);
        assert!(tokens.pattern_params.is_empty());
    }

    #[test]
    fn organic_outer_radius_is_capped() {
        assert_eq!(DesignTokens::from_style(DesignStyle::Organic, 2.0).radius_outer, 10.0);
        assert_eq!(DesignTokens::from_style(DesignStyle::Organic, 4.0).radius_outer, 15.0);
    }

    #[test]
    fn stealth_has_no_visible_handle() {
        let tokens = DesignTokens::from_style(DesignStyle::Stealth, 2.0);
        assert_eq!(tokens.handle_profile, HandleProfile::Invisible);
        assert_eq!((tokens.handle_width, tokens.handle_height), (0.0, 0.0));
        assert_eq!(tokens.label_frame_style, LabelFrameStyle::Recessed);
    }

    #[test]
    fn belovodie_carries_every_detail() {
        let tokens = DesignTokens::from_style(DesignStyle::Belovodie, 2.0);
        assert_eq!(tokens.chamfer, 1.2);
        assert_eq!(tokens.chamfer_secondary, 0.4);
        assert_eq!(tokens.pattern_type, TokenPattern::Runes);
        assert_eq!(tokens.pattern_params["motif"], TokenParam::Text("chevron_rune"));
        assert_eq!(tokens.pattern_params["band_height"], TokenParam::Number(14.0));
        assert!(tokens.handle_tactile_mark);
        assert!(tokens.version_mark && tokens.rune_key && tokens.rivet_dots);
    }

    #[test]
    fn draft_strips_decoration_but_keeps_handle() {
        let tokens = DesignTokens::from_style(DesignStyle::Belovodie, 2.0)
            .apply_print_mode(PrintMode::Draft);

        assert_eq!(tokens.chamfer, 0.0);
        assert_eq!(tokens.groove_depth, 0.0);
        assert_eq!(tokens.pattern_type, TokenPattern::None);
        assert!(tokens.pattern_params.is_empty());
        assert_eq!(tokens.label_frame_style, LabelFrameStyle::Flush);
        assert_eq!(tokens.shadow_gap, 0.0);
        assert_eq!(tokens.label_shadow_gap, 0.0);
        assert!(!tokens.handle_tactile_mark);
        assert!(!tokens.rune_key);

        assert_eq!(tokens.handle_profile, HandleProfile::HiddenHookRune);
        assert_eq!(tokens.handle_inner_radius, 2.5);
        assert!((tokens.radius_inner - 1.4).abs() < 1e-9);
    }

    #[test]
    fn premium_keeps_tokens() {
        let tokens = DesignTokens::from_style(DesignStyle::Techno, 2.0);
        assert_eq!(tokens.clone().apply_print_mode(PrintMode::Premium), tokens);
    }

    #[test]
    fn pattern_params_serialize_as_plain_values() {
        let tokens = DesignTokens::from_style(DesignStyle::Parametric, 2.0);
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json["pattern_type"], "sine_wave");
        assert_eq!(json["pattern_params"]["period"], 20.0);
        assert_eq!(json["handle_profile"], "hook");
    }

    #[test]
    fn belovodie_catalogue_matches_presets() {
        let catalogue = BelovodieLook::catalogue();
        assert_eq!(catalogue.len(), 4);

        let med = BelovodieLook::of(BelovodiePreset::Med);
        assert!(med.sealed);
        assert_eq!(med.position, None);

        let sacred = BelovodieLook::of(BelovodiePreset::Sacred);
        assert_eq!(sacred.handle, HandleProfile::RuneSlot);
        assert!(sacred.rune_key && sacred.rivet_dots);
    }
}
