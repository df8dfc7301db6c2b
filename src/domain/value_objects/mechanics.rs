//! Drawer mechanics option sets

use serde::Serialize;

option_set! {
    /// Slide profile between shell and drawer
    RailProfile ("rail profile", default = VProfile) {
        Rectangular => "rectangular",
        /// Self-centering V profile
        VProfile => "v_profile",
        /// Anti-wobble dovetail
        Dovetail => "dovetail",
        /// Rigid T profile
        TSlot => "t_slot",
    }
}

option_set! {
    /// How the drawer sounds when it closes
    SoundProfile ("sound profile", default = SoftClick) {
        /// Soft close with TPU damper
        Silent => "silent",
        SoftClick => "soft_click",
        /// Resonator tab
        MechClick => "mech_click",
    }
}

option_set! {
    /// Anti-wobble mechanism
    AntiWobbleType ("anti-wobble", default = SpringWhisker) {
        None => "none",
        /// Adjustable wedge
        Wedge => "wedge",
        /// Spring whisker insert
        SpringWhisker => "spring_whisker",
    }
}

option_set! {
    /// Spring whisker insert variant
    WhiskerVariant ("whisker variant", default = MedL) {
        SoftS => "soft_s",
        SoftL => "soft_l",
        MedS => "med_s",
        MedL => "med_l",
        FirmS => "firm_s",
        FirmL => "firm_l",
    }
}

/// Physical parameters of a whisker insert
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhiskerParams {
    /// Blade thickness in mm
    pub thickness: f64,
    /// Blade length in mm
    pub length: f64,
    pub stiffness: &'static str,
}

impl WhiskerVariant {
    pub fn params(&self) -> WhiskerParams {
        let (thickness, length, stiffness) = match self {
            WhiskerVariant::SoftS => (0.8, 12.0, "soft"),
            WhiskerVariant::SoftL => (0.8, 18.0, "very_soft"),
            WhiskerVariant::MedS => (1.0, 12.0, "medium"),
            WhiskerVariant::MedL => (1.0, 18.0, "standard"),
            WhiskerVariant::FirmS => (1.2, 12.0, "firm"),
            WhiskerVariant::FirmL => (1.2, 18.0, "very_firm"),
        };
        WhiskerParams {
            thickness,
            length,
            stiffness,
        }
    }
}

option_set! {
    /// Kind of fit between two mating parts
    FitClass ("fit class", default = Slide) {
        /// Drawer on rails
        Slide => "slide",
        /// Snap-fits (tighter)
        Snap => "snap",
        /// Magnets and NFC tags
        Pressfit => "pressfit",
        /// Easy fit
        Loose => "loose",
    }
}
