//! Clearances between mating parts
//!
//! `Tolerances` is the per-fit-class set used by the derivation;
//! `ToleranceProfile` additionally scales by printer calibration.

use serde::Serialize;

use crate::domain::value_objects::{FitClass, MaterialType, PrinterProfile};

const SNAP_FACTOR: f64 = 0.7;
const PRESSFIT_FACTOR: f64 = 0.5;
const LOOSE_FACTOR: f64 = 1.3;

/// Clearance per fit class, in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerances {
    pub slide: f64,
    pub snap: f64,
    pub pressfit: f64,
    pub loose: f64,
}

impl Tolerances {
    /// Derive all fit classes from a sliding clearance
    pub fn from_slide(slide: f64) -> Self {
        Self {
            slide,
            snap: slide * SNAP_FACTOR,
            pressfit: slide * PRESSFIT_FACTOR,
            loose: slide * LOOSE_FACTOR,
        }
    }

    pub fn get(&self, fit: FitClass) -> f64 {
        match fit {
            FitClass::Slide => self.slide,
            FitClass::Snap => self.snap,
            FitClass::Pressfit => self.pressfit,
            FitClass::Loose => self.loose,
        }
    }

    /// (fit class, clearance) pairs in display order
    pub fn entries(&self) -> [(FitClass, f64); 4] {
        [
            (FitClass::Slide, self.slide),
            (FitClass::Snap, self.snap),
            (FitClass::Pressfit, self.pressfit),
            (FitClass::Loose, self.loose),
        ]
    }
}

/// Clearance ladders printed on the calibration test pieces
pub const TEST_KIT_CLEARANCES: [(&str, [f64; 3]); 3] = [
    ("tight", [0.20, 0.25, 0.30]),
    ("normal", [0.25, 0.30, 0.35]),
    ("loose", [0.35, 0.40, 0.45]),
];

/// Material and printer specific clearances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceProfile {
    pub material: MaterialType,
    pub printer: PrinterProfile,
}

impl ToleranceProfile {
    pub fn new(material: MaterialType, printer: PrinterProfile) -> Self {
        Self { material, printer }
    }

    pub fn base(&self) -> f64 {
        self.material.base_tolerance()
    }

    pub fn modifier(&self) -> f64 {
        self.printer.modifier()
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances::from_slide(self.base() * self.modifier())
    }

    pub fn for_clearance(&self, fit: FitClass) -> f64 {
        self.tolerances().get(fit)
    }

    /// Lookup by fit name; unknown names fall back to the sliding fit
    pub fn for_clearance_name(&self, name: &str) -> f64 {
        self.for_clearance(name.parse().unwrap_or(FitClass::Slide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tolerances_scale_from_slide() {
        let t = Tolerances::from_slide(0.4);
        assert!(approx(t.snap, 0.28));
        assert!(approx(t.pressfit, 0.2));
        assert!(approx(t.loose, 0.52));
        assert_eq!(t.get(FitClass::Slide), 0.4);
    }

    #[test]
    fn profile_applies_printer_modifier() {
        let generic = ToleranceProfile::new(MaterialType::HyperPla, PrinterProfile::GenericFdm);
        assert!(approx(generic.tolerances().slide, 0.33));

        let fine = ToleranceProfile::new(MaterialType::Petg, PrinterProfile::HighDetail);
        assert!(approx(fine.for_clearance(FitClass::Slide), 0.34));
        assert!(approx(fine.for_clearance(FitClass::Pressfit), 0.17));
    }

    #[test]
    fn unknown_fit_name_falls_back_to_slide() {
        let profile = ToleranceProfile::new(MaterialType::Abs, PrinterProfile::CrealityK1c);
        assert!(approx(profile.for_clearance_name("wiggle"), 0.35));
        assert!(approx(profile.for_clearance_name("snap"), 0.245));
    }

    #[test]
    fn test_kit_ladders_are_ascending() {
        for (_, ladder) in TEST_KIT_CLEARANCES {
            assert!(ladder.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
