//! Calibration kit
//!
//! Plans the print-first test pieces used to tune clearances for a
//! material and printer before committing to a full box.

use serde::Serialize;

use crate::domain::entities::BoxConfig;
use crate::domain::services::{ToleranceProfile, Tolerances, TEST_KIT_CLEARANCES};
use crate::domain::value_objects::{MaterialType, PrinterProfile, WhiskerParams, WhiskerVariant};

const SNAP_TAB_THICKNESSES: [f64; 3] = [0.8, 1.0, 1.2];
const MAGNET_POCKET_DIAMETERS: [f64; 3] = [6.0, 6.1, 6.2];

/// One test piece with the values it sweeps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestPiece {
    pub name: &'static str,
    pub purpose: &'static str,
    /// Swept values in mm
    pub values: Vec<f64>,
}

/// A named clearance ladder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearanceLadder {
    pub name: &'static str,
    pub clearances: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhiskerSample {
    pub variant: WhiskerVariant,
    #[serde(flatten)]
    pub params: WhiskerParams,
}

/// Everything needed to print and read a calibration kit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationKit {
    pub material: MaterialType,
    pub printer: PrinterProfile,
    pub base_tolerance: f64,
    pub printer_modifier: f64,
    pub tolerances: Tolerances,
    pub recommended_slide: f64,
    /// Ladder whose middle rung is closest to the recommended slide
    pub recommended_ladder: &'static str,
    pub ladders: Vec<ClearanceLadder>,
    pub pieces: Vec<TestPiece>,
    pub whiskers: Vec<WhiskerSample>,
}

impl CalibrationKit {
    pub fn for_config(config: &BoxConfig) -> Self {
        Self::new(ToleranceProfile::new(config.material, config.printer))
    }

    pub fn new(profile: ToleranceProfile) -> Self {
        let tolerances = profile.tolerances();
        let slide = tolerances.slide;

        let ladders: Vec<ClearanceLadder> = TEST_KIT_CLEARANCES
            .iter()
            .map(|&(name, clearances)| ClearanceLadder { name, clearances })
            .collect();

        let recommended_ladder = ladders
            .iter()
            .min_by(|a, b| {
                let da = (a.clearances[1] - slide).abs();
                let db = (b.clearances[1] - slide).abs();
                da.total_cmp(&db)
            })
            .map(|ladder| ladder.name)
            .unwrap_or("normal");

        let rail_values = ladders
            .iter()
            .find(|ladder| ladder.name == recommended_ladder)
            .map(|ladder| ladder.clearances.to_vec())
            .unwrap_or_default();

        let pieces = vec![
            TestPiece {
                name: "rail_test",
                purpose: "Rail clearance, pick the smoothest slide",
                values: rail_values,
            },
            TestPiece {
                name: "snap_test",
                purpose: "Snap tab thickness, holds but releases",
                values: SNAP_TAB_THICKNESSES.to_vec(),
            },
            TestPiece {
                name: "magnet_test",
                purpose: "Pocket diameter for 6x3 mm magnets",
                values: MAGNET_POCKET_DIAMETERS.to_vec(),
            },
        ];

        let whiskers = WhiskerVariant::ALL
            .iter()
            .map(|variant| WhiskerSample {
                variant: *variant,
                params: variant.params(),
            })
            .collect();

        Self {
            material: profile.material,
            printer: profile.printer,
            base_tolerance: profile.base(),
            printer_modifier: profile.modifier(),
            tolerances,
            recommended_slide: slide,
            recommended_ladder,
            ladders,
            pieces,
            whiskers,
        }
    }
}
