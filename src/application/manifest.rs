//! Print Manifest Use Case
//!
//! Estimates what printing a box takes without building any geometry:
//! 1. List the parts (shell, drawer, dividers, optional test kit)
//! 2. Estimate time and filament per part from its bounding box
//! 3. Sum the totals
//!
//! Numbers are bounding-box estimates, not slicer output.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::services::DerivedConfig;
use crate::error::BoxResult;
use crate::infrastructure::LocalFs;

/// File name written by [`PrintManifest::save`]
pub const MANIFEST_FILE: &str = "print_manifest.yaml";

const MANIFEST_VERSION: &str = "1.0.0";

const SHELL_FRACTION: f64 = 0.15;
const MINUTES_PER_CM3: f64 = 2.0;
const PLA_DENSITY: f64 = 1.24;

const DIVIDER_MINUTES: u32 = 8;
const DIVIDER_GRAMS: f64 = 3.0;
const TEST_KIT_MINUTES: u32 = 10;
const TEST_KIT_GRAMS: f64 = 2.0;

/// Options for the manifest
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Include the tolerance test kit
    pub test_kit: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self { test_kit: true }
    }
}

/// One printable part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintFile {
    pub name: String,
    pub component: String,
    pub material: String,
    pub quantity: u32,
    pub orientation: String,
    pub supports: bool,
    /// Rendered as "15%"
    pub infill: String,
    pub walls: u32,
    pub time: String,
    /// Rendered as "61.4g"
    pub weight: String,
    pub notes: String,
    #[serde(skip)]
    pub minutes: u32,
    #[serde(skip)]
    pub grams: f64,
}

/// Print plan for one box configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintManifest {
    pub model: String,
    pub version: String,
    pub printer: String,
    pub material: String,
    pub created: String,
    pub files: Vec<PrintFile>,
    pub total_time: String,
    pub total_weight: String,
    pub assembly_notes: Vec<String>,
    #[serde(skip)]
    pub total_minutes: u32,
    #[serde(skip)]
    pub total_grams: f64,
}

impl PrintManifest {
    /// Build the manifest for a derived configuration
    pub fn build(derived: &DerivedConfig<'_>, options: &ManifestOptions) -> Self {
        let config = derived.config();
        let material = config.material.as_str().to_string();

        let mut files = Vec::new();

        let shell = PartSpec {
            name: "shell.stl",
            component: "shell",
            orientation: "bottom_down",
            infill: 15,
            walls: 3,
            notes: "Print with brim for adhesion",
        };
        let minutes = estimate_print_time(config.width, config.depth, config.height, shell.infill);
        let grams = estimate_weight(config.width, config.depth, config.height, shell.infill);
        files.push(shell.file(&material, 1, minutes, grams, format_time(minutes), grams));

        let drawer = PartSpec {
            name: "drawer.stl",
            component: "drawer",
            orientation: "front_down",
            infill: 15,
            walls: 3,
            notes: "",
        };
        let (w, d, h) = (derived.drawer_width(), derived.drawer_depth(), derived.drawer_height());
        let minutes = estimate_print_time(w, d, h, drawer.infill);
        let grams = estimate_weight(w, d, h, drawer.infill);
        files.push(drawer.file(&material, 1, minutes, grams, format_time(minutes), grams));

        let (cols, rows) = derived.divider_count();
        let count = cols.saturating_add(rows);
        if count > 0 {
            let dividers = PartSpec {
                name: "divider_*.stl",
                component: "dividers",
                orientation: "flat",
                infill: 20,
                walls: 2,
                notes: "",
            };
            files.push(dividers.file(
                &material,
                count,
                DIVIDER_MINUTES.saturating_mul(count),
                DIVIDER_GRAMS * f64::from(count),
                format!("{DIVIDER_MINUTES}m each"),
                DIVIDER_GRAMS,
            ));
        }

        if options.test_kit {
            let kit = PartSpec {
                name: "test_*.stl",
                component: "test_kit",
                orientation: "flat",
                infill: 20,
                walls: 2,
                notes: "Print first to verify tolerances",
            };
            files.push(kit.file(
                &material,
                1,
                TEST_KIT_MINUTES,
                TEST_KIT_GRAMS,
                format_time(TEST_KIT_MINUTES),
                TEST_KIT_GRAMS,
            ));
        }

        let total_minutes = files
            .iter()
            .fold(0u32, |acc, f| acc.saturating_add(f.minutes));
        let total_grams = round1(files.iter().map(|f| f.grams).sum());

        Self {
            model: format!(
                "Storage Box {:?}x{:?}x{:?} {}",
                config.width,
                config.depth,
                config.height,
                config.design.as_str().to_uppercase()
            ),
            version: MANIFEST_VERSION.to_string(),
            printer: config.printer.as_str().to_string(),
            material,
            created: chrono::Local::now().to_rfc3339(),
            files,
            total_time: format_time(total_minutes),
            total_weight: format!("{total_grams:?}g"),
            assembly_notes: vec![
                "1. Insert drawer into shell".to_string(),
                "2. Snap in dividers (see grid layout)".to_string(),
                "3. Optional: glue magnets into pockets".to_string(),
            ],
            total_minutes,
            total_grams,
        }
    }

    pub fn to_yaml(&self) -> BoxResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Write `print_manifest.yaml` into `dir`, creating it if needed
    pub fn save(&self, dir: &Path) -> BoxResult<PathBuf> {
        let fs = LocalFs::new();
        fs.create_dir_all(dir)?;
        let path = dir.join(MANIFEST_FILE);
        fs.write(&path, &self.to_yaml()?)?;
        tracing::info!(path = %path.display(), files = self.files.len(), "wrote print manifest");
        Ok(path)
    }
}

struct PartSpec {
    name: &'static str,
    component: &'static str,
    orientation: &'static str,
    infill: u32,
    walls: u32,
    notes: &'static str,
}

impl PartSpec {
    fn file(
        &self,
        material: &str,
        quantity: u32,
        minutes: u32,
        grams: f64,
        time: String,
        unit_weight: f64,
    ) -> PrintFile {
        PrintFile {
            name: self.name.to_string(),
            component: self.component.to_string(),
            material: material.to_string(),
            quantity,
            orientation: self.orientation.to_string(),
            supports: false,
            infill: format!("{}%", self.infill),
            walls: self.walls,
            time,
            weight: format!("{unit_weight:?}g"),
            notes: self.notes.to_string(),
            minutes,
            grams,
        }
    }
}

fn shell_volume_cm3(width: f64, depth: f64, height: f64) -> f64 {
    width * depth * height / 1000.0 * SHELL_FRACTION
}

fn infill_factor(infill: u32) -> f64 {
    1.0 + f64::from(infill) / 100.0 * 0.5
}

/// Rough print time in whole minutes
pub fn estimate_print_time(width: f64, depth: f64, height: f64, infill: u32) -> u32 {
    let minutes = shell_volume_cm3(width, depth, height) * MINUTES_PER_CM3 * infill_factor(infill);
    if minutes.is_finite() && minutes > 0.0 {
        minutes as u32
    } else {
        0
    }
}

/// Rough filament weight in grams, one decimal
pub fn estimate_weight(width: f64, depth: f64, height: f64, infill: u32) -> f64 {
    round1(shell_volume_cm3(width, depth, height) * PLA_DENSITY * infill_factor(infill))
}

/// "1h 30m", "2h" or "45m"
pub fn format_time(minutes: u32) -> String {
    let (hours, mins) = (minutes / 60, minutes % 60);
    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BoxConfig;
    use crate::domain::value_objects::DividerLayout;
    use tempfile::tempdir;

    #[test]
    fn format_time_variants() {
        assert_eq!(format_time(45), "45m");
        assert_eq!(format_time(120), "2h");
        assert_eq!(format_time(90), "1h 30m");
        assert_eq!(format_time(0), "0m");
    }

    #[test]
    fn estimates_follow_volume() {
        // 3520 cm3 bounding box, 15% shell, 1.075 infill factor
        assert_eq!(estimate_print_time(200.0, 220.0, 80.0, 15), 1135);
        assert_eq!(estimate_weight(200.0, 220.0, 80.0, 15), 703.8);
        assert_eq!(estimate_print_time(0.0, 0.0, 0.0, 15), 0);
    }

    #[test]
    fn default_box_manifest() {
        let config = BoxConfig::default();
        let manifest = PrintManifest::build(&DerivedConfig::new(&config), &ManifestOptions::default());

        assert_eq!(manifest.model, "Storage Box 200.0x220.0x80.0 NORDIC");
        assert_eq!(manifest.printer, "k1c");
        let components: Vec<_> = manifest.files.iter().map(|f| f.component.as_str()).collect();
        assert_eq!(components, ["shell", "drawer", "dividers", "test_kit"]);

        let shell = &manifest.files[0];
        assert_eq!(shell.time, "18h 55m");
        assert_eq!(shell.weight, "703.8g");
        assert_eq!(shell.infill, "15%");

        let dividers = &manifest.files[2];
        assert_eq!(dividers.time, "8m each");
        assert_eq!(dividers.weight, "3.0g");

        let sum: u32 = manifest.files.iter().map(|f| f.minutes).sum();
        assert_eq!(manifest.total_minutes, sum);
        assert_eq!(manifest.total_time, format_time(sum));
        assert_eq!(manifest.assembly_notes.len(), 3);
    }

    #[test]
    fn no_dividers_and_no_test_kit() {
        let config = BoxConfig {
            dividers: DividerLayout::None,
            ..BoxConfig::default()
        };
        let manifest = PrintManifest::build(
            &DerivedConfig::new(&config),
            &ManifestOptions { test_kit: false },
        );

        let components: Vec<_> = manifest.files.iter().map(|f| f.component.as_str()).collect();
        assert_eq!(components, ["shell", "drawer"]);
    }

    #[test]
    fn fixed_grid_divider_quantity() {
        let config = BoxConfig {
            dividers: DividerLayout::Grid3x3,
            ..BoxConfig::default()
        };
        let manifest = PrintManifest::build(&DerivedConfig::new(&config), &ManifestOptions::default());
        let dividers = manifest
            .files
            .iter()
            .find(|f| f.component == "dividers")
            .unwrap();
        assert_eq!(dividers.quantity, 4);
        assert_eq!(dividers.minutes, 32);
    }

    #[test]
    fn oversized_box_totals_saturate() {
        let config = BoxConfig {
            width: 1e15,
            target_cell_size: (1e-9, 1e-9),
            ..BoxConfig::default()
        };
        let manifest = PrintManifest::build(&DerivedConfig::new(&config), &ManifestOptions::default());

        let dividers = manifest
            .files
            .iter()
            .find(|f| f.component == "dividers")
            .unwrap();
        assert_eq!(dividers.quantity, u32::MAX);
        assert_eq!(dividers.minutes, u32::MAX);
        assert_eq!(manifest.total_minutes, u32::MAX);
        assert_eq!(manifest.total_time, format_time(u32::MAX));
    }

    #[test]
    fn save_writes_yaml_in_key_order() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let config = BoxConfig::default();
        let manifest = PrintManifest::build(&DerivedConfig::new(&config), &ManifestOptions::default());

        let path = manifest.save(&out).unwrap();
        assert_eq!(path, out.join(MANIFEST_FILE));

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("model: Storage Box"));
        assert!(!content.contains("minutes"));

        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&content).unwrap();
        assert_eq!(value["files"][0]["name"].as_str(), Some("shell.stl"));
        assert_eq!(value["total_weight"].as_str(), Some(manifest.total_weight.as_str()));
    }
}
