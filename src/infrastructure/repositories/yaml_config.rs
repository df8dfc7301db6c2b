//! YAML Config Repository
//!
//! Implements the ConfigRepository port as a directory of `<name>.yaml`
//! documents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::keys::unknown_key_warnings;
use crate::domain::entities::{
    BoxConfig, DetailsConfig, GeometryConfig, MechanicsConfig, PatternConfig,
};
use crate::domain::ports::ConfigRepository;
use crate::domain::services::{DerivedConfig, Features};
use crate::domain::value_objects::{
    AntiWobbleType, BelovodieColor, BelovodiePreset, ConfigWarning, ConnectionType, DesignStyle,
    DividerLayout, DividerMode, HandleMode, LabelFrameStyle, MaterialType, Mount, PatternPosition,
    PrintMode, PrinterProfile, RailProfile, RunePattern, ShellGeometry, SlopeDirection,
    SmartCartridge, SoundProfile, WhiskerVariant,
};
use crate::error::{BoxError, BoxResult};
use crate::infrastructure::fs::LocalFs;

/// YAML structure version
pub const FORMAT_VERSION: &str = "1.0";
/// Hardware compatibility version
pub const COMPAT_VERSION: &str = "1.0";

const EXTENSION: &str = "yaml";

const KNOWN_KEYS: &[&str] = &[
    "dimensions",
    "width",
    "depth",
    "height",
    "design",
    "style",
    "belovodie_preset",
    "colors",
    "body",
    "accent",
    "material",
    "type",
    "printer",
    "print_mode",
    "mechanics",
    "rail_profile",
    "anti_wobble",
    "whisker_variant",
    "sound_profile",
    "service_channel",
    "dividers",
    "layout",
    "mode",
    "target_cell_size",
    "connection",
    "context",
    "mount",
    "stack_levels",
    "expected_weight",
    "handle",
    "tactile_zone",
    "label",
    "frame_style",
    "smart",
    "cartridge",
    "hub_connector",
    "special",
    "sealed",
    "geometry",
    "shape",
    "slope_angle",
    "slope_direction",
    "maintain_back_vertical",
    "patterns",
    "position",
    "spacing",
    "band_height",
    "groove_depth",
    "groove_width",
    "details",
    "shadow_gap",
    "guide_cones",
    "rune_key",
    "rivet_dots",
    "version_mark",
    "meta",
    "format_version",
    "compat_version",
    "created",
    "description",
];

/// Directory-backed YAML repository
///
/// Stores each configuration as `<config_dir>/<name>.yaml`.
pub struct YamlConfigRepository {
    dir: PathBuf,
    fs: LocalFs,
}

impl YamlConfigRepository {
    pub const DEFAULT_DIR: &'static str = "configs";

    /// Open (and create) the config directory
    pub fn new(dir: impl Into<PathBuf>) -> BoxResult<Self> {
        let repo = Self {
            dir: dir.into(),
            fs: LocalFs::new(),
        };
        repo.fs.create_dir_all(&repo.dir)?;
        Ok(repo)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }
}

impl ConfigRepository for YamlConfigRepository {
    fn save(&self, config: &BoxConfig, name: &str, include_derived: bool) -> BoxResult<PathBuf> {
        let path = self.path_for(name);
        let content = to_yaml(config, include_derived)?;
        self.fs.write(&path, &content)?;
        tracing::info!(path = %path.display(), include_derived, "saved config");
        Ok(path)
    }

    fn load_with_warnings(&self, name: &str) -> BoxResult<(BoxConfig, Vec<ConfigWarning>)> {
        let path = self.path_for(name);
        if !self.fs.exists(&path) {
            return Err(BoxError::ConfigNotFound { path });
        }
        let content = self.fs.read(&path)?;
        let (config, warnings) = from_yaml(&content, &path)?;
        tracing::debug!(
            path = %path.display(),
            warnings = warnings.len(),
            "loaded config"
        );
        Ok((config, warnings))
    }

    fn list_configs(&self) -> BoxResult<Vec<String>> {
        let mut names: Vec<String> = self
            .fs
            .list_with_extension(&self.dir, EXTENSION)?
            .iter()
            .filter_map(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> BoxResult<bool> {
        let path = self.path_for(name);
        if !self.fs.exists(&path) {
            return Ok(false);
        }
        self.fs.remove(&path)?;
        tracing::info!(path = %path.display(), "deleted config");
        Ok(true)
    }

    fn exists(&self, name: &str) -> bool {
        self.fs.exists(&self.path_for(name))
    }
}

/// Render a config as a versioned YAML document
pub fn to_yaml(config: &BoxConfig, include_derived: bool) -> BoxResult<String> {
    let mut doc = BoxDocument::from_config(config);
    doc.meta.created = Some(chrono::Local::now().to_rfc3339());
    if include_derived {
        doc.derived = Some(DerivedDoc::from_config(config));
    }
    Ok(serde_yaml_ng::to_string(&doc)?)
}

/// Parse a YAML document, checking its version tags.
///
/// `file` is only used in errors and warnings.
pub fn from_yaml(content: &str, file: &Path) -> BoxResult<(BoxConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let doc: BoxDocument = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BoxError::InvalidDocument {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings = check_versions(&doc.meta, file)?;
    warnings.extend(unknown_key_warnings(unknown_paths, content, file, KNOWN_KEYS));

    Ok((doc.into_config(), warnings))
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version).trim()
}

fn check_versions(meta: &MetaDoc, file: &Path) -> BoxResult<Vec<ConfigWarning>> {
    if major(&meta.format_version) != major(FORMAT_VERSION) {
        return Err(BoxError::IncompatibleFormat {
            file: file.to_path_buf(),
            found: meta.format_version.clone(),
            expected: FORMAT_VERSION.to_string(),
        });
    }

    let mut warnings = Vec::new();
    if meta.format_version != FORMAT_VERSION {
        warnings.push(version_mismatch(
            "format_version",
            &meta.format_version,
            FORMAT_VERSION,
            file,
        ));
    }
    if meta.compat_version != COMPAT_VERSION {
        warnings.push(version_mismatch(
            "compat_version",
            &meta.compat_version,
            COMPAT_VERSION,
            file,
        ));
    }
    Ok(warnings)
}

fn version_mismatch(
    field: &'static str,
    found: &str,
    expected: &'static str,
    file: &Path,
) -> ConfigWarning {
    tracing::warn!(field, found, expected, file = %file.display(), "version mismatch");
    ConfigWarning::VersionMismatch {
        field,
        found: found.to_string(),
        expected,
        file: file.to_path_buf(),
    }
}

// Document layout. Field order is the on-disk key order.

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct BoxDocument {
    dimensions: DimensionsDoc,
    design: DesignDoc,
    material: MaterialDoc,
    mechanics: MechanicsDoc,
    dividers: DividersDoc,
    connection: ConnectionType,
    context: ContextDoc,
    handle: HandleDoc,
    label: LabelDoc,
    smart: SmartDoc,
    special: SpecialDoc,
    geometry: GeometryDoc,
    patterns: PatternsDoc,
    details: DetailsDoc,
    meta: MetaDoc,
    /// Informational; never read back
    #[serde(
        rename = "_derived",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "discard_derived"
    )]
    derived: Option<DerivedDoc>,
}

fn discard_derived<'de, D>(deserializer: D) -> Result<Option<DerivedDoc>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_yaml_ng::Value::deserialize(deserializer)?;
    Ok(None)
}

impl Default for BoxDocument {
    fn default() -> Self {
        let mut doc = Self::from_config(&BoxConfig::default());
        doc.mechanics.anti_wobble = AntiWobbleDoc::default();
        doc
    }
}

/// Section defaults follow the default config, so a partial section only
/// overrides the keys it names.
macro_rules! section_defaults {
    ($($section:ident: $ty:ty),+ $(,)?) => {
        $(impl Default for $ty {
            fn default() -> Self {
                BoxDocument::from_config(&BoxConfig::default()).$section
            }
        })+
    };
}

section_defaults! {
    dimensions: DimensionsDoc,
    design: DesignDoc,
    material: MaterialDoc,
    dividers: DividersDoc,
    context: ContextDoc,
    handle: HandleDoc,
    label: LabelDoc,
    smart: SmartDoc,
    special: SpecialDoc,
    geometry: GeometryDoc,
    patterns: PatternsDoc,
    details: DetailsDoc,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct DimensionsDoc {
    width: f64,
    depth: f64,
    height: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct DesignDoc {
    style: DesignStyle,
    belovodie_preset: Option<BelovodiePreset>,
    colors: ColorsDoc,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ColorsDoc {
    body: BelovodieColor,
    accent: BelovodieColor,
}

impl Default for ColorsDoc {
    fn default() -> Self {
        DesignDoc::default().colors
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct MaterialDoc {
    #[serde(rename = "type")]
    kind: MaterialType,
    printer: PrinterProfile,
    print_mode: PrintMode,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct MechanicsDoc {
    rail_profile: RailProfile,
    anti_wobble: AntiWobbleDoc,
    sound_profile: SoundProfile,
    service_channel: bool,
}

impl Default for MechanicsDoc {
    fn default() -> Self {
        BoxDocument::default().mechanics
    }
}

/// Anti-wobble is off unless a document asks for it
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct AntiWobbleDoc {
    #[serde(rename = "type")]
    kind: AntiWobbleType,
    whisker_variant: WhiskerVariant,
}

impl Default for AntiWobbleDoc {
    fn default() -> Self {
        Self {
            kind: AntiWobbleType::None,
            whisker_variant: WhiskerVariant::MedL,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct DividersDoc {
    layout: DividerLayout,
    mode: DividerMode,
    target_cell_size: [f64; 2],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ContextDoc {
    mount: Mount,
    stack_levels: u32,
    expected_weight: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct HandleDoc {
    mode: HandleMode,
    tactile_zone: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct LabelDoc {
    frame_style: LabelFrameStyle,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct SmartDoc {
    cartridge: SmartCartridge,
    hub_connector: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct SpecialDoc {
    sealed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct GeometryDoc {
    shape: ShellGeometry,
    slope_angle: f64,
    slope_direction: SlopeDirection,
    maintain_back_vertical: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct PatternsDoc {
    #[serde(rename = "type")]
    kind: RunePattern,
    position: PatternPosition,
    spacing: f64,
    band_height: f64,
    groove_depth: f64,
    groove_width: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct DetailsDoc {
    shadow_gap: f64,
    guide_cones: bool,
    rune_key: bool,
    rivet_dots: bool,
    version_mark: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct MetaDoc {
    format_version: String,
    compat_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<String>,
    description: String,
}

impl Default for MetaDoc {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            compat_version: COMPAT_VERSION.to_string(),
            created: None,
            description: String::new(),
        }
    }
}

/// Derived values written for inspection
#[derive(Debug, Serialize)]
struct DerivedDoc {
    wall_thickness: f64,
    tolerance_slide: f64,
    tolerance_snap: f64,
    inner_width: f64,
    inner_depth: f64,
    drawer_width: f64,
    drawer_depth: f64,
    divider_count: [u32; 2],
    features: Features,
}

impl DerivedDoc {
    fn from_config(config: &BoxConfig) -> Self {
        let derived = DerivedConfig::new(config);
        let tol = derived.tolerances();
        let (cols, rows) = derived.divider_count();
        Self {
            wall_thickness: derived.wall_thickness(),
            tolerance_slide: tol.slide,
            tolerance_snap: tol.snap,
            inner_width: derived.effective_inner_width(),
            inner_depth: derived.effective_inner_depth(),
            drawer_width: derived.drawer_width(),
            drawer_depth: derived.drawer_depth(),
            divider_count: [cols, rows],
            features: derived.features_enabled(),
        }
    }
}

impl BoxDocument {
    fn from_config(c: &BoxConfig) -> Self {
        Self {
            dimensions: DimensionsDoc {
                width: c.width,
                depth: c.depth,
                height: c.height,
            },
            design: DesignDoc {
                style: c.design,
                belovodie_preset: c.belovodie_preset,
                colors: ColorsDoc {
                    body: c.color_body,
                    accent: c.color_accent,
                },
            },
            material: MaterialDoc {
                kind: c.material,
                printer: c.printer,
                print_mode: c.print_mode,
            },
            mechanics: MechanicsDoc {
                rail_profile: c.mechanics.rail_profile,
                anti_wobble: AntiWobbleDoc {
                    kind: c.mechanics.anti_wobble,
                    whisker_variant: c.mechanics.whisker_variant,
                },
                sound_profile: c.mechanics.sound_profile,
                service_channel: c.mechanics.service_channel,
            },
            dividers: DividersDoc {
                layout: c.dividers,
                mode: c.divider_mode,
                target_cell_size: [c.target_cell_size.0, c.target_cell_size.1],
            },
            connection: c.connection,
            context: ContextDoc {
                mount: c.mount,
                stack_levels: c.stack_levels,
                expected_weight: c.expected_weight,
            },
            handle: HandleDoc {
                mode: c.handle_mode,
                tactile_zone: c.handle_tactile_zone,
            },
            label: LabelDoc {
                frame_style: c.label_frame_style,
            },
            smart: SmartDoc {
                cartridge: c.smart_cartridge,
                hub_connector: c.hub_connector,
            },
            special: SpecialDoc { sealed: c.sealed },
            geometry: GeometryDoc {
                shape: c.geometry.shape,
                slope_angle: c.geometry.slope_angle,
                slope_direction: c.geometry.slope_direction,
                maintain_back_vertical: c.geometry.maintain_back_vertical,
            },
            patterns: PatternsDoc {
                kind: c.pattern.kind,
                position: c.pattern.position,
                spacing: c.pattern.spacing,
                band_height: c.pattern.band_height,
                groove_depth: c.pattern.groove_depth,
                groove_width: c.pattern.groove_width,
            },
            details: DetailsDoc {
                shadow_gap: c.details.shadow_gap,
                guide_cones: c.details.guide_cones,
                rune_key: c.details.rune_key,
                rivet_dots: c.details.rivet_dots,
                version_mark: c.details.version_mark,
            },
            meta: MetaDoc {
                description: c.description.clone(),
                ..MetaDoc::default()
            },
            derived: None,
        }
    }

    fn into_config(self) -> BoxConfig {
        let [cell_w, cell_d] = self.dividers.target_cell_size;
        BoxConfig {
            width: self.dimensions.width,
            depth: self.dimensions.depth,
            height: self.dimensions.height,
            design: self.design.style,
            belovodie_preset: self.design.belovodie_preset,
            color_body: self.design.colors.body,
            color_accent: self.design.colors.accent,
            material: self.material.kind,
            printer: self.material.printer,
            print_mode: self.material.print_mode,
            dividers: self.dividers.layout,
            divider_mode: self.dividers.mode,
            target_cell_size: (cell_w, cell_d),
            connection: self.connection,
            stack_levels: self.context.stack_levels,
            mount: self.context.mount,
            expected_weight: self.context.expected_weight,
            handle_mode: self.handle.mode,
            handle_tactile_zone: self.handle.tactile_zone,
            label_frame_style: self.label.frame_style,
            smart_cartridge: self.smart.cartridge,
            hub_connector: self.smart.hub_connector,
            sealed: self.special.sealed,
            geometry: GeometryConfig {
                shape: self.geometry.shape,
                slope_angle: self.geometry.slope_angle,
                slope_direction: self.geometry.slope_direction,
                maintain_back_vertical: self.geometry.maintain_back_vertical,
            },
            mechanics: MechanicsConfig {
                rail_profile: self.mechanics.rail_profile,
                anti_wobble: self.mechanics.anti_wobble.kind,
                whisker_variant: self.mechanics.anti_wobble.whisker_variant,
                sound_profile: self.mechanics.sound_profile,
                service_channel: self.mechanics.service_channel,
            },
            pattern: PatternConfig {
                kind: self.patterns.kind,
                position: self.patterns.position,
                spacing: self.patterns.spacing,
                band_height: self.patterns.band_height,
                groove_depth: self.patterns.groove_depth,
                groove_width: self.patterns.groove_width,
            },
            details: DetailsConfig {
                shadow_gap: self.details.shadow_gap,
                guide_cones: self.details.guide_cones,
                rune_key: self.details.rune_key,
                rivet_dots: self.details.rivet_dots,
                version_mark: self.details.version_mark,
            },
            description: self.meta.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn repo() -> (tempfile::TempDir, YamlConfigRepository) {
        let dir = tempdir().unwrap();
        let repo = YamlConfigRepository::new(dir.path().join("configs")).unwrap();
        (dir, repo)
    }

    #[test]
    fn new_creates_directory() {
        let (dir, repo) = repo();
        assert!(dir.path().join("configs").is_dir());
        assert_eq!(repo.path_for("desk"), dir.path().join("configs/desk.yaml"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (_dir, repo) = repo();
        let mut config = BoxConfig::with_dimensions(150.0, 180.0, 60.0)
            .with_belovodie_preset(BelovodiePreset::Workshop);
        config.mount = Mount::Wall;
        config.target_cell_size = (40.0, 45.0);
        config.description = "tool tray".to_string();

        repo.save(&config, "tray", false).unwrap();
        let (loaded, warnings) = repo.load_with_warnings("tray").unwrap();

        assert!(warnings.is_empty());
        assert_eq!(loaded, config);
    }

    #[test]
    fn document_keys_follow_layout_order() {
        let yaml = to_yaml(&BoxConfig::default(), true).unwrap();
        let top_level: Vec<&str> = yaml
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with('-') && l.contains(':'))
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(
            top_level,
            vec![
                "dimensions",
                "design",
                "material",
                "mechanics",
                "dividers",
                "connection",
                "context",
                "handle",
                "label",
                "smart",
                "special",
                "geometry",
                "patterns",
                "details",
                "meta",
                "_derived",
            ]
        );
        assert!(yaml.contains("belovodie_preset: null"));

        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(value["meta"]["format_version"].as_str(), Some("1.0"));
        assert_eq!(value["mechanics"]["anti_wobble"]["type"].as_str(), Some("spring_whisker"));
    }

    #[test]
    fn created_timestamp_is_rfc3339() {
        let yaml = to_yaml(&BoxConfig::default(), false).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        let created = value["meta"]["created"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
        assert!(value.get("_derived").is_none());
    }

    #[test]
    fn derived_section_is_written_but_ignored_on_load() {
        let (_dir, repo) = repo();
        let path = repo.save(&BoxConfig::default(), "full", true).unwrap();

        let value: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["_derived"]["wall_thickness"].as_f64(), Some(2.0));
        assert_eq!(value["_derived"]["features"]["service_channel"].as_bool(), Some(false));

        let (_, warnings) = repo.load_with_warnings("full").unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_keys_take_load_defaults() {
        let (config, warnings) =
            from_yaml("dimensions:\n  width: 120\n", Path::new("partial.yaml")).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(config.width, 120.0);
        assert_eq!(config.depth, 220.0);
        assert_eq!(config.mechanics.anti_wobble, AntiWobbleType::None);
        assert_eq!(config.mechanics.whisker_variant, WhiskerVariant::MedL);
        assert_eq!(config.label_frame_style, LabelFrameStyle::RecessedPortal);
        assert_eq!(config.target_cell_size, (50.0, 50.0));
    }

    #[test]
    fn partial_anti_wobble_section_defaults_to_none() {
        let (config, _) = from_yaml(
            "mechanics:\n  anti_wobble:\n    whisker_variant: firm_s\n",
            Path::new("partial.yaml"),
        )
        .unwrap();
        assert_eq!(config.mechanics.anti_wobble, AntiWobbleType::None);
        assert_eq!(config.mechanics.whisker_variant, WhiskerVariant::FirmS);
        assert_eq!(config.mechanics.rail_profile, RailProfile::VProfile);
    }

    #[test]
    fn description_comes_from_meta() {
        let (config, _) = from_yaml(
            "meta:\n  description: bathroom shelf\n",
            Path::new("d.yaml"),
        )
        .unwrap();
        assert_eq!(config.description, "bathroom shelf");
    }

    #[test]
    fn minor_version_mismatch_is_a_warning() {
        let (_, warnings) = from_yaml(
            "meta:\n  format_version: '1.3'\n  compat_version: '2.0'\n",
            Path::new("v.yaml"),
        )
        .unwrap();

        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            &warnings[0],
            ConfigWarning::VersionMismatch { field: "format_version", found, .. } if found == "1.3"
        ));
        assert!(matches!(
            &warnings[1],
            ConfigWarning::VersionMismatch { field: "compat_version", .. }
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn version_mismatch_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            from_yaml("meta:\n  compat_version: '2.0'\n", Path::new("old.yaml")).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("version mismatch"));
        assert!(output.contains("compat_version"));
        assert!(output.contains("old.yaml"));
    }

    #[test]
    fn major_format_mismatch_is_an_error() {
        let err = from_yaml("meta:\n  format_version: '2.0'\n", Path::new("new.yaml")).unwrap_err();
        assert!(matches!(err, BoxError::IncompatibleFormat { ref found, .. } if found == "2.0"));
    }

    #[test]
    fn unknown_keys_are_reported_with_suggestion() {
        let (_, warnings) =
            from_yaml("dimensions:\n  widht: 100\n", Path::new("typo.yaml")).unwrap();

        assert_eq!(
            warnings,
            vec![ConfigWarning::UnknownKey {
                key: "dimensions.widht".to_string(),
                file: PathBuf::from("typo.yaml"),
                line: Some(2),
                suggestion: Some("width".to_string()),
            }]
        );
    }

    #[test]
    fn invalid_option_value_is_an_error() {
        let err = from_yaml("material:\n  type: wood\n", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, BoxError::InvalidDocument { .. }));
    }

    #[test]
    fn load_missing_is_config_not_found() {
        let (_dir, repo) = repo();
        assert!(matches!(
            repo.load("ghost"),
            Err(BoxError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn list_and_delete() {
        let (_dir, repo) = repo();
        repo.save(&BoxConfig::default(), "zeta", false).unwrap();
        repo.save(&BoxConfig::default(), "alpha", false).unwrap();
        std::fs::write(repo.dir().join("notes.txt"), "x").unwrap();

        assert_eq!(repo.list_configs().unwrap(), vec!["alpha", "zeta"]);
        assert!(repo.delete("zeta").unwrap());
        assert!(!repo.delete("zeta").unwrap());
        assert_eq!(repo.list_configs().unwrap(), vec!["alpha"]);
    }
}
