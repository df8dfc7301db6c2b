//! Property tests for the YAML document format.

use std::path::Path;

use proptest::prelude::*;

use stowbox::infrastructure::repositories::{from_yaml, to_yaml};

use super::derivation::box_config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a saved document loads back to the same config without warnings.
    #[test]
    fn property_document_round_trips(config in box_config(), with_derived in any::<bool>()) {
        let yaml = to_yaml(&config, with_derived).unwrap();
        let (loaded, warnings) = from_yaml(&yaml, Path::new("prop.yaml")).unwrap();

        prop_assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        prop_assert_eq!(loaded, config);
    }

    /// PROPERTY: arbitrary text never panics the loader.
    #[test]
    fn property_from_yaml_never_panics(content in ".{0,256}") {
        let _ = from_yaml(&content, Path::new("fuzz.yaml"));
    }

    /// PROPERTY: unknown top-level keys are warnings, not errors.
    #[test]
    fn property_unknown_keys_warn(key in "zz_[a-z]{1,8}") {
        let yaml = format!("{key}: 1\n");
        let (_, warnings) = from_yaml(&yaml, Path::new("extra.yaml")).unwrap();
        prop_assert_eq!(warnings.len(), 1);
    }
}
