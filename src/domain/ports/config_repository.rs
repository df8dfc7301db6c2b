//! Config repository port - abstracts where box configurations are stored.

use std::path::PathBuf;

use crate::domain::entities::BoxConfig;
use crate::domain::value_objects::ConfigWarning;
use crate::error::BoxResult;

/// Repository trait for named box configurations.
///
/// Abstracts the underlying storage (a directory of YAML documents in
/// production) so commands can be tested against an in-memory store.
pub trait ConfigRepository: Send + Sync {
    /// Persist `config` under `name`, optionally with derived values.
    ///
    /// Returns the location written.
    fn save(&self, config: &BoxConfig, name: &str, include_derived: bool) -> BoxResult<PathBuf>;

    /// Load a named configuration.
    fn load(&self, name: &str) -> BoxResult<BoxConfig> {
        self.load_with_warnings(name).map(|(config, _)| config)
    }

    /// Load a named configuration with version and unknown-key warnings.
    fn load_with_warnings(&self, name: &str) -> BoxResult<(BoxConfig, Vec<ConfigWarning>)>;

    /// Names of every stored configuration, sorted.
    fn list_configs(&self) -> BoxResult<Vec<String>>;

    /// Remove a configuration. Returns whether it existed.
    fn delete(&self, name: &str) -> BoxResult<bool>;

    fn exists(&self, name: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Mock implementation for testing
    #[derive(Default)]
    struct MockConfigRepository {
        configs: Mutex<BTreeMap<String, BoxConfig>>,
    }

    impl ConfigRepository for MockConfigRepository {
        fn save(&self, config: &BoxConfig, name: &str, _include_derived: bool) -> BoxResult<PathBuf> {
            self.configs
                .lock()
                .unwrap()
                .insert(name.to_string(), config.clone());
            Ok(PathBuf::from(format!("mem://{name}")))
        }

        fn load_with_warnings(&self, name: &str) -> BoxResult<(BoxConfig, Vec<ConfigWarning>)> {
            let configs = self.configs.lock().unwrap();
            configs
                .get(name)
                .cloned()
                .map(|c| (c, vec![]))
                .ok_or_else(|| BoxError::ConfigNotFound {
                    path: PathBuf::from(name),
                })
        }

        fn list_configs(&self) -> BoxResult<Vec<String>> {
            Ok(self.configs.lock().unwrap().keys().cloned().collect())
        }

        fn delete(&self, name: &str) -> BoxResult<bool> {
            Ok(self.configs.lock().unwrap().remove(name).is_some())
        }

        fn exists(&self, name: &str) -> bool {
            self.configs.lock().unwrap().contains_key(name)
        }
    }

    #[test]
    fn mock_repository_round_trips_through_default_load() {
        let repo = MockConfigRepository::default();
        let config = BoxConfig::with_dimensions(120.0, 150.0, 60.0);
        repo.save(&config, "small", false).unwrap();

        assert_eq!(repo.load("small").unwrap(), config);
        assert!(repo.exists("small"));
    }

    #[test]
    fn mock_repository_load_fails_for_missing() {
        let repo = MockConfigRepository::default();
        assert!(matches!(
            repo.load("nope"),
            Err(BoxError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn mock_repository_lists_sorted_and_deletes() {
        let repo = MockConfigRepository::default();
        repo.save(&BoxConfig::default(), "zeta", false).unwrap();
        repo.save(&BoxConfig::default(), "alpha", false).unwrap();

        assert_eq!(repo.list_configs().unwrap(), vec!["alpha", "zeta"]);
        assert!(repo.delete("alpha").unwrap());
        assert!(!repo.delete("alpha").unwrap());
    }
}
