#[cfg(test)]
mod tests {
    use playplan::db::codec::ParseMode;
    use playplan::db::store::{Store, DEFAULT_FILE_PATH};
    use playplan::libs::activity::Category;
    use playplan::libs::config::{Config, CONFIG_FILE_NAME};
    use playplan::libs::data_storage::DataStorage;
    use playplan::libs::recommendations::{RecommendationEntry, Recommendations};
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide; tests in this file take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points HOME/LOCALAPPDATA at a fresh temporary directory.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parse_mode(), ParseMode::Permissive);
        assert_eq!(config.recommendations(), Recommendations::default());
        assert_eq!(Store::from_config(&config).path(), Path::new(DEFAULT_FILE_PATH));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/family.txt")),
            strict_parsing: Some(true),
            recommendations: Some(vec![RecommendationEntry {
                category: Category::Creative,
                daily: 25,
                weekly: 100,
                monthly: 400,
            }]),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.parse_mode(), ParseMode::Strict);
        assert_eq!(read_config.recommendations().get(Category::Creative).unwrap().daily, 25);
        assert!(read_config.recommendations().get(Category::Physical).is_none());
        assert_eq!(Store::from_config(&read_config).path(), Path::new("/tmp/family.txt"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "strict_parsing": false }"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.strict_parsing, Some(false));
        assert!(config.data_file.is_none());
        assert_eq!(config.recommendations(), Recommendations::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());
        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }
}
