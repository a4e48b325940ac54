#[cfg(test)]
mod tests {
    use proman::libs::config::{BackendConfig, Config, DefaultsConfig};
    use proman::libs::project::Priority;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_config_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.backend.is_none());
        assert!(config.defaults.is_none());
        assert_eq!(config.defaults().priority, Priority::Medium);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_backend_or_bail_fails_without_backend(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.backend_or_bail().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            backend: Some(BackendConfig {
                api_url: "https://api.example.com/v1".to_string(),
                api_key: "key-123".to_string(),
                email: "ana@example.com".to_string(),
            }),
            defaults: Some(DefaultsConfig { priority: Priority::High }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        let backend = loaded.backend_or_bail().unwrap();
        assert_eq!(backend.api_url, "https://api.example.com/v1");
        assert_eq!(backend.email, "ana@example.com");
        assert_eq!(loaded.defaults().priority, Priority::High);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_defaults_fall_back_to_documented_values(_ctx: &mut ConfigTestContext) {
        let config = Config {
            backend: Some(BackendConfig {
                api_url: "https://api.example.com/v1".to_string(),
                api_key: "key-123".to_string(),
                email: "ana@example.com".to_string(),
            }),
            defaults: None,
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert!(loaded.defaults.is_none());
        assert_eq!(loaded.defaults().priority, Priority::Medium);
    }
}
