#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig, ServerConfig, WatcherConfig};
    use std::env;
    use std::fs;
    use std::time::Duration;

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig { host: "127.0.0.1".into(), port: 8085 },
            watcher: WatcherConfig {
                backup_dir: "/var/backups".into(),
                poll_interval_secs: 10,
                max_age_hours: 24,
                follow_symlinks: false,
                excludes: vec![],
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8085);
        assert_eq!(config.watcher.backup_dir, "/var/backups");
        assert_eq!(config.watcher.poll_interval_secs, 10);
        assert_eq!(config.watcher.max_age_hours, 24);
        assert!(!config.watcher.follow_symlinks);
        assert_eq!(config.watcher.excludes.len(), 0);
        assert!(config::validate(&config).is_ok());
    }

    #[test]
    fn test_duration_helpers() {
        let config = test_config();

        assert_eq!(config.watcher.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.watcher.max_age(), Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_max_age_saturates_for_huge_hours() {
        let mut config = test_config();
        config.watcher.max_age_hours = u64::MAX;

        // Saturates instead of wrapping into a tiny freshness window.
        assert_eq!(config.watcher.max_age(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_invalid_server_port() {
        let mut config = test_config();
        config.server.port = 0;

        let result = config::validate(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid server.port"));
    }

    #[test]
    fn test_empty_backup_dir() {
        let mut config = test_config();
        config.watcher.backup_dir = "   ".into();

        let result = config::validate(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("watcher.backup_dir"));
    }

    #[test]
    fn test_zero_poll_interval() {
        let mut config = test_config();
        config.watcher.poll_interval_secs = 0;

        let result = config::validate(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("watcher.poll_interval_secs"));
    }

    #[test]
    fn test_zero_max_age() {
        let mut config = test_config();
        config.watcher.max_age_hours = 0;

        let result = config::validate(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("watcher.max_age_hours"));
    }

    #[test]
    fn test_broken_exclude_pattern() {
        let mut config = test_config();
        config.watcher.excludes = vec!["[".into()];

        let result = config::validate(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("watcher.excludes"));
    }

    #[test]
    fn test_blank_exclude_entries_are_ignored() {
        let mut config = test_config();
        config.watcher.excludes = vec!["".into(), "   ".into(), "**/tmp/**".into()];

        assert!(config::validate(&config).is_ok());
    }

    // Config precedence in a single test: everything that touches process
    // environment lives here, because tests run in parallel threads.
    #[test]
    fn test_config_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_content = r#"
[server]
port = 7000

[watcher]
backup_dir = "/srv/backups"
"#;
        fs::write(temp_dir.path().join("override.toml"), config_content).unwrap();

        let config_path = temp_dir.path().join("override");
        env::set_var("BACKUPWACHT_CONFIG", config_path.to_str().unwrap());
        env::set_var("BACKUPWACHT__SERVER__PORT", "8888");
        env::set_var("BACKUPWACHT__WATCHER__MAX_AGE_HOURS", "48");

        let config = config::load().unwrap();

        // Environment variables override the file, the file overrides the
        // embedded defaults.
        assert_eq!(config.server.port, 8888);
        assert_eq!(config.watcher.backup_dir, "/srv/backups");
        assert_eq!(config.watcher.max_age_hours, 48);
        assert_eq!(config.watcher.poll_interval_secs, 10);

        // Clean up
        env::remove_var("BACKUPWACHT_CONFIG");
        env::remove_var("BACKUPWACHT__SERVER__PORT");
        env::remove_var("BACKUPWACHT__WATCHER__MAX_AGE_HOURS");
    }
}
