use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatcherConfig {
    /// Directory whose contents count as "the backups".
    pub backup_dir: String,
    /// Seconds between two scans.
    pub poll_interval_secs: u64,
    /// Hours after which the newest backup no longer counts as fresh.
    pub max_age_hours: u64,
    pub follow_symlinks: bool,
    /// Glob patterns; matching paths are skipped entirely.
    pub excludes: Vec<String>,
}

impl WatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_hours.saturating_mul(3600))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub watcher: WatcherConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        let defaults: &str = include_str!("../config/default.toml");
        match ::config::Config::builder()
            .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: backupwacht.toml (in CWD)
        .add_source(::config::File::with_name("backupwacht").required(false));

    if let Ok(custom_path) = std::env::var("BACKUPWACHT_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("BACKUPWACHT").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub(crate) fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    // Server
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    // Warn for privileged ports on Unix-like systems
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    // Watcher
    if cfg.watcher.backup_dir.trim().is_empty() {
        return Err(anyhow::anyhow!("watcher.backup_dir must not be empty"));
    }
    if cfg.watcher.poll_interval_secs == 0 {
        return Err(anyhow::anyhow!("watcher.poll_interval_secs must be > 0"));
    }
    if cfg.watcher.max_age_hours == 0 {
        return Err(anyhow::anyhow!("watcher.max_age_hours must be > 0"));
    }
    for pattern in &cfg.watcher.excludes {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            continue;
        }
        let normalized = trimmed.replace('\\', "/");
        globset::Glob::new(&normalized)
            .map_err(|e| anyhow::anyhow!("invalid watcher.excludes pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
