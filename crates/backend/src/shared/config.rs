use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/restaurant.db"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
///
/// `PORT` and `DATABASE_PATH` environment variables win over the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(
        &mut config,
        std::env::var("PORT").ok(),
        std::env::var("DATABASE_PATH").ok(),
    );
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    let cwd_config = std::path::Path::new("config.toml");
    if cwd_config.exists() {
        tracing::info!("Loading config from: {}", cwd_config.display());
        let contents = std::fs::read_to_string(cwd_config)?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, port: Option<String>, db_path: Option<String>) {
    if let Some(port) = port.and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
    if let Some(path) = db_path {
        if !path.is_empty() {
            config.database.path = path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "target/db/restaurant.db");
    }

    #[test]
    fn test_env_overrides() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(
            &mut config,
            Some("8080".to_string()),
            Some("/tmp/orders.db".to_string()),
        );
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "/tmp/orders.db");
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(&mut config, Some("not-a-port".to_string()), Some(String::new()));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "target/db/restaurant.db");
    }
}
