//! Configuration management for the campus website editor.
//!
//! Parses `cw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `storage.dir`
//! - `site.college_name`
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [storage]
//! dir = "${CW_DATA_DIR:-.cw}"
//! key = "campus-website-data"
//!
//! [site]
//! college_name = "Springfield University"
//! ```

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override storage directory.
    pub storage_dir: Option<PathBuf>,
    /// Override the college name supplied to editing sessions.
    pub college_name: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cw.toml";

/// Storage key used when `storage.key` is not set.
const DEFAULT_STORAGE_KEY: &str = "campus-website-data";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Storage configuration (directory is a relative string from TOML).
    storage: StorageConfigRaw,
    /// Site configuration.
    pub site: SiteConfig,

    /// Resolved storage configuration (set after loading).
    #[serde(skip)]
    pub storage_resolved: StorageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw storage configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StorageConfigRaw {
    dir: Option<String>,
    key: Option<String>,
}

/// Resolved storage configuration with an absolute directory.
#[derive(Debug, Default)]
pub struct StorageConfig {
    /// Directory holding persisted content.
    pub dir: PathBuf,
    /// Key the content document is stored under.
    pub key: String,
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// College name supplied by the hosting site. Overrides the stored
    /// name for the session when set.
    pub college_name: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`storage.dir`").
        field: String,
        /// Error message (e.g., "${`CW_DATA_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cw.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(dir) = &settings.storage_dir {
            self.storage_resolved.dir.clone_from(dir);
        }
        if let Some(name) = &settings.college_name {
            self.site.college_name = Some(name.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfigRaw::default(),
            site: SiteConfig::default(),
            storage_resolved: StorageConfig {
                dir: base.join(".cw"),
                key: DEFAULT_STORAGE_KEY.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_storage()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 would bind a random port the editor never reports
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate storage configuration.
    fn validate_storage(&self) -> Result<(), ConfigError> {
        cw_storage::validate_key(&self.storage_resolved.key)
            .map_err(|e| ConfigError::Validation(format!("storage.key: {e}")))
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref dir) = self.storage.dir {
            self.storage.dir = Some(expand::expand_env(dir, "storage.dir")?);
        }

        if let Some(ref name) = self.site.college_name {
            self.site.college_name = Some(expand::expand_env(name, "site.college_name")?);
        }

        Ok(())
    }

    /// Resolve the storage directory relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.storage_resolved = StorageConfig {
            dir: config_dir.join(self.storage.dir.as_deref().unwrap_or(".cw")),
            key: self
                .storage
                .key
                .clone()
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.storage_resolved.dir, PathBuf::from("/test/.cw"));
        assert_eq!(config.storage_resolved.key, "campus-website-data");
        assert_eq!(config.site.college_name, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
college_name = "Riverside College"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.college_name.as_deref(), Some("Riverside College"));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[storage]
dir = "data"
key = "preview"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.storage_resolved.dir, PathBuf::from("/project/data"));
        assert_eq!(config.storage_resolved.key, "preview");
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.storage_resolved.dir, PathBuf::from("/project/.cw"));
        assert_eq!(config.storage_resolved.key, "campus-website-data");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cw.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage_resolved.dir, tmp.path().join(".cw"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/cw.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cw.toml");
        std::fs::write(&path, "[server\n").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let settings = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            storage_dir: Some(PathBuf::from("/var/cw")),
            college_name: Some("Host College".to_owned()),
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage_resolved.dir, PathBuf::from("/var/cw"));
        assert_eq!(config.site.college_name.as_deref(), Some("Host College"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.storage_resolved.dir, PathBuf::from("/test/.cw"));
        assert_eq!(config.site.college_name, None);
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("CW_TEST_CONFIG_DIR", "/srv/cw");
            std::env::set_var("CW_TEST_CONFIG_NAME", "Env College");
        }
        let toml = r#"
[storage]
dir = "${CW_TEST_CONFIG_DIR}"

[site]
college_name = "${CW_TEST_CONFIG_NAME}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.storage_resolved.dir, PathBuf::from("/srv/cw"));
        assert_eq!(config.site.college_name.as_deref(), Some("Env College"));
        unsafe {
            std::env::remove_var("CW_TEST_CONFIG_DIR");
            std::env::remove_var("CW_TEST_CONFIG_NAME");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("CW_TEST_CONFIG_MISSING");
        }
        let toml = r#"
[server]
host = "${CW_TEST_CONFIG_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();

        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "server.host"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("server.host cannot be empty"));
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("server.port cannot be 0"));
    }

    #[test]
    fn test_validate_storage_key_with_separator() {
        let mut config = Config::default();
        config.storage_resolved.key = "../escape".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("storage.key"));
    }

    #[test]
    fn test_validate_storage_key_empty() {
        let mut config = Config::default();
        config.storage_resolved.key = String::new();

        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
