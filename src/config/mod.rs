use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::api::client::DEFAULT_BASE_URL;
use crate::error::{Result, TrabalhistaError};

const CONFIG_DIR_NAME: &str = ".trabalhista";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable holding the Escavador API token
pub const TOKEN_ENV_VAR: &str = "ESCAVADOR_TOKEN";

/// Value shipped in sample `.env` files; treated as "not configured"
const PLACEHOLDER_TOKEN: &str = "SUA_API_KEY_AQUI";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub escavador: EscavadorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EscavadorConfig {
    /// API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    15
}

impl Default for EscavadorConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Whether a token value is usable (not blank and not the sample placeholder)
pub fn is_usable_token(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && token != PLACEHOLDER_TOKEN
}

/// Load a `.env` file from the current directory, then `~/.trabalhista/.env`.
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    if Path::new(".env").exists() {
        match dotenvy::from_filename(".env") {
            Ok(_) => debug!("Loaded .env file from current directory"),
            Err(e) => warn!("Failed to load .env file: {}", e),
        }
        return;
    }

    if let Ok(dir) = Config::config_path() {
        let home_env = dir.join(".env");
        if home_env.exists() {
            match dotenvy::from_path(&home_env) {
                Ok(_) => debug!("Loaded {}", home_env.display()),
                Err(e) => warn!("Failed to load {}: {}", home_env.display(), e),
            }
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| TrabalhistaError::Config("Could not determine home directory".to_string()))?;

        Ok(home_dir.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file full path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_path()?.join(CONFIG_FILE_NAME))
    }

    /// Initialize configuration directory and file
    pub fn initialize() -> Result<()> {
        let config_dir = Self::config_path()?;

        // Create config directory with restricted permissions
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| TrabalhistaError::Config(format!("Failed to create config directory: {}", e)))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let permissions = fs::Permissions::from_mode(0o700);
                fs::set_permissions(&config_dir, permissions)
                    .map_err(|e| TrabalhistaError::Config(format!("Failed to set directory permissions: {}", e)))?;
            }
        }

        let config_file = Self::config_file_path()?;
        if !config_file.exists() {
            Self::default().write_to(&config_file)?;
            info!("Created default configuration at {}", config_file.display());
        }

        Ok(())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::initialize()?;

        let config_file = Self::config_file_path()?;
        let contents = fs::read_to_string(&config_file)
            .map_err(|e| TrabalhistaError::Config(format!("Failed to read config file: {}", e)))?;

        // An empty file deserializes as YAML null
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents)
            .map_err(|e| TrabalhistaError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        Self::initialize()?;
        self.write_to(&Self::config_file_path()?)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| TrabalhistaError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| TrabalhistaError::Config(format!("Failed to write config file: {}", e)))?;

        // Set file permissions to 0600 on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions)
                .map_err(|e| TrabalhistaError::Config(format!("Failed to set file permissions: {}", e)))?;
        }

        Ok(())
    }

    /// Resolve the API token: explicit value (flag or environment) first, then the config file.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .filter(|t| is_usable_token(t))
            .map(|t| t.trim().to_string())
            .or_else(|| {
                self.escavador
                    .token
                    .as_deref()
                    .filter(|t| is_usable_token(t))
                    .map(|t| t.trim().to_string())
            })
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "escavador.token" => {
                self.escavador.token = Some(value.to_string());
            }
            "escavador.base_url" => {
                url::Url::parse(value)
                    .map_err(|e| TrabalhistaError::Config(format!("Invalid URL '{}': {}", value, e)))?;
                self.escavador.base_url = value.to_string();
            }
            "escavador.timeout" => {
                self.escavador.timeout = value
                    .parse()
                    .map_err(|_| TrabalhistaError::Config(format!("Timeout must be a number of seconds, got '{}'", value)))?;
            }
            _ => {
                return Err(TrabalhistaError::Config(format!("Unknown configuration key: {}", key)));
            }
        }

        self.save()
    }

    /// Get a configuration value by key path
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "escavador.token" => self.escavador.token.clone(),
            "escavador.base_url" => Some(self.escavador.base_url.clone()),
            "escavador.timeout" => Some(self.escavador.timeout.to_string()),
            _ => None,
        }
    }
}
