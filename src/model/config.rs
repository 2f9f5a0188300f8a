use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "NEURO_SYNC_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Caps on free-form text interpolated into prompts
///
/// Conversations and pasted profiles can be arbitrarily long; anything past
/// the cap is truncated before prompt construction to stay inside model
/// context limits.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PromptLimits {
    #[serde(default = "default_max_conversation_chars")]
    pub max_conversation_chars: usize,
    #[serde(default = "default_max_profile_chars")]
    pub max_profile_chars: usize,
}

fn default_max_conversation_chars() -> usize {
    15_000
}

fn default_max_profile_chars() -> usize {
    15_000
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self {
            max_conversation_chars: default_max_conversation_chars(),
            max_profile_chars: default_max_profile_chars(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub limits: PromptLimits,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub limits: PromptLimits,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: PromptLimits::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let limits = Self::load_config_file(&config_path)
            .map(|cf| cf.limits)
            .unwrap_or_default();

        Self { limits, port, host }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_default() {
        let limits = PromptLimits::default();
        assert_eq!(limits.max_conversation_chars, 15_000);
        assert_eq!(limits.max_profile_chars, 15_000);
    }

    #[test]
    fn test_config_file_partial_yaml() {
        let cf: ConfigFile = serde_yaml::from_str("limits:\n  max_conversation_chars: 500\n")
            .expect("valid yaml");
        assert_eq!(cf.limits.max_conversation_chars, 500);
        assert_eq!(cf.limits.max_profile_chars, 15_000);
    }
}
