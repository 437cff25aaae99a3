use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "tokengen.config.json";

/// Tokengen configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing .tokens.json snapshot files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory for generated files
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Pixel base used for rem conversion
    #[serde(default = "default_base_font_size")]
    pub base_font_size: f64,

    /// Output formats to emit (e.g., "css", "restyle")
    #[serde(default = "default_emit")]
    pub emit: Vec<String>,
}

fn default_src_dir() -> String {
    "tokens".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_base_font_size() -> f64 {
    16.0
}

fn default_emit() -> Vec<String> {
    vec!["css".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the snapshot source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            base_font_size: default_base_font_size(),
            emit: default_emit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "design",
            "outDir": "build",
            "baseFontSize": 10,
            "emit": ["css", "restyle"]
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.src_dir, "design");
        assert_eq!(config.out_dir, "build");
        assert_eq!(config.base_font_size, 10.0);
        assert_eq!(config.emit, vec!["css", "restyle"]);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.src_dir, "tokens");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.base_font_size, 16.0);
        assert_eq!(config.emit, vec!["css"]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "emit": ["restyle"] }"#).unwrap();
        assert_eq!(config.src_dir, "tokens");
        assert_eq!(config.base_font_size, 16.0);
        assert_eq!(config.emit, vec!["restyle"]);
    }
}
