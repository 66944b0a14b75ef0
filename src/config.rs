use std::path::Path;

use crate::error::ConfigError;

/// Which controller drives a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Minimax,
    Random,
    Greedy,
}

impl PlayerKind {
    /// Parse a CLI-style name ("human", "minimax", "random", "greedy").
    pub fn parse(name: &str) -> Option<PlayerKind> {
        match name {
            "human" => Some(PlayerKind::Human),
            "minimax" => Some(PlayerKind::Minimax),
            "random" => Some(PlayerKind::Random),
            "greedy" => Some(PlayerKind::Greedy),
            _ => None,
        }
    }
}

/// Search engine settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Plies the minimax search looks ahead.
    pub search_depth: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig { search_depth: 4 }
    }
}

/// Controller assignment for each side.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: PlayerKind,
    pub yellow: PlayerKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::Minimax,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.search_depth == 0 {
            return Err(ConfigError::Validation(
                "ai.search_depth must be >= 1".into(),
            ));
        }
        // Recursion depth and per-move latency both stay small at 8
        if self.ai.search_depth > 8 {
            return Err(ConfigError::Validation(
                "ai.search_depth must be <= 8".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.ai.search_depth, 4);
        assert_eq!(config.players.red, PlayerKind::Human);
        assert_eq!(config.players.yellow, PlayerKind::Minimax);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ai]
search_depth = 6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.search_depth, 6);
        // Other fields should be defaults
        assert_eq!(config.players.yellow, PlayerKind::Minimax);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ai.search_depth, 4);
        assert_eq!(config.players.red, PlayerKind::Human);
    }

    #[test]
    fn test_player_kind_from_toml() {
        let toml_str = r#"
[players]
red = "greedy"
yellow = "random"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.red, PlayerKind::Greedy);
        assert_eq!(config.players.yellow, PlayerKind::Random);
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.ai.search_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.ai.search_depth = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ai.search_depth, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ai]
search_depth = 2

[players]
red = "minimax"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ai.search_depth, 2);
        assert_eq!(config.players.red, PlayerKind::Minimax);
        // Others are defaults
        assert_eq!(config.players.yellow, PlayerKind::Minimax);
    }

    #[test]
    fn test_load_rejects_invalid_depth_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[ai]\nsearch_depth = 0\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_player_kind_parse() {
        assert_eq!(PlayerKind::parse("human"), Some(PlayerKind::Human));
        assert_eq!(PlayerKind::parse("minimax"), Some(PlayerKind::Minimax));
        assert_eq!(PlayerKind::parse("random"), Some(PlayerKind::Random));
        assert_eq!(PlayerKind::parse("greedy"), Some(PlayerKind::Greedy));
        assert_eq!(PlayerKind::parse("expert"), None);
    }
}
