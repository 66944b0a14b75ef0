use std::path::PathBuf;

/// Errors that can occur when the search engine is asked for a move.
///
/// Both are caller precondition violations: the game loop is expected to
/// check for open columns and a decided game before asking for a move. The
/// engine reports them instead of returning an arbitrary column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves available")]
    NoLegalMove,

    #[error("position is already decided")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        assert_eq!(SearchError::NoLegalMove.to_string(), "no legal moves available");
        assert_eq!(SearchError::GameOver.to_string(), "position is already decided");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.search_depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.search_depth must be >= 1"
        );
    }
}
