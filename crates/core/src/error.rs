use std::path::PathBuf;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown piece shape: {0:?}")]
    UnknownShape(String),
}

/// Errors that can occur when loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("puzzle.words must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: puzzle.words must not be empty"
        );
    }

    #[test]
    fn test_unknown_shape_display() {
        let err = ConfigError::UnknownShape("hexomino".to_string());
        assert_eq!(err.to_string(), "unknown piece shape: \"hexomino\"");
    }

    #[test]
    fn test_dictionary_error_display() {
        let err = DictionaryError::Read {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read dictionary words.txt: missing");
    }
}
