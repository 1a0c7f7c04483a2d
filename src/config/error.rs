#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_saphyr::Error),
    #[error("validation errors:\n{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert_eq!(config_err.to_string(), "io error: file not found");
        assert!(std::error::Error::source(&config_err).is_some());
    }

    #[test]
    fn config_error_validation_multiple() {
        let error = ConfigError::Validation(vec![
            "commands[0]: invalid pattern 'a <b': unclosed angle bracket at position 2"
                .to_string(),
            "http.read_timeout_ms must be greater than 0".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "validation errors:\n  - commands[0]: invalid pattern 'a <b': unclosed angle bracket at position 2\n  - http.read_timeout_ms must be greater than 0"
        );
    }

    #[test]
    fn config_error_from_yaml_error() {
        let result: Result<String, serde_saphyr::Error> = serde_saphyr::from_str("[invalid");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(config_err.to_string().starts_with("yaml parse error:"));
        assert!(std::error::Error::source(&config_err).is_some());
    }
}
