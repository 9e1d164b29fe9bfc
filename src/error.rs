use thiserror::Error;

/// Everything that can go wrong while driving a pattern demo.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{operation} method not implemented in {type_name}.")]
    NotImplemented {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("Invalid command: '{0}'")]
    InvalidCommand(String),

    #[error("Iterator exhausted: no more items")]
    Exhausted,

    #[error("Missing required field: '{0}'")]
    MissingField(&'static str),

    #[error("No prototype registered under '{0}'")]
    UnknownPrototype(String),

    #[error("Unknown platform: '{0}' (expected 'windows' or 'mac')")]
    UnknownPlatform(String),

    #[error("Unknown pattern: '{0}'")]
    UnknownPattern(String),

    #[error("Invalid demo configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn not_implemented(operation: &'static str, type_name: &'static str) -> Self {
        Self::NotImplemented {
            operation,
            type_name,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message() {
        let err = PatternError::not_implemented("process_payment", "PaymentGateway");
        assert_eq!(
            err.to_string(),
            "process_payment method not implemented in PaymentGateway."
        );
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let err: PatternError = toml::from_str::<toml::Value>("draws = = 3")
            .map_err(PatternError::from)
            .unwrap_err();
        assert!(matches!(err, PatternError::Config(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PatternError = io.into();
        assert!(err.to_string().contains("missing"));
    }
}
