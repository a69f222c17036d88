use std::fmt;

#[derive(Debug, Clone)]
pub enum SnaplinkError {
    Config(String),
    StorageBackendNotFound(String),
}

impl SnaplinkError {
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::Config(_) => "E001",
            SnaplinkError::StorageBackendNotFound(_) => "E002",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::Config(_) => "Configuration Error",
            SnaplinkError::StorageBackendNotFound(_) => "Storage Backend Not Found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::Config(msg) => msg,
            SnaplinkError::StorageBackendNotFound(msg) => msg,
        }
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for SnaplinkError {}

// Convenience constructors
impl SnaplinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Config(msg.into())
    }

    pub fn storage_backend_not_found<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::StorageBackendNotFound(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(SnaplinkError::config("x").code(), "E001");
        assert_eq!(SnaplinkError::storage_backend_not_found("x").code(), "E002");
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let err = SnaplinkError::config("SERVER_PORT must be a number");
        assert_eq!(
            err.to_string(),
            "Configuration Error: SERVER_PORT must be a number"
        );
    }

    #[test]
    fn test_message_returns_original_text() {
        let err = SnaplinkError::storage_backend_not_found("unknown backend: redis");
        assert_eq!(err.message(), "unknown backend: redis");
    }
}
