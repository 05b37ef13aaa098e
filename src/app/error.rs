use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::StorageUnavailable(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_maps_to_storage() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::StorageUnavailable(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidExpression("unclosed '('".to_string());
        assert_eq!(err.to_string(), "invalid expression: unclosed '('");

        let err = AppError::StorageUnavailable("disk full".to_string());
        assert_eq!(err.to_string(), "storage unavailable: disk full");
    }
}
