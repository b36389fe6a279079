use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Preferences error: {0}")]
    Preferences(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a single digest fetch. Only ever surfaced as a `FetchOutcome::Failed` message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to reach digest service: {0}")]
    Transport(String),

    #[error("Failed to fetch digest sections")]
    Status(i32),

    #[error("Failed to read digest sections: {0}")]
    Decode(String),
}

impl From<minreq::Error> for FetchError {
    fn from(err: minreq::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("invalid timeout".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid timeout");

        let err = AppError::Preferences("read-only data dir".to_string());
        assert_eq!(err.to_string(), "Preferences error: read-only data dir");
    }

    #[test]
    fn test_status_error_message_is_generic() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "Failed to fetch digest sections"
        );
    }
}
