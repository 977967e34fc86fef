use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Preview error: {0}")]
    Preview(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<printpdf::Error> for AppError {
    fn from(e: printpdf::Error) -> Self {
        AppError::Pdf(format!("{:?}", e))
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Pdf("font missing".to_string());
        assert_eq!(err.to_string(), "PDF error: font missing");

        let err = AppError::Preview("surface gone".to_string());
        assert_eq!(err.to_string(), "Preview error: surface gone");

        let err = AppError::Clipboard("denied".to_string());
        assert_eq!(err.to_string(), "Clipboard error: denied");
    }
}
