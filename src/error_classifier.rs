use crate::api::error::ApiError;
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Critical: rejected credentials, malformed responses
            ApiError::Http { status, .. } if *status == 401 || *status == 403 => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Server side trouble, usually temporary
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            ApiError::Http { .. } => LogLevel::Warn,

            // Nothing recorded yet for this asset
            ApiError::EmptyMetrics(_) => LogLevel::Info,

            // Network issues
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_auth_failures_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_api_error(&http(403)), LogLevel::Error);
    }

    #[test]
    fn test_server_failures_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(404)), LogLevel::Warn);
    }

    #[test]
    fn test_malformed_body_is_error() {
        let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_api_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
        assert_eq!(
            classifier.classify_api_error(&ApiError::EmptyMetrics("1".into())),
            LogLevel::Info
        );
    }
}
