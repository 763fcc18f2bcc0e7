use thiserror::Error;

/// Everything that can go wrong while talking to the expense-tracker API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("could not read the response: {0}")]
    Decode(String),
    #[error("could not encode the request: {0}")]
    Encode(String),
}

impl ApiError {
    /// The text to show a user: the server's `detail` when it sent one.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn message_prefers_server_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Invalid credentials".to_string()),
        };

        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn message_falls_back_to_display() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.message(), "request failed with status 500");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.message(), "network error: connection refused");
    }

    #[test]
    fn unauthorized_statuses() {
        assert!(ApiError::Status { status: 401, detail: None }.is_unauthorized());
        assert!(ApiError::Status { status: 403, detail: None }.is_unauthorized());
        assert!(!ApiError::Status { status: 404, detail: None }.is_unauthorized());
        assert!(!ApiError::Network(String::new()).is_unauthorized());
    }
}
