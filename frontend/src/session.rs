use crate::error::ApiError;

/// Outcome of the session check the guard runs on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl SessionStatus {
    /// Folds a validation result into a status. Any failure counts as signed out.
    pub fn from_validation(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => SessionStatus::Authenticated,
            Err(_) => SessionStatus::Unauthenticated,
        }
    }

    /// A resolved status stays put; only `Unknown` takes the new outcome.
    pub fn resolve(self, outcome: SessionStatus) -> Self {
        match self {
            SessionStatus::Unknown => outcome,
            resolved => resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionStatus;
    use crate::error::ApiError;

    #[test]
    fn success_authenticates() {
        assert_eq!(
            SessionStatus::from_validation(&Ok(())),
            SessionStatus::Authenticated
        );
    }

    #[test]
    fn rejection_and_network_errors_fail_closed() {
        let rejected = Err(ApiError::Status {
            status: 401,
            detail: Some("Session expired".to_string()),
        });
        let offline = Err(ApiError::Network("Failed to fetch".to_string()));

        assert_eq!(
            SessionStatus::from_validation(&rejected),
            SessionStatus::Unauthenticated
        );
        assert_eq!(
            SessionStatus::from_validation(&offline),
            SessionStatus::Unauthenticated
        );
    }

    #[test]
    fn resolved_status_never_reverts() {
        let status = SessionStatus::Unknown.resolve(SessionStatus::Authenticated);
        assert_eq!(status, SessionStatus::Authenticated);
        assert_eq!(
            status.resolve(SessionStatus::Unauthenticated),
            SessionStatus::Authenticated
        );
        assert_eq!(
            SessionStatus::Unauthenticated.resolve(SessionStatus::Authenticated),
            SessionStatus::Unauthenticated
        );
    }
}
