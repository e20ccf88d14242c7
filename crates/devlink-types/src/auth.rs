//! Authentication snapshot consumed by the route guard.

use serde::{Deserialize, Serialize};

/// Session state owned by the auth slice of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    /// Session not resolved yet.
    fn default() -> Self {
        Self {
            token: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl AuthState {
    /// Resolved session: authenticated iff a non-empty token is present.
    pub fn with_token(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self {
            is_authenticated: token.is_some(),
            token,
            loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let auth = AuthState::default();
        assert!(auth.loading);
        assert!(!auth.is_authenticated);
    }

    #[test]
    fn test_with_token_resolves_session() {
        assert!(AuthState::with_token(Some("abc".to_string())).is_authenticated);

        let blank = AuthState::with_token(Some("  ".to_string()));
        assert!(!blank.is_authenticated);
        assert!(!blank.loading);
        assert_eq!(blank.token, None);
    }
}
