//! Viewer context - who is making the current request

/// Per-request identity of the caller.
///
/// Built once per request from the credential header and passed explicitly
/// down the call chain. There is no process-wide anonymous sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerContext {
    /// No credential, or a credential that failed verification
    #[default]
    Anonymous,
    /// A verified credential
    Authenticated {
        user_id: i64,
        username: String,
        token: String,
    },
}

impl ViewerContext {
    /// Create an authenticated context
    pub fn authenticated(user_id: i64, username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Authenticated {
            user_id,
            username: username.into(),
            token: token.into(),
        }
    }

    /// Check if the viewer presented a valid credential
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Viewer user id, used for viewer-relative projections
    #[inline]
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::Authenticated { user_id, .. } => Some(*user_id),
            Self::Anonymous => None,
        }
    }

    /// Raw credential as presented by the client
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Anonymous => None,
        }
    }
}
