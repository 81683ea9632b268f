//! Token authentication for the submission endpoint.
//!
//! The dashboard authenticates submissions with a per-project token carried
//! in a request header. There is no refresh or exchange flow; a token is
//! either configured or it is not.

/// Token provider for submission authentication.
#[derive(Debug, Clone)]
pub enum TokenProvider {
    /// Static token (from config or env).
    Static(String),

    /// No authentication.
    None,
}

impl TokenProvider {
    /// Create a static token provider. An empty token counts as no
    /// authentication.
    pub fn static_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            Self::None
        } else {
            Self::Static(token)
        }
    }

    /// Create from the `AUTH_TOKEN` environment variable. Empty or unset
    /// falls back to no auth.
    pub fn from_env() -> Self {
        match std::env::var("AUTH_TOKEN") {
            Ok(token) if !token.is_empty() => Self::Static(token),
            _ => Self::None,
        }
    }

    /// The configured token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Static(token) => Some(token),
            Self::None => None,
        }
    }

    /// Check if authentication is configured.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for TokenProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_is_authenticated() {
        let provider = TokenProvider::static_token("secret");
        assert!(provider.is_authenticated());
        assert_eq!(provider.token(), Some("secret"));
    }

    #[test]
    fn empty_static_token_is_none() {
        let provider = TokenProvider::static_token("");
        assert!(!provider.is_authenticated());
        assert_eq!(provider.token(), None);
    }

    #[test]
    fn no_auth_has_no_token() {
        let provider = TokenProvider::None;
        assert_eq!(provider.token(), None);
    }
}
