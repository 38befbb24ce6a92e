//! The session credential shared by every outbound call.
//!
//! The secret is resolved once at startup and never mutated. It is passed
//! explicitly into the executor on each call; nothing reads it from ambient
//! state.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, COOKIE};
use reqwest::RequestBuilder;

use crate::config::ConfigError;
use crate::models::AuthScheme;

/// Environment variable (and CLI assignment name) holding the secret.
pub const CREDENTIAL_VAR: &str = "MOBI_COOKIE";

/// Name of the Mobi2Go admin session cookie.
pub const SESSION_COOKIE_NAME: &str = "MOBI2GO_ADMIN";

/// Opaque secret used to authenticate outbound calls.
///
/// Cloning is cheap. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: Arc<str>,
}

impl Credential {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Resolve the credential from the environment value and an optional
    /// `MOBI_COOKIE=<value>` command-line assignment. The assignment wins.
    ///
    /// Missing and empty secrets are rejected.
    pub fn resolve(env_value: Option<String>, assignment: Option<&str>) -> Result<Self, ConfigError> {
        let from_arg = match assignment {
            Some(arg) => match arg.split_once('=') {
                Some((name, value)) if name == CREDENTIAL_VAR => Some(value.to_string()),
                _ => {
                    return Err(ConfigError::UnexpectedAssignment(
                        arg.split('=').next().unwrap_or_default().to_string(),
                        CREDENTIAL_VAR,
                    ))
                }
            },
            None => None,
        };

        match from_arg.or(env_value) {
            Some(secret) if !secret.is_empty() => Ok(Self::new(secret)),
            _ => Err(ConfigError::MissingCredential(CREDENTIAL_VAR)),
        }
    }

    /// Resolve from the process environment plus an optional CLI assignment.
    pub fn from_env(assignment: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(CREDENTIAL_VAR).ok(), assignment)
    }

    /// Attach the auth header the scheme calls for.
    ///
    /// An empty secret still produces the (empty-valued) header.
    pub fn authorize(&self, request: RequestBuilder, scheme: AuthScheme) -> RequestBuilder {
        match scheme {
            AuthScheme::Cookie => {
                request.header(COOKIE, format!("{}={}", SESSION_COOKIE_NAME, self.secret))
            }
            AuthScheme::Bearer => {
                request.header(AUTHORIZATION, format!("Bearer {}", self.secret))
            }
            AuthScheme::None => request,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"***REDACTED***")
            .field("len", &self.secret.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_from_env() {
        let credential = Credential::resolve(Some("abc".into()), None).unwrap();
        assert_eq!(credential, Credential::new("abc"));
    }

    #[test]
    fn test_assignment_overrides_env() {
        let credential =
            Credential::resolve(Some("from-env".into()), Some("MOBI_COOKIE=from-arg")).unwrap();
        assert_eq!(credential, Credential::new("from-arg"));
    }

    #[test]
    fn test_assignment_keeps_equals_in_value() {
        let credential = Credential::resolve(None, Some("MOBI_COOKIE=a=b==")).unwrap();
        assert_eq!(credential, Credential::new("a=b=="));
    }

    #[test]
    fn test_missing_credential_is_rejected() {
        assert_eq!(
            Credential::resolve(None, None),
            Err(ConfigError::MissingCredential("MOBI_COOKIE"))
        );
    }

    #[test]
    fn test_empty_credential_is_rejected() {
        assert_eq!(
            Credential::resolve(Some(String::new()), None),
            Err(ConfigError::MissingCredential("MOBI_COOKIE"))
        );
        assert_eq!(
            Credential::resolve(Some("env".into()), Some("MOBI_COOKIE=")),
            Err(ConfigError::MissingCredential("MOBI_COOKIE"))
        );
    }

    #[test]
    fn test_other_assignment_is_rejected() {
        assert_eq!(
            Credential::resolve(Some("env".into()), Some("API_KEY=xyz")),
            Err(ConfigError::UnexpectedAssignment("API_KEY".into(), "MOBI_COOKIE"))
        );
        assert!(Credential::resolve(None, Some("no-equals-sign")).is_err());
    }

    fn header_of(scheme: AuthScheme, secret: &str, name: reqwest::header::HeaderName) -> Option<String> {
        let request = reqwest::Client::new().get("http://localhost/api/1/orders");
        Credential::new(secret)
            .authorize(request, scheme)
            .build()
            .unwrap()
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[test]
    fn test_authorize_per_scheme() {
        assert_eq!(
            header_of(AuthScheme::Cookie, "abc", COOKIE).as_deref(),
            Some("MOBI2GO_ADMIN=abc")
        );
        assert_eq!(
            header_of(AuthScheme::Bearer, "abc", AUTHORIZATION).as_deref(),
            Some("Bearer abc")
        );
        assert_eq!(header_of(AuthScheme::None, "abc", COOKIE), None);
        assert_eq!(header_of(AuthScheme::None, "abc", AUTHORIZATION), None);
    }

    #[test]
    fn test_empty_secret_keeps_cookie_header() {
        assert_eq!(
            header_of(AuthScheme::Cookie, "", COOKIE).as_deref(),
            Some("MOBI2GO_ADMIN=")
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", Credential::new("super-secret-cookie"));
        assert!(!rendered.contains("super-secret-cookie"));
        assert!(rendered.contains("REDACTED"));
    }
}
