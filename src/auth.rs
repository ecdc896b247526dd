//! Authentication of remote execution callers.
//!
//! The gateway consumes the [`Authenticator`] trait only. [`TokenAuthenticator`]
//! is an in-memory implementation over Basic credentials (`alias:token`),
//! suitable for embedding and tests.

use std::collections::HashMap;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::request::Session;
use crate::web::Headers;
use crate::Secret;

/// Name of the header carrying credentials.
pub const AUTHORIZATION_HEADER: &str = "authorization";

const MISSING_TOKEN: &str = "Authorization token is not specified";
const UNSUPPORTED_METHOD: &str = "Unsupported auth method";
const INVALID_BASIC: &str = "Invalid basic credentials";
const TOKEN_NOT_FOUND: &str = "Token not found";
const INVALID_CREDENTIALS: &str = "Invalid authorization credentials";

/// Turns request credentials into a [`Session`].
///
/// Errors are plain messages; the gateway forwards them to the caller in a
/// 401 response, so they must not contain credential material.
pub trait Authenticator: Send + Sync {
    /// Authenticates the caller from the request headers.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the credentials are missing,
    /// malformed or unknown.
    fn authenticate_by_header(&self, headers: &Headers) -> Result<Session, String>;
}

impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    fn authenticate_by_header(&self, headers: &Headers) -> Result<Session, String> {
        (**self).authenticate_by_header(headers)
    }
}

/// Credentials decoded from an `Authorization: Basic ...` header.
#[derive(Debug)]
pub struct BasicCredentials {
    alias: String,
    token: Secret<String>,
}

impl BasicCredentials {
    /// Parses the value of an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns `Unsupported auth method` for non-Basic schemes and
    /// `Invalid basic credentials` when the payload is not base64 of
    /// UTF-8 `alias:token` with a non-empty alias.
    ///
    /// # Examples
    ///
    /// ```
    /// use remote_console_gateway::BasicCredentials;
    ///
    /// let creds = BasicCredentials::parse("Basic YWRtaW46czNjcjN0").unwrap();
    /// assert_eq!(creds.alias(), "admin");
    /// assert_eq!(creds.token().expose_secret(), "s3cr3t");
    /// ```
    pub fn parse(header_value: &str) -> Result<Self, String> {
        let value = header_value.trim();
        let (scheme, payload) = value
            .split_once(char::is_whitespace)
            .unwrap_or((value, ""));

        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(UNSUPPORTED_METHOD.to_string());
        }

        let decoded = BASE64
            .decode(payload.trim())
            .map_err(|_| INVALID_BASIC.to_string())?;
        let decoded = String::from_utf8(decoded).map_err(|_| INVALID_BASIC.to_string())?;

        match decoded.split_once(':') {
            Some((alias, token)) if !alias.is_empty() => Ok(Self {
                alias: alias.to_string(),
                token: Secret::new(token.to_string()),
            }),
            _ => Err(INVALID_BASIC.to_string()),
        }
    }

    /// The token alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The token itself.
    pub fn token(&self) -> &Secret<String> {
        &self.token
    }
}

/// Builds an `Authorization` header value for Basic credentials.
///
/// ```
/// use remote_console_gateway::basic_authorization;
///
/// assert_eq!(basic_authorization("admin", "s3cr3t"), "Basic YWRtaW46czNjcjN0");
/// ```
pub fn basic_authorization(alias: &str, token: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{alias}:{token}")))
}

struct AccessToken {
    token: Secret<String>,
    manager: bool,
}

/// In-memory alias → token store.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::{basic_authorization, Authenticator, TokenAuthenticator};
/// use remote_console_gateway::web::Headers;
///
/// let auth = TokenAuthenticator::new().with_token("admin", "s3cr3t", true);
///
/// let mut headers = Headers::new();
/// headers.insert("Authorization", basic_authorization("admin", "s3cr3t"));
///
/// let session = auth.authenticate_by_header(&headers).unwrap();
/// assert!(session.is_manager());
/// ```
#[derive(Default)]
pub struct TokenAuthenticator {
    tokens: HashMap<String, AccessToken>,
}

impl TokenAuthenticator {
    /// Creates an empty store; every request fails authentication.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token and returns the store.
    pub fn with_token(
        mut self,
        alias: impl Into<String>,
        token: impl Into<String>,
        manager: bool,
    ) -> Self {
        self.insert(alias, token, manager);
        self
    }

    /// Registers or replaces a token.
    pub fn insert(&mut self, alias: impl Into<String>, token: impl Into<String>, manager: bool) {
        self.tokens.insert(
            alias.into(),
            AccessToken {
                token: Secret::new(token.into()),
                manager,
            },
        );
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true when no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("aliases", &self.tokens.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Authenticator for TokenAuthenticator {
    fn authenticate_by_header(&self, headers: &Headers) -> Result<Session, String> {
        let header = headers
            .get(AUTHORIZATION_HEADER)
            .ok_or_else(|| MISSING_TOKEN.to_string())?;
        let credentials = BasicCredentials::parse(header)?;

        let stored = self
            .tokens
            .get(credentials.alias())
            .ok_or_else(|| TOKEN_NOT_FOUND.to_string())?;

        if !constant_time_eq(
            stored.token.expose_secret().as_bytes(),
            credentials.token().expose_secret().as_bytes(),
        ) {
            return Err(INVALID_CREDENTIALS.to_string());
        }

        Ok(Session::new(credentials.alias(), stored.manager))
    }
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
