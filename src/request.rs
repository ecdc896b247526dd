/// Metadata about an inbound remote execution request.
///
/// Derived from the raw request without any validation; every field is safe
/// to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    /// Correlation identifier for this request
    pub request_id: String,
    /// Target path of the request
    pub uri: String,
    /// Network origin of the caller
    pub address: String,
}

/// An authenticated caller, produced by an [`Authenticator`](crate::Authenticator).
///
/// Sessions live only for the request that created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    alias: String,
    manager: bool,
}

impl Session {
    /// Creates a session for `alias` with the given privilege.
    pub fn new(alias: impl Into<String>, manager: bool) -> Self {
        Self {
            alias: alias.into(),
            manager,
        }
    }

    /// Alias of the access token that authenticated the caller.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Whether the caller holds manager privilege.
    pub fn is_manager(&self) -> bool {
        self.manager
    }
}
