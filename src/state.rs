//! Type-state markers for request context progression.
//!
//! A request moves `Unauthed → Authed → Authorized`. Each state carries what
//! the previous check established, and only this crate can construct them,
//! so a context in the `Authorized` state is proof that both checks ran.

use crate::capability::ExecCap;
use crate::request::Session;

/// State of a context whose credentials have not been checked.
#[derive(Debug, Clone, Copy)]
pub struct Unauthed {
    _private: (),
}

impl Unauthed {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// State of a context with a verified session but no privilege check yet.
#[derive(Debug, Clone)]
pub struct Authed {
    pub(crate) session: Session,
}

/// State of a context whose session holds manager privilege.
#[derive(Debug, Clone)]
pub struct Authorized {
    pub(crate) session: Session,
    pub(crate) exec_cap: ExecCap,
}
