//! Dispatch of (method, path) pairs to actions.
//!
//! # Responsibilities
//! - Resolve the path shape via the matcher
//! - Look up the method in the table for that shape
//! - Return exactly one action or an explicit rejection
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Explicit rejection rather than silent default

use axum::http::{Method, StatusCode};

use crate::routing::matcher::{PathMatcher, Target};

/// One of the five user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Read(u64),
    Update(u64),
    Delete(u64),
}

impl Action {
    /// Stable name for logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Create => "create",
            Action::Read(_) => "read",
            Action::Update(_) => "update",
            Action::Delete(_) => "delete",
        }
    }
}

/// Why a request was not dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The path addresses nothing.
    NotFound,
    /// The path is known but the method is not served there.
    NotImplemented,
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::NotFound => StatusCode::NOT_FOUND,
            Rejection::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rejection::NotFound => "not_found",
            Rejection::NotImplemented => "not_implemented",
        }
    }
}

/// Maps requests onto actions.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    matcher: PathMatcher,
}

impl Dispatcher {
    pub fn new(matcher: PathMatcher) -> Self {
        Self { matcher }
    }

    /// Pick the action for a request.
    pub fn dispatch(&self, method: &Method, path: &str) -> Result<Action, Rejection> {
        let target = self.matcher.resolve(path).ok_or(Rejection::NotFound)?;

        match (target, method) {
            (Target::Collection, &Method::GET) => Ok(Action::List),
            (Target::Collection, &Method::POST) => Ok(Action::Create),
            (Target::Resource(id), &Method::GET) => Ok(Action::Read(id)),
            (Target::Resource(id), &Method::PUT) => Ok(Action::Update(id)),
            (Target::Resource(id), &Method::DELETE) => Ok(Action::Delete(id)),
            _ => Err(Rejection::NotImplemented),
        }
    }
}
