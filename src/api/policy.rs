//! Per-resource mapping of upstream failures onto HTTP statuses.
//!
//! The two resources do not map failures uniformly, and the differences are
//! inherited behavior the gateway's callers may depend on. Rather than bury
//! them in copy-pasted handlers, each resource declares one [`UpstreamPolicy`]
//! table; changing a mapping is a one-line, reviewable edit.
//!
//! Known inherited oddities, kept deliberately (see DESIGN.md):
//! - a failed article by-id read is a 404, a failed author by-id read a 500;
//! - article creation re-reads the created record, author creation does not;
//! - create/update failures are charged to the caller as 400 even when the
//!   root cause is a backend fault.

use crate::domain::clients::ClientError;
use crate::error::AppError;

/// How one operation's upstream failure is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    BadRequest,
    NotFound,
    Internal,
}

impl FailureClass {
    /// Converts an upstream failure into the response error, carrying the
    /// backend's error text through verbatim.
    pub fn reject(self, err: ClientError) -> AppError {
        match self {
            FailureClass::BadRequest => AppError::bad_request(err.to_string()),
            FailureClass::NotFound => AppError::not_found(err.to_string()),
            FailureClass::Internal => AppError::internal(err.to_string()),
        }
    }
}

/// One resource's complete failure-mapping table.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamPolicy {
    pub create: FailureClass,
    /// Whether creation is followed by a by-id read of the new record so the
    /// caller gets the hydrated resource back.
    pub refetch_after_create: bool,
    /// Class for a failing follow-up read (only reachable when
    /// `refetch_after_create` is set).
    pub hydrate: FailureClass,
    pub fetch: FailureClass,
    pub list: FailureClass,
    pub update: FailureClass,
    /// Delete failures are not-found by convention: deleting the same id
    /// twice reports a miss, not a server fault.
    pub delete: FailureClass,
}

pub const ARTICLE_POLICY: UpstreamPolicy = UpstreamPolicy {
    create: FailureClass::BadRequest,
    refetch_after_create: true,
    hydrate: FailureClass::Internal,
    fetch: FailureClass::NotFound,
    list: FailureClass::Internal,
    update: FailureClass::BadRequest,
    delete: FailureClass::NotFound,
};

pub const AUTHOR_POLICY: UpstreamPolicy = UpstreamPolicy {
    create: FailureClass::BadRequest,
    refetch_after_create: false,
    hydrate: FailureClass::Internal,
    fetch: FailureClass::Internal,
    list: FailureClass::Internal,
    update: FailureClass::BadRequest,
    delete: FailureClass::NotFound,
};
