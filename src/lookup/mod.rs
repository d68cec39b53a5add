//! The two user-facing actions: fetch by identifier and random pick.

mod actions;
mod failure;

pub use actions::{fetch_by_id, random_pick};
pub use failure::{
    FailureCause, FailureKind, LookupFailure, LOOKUP_FAILED_MESSAGE, NO_DATA_MESSAGE,
    RANDOM_PICK_FAILED_MESSAGE,
};

use crate::catalog::{AsteroidRecord, Catalog};

/// Result of running one action to completion.
pub type LookupOutcome = Result<AsteroidRecord, LookupFailure>;

/// An action the screen can start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    ById(String),
    Random,
}

impl LookupRequest {
    /// Lookup for a user-typed identifier, surrounding whitespace removed.
    pub fn by_id(query: &str) -> Self {
        LookupRequest::ById(query.trim().to_string())
    }

    pub async fn run(&self, catalog: &dyn Catalog) -> LookupOutcome {
        match self {
            LookupRequest::ById(id) => fetch_by_id(catalog, id).await,
            LookupRequest::Random => random_pick(catalog).await,
        }
    }

    /// Failure reported when the request never produced an outcome.
    pub fn interrupted(&self) -> LookupFailure {
        let kind = match self {
            LookupRequest::ById(_) => FailureKind::LookupFailed,
            LookupRequest::Random => FailureKind::RandomPickFailed,
        };
        LookupFailure::new(kind, FailureCause::Interrupted)
    }
}
