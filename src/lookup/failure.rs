use crate::catalog::CatalogError;

pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch asteroid data. Please try again.";
pub const RANDOM_PICK_FAILED_MESSAGE: &str = "Failed to fetch random asteroid. Please try again.";
pub const NO_DATA_MESSAGE: &str = "No asteroid data available.";

/// Which step failed. Decides the fixed message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    LookupFailed,
    RandomPickFailed,
    NoData,
}

/// Coarse reason shown under the fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    NotFound,
    Unreachable,
    Rejected { status: u16 },
    Malformed,
    EmptyListing,
    /// The request task ended without reporting a result.
    Interrupted,
}

impl From<&CatalogError> for FailureCause {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => FailureCause::NotFound,
            CatalogError::Status { status: 404 } => FailureCause::NotFound,
            CatalogError::Status { status } => FailureCause::Rejected { status: *status },
            CatalogError::Malformed { .. } => FailureCause::Malformed,
            CatalogError::InvalidUrl { .. }
            | CatalogError::Client { .. }
            | CatalogError::Unreachable { .. } => FailureCause::Unreachable,
        }
    }
}

/// User-facing failure. Carries no underlying error, only its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupFailure {
    pub kind: FailureKind,
    pub cause: FailureCause,
}

impl LookupFailure {
    pub fn new(kind: FailureKind, cause: FailureCause) -> Self {
        Self { kind, cause }
    }

    pub fn lookup(err: &CatalogError) -> Self {
        Self::new(FailureKind::LookupFailed, err.into())
    }

    pub fn random_pick(err: &CatalogError) -> Self {
        Self::new(FailureKind::RandomPickFailed, err.into())
    }

    pub fn no_data() -> Self {
        Self::new(FailureKind::NoData, FailureCause::EmptyListing)
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            FailureKind::LookupFailed => LOOKUP_FAILED_MESSAGE,
            FailureKind::RandomPickFailed => RANDOM_PICK_FAILED_MESSAGE,
            FailureKind::NoData => NO_DATA_MESSAGE,
        }
    }

    pub fn detail(&self) -> String {
        match self.cause {
            FailureCause::NotFound => "Asteroid not found.".to_string(),
            FailureCause::Unreachable => "Catalog unreachable, check your connection.".to_string(),
            FailureCause::Rejected { status } => {
                format!("Catalog rejected the request (HTTP {}).", status)
            }
            FailureCause::Malformed => "Catalog sent an unexpected response.".to_string(),
            FailureCause::EmptyListing => "The catalog listing was empty.".to_string(),
            FailureCause::Interrupted => "The request was interrupted.".to_string(),
        }
    }
}
