//! State of the lookup screen.

use crate::catalog::AsteroidRecord;
use crate::lookup::LookupFailure;
use crate::ui::mvi::UiState;

/// Tag attached to each started action.
///
/// Issued by the reducer in strictly increasing order; only the latest
/// token may settle the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What the content area shows. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(AsteroidRecord),
    Failed(LookupFailure),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn record(&self) -> Option<&AsteroidRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LookupFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupScreenState {
    /// Identifier typed by the user.
    pub query: String,
    pub view: ViewState,
    latest_token: RequestToken,
}

impl UiState for LookupScreenState {}

impl LookupScreenState {
    /// Submit is enabled iff the trimmed query is non-empty.
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// True if a settle tagged with `token` would be applied.
    pub fn accepts(&self, token: RequestToken) -> bool {
        token == self.latest_token && self.view.is_loading()
    }

    pub(super) fn begin(self) -> Self {
        Self {
            view: ViewState::Loading,
            latest_token: self.latest_token.next(),
            ..self
        }
    }
}
