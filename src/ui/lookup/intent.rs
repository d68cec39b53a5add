use crate::lookup::LookupOutcome;
use crate::ui::lookup::state::RequestToken;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LookupIntent {
    /// Append a character to the query.
    Insert(char),
    /// Delete the last character of the query.
    Backspace,
    ClearQuery,
    /// An action started: show Loading and issue a fresh token.
    Begin,
    /// A request finished. Ignored unless `token` is the latest one.
    Settle {
        token: RequestToken,
        outcome: LookupOutcome,
    },
}

impl Intent for LookupIntent {}
