use crate::ui::lookup::intent::LookupIntent;
use crate::ui::lookup::state::{LookupScreenState, ViewState};
use crate::ui::mvi::Reducer;

pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupScreenState;
    type Intent = LookupIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LookupIntent::Insert(ch) => {
                state.query.push(ch);
                state
            }
            LookupIntent::Backspace => {
                state.query.pop();
                state
            }
            LookupIntent::ClearQuery => {
                state.query.clear();
                state
            }
            LookupIntent::Begin => state.begin(),
            LookupIntent::Settle { token, outcome } => {
                if !state.accepts(token) {
                    return state;
                }
                state.view = match outcome {
                    Ok(record) => ViewState::Loaded(record),
                    Err(failure) => ViewState::Failed(failure),
                };
                state
            }
        }
    }
}
