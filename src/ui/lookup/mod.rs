mod intent;
mod reducer;
mod state;

pub use intent::LookupIntent;
pub use reducer::LookupReducer;
pub use state::{LookupScreenState, RequestToken, ViewState};
