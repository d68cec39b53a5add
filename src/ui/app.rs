use crate::lookup::{LookupOutcome, LookupRequest};
use crate::ui::lookup::{LookupIntent, LookupReducer, LookupScreenState, RequestToken, ViewState};
use crate::ui::mvi::Reducer;
use crate::ui::worker::{CatalogRequest, RequestSender};

/// Which control receives Enter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Input,
    Submit,
    Random,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Submit,
            Focus::Submit => Focus::Random,
            Focus::Random => Focus::Input,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Input => Focus::Random,
            Focus::Submit => Focus::Input,
            Focus::Random => Focus::Submit,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Query and view state (MVI pattern).
    screen: LookupScreenState,
    /// Channel to the request worker; `None` until the runtime attaches one.
    request_sender: Option<RequestSender>,
    catalog_label: String,
    animation_tick: u8,
}

impl App {
    pub fn new(catalog_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            screen: LookupScreenState::default(),
            request_sender: None,
            catalog_label: catalog_label.into(),
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_request_sender(&mut self, sender: RequestSender) {
        self.request_sender = Some(sender);
    }

    pub fn catalog_label(&self) -> &str {
        &self.catalog_label
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn screen(&self) -> &LookupScreenState {
        &self.screen
    }

    pub fn view(&self) -> &ViewState {
        &self.screen.view
    }

    pub fn query(&self) -> &str {
        &self.screen.query
    }

    pub fn can_submit(&self) -> bool {
        self.screen.can_submit()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.screen.view.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.dispatch(LookupIntent::Insert(ch));
    }

    pub fn backspace(&mut self) {
        self.dispatch(LookupIntent::Backspace);
    }

    pub fn clear_query(&mut self) {
        self.dispatch(LookupIntent::ClearQuery);
    }

    /// Start a lookup for the current query. No-op while the query is blank.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        let request = LookupRequest::by_id(&self.screen.query);
        self.start(request)
    }

    pub fn random_pick(&mut self) -> bool {
        self.start(LookupRequest::Random)
    }

    /// Enter on the focused control.
    pub fn activate_focused(&mut self) -> bool {
        match self.focus {
            Focus::Input | Focus::Submit => self.submit(),
            Focus::Random => self.random_pick(),
        }
    }

    /// Apply a settled request. Outcomes for superseded tokens are dropped.
    pub fn on_catalog_settled(&mut self, token: RequestToken, outcome: LookupOutcome) {
        if !self.screen.accepts(token) {
            tracing::debug!(
                token = token.value(),
                latest = self.screen.latest_token().value(),
                "Discarding stale catalog response"
            );
            return;
        }
        self.dispatch(LookupIntent::Settle { token, outcome });
    }

    fn start(&mut self, request: LookupRequest) -> bool {
        self.dispatch(LookupIntent::Begin);
        self.animation_tick = 0;
        let token = self.screen.latest_token();

        let Some(sender) = &self.request_sender else {
            tracing::warn!(token = token.value(), "No request worker attached");
            let failure = request.interrupted();
            self.dispatch(LookupIntent::Settle {
                token,
                outcome: Err(failure),
            });
            return false;
        };

        let failure = request.interrupted();
        match sender.try_send(CatalogRequest { token, request }) {
            Ok(()) => {
                tracing::debug!(token = token.value(), "Catalog request queued");
                true
            }
            Err(err) => {
                tracing::warn!(token = token.value(), error = %err, "Failed to queue catalog request");
                self.dispatch(LookupIntent::Settle {
                    token,
                    outcome: Err(failure),
                });
                false
            }
        }
    }

    fn dispatch(&mut self, intent: LookupIntent) {
        dispatch_mvi!(self, screen, LookupReducer, intent);
    }
}
