//! App + request worker end to end, with an in-memory catalog.

mod common;

use common::*;
use neo_lookup::lookup::{FailureCause, LOOKUP_FAILED_MESSAGE, NO_DATA_MESSAGE};
use neo_lookup::ui::app::App;
use neo_lookup::ui::events::AppEvent;
use neo_lookup::ui::lookup::ViewState;
use neo_lookup::ui::worker::{spawn_request_worker, RequestWorker};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const WAIT: Duration = Duration::from_secs(2);

fn start(catalog: Arc<ScriptedCatalog>) -> (App, Receiver<AppEvent>, RequestWorker) {
    let (events_tx, events_rx) = mpsc::channel();
    let (sender, worker) = spawn_request_worker(&Handle::current(), catalog, events_tx);
    let mut app = App::new("test");
    app.set_request_sender(sender);
    (app, events_rx, worker)
}

fn type_query(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.insert_char(ch);
    }
}

/// Feed one settled event into the app. Returns false on timeout.
async fn pump(app: &mut App, events: &Receiver<AppEvent>, timeout: Duration) -> bool {
    match next_event(events, timeout).await {
        Some(AppEvent::CatalogSettled { token, outcome }) => {
            app.on_catalog_settled(token, outcome);
            true
        }
        Some(_) => panic!("unexpected event"),
        None => false,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn submit_loads_record() {
    let catalog = Arc::new(ScriptedCatalog::new().with_record("433", eros()));
    let (mut app, events, _worker) = start(catalog);

    type_query(&mut app, "433");
    assert!(app.submit());
    assert_eq!(app.view(), &ViewState::Loading);

    assert!(pump(&mut app, &events, WAIT).await);
    assert_eq!(app.view(), &ViewState::Loaded(eros()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn not_found_fails_and_releases_loading() {
    let catalog = Arc::new(ScriptedCatalog::new());
    let (mut app, events, _worker) = start(catalog);

    type_query(&mut app, "404");
    app.submit();
    assert!(pump(&mut app, &events, WAIT).await);

    let failure = app.view().failure().copied().unwrap();
    assert_eq!(failure.message(), LOOKUP_FAILED_MESSAGE);
    assert!(!app.view().is_loading());
    assert!(app.can_submit());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn random_pick_is_one_loading_period() {
    let catalog = Arc::new(
        ScriptedCatalog::new()
            .with_listing(&["2000433"])
            .with_record("2000433", eros())
            .with_delay("browse", Duration::from_millis(50)),
    );
    let (mut app, events, _worker) = start(Arc::clone(&catalog));

    app.random_pick();
    assert!(app.view().is_loading());

    assert!(pump(&mut app, &events, WAIT).await);
    assert_eq!(app.view(), &ViewState::Loaded(eros()));
    assert_eq!(catalog.lookups(), vec!["2000433".to_string()]);

    // Both network calls settle through a single event.
    assert!(!pump(&mut app, &events, Duration::from_millis(200)).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn random_pick_on_empty_listing_fails_with_no_data() {
    let catalog = Arc::new(ScriptedCatalog::new().with_listing(&[]));
    let (mut app, events, _worker) = start(catalog);

    app.random_pick();
    assert!(pump(&mut app, &events, WAIT).await);
    assert_eq!(app.view().failure().unwrap().message(), NO_DATA_MESSAGE);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn double_submit_settles_to_one_loaded_state() {
    let catalog = Arc::new(ScriptedCatalog::new().with_record("433", eros()));
    let (mut app, events, _worker) = start(Arc::clone(&catalog));

    type_query(&mut app, "433");
    app.submit();
    app.submit();

    assert!(pump(&mut app, &events, WAIT).await);
    assert!(pump(&mut app, &events, WAIT).await);
    assert_eq!(app.view(), &ViewState::Loaded(eros()));
    assert_eq!(catalog.lookups().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slower_earlier_request_cannot_overwrite_newer_one() {
    let catalog = Arc::new(
        ScriptedCatalog::new()
            .with_record("99942", apophis())
            .with_record("433", eros())
            .with_delay("99942", Duration::from_millis(300)),
    );
    let (mut app, events, _worker) = start(catalog);

    type_query(&mut app, "99942");
    app.submit();
    app.clear_query();
    type_query(&mut app, "433");
    app.submit();

    assert!(pump(&mut app, &events, WAIT).await);
    assert_eq!(app.view(), &ViewState::Loaded(eros()));

    assert!(pump(&mut app, &events, WAIT).await);
    assert_eq!(app.view(), &ViewState::Loaded(eros()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn panicking_request_still_settles() {
    let catalog = Arc::new(ScriptedCatalog::new().panicking_on("boom"));
    let (mut app, events, _worker) = start(catalog);

    type_query(&mut app, "boom");
    app.submit();
    assert!(pump(&mut app, &events, WAIT).await);

    let failure = app.view().failure().copied().unwrap();
    assert_eq!(failure.cause, FailureCause::Interrupted);
    assert_eq!(failure.message(), LOOKUP_FAILED_MESSAGE);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn teardown_cancels_in_flight_requests() {
    let catalog = Arc::new(
        ScriptedCatalog::new()
            .with_record("433", eros())
            .with_delay("433", Duration::from_millis(200)),
    );
    let (mut app, events, worker) = start(Arc::clone(&catalog));

    type_query(&mut app, "433");
    app.submit();
    drop(app);

    assert!(next_event(&events, Duration::from_millis(500)).await.is_none());
    for _ in 0..50 {
        if worker.is_finished() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(worker.is_finished());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn shutdown_aborts_worker() {
    let catalog = Arc::new(
        ScriptedCatalog::new()
            .with_record("433", eros())
            .with_delay("433", Duration::from_millis(200)),
    );
    let (mut app, events, worker) = start(catalog);

    type_query(&mut app, "433");
    app.submit();
    worker.shutdown();

    assert!(next_event(&events, Duration::from_millis(500)).await.is_none());
    assert!(app.view().is_loading());
}
