//! Executes catalog requests off the UI thread.
//!
//! The UI sends [`CatalogRequest`]s over a bounded channel; each request runs
//! as its own task so a newer request is never queued behind an older one.
//! Results come back as [`AppEvent::CatalogSettled`]. When the sending side
//! is dropped (screen teardown) every in-flight request is aborted and no
//! further events are produced.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use crate::catalog::Catalog;
use crate::lookup::LookupRequest;
use crate::ui::events::AppEvent;
use crate::ui::lookup::RequestToken;

/// Depth of the UI → worker queue.
pub const REQUEST_QUEUE_DEPTH: usize = 16;

#[derive(Debug)]
pub struct CatalogRequest {
    pub token: RequestToken,
    pub request: LookupRequest,
}

pub type RequestSender = mpsc::Sender<CatalogRequest>;

/// Handle to the worker task.
pub struct RequestWorker {
    handle: JoinHandle<()>,
}

impl RequestWorker {
    /// Abort the worker and every request it is running.
    pub fn shutdown(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn the worker on `runtime`.
pub fn spawn_request_worker(
    runtime: &Handle,
    catalog: Arc<dyn Catalog>,
    events: Sender<AppEvent>,
) -> (RequestSender, RequestWorker) {
    let (tx, rx) = mpsc::channel(REQUEST_QUEUE_DEPTH);
    let handle = runtime.spawn(run_worker(catalog, rx, events));
    (tx, RequestWorker { handle })
}

async fn run_worker(
    catalog: Arc<dyn Catalog>,
    mut requests: mpsc::Receiver<CatalogRequest>,
    events: Sender<AppEvent>,
) {
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            next = requests.recv() => match next {
                Some(request) => {
                    in_flight.spawn(execute(Arc::clone(&catalog), request, events.clone()));
                }
                None => break,
            },
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(err) = joined {
                    if err.is_panic() {
                        tracing::error!(error = %err, "Catalog request task panicked");
                    }
                }
            }
        }
    }

    if !in_flight.is_empty() {
        tracing::debug!(pending = in_flight.len(), "Aborting in-flight catalog requests");
    }
    in_flight.abort_all();
}

async fn execute(catalog: Arc<dyn Catalog>, request: CatalogRequest, events: Sender<AppEvent>) {
    let CatalogRequest { token, request } = request;
    let fallback = request.interrupted();

    // A panicking request still settles its token, so Loading is released.
    // Cancellation drops the future without unwinding and reports nothing.
    let guard = scopeguard::guard_on_unwind(events, move |events| {
        let _ = events.send(AppEvent::CatalogSettled {
            token,
            outcome: Err(fallback),
        });
    });

    let outcome = request.run(catalog.as_ref()).await;

    let events = scopeguard::ScopeGuard::into_inner(guard);
    if events
        .send(AppEvent::CatalogSettled { token, outcome })
        .is_err()
    {
        tracing::trace!(token = token.value(), "Settled event dropped (UI gone)");
    }
}
