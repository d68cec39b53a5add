use crate::catalog::Catalog;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_request_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the interactive screen until the user quits.
///
/// Catalog requests execute on `runtime`; everything else, including every
/// state transition, happens on the calling thread.
pub fn run(runtime: &Handle, catalog: Arc<dyn Catalog>, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (sender, worker) = spawn_request_worker(runtime, catalog, events.sender());

    let mut app = App::new(config.catalog.host_label());
    app.set_request_sender(sender);
    tracing::info!(catalog = %app.catalog_label(), "Lookup screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Unmount: no catalog response may touch state after this point.
    drop(app);
    worker.shutdown();
    drop(guard);
    tracing::info!("Lookup screen closed");
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::trace!(cols, rows, "Terminal resized");
        }
        AppEvent::CatalogSettled { token, outcome } => {
            app.on_catalog_settled(token, outcome);
        }
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, leaving the lookup screen");
            app.request_quit();
        }
    }
}
