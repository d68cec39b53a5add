use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use neo_lookup::args::{Cli, Command};
use neo_lookup::catalog::NeoWsClient;
use neo_lookup::config::{resolve_api_key, Config, API_KEY_ENV};
use neo_lookup::logging::{self, LogTarget};
use neo_lookup::lookup::LookupRequest;
use neo_lookup::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_target = if cli.is_interactive() {
        LogTarget::File(logging::log_file_path())
    } else {
        LogTarget::Stderr
    };
    logging::init_tracing(&log_target).context("failed to initialise logging")?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let credential = resolve_api_key(
        cli.api_key.clone(),
        std::env::var(API_KEY_ENV).ok(),
        &config.catalog,
    );
    tracing::info!(source = ?credential.source, "Catalog credential resolved");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = NeoWsClient::new(
        &config.catalog.base_url,
        credential.key,
        config.catalog.timeout(),
    )?;

    let request = match cli.command {
        None => {
            ui::runtime::run(runtime.handle(), Arc::new(client), &config)?;
            return Ok(());
        }
        Some(Command::Lookup { id }) => LookupRequest::by_id(&id),
        Some(Command::Random) => LookupRequest::Random,
    };

    match runtime.block_on(request.run(&client)) {
        Ok(record) => {
            for line in record.display_lines() {
                println!("{}", line);
            }
            Ok(())
        }
        Err(failure) => {
            eprintln!("{}", failure.message());
            eprintln!("{}", failure.detail());
            std::process::exit(1);
        }
    }
}
