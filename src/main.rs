use anyhow::Context;
use clap::Parser;
use std::io;
use std::sync::Arc;

use unistate::cli::{run_apply, Args, Command};
use unistate::config::Config;
use unistate::counter::counter_store;

fn main() {
    unistate::logging::init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args) {
        tracing::error!(error = %format!("{:#}", err), "Exiting with error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let initial = args.initial_state(&config);
    tracing::info!(?initial, "Starting");

    let store = Arc::new(counter_store(Some(initial)).context("Failed to create store")?);

    match args.command {
        Some(Command::Apply { quiet, actions }) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_apply(
                &store,
                &actions,
                config.defaults.increase_step,
                quiet,
                &mut out,
            )
        }
        None => unistate::ui::run(store, &config).context("Terminal UI failed"),
    }
}
