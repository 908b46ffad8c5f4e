//! Command-line demo for the todo reducers.
//!
//! Builds a store, applies the actions described by the flags and prints the
//! resulting view.

use clap::Parser;
use redux_todo::cli::{Cli, ids_after};
use redux_todo::{OutputFormat, TodoAction, render, todo_app};
use redux_todo_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = Store::bootstrap(todo_app(), TodoAction::Init);

    store.send_all(cli.replayed_actions()?).await;

    // New ids continue after whatever the replayed actions created.
    let ids = store.state(|s| ids_after(&s.todos)).await?;

    store.send_all(cli.flag_actions(&ids)?).await;
    tracing::info!(actions = store.dispatched(), "Applied actions");

    let state = store.snapshot().await;
    match config.output {
        OutputFormat::Text => println!("{}", render::render_app(&state)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
    }

    Ok(())
}
