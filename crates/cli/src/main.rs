//! Aurora CLI - marketplace API examples.
//!
//! # Usage
//!
//! ```bash
//! export TOKEN=...        # required
//! export ENV=sandbox      # optional, selects https://{ENV}.tflapis.com
//!
//! # Search events
//! aurora query-events "Chiefs"
//!
//! # List tickets for an event
//! aurora query-tickets <EVENT_ID>
//!
//! # Autocomplete search
//! aurora query-autocomplete "Taylor Swift"
//!
//! # Checkout through a server-managed cart
//! aurora managed-checkout <LISTING_ID> <QTY> <PRICE> <CURRENCY> [EMAIL] [FIRST] [LAST] ...
//!
//! # Checkout with the cart submitted inline
//! aurora unmanaged-checkout <LISTING_ID> <QTY> <PRICE> <CURRENCY> [EMAIL] [FIRST] [LAST] ...
//! ```
//!
//! Response bodies are printed to stdout as received (`--pretty` re-indents
//! JSON). Logs go to stderr; set `RUST_LOG` to adjust, `AURORA_LOG_JSON` for
//! JSON logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use aurora_client::{ApiConfig, AuroraClient};
use aurora_core::EventId;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::checkout::CheckoutArgs;

#[derive(Parser)]
#[command(name = "aurora")]
#[command(author, version, about = "Aurora marketplace API examples")]
struct Cli {
    /// Re-indent JSON response bodies before printing
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search events by free text (first page, 10 per page)
    QueryEvents {
        /// Search text
        search: String,
    },
    /// List tickets for an event
    QueryTickets {
        /// Event ID
        event_id: EventId,
    },
    /// Autocomplete across events, performers, venues and categories
    QueryAutocomplete {
        /// Search text
        search: String,
    },
    /// Check out through a server-managed cart (create, add item, checkout)
    ManagedCheckout(CheckoutArgs),
    /// Check out with the whole cart submitted in one request
    UnmanagedCheckout(CheckoutArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only response bodies.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aurora=info,aurora_client=info".into());

    let json = std::env::var("AURORA_LOG_JSON").is_ok();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let client = AuroraClient::new(&config)?;

    let body = match cli.command {
        Commands::QueryEvents { search } => client.query_events(&search).await?,
        Commands::QueryTickets { event_id } => client.query_tickets(&event_id).await?,
        Commands::QueryAutocomplete { search } => client.query_autocomplete(&search).await?,
        Commands::ManagedCheckout(args) => commands::checkout::managed(&client, args).await?,
        Commands::UnmanagedCheckout(args) => commands::checkout::unmanaged(&client, args).await?,
    };

    output::print_body(&body, cli.pretty)?;
    Ok(())
}
