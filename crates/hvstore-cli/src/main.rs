mod cart;
mod checkout;
mod links;
mod orders;
mod render;
mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hvstore_api::StoreClient;
use hvstore_core::{AppConfig, MemoryStore, Session};
use tracing_subscriber::EnvFilter;

use crate::cart::CartLine;
use crate::checkout::MethodArg;
use crate::orders::OrdersCommands;

#[derive(Debug, Parser)]
#[command(name = "hvstore")]
#[command(about = "Back-office and storefront tools for the hvstore backend")]
struct Cli {
    /// Backend root URL (overrides the configured value)
    #[arg(long, env = "HVSTORE_API_BASE_URL", global = true)]
    api_base_url: Option<String>,

    /// JSON object file standing in for browser storage (token lookup)
    #[arg(long, env = "HVSTORE_SESSION_FILE", global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse orders
    Orders {
        #[command(subcommand)]
        command: OrdersCommands,
    },
    /// Show the statistics page: counters, monthly revenue and top products
    Stats {
        /// Calendar year to chart (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Print the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build a cart and print its totals
    Cart {
        /// Item as `ID:NAME:PRICE[:QTY]`; leave ID empty for products without one
        #[arg(long = "item", value_parser = cart::parse_cart_line)]
        items: Vec<CartLine>,
        /// Remove the item with this cart id after adding
        #[arg(long)]
        remove: Vec<String>,
    },
    /// Resolve a location to a storefront page
    Route {
        /// Absolute URL or `/path?query`
        href: String,
    },
    /// Read a payment return query string
    PaymentReturn {
        /// Query string, with or without the leading `?`
        query: String,
    },
    /// Check out a cart
    Checkout {
        /// Item as `ID:NAME:PRICE[:QTY]`
        #[arg(long = "item", value_parser = cart::parse_cart_line)]
        items: Vec<CartLine>,
        #[arg(long, value_enum, default_value_t = MethodArg::Vnpay)]
        method: MethodArg,
        /// Order id to attach to the payment
        #[arg(long)]
        order_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = hvstore_core::load_app_config()?;
    if let Some(url) = &cli.api_base_url {
        config.api_base_url.clone_from(url);
    }
    if let Some(path) = &cli.session_file {
        config.session_file = Some(path.clone());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let mut session = load_session(&config)?;

    match cli.command {
        Some(Commands::Orders { command }) => {
            let client = build_client(&config, &session)?;
            match command {
                OrdersCommands::List { status } => {
                    orders::run_orders_list(&client, status.as_deref()).await?;
                }
                OrdersCommands::Show { order_id } => {
                    orders::run_orders_show(&client, &order_id).await?;
                }
            }
        }
        Some(Commands::Stats { year, json }) => {
            let client = build_client(&config, &session)?;
            stats::run_stats(&client, year, json).await?;
        }
        Some(Commands::Cart { items, remove }) => {
            cart::run_cart(&mut session, &items, &remove);
        }
        Some(Commands::Route { href }) => links::run_route(&href),
        Some(Commands::PaymentReturn { query }) => links::run_payment_return(&query),
        Some(Commands::Checkout {
            items,
            method,
            order_id,
        }) => {
            let client = build_client(&config, &session)?;
            checkout::run_checkout(&client, &mut session, &items, method.into(), order_id).await;
        }
        None => println!("hvstore: run with --help to list commands"),
    }

    Ok(())
}

/// Storage from the session file, if any, with the configured token on top.
fn load_session(config: &AppConfig) -> anyhow::Result<Session<MemoryStore>> {
    let store = match &config.session_file {
        Some(path) => MemoryStore::load(path)?,
        None => MemoryStore::new(),
    };
    let mut session = Session::new(store);
    if let Some(token) = &config.api_token {
        session.set_auth_token(token.clone());
    }
    Ok(session)
}

fn build_client(config: &AppConfig, session: &Session<MemoryStore>) -> anyhow::Result<StoreClient> {
    let token = session.auth_token();
    if token.is_none() {
        if config.env.requires_token() {
            anyhow::bail!(
                "no bearer token found; set HVSTORE_TOKEN or a session file when HVSTORE_ENV={}",
                config.env
            );
        }
        tracing::info!("no bearer token found; requests are sent unauthenticated");
    }
    Ok(StoreClient::new(config, token)?)
}
