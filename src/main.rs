mod args;
mod coingecko;
mod config;
mod constants;
mod error;
mod ifttt;
mod run;
mod timestamp;

#[cfg(test)]
mod stub;

use anyhow::Result;
use args::*;
use clap::{Parser, Subcommand};
use coingecko::PriceClient;
use colored::Colorize;
use config::Config;
use error::{FeedError, FeedResult};
use ifttt::WebhookClient;
use tracing_subscriber::EnvFilter;

struct Feeder {
    pub config: Config,
    pub price_client: PriceClient,
    pub webhook_client: Option<WebhookClient>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Fetch the SOL price and log it to the webhook (default)")]
    Log(LogArgs),

    #[command(about = "Fetch the SOL price and print it without logging")]
    Price,
}

#[derive(Parser)]
#[command(about, version)]
struct Args {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging();

    let lookup = |name: &str| std::env::var(name).ok();
    if let Err(err) = dispatch(args, lookup, reqwest::Client::builder()).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn dispatch<F>(args: Args, lookup: F, http: reqwest::ClientBuilder) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    match args.command.unwrap_or_else(|| Commands::Log(LogArgs::default())) {
        Commands::Log(log_args) => {
            let feeder = Feeder::new(Config::resolve(&args.global, lookup)?, http)?;
            feeder.log(log_args).await
        }
        Commands::Price => {
            let feeder = Feeder::new(Config::price_only(&args.global)?, http)?;
            feeder.price().await
        }
    }
}

// Diagnostics go to stderr, stdout only carries the logged row.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl Feeder {
    pub fn new(config: Config, http: reqwest::ClientBuilder) -> FeedResult<Self> {
        let http = http
            .timeout(config.timeout)
            .build()
            .map_err(FeedError::HttpClient)?;
        Ok(Self::with_http(config, http))
    }

    pub fn with_http(config: Config, http: reqwest::Client) -> Self {
        let price_client = PriceClient::new(http.clone(), config.price_url.clone());
        let webhook_client = config
            .webhook
            .clone()
            .map(|webhook| WebhookClient::new(http, webhook, config.transport));
        Self {
            config,
            price_client,
            webhook_client,
        }
    }
}
