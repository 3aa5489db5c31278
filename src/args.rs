use crate::constants::{COINGECKO_PRICE_URL, IFTTT_BASE_URL, REQUEST_TIMEOUT_SECS};
use crate::ifttt::Transport;
use clap::{Args, Parser};

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    #[arg(
        long,
        value_name = "PRICE_URL",
        help = "Simple-price endpoint of the quote API",
        default_value = COINGECKO_PRICE_URL,
        global = true
    )]
    pub price_url: String,

    #[arg(
        long,
        value_name = "WEBHOOK_URL",
        help = "Complete webhook URL including event and key. Takes precedence over IFTTT_KEY.",
        global = true
    )]
    pub webhook_url: Option<String>,

    #[arg(
        long,
        value_name = "WEBHOOK_BASE",
        help = "Base URL of the IFTTT Maker service, used with IFTTT_KEY",
        default_value = IFTTT_BASE_URL,
        global = true
    )]
    pub webhook_base: String,

    #[arg(
        long,
        value_name = "EVENT",
        help = "Webhook event name. Overrides IFTTT_EVENT.",
        global = true
    )]
    pub event: Option<String>,

    #[arg(
        long,
        value_enum,
        value_name = "TRANSPORT",
        help = "How the row is delivered: query parameters on a GET, or a JSON body on a POST",
        default_value_t = Transport::Post,
        global = true
    )]
    pub transport: Transport,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Timeout applied to each HTTP request",
        default_value_t = REQUEST_TIMEOUT_SECS,
        global = true
    )]
    pub timeout: u64,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct LogArgs {
    #[arg(
        long,
        value_name = "TEXT",
        help = "Free text sent as value3",
        default_value = ""
    )]
    pub note: String,
}
