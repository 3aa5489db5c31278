pub const COINGECKO_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const ASSET_ID: &str = "solana";
pub const VS_CURRENCY: &str = "usd";
pub const USER_AGENT: &str = "solpricefeed-bot/1.0 (https://twitter.com/solpricefeed)";

pub const IFTTT_BASE_URL: &str = "https://maker.ifttt.com";
pub const DEFAULT_EVENT: &str = "sol_price_log";

// Environment
pub const KEY_ENV_VAR: &str = "IFTTT_KEY";
pub const EVENT_ENV_VAR: &str = "IFTTT_EVENT";

pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const BUCKET_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
