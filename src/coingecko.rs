use crate::constants::{ASSET_ID, USER_AGENT, VS_CURRENCY};
use crate::error::{FeedError, FeedResult};
use reqwest::header;
use serde_json::Value as JsonValue;
use url::Url;

#[derive(Clone)]
pub struct PriceClient {
    pub http: reqwest::Client,
    pub price_url: Url,
}

impl PriceClient {
    pub fn new(http: reqwest::Client, price_url: Url) -> Self {
        PriceClient { http, price_url }
    }

    pub async fn get_sol_price(&self) -> FeedResult<f64> {
        let body = self
            .http
            .get(self.price_url.clone())
            .query(&[("ids", ASSET_ID), ("vs_currencies", VS_CURRENCY)])
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(FeedError::PriceRequest)?
            .text()
            .await
            .map_err(FeedError::PriceRequest)?;

        parse_quote(&body, ASSET_ID, VS_CURRENCY)
    }
}

// {"solana": {"usd": 142.37}}, numeric strings accepted
pub fn parse_quote(body: &str, asset: &str, currency: &str) -> FeedResult<f64> {
    let v: JsonValue = serde_json::from_str(body)?;
    let quotes = v
        .get(asset)
        .ok_or_else(|| FeedError::MissingQuote(asset.to_string()))?;
    let raw = quotes
        .get(currency)
        .ok_or_else(|| FeedError::MissingQuote(format!("{}.{}", asset, currency)))?;

    let price = match raw {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| FeedError::InvalidQuote(raw.to_string()))
}
