use crate::config::Webhook;
use crate::error::{FeedError, FeedResult};
use crate::timestamp::HourBucket;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// `value1..value3` as query parameters
    Get,
    /// `value1..value3` as a JSON body
    #[default]
    Post,
}

impl Transport {
    pub fn method(&self) -> &'static str {
        match self {
            Transport::Get => "GET",
            Transport::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RowPayload {
    pub value1: String,
    pub value2: String,
    pub value3: String,
}

impl RowPayload {
    pub fn new(bucket: &HourBucket, price: f64, value3: impl Into<String>) -> Self {
        RowPayload {
            value1: bucket.to_string(),
            value2: format!("{:.2}", price),
            value3: value3.into(),
        }
    }
}

#[derive(Clone)]
pub struct WebhookClient {
    pub http: reqwest::Client,
    pub webhook: Webhook,
    pub transport: Transport,
}

impl WebhookClient {
    pub fn new(http: reqwest::Client, webhook: Webhook, transport: Transport) -> Self {
        WebhookClient {
            http,
            webhook,
            transport,
        }
    }

    pub async fn send(&self, row: &RowPayload) -> FeedResult<()> {
        let url = self.webhook.url().clone();
        let request = match self.transport {
            Transport::Get => self.http.get(url).query(row),
            Transport::Post => self.http.post(url).json(row),
        };
        debug!(
            method = self.transport.method(),
            url = %self.webhook.redacted(),
            "delivering row"
        );

        // The key is part of the URL, keep it out of transport errors.
        let resp = request
            .send()
            .await
            .map_err(|err| FeedError::WebhookRequest(err.without_url()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = body_text(resp.text().await);
        Err(FeedError::Delivery {
            method: self.transport.method(),
            status,
            body,
        })
    }
}

fn body_text(read: reqwest::Result<String>) -> String {
    read.unwrap_or_else(|err| format!("<unreadable body: {}>", err.without_url()))
}
