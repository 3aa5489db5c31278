use reqwest::StatusCode;

/// The Errors that may occur while logging a price row
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("{0} is not set; export it or pass --webhook-url")]
    MissingCredential(&'static str),

    #[error("invalid url")]
    Url(#[from] url::ParseError),

    #[error("url cannot carry path segments: {0}")]
    UrlBase(String),

    #[error("failed to build http client")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to truncate clock to the hour")]
    Clock(#[from] chrono::RoundingError),

    #[error("price request failed")]
    PriceRequest(#[source] reqwest::Error),

    #[error("quote body is not json")]
    MalformedQuote(#[from] serde_json::Error),

    #[error("quote response has no `{0}` field")]
    MissingQuote(String),

    #[error("quote value is not a finite number: {0}")]
    InvalidQuote(String),

    #[error("webhook request failed")]
    WebhookRequest(#[source] reqwest::Error),

    #[error("IFTTT {method} failed: HTTP status {status}\nResponse: {body}")]
    Delivery {
        method: &'static str,
        status: StatusCode,
        body: String,
    },
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
