use crate::args::GlobalArgs;
use crate::constants::{DEFAULT_EVENT, EVENT_ENV_VAR, KEY_ENV_VAR};
use crate::error::{FeedError, FeedResult};
use crate::ifttt::Transport;
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug)]
pub struct Config {
    pub price_url: Url,
    pub timeout: Duration,
    pub transport: Transport,
    pub webhook: Option<Webhook>,
}

impl Config {
    pub fn resolve<F>(args: &GlobalArgs, lookup: F) -> FeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook = match &args.webhook_url {
            Some(raw) => Webhook::from_url(raw)?,
            None => {
                let key = non_empty(lookup(KEY_ENV_VAR))
                    .ok_or(FeedError::MissingCredential(KEY_ENV_VAR))?;
                let event = non_empty(args.event.clone())
                    .or_else(|| non_empty(lookup(EVENT_ENV_VAR)))
                    .unwrap_or_else(|| DEFAULT_EVENT.to_string());
                Webhook::from_key(&Url::parse(&args.webhook_base)?, &event, &key)?
            }
        };

        Ok(Config {
            webhook: Some(webhook),
            ..Self::price_only(args)?
        })
    }

    pub fn price_only(args: &GlobalArgs) -> FeedResult<Self> {
        Ok(Config {
            price_url: Url::parse(&args.price_url)?,
            timeout: Duration::from_secs(args.timeout),
            transport: args.transport,
            webhook: None,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Webhook {
    url: Url,
}

impl Webhook {
    pub fn from_url(raw: &str) -> FeedResult<Self> {
        Ok(Webhook {
            url: Url::parse(raw)?,
        })
    }

    pub fn from_key(base: &Url, event: &str, key: &str) -> FeedResult<Self> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| FeedError::UrlBase(base.to_string()))?
            .pop_if_empty()
            .extend(["trigger", event, "with", "key", key]);
        Ok(Webhook { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn redacted(&self) -> String {
        let mut url = self.url.clone();
        url.set_query(None);
        url.set_fragment(None);
        let _ = url.set_password(None);
        let _ = url.set_username("");

        let segments: Vec<&str> = self.url.path_segments().into_iter().flatten().collect();
        let path = match segments.iter().position(|s| *s == "key") {
            // Maker shape: keep the event visible, hide what follows `key`
            Some(at) => segments
                .iter()
                .enumerate()
                .map(|(i, s)| if i > at { "***" } else { *s })
                .collect::<Vec<_>>()
                .join("/"),
            // Unknown shape: any segment may be the secret
            None => "***".to_string(),
        };
        url.set_path(&format!("/{}", path));
        url.to_string()
    }
}
