use async_trait::async_trait;
use reqwest::Client;
use ta_core::{Entry, FeedSource, Result};
use tracing::{debug, info};
use url::Url;

use crate::document::parse_feed;

/// Feed served over HTTP(S). One GET per fetch, body read in full before parsing.
pub struct HttpFeed {
    url: Url,
    client: Client,
}

impl HttpFeed {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    pub fn with_client(url: Url, client: Client) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    fn name(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        info!("🌐 Requesting feed {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        parse_feed(&body)
    }
}
