use async_trait::async_trait;
use nv_core::{Article, Error, Result};
use percent_encoding::percent_decode_str;
use std::io::BufRead;
use std::time::Duration;
use url::Url;

/// Cap on entries taken from a single feed response.
pub const MAX_ARTICLES_PER_COMPANY: usize = 10;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider of recent news items for a company.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news source
    fn name(&self) -> &str;

    /// Fetches up to [`MAX_ARTICLES_PER_COMPANY`] recent articles about the
    /// given company, in feed order.
    async fn fetch(&self, company: &str) -> Result<Vec<Article>>;
}

/// Bing News RSS search feed.
pub struct BingNewsSource {
    client: reqwest::Client,
    base_url: String,
}

impl BingNewsSource {
    pub fn new() -> Result<Self> {
        Self::with_base_url("https://www.bing.com")
    }

    /// The base URL is injectable so tests can point the source at a dead
    /// endpoint without touching the network.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn search_url(&self, company: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .and_then(|u| u.join("/news/search"))
            .map_err(|e| Error::Feed(format!("invalid feed URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("q", company)
            .append_pair("format", "rss");
        Ok(url)
    }
}

#[async_trait]
impl NewsSource for BingNewsSource {
    fn name(&self) -> &str {
        "Bing News"
    }

    async fn fetch(&self, company: &str) -> Result<Vec<Article>> {
        let url = self.search_url(company)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        parse_feed(&body[..])
    }
}

/// Percent-decode a feed link, falling back to the raw string when the
/// decoded bytes are not valid UTF-8.
pub fn clean_url(url: &str) -> String {
    percent_decode_str(url)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| url.to_string())
}

/// Parse an RSS payload into normalized articles. Each field falls back to a
/// default when absent, so a malformed entry never aborts the whole fetch.
pub fn parse_feed(reader: impl BufRead) -> Result<Vec<Article>> {
    let channel = rss::Channel::read_from(reader)
        .map_err(|e| Error::Feed(format!("failed to parse feed: {}", e)))?;

    Ok(channel
        .items()
        .iter()
        .take(MAX_ARTICLES_PER_COMPANY)
        .map(|item| Article {
            title: item.title().unwrap_or("No Title").to_string(),
            url: item.link().map(clean_url).unwrap_or_default(),
            summary: item.description().unwrap_or("No Summary").to_string(),
            publish_date: item.pub_date().unwrap_or("No Date").to_string(),
        })
        .collect())
}
