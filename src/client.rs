use async_trait::async_trait;
use tracing::instrument;

use crate::api;
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Result, ScheduleError};
use crate::model::*;

/// Where the feed gets its pages from.
///
/// [`ScheduleClient`] is the HTTP implementation; anything else (fixtures,
/// caches, an offline bundle) can stand in for it.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch one 1-indexed page of events.
    async fn fetch_events(&self, page: u32) -> Result<EventsPage>;

    /// Fetch the discipline catalogue used to populate filter choices.
    async fn fetch_disciplines(&self) -> Result<Vec<Discipline>>;
}

/// The main entry point for talking to the schedule API.
///
/// `ScheduleClient` wraps a [`reqwest::Client`] and exposes methods
/// to fetch event pages and the discipline catalogue.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> olympic_schedule::Result<()> {
/// use olympic_schedule::{ClientConfig, ScheduleClient};
///
/// let config = ClientConfig::default().with_base_url("https://api.example.com");
/// let client = ScheduleClient::from_config(config)?;
/// let page = client.get_events(1).await?;
/// println!("page {} of {}: {} events", page.page, page.last_page, page.events.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    /// Create a client pointing at the default local API.
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Build a client from explicit settings.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.validated_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ScheduleError::InvalidConfig {
                key: "http_client",
                reason: e.to_string(),
            })?;
        Ok(Self { http, base_url })
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http: client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of events.
    #[instrument(skip(self))]
    pub async fn get_events(&self, page: u32) -> Result<EventsPage> {
        api::events::get_events(&self.http, &self.base_url, page).await
    }

    /// Fetch every known discipline.
    #[instrument(skip(self))]
    pub async fn get_disciplines(&self) -> Result<Vec<Discipline>> {
        api::disciplines::get_disciplines(&self.http, &self.base_url).await
    }
}

#[async_trait]
impl EventSource for ScheduleClient {
    async fn fetch_events(&self, page: u32) -> Result<EventsPage> {
        self.get_events(page).await
    }

    async fn fetch_disciplines(&self) -> Result<Vec<Discipline>> {
        self.get_disciplines().await
    }
}
