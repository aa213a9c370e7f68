use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::feeds;
use super::types::{Stations, StationInformation, StationStatus, SystemInformation};
use crate::error::GbfsError;
use crate::fetch::{BasicClient, ClientIdentifier, HttpClient, fetch_json};
use crate::parser::{parse_discovery, parse_feed};
use crate::summary::{StationSummary, build_summary, index_by_station_id};

/// Discovery document of Oslo Bysykkel.
pub const DEFAULT_DISCOVERY_URL: &str = "https://gbfs.urbansharing.com/oslobysykkel.no/gbfs.json";

/// Language section read from the discovery document.
pub const DEFAULT_LANGUAGE: &str = "nb";

/// Configuration for [`GbfsClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Sent as the `Client-Identifier` header; describes your app or organization.
    pub client_identifier: String,
    pub discovery_url: String,
    pub language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_identifier: String::new(),
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(client_identifier: impl Into<String>) -> Self {
        Self {
            client_identifier: client_identifier.into(),
            ..Self::default()
        }
    }

    /// Point the client at another operator's `gbfs.json` (or a test server).
    pub fn with_discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Client for a GBFS system.
///
/// The discovery document is fetched once, by [`GbfsClient::connect`]; the
/// resulting feed list never changes afterwards. Every data accessor issues
/// fresh requests, nothing is cached.
///
/// ```rust,no_run
/// use bysykkel::gbfs::{ClientConfig, GbfsClient};
///
/// # async fn run() -> Result<(), bysykkel::GbfsError> {
/// let client = GbfsClient::connect(ClientConfig::new("acme-bike-dashboard")).await?;
/// println!("{:?}", client.available_feeds());
///
/// for (station_id, summary) in client.get_summary_dict().await? {
///     println!("{station_id}: {} bikes", summary.available_bikes);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GbfsClient<C = BasicClient> {
    http: ClientIdentifier<C>,
    discovery_url: String,
    feeds: HashMap<String, String>,
    available_feeds: Vec<String>,
}

impl GbfsClient<BasicClient> {
    /// Fetches the discovery document using a default HTTP client.
    pub async fn connect(config: ClientConfig) -> Result<Self, GbfsError> {
        Self::with_http_client(BasicClient::new(), config).await
    }
}

impl<C: HttpClient> GbfsClient<C> {
    /// Fetches the discovery document through `inner`.
    ///
    /// The `Client-Identifier` header is added on top of `inner` for every
    /// request this client makes.
    #[tracing::instrument(skip(inner, config), fields(url = %config.discovery_url, language = %config.language))]
    pub async fn with_http_client(inner: C, config: ClientConfig) -> Result<Self, GbfsError> {
        let http = ClientIdentifier::new(inner, &config.client_identifier)?;

        let document = fetch_json(&http, &config.discovery_url).await?;
        let feed_list = parse_discovery(&config.discovery_url, document, &config.language)?;

        let mut feeds = HashMap::with_capacity(feed_list.len());
        let mut available_feeds = Vec::with_capacity(feed_list.len());
        for feed in feed_list {
            if feeds.insert(feed.name.clone(), feed.url).is_none() {
                available_feeds.push(feed.name);
            }
        }

        info!(feeds = ?available_feeds, "Discovery document loaded");

        Ok(Self {
            http,
            discovery_url: config.discovery_url,
            feeds,
            available_feeds,
        })
    }

    pub fn client_identifier(&self) -> &str {
        self.http.identifier()
    }

    pub fn discovery_url(&self) -> &str {
        &self.discovery_url
    }

    /// Feed names listed by the discovery document, in document order.
    pub fn available_feeds(&self) -> &[String] {
        &self.available_feeds
    }

    /// Fetches the raw JSON of the feed called `feed_name`.
    ///
    /// # Errors
    ///
    /// [`GbfsError::UnknownFeed`] if the name was not discovered; no request
    /// is made in that case.
    #[tracing::instrument(skip(self))]
    pub async fn get_feed(&self, feed_name: &str) -> Result<serde_json::Value, GbfsError> {
        let url = self
            .feeds
            .get(feed_name)
            .ok_or_else(|| GbfsError::UnknownFeed(feed_name.to_string()))?;

        fetch_json(&self.http, url).await
    }

    async fn get_typed_feed<T: DeserializeOwned>(&self, feed_name: &str) -> Result<T, GbfsError> {
        let envelope = parse_feed::<T>(feed_name, self.get_feed(feed_name).await?)?;
        debug!(
            feed = feed_name,
            last_updated = ?envelope.last_updated,
            ttl = ?envelope.ttl,
            "Feed decoded"
        );
        Ok(envelope.data)
    }

    pub async fn get_system_information(&self) -> Result<SystemInformation, GbfsError> {
        self.get_typed_feed(feeds::SYSTEM_INFORMATION).await
    }

    pub async fn get_station_information(&self) -> Result<Vec<StationInformation>, GbfsError> {
        let data: Stations<StationInformation> =
            self.get_typed_feed(feeds::STATION_INFORMATION).await?;
        Ok(data.stations)
    }

    pub async fn get_station_status(&self) -> Result<Vec<StationStatus>, GbfsError> {
        let data: Stations<StationStatus> = self.get_typed_feed(feeds::STATION_STATUS).await?;
        Ok(data.stations)
    }

    /// `station_id` → `capacity`. Stations that do not report a capacity are
    /// left out.
    pub async fn get_stations_capacity(&self) -> Result<HashMap<String, u32>, GbfsError> {
        Ok(self
            .get_station_information()
            .await?
            .into_iter()
            .filter_map(|s| s.capacity.map(|capacity| (s.station_id, capacity)))
            .collect())
    }

    /// `station_id` → `num_docks_available`.
    pub async fn get_available_docks(&self) -> Result<HashMap<String, u32>, GbfsError> {
        Ok(self
            .get_station_status()
            .await?
            .into_iter()
            .map(|s| (s.station_id, s.num_docks_available))
            .collect())
    }

    /// `station_id` → `num_bikes_available`.
    pub async fn get_available_bikes(&self) -> Result<HashMap<String, u32>, GbfsError> {
        Ok(self
            .get_station_status()
            .await?
            .into_iter()
            .map(|s| (s.station_id, s.num_bikes_available))
            .collect())
    }

    /// One summary per station in `station_information`, in feed order.
    ///
    /// Bikes, docks and station information are three separate, concurrent
    /// requests, so `station_status` is fetched twice.
    #[tracing::instrument(skip(self))]
    pub async fn get_summary(&self) -> Result<Vec<StationSummary>, GbfsError> {
        let (bikes, docks, stations) = tokio::try_join!(
            self.get_available_bikes(),
            self.get_available_docks(),
            self.get_station_information(),
        )?;

        let summary = build_summary(&stations, &bikes, &docks)?;
        info!(stations = summary.len(), "Summary built");
        Ok(summary)
    }

    /// [`get_summary`](Self::get_summary) keyed by `station_id`.
    pub async fn get_summary_dict(&self) -> Result<BTreeMap<String, StationSummary>, GbfsError> {
        Ok(index_by_station_id(self.get_summary().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.client_identifier, "");
        assert_eq!(config.discovery_url, DEFAULT_DISCOVERY_URL);
        assert_eq!(config.language, "nb");
    }

    #[test]
    fn test_config_builders() {
        let config = ClientConfig::new("acme")
            .with_discovery_url("http://localhost:8080/gbfs.json")
            .with_language("en");
        assert_eq!(config.client_identifier, "acme");
        assert_eq!(config.discovery_url, "http://localhost:8080/gbfs.json");
        assert_eq!(config.language, "en");
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_identifier_before_network() {
        let config =
            ClientConfig::new("bad\r\nidentifier").with_discovery_url("http://127.0.0.1:9/gbfs.json");
        let result = GbfsClient::connect(config).await;
        assert!(matches!(
            result,
            Err(GbfsError::InvalidClientIdentifier(_))
        ));
    }
}
