//! API Client
//!
//! Fetches records from the remote API through the response cache.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{Location, LocationPage, Pokemon};

/// HTTP client with a URL-keyed response cache in front of it.
///
/// The cache holds raw response bodies, so every record shape shares one
/// cache keyed purely by request URL.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: ExpiringCache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client from configuration.
    ///
    /// Starts the cache reaper, so this must run inside a tokio runtime.
    /// Zero TTL or zero timeout is rejected with `InvalidConfig`.
    pub fn new(config: &Config) -> Result<Self> {
        if config.http_timeout == 0 {
            return Err(PokedexError::InvalidConfig("http timeout must be non-zero"));
        }

        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            cache: ExpiringCache::new(config.cache_ttl())?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// The response cache, for statistics and inspection.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == List Locations ==
    /// Fetches one page of the location listing.
    ///
    /// `page_url` is a cursor from a previous page and is used verbatim;
    /// `None` requests the first page.
    pub async fn list_locations(&self, page_url: Option<&str>) -> Result<LocationPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location/", self.base_url),
        };
        self.fetch(&url).await
    }

    // == Get Location ==
    pub async fn get_location(&self, name: &str) -> Result<Location> {
        let url = format!("{}/location/{}", self.base_url, name);
        self.fetch(&url).await
    }

    // == Get Pokemon ==
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch(&url).await
    }

    /// Cache-first GET of `url`, decoded as `T`.
    ///
    /// A cached body that fails to decode is an error; it is not refetched.
    /// A fetched body is cached only after it decodes successfully.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(data) = self.cache.get(url).await {
            return decode(url, &data);
        }

        debug!(url, "GET");
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(url, error = %err, "request failed");
            err
        })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            warn!(url, status = status.as_u16(), "bad status code");
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let data = response.bytes().await?.to_vec();
        let record = decode(url, &data)?;
        self.cache.add(url, data).await;

        Ok(record)
    }
}

fn decode<T: DeserializeOwned>(url: &str, data: &[u8]) -> Result<T> {
    serde_json::from_slice(data).map_err(|source| {
        warn!(url, error = %source, "undecodable response body");
        PokedexError::Decode {
            url: url.to_string(),
            source,
        }
    })
}
