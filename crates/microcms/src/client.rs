use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::content::{ContentItem, ContentList, Fetched};
use crate::error::ContentError;
use crate::query::Query;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Read access to a content API.
///
/// The web layer only ever talks to this trait, so tests can swap in an
/// in-memory implementation.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// List the records of `endpoint`.
    async fn list(&self, endpoint: &str, query: &Query) -> Result<ContentList, ContentError>;

    /// Fetch one record of `endpoint` by id.
    async fn get(&self, endpoint: &str, id: &str, query: &Query) -> Fetched<ContentItem>;
}

/// Client for a microCMS service.
#[derive(Debug)]
pub struct MicroCmsClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl MicroCmsClient {
    /// Client for `https://{service_domain}.microcms.io/api/v1/`.
    pub fn new(service_domain: &str, api_key: SecretString) -> Result<Self, ContentError> {
        let base_url = format!("https://{}.microcms.io/api/v1/", service_domain);
        Self::with_base_url(&base_url, api_key)
    }

    /// Client for an arbitrary API root.
    pub fn with_base_url(base_url: &str, api_key: SecretString) -> Result<Self, ContentError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ContentError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ContentError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(MicroCmsClient {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ContentError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ContentError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, url: Url, query: &Query) -> Result<String, ContentError> {
        let response = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .query(&query.to_pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("GET {} answered {}", url.path(), status);
            return Err(ContentError::Status { status, body });
        }

        Ok(body)
    }

    async fn fetch_one(
        &self,
        endpoint: &str,
        id: &str,
        query: &Query,
    ) -> Result<ContentItem, ContentError> {
        let url = self.endpoint_url(&[endpoint, id])?;
        debug!("GET {} {}", endpoint, id);
        let body = self.fetch(url, query).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ContentApi for MicroCmsClient {
    async fn list(&self, endpoint: &str, query: &Query) -> Result<ContentList, ContentError> {
        let url = self.endpoint_url(&[endpoint])?;
        debug!("GET {}", endpoint);
        let body = self.fetch(url, query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, endpoint: &str, id: &str, query: &Query) -> Fetched<ContentItem> {
        match self.fetch_one(endpoint, id, query).await {
            Ok(item) => Fetched::Found(item),
            Err(ContentError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                Fetched::NotFound
            }
            Err(e) => Fetched::Failed(e),
        }
    }
}
