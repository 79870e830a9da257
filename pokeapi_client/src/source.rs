//! Remote catalog access.
//!
//! [`CatalogSource`] is the seam between the paging/search logic and the
//! network: production code talks to the real PokeAPI through
//! [`PokeApiSource`], tests substitute an in-memory implementation.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{ListResponse, PokemonDetail};

/// Base endpoint of the public catalog service. No authentication.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur while talking to the remote catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport or body-decode failure (connectivity, timeout, bad payload).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The API answered with a non-success status other than 404.
    #[error("API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
}

/// A remote catalog offering a paged summary listing and a per-id detail lookup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page of summary rows: `limit` items starting at `offset`.
    async fn list(&self, limit: u32, offset: u32) -> Result<ListResponse, SourceError>;

    /// Fetches the full record for an exact name or numeric id.
    ///
    /// Callers are expected to lowercase names; the API is case-sensitive.
    async fn detail(&self, name_or_id: &str) -> Result<PokemonDetail, SourceError>;
}

/// Production [`CatalogSource`] backed by the public PokeAPI.
pub struct PokeApiSource {
    client: Client,
    base_url: String,
    // Client-side politeness limit for the public, unauthenticated service.
    limiter: DefaultDirectRateLimiter,
}

impl PokeApiSource {
    /// Creates a source against the public endpoint.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a source against an alternative endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            limiter: RateLimiter::direct(Quota::per_second(nonzero!(10u32))),
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
        match response.status() {
            s if s.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(SourceError::NotFound),
            s => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown API error".to_string());
                Err(SourceError::Api {
                    status: s.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl CatalogSource for PokeApiSource {
    async fn list(&self, limit: u32, offset: u32) -> Result<ListResponse, SourceError> {
        self.limiter.until_ready().await;
        tracing::debug!(limit, offset, "fetching summary page");
        let response = self
            .client
            .get(format!("{}/pokemon", self.base_url))
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<ListResponse>().await?)
    }

    async fn detail(&self, name_or_id: &str) -> Result<PokemonDetail, SourceError> {
        self.limiter.until_ready().await;
        tracing::debug!(name_or_id, "fetching detail record");
        let response = self
            .client
            .get(format!("{}/pokemon/{}", self.base_url, name_or_id))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<PokemonDetail>().await?)
    }
}
