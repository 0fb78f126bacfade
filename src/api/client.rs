use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::api::traits::ListingSource;
use crate::error::ApiError;
use crate::models::{House, HouseDraft};
use crate::search::FilterSelection;

const USER_AGENT: &str = concat!("nyumba/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the listing-collection service
pub struct ListingClient {
    client: Client,
    base_url: String,
}

impl ListingClient {
    /// Create a client for the listing service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/housesData", self.base_url)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/housesData/{}", self.base_url, id)
    }

    /// Fetch one listing by id
    pub async fn get(&self, id: u32) -> Result<House, ApiError> {
        let url = self.item_url(id);
        debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_success() => Ok(response.json().await?),
            status => {
                warn!("Listing service returned status: {}", status);
                Err(ApiError::Status(status))
            }
        }
    }

    /// Create a new listing
    pub async fn create(&self, draft: &HouseDraft) -> Result<House, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Create rejected with status: {}", status);
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }

    /// Merge changed fields into an existing listing
    pub async fn update(&self, id: u32, draft: &HouseDraft) -> Result<House, ApiError> {
        let response = self
            .client
            .patch(self.item_url(id))
            .json(draft)
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_success() => Ok(response.json().await?),
            status => {
                warn!("Update rejected with status: {}", status);
                Err(ApiError::Status(status))
            }
        }
    }

    /// Delete a listing
    pub async fn remove(&self, id: u32) -> Result<(), ApiError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_success() => Ok(()),
            status => {
                warn!("Delete rejected with status: {}", status);
                Err(ApiError::Status(status))
            }
        }
    }
}

#[async_trait]
impl ListingSource for ListingClient {
    async fn search(&self, filters: &FilterSelection) -> Result<Vec<House>, ApiError> {
        let url = self.collection_url();
        debug!("Fetching {} with query {}", url, filters.query_string());

        let response = self
            .client
            .get(&url)
            .query(&filters.pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Listing service returned status: {}", status);
            return Err(ApiError::Status(status));
        }

        let houses: Vec<House> = response.json().await?;
        debug!("Received {} listings", houses.len());
        Ok(houses)
    }

    fn source_name(&self) -> &'static str {
        "houselandia"
    }
}
