//! Async data-access service: `RecipeClient` requests executed over a
//! `Transport`.
//!
//! Every operation propagates failures as `ApiError`. There are no retries
//! and no fallback values; the screens decide what a failure means for them.

use tracing::debug;

use crate::client::RecipeClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Ingredient, Recipe, RecipePayload, RecordId};

#[derive(Debug)]
pub struct RecipeService<T> {
    client: RecipeClient,
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> RecipeService<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            client: RecipeClient::new(&config.base_url),
            transport,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One page of recipes in server order.
    pub async fn list(&self, offset: u32, limit: u32) -> Result<Vec<Recipe>, ApiError> {
        let request = self.client.build_list(offset, limit)?;
        self.client.parse_list(self.send(request).await?)
    }

    pub async fn get(&self, id: &RecordId) -> Result<Recipe, ApiError> {
        let request = self.client.build_get(id);
        self.client.parse_get(self.send(request).await?)
    }

    /// Name search. Same pagination contract as `list`; the query is sent
    /// as given.
    pub async fn search_by_name(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<Recipe>, ApiError> {
        let request = self.client.build_search_by_name(query, offset, limit)?;
        self.client.parse_search_by_name(self.send(request).await?)
    }

    pub async fn create(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let request = self.client.build_create(payload)?;
        self.client.parse_create(self.send(request).await?)
    }

    /// Full replace of the stored record.
    pub async fn update(&self, id: &RecordId, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let request = self.client.build_update(id, payload)?;
        self.client.parse_update(self.send(request).await?)
    }

    pub async fn remove(&self, id: &RecordId) -> Result<(), ApiError> {
        let request = self.client.build_remove(id);
        self.client.parse_remove(self.send(request).await?)
    }

    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let request = self.client.build_list_ingredients();
        self.client.parse_ingredients(self.send(request).await?)
    }

    pub async fn search_ingredients(&self, name: &str) -> Result<Vec<Ingredient>, ApiError> {
        let request = self.client.build_search_ingredients(name);
        self.client.parse_ingredients(self.send(request).await?)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

#[cfg(feature = "reqwest")]
impl RecipeService<crate::transport::ReqwestTransport> {
    /// Service over a default `reqwest` client.
    pub fn with_reqwest(config: ClientConfig) -> Self {
        Self::new(config, crate::transport::ReqwestTransport::new())
    }
}
