//! Stateless HTTP request builder and response parser for the recipe API.
//!
//! # Design
//! `RecipeClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `RecipeService` glues the two halves to a `Transport`.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ingredient, Recipe, RecipePayload, RecordId, Section};

const RECIPES: &str = "/api/receitas";
const INGREDIENTS: &str = "/api/ingredientes";

/// Synchronous, stateless client for the recipe API.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    base_url: String,
}

/// Body actually sent on create/update. Nutrition and sections are always
/// written empty; section data is read-only in this client.
#[derive(Serialize)]
struct WirePayload<'a> {
    #[serde(flatten)]
    recipe: &'a RecipePayload,
    nutricao: EmptyObject,
    secoes: &'a [Section],
}

#[derive(Serialize)]
struct EmptyObject {}

impl RecipeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self, offset: u32, limit: u32) -> Result<HttpRequest, ApiError> {
        check_limit(limit)?;
        Ok(get(format!(
            "{}{RECIPES}/?skip={offset}&limit={limit}",
            self.base_url
        )))
    }

    pub fn build_get(&self, id: &RecordId) -> HttpRequest {
        get(self.recipe_url(id))
    }

    pub fn build_search_by_name(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<HttpRequest, ApiError> {
        check_limit(limit)?;
        Ok(get(format!(
            "{}{RECIPES}/buscar/{}?skip={offset}&limit={limit}",
            self.base_url,
            urlencoding::encode(query)
        )))
    }

    pub fn build_create(&self, input: &RecipePayload) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}{RECIPES}", self.base_url), input)
    }

    pub fn build_update(
        &self,
        id: &RecordId,
        input: &RecipePayload,
    ) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.recipe_url(id), input)
    }

    pub fn build_remove(&self, id: &RecordId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.recipe_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_ingredients(&self) -> HttpRequest {
        get(format!("{}{INGREDIENTS}", self.base_url))
    }

    pub fn build_search_ingredients(&self, name: &str) -> HttpRequest {
        get(format!(
            "{}{INGREDIENTS}/busca/{}",
            self.base_url,
            urlencoding::encode(name)
        ))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Recipe>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Recipe, ApiError> {
        parse_json(response)
    }

    pub fn parse_search_by_name(&self, response: HttpResponse) -> Result<Vec<Recipe>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Recipe, ApiError> {
        parse_json(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Recipe, ApiError> {
        parse_json(response)
    }

    /// Any 2xx confirms the delete; the body, if any, is ignored.
    pub fn parse_remove(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_ingredients(&self, response: HttpResponse) -> Result<Vec<Ingredient>, ApiError> {
        parse_json(response)
    }

    fn recipe_url(&self, id: &RecordId) -> String {
        format!(
            "{}{RECIPES}/{}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        )
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn json_request(
    method: HttpMethod,
    url: String,
    input: &RecipePayload,
) -> Result<HttpRequest, ApiError> {
    let wire = WirePayload {
        recipe: input,
        nutricao: EmptyObject {},
        secoes: &[],
    };
    let body =
        serde_json::to_string(&wire).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn check_limit(limit: u32) -> Result<(), ApiError> {
    if limit == 0 {
        return Err(ApiError::InvalidPagination);
    }
    Ok(())
}

fn parse_json<T: serde::de::DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
