//! Paginated recipe list with name search.
//!
//! The page count is derived from the length of the page just fetched, not
//! from a server total: `ceil(len / page_size)`. A full page therefore
//! reports one page and the pager hides. This mirrors the remote API, which
//! reports no total.

use tracing::{error, info};

use super::{Confirm, DeleteOutcome, DELETE_PROMPT};
use crate::error::ApiError;
use crate::service::RecipeService;
use crate::transport::Transport;
use crate::types::{Recipe, RecordId};

pub struct ListView<'a, T> {
    service: &'a RecipeService<T>,
    recipes: Vec<Recipe>,
    loading: bool,
    search_term: String,
    page: u32,
    total_pages: u32,
}

impl<'a, T: Transport> ListView<'a, T> {
    pub fn new(service: &'a RecipeService<T>) -> Self {
        Self {
            service,
            recipes: Vec::new(),
            loading: true,
            search_term: String::new(),
            page: 1,
            total_pages: 1,
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Edit the search box. Nothing is fetched until `submit_search`.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Run the search for the current term on the current page. An empty
    /// or whitespace-only term falls back to the plain list.
    pub async fn submit_search(&mut self) {
        self.refresh().await;
    }

    /// Switch page (1-based) and refetch. Selecting the page already shown
    /// does nothing.
    pub async fn go_to_page(&mut self, page: u32) {
        let page = page.max(1);
        if page == self.page {
            return;
        }
        self.page = page;
        self.refresh().await;
    }

    /// Confirm, delete, then replay whichever fetch is in effect so an
    /// active search survives the delete.
    pub async fn delete(&mut self, id: &RecordId, confirm: &impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            info!(%id, "delete cancelled");
            return DeleteOutcome::Cancelled;
        }
        if let Err(e) = self.service.remove(id).await {
            error!(%id, error = %e, "failed to delete recipe");
            return DeleteOutcome::Failed;
        }
        info!(%id, "recipe deleted");
        self.refresh().await;
        DeleteOutcome::Deleted { redirect: None }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// The trimmed search term, if it selects the search endpoint.
    pub fn active_query(&self) -> Option<&str> {
        let term = self.search_term.trim();
        (!term.is_empty()).then_some(term)
    }

    async fn refresh(&mut self) {
        self.loading = true;

        let service = self.service;
        let page_size = service.config().page_size;
        let result = match (self.page - 1).checked_mul(page_size) {
            Some(offset) => match self.active_query().map(str::to_owned) {
                Some(query) => service.search_by_name(&query, offset, page_size).await,
                None => service.list(offset, page_size).await,
            },
            None => Err(ApiError::InvalidPagination),
        };

        match result {
            Ok(recipes) => {
                self.total_pages = (recipes.len() as u32).div_ceil(page_size);
                self.recipes = recipes;
            }
            Err(e) => {
                error!(page = self.page, error = %e, "failed to fetch recipes");
                self.recipes.clear();
                self.total_pages = 1;
            }
        }
        self.loading = false;
    }
}
