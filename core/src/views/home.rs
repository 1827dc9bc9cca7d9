//! Landing screen. It fetches a short preview only to decide whether the
//! "view all recipes" link is worth showing; the records themselves are not
//! kept.

use tracing::error;

use crate::route::Route;
use crate::service::RecipeService;
use crate::transport::Transport;

pub struct HomeView<'a, T> {
    service: &'a RecipeService<T>,
    loading: bool,
    has_recipes: bool,
}

impl<'a, T: Transport> HomeView<'a, T> {
    pub fn new(service: &'a RecipeService<T>) -> Self {
        Self {
            service,
            loading: true,
            has_recipes: false,
        }
    }

    pub async fn mount(&mut self) {
        self.loading = true;
        let limit = self.service.config().home_preview_limit;
        match self.service.list(0, limit).await {
            Ok(recipes) => self.has_recipes = !recipes.is_empty(),
            Err(e) => error!(error = %e, "failed to fetch recipe preview"),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn show_view_all(&self) -> bool {
        self.has_recipes
    }

    pub fn explore_route(&self) -> Route {
        Route::RecipeList
    }

    pub fn create_route(&self) -> Route {
        Route::NewRecipe
    }
}
