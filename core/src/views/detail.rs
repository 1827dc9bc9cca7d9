//! Single-recipe screen.
//!
//! Ingredients and instructions are resolved from the legacy nested
//! sections first, and only then from the flat fields.

use tracing::{error, info};

use super::{Confirm, DeleteOutcome, DELETE_PROMPT};
use crate::route::Route;
use crate::service::RecipeService;
use crate::transport::Transport;
use crate::types::{Recipe, RecordId, Section};

pub const INGREDIENTS_SECTION: &str = "Ingredientes";
pub const INSTRUCTIONS_SECTION: &str = "Modo de Preparo";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Recipe),
    NotFound,
}

pub struct DetailView<'a, T> {
    service: &'a RecipeService<T>,
    id: Option<RecordId>,
    state: DetailState,
}

impl<'a, T: Transport> DetailView<'a, T> {
    pub fn new(service: &'a RecipeService<T>) -> Self {
        Self {
            service,
            id: None,
            state: DetailState::Loading,
        }
    }

    /// Show the recipe `id`. Fetches on the first call and whenever the
    /// identifier differs from the one on screen.
    pub async fn open(&mut self, id: RecordId) {
        if self.id.as_ref() == Some(&id) {
            return;
        }
        self.id = Some(id);
        self.reload().await;
    }

    /// Confirm, delete, then send the user back to the list.
    pub async fn delete(&mut self, confirm: &impl Confirm) -> DeleteOutcome {
        let Some(id) = self.id.clone() else {
            return DeleteOutcome::Cancelled;
        };
        if !confirm.confirm(DELETE_PROMPT) {
            info!(%id, "delete cancelled");
            return DeleteOutcome::Cancelled;
        }
        match self.service.remove(&id).await {
            Ok(()) => {
                info!(%id, "recipe deleted");
                DeleteOutcome::Deleted {
                    redirect: Some(Route::RecipeList),
                }
            }
            Err(e) => {
                error!(%id, error = %e, "failed to delete recipe");
                DeleteOutcome::Failed
            }
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.state {
            DetailState::Found(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    pub fn ingredients(&self) -> &[String] {
        self.recipe().map(resolve_ingredients).unwrap_or_default()
    }

    pub fn instructions(&self) -> &[String] {
        self.recipe().map(resolve_instructions).unwrap_or_default()
    }

    pub fn sections(&self) -> &[Section] {
        self.recipe()
            .and_then(|r| r.secoes.as_deref())
            .unwrap_or_default()
    }

    pub fn edit_route(&self) -> Option<Route> {
        self.id.clone().map(Route::EditRecipe)
    }

    async fn reload(&mut self) {
        let Some(id) = self.id.clone() else {
            return;
        };
        self.state = DetailState::Loading;
        self.state = match self.service.get(&id).await {
            Ok(recipe) => DetailState::Found(recipe),
            Err(e) => {
                error!(%id, error = %e, "failed to fetch recipe");
                DetailState::NotFound
            }
        };
    }
}

/// Section content wins over the flat field, even when empty. A matching
/// section without `conteudo` falls through.
pub fn resolve_ingredients(recipe: &Recipe) -> &[String] {
    resolve(recipe, INGREDIENTS_SECTION, &recipe.ingredientes)
}

pub fn resolve_instructions(recipe: &Recipe) -> &[String] {
    resolve(recipe, INSTRUCTIONS_SECTION, &recipe.instrucoes)
}

fn resolve<'r>(recipe: &'r Recipe, section: &str, flat: &'r [String]) -> &'r [String] {
    recipe
        .section(section)
        .and_then(|s| s.conteudo.as_deref())
        .unwrap_or(flat)
}
