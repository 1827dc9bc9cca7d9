//! Headless view-state controllers, one per screen.
//!
//! # Design
//! Each controller owns its screen's state and borrows the shared
//! `RecipeService`. Operations take `&mut self`, so a screen never has more
//! than one request in flight. Data-access failures are caught here, logged
//! with `tracing`, and turned into a terminal state; nothing is surfaced to
//! the user beyond that state.
//!
//! Destructive actions go through an injected `Confirm` so the prompt is
//! independent of any UI toolkit.

pub mod detail;
pub mod form;
pub mod home;
pub mod list;

pub use detail::{DetailState, DetailView};
pub use form::{FormMode, FormView, ListField, RecipeDraft, SubmitOutcome, TextField};
pub use home::HomeView;
pub use list::ListView;

use crate::route::Route;

/// Prompt shown before a recipe is deleted.
pub const DELETE_PROMPT: &str = "Tem certeza que deseja excluir esta receita?";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a delete flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; no request was sent.
    Cancelled,
    /// The record is gone. `redirect` is set when the screen navigates away.
    Deleted { redirect: Option<Route> },
    /// The delete request failed and was logged.
    Failed,
}
