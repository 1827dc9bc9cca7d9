//! Client core for the receitas recipe API.
//!
//! # Overview
//! `RecipeClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. `RecipeService` runs them through a
//! `Transport`, and the screen controllers in `views` drive the service in
//! response to navigation and user input.
//!
//! # Design
//! - `RecipeClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and every request can be checked as data.
//! - The base URL comes from an explicit `ClientConfig`, never from global
//!   state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod route;
pub mod screen;
pub mod service;
pub mod testing;
pub mod transport;
pub mod types;
pub mod views;

pub use client::RecipeClient;
pub use config::ClientConfig;
pub use error::{ApiError, FormError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use route::Route;
pub use screen::Screen;
pub use service::RecipeService;
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::{Ingredient, Recipe, RecipePayload, RecordId, Section, SectionEntry};
pub use views::{Confirm, DeleteOutcome};
