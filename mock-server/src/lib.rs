use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

const DEFAULT_LIMIT: usize = 100;

/// Writable recipe fields. `PUT` replaces all of them at once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeInput {
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_preparo: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_cozimento: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub porcoes: Option<u32>,
    #[serde(default)]
    pub dificuldade: Option<String>,
    #[serde(default)]
    pub imagem: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredientes: Vec<String>,
    #[serde(default)]
    pub instrucoes: Vec<String>,
    #[serde(default)]
    pub nutricao: serde_json::Value,
    #[serde(default)]
    pub secoes: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    #[serde(flatten)]
    pub fields: RecipeInput,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub nome: String,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    recipes: BTreeMap<u64, Recipe>,
    ingredients: Vec<Ingredient>,
}

impl Store {
    fn insert(&mut self, fields: RecipeInput) -> Recipe {
        self.next_id += 1;
        let recipe = Recipe {
            id: self.next_id,
            fields,
        };
        self.recipes.insert(recipe.id, recipe.clone());
        recipe
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

pub fn app() -> Router {
    app_with(Vec::new(), Vec::new())
}

/// Router over a store pre-populated with `recipes` (ids 1..) and
/// `ingredients` (ids 1..).
pub fn app_with(recipes: Vec<RecipeInput>, ingredients: Vec<String>) -> Router {
    let mut store = Store::default();
    for fields in recipes {
        store.insert(fields);
    }
    store.ingredients = ingredients
        .into_iter()
        .zip(1..)
        .map(|(nome, id)| Ingredient { id, nome })
        .collect();

    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/receitas", get(list_recipes).post(create_recipe))
        .route("/api/receitas/", get(list_recipes))
        .route("/api/receitas/buscar/{name}", get(search_recipes))
        .route(
            "/api/receitas/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/api/ingredientes", get(list_ingredients))
        .route("/api/ingredientes/busca/{name}", get(search_ingredients))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

fn name_matches(nome: &str, needle: &str) -> bool {
    nome.to_lowercase().contains(&needle.to_lowercase())
}

async fn list_recipes(State(db): State<Db>, Query(page): Query<PageQuery>) -> Json<Vec<Recipe>> {
    let store = db.read().await;
    Json(
        store
            .recipes
            .values()
            .skip(page.skip)
            .take(page.limit)
            .cloned()
            .collect(),
    )
}

async fn search_recipes(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(page): Query<PageQuery>,
) -> Json<Vec<Recipe>> {
    let store = db.read().await;
    Json(
        store
            .recipes
            .values()
            .filter(|r| name_matches(&r.fields.nome, &name))
            .skip(page.skip)
            .take(page.limit)
            .cloned()
            .collect(),
    )
}

async fn create_recipe(
    State(db): State<Db>,
    Json(input): Json<RecipeInput>,
) -> (StatusCode, Json<Recipe>) {
    let recipe = db.write().await.insert(input);
    debug!(id = recipe.id, "recipe created");
    (StatusCode::CREATED, Json(recipe))
}

async fn get_recipe(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Recipe>, StatusCode> {
    let store = db.read().await;
    store.recipes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_recipe(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<Recipe>, StatusCode> {
    let mut store = db.write().await;
    let recipe = store.recipes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    recipe.fields = input;
    debug!(id, "recipe replaced");
    Ok(Json(recipe.clone()))
}

async fn delete_recipe(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .recipes
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_ingredients(State(db): State<Db>) -> Json<Vec<Ingredient>> {
    Json(db.read().await.ingredients.clone())
}

async fn search_ingredients(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Json<Vec<Ingredient>> {
    let store = db.read().await;
    Json(
        store
            .ingredients
            .iter()
            .filter(|i| name_matches(&i.nome, &name))
            .cloned()
            .collect(),
    )
}
