//! Create/edit form.
//!
//! The draft holds every input as the text the user typed. Conversion to a
//! `RecipePayload` happens only on submit: numbers are parsed and left out
//! when blank, tags are split on commas.

use tracing::{error, info};

use crate::error::FormError;
use crate::route::Route;
use crate::service::RecipeService;
use crate::transport::Transport;
use crate::types::{Recipe, RecipePayload, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Single-line inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Nome,
    Descricao,
    TempoPreparo,
    TempoCozimento,
    Porcoes,
    Dificuldade,
    Imagem,
    Video,
    Categoria,
    Tags,
}

/// The two growable lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Ingredientes,
    Instrucoes,
}

impl ListField {
    fn label(self) -> &'static str {
        match self {
            ListField::Ingredientes => "ingredientes",
            ListField::Instrucoes => "instrucoes",
        }
    }
}

/// Form contents as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub nome: String,
    pub descricao: String,
    pub tempo_preparo: String,
    pub tempo_cozimento: String,
    pub porcoes: String,
    pub dificuldade: String,
    pub imagem: String,
    pub video: String,
    pub categoria: String,
    pub tags: String,
    pub ingredientes: Vec<String>,
    pub instrucoes: Vec<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: String::new(),
            tempo_preparo: String::new(),
            tempo_cozimento: String::new(),
            porcoes: String::new(),
            dificuldade: String::new(),
            imagem: String::new(),
            video: String::new(),
            categoria: String::new(),
            tags: String::new(),
            ingredientes: vec![String::new()],
            instrucoes: vec![String::new()],
        }
    }
}

impl RecipeDraft {
    /// Pre-fill from a stored record. Zero and absent numbers both show as
    /// blank; empty lists become a single blank entry.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            nome: recipe.nome.clone(),
            descricao: recipe.descricao.clone(),
            tempo_preparo: number_text(recipe.tempo_preparo),
            tempo_cozimento: number_text(recipe.tempo_cozimento),
            porcoes: number_text(recipe.porcoes),
            dificuldade: recipe.dificuldade.clone(),
            imagem: recipe.imagem.clone(),
            video: recipe.video.clone(),
            categoria: recipe.categoria.clone(),
            tags: recipe.tags.join(", "),
            ingredientes: non_empty_list(&recipe.ingredientes),
            instrucoes: non_empty_list(&recipe.instrucoes),
        }
    }

    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Nome => &mut self.nome,
            TextField::Descricao => &mut self.descricao,
            TextField::TempoPreparo => &mut self.tempo_preparo,
            TextField::TempoCozimento => &mut self.tempo_cozimento,
            TextField::Porcoes => &mut self.porcoes,
            TextField::Dificuldade => &mut self.dificuldade,
            TextField::Imagem => &mut self.imagem,
            TextField::Video => &mut self.video,
            TextField::Categoria => &mut self.categoria,
            TextField::Tags => &mut self.tags,
        }
    }

    pub fn list(&self, list: ListField) -> &[String] {
        match list {
            ListField::Ingredientes => &self.ingredientes,
            ListField::Instrucoes => &self.instrucoes,
        }
    }

    fn list_mut(&mut self, list: ListField) -> &mut Vec<String> {
        match list {
            ListField::Ingredientes => &mut self.ingredientes,
            ListField::Instrucoes => &mut self.instrucoes,
        }
    }

    /// Required inputs: the name and every list entry must be non-empty.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.nome.is_empty() {
            return Err(FormError::Required("nome".to_string()));
        }
        for list in [ListField::Ingredientes, ListField::Instrucoes] {
            if let Some(index) = self.list(list).iter().position(String::is_empty) {
                return Err(FormError::Required(format!("{}[{index}]", list.label())));
            }
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<RecipePayload, FormError> {
        self.validate()?;
        Ok(RecipePayload {
            nome: self.nome.clone(),
            descricao: self.descricao.clone(),
            tempo_preparo: parse_number("tempo_preparo", &self.tempo_preparo)?,
            tempo_cozimento: parse_number("tempo_cozimento", &self.tempo_cozimento)?,
            porcoes: parse_number("porcoes", &self.porcoes)?,
            dificuldade: self.dificuldade.clone(),
            imagem: self.imagem.clone(),
            video: self.video.clone(),
            categoria: self.categoria.clone(),
            tags: split_tags(&self.tags),
            ingredientes: self.ingredientes.clone(),
            instrucoes: self.instrucoes.clone(),
        })
    }
}

/// Outcome of `FormView::submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored; the screen navigates to `redirect`.
    Saved { recipe: Recipe, redirect: Route },
    /// Input rejected before sending.
    Rejected(FormError),
    /// The request failed and was logged; the form stays as is.
    Failed,
}

pub struct FormView<'a, T> {
    service: &'a RecipeService<T>,
    mode: FormMode,
    draft: RecipeDraft,
    loading: bool,
}

impl<'a, T: Transport> FormView<'a, T> {
    /// Edit mode when `id` is present, create mode otherwise.
    pub fn new(service: &'a RecipeService<T>, id: Option<RecordId>) -> Self {
        Self {
            service,
            mode: id.map_or(FormMode::Create, FormMode::Edit),
            draft: RecipeDraft::default(),
            loading: false,
        }
    }

    /// In edit mode, load the stored record into the draft. A failed load
    /// leaves the blank draft in place.
    pub async fn mount(&mut self) {
        let FormMode::Edit(id) = &self.mode else {
            return;
        };
        let id = id.clone();
        self.loading = true;
        match self.service.get(&id).await {
            Ok(recipe) => self.draft = RecipeDraft::from_recipe(&recipe),
            Err(e) => error!(%id, error = %e, "failed to load recipe for editing"),
        }
        self.loading = false;
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn set(&mut self, field: TextField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    pub fn set_entry(
        &mut self,
        list: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let entries = self.draft.list_mut(list);
        let entry = entries.get_mut(index).ok_or(FormError::IndexOutOfRange {
            list: list.label(),
            index,
        })?;
        *entry = value.into();
        Ok(())
    }

    pub fn add_entry(&mut self, list: ListField) {
        self.draft.list_mut(list).push(String::new());
    }

    /// Whether the remove control for `list` is enabled.
    pub fn can_remove(&self, list: ListField) -> bool {
        self.draft.list(list).len() > 1
    }

    /// Remove the entry at `index`. The last remaining entry is kept.
    pub fn remove_entry(&mut self, list: ListField, index: usize) -> Result<(), FormError> {
        if !self.can_remove(list) {
            return Err(FormError::LastEntry(list.label()));
        }
        let entries = self.draft.list_mut(list);
        if index >= entries.len() {
            return Err(FormError::IndexOutOfRange {
                list: list.label(),
                index,
            });
        }
        entries.remove(index);
        Ok(())
    }

    /// Validate, then create or update depending on the mode.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => return SubmitOutcome::Rejected(e),
        };

        self.loading = true;
        let result = match &self.mode {
            FormMode::Edit(id) => self.service.update(id, &payload).await,
            FormMode::Create => self.service.create(&payload).await,
        };
        self.loading = false;

        match result {
            Ok(recipe) => {
                info!(id = %recipe.id, "recipe saved");
                SubmitOutcome::Saved {
                    recipe,
                    redirect: Route::RecipeList,
                }
            }
            Err(e) => {
                error!(error = %e, "failed to save recipe");
                SubmitOutcome::Failed
            }
        }
    }
}

fn number_text(value: Option<u32>) -> String {
    match value {
        Some(n) if n > 0 => n.to_string(),
        _ => String::new(),
    }
}

fn non_empty_list(entries: &[String]) -> Vec<String> {
    if entries.is_empty() {
        vec![String::new()]
    } else {
        entries.to_vec()
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<Option<u32>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse().map(Some).map_err(|_| FormError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Split on commas, trim each piece, drop empty pieces.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::http::HttpMethod;
    use crate::testing::ScriptedTransport;

    fn service(transport: ScriptedTransport) -> RecipeService<ScriptedTransport> {
        RecipeService::new(ClientConfig::new("http://api.test"), transport)
    }

    fn filled() -> RecipeDraft {
        RecipeDraft {
            nome: "Bolo".to_string(),
            ingredientes: vec!["ovo".to_string()],
            instrucoes: vec!["assar".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        assert_eq!(split_tags(" doce, ,festa ,, bolo "), vec!["doce", "festa", "bolo"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn blank_numbers_are_omitted() {
        let draft = RecipeDraft {
            porcoes: "6".to_string(),
            ..filled()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.porcoes, Some(6));
        assert_eq!(payload.tempo_preparo, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("tempo_preparo").is_none());
        assert!(json.get("tempo_cozimento").is_none());
    }

    #[test]
    fn explicit_zero_is_sent() {
        let draft = RecipeDraft {
            tempo_cozimento: "0".to_string(),
            ..filled()
        };
        assert_eq!(draft.to_payload().unwrap().tempo_cozimento, Some(0));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let draft = RecipeDraft {
            porcoes: "-2".to_string(),
            ..filled()
        };
        assert_eq!(
            draft.to_payload().unwrap_err(),
            FormError::InvalidNumber {
                field: "porcoes",
                value: "-2".to_string()
            }
        );
    }

    #[test]
    fn required_fields() {
        let missing_name = RecipeDraft {
            nome: String::new(),
            ..filled()
        };
        assert_eq!(
            missing_name.validate().unwrap_err(),
            FormError::Required("nome".to_string())
        );
        let blank_step = RecipeDraft {
            instrucoes: vec!["a".to_string(), String::new()],
            ..filled()
        };
        assert_eq!(
            blank_step.validate().unwrap_err(),
            FormError::Required("instrucoes[1]".to_string())
        );
    }

    #[test]
    fn prefill_converts_stored_record() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id":2,"nome":"Pão","tempo_preparo":15,"tempo_cozimento":0,"tags":["sal","forno"],"ingredientes":[]}"#,
        )
        .unwrap();
        let draft = RecipeDraft::from_recipe(&recipe);
        assert_eq!(draft.tempo_preparo, "15");
        assert_eq!(draft.tempo_cozimento, "");
        assert_eq!(draft.porcoes, "");
        assert_eq!(draft.tags, "sal, forno");
        assert_eq!(draft.ingredientes, vec![String::new()]);
    }

    #[test]
    fn last_entry_cannot_be_removed() {
        let svc = service(ScriptedTransport::new());
        let mut form = FormView::new(&svc, None);
        assert!(!form.can_remove(ListField::Ingredientes));
        assert_eq!(
            form.remove_entry(ListField::Ingredientes, 0),
            Err(FormError::LastEntry("ingredientes"))
        );
        assert_eq!(form.draft().ingredientes.len(), 1);

        form.add_entry(ListField::Ingredientes);
        form.set_entry(ListField::Ingredientes, 1, "sal").unwrap();
        assert!(form.can_remove(ListField::Ingredientes));
        form.remove_entry(ListField::Ingredientes, 0).unwrap();
        assert_eq!(form.draft().ingredientes, vec!["sal"]);
    }

    #[test]
    fn entry_index_is_checked() {
        let svc = service(ScriptedTransport::new());
        let mut form = FormView::new(&svc, None);
        assert!(matches!(
            form.set_entry(ListField::Instrucoes, 3, "x"),
            Err(FormError::IndexOutOfRange { index: 3, .. })
        ));
    }

    #[tokio::test]
    async fn create_mode_posts_and_redirects() {
        let svc = service(ScriptedTransport::new().with_json(201, r#"{"id":10,"nome":"Bolo"}"#));
        let mut form = FormView::new(&svc, None);
        form.mount().await;
        assert!(svc.transport().requests().is_empty());

        form.set(TextField::Nome, "Bolo");
        form.set(TextField::Tags, "doce, festa");
        form.set_entry(ListField::Ingredientes, 0, "ovo").unwrap();
        form.set_entry(ListField::Instrucoes, 0, "assar").unwrap();

        let SubmitOutcome::Saved { recipe, redirect } = form.submit().await else {
            panic!("expected the recipe to be saved");
        };
        assert_eq!(recipe.id, RecordId::Int(10));
        assert_eq!(redirect, Route::RecipeList);

        let sent = svc.transport().requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["tags"], serde_json::json!(["doce", "festa"]));
        assert_eq!(body["nutricao"], serde_json::json!({}));
        assert_eq!(body["secoes"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn edit_mode_prefills_then_puts() {
        let svc = service(
            ScriptedTransport::new()
                .with_json(
                    200,
                    r#"{"id":4,"nome":"Sopa","porcoes":2,"ingredientes":["água"],"instrucoes":["ferver"]}"#,
                )
                .with_json(200, r#"{"id":4,"nome":"Sopa de legumes"}"#),
        );
        let mut form = FormView::new(&svc, Some(RecordId::Int(4)));
        assert!(form.is_edit());
        form.mount().await;
        assert_eq!(form.draft().porcoes, "2");

        form.set(TextField::Nome, "Sopa de legumes");
        assert!(matches!(form.submit().await, SubmitOutcome::Saved { .. }));

        let sent = svc.transport().requests();
        assert_eq!(sent[1].method, HttpMethod::Put);
        assert_eq!(sent[1].url, "http://api.test/api/receitas/4");
    }

    #[tokio::test]
    async fn invalid_draft_sends_nothing() {
        let svc = service(ScriptedTransport::new());
        let mut form = FormView::new(&svc, None);
        assert!(matches!(form.submit().await, SubmitOutcome::Rejected(FormError::Required(_))));
        assert!(svc.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn failed_save_stays_on_form() {
        let svc = service(ScriptedTransport::new().with_json(422, r#"{"detail":"bad"}"#));
        let mut form = FormView::new(&svc, None);
        form.set(TextField::Nome, "Bolo");
        form.set_entry(ListField::Ingredientes, 0, "ovo").unwrap();
        form.set_entry(ListField::Instrucoes, 0, "assar").unwrap();
        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.draft().nome, "Bolo");
        assert!(!form.is_loading());
    }
}
