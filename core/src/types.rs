//! Domain DTOs for the recipe API.
//!
//! # Design
//! These types mirror the remote schema but are defined independently from
//! the mock-server crate; integration tests catch schema drift between the
//! two. Field names are the wire names (`nome`, `descricao`, ...), so no
//! `rename` attributes are needed.
//!
//! Responses are read leniently: `null` or missing text reads as an empty
//! string and missing lists read as empty, matching what the screens display
//! for a sparse record.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier. The client treats it as opaque and only ever
/// echoes it back in paths.
///
/// Equality and hashing go through the display form, so `Int(12)` and
/// `Text("12")` are the same record while `Text("007")` is not `Int(7)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(u64),
    Text(String),
}

impl RecordId {
    fn key(&self) -> Cow<'_, str> {
        match self {
            RecordId::Int(n) => Cow::Owned(n.to_string()),
            RecordId::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Int(a), RecordId::Int(b)) => a == b,
            _ => self.key() == other.key(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    /// Canonical decimal segments become `Int`; anything else, including
    /// digits with leading zeros, stays `Text` exactly as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => Ok(RecordId::Int(n)),
            _ => Ok(RecordId::Text(s.to_string())),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A stored recipe as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_preparo: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_cozimento: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub porcoes: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dificuldade: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub imagem: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categoria: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredientes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instrucoes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutricao: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secoes: Option<Vec<Section>>,
}

impl Recipe {
    /// Look up a section by exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.secoes.as_ref()?.iter().find(|s| s.nome == name)
    }

    /// The writable part of this record, suitable for a full-replace update.
    /// Section data is read-only and is not carried over.
    pub fn to_payload(&self) -> RecipePayload {
        RecipePayload {
            nome: self.nome.clone(),
            descricao: self.descricao.clone(),
            tempo_preparo: self.tempo_preparo,
            tempo_cozimento: self.tempo_cozimento,
            porcoes: self.porcoes,
            dificuldade: self.dificuldade.clone(),
            imagem: self.imagem.clone(),
            video: self.video.clone(),
            categoria: self.categoria.clone(),
            tags: self.tags.clone(),
            ingredientes: self.ingredientes.clone(),
            instrucoes: self.instrucoes.clone(),
        }
    }
}

/// A named block of the legacy nested representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    /// Flat content list. `None` when the key is absent or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conteudo: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub conteudos: Vec<SectionEntry>,
}

/// One typed entry inside a section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub lista: Vec<String>,
}

/// Request payload for create and full-replace update.
///
/// Numeric fields left as `None` are omitted from the JSON entirely. The
/// client adds `nutricao: {}` and `secoes: []` when it serializes the body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipePayload {
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_preparo: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_cozimento: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub porcoes: Option<u32>,
    #[serde(default)]
    pub dificuldade: String,
    #[serde(default)]
    pub imagem: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredientes: Vec<String>,
    #[serde(default)]
    pub instrucoes: Vec<String>,
}

/// An entry of the auxiliary ingredients resource. Fields the client does
/// not know about are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let n: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(n, RecordId::Int(42));
        let s: RecordId = serde_json::from_str(r#""65f0c2""#).unwrap();
        assert_eq!(s, RecordId::Text("65f0c2".to_string()));
    }

    #[test]
    fn record_id_from_path_segment() {
        assert_eq!("17".parse::<RecordId>().unwrap(), RecordId::Int(17));
        assert_eq!(
            "abc-17".parse::<RecordId>().unwrap(),
            RecordId::Text("abc-17".to_string())
        );
        assert_eq!(RecordId::Int(17).to_string(), "17");
    }

    #[test]
    fn record_id_keeps_leading_zeros() {
        let id: RecordId = "007".parse().unwrap();
        assert_eq!(id, RecordId::Text("007".to_string()));
        assert_eq!(id.to_string(), "007");
        assert_ne!(id, RecordId::Int(7));
        assert_eq!("+7".parse::<RecordId>().unwrap().to_string(), "+7");
    }

    #[test]
    fn record_id_compares_by_display_form() {
        use std::collections::HashSet;

        assert_eq!(RecordId::Int(12), RecordId::Text("12".to_string()));
        let ids: HashSet<RecordId> = [RecordId::Int(12), RecordId::Text("12".to_string())]
            .into_iter()
            .collect();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn sparse_recipe_reads_with_defaults() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":1,"nome":"Bolo","descricao":null,"tags":null}"#).unwrap();
        assert_eq!(recipe.nome, "Bolo");
        assert_eq!(recipe.descricao, "");
        assert!(recipe.tags.is_empty());
        assert!(recipe.ingredientes.is_empty());
        assert!(recipe.tempo_preparo.is_none());
        assert!(recipe.secoes.is_none());
    }

    #[test]
    fn recipe_without_id_is_rejected() {
        let result: Result<Recipe, _> = serde_json::from_str(r#"{"nome":"Bolo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn section_distinguishes_missing_and_empty_content() {
        let missing: Section = serde_json::from_str(r#"{"nome":"Ingredientes"}"#).unwrap();
        assert!(missing.conteudo.is_none());
        let empty: Section =
            serde_json::from_str(r#"{"nome":"Ingredientes","conteudo":[]}"#).unwrap();
        assert_eq!(empty.conteudo, Some(Vec::new()));
    }

    #[test]
    fn typed_section_entries_parse() {
        let section: Section = serde_json::from_str(
            r#"{"nome":"Dicas","conteudos":[{"tipo":"texto","texto":"Use manteiga","lista":["a","b"]}]}"#,
        )
        .unwrap();
        assert_eq!(section.conteudos.len(), 1);
        assert_eq!(section.conteudos[0].texto.as_deref(), Some("Use manteiga"));
        assert_eq!(section.conteudos[0].lista, vec!["a", "b"]);
        assert!(section.conteudos[0].imagem.is_none());
    }

    #[test]
    fn payload_omits_missing_numbers() {
        let payload = RecipePayload {
            nome: "Pão".to_string(),
            porcoes: Some(4),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["porcoes"], 4);
        assert!(json.get("tempo_preparo").is_none());
        assert!(json.get("tempo_cozimento").is_none());
    }

    #[test]
    fn to_payload_drops_sections() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id":3,"nome":"Sopa","tags":["quente"],"secoes":[{"nome":"Ingredientes","conteudo":["água"]}]}"#,
        )
        .unwrap();
        let payload = recipe.to_payload();
        assert_eq!(payload.nome, "Sopa");
        assert_eq!(payload.tags, vec!["quente"]);
        assert!(payload.ingredientes.is_empty());
    }

    #[test]
    fn ingredient_keeps_unknown_fields() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"id":9,"nome":"Farinha","unidade":"g"}"#).unwrap();
        assert_eq!(ingredient.id, Some(RecordId::Int(9)));
        assert_eq!(ingredient.nome, "Farinha");
        assert_eq!(ingredient.extra["unidade"], "g");
    }
}
