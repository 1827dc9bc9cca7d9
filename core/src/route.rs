//! Path-style navigation between the four screens.

use std::fmt;

use crate::types::RecordId;

/// A navigable location. `parse` and `path` are inverse for every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/receitas`
    RecipeList,
    /// `/receitas/nova`
    NewRecipe,
    /// `/receitas/{id}`
    RecipeDetail(RecordId),
    /// `/receitas/editar/{id}`
    EditRecipe(RecordId),
}

impl Route {
    /// Resolve a path. Query string, fragment and trailing slashes are
    /// ignored. Returns `None` for paths that match no screen.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["receitas"] => Some(Route::RecipeList),
            ["receitas", "nova"] => Some(Route::NewRecipe),
            ["receitas", "editar", id] => Some(Route::EditRecipe(decode_id(id)?)),
            ["receitas", id] => Some(Route::RecipeDetail(decode_id(id)?)),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::RecipeList => "/receitas".to_string(),
            Route::NewRecipe => "/receitas/nova".to_string(),
            Route::RecipeDetail(id) => format!("/receitas/{}", encode_id(id)),
            Route::EditRecipe(id) => format!("/receitas/editar/{}", encode_id(id)),
        }
    }

    /// The identifier carried by detail and edit routes.
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            Route::RecipeDetail(id) | Route::EditRecipe(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode_id(segment: &str) -> Option<RecordId> {
    let decoded = urlencoding::decode(segment).ok()?;
    decoded.parse().ok()
}

fn encode_id(id: &RecordId) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_screen() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/receitas"), Some(Route::RecipeList));
        assert_eq!(Route::parse("/receitas/"), Some(Route::RecipeList));
        assert_eq!(Route::parse("/receitas/nova"), Some(Route::NewRecipe));
        assert_eq!(
            Route::parse("/receitas/12"),
            Some(Route::RecipeDetail(RecordId::Int(12)))
        );
        assert_eq!(
            Route::parse("/receitas/editar/12"),
            Some(Route::EditRecipe(RecordId::Int(12)))
        );
    }

    #[test]
    fn nova_is_not_an_identifier() {
        assert_eq!(Route::parse("/receitas/nova?from=home"), Some(Route::NewRecipe));
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Route::parse("/ingredientes"), None);
        assert_eq!(Route::parse("/receitas/1/2"), None);
        assert_eq!(Route::parse("/receitas/editar/1/2"), None);
    }

    #[test]
    fn bare_editar_is_an_identifier() {
        assert_eq!(
            Route::parse("/receitas/editar"),
            Some(Route::RecipeDetail(RecordId::Text("editar".to_string())))
        );
    }

    #[test]
    fn identifier_reaches_the_api_unchanged() {
        let client = crate::client::RecipeClient::new("http://api.test");
        for (path, url) in [
            ("/receitas/007", "http://api.test/api/receitas/007"),
            ("/receitas/editar/007", "http://api.test/api/receitas/007"),
            ("/receitas/12", "http://api.test/api/receitas/12"),
        ] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.path(), path);
            assert_eq!(client.build_get(route.record_id().unwrap()).url, url);
        }
    }

    #[test]
    fn path_round_trips() {
        let routes = [
            Route::Home,
            Route::RecipeList,
            Route::NewRecipe,
            Route::RecipeDetail(RecordId::Int(3)),
            Route::EditRecipe(RecordId::Text("bolo de cenoura".to_string())),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{route}");
        }
    }
}
