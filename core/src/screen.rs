//! Route-to-screen dispatch. Opening a route builds a fresh controller and
//! mounts it; state from the previous screen is dropped.

use tracing::info;

use crate::route::Route;
use crate::service::RecipeService;
use crate::transport::Transport;
use crate::views::{DetailView, FormView, HomeView, ListView};

pub enum Screen<'a, T> {
    Home(HomeView<'a, T>),
    List(ListView<'a, T>),
    Detail(DetailView<'a, T>),
    Form(FormView<'a, T>),
}

impl<'a, T: Transport> Screen<'a, T> {
    pub async fn open(route: &Route, service: &'a RecipeService<T>) -> Self {
        info!(%route, "opening screen");
        match route {
            Route::Home => {
                let mut view = HomeView::new(service);
                view.mount().await;
                Screen::Home(view)
            }
            Route::RecipeList => {
                let mut view = ListView::new(service);
                view.mount().await;
                Screen::List(view)
            }
            Route::RecipeDetail(id) => {
                let mut view = DetailView::new(service);
                view.open(id.clone()).await;
                Screen::Detail(view)
            }
            Route::NewRecipe => Screen::Form(FormView::new(service, None)),
            Route::EditRecipe(id) => {
                let mut view = FormView::new(service, Some(id.clone()));
                view.mount().await;
                Screen::Form(view)
            }
        }
    }

    /// Resolve and open a path. `None` when the path matches no screen.
    pub async fn open_path(path: &str, service: &'a RecipeService<T>) -> Option<Self> {
        let route = Route::parse(path)?;
        Some(Self::open(&route, service).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::testing::ScriptedTransport;
    use crate::types::RecordId;

    fn service(transport: ScriptedTransport) -> RecipeService<ScriptedTransport> {
        RecipeService::new(ClientConfig::new("http://api.test"), transport)
    }

    #[tokio::test]
    async fn new_recipe_issues_no_request() {
        let svc = service(ScriptedTransport::new());
        let screen = Screen::open(&Route::NewRecipe, &svc).await;
        let Screen::Form(form) = screen else {
            panic!("expected the form screen");
        };
        assert!(!form.is_edit());
        assert!(svc.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn edit_path_loads_record() {
        let svc = service(ScriptedTransport::new().with_json(200, r#"{"id":8,"nome":"Torta"}"#));
        let Some(Screen::Form(form)) = Screen::open_path("/receitas/editar/8", &svc).await else {
            panic!("expected the form screen");
        };
        assert_eq!(form.draft().nome, "Torta");
        assert_eq!(form.mode(), &crate::views::FormMode::Edit(RecordId::Int(8)));
    }

    #[tokio::test]
    async fn detail_path_loads_record() {
        let svc = service(ScriptedTransport::new().with_json(200, r#"{"id":8,"nome":"Torta"}"#));
        let Some(Screen::Detail(view)) = Screen::open_path("/receitas/8", &svc).await else {
            panic!("expected the detail screen");
        };
        assert!(view.recipe().is_some());
    }

    #[tokio::test]
    async fn unknown_path_opens_nothing() {
        let svc = service(ScriptedTransport::new());
        assert!(Screen::open_path("/nada", &svc).await.is_none());
    }
}
