// ============================================================================
// APP CONTEXT - cliente API y sesión compartidos por toda la app
// ============================================================================
// Se construye una vez en App y se inyecta con ContextProvider; páginas y
// guards lo leen con use_app_context() en vez de tocar localStorage.
// ============================================================================

use std::cell::OnceCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{ApiClient, BrowserNavigator, GlooTransport, RetryPolicy};
use crate::stores::SessionStore;
use crate::utils::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        let session = api.session().clone();
        Self { api, session }
    }

    /// Contexto real del navegador: localStorage, fetch y location.href
    pub fn browser(config: &AppConfig) -> Self {
        let session = SessionStore::new(Rc::new(BrowserStorage));
        let transport = GlooTransport::new(config.api_base_url.clone(), config.request_timeout_ms);
        let api = ApiClient::new(
            Rc::new(transport),
            session,
            Rc::new(BrowserNavigator),
            RetryPolicy::from_config(config),
        );
        Self::new(api)
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub context: AppContext,
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

thread_local! {
    static FALLBACK_CONTEXT: OnceCell<AppContext> = OnceCell::new();
}

/// Contexto del navegador para componentes montados sin provider. Se
/// construye una sola vez para que todos compartan cliente y sesión.
fn fallback_context() -> AppContext {
    FALLBACK_CONTEXT.with(|cell| {
        cell.get_or_init(|| {
            log::warn!("⚠️ use_app_context sin AppContextProvider: usando el contexto del navegador");
            AppContext::browser(&crate::config::CONFIG)
        })
        .clone()
    })
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(fallback_context)
}
