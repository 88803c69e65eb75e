// ============================================================================
// USE PAGE DATA - carga inicial de una página
// ============================================================================
// - Un CancelToken por montaje; el cleanup del efecto lo cancela y las
//   respuestas tardías se descartan
// - Error genérico -> LoadState::Failed (banner); 401 -> nada, el cliente
//   ya ha cerrado sesión y redirigido
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::hooks::app_context::use_app_context;
use crate::services::{ApiClient, ApiError};
use crate::stores::LoadState;
use crate::utils::CancelToken;

pub struct UsePageDataHandle<T: 'static> {
    pub state: UseStateHandle<LoadState<T>>,
    /// Vuelve a lanzar la carga (botón "Retry" del banner)
    pub reload: Callback<()>,
}

#[hook]
pub fn use_page_data<T, D, F, Fut>(deps: D, loader: F) -> UsePageDataHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(ApiClient, D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let context = use_app_context();
    let state = use_state(LoadState::<T>::default);
    let version = use_state(|| 0u32);

    {
        let state = state.clone();
        let api = context.api.clone();
        use_effect_with((deps, *version), move |(deps, _)| {
            let token = CancelToken::new();
            if !state.is_loading() {
                state.set(LoadState::Loading);
            }

            let request = loader(api.with_cancel(&token), deps.clone());
            let guard = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = request.await;
                if guard.is_cancelled() {
                    log::debug!("🚫 Carga descartada: la página ya no está montada");
                    return;
                }
                match result {
                    Ok(data) => state.set(LoadState::Ready(data)),
                    Err(ApiError::Unauthorized) | Err(ApiError::Cancelled) => {}
                    Err(error) => {
                        log::error!("❌ Error cargando la página: {}", error);
                        state.set(LoadState::Failed(error.user_message()));
                    }
                }
            });

            move || token.cancel()
        });
    }

    let reload = {
        let version = version.clone();
        Callback::from(move |_| version.set(version.wrapping_add(1)))
    };

    UsePageDataHandle { state, reload }
}
