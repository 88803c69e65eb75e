// ============================================================================
// LOGIN - email + contraseña, redirige a la home del rol
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::inputs::input_value;
use crate::components::ErrorBanner;
use crate::hooks::use_app_context;
use crate::routes::{home_route_for, Route};
use crate::services::auth_service;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Con sesión activa no tiene sentido mostrar el login
    if context.session.is_authenticated() {
        if let Some(role) = context.session.role() {
            return html! { <Redirect<Route> to={home_route_for(role)} /> };
        }
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    let on_submit = {
        let api = context.api.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Enter your email and password".to_string()));
                return;
            }

            let api = api.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&api, &email, &password).await {
                    Ok(response) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&home_route_for(response.user.role));
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ Login fallido: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>{"Welcome back"}</h1>
                <p class="auth-subtitle">{"Log in to rescue surplus food near you"}</p>

                if let Some(message) = (*error).clone() {
                    <ErrorBanner message={message} />
                }

                <form onsubmit={on_submit}>
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Logging in..." } else { "Log in" } }
                    </button>
                </form>

                <div class="auth-links">
                    <span>{"New here? "}</span>
                    <Link<Route> to={Route::CustomerSignUp}>{"Sign up as a customer"}</Link<Route>>
                    <span>{" or "}</span>
                    <Link<Route> to={Route::VendorSignUp}>{"register your business"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
