use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::inputs::bind_input;
use crate::components::{ErrorBanner, FieldError, PasswordStrengthMeter};
use crate::hooks::use_app_context;
use crate::routes::Route;
use crate::services::auth_service;
use crate::viewmodels::{CustomerSignupForm, SignupErrors, SignupField};

#[function_component(CustomerSignUpPage)]
pub fn customer_sign_up_page() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();
    let form = use_state(CustomerSignupForm::default);
    let errors = use_state(SignupErrors::new);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let api = context.api.clone();
        let form = form.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match form.to_request() {
                Ok(request) => request,
                Err(invalid) => {
                    errors.set(invalid);
                    return;
                }
            };
            errors.set(SignupErrors::new());
            server_error.set(None);
            submitting.set(true);

            let api = api.clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::register_customer(&api, &request).await {
                    Ok(_) => {
                        log::info!("✅ Cliente registrado");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ Registro rechazado: {}", e);
                        server_error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_error = |field: SignupField| errors.get(&field).cloned();

    html! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>{"Create your account"}</h1>

                if let Some(message) = (*server_error).clone() {
                    <ErrorBanner message={message} />
                }

                <form onsubmit={on_submit} novalidate={true}>
                    <label for="name">{"Name"}</label>
                    <input id="name" value={form.name.clone()}
                        oninput={bind_input(&form, |f, v| f.name = v)} />
                    <FieldError message={field_error(SignupField::Name)} />

                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={form.email.clone()}
                        oninput={bind_input(&form, |f, v| f.email = v)} />
                    <FieldError message={field_error(SignupField::Email)} />

                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" autocomplete="new-password" value={form.password.clone()}
                        oninput={bind_input(&form, |f, v| f.password = v)} />
                    <PasswordStrengthMeter password={form.password.clone()} />
                    <FieldError message={field_error(SignupField::Password)} />

                    <label for="post_code">{"Postcode"}</label>
                    <input id="post_code" value={form.post_code.clone()}
                        oninput={bind_input(&form, |f, v| f.post_code = v)} />
                    <FieldError message={field_error(SignupField::PostCode)} />

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Sign up" } }
                    </button>
                </form>

                <div class="auth-links">
                    <span>{"Already registered? "}</span>
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
