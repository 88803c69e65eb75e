// ============================================================================
// VENDOR SIGN UP - registro de negocio en tres pasos
// ============================================================================
// Registro -> login automático -> foto opcional -> dashboard. Si la foto
// falla la cuenta ya existe: se registra el aviso y se sigue.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::inputs::{bind_input, selected_file};
use crate::components::{ErrorBanner, FieldError, PasswordStrengthMeter};
use crate::hooks::use_app_context;
use crate::routes::Route;
use crate::services::auth_service;
use crate::viewmodels::{SignupErrors, SignupField, VendorSignupForm, VendorStep};

fn preview_url(file: &web_sys::File) -> Option<String> {
    match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("⚠️ Sin vista previa de la imagen: {:?}", e);
            None
        }
    }
}

#[function_component(VendorSignUpPage)]
pub fn vendor_sign_up_page() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();
    let step = use_state(|| VendorStep::Account);
    let form = use_state(VendorSignupForm::default);
    let errors = use_state(SignupErrors::new);
    let image = use_state(|| None::<web_sys::File>);
    let preview = use_state(|| None::<String>);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_next = {
        let step = step.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let invalid = form.validate_step(*step);
            if !invalid.is_empty() {
                errors.set(invalid);
                return;
            }
            errors.set(SignupErrors::new());
            if let Some(next) = step.next() {
                step.set(next);
            }
        })
    };

    let on_back = {
        let step = step.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(previous) = step.previous() {
                errors.set(SignupErrors::new());
                step.set(previous);
            }
        })
    };

    let on_image = {
        let image = image.clone();
        let preview = preview.clone();
        Callback::from(move |e: Event| {
            if let Some(old) = (*preview).as_ref() {
                let _ = web_sys::Url::revoke_object_url(old);
            }
            let file = selected_file(&e);
            preview.set(file.as_ref().and_then(preview_url));
            image.set(file);
        })
    };

    let on_submit = {
        let api = context.api.clone();
        let step = step.clone();
        let form = form.clone();
        let errors = errors.clone();
        let image = image.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting || !step.is_last() {
                return;
            }

            let request = match form.to_request() {
                Ok(request) => request,
                Err((invalid_step, invalid)) => {
                    step.set(invalid_step);
                    errors.set(invalid);
                    return;
                }
            };
            server_error.set(None);
            submitting.set(true);

            let api = api.clone();
            let image = (*image).clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    auth_service::register_vendor(&api, &request).await?;
                    auth_service::login(&api, &request.user.email, &request.user.password).await?;
                    if let Some(file) = image {
                        if let Err(e) = auth_service::upload_vendor_image(&api, &file).await {
                            log::warn!("⚠️ Cuenta creada pero la foto no se subió: {}", e);
                        }
                    }
                    Ok::<(), crate::services::ApiError>(())
                }
                .await;

                match result {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::VendorDashboard);
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ Registro de vendedor fallido: {}", e);
                        server_error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_error = |field: SignupField| errors.get(&field).cloned();

    let fields = match *step {
        VendorStep::Account => html! {
            <>
                <label for="name">{"Vendor name"}</label>
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
            </>
        },
        VendorStep::Business => html! {
            <>
                <label for="street">{"Street"}</label>
                <input id="street" value={form.street.clone()}
                    oninput={bind_input(&form, |f, v| f.street = v)} />
                <FieldError message={field_error(SignupField::Street)} />

                <label for="city">{"City"}</label>
                <input id="city" value={form.city.clone()}
                    oninput={bind_input(&form, |f, v| f.city = v)} />
                <FieldError message={field_error(SignupField::City)} />

                <label for="post_code">{"Postcode"}</label>
                <input id="post_code" value={form.post_code.clone()}
                    oninput={bind_input(&form, |f, v| f.post_code = v)} />
                <FieldError message={field_error(SignupField::PostCode)} />

                <label for="opening_hours">{"Opening hours"}</label>
                <input id="opening_hours" placeholder="Mon-Fri 9:00-17:00" value={form.opening_hours.clone()}
                    oninput={bind_input(&form, |f, v| f.opening_hours = v)} />
                <FieldError message={field_error(SignupField::OpeningHours)} />

                <label for="phone_number">{"Phone number"}</label>
                <input id="phone_number" type="tel" value={form.phone_number.clone()}
                    oninput={bind_input(&form, |f, v| f.phone_number = v)} />
                <FieldError message={field_error(SignupField::PhoneNumber)} />
            </>
        },
        VendorStep::Image => html! {
            <>
                <label for="image">{"Shop photo (optional)"}</label>
                <input id="image" type="file" accept="image/*" onchange={on_image} />
                if let Some(url) = (*preview).clone() {
                    <img class="image-preview" src={url} alt="Shop preview" />
                }
            </>
        },
    };

    html! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>{"Register your business"}</h1>
                <div class="stepper">
                    <span>{format!("Step {} of {}: {}", step.number(), VendorStep::ALL.len(), step.title())}</span>
                    <div class="progress-bar">
                        <div class="progress-fill" style={format!("width: {}%", step.progress_percent())}></div>
                    </div>
                </div>

                if let Some(message) = (*server_error).clone() {
                    <ErrorBanner message={message} />
                }

                <form onsubmit={on_submit} novalidate={true}>
                    {fields}
                    <div class="form-actions">
                        if step.previous().is_some() {
                            <button type="button" class="btn-secondary" onclick={on_back}>{"Back"}</button>
                        }
                        if step.is_last() {
                            <button type="submit" class="btn-primary" disabled={*submitting}>
                                { if *submitting { "Creating account..." } else { "Create account" } }
                            </button>
                        } else {
                            <button type="button" class="btn-primary" onclick={on_next}>{"Next"}</button>
                        }
                    </div>
                </form>

                <div class="auth-links">
                    <span>{"Already registered? "}</span>
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
