// ============================================================================
// CUSTOMER CREDIT - recarga del monedero con tarjeta
// ============================================================================
// La validación es solo de forma (Luhn, caducidad, CVV); el cobro real y su
// verificación son cosa del backend.
// ============================================================================

use chrono::Local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::inputs::bind_input;
use crate::components::{ErrorBanner, FieldError, Spinner};
use crate::hooks::{use_app_context, use_page_data};
use crate::routes::Route;
use crate::services::{customer_service, ApiError};
use crate::stores::LoadState;
use crate::utils::card::{digits_only, format_card_number, format_expiry_input, CARD_MAX_DIGITS};
use crate::utils::{format_gbp, CardNetwork, TOP_UP_PRESETS};
use crate::viewmodels::{CreditErrors, CreditField, CreditForm};

#[function_component(CustomerCreditPage)]
pub fn customer_credit_page() -> Html {
    let context = use_app_context();
    let page = use_page_data((), |api, ()| async move { customer_service::get_profile(&api).await });
    let form = use_state(CreditForm::default);
    let errors = use_state(CreditErrors::new);
    let server_error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let api = context.api.clone();
        let form = form.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        let reload = page.reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match form.to_request(Local::now().date_naive()) {
                Ok(request) => request,
                Err(invalid) => {
                    errors.set(invalid);
                    return;
                }
            };
            errors.set(CreditErrors::new());
            server_error.set(None);
            success.set(None);
            submitting.set(true);

            let api = api.clone();
            let form = form.clone();
            let server_error = server_error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match customer_service::add_credit(&api, &request).await {
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| format!("{} added to your wallet", format_gbp(request.credit_top_up)));
                        success.set(Some(message));
                        form.set(CreditForm::default());
                        reload.emit(());
                    }
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => {
                        log::warn!("⚠️ Recarga rechazada: {}", e);
                        server_error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let balance = match &*page.state {
        LoadState::Loading => html! { <Spinner label="Loading balance..." /> },
        LoadState::Failed(message) => html! {
            <ErrorBanner message={message.clone()} on_retry={page.reload.clone()} />
        },
        LoadState::Ready(customer) => html! {
            <div class="stat-card">
                <span class="stat-label">{"Current balance"}</span>
                <span class="stat-value">{format_gbp(customer.store_credit)}</span>
            </div>
        },
    };

    let field_error = |field: CreditField| errors.get(&field).cloned();
    let network = form.network();
    let cvv_len = network.cvv_len();

    html! {
        <div class="page credit">
            <h1>{"Top up your wallet"}</h1>
            {balance}

            if let Some(message) = (*success).clone() {
                <div class="success-banner">
                    <span>{format!("✅ {}", message)}</span>
                    <Link<Route> to={Route::CustomerHome}>{"Back to home"}</Link<Route>>
                </div>
            }
            if let Some(message) = (*server_error).clone() {
                <ErrorBanner message={message} />
            }

            <form onsubmit={on_submit} novalidate={true}>
                <fieldset>
                    <legend>{"Amount"}</legend>
                    <div class="preset-row">
                        { for TOP_UP_PRESETS.iter().map(|preset| {
                            let value = preset.to_string();
                            let selected = form.amount.trim() == value;
                            let onclick = {
                                let form = form.clone();
                                let value = value.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*form).clone();
                                    next.amount = value.clone();
                                    form.set(next);
                                })
                            };
                            html! {
                                <button type="button" key={value.clone()}
                                    class={classes!("preset", selected.then_some("selected"))}
                                    {onclick}>
                                    {format!("£{}", preset)}
                                </button>
                            }
                        }) }
                    </div>
                    <input id="amount" type="number" min="5" max="100" step="0.01" value={form.amount.clone()}
                        oninput={bind_input(&form, |f, v| f.amount = v)} />
                    <FieldError message={field_error(CreditField::Amount)} />
                </fieldset>

                <fieldset>
                    <legend>{"Card details"}</legend>
                    <label for="card_name">{"Name on card"}</label>
                    <input id="card_name" autocomplete="cc-name" value={form.card_name.clone()}
                        oninput={bind_input(&form, |f, v| f.card_name = v)} />
                    <FieldError message={field_error(CreditField::CardName)} />

                    <label for="card_number">{"Card number"}</label>
                    <div class="card-number-row">
                        <input id="card_number" inputmode="numeric" autocomplete="cc-number"
                            maxlength={(CARD_MAX_DIGITS + CARD_MAX_DIGITS / 4).to_string()}
                            value={form.card_number.clone()}
                            oninput={bind_input(&form, |f, v| f.card_number = format_card_number(&v))} />
                        if network != CardNetwork::Unknown {
                            <span class="card-network">{network.label()}</span>
                        }
                    </div>
                    if !form.live_luhn_ok() {
                        <p class="field-warning">{"This card number doesn't look right"}</p>
                    }
                    <FieldError message={field_error(CreditField::CardNumber)} />

                    <div class="card-row">
                        <div>
                            <label for="expiry">{"Expiry (MM/YY)"}</label>
                            <input id="expiry" inputmode="numeric" autocomplete="cc-exp" placeholder="MM/YY"
                                value={form.expiry.clone()}
                                oninput={bind_input(&form, |f, v| f.expiry = format_expiry_input(&v))} />
                            <FieldError message={field_error(CreditField::Expiry)} />
                        </div>
                        <div>
                            <label for="cvv">{"CVV"}</label>
                            <input id="cvv" inputmode="numeric" autocomplete="cc-csc"
                                maxlength={cvv_len.to_string()}
                                value={form.cvv.clone()}
                                oninput={bind_input(&form, |f, v| f.cvv = digits_only(&v).chars().take(4).collect())} />
                            <FieldError message={field_error(CreditField::Cvv)} />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>{"Billing address"}</legend>
                    <label for="address">{"First line of address"}</label>
                    <input id="address" autocomplete="address-line1" value={form.address.clone()}
                        oninput={bind_input(&form, |f, v| f.address = v)} />
                    <FieldError message={field_error(CreditField::Address)} />

                    <label for="postcode">{"Postcode"}</label>
                    <input id="postcode" autocomplete="postal-code" value={form.postcode.clone()}
                        oninput={bind_input(&form, |f, v| f.postcode = v)} />
                    <FieldError message={field_error(CreditField::Postcode)} />
                </fieldset>

                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Processing...".to_string() } else {
                        form.amount_value().map(|amount| format!("Add {}", format_gbp(amount))).unwrap_or_else(|| "Add credit".to_string())
                    } }
                </button>
            </form>
        </div>
    }
}
