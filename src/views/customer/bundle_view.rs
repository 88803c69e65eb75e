// ============================================================================
// BUNDLE VIEW - detalle de una plantilla y reserva
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorBanner, Spinner};
use crate::config::CONFIG;
use crate::hooks::{use_app_context, use_page_data};
use crate::models::{AvailableCount, ReserveResponse, TemplateWithCount, Vendor};
use crate::routes::Route;
use crate::services::{reservation_service, template_service, vendor_service, ApiError};
use crate::stores::LoadState;
use crate::utils::{format_gbp, resolve_image_url};
use crate::viewmodels::{composition, dietary_badge};

struct BundleData {
    item: TemplateWithCount,
    vendor: Option<Vendor>,
}

/// El nombre del vendedor es decorativo: si falla se muestra el bundle igual
async fn load_bundle(api: crate::services::ApiClient, template_id: u32) -> Result<BundleData, ApiError> {
    let item = template_service::get_with_count(&api, template_id).await?;
    let vendor = match vendor_service::get_vendor_by_id(&api, item.template.vendor).await {
        Ok(vendor) => vendor,
        Err(error @ (ApiError::Unauthorized | ApiError::Cancelled)) => return Err(error),
        Err(error) => {
            log::warn!("⚠️ Vendedor {} no disponible: {}", item.template.vendor, error);
            None
        }
    };
    Ok(BundleData { item, vendor })
}

#[derive(Properties, PartialEq)]
pub struct BundleDetailsPageProps {
    pub template_id: u32,
}

#[function_component(BundleDetailsPage)]
pub fn bundle_details_page(props: &BundleDetailsPageProps) -> Html {
    let context = use_app_context();
    let page = use_page_data(props.template_id, load_bundle);
    let reserving = use_state(|| false);
    let reserved = use_state(|| None::<ReserveResponse>);
    let action_error = use_state(|| None::<String>);

    let on_reserve = {
        let api = context.api.clone();
        let template_id = props.template_id;
        let state = page.state.clone();
        let reserving = reserving.clone();
        let reserved = reserved.clone();
        let action_error = action_error.clone();
        Callback::from(move |_: MouseEvent| {
            if *reserving {
                return;
            }
            reserving.set(true);
            action_error.set(None);

            let api = api.clone();
            let state = state.clone();
            let reserving = reserving.clone();
            let reserved = reserved.clone();
            let action_error = action_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match reservation_service::reserve(&api, template_id).await {
                    Ok(response) => {
                        // Una unidad menos en pantalla hasta la próxima carga
                        if let LoadState::Ready(data) = &*state {
                            if let AvailableCount::Known(n) = data.item.available {
                                let mut item = data.item.clone();
                                item.available = AvailableCount::Known(n.saturating_sub(1));
                                state.set(LoadState::Ready(BundleData { item, vendor: data.vendor.clone() }));
                            }
                        }
                        reserved.set(Some(response));
                    }
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => {
                        log::warn!("⚠️ Reserva fallida: {}", e);
                        action_error.set(Some(e.user_message()));
                    }
                }
                reserving.set(false);
            });
        })
    };

    let data = match &*page.state {
        LoadState::Loading => return html! { <Spinner /> },
        LoadState::Failed(message) => {
            return html! { <ErrorBanner message={message.clone()} on_retry={page.reload.clone()} /> };
        }
        LoadState::Ready(data) => data,
    };

    let template = &data.item.template;
    let sold_out = data.item.available.is_sold_out();
    let photo = resolve_image_url(template.photo.as_deref(), &CONFIG.image_base_url);

    html! {
        <div class="page bundle-view">
            if let Some(src) = photo {
                <img class="bundle-image" src={src} alt={template.title.clone()} />
            }
            <h1>{template.title.clone()}</h1>
            if let Some(vendor) = &data.vendor {
                <Link<Route> to={Route::CustomerVendor { vendor_id: vendor.vendor_id }} classes="bundle-vendor">
                    {format!("from {}", vendor.name)}
                </Link<Route>>
            }
            <p class="bundle-description">{template.description.clone()}</p>

            <div class="bundle-badges">
                if let Some(badge) = dietary_badge(template) {
                    <span class={classes!("tag", badge.to_lowercase())}>{badge}</span>
                }
                <span class={classes!("stock-badge", sold_out.then_some("sold-out"))}>
                    {data.item.available.label()}
                </span>
            </div>

            <div class="bundle-pricing">
                <span class="price">{format_gbp(template.cost)}</span>
                if template.estimated_value > template.cost {
                    <span class="was-price">{format!("worth {}", format_gbp(template.estimated_value))}</span>
                    <span class="savings">{format!("save {}", format_gbp(template.savings()))}</span>
                }
            </div>

            <section class="bundle-composition">
                <h2>{"What's inside"}</h2>
                <ul>
                    { for composition(template).into_iter().map(|(label, percent)| html! {
                        <li><span>{label}</span><span>{percent}</span></li>
                    }) }
                </ul>
                if template.weight > 0.0 {
                    <p>{format!("Approx. {}kg of food", template.weight)}</p>
                }
                if template.carbon_saved > 0.0 {
                    <p>{format!("🌱 Saves {}kg CO2e", template.carbon_saved)}</p>
                }
            </section>

            <section class="bundle-allergens">
                <h2>{"Allergens"}</h2>
                if template.allergens.is_empty() {
                    <p>{"No allergens listed"}</p>
                } else {
                    <ul class="allergen-list">
                        { for template.allergens.iter().map(|allergen| html! {
                            <li key={allergen.allergen_id}>{allergen.name.clone()}</li>
                        }) }
                    </ul>
                }
            </section>

            if let Some(message) = (*action_error).clone() {
                <ErrorBanner message={message} />
            }

            if let Some(response) = (*reserved).clone() {
                <div class="reservation-confirmation">
                    <h2>{"Reserved!"}</h2>
                    if let Some(code) = response.code {
                        <p class="pickup-code">{format!("Your pickup code: {:04}", code)}</p>
                    } else {
                        <p>{response.message.unwrap_or_else(|| "Your bundle is reserved.".to_string())}</p>
                        <p>{"Your pickup code is on your reservations page."}</p>
                    }
                    <Link<Route> to={Route::CustomerReservations} classes="btn-secondary">{"View reservations"}</Link<Route>>
                </div>
            } else {
                <button
                    class="btn-primary btn-reserve"
                    disabled={sold_out || *reserving}
                    onclick={on_reserve}
                >
                    { if sold_out { "Sold out" } else if *reserving { "Reserving..." } else { "Reserve" } }
                </button>
            }
        </div>
    }
}
