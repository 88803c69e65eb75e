// ============================================================================
// CUSTOMER RESERVATIONS - reservas de hoy y anteriores, con cancelación
// ============================================================================

use chrono::Local;
use yew::prelude::*;

use crate::components::{ErrorBanner, Spinner};
use crate::hooks::{use_app_context, use_page_data};
use crate::models::{Reservation, ReservationStatus};
use crate::services::{reservation_service, ApiError};
use crate::stores::LoadState;
use crate::utils::format::format_timestamp;
use crate::utils::format_gbp;
use crate::viewmodels::{partition_for_customer, with_status};

fn reservation_row(reservation: &Reservation, on_cancel: Option<Callback<MouseEvent>>) -> Html {
    let status = reservation.status;
    html! {
        <li class={classes!("reservation-row", status.label().to_lowercase())} key={reservation.reservation_id}>
            <div class="reservation-main">
                <strong>{reservation.template_title.clone().unwrap_or_else(|| format!("Reservation #{}", reservation.reservation_id))}</strong>
                if let Some(vendor) = &reservation.vendor_name {
                    <span class="reservation-vendor">{vendor.clone()}</span>
                }
                <span class="reservation-time">{format_timestamp(&reservation.time_created)}</span>
            </div>
            <div class="reservation-side">
                if status == ReservationStatus::Booked {
                    <span class="pickup-code">{reservation.pickup_code()}</span>
                }
                if let Some(cost) = reservation.cost {
                    <span class="price">{format_gbp(cost)}</span>
                }
                <span class="status-badge">{status.label()}</span>
                if let Some(on_cancel) = on_cancel {
                    <button class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                }
            </div>
        </li>
    }
}

#[function_component(CustomerReservationsPage)]
pub fn customer_reservations_page() -> Html {
    let context = use_app_context();
    let page = use_page_data((), |api, ()| async move { reservation_service::list_for_customer(&api).await });
    let action_error = use_state(|| None::<String>);
    let cancelling = use_state(|| None::<u32>);

    let on_cancel = {
        let api = context.api.clone();
        let state = page.state.clone();
        let action_error = action_error.clone();
        let cancelling = cancelling.clone();
        Callback::from(move |reservation_id: u32| {
            if cancelling.is_some() {
                return;
            }
            cancelling.set(Some(reservation_id));
            action_error.set(None);

            let api = api.clone();
            let state = state.clone();
            let action_error = action_error.clone();
            let cancelling = cancelling.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match reservation_service::cancel(&api, reservation_id).await {
                    Ok(_) => {
                        if let Some(reservations) = state.data() {
                            let updated = with_status(reservations, reservation_id, ReservationStatus::Cancelled);
                            state.set(LoadState::Ready(updated));
                        }
                    }
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => {
                        log::warn!("⚠️ No se pudo cancelar la reserva {}: {}", reservation_id, e);
                        action_error.set(Some(e.user_message()));
                    }
                }
                cancelling.set(None);
            });
        })
    };

    let reservations = match &*page.state {
        LoadState::Loading => return html! { <Spinner /> },
        LoadState::Failed(message) => {
            return html! { <ErrorBanner message={message.clone()} on_retry={page.reload.clone()} /> };
        }
        LoadState::Ready(reservations) => reservations,
    };

    let today = Local::now().date_naive();
    let partition = partition_for_customer(reservations.clone(), today);

    html! {
        <div class="page reservations">
            <h1>{"My reservations"}</h1>

            if let Some(message) = (*action_error).clone() {
                <ErrorBanner message={message} />
            }

            if partition.is_empty() {
                <p class="empty-state">{"You haven't reserved anything yet."}</p>
            } else {
                <section>
                    <h2>{"Today"}</h2>
                    if partition.active.is_empty() {
                        <p class="empty-state">{"No active reservations."}</p>
                    } else {
                        <ul class="reservation-list">
                            { for partition.active.iter().map(|reservation| {
                                let id = reservation.reservation_id;
                                let on_cancel = (*cancelling != Some(id)).then(|| on_cancel.reform(move |_: MouseEvent| id));
                                reservation_row(reservation, on_cancel)
                            }) }
                        </ul>
                    }
                </section>
                if !partition.previous.is_empty() {
                    <section>
                        <h2>{"Previous"}</h2>
                        <ul class="reservation-list previous">
                            { for partition.previous.iter().map(|reservation| reservation_row(reservation, None)) }
                        </ul>
                    </section>
                }
            }
        </div>
    }
}
