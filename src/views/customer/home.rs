// ============================================================================
// CUSTOMER HOME - perfil, racha y listado de vendedores
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::inputs::{bind_checkbox, bind_input, select_value};
use crate::components::{ErrorBanner, Spinner, VendorCard};
use crate::hooks::use_page_data;
use crate::models::{Customer, Streak, Vendor};
use crate::routes::Route;
use crate::services::{customer_service, vendor_service, ApiError};
use crate::stores::LoadState;
use crate::utils::format_gbp;
use crate::viewmodels::{browse_vendors, VendorFilter, VendorSort};

struct HomeData {
    customer: Customer,
    streak: Option<Streak>,
    vendors: Vec<Vendor>,
}

#[function_component(CustomerHomePage)]
pub fn customer_home_page() -> Html {
    let page = use_page_data((), |api, ()| async move {
        let (customer, streak, vendors) = futures::try_join!(
            customer_service::get_profile(&api),
            customer_service::get_streak(&api),
            vendor_service::list_vendors(&api)
        )?;
        Ok::<_, ApiError>(HomeData { customer, streak, vendors })
    });
    let filter = use_state(VendorFilter::default);

    let on_sort = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.sort = VendorSort::parse(&select_value(&e));
            filter.set(next);
        })
    };

    let data = match &*page.state {
        LoadState::Loading => return html! { <Spinner label="Loading your dashboard..." /> },
        LoadState::Failed(message) => {
            return html! { <ErrorBanner message={message.clone()} on_retry={page.reload.clone()} /> };
        }
        LoadState::Ready(data) => data,
    };

    let visible = browse_vendors(&data.vendors, &filter);
    let streak_weeks = data.streak.as_ref().filter(|s| !s.ended).map(|s| s.count).unwrap_or(0);

    html! {
        <div class="page customer-home">
            <section class="welcome">
                <h1>{format!("Hi, {}", data.customer.name)}</h1>
                <div class="stats-row">
                    <div class="stat-card">
                        <span class="stat-label">{"Store credit"}</span>
                        <span class="stat-value">{format_gbp(data.customer.store_credit)}</span>
                        <Link<Route> to={Route::CustomerCredit} classes="stat-link">{"Top up"}</Link<Route>>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">{"Carbon saved"}</span>
                        <span class="stat-value">{format!("{:.1}kg CO2e", data.customer.carbon_saved)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">{"Streak"}</span>
                        <span class="stat-value">{format!("🔥 {} week{}", streak_weeks, if streak_weeks == 1 { "" } else { "s" })}</span>
                    </div>
                </div>
            </section>

            <section class="vendor-browser">
                <div class="filters">
                    <input
                        type="search"
                        placeholder="Search by name, city or postcode"
                        value={filter.query.clone()}
                        oninput={bind_input(&filter, |f, v| f.query = v)}
                    />
                    <label>
                        <input type="checkbox" checked={filter.vegan_only}
                            onchange={bind_checkbox(&filter, |f, v| f.vegan_only = v)} />
                        {"Vegan"}
                    </label>
                    <label>
                        <input type="checkbox" checked={filter.vegetarian_only}
                            onchange={bind_checkbox(&filter, |f, v| f.vegetarian_only = v)} />
                        {"Vegetarian"}
                    </label>
                    <select onchange={on_sort}>
                        <option value={VendorSort::Name.as_str()} selected={filter.sort == VendorSort::Name}>{"Name"}</option>
                        <option value={VendorSort::Bundles.as_str()} selected={filter.sort == VendorSort::Bundles}>{"Most bundles"}</option>
                    </select>
                </div>

                if visible.is_empty() {
                    <p class="empty-state">{"No vendors match your search."}</p>
                } else {
                    <div class="vendor-grid">
                        { for visible.into_iter().map(|vendor| {
                            let key = vendor.vendor_id;
                            html! { <VendorCard key={key} vendor={vendor} /> }
                        }) }
                    </div>
                }
            </section>
        </div>
    }
}
