use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::models::Role;
use crate::routes::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);

    let role = context.session.role();
    let email = context.session.user().map(|user| user.email);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let session = context.session.clone();
        Callback::from(move |_: MouseEvent| {
            session.clear();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let links = match role {
        Some(Role::Customer) => html! {
            <>
                <Link<Route> to={Route::CustomerHome} classes="nav-link">{"Browse"}</Link<Route>>
                <Link<Route> to={Route::CustomerReservations} classes="nav-link">{"Reservations"}</Link<Route>>
                <Link<Route> to={Route::CustomerCredit} classes="nav-link">{"Wallet"}</Link<Route>>
            </>
        },
        Some(Role::Vendor) => html! {
            <>
                <Link<Route> to={Route::VendorDashboard} classes="nav-link">{"Dashboard"}</Link<Route>>
                <Link<Route> to={Route::VendorReservations} classes="nav-link">{"Reservations"}</Link<Route>>
                <Link<Route> to={Route::VendorAnalytics} classes="nav-link">{"Analytics"}</Link<Route>>
            </>
        },
        None => html! {},
    };

    html! {
        <header>
            <nav class="navbar">
                <div class="navbar-menu">
                    <button type="button" class="btn-account" onclick={toggle_menu}>{"👤"}</button>
                    if *menu_open {
                        <div class="account-dropdown">
                            if let Some(email) = email {
                                <p class="account-email">{email}</p>
                            }
                            <hr />
                            <button type="button" class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                        </div>
                    }
                </div>
                <div class="navbar-links">{links}</div>
                <Link<Route> to={Route::Root} classes="navbar-home">{"🏠"}</Link<Route>>
            </nav>
        </header>
    }
}
