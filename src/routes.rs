// ============================================================================
// ROUTES - rutas del cliente y qué página pinta cada una
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{MainLayout, ProtectedRoute};
use crate::hooks::use_app_context;
use crate::models::Role;
use crate::views::auth::{CustomerSignUpPage, LoginPage, VendorSignUpPage};
use crate::views::customer::{
    BundleDetailsPage, CustomerCreditPage, CustomerHomePage, CustomerReservationsPage,
    CustomerVendorPage,
};
use crate::views::vendor::{
    TemplateEditorPage, VendorAnalyticsPage, VendorDashboardPage, VendorReservationsPage,
};
use crate::views::NotFoundPage;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/customer/signup")]
    CustomerSignUp,
    #[at("/vendor/signup")]
    VendorSignUp,

    #[at("/customer/home")]
    CustomerHome,
    #[at("/customer/vendor/:vendor_id")]
    CustomerVendor { vendor_id: u32 },
    #[at("/bundle/:template_id")]
    BundleDetails { template_id: u32 },
    #[at("/customer/reservations")]
    CustomerReservations,
    #[at("/customer/credit")]
    CustomerCredit,

    #[at("/vendor/dashboard")]
    VendorDashboard,
    #[at("/vendor/reservations")]
    VendorReservations,
    #[at("/vendor/analytics")]
    VendorAnalytics,
    #[at("/vendor/templates/new")]
    TemplateEditor,

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn home_route_for(role: Role) -> Route {
    match role {
        Role::Customer => Route::CustomerHome,
        Role::Vendor => Route::VendorDashboard,
    }
}

/// `/`: cada rol a su inicio, el resto al login
#[function_component(RootRedirect)]
fn root_redirect() -> Html {
    let context = use_app_context();
    let target = match (context.session.is_authenticated(), context.session.role()) {
        (true, Some(role)) => home_route_for(role),
        _ => Route::Login,
    };
    html! { <Redirect<Route> to={target} /> }
}

fn guarded(role: Role, page: Html) -> Html {
    html! {
        <ProtectedRoute {role}>
            <MainLayout>{page}</MainLayout>
        </ProtectedRoute>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <RootRedirect /> },
        Route::Login => html! { <LoginPage /> },
        Route::CustomerSignUp => html! { <CustomerSignUpPage /> },
        Route::VendorSignUp => html! { <VendorSignUpPage /> },

        Route::CustomerHome => guarded(Role::Customer, html! { <CustomerHomePage /> }),
        Route::CustomerVendor { vendor_id } => {
            guarded(Role::Customer, html! { <CustomerVendorPage {vendor_id} /> })
        }
        Route::BundleDetails { template_id } => {
            guarded(Role::Customer, html! { <BundleDetailsPage {template_id} /> })
        }
        Route::CustomerReservations => guarded(Role::Customer, html! { <CustomerReservationsPage /> }),
        Route::CustomerCredit => guarded(Role::Customer, html! { <CustomerCreditPage /> }),

        Route::VendorDashboard => guarded(Role::Vendor, html! { <VendorDashboardPage /> }),
        Route::VendorReservations => guarded(Role::Vendor, html! { <VendorReservationsPage /> }),
        Route::VendorAnalytics => guarded(Role::Vendor, html! { <VendorAnalyticsPage /> }),
        Route::TemplateEditor => guarded(Role::Vendor, html! { <TemplateEditorPage /> }),

        Route::NotFound => html! { <NotFoundPage /> },
    }
}
