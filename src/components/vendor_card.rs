use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::models::Vendor;
use crate::routes::Route;
use crate::utils::resolve_image_url;

#[derive(Properties, PartialEq)]
pub struct VendorCardProps {
    pub vendor: Vendor,
}

#[function_component(VendorCard)]
pub fn vendor_card(props: &VendorCardProps) -> Html {
    let vendor = &props.vendor;
    let photo = resolve_image_url(vendor.photo.as_deref(), &CONFIG.image_base_url);

    html! {
        <Link<Route> to={Route::CustomerVendor { vendor_id: vendor.vendor_id }} classes="vendor-card">
            <div class="vendor-card-image">
                if let Some(src) = photo {
                    <img src={src} alt={vendor.name.clone()} />
                } else {
                    <div class="vendor-card-placeholder">{vendor.name.chars().next().unwrap_or('?').to_string()}</div>
                }
            </div>
            <div class="vendor-card-body">
                <h3>{vendor.name.clone()}</h3>
                <p class="vendor-card-address">{vendor.address_line()}</p>
                <div class="vendor-card-tags">
                    <span class="tag">{format!("{} bundles", vendor.bundle_count)}</span>
                    if vendor.has_vegan {
                        <span class="tag tag-vegan">{"Vegan"}</span>
                    }
                    if vendor.has_vegetarian && !vendor.has_vegan {
                        <span class="tag tag-vegetarian">{"Vegetarian"}</span>
                    }
                </div>
            </div>
        </Link<Route>>
    }
}
