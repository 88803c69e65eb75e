use yew::prelude::*;

use crate::components::{ErrorBanner, Spinner, TemplateCard};
use crate::config::CONFIG;
use crate::hooks::use_page_data;
use crate::models::{TemplateWithCount, Vendor};
use crate::services::{template_service, vendor_service, ApiError};
use crate::stores::LoadState;
use crate::utils::resolve_image_url;
use crate::viewmodels::partition_templates;

#[derive(Properties, PartialEq)]
pub struct CustomerVendorPageProps {
    pub vendor_id: u32,
}

#[function_component(CustomerVendorPage)]
pub fn customer_vendor_page(props: &CustomerVendorPageProps) -> Html {
    let page = use_page_data(props.vendor_id, |api, vendor_id| async move {
        let (vendor, templates) = futures::try_join!(
            vendor_service::get_vendor_by_id(&api, vendor_id),
            template_service::list_with_counts(&api, vendor_id)
        )?;
        Ok::<(Option<Vendor>, Vec<TemplateWithCount>), ApiError>((vendor, templates))
    });

    let (vendor, templates) = match &*page.state {
        LoadState::Loading => return html! { <Spinner /> },
        LoadState::Failed(message) => {
            return html! { <ErrorBanner message={message.clone()} on_retry={page.reload.clone()} /> };
        }
        LoadState::Ready(data) => data,
    };

    let Some(vendor) = vendor else {
        return html! {
            <div class="page">
                <p class="empty-state">{"This vendor could not be found."}</p>
            </div>
        };
    };

    let partition = partition_templates(templates.clone());
    let photo = resolve_image_url(vendor.photo.as_deref(), &CONFIG.image_base_url);

    html! {
        <div class="page vendor-view">
            <header class="vendor-header">
                if let Some(src) = photo {
                    <img class="vendor-banner" src={src} alt={vendor.name.clone()} />
                }
                <h1>{vendor.name.clone()}</h1>
                <p>{vendor.address_line()}</p>
                if !vendor.opening_hours.is_empty() {
                    <p class="opening-hours">{format!("🕒 {}", vendor.opening_hours)}</p>
                }
            </header>

            <section>
                <h2>{"Available bundles"}</h2>
                if partition.available.is_empty() {
                    <p class="empty-state">{"Nothing available right now. Check back later!"}</p>
                } else {
                    <div class="template-grid">
                        { for partition.available.into_iter().map(|item| {
                            let key = item.template.template_id;
                            html! { <TemplateCard key={key} item={item} /> }
                        }) }
                    </div>
                }
            </section>

            if !partition.sold_out.is_empty() {
                <section class="sold-out-section">
                    <h2>{"Sold out"}</h2>
                    <div class="template-grid">
                        { for partition.sold_out.into_iter().map(|item| {
                            let key = item.template.template_id;
                            html! { <TemplateCard key={key} item={item} /> }
                        }) }
                    </div>
                </section>
            }
        </div>
    }
}
