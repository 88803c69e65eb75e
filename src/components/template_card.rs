use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::TemplateWithCount;
use crate::routes::Route;
use crate::utils::format_gbp;
use crate::viewmodels::{composition, dietary_badge};

#[derive(Properties, PartialEq)]
pub struct TemplateCardProps {
    pub item: TemplateWithCount,
    /// Solo los clientes navegan al detalle
    #[prop_or(true)]
    pub linkable: bool,
    #[prop_or_default]
    pub footer: Option<Html>,
}

#[function_component(TemplateCard)]
pub fn template_card(props: &TemplateCardProps) -> Html {
    let template = &props.item.template;
    let sold_out = props.item.available.is_sold_out();

    let body = html! {
        <>
            <div class="template-card-header">
                <span class={classes!("stock-badge", sold_out.then_some("sold-out"))}>
                    {props.item.available.label()}
                </span>
                if let Some(badge) = dietary_badge(template) {
                    <span class={classes!("tag", badge.to_lowercase())}>{badge}</span>
                }
            </div>
            <h3>{template.title.clone()}</h3>
            <p class="template-card-description">{template.description.clone()}</p>
            <div class="template-card-composition">
                { for composition(template).into_iter().map(|(label, percent)| html! {
                    <span>{format!("{} {}", percent, label)}</span>
                }) }
            </div>
            <div class="template-card-footer">
                <span class="price">{format_gbp(template.cost)}</span>
                if template.carbon_saved > 0.0 {
                    <span class="carbon">{format!("🌱 {}kg CO2e", template.carbon_saved)}</span>
                }
            </div>
        </>
    };

    let card_class = classes!("template-card", sold_out.then_some("sold-out"));
    html! {
        <div class={card_class}>
            if props.linkable && !sold_out {
                <Link<Route> to={Route::BundleDetails { template_id: template.template_id }} classes="template-card-link">
                    {body}
                </Link<Route>>
            } else {
                {body}
            }
            if let Some(footer) = &props.footer {
                {footer.clone()}
            }
        </div>
    }
}
