use crate::models::{Template, TemplateWithCount};
use crate::utils::format_percent;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplatePartition {
    /// Con stock o con stock desconocido
    pub available: Vec<TemplateWithCount>,
    pub sold_out: Vec<TemplateWithCount>,
}

pub fn partition_templates(templates: Vec<TemplateWithCount>) -> TemplatePartition {
    let (sold_out, available) = templates
        .into_iter()
        .partition(|item| item.available.is_sold_out());
    TemplatePartition { available, sold_out }
}

/// Solo se muestra una insignia: vegano tiene prioridad
pub fn dietary_badge(template: &Template) -> Option<&'static str> {
    if template.is_vegan {
        Some("Vegan")
    } else if template.is_vegetarian {
        Some("Vegetarian")
    } else {
        None
    }
}

/// Partes de la composición distintas de cero, p.ej. `("Meat", "25%")`
pub fn composition(template: &Template) -> Vec<(&'static str, String)> {
    [
        ("Meat", template.meat_percent),
        ("Veg", template.veg_percent),
        ("Carb", template.carb_percent),
    ]
    .into_iter()
    .filter(|(_, fraction)| *fraction > 0.0)
    .map(|(label, fraction)| (label, format_percent(fraction)))
    .collect()
}
