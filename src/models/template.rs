use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Allergen {
    pub allergen_id: u32,
    #[serde(alias = "title")]
    pub name: String,
}

/// Definición reutilizable de un bundle. Los porcentajes de composición
/// vienen como fracciones (0.0 - 1.0).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Template {
    pub template_id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub estimated_value: f64,
    #[serde(default)]
    pub meat_percent: f64,
    #[serde(default)]
    pub carb_percent: f64,
    #[serde(default)]
    pub veg_percent: f64,
    #[serde(default)]
    pub carbon_saved: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    pub vendor: u32,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Template {
    /// Ahorro frente al valor estimado
    pub fn savings(&self) -> f64 {
        (self.estimated_value - self.cost).max(0.0)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TemplateList {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub templates: Vec<Template>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TemplateCreate {
    pub title: String,
    pub description: String,
    pub estimated_value: f64,
    pub cost: f64,
    pub meat_percent: f64,
    pub carb_percent: f64,
    pub veg_percent: f64,
    pub carbon_saved: f64,
    pub weight: f64,
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub allergen_ids: Vec<u32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TemplateCreated {
    #[serde(default)]
    pub message: Option<String>,
    pub template_id: u32,
}

/// Stock vivo de una plantilla. `Unknown` cuando la consulta del contador falla.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AvailableCount {
    Known(u32),
    Unknown,
}

impl AvailableCount {
    pub fn is_sold_out(&self) -> bool {
        matches!(self, AvailableCount::Known(0))
    }

    /// Stock tras publicar `amount` bundles; `Unknown` sigue sin conocerse
    pub fn with_posted(self, amount: u32) -> Self {
        match self {
            AvailableCount::Known(n) => AvailableCount::Known(n.saturating_add(amount)),
            AvailableCount::Unknown => AvailableCount::Unknown,
        }
    }

    pub fn label(&self) -> String {
        match self {
            AvailableCount::Known(0) => "Sold out".to_string(),
            AvailableCount::Known(n) => format!("{} left", n),
            AvailableCount::Unknown => "Availability unknown".to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct TemplateWithCount {
    pub template: Template,
    pub available: AvailableCount,
}
