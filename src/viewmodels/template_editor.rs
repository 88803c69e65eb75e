// ============================================================================
// TEMPLATE EDITOR - formulario de nueva plantilla de bundle
// ============================================================================
// El formulario trabaja en porcentajes enteros (0-100); el backend espera
// fracciones (0.0-1.0).
// ============================================================================

use std::collections::{BTreeMap, BTreeSet};

use crate::models::TemplateCreate;
use crate::utils::ALLERGENS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemplateField {
    Title,
    Description,
    Cost,
    EstimatedValue,
    Composition,
    Weight,
    CarbonSaved,
}

pub type TemplateErrors = BTreeMap<TemplateField, String>;

/// Id de un alérgeno de la lista fija (posición + 1)
pub fn allergen_id(name: &str) -> Option<u32> {
    ALLERGENS
        .iter()
        .position(|a| *a == name)
        .map(|index| index as u32 + 1)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateForm {
    pub title: String,
    pub description: String,
    pub cost: String,
    pub estimated_value: String,
    pub meat_percent: String,
    pub carb_percent: String,
    pub veg_percent: String,
    pub weight: String,
    pub carbon_saved: String,
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub allergens: BTreeSet<u32>,
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

impl TemplateForm {
    /// Vegano implica vegetariano
    pub fn set_vegan(&mut self, vegan: bool) {
        self.is_vegan = vegan;
        if vegan {
            self.is_vegetarian = true;
        }
    }

    /// Quitar "vegetariano" quita también "vegano"
    pub fn set_vegetarian(&mut self, vegetarian: bool) {
        self.is_vegetarian = vegetarian;
        if !vegetarian {
            self.is_vegan = false;
        }
    }

    pub fn toggle_allergen(&mut self, allergen_id: u32) {
        if !self.allergens.remove(&allergen_id) {
            self.allergens.insert(allergen_id);
        }
    }

    fn percents(&self) -> Option<[f64; 3]> {
        Some([
            parse_number(&self.meat_percent)?,
            parse_number(&self.carb_percent)?,
            parse_number(&self.veg_percent)?,
        ])
    }

    pub fn composition_total(&self) -> Option<f64> {
        self.percents().map(|p| p.iter().sum())
    }

    pub fn validate(&self) -> TemplateErrors {
        let mut errors = TemplateErrors::new();

        if self.title.trim().is_empty() {
            errors.insert(TemplateField::Title, "Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.insert(TemplateField::Description, "Description is required".to_string());
        }

        let cost = self.cost.trim().parse::<f64>().ok().filter(|c| c.is_finite() && *c > 0.0);
        if cost.is_none() {
            errors.insert(TemplateField::Cost, "Enter a price above £0".to_string());
        }
        let value = self
            .estimated_value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0);
        match (cost, value) {
            (_, None) => {
                errors.insert(TemplateField::EstimatedValue, "Enter the estimated value".to_string());
            }
            (Some(cost), Some(value)) if value < cost => {
                errors.insert(
                    TemplateField::EstimatedValue,
                    "Estimated value cannot be lower than the price".to_string(),
                );
            }
            _ => {}
        }

        match self.percents() {
            None => {
                errors.insert(TemplateField::Composition, "Percentages must be numbers".to_string());
            }
            Some(parts) if parts.iter().any(|p| *p > 100.0) => {
                errors.insert(TemplateField::Composition, "Each percentage must be at most 100".to_string());
            }
            Some(parts) if (parts.iter().sum::<f64>() - 100.0).abs() > 0.01 => {
                errors.insert(TemplateField::Composition, "Percentages must add up to 100".to_string());
            }
            Some(_) => {}
        }

        if parse_number(&self.weight).is_none() {
            errors.insert(TemplateField::Weight, "Weight must be a positive number".to_string());
        }
        if parse_number(&self.carbon_saved).is_none() {
            errors.insert(TemplateField::CarbonSaved, "Carbon saved must be a positive number".to_string());
        }

        errors
    }

    pub fn to_request(&self) -> Result<TemplateCreate, TemplateErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let [meat, carb, veg] = self.percents().ok_or_else(|| errors.clone())?;

        Ok(TemplateCreate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            estimated_value: self.estimated_value.trim().parse().unwrap_or_default(),
            cost: self.cost.trim().parse().unwrap_or_default(),
            meat_percent: meat / 100.0,
            carb_percent: carb / 100.0,
            veg_percent: veg / 100.0,
            carbon_saved: parse_number(&self.carbon_saved).unwrap_or_default(),
            weight: parse_number(&self.weight).unwrap_or_default(),
            is_vegan: self.is_vegan,
            is_vegetarian: self.is_vegetarian || self.is_vegan,
            allergen_ids: self.allergens.iter().copied().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> TemplateForm {
        TemplateForm {
            title: "Pastry Bag".into(),
            description: "Croissants and buns".into(),
            cost: "3.50".into(),
            estimated_value: "10".into(),
            meat_percent: "0".into(),
            carb_percent: "80".into(),
            veg_percent: "20".into(),
            weight: "1.2".into(),
            carbon_saved: "0.8".into(),
            ..Default::default()
        }
    }

    #[test]
    fn converts_percentages_to_fractions() {
        let mut form = valid_form();
        form.toggle_allergen(allergen_id("gluten").unwrap());
        form.toggle_allergen(allergen_id("dairy").unwrap());
        let request = form.to_request().unwrap();

        assert_eq!(request.carb_percent, 0.8);
        assert_eq!(request.veg_percent, 0.2);
        assert_eq!(request.meat_percent, 0.0);
        assert_eq!(request.allergen_ids, vec![1, 2]);
    }

    #[test]
    fn composition_must_sum_to_100() {
        let mut form = valid_form();
        form.veg_percent = "30".into();
        assert_eq!(form.composition_total(), Some(110.0));
        assert_eq!(
            form.validate()[&TemplateField::Composition],
            "Percentages must add up to 100"
        );
    }

    #[test]
    fn price_rules() {
        let mut form = valid_form();
        form.estimated_value = "2".into();
        assert!(form.validate().contains_key(&TemplateField::EstimatedValue));
        form.cost = "0".into();
        assert!(form.validate().contains_key(&TemplateField::Cost));
    }

    #[test]
    fn vegan_implies_vegetarian() {
        let mut form = valid_form();
        form.set_vegan(true);
        assert!(form.is_vegetarian);
        form.set_vegetarian(false);
        assert!(!form.is_vegan);
    }

    #[test]
    fn allergen_toggle_and_ids() {
        let mut form = TemplateForm::default();
        form.toggle_allergen(7);
        form.toggle_allergen(7);
        assert!(form.allergens.is_empty());
        assert_eq!(allergen_id("sesame"), Some(7));
        assert_eq!(allergen_id("peanuts"), None);
    }
}
