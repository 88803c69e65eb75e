use serde::{Deserialize, Serialize};

/// Snapshot de solo lectura de un vendedor. `GET /vendors` añade los
/// campos derivados (`bundle_count`, `has_vegan`, `has_vegetarian`).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Vendor {
    pub vendor_id: u32,
    pub name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub validated: bool,

    // Estadísticas agregadas
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub food_saved: f64,
    #[serde(default)]
    pub carbon_saved: f64,

    #[serde(default)]
    pub bundle_count: u32,
    #[serde(default)]
    pub has_vegan: bool,
    #[serde(default)]
    pub has_vegetarian: bool,
}

impl Vendor {
    pub fn address_line(&self) -> String {
        [self.street.as_str(), self.city.as_str(), self.post_code.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_without_list_fields() {
        let json = r#"{
            "vendor_id": 4, "name": "Bakery", "street": "1 High St", "city": "Exeter",
            "post_code": "EX4 4DE", "phone_number": "0123", "opening_hours": "9-5", "photo": ""
        }"#;
        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.bundle_count, 0);
        assert_eq!(vendor.address_line(), "1 High St, Exeter, EX4 4DE");
    }
}
