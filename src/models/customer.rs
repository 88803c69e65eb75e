use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Customer {
    #[serde(default)]
    pub customer_id: Option<u32>,
    pub name: String,
    pub post_code: String,
    #[serde(default)]
    pub store_credit: f64,
    #[serde(default)]
    pub carbon_saved: f64,
    #[serde(default)]
    pub rating: Option<u32>,
}

/// Racha de recogidas consecutivas (el backend devuelve `null` si no hay)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Streak {
    #[serde(default)]
    pub streak_id: Option<u32>,
    #[serde(default, alias = "current_streak")]
    pub count: u32,
    #[serde(default)]
    pub ended: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreditTopUpRequest {
    pub credit_top_up: f64,
    pub first_line_address: String,
    pub postcode: String,
    pub name_on_card: String,
    pub card_number: String,
    /// `YYYY-MM-01`
    pub expiry_date: String,
    pub cvv: String,
}
