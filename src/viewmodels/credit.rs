// ============================================================================
// CREDIT - formulario de recarga del monedero
// ============================================================================
// La validación nunca llega a la red: si hay errores no se envía nada.
// ============================================================================

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::CreditTopUpRequest;
use crate::utils::card::{digits_only, CARD_MIN_DIGITS};
use crate::utils::validation::{is_valid_postcode, validate_expiry};
use crate::utils::{luhn_valid, CardNetwork, TOP_UP_MAX, TOP_UP_MIN};

/// A partir de aquí se muestra en vivo si el número pasa Luhn
const LIVE_LUHN_AFTER_DIGITS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CreditField {
    Amount,
    CardName,
    CardNumber,
    Expiry,
    Cvv,
    Address,
    Postcode,
}

pub type CreditErrors = BTreeMap<CreditField, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct CreditForm {
    pub amount: String,
    pub card_name: String,
    /// Tal cual se muestra (`4539 1488 ...`)
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub address: String,
    pub postcode: String,
}

impl Default for CreditForm {
    fn default() -> Self {
        Self {
            amount: "10".to_string(),
            card_name: String::new(),
            card_number: String::new(),
            expiry: String::new(),
            cvv: String::new(),
            address: String::new(),
            postcode: String::new(),
        }
    }
}

impl CreditForm {
    pub fn network(&self) -> CardNetwork {
        CardNetwork::detect(&self.card_number)
    }

    pub fn amount_value(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
    }

    /// Aviso en vivo mientras se escribe; con pocos dígitos no se marca error
    pub fn live_luhn_ok(&self) -> bool {
        let digits = digits_only(&self.card_number);
        digits.len() <= LIVE_LUHN_AFTER_DIGITS || luhn_valid(&digits)
    }

    pub fn validate(&self, today: NaiveDate) -> CreditErrors {
        let mut errors = CreditErrors::new();

        match self.amount_value() {
            Some(amount) if (TOP_UP_MIN..=TOP_UP_MAX).contains(&amount) => {}
            _ => {
                errors.insert(CreditField::Amount, "Amount must be between £5 and £100".to_string());
            }
        }

        let digits = digits_only(&self.card_number);
        if digits.len() < CARD_MIN_DIGITS || !luhn_valid(&digits) {
            errors.insert(CreditField::CardNumber, "Invalid card number".to_string());
        }

        if let Err(message) = validate_expiry(&self.expiry, today) {
            errors.insert(CreditField::Expiry, message.to_string());
        }

        let cvv_len = self.network().cvv_len();
        if self.cvv.len() != cvv_len || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            errors.insert(CreditField::Cvv, format!("Must be {} digits", cvv_len));
        }

        if self.address.trim().is_empty() {
            errors.insert(CreditField::Address, "Address is required".to_string());
        }
        if !is_valid_postcode(self.postcode.trim()) {
            errors.insert(CreditField::Postcode, "Valid postcode required".to_string());
        }
        if self.card_name.trim().is_empty() {
            errors.insert(CreditField::CardName, "Name is required".to_string());
        }

        errors
    }

    pub fn to_request(&self, today: NaiveDate) -> Result<CreditTopUpRequest, CreditErrors> {
        let errors = self.validate(today);
        let (Some(amount), Ok(expiry)) = (self.amount_value(), validate_expiry(&self.expiry, today)) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreditTopUpRequest {
            credit_top_up: amount,
            first_line_address: self.address.trim().to_string(),
            postcode: self.postcode.trim().to_string(),
            name_on_card: self.card_name.trim().to_string(),
            card_number: digits_only(&self.card_number),
            expiry_date: expiry.to_iso_date(),
            cvv: self.cvv.clone(),
        })
    }
}
