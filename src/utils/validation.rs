// ============================================================================
// VALIDACIÓN DE FORMULARIOS - Funciones puras, sin efectos secundarios
// ============================================================================

use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub const EMAIL_MAX_LEN: usize = 256;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 64;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex");
    static ref POSTCODE_RE: Regex =
        Regex::new(r"^[A-Za-z]{1,2}\d[A-Za-z\d]?\s\d[A-Za-z]{2}$").expect("postcode regex");
    static ref EXPIRY_RE: Regex = Regex::new(r"^\d{2}/\d{2}$").expect("expiry regex");
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && EMAIL_RE.is_match(email)
}

/// Código postal del Reino Unido (`EX4 4DE`, `SW1A 1AA`)
pub fn is_valid_postcode(postcode: &str) -> bool {
    POSTCODE_RE.is_match(postcode)
}

/// Reglas de contraseña que bloquean el envío del formulario.
/// Devuelve los mensajes de las reglas que fallan, en orden.
pub fn password_policy_errors(password: &str) -> Vec<&'static str> {
    let length = password.chars().count();
    let mut errors = Vec::new();

    if length < PASSWORD_MIN_LEN {
        errors.push("Password must be at least 8 characters long");
    }
    if length > PASSWORD_MAX_LEN {
        errors.push("Password must be at most 64 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number");
    }

    errors
}

/// Mensaje único para el formulario: reglas fallidas separadas por saltos de línea
pub fn password_policy_message(password: &str) -> Option<String> {
    let errors = password_policy_errors(password);
    if errors.is_empty() {
        None
    } else {
        Some(errors.join("\n"))
    }
}

/// Fecha de caducidad de tarjeta ya validada (año con dos dígitos)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardExpiry {
    pub month: u32,
    pub year: u32,
}

impl CardExpiry {
    /// Formato que espera el backend: primer día del mes
    pub fn to_iso_date(&self) -> String {
        format!("20{:02}-{:02}-01", self.year, self.month)
    }
}

pub fn validate_expiry(input: &str, today: NaiveDate) -> Result<CardExpiry, &'static str> {
    if !EXPIRY_RE.is_match(input) {
        return Err("Invalid date");
    }

    let (month, year) = input.split_once('/').ok_or("Invalid date")?;
    let month: u32 = month.parse().map_err(|_| "Invalid date")?;
    let year: u32 = year.parse().map_err(|_| "Invalid date")?;

    if !(1..=12).contains(&month) {
        return Err("Invalid month");
    }

    let current_year = today.year().rem_euclid(100) as u32;
    let current_month = today.month();
    if year < current_year || (year == current_year && month < current_month) {
        return Err("Card has expired");
    }

    Ok(CardExpiry { month, year })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@shop.co.uk"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));

        let long = format!("{}@example.com", "x".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn uk_postcodes() {
        assert!(is_valid_postcode("EX4 4DE"));
        assert!(is_valid_postcode("SW1A 1AA"));
        assert!(is_valid_postcode("m1 1ae"));
        assert!(!is_valid_postcode("1234"));
        assert!(!is_valid_postcode("EX44DE"));
        assert!(!is_valid_postcode("EX4 4DE "));
    }

    #[test]
    fn password_policy_collects_every_failure() {
        assert!(password_policy_errors("Abcdefg1").is_empty());
        assert_eq!(password_policy_message("Abcdefg1"), None);

        let message = password_policy_message("abc").unwrap();
        assert_eq!(message.lines().count(), 3);
        assert!(message.contains("at least 8"));
        assert!(message.contains("uppercase"));
        assert!(message.contains("number"));

        let too_long = format!("A1{}", "x".repeat(63));
        assert_eq!(
            password_policy_errors(&too_long),
            vec!["Password must be at most 64 characters long"]
        );
    }

    #[test]
    fn expiry_rules() {
        assert_eq!(validate_expiry("01/20", june_2024()), Err("Card has expired"));
        assert_eq!(validate_expiry("05/24", june_2024()), Err("Card has expired"));
        assert_eq!(
            validate_expiry("06/24", june_2024()),
            Ok(CardExpiry { month: 6, year: 24 })
        );
        assert!(validate_expiry("12/29", june_2024()).is_ok());
        assert_eq!(validate_expiry("13/29", june_2024()), Err("Invalid month"));
        assert_eq!(validate_expiry("00/29", june_2024()), Err("Invalid month"));
        assert_eq!(validate_expiry("1229", june_2024()), Err("Invalid date"));
        assert_eq!(validate_expiry("1/29", june_2024()), Err("Invalid date"));
    }

    #[test]
    fn expiry_iso_date() {
        let expiry = validate_expiry("03/27", june_2024()).unwrap();
        assert_eq!(expiry.to_iso_date(), "2027-03-01");
    }
}
