// ============================================================================
// TARJETAS - Luhn, red de la tarjeta y formateo de los inputs
// ============================================================================

pub const CARD_MAX_DIGITS: usize = 19;
pub const CARD_MIN_DIGITS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Unknown,
}

impl CardNetwork {
    /// Solo por prefijo, para mostrar el logo y elegir la longitud del CVV
    pub fn detect(number: &str) -> Self {
        let digits = digits_only(number);
        let bytes = digits.as_bytes();

        match bytes {
            [b'4', ..] => CardNetwork::Visa,
            [b'5', b'1'..=b'5', ..] | [b'2', b'2'..=b'7', ..] => CardNetwork::Mastercard,
            [b'3', b'4' | b'7', ..] => CardNetwork::Amex,
            _ => CardNetwork::Unknown,
        }
    }

    pub fn cvv_len(&self) -> usize {
        match self {
            CardNetwork::Amex => 4,
            _ => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::Amex => "Amex",
            CardNetwork::Unknown => "Unknown",
        }
    }
}

pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checksum de Luhn sobre los dígitos del número (se ignora el resto)
pub fn luhn_valid(number: &str) -> bool {
    let digits = digits_only(number);
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for c in digits.chars().rev() {
        let mut digit = c.to_digit(10).unwrap_or(0);
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// `4539148803436467` -> `4539 1488 0343 6467`
pub fn format_card_number(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(CARD_MAX_DIGITS).collect();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// Inserta la barra al escribir la caducidad: `1227` -> `12/27`
pub fn format_expiry_input(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_fixtures() {
        assert!(luhn_valid("4539148803436467"));
        assert!(!luhn_valid("4539148803436468"));
        assert!(luhn_valid("4539 1488 0343 6467"));
        assert!(luhn_valid("18"));
        assert!(!luhn_valid("19"));
        assert!(!luhn_valid(""));
    }

    #[test]
    fn luhn_matches_reference_checksum() {
        fn reference(digits: &str) -> bool {
            let total: u32 = digits
                .chars()
                .rev()
                .enumerate()
                .map(|(i, c)| {
                    let d = c.to_digit(10).unwrap();
                    if i % 2 == 1 {
                        let doubled = d * 2;
                        doubled / 10 + doubled % 10
                    } else {
                        d
                    }
                })
                .sum();
            total % 10 == 0
        }

        for n in 10u64..2000 {
            let digits = n.to_string();
            assert_eq!(luhn_valid(&digits), reference(&digits), "{digits}");
        }
    }

    #[test]
    fn network_prefixes() {
        assert_eq!(CardNetwork::detect("4111"), CardNetwork::Visa);
        assert_eq!(CardNetwork::detect("5105 1051"), CardNetwork::Mastercard);
        assert_eq!(CardNetwork::detect("2221"), CardNetwork::Mastercard);
        assert_eq!(CardNetwork::detect("2800"), CardNetwork::Unknown);
        assert_eq!(CardNetwork::detect("3782"), CardNetwork::Amex);
        assert_eq!(CardNetwork::detect("3400"), CardNetwork::Amex);
        assert_eq!(CardNetwork::detect("3500"), CardNetwork::Unknown);
        assert_eq!(CardNetwork::detect(""), CardNetwork::Unknown);

        assert_eq!(CardNetwork::Amex.cvv_len(), 4);
        assert_eq!(CardNetwork::Visa.cvv_len(), 3);
        assert_eq!(CardNetwork::Unknown.cvv_len(), 3);
    }

    #[test]
    fn input_formatting() {
        assert_eq!(format_card_number("4539148803436467"), "4539 1488 0343 6467");
        assert_eq!(format_card_number("4539-1488"), "4539 1488");
        assert_eq!(format_card_number(&"1".repeat(25)).replace(' ', "").len(), CARD_MAX_DIGITS);

        assert_eq!(format_expiry_input("1"), "1");
        assert_eq!(format_expiry_input("12"), "12/");
        assert_eq!(format_expiry_input("1227"), "12/27");
        assert_eq!(format_expiry_input("12/279"), "12/27");
    }
}
