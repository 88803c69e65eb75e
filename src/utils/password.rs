/// Indicador de fuerza de contraseña (solo una pista visual, no bloquea el envío)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn classify(password: &str) -> Self {
        let length = password.chars().count();
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

        if length < 8 || !has_upper || !has_digit {
            if length < 4 {
                PasswordStrength::VeryWeak
            } else {
                PasswordStrength::Weak
            }
        } else if length < 12 && !has_symbol {
            PasswordStrength::Medium
        } else if length > 11 && has_symbol {
            PasswordStrength::VeryStrong
        } else {
            PasswordStrength::Strong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "very-weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very-strong",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very strong",
        }
    }

    /// Número de segmentos rellenos en el medidor (1..=5)
    pub fn level(&self) -> usize {
        *self as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_table() {
        assert_eq!(PasswordStrength::classify(""), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::classify("Ab1"), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::classify("Ab1x"), PasswordStrength::Weak);
        // Largo pero sin mayúscula ni dígito
        assert_eq!(PasswordStrength::classify("abcdefghijklmnop"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("Abcdefg1"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::classify("Abcdef1!"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify("Abcdefghijk1"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify("Abcdefghij1!"), PasswordStrength::VeryStrong);
    }

    #[test]
    fn never_decreases_when_growing_with_same_classes() {
        let seeds = ["A1", "A1!", "a", "A", "1!", "Aa1"];
        for seed in seeds {
            let mut previous = PasswordStrength::classify(seed);
            let mut password = seed.to_string();
            for _ in 0..20 {
                // Las minúsculas no cuentan en la tabla
                password.push('x');
                let current = PasswordStrength::classify(&password);
                assert!(current >= previous, "{password}: {current:?} < {previous:?}");
                previous = current;
            }
        }
    }

    #[test]
    fn labels_and_levels() {
        assert_eq!(PasswordStrength::VeryWeak.level(), 1);
        assert_eq!(PasswordStrength::VeryStrong.level(), 5);
        assert_eq!(PasswordStrength::Medium.as_str(), "medium");
        assert_eq!(PasswordStrength::Strong.label(), "Strong");
    }
}
