// ============================================================================
// SIGNUP - formularios de registro (cliente y vendedor en tres pasos)
// ============================================================================

use std::collections::BTreeMap;

use crate::models::{
    CustomerSignup, RegisterCustomerRequest, RegisterVendorRequest, Role, UserSignup, VendorSignup,
};
use crate::utils::validation::{is_valid_email, is_valid_postcode, password_policy_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Email,
    Password,
    Name,
    PostCode,
    Street,
    City,
    OpeningHours,
    PhoneNumber,
}

pub type SignupErrors = BTreeMap<SignupField, String>;

fn check_account(email: &str, password: &str, errors: &mut SignupErrors) {
    if !is_valid_email(email.trim()) {
        errors.insert(SignupField::Email, "Enter a valid email address".to_string());
    }
    if let Some(message) = password_policy_message(password) {
        errors.insert(SignupField::Password, message);
    }
}

fn require(value: &str, field: SignupField, label: &str, errors: &mut SignupErrors) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
    }
}

fn check_postcode(post_code: &str, errors: &mut SignupErrors) {
    if !is_valid_postcode(post_code.trim()) {
        errors.insert(SignupField::PostCode, "Enter a valid UK postcode".to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerSignupForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub post_code: String,
}

impl CustomerSignupForm {
    pub fn validate(&self) -> SignupErrors {
        let mut errors = SignupErrors::new();
        check_account(&self.email, &self.password, &mut errors);
        require(&self.name, SignupField::Name, "Name", &mut errors);
        check_postcode(&self.post_code, &mut errors);
        errors
    }

    pub fn to_request(&self) -> Result<RegisterCustomerRequest, SignupErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterCustomerRequest {
            user: UserSignup {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                role: Role::Customer,
            },
            customer: CustomerSignup {
                name: self.name.trim().to_string(),
                post_code: self.post_code.trim().to_uppercase(),
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorStep {
    Account,
    Business,
    Image,
}

impl VendorStep {
    pub const ALL: [VendorStep; 3] = [VendorStep::Account, VendorStep::Business, VendorStep::Image];

    /// Posición empezando en 1, para "Step 2 of 3"
    pub fn number(&self) -> usize {
        match self {
            VendorStep::Account => 1,
            VendorStep::Business => 2,
            VendorStep::Image => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            VendorStep::Account => "User Details",
            VendorStep::Business => "Vendor Details",
            VendorStep::Image => "Image",
        }
    }

    pub fn next(&self) -> Option<VendorStep> {
        match self {
            VendorStep::Account => Some(VendorStep::Business),
            VendorStep::Business => Some(VendorStep::Image),
            VendorStep::Image => None,
        }
    }

    pub fn previous(&self) -> Option<VendorStep> {
        match self {
            VendorStep::Account => None,
            VendorStep::Business => Some(VendorStep::Account),
            VendorStep::Image => Some(VendorStep::Business),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Ancho de la barra de progreso
    pub fn progress_percent(&self) -> usize {
        self.number() * 100 / VendorStep::ALL.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorSignupForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub post_code: String,
    pub opening_hours: String,
    pub phone_number: String,
}

impl VendorSignupForm {
    /// Solo los campos del paso indicado; la imagen es opcional
    pub fn validate_step(&self, step: VendorStep) -> SignupErrors {
        let mut errors = SignupErrors::new();
        match step {
            VendorStep::Account => {
                require(&self.name, SignupField::Name, "Vendor name", &mut errors);
                check_account(&self.email, &self.password, &mut errors);
            }
            VendorStep::Business => {
                require(&self.street, SignupField::Street, "Street", &mut errors);
                require(&self.city, SignupField::City, "City", &mut errors);
                check_postcode(&self.post_code, &mut errors);
                require(&self.opening_hours, SignupField::OpeningHours, "Opening hours", &mut errors);
                require(&self.phone_number, SignupField::PhoneNumber, "Phone number", &mut errors);
            }
            VendorStep::Image => {}
        }
        errors
    }

    /// Primer paso con errores, para volver a él antes de enviar
    pub fn first_invalid_step(&self) -> Option<(VendorStep, SignupErrors)> {
        VendorStep::ALL
            .iter()
            .map(|step| (*step, self.validate_step(*step)))
            .find(|(_, errors)| !errors.is_empty())
    }

    pub fn to_request(&self) -> Result<RegisterVendorRequest, (VendorStep, SignupErrors)> {
        if let Some(invalid) = self.first_invalid_step() {
            return Err(invalid);
        }
        Ok(RegisterVendorRequest {
            user: UserSignup {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                role: Role::Vendor,
            },
            vendor: VendorSignup {
                name: self.name.trim().to_string(),
                street: self.street.trim().to_string(),
                city: self.city.trim().to_string(),
                post_code: self.post_code.trim().to_uppercase(),
                opening_hours: self.opening_hours.trim().to_string(),
                phone_number: self.phone_number.trim().to_string(),
                photo: String::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_form_validation() {
        let mut form = CustomerSignupForm {
            email: "not-an-email".into(),
            password: "short".into(),
            name: "".into(),
            post_code: "1234".into(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[&SignupField::Password],
            "Password must be at least 8 characters long\nPassword must contain at least one uppercase letter\nPassword must contain at least one number"
        );

        form = CustomerSignupForm {
            email: " ana@example.com ".into(),
            password: "Password1".into(),
            name: "Ana".into(),
            post_code: "ex4 4de".into(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.user.email, "ana@example.com");
        assert_eq!(request.user.role, Role::Customer);
        assert_eq!(request.customer.post_code, "EX4 4DE");
    }

    #[test]
    fn vendor_steps_walk_forward_and_back() {
        let mut step = VendorStep::Account;
        assert_eq!(step.previous(), None);
        step = step.next().unwrap();
        assert_eq!(step, VendorStep::Business);
        step = step.next().unwrap();
        assert!(step.is_last());
        assert_eq!(step.progress_percent(), 100);
        assert_eq!(VendorStep::Account.progress_percent(), 33);
    }

    #[test]
    fn vendor_form_reports_first_broken_step() {
        let mut form = VendorSignupForm {
            email: "shop@example.com".into(),
            password: "Password1".into(),
            name: "Bakery".into(),
            ..Default::default()
        };
        assert!(form.validate_step(VendorStep::Account).is_empty());
        let (step, errors) = form.to_request().unwrap_err();
        assert_eq!(step, VendorStep::Business);
        assert_eq!(errors.len(), 5);

        form.street = "1 High St".into();
        form.city = "Exeter".into();
        form.post_code = "EX4 4DE".into();
        form.opening_hours = "9-5".into();
        form.phone_number = "+44 1392 000000".into();
        let request = form.to_request().unwrap();
        assert_eq!(request.user.role, Role::Vendor);
        assert_eq!(request.vendor.photo, "");
    }
}
