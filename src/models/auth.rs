use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Vendor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
        }
    }

    /// Roles desconocidos se tratan como sesión sin rol
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Role::Customer),
            "vendor" => Some(Role::Vendor),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub user_id: u32,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserSignup {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CustomerSignup {
    pub name: String,
    pub post_code: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct VendorSignup {
    pub name: String,
    pub street: String,
    pub city: String,
    pub post_code: String,
    pub opening_hours: String,
    pub phone_number: String,
    /// El backend exige el campo; la foto real se sube después del registro
    pub photo: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterCustomerRequest {
    pub user: UserSignup,
    pub customer: CustomerSignup,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterVendorRequest {
    pub user: UserSignup,
    pub vendor: VendorSignup,
}

/// Respuesta genérica `{"message": "..."}` de los endpoints de escritura
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_schema() {
        let json = r#"{
            "access_token": "t",
            "token_type": "bearer",
            "user": {"user_id": 1, "email": "a@b.com", "role": "customer"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.role, Role::Customer);

        let bad_role = json.replace("customer", "admin");
        assert!(serde_json::from_str::<LoginResponse>(&bad_role).is_err());
    }

    #[test]
    fn role_parsing() {
        assert_eq!(Role::parse("vendor"), Some(Role::Vendor));
        assert_eq!(Role::parse("Vendor"), None);
        assert_eq!(Role::Customer.to_string(), "customer");
    }
}
