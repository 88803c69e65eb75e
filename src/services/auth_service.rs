// ============================================================================
// AUTH SERVICE - login, registro y foto de vendedor
// ============================================================================

use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, RegisterCustomerRequest, RegisterVendorRequest,
};
use crate::services::api_client::{image_form, ApiClient, ApiError};

/// Inicia sesión y la persiste en el SessionStore del cliente
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 login: {}", request.email);
    let response: LoginResponse = api.post_json("/auth/login", &request).await?;

    // Sin sesión guardada el guard devolvería al usuario a /login sin aviso
    api.session().save(&response).map_err(|e| {
        log::error!("❌ No se pudo guardar la sesión: {}", e);
        ApiError::Storage(e)
    })?;
    log::info!("✅ Sesión iniciada como {}", response.user.role);
    Ok(response)
}

pub async fn register_customer(api: &ApiClient, request: &RegisterCustomerRequest) -> Result<MessageResponse, ApiError> {
    log::info!("📝 Registro de cliente: {}", request.user.email);
    api.post_json("/auth/register/customer", request).await
}

pub async fn register_vendor(api: &ApiClient, request: &RegisterVendorRequest) -> Result<MessageResponse, ApiError> {
    log::info!("📝 Registro de vendedor: {}", request.vendor.name);
    api.post_json("/auth/register/vendor", request).await
}

/// Sube la foto del vendedor en sesión (campo multipart `image`)
pub async fn upload_vendor_image(api: &ApiClient, file: &web_sys::File) -> Result<MessageResponse, ApiError> {
    let form = image_form(file)?;
    log::info!("📷 Subiendo foto de vendedor ({} bytes)", file.size());
    api.post_form("/vendors/upload-image", form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::models::{CustomerSignup, Role, UserSignup};
    use crate::services::api_client::RetryPolicy;
    use crate::services::testing::{test_client, MockTransport, RecordingNavigator};
    use crate::services::transport::RequestBody;
    use crate::stores::SessionStore;
    use crate::utils::KeyValueStore;
    use futures::executor::block_on;

    /// localStorage lleno o deshabilitado
    struct FullStorage;

    impl KeyValueStore for FullStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("QuotaExceededError".to_string())
        }

        fn remove_item(&self, _key: &str) {}
    }

    #[test]
    fn login_trims_email_and_saves_session() {
        let (api, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(
            200,
            r#"{"access_token":"tok","token_type":"bearer","user":{"user_id":3,"email":"v@shop.com","role":"vendor"}}"#,
        );

        let response = block_on(login(&api, "  v@shop.com ", "Secret123")).unwrap();

        assert_eq!(response.user.role, Role::Vendor);
        assert!(api.session().is_authenticated());
        assert_eq!(api.session().role(), Some(Role::Vendor));

        let request = &transport.requests()[0];
        assert_eq!(request.path, "/auth/login");
        match &request.body {
            RequestBody::Json(json) => {
                let sent: serde_json::Value = serde_json::from_str(json).unwrap();
                assert_eq!(sent["email"], "v@shop.com");
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn failed_login_leaves_session_empty() {
        let (api, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(401, r#"{"detail":"Incorrect email or password"}"#);

        let error = block_on(login(&api, "a@b.com", "nope")).unwrap_err();

        assert_eq!(error.user_message(), "Incorrect email or password");
        assert!(!api.session().is_authenticated());
    }

    #[test]
    fn login_fails_when_session_cannot_be_saved() {
        let transport = Rc::new(MockTransport::new());
        let api = ApiClient::new(
            transport.clone(),
            SessionStore::new(Rc::new(FullStorage)),
            Rc::new(RecordingNavigator::default()),
            RetryPolicy::none(),
        );
        transport.push_json(
            200,
            r#"{"access_token":"tok","token_type":"bearer","user":{"user_id":3,"email":"c@b.com","role":"customer"}}"#,
        );

        let result = block_on(login(&api, "c@b.com", "Secret123"));

        assert_eq!(result, Err(ApiError::Storage("QuotaExceededError".to_string())));
        assert!(result.unwrap_err().user_message().contains("session could not be saved"));
        assert!(!api.session().is_authenticated());
    }

    #[test]
    fn register_customer_surfaces_conflict() {
        let (api, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(400, r#"{"detail":"Email already registered"}"#);

        let request = RegisterCustomerRequest {
            user: UserSignup {
                email: "a@b.com".into(),
                password: "Password1".into(),
                role: Role::Customer,
            },
            customer: CustomerSignup {
                name: "Ana".into(),
                post_code: "EX4 4DE".into(),
            },
        };
        let error = block_on(register_customer(&api, &request)).unwrap_err();
        assert_eq!(error.user_message(), "Email already registered");
        assert_eq!(transport.paths(), vec!["/auth/register/customer"]);
    }
}
