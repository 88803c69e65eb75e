// ============================================================================
// API CLIENT - única instancia HTTP compartida
// ============================================================================
// - Añade `Authorization: Bearer <token>` salvo en las rutas públicas
// - 401: limpia la sesión, redirige a /login y devuelve Unauthorized
// - Reintenta solo los GET (red, timeout, 5xx) con backoff exponencial
// - Decodifica cada respuesta a su esquema tipado
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;
use crate::services::navigator::Navigator;
use crate::services::transport::{HttpRequest, Method, RequestBody, Transport, TransportError};
use crate::stores::SessionStore;
use crate::utils::{CancelToken, PUBLIC_PATHS};

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("Session expired")]
    Unauthorized,
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Serialize(String),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Could not persist session: {0}")]
    Storage(String),
}

impl ApiError {
    /// Construye el error a partir de una respuesta no-2xx. FastAPI devuelve
    /// `{"detail": "..."}`; si no, se usa el cuerpo tal cual.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Detail {
            detail: serde_json::Value,
        }

        let detail = match serde_json::from_str::<Detail>(body) {
            Ok(Detail { detail: serde_json::Value::String(text) }) => text,
            Ok(Detail { detail }) => detail.to_string(),
            Err(_) if body.trim().is_empty() => format!("Request failed with status {}", status),
            Err(_) => body.trim().to_string(),
        };
        ApiError::Http { status, detail }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Texto para el banner de error de la página
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            ApiError::Timeout(_) => "The server took too long to respond. Please try again.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Http { detail, .. } => detail.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Serialize(_) => "Could not send the request.".to_string(),
            ApiError::Cancelled => "Request cancelled.".to_string(),
            ApiError::Storage(_) => {
                "Signed in, but your session could not be saved. Check that browser storage is enabled and try again."
                    .to_string()
            }
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network(message) => ApiError::Network(message),
            TransportError::Timeout(ms) => ApiError::Timeout(ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Reintentos además del primer intento
    pub attempts: u32,
    pub base_delay_ms: u32,
}

impl RetryPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            attempts: config.retry_attempts,
            base_delay_ms: config.retry_base_delay_ms,
        }
    }

    pub fn none() -> Self {
        Self { attempts: 0, base_delay_ms: 0 }
    }

    /// Espera antes del reintento número `retry` (empezando en 1)
    pub fn delay_for(&self, retry: u32) -> u32 {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay_ms.saturating_mul(factor)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
    retry: RetryPolicy,
    cancel: Option<CancelToken>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(
        transport: Rc<dyn Transport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            session,
            navigator,
            retry,
            cancel: None,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Copia del cliente ligada al ciclo de vida de una página: si el token
    /// se cancela, no se lanzan más intentos y las respuestas se descartan.
    pub fn with_cancel(&self, token: &CancelToken) -> Self {
        Self {
            cancel: Some(token.clone()),
            ..self.clone()
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::Get, path, RequestBody::Empty).await?;
        decode(path, &body)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(payload).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let body = self.execute(Method::Post, path, RequestBody::Json(json)).await?;
        decode(path, &body)
    }

    /// POST sin cuerpo (acciones tipo `/cancel`)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::Post, path, RequestBody::Empty).await?;
        decode(path, &body)
    }

    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
        let body = self.execute(Method::Post, path, RequestBody::Multipart(form)).await?;
        decode(path, &body)
    }

    fn ensure_active(&self) -> Result<(), ApiError> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(ApiError::Cancelled),
            _ => Ok(()),
        }
    }

    fn build_request(&self, method: Method, path: &str, body: RequestBody) -> HttpRequest {
        let mut headers = Vec::new();
        if !PUBLIC_PATHS.contains(&path) {
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }
        HttpRequest {
            method,
            path: path.to_string(),
            headers,
            body,
        }
    }

    async fn execute(&self, method: Method, path: &str, body: RequestBody) -> Result<String, ApiError> {
        let max_attempts = match method {
            Method::Get => 1 + self.retry.attempts,
            Method::Post => 1,
        };
        let mut attempt = 1;

        loop {
            self.ensure_active()?;
            let request = self.build_request(method, path, body.clone());
            match self.send_once(request).await {
                Err(error) if attempt < max_attempts && error.is_retryable() => {
                    let delay = self.retry.delay_for(attempt);
                    log::warn!(
                        "🔁 {} {} falló ({}), reintento {}/{} en {} ms",
                        method.as_str(),
                        path,
                        error,
                        attempt,
                        max_attempts - 1,
                        delay
                    );
                    self.transport.sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn send_once(&self, request: HttpRequest) -> Result<String, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;

        if response.status == 401 && !PUBLIC_PATHS.contains(&path.as_str()) {
            self.handle_unauthorized(&path);
            return Err(ApiError::Unauthorized);
        }

        if let Err(cancelled) = self.ensure_active() {
            log::debug!("🚫 {} {} descartada: página desmontada", method.as_str(), path);
            return Err(cancelled);
        }

        if !(200..300).contains(&response.status) {
            let error = ApiError::from_response(response.status, &response.body);
            log::error!("❌ {} {} -> HTTP {}", method.as_str(), path, response.status);
            return Err(error);
        }

        Ok(response.body)
    }

    fn handle_unauthorized(&self, path: &str) {
        log::warn!("🔒 401 en {}: cerrando sesión", path);
        self.session.clear();
        self.navigator.hard_redirect(LOGIN_ROUTE);
    }
}

/// Formulario multipart con la imagen en el campo `image`
pub fn image_form(file: &web_sys::File) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(js_error)?;
    Ok(form)
}

fn js_error(error: JsValue) -> ApiError {
    ApiError::Serialize(error.as_string().unwrap_or_else(|| format!("{:?}", error)))
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    // Respuestas vacías (204) se tratan como `null`
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        log::error!("❌ Respuesta inesperada de {}: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginResponse, Role, User, Vendor};
    use crate::services::transport::HttpResponse;
    use crate::services::testing::{test_client, MockTransport, RecordingNavigator};
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use futures::future::{ready, LocalBoxFuture};
    use futures::FutureExt;
    use std::cell::Cell;

    fn logged_in(session: &SessionStore) {
        session
            .save(&LoginResponse {
                access_token: "abc".to_string(),
                token_type: "bearer".to_string(),
                user: User {
                    user_id: 1,
                    email: "a@b.com".to_string(),
                    role: Role::Vendor,
                },
            })
            .unwrap();
    }

    #[test]
    fn attaches_bearer_except_on_public_paths() {
        let (client, transport, _) = test_client(RetryPolicy::none());
        logged_in(client.session());
        transport.push_json(200, "[]");
        transport.push_json(200, r#"{"access_token":"x","token_type":"bearer","user":{"user_id":1,"email":"a@b.com","role":"vendor"}}"#);

        block_on(client.get::<Vec<Vendor>>("/vendors")).unwrap();
        block_on(client.post_json::<_, LoginResponse>("/auth/login", &serde_json::json!({}))).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer abc"));
        assert_eq!(requests[1].header("authorization"), None);
    }

    #[test]
    fn unauthorized_clears_session_and_redirects_once() {
        let (client, transport, navigator) = test_client(RetryPolicy { attempts: 3, base_delay_ms: 10 });
        logged_in(client.session());
        transport.push_json(401, r#"{"detail": "Could not validate credentials"}"#);

        let result = block_on(client.get::<Vec<Vendor>>("/vendors"));

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!client.session().is_authenticated());
        assert_eq!(navigator.redirects(), vec![LOGIN_ROUTE.to_string()]);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn wrong_password_is_a_plain_error() {
        let (client, transport, navigator) = test_client(RetryPolicy::none());
        transport.push_json(401, r#"{"detail": "Incorrect email or password"}"#);

        let result = block_on(client.post_json::<_, LoginResponse>("/auth/login", &serde_json::json!({})));

        assert_eq!(
            result,
            Err(ApiError::Http { status: 401, detail: "Incorrect email or password".to_string() })
        );
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn get_retries_transient_failures_with_backoff() {
        let (client, transport, _) = test_client(RetryPolicy { attempts: 2, base_delay_ms: 100 });
        transport.push_error(TransportError::Timeout(5000));
        transport.push_json(503, "");
        transport.push_json(200, "[]");

        let vendors = block_on(client.get::<Vec<Vendor>>("/vendors")).unwrap();

        assert!(vendors.is_empty());
        assert_eq!(transport.requests().len(), 3);
        assert_eq!(transport.sleeps(), vec![100, 200]);
    }

    #[test]
    fn gives_up_after_last_attempt() {
        let (client, transport, _) = test_client(RetryPolicy { attempts: 1, base_delay_ms: 1 });
        transport.push_error(TransportError::Network("offline".into()));
        transport.push_error(TransportError::Network("offline".into()));

        let result = block_on(client.get::<Vec<Vendor>>("/vendors"));
        assert_eq!(result, Err(ApiError::Network("offline".into())));
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn posts_and_client_errors_are_not_retried() {
        let (client, transport, _) = test_client(RetryPolicy { attempts: 3, base_delay_ms: 1 });
        transport.push_json(500, r#"{"detail": "boom"}"#);
        transport.push_json(404, r#"{"detail": "Template not found"}"#);

        let post = block_on(client.post_empty::<serde_json::Value>("/reservations/1/cancel"));
        let get = block_on(client.get::<serde_json::Value>("/templates/9"));

        assert_eq!(post.unwrap_err().user_message(), "boom");
        assert_eq!(get.unwrap_err(), ApiError::Http { status: 404, detail: "Template not found".into() });
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let (client, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(200, r#"{"unexpected": true}"#);
        let result = block_on(client.get::<Vec<Vendor>>("/vendors"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn cancelled_client_sends_nothing() {
        let storage = Rc::new(MemoryStorage::new());
        let transport = Rc::new(MockTransport::new());
        let navigator = Rc::new(RecordingNavigator::default());
        let client = ApiClient::new(transport.clone(), SessionStore::new(storage), navigator, RetryPolicy::none());

        let token = CancelToken::new();
        let scoped = client.with_cancel(&token);
        token.cancel();

        let result = block_on(scoped.get::<Vec<Vendor>>("/vendors"));
        assert_eq!(result, Err(ApiError::Cancelled));
        assert!(transport.requests().is_empty());
    }

    /// Transporte que desmonta la página mientras la petición está en vuelo
    struct UnmountingTransport {
        token: CancelToken,
        reply: Result<HttpResponse, TransportError>,
        cancel_on_sleep: bool,
        sent: Cell<usize>,
    }

    impl Transport for UnmountingTransport {
        fn send(&self, _request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
            self.sent.set(self.sent.get() + 1);
            if !self.cancel_on_sleep {
                self.token.cancel();
            }
            ready(self.reply.clone()).boxed_local()
        }

        fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
            if self.cancel_on_sleep {
                self.token.cancel();
            }
            ready(()).boxed_local()
        }
    }

    fn unmounting_client(
        reply: Result<HttpResponse, TransportError>,
        cancel_on_sleep: bool,
        retry: RetryPolicy,
    ) -> (ApiClient, Rc<UnmountingTransport>) {
        let token = CancelToken::new();
        let transport = Rc::new(UnmountingTransport {
            token: token.clone(),
            reply,
            cancel_on_sleep,
            sent: Cell::new(0),
        });
        let client = ApiClient::new(
            transport.clone(),
            SessionStore::new(Rc::new(MemoryStorage::new())),
            Rc::new(RecordingNavigator::default()),
            retry,
        );
        (client.with_cancel(&token), transport)
    }

    #[test]
    fn response_arriving_after_cancel_is_dropped() {
        let reply = Ok(HttpResponse { status: 200, body: "[]".to_string() });
        let (client, transport) = unmounting_client(reply, false, RetryPolicy::none());

        let result = block_on(client.get::<Vec<Vendor>>("/vendors"));

        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(transport.sent.get(), 1);
    }

    #[test]
    fn cancel_during_backoff_stops_the_retry() {
        let reply = Err(TransportError::Network("offline".into()));
        let (client, transport) = unmounting_client(reply, true, RetryPolicy { attempts: 2, base_delay_ms: 100 });

        let result = block_on(client.get::<Vec<Vendor>>("/vendors"));

        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(transport.sent.get(), 1);
    }

    #[test]
    fn error_detail_extraction() {
        assert_eq!(
            ApiError::from_response(400, r#"{"detail": "Email already registered"}"#).user_message(),
            "Email already registered"
        );
        assert_eq!(
            ApiError::from_response(502, "Bad Gateway"),
            ApiError::Http { status: 502, detail: "Bad Gateway".into() }
        );
        assert_eq!(
            ApiError::from_response(500, ""),
            ApiError::Http { status: 500, detail: "Request failed with status 500".into() }
        );
    }

    #[test]
    fn backoff_doubles() {
        let policy = RetryPolicy { attempts: 3, base_delay_ms: 300 };
        assert_eq!(policy.delay_for(1), 300);
        assert_eq!(policy.delay_for(2), 600);
        assert_eq!(policy.delay_for(3), 1200);
    }
}
