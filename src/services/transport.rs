// ============================================================================
// TRANSPORT - envío HTTP crudo (gloo-net en el navegador, mock en tests)
// ============================================================================
// Sin lógica de sesión ni de reintentos: eso vive en ApiClient.
// ============================================================================

use futures::future::{select, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// multipart/form-data (el navegador pone el boundary)
    Multipart(web_sys::FormData),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Ruta relativa a la base, p.ej. `/vendors/profile`
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    Network(String),
    Timeout(u32),
}

pub trait Transport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>>;

    /// Espera usada entre reintentos
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Transporte real: fetch del navegador con timeout fijo
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    fn builder(&self, request: &HttpRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = self.builder(&request);
        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder.header("Content-Type", "application/json").body(json),
            RequestBody::Multipart(form) => builder.body(form),
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

impl Transport for GlooTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        async move {
            let timeout_ms = self.timeout_ms;
            let fetch = Box::pin(self.fetch(request));
            let timer = Box::pin(TimeoutFuture::new(timeout_ms));
            match select(fetch, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => Err(TransportError::Timeout(timeout_ms)),
            }
        }
        .boxed_local()
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }
}
