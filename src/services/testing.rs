// Dobles de prueba para la capa HTTP

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::{ready, LocalBoxFuture};
use futures::FutureExt;

use crate::services::api_client::{ApiClient, RetryPolicy};
use crate::services::navigator::Navigator;
use crate::services::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::stores::SessionStore;
use crate::utils::MemoryStorage;

/// Transporte con respuestas en cola; registra cada petición y cada espera.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    sleeps: RefCell<Vec<u32>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, error: TransportError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network(format!("no scripted response for {}", path))));
        ready(next).boxed_local()
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.sleeps.borrow_mut().push(ms);
        ready(()).boxed_local()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

/// Cliente con almacenamiento en memoria, transporte y navegador de prueba
pub fn test_client(retry: RetryPolicy) -> (ApiClient, Rc<MockTransport>, Rc<RecordingNavigator>) {
    let session = SessionStore::new(Rc::new(MemoryStorage::new()));
    let transport = Rc::new(MockTransport::new());
    let navigator = Rc::new(RecordingNavigator::default());
    let client = ApiClient::new(transport.clone(), session, navigator.clone(), retry);
    (client, transport, navigator)
}
