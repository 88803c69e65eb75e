pub mod analytics_service;
pub mod api_client;
pub mod auth_service;
pub mod bundle_service;
pub mod customer_service;
pub mod navigator;
pub mod reservation_service;
pub mod template_service;
pub mod transport;
pub mod vendor_service;

#[cfg(test)]
pub mod testing;

pub use api_client::{ApiClient, ApiError, RetryPolicy};
pub use navigator::{BrowserNavigator, Navigator};
pub use transport::{GlooTransport, Transport};
