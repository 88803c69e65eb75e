use crate::models::{CreditTopUpRequest, Customer, MessageResponse, Streak};
use crate::services::api_client::{ApiClient, ApiError};

pub async fn get_profile(api: &ApiClient) -> Result<Customer, ApiError> {
    api.get("/customers/profile").await
}

/// `None` cuando el cliente aún no tiene racha
pub async fn get_streak(api: &ApiClient) -> Result<Option<Streak>, ApiError> {
    api.get("/customers/streak").await
}

pub async fn add_credit(api: &ApiClient, request: &CreditTopUpRequest) -> Result<MessageResponse, ApiError> {
    log::info!("💳 Recarga de £{:.2}", request.credit_top_up);
    api.post_json("/customer/addcredit", request).await
}
