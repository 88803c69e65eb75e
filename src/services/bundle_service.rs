use crate::models::{CreateBundleRequest, MessageResponse};
use crate::services::api_client::{ApiClient, ApiError};

/// Publica `amount` bundles nuevos de una plantilla para hoy
pub async fn create_bundles(api: &ApiClient, template_id: u32, amount: u32) -> Result<MessageResponse, ApiError> {
    log::info!("📦 Publicando {} bundles de la plantilla {}", amount, template_id);
    api.post_json("/bundles/create", &CreateBundleRequest { template_id, amount })
        .await
}
