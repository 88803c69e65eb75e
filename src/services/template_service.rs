// ============================================================================
// TEMPLATE SERVICE - plantillas de bundle y su stock disponible
// ============================================================================
// El stock se pide aparte (`/templates/count/{id}`). Un contador que falla
// no tumba la página: la plantilla se muestra con AvailableCount::Unknown.
// Solo un 401 se propaga (el interceptor ya ha redirigido a /login) y corta
// el resto de contadores en vuelo.
// ============================================================================

use futures::future::try_join_all;

use crate::models::{
    AvailableCount, MessageResponse, Template, TemplateCreate, TemplateCreated, TemplateList,
    TemplateWithCount,
};
use crate::services::api_client::{image_form, ApiClient, ApiError};

pub async fn list_for_vendor(api: &ApiClient, vendor_id: u32) -> Result<TemplateList, ApiError> {
    api.get(&format!("/templates/vendor/{}", vendor_id)).await
}

/// `null` se interpreta como 0
pub async fn get_count(api: &ApiClient, template_id: u32) -> Result<u32, ApiError> {
    let count: Option<u32> = api.get(&format!("/templates/count/{}", template_id)).await?;
    Ok(count.unwrap_or(0))
}

pub async fn get_template(api: &ApiClient, template_id: u32) -> Result<Template, ApiError> {
    api.get(&format!("/templates/{}", template_id)).await
}

pub async fn create_template(api: &ApiClient, template: &TemplateCreate) -> Result<TemplateCreated, ApiError> {
    log::info!("🧺 Creando plantilla '{}'", template.title);
    api.post_json("/templates", template).await
}

pub async fn upload_template_image(
    api: &ApiClient,
    template_id: u32,
    file: &web_sys::File,
) -> Result<MessageResponse, ApiError> {
    let form = image_form(file)?;
    api.post_form(&format!("/templates/upload-image/{}", template_id), form)
        .await
}

async fn available_count(api: &ApiClient, template_id: u32) -> Result<AvailableCount, ApiError> {
    match get_count(api, template_id).await {
        Ok(count) => Ok(AvailableCount::Known(count)),
        Err(error @ (ApiError::Unauthorized | ApiError::Cancelled)) => Err(error),
        Err(error) => {
            log::warn!("⚠️ Stock de la plantilla {} desconocido: {}", template_id, error);
            Ok(AvailableCount::Unknown)
        }
    }
}

/// Plantillas de un vendedor con su stock; los contadores se piden en paralelo
pub async fn list_with_counts(api: &ApiClient, vendor_id: u32) -> Result<Vec<TemplateWithCount>, ApiError> {
    let list = list_for_vendor(api, vendor_id).await?;
    let counts = try_join_all(
        list.templates
            .iter()
            .map(|template| available_count(api, template.template_id)),
    )
    .await?;

    Ok(list
        .templates
        .into_iter()
        .zip(counts)
        .map(|(template, available)| TemplateWithCount { template, available })
        .collect())
}

pub async fn get_with_count(api: &ApiClient, template_id: u32) -> Result<TemplateWithCount, ApiError> {
    let template = get_template(api, template_id).await?;
    let available = available_count(api, template_id).await?;
    Ok(TemplateWithCount { template, available })
}
