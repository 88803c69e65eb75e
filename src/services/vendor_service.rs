use crate::models::Vendor;
use crate::services::api_client::{ApiClient, ApiError};

pub async fn get_profile(api: &ApiClient) -> Result<Vendor, ApiError> {
    api.get("/vendors/profile").await
}

pub async fn list_vendors(api: &ApiClient) -> Result<Vec<Vendor>, ApiError> {
    let vendors: Vec<Vendor> = api.get("/vendors").await?;
    log::info!("🏪 {} vendedores cargados", vendors.len());
    Ok(vendors)
}

/// No hay endpoint por id: se filtra el listado completo
pub async fn get_vendor_by_id(api: &ApiClient, vendor_id: u32) -> Result<Option<Vendor>, ApiError> {
    let vendors = list_vendors(api).await?;
    Ok(vendors.into_iter().find(|v| v.vendor_id == vendor_id))
}
