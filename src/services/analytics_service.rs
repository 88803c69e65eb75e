use crate::models::Forecast;
use crate::services::api_client::{ApiClient, ApiError};

pub async fn get_forecast(api: &ApiClient) -> Result<Forecast, ApiError> {
    let forecast: Forecast = api.get("/forecast/naive").await?;
    log::info!("📈 Predicción de {} semanas", forecast.week_data.len());
    Ok(forecast)
}
