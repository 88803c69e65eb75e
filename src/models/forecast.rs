use serde::{Deserialize, Serialize};

/// Predicción por semana y por tipo de bundle (`GET /forecast/naive`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Forecast {
    #[serde(default)]
    pub week_data: Vec<ForecastWeek>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ForecastWeek {
    pub week_date: String,
    #[serde(default)]
    pub datapoints: Vec<ForecastDataPoint>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ForecastDataPoint {
    pub bundle_name: String,
    #[serde(alias = "predicted")]
    pub predicted_sales: f64,
    #[serde(default)]
    pub no_show: f64,
    #[serde(default)]
    pub posted: Option<f64>,
    #[serde(default)]
    pub chance_of_no_show: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
}
