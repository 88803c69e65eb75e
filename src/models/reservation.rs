use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Booked,
    Collected,
    Cancelled,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "Booked",
            ReservationStatus::Collected => "Collected",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }
}

/// Reserva vista por el cliente o por el vendedor (`customer_id` solo
/// viene en `GET /reservations/vendor`).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Reservation {
    pub reservation_id: u32,
    #[serde(default)]
    pub bundle_id: Option<u32>,
    /// Código de recogida
    pub code: u32,
    pub status: ReservationStatus,
    /// Hora local del navegador
    #[serde(deserialize_with = "deserialize_local_timestamp")]
    pub time_created: NaiveDateTime,
    #[serde(default)]
    pub customer_id: Option<u32>,
    #[serde(default)]
    pub template_title: Option<String>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl Reservation {
    /// El código se muestra siempre con cuatro cifras
    pub fn pickup_code(&self) -> String {
        format!("{:04}", self.code)
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ReservationList {
    #[serde(default)]
    pub bundles: Vec<Reservation>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PickupCheckRequest {
    pub pickup_code: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateBundleRequest {
    pub template_id: u32,
    pub amount: u32,
}

/// Respuesta de `POST /reservations/{template_id}/reserve`
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ReserveResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reservation_id: Option<u32>,
    #[serde(default)]
    pub code: Option<u32>,
}

/// Acepta RFC 3339 (se pasa a hora local) o fecha ISO sin zona
/// (FastAPI serializa así los `datetime` naive).
fn deserialize_local_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_zone) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_zone.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn naive_timestamps() {
        let parsed = parse_timestamp("2024-06-15T10:30:00.123456").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(parsed.hour(), 10);
        assert!(parse_timestamp("2024-06-15 08:00:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn list_schema() {
        let json = r#"{"bundles": [
            {"reservation_id": 7, "code": 42, "status": "booked", "time_created": "2024-06-15T10:30:00"},
            {"reservation_id": 8, "code": 1234, "status": "collected", "time_created": "2024-06-14T09:00:00", "customer_id": 3}
        ]}"#;
        let list: ReservationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.bundles.len(), 2);
        assert_eq!(list.bundles[0].pickup_code(), "0042");
        assert_eq!(list.bundles[1].customer_id, Some(3));

        let empty: ReservationList = serde_json::from_str("{}").unwrap();
        assert!(empty.bundles.is_empty());

        let bad_status = r#"{"bundles": [{"reservation_id": 1, "code": 1, "status": "lost", "time_created": "2024-06-15T10:30:00"}]}"#;
        assert!(serde_json::from_str::<ReservationList>(bad_status).is_err());
    }
}
