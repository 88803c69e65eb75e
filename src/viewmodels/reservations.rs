// ============================================================================
// RESERVATIONS - reparto activas / anteriores, solo con fechas locales
// ============================================================================

use chrono::NaiveDate;

use crate::models::{Reservation, ReservationStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationPartition {
    pub active: Vec<Reservation>,
    pub previous: Vec<Reservation>,
}

impl ReservationPartition {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.previous.is_empty()
    }
}

fn newest_first(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| b.time_created.cmp(&a.time_created));
}

fn split(reservations: Vec<Reservation>, is_active: impl Fn(&Reservation) -> bool) -> ReservationPartition {
    let (mut active, mut previous): (Vec<_>, Vec<_>) = reservations.into_iter().partition(|r| is_active(r));
    newest_first(&mut active);
    newest_first(&mut previous);
    ReservationPartition { active, previous }
}

/// Cliente: activa = reservada y creada hoy (fecha local)
pub fn partition_for_customer(reservations: Vec<Reservation>, today: NaiveDate) -> ReservationPartition {
    split(reservations, |r| {
        r.status == ReservationStatus::Booked && r.time_created.date() == today
    })
}

/// Vendedor: activa = pendiente de recoger, sin mirar la fecha
pub fn partition_for_vendor(reservations: Vec<Reservation>) -> ReservationPartition {
    split(reservations, |r| r.status == ReservationStatus::Booked)
}

/// Actualización local tras cancelar o validar un código
pub fn with_status(reservations: &[Reservation], reservation_id: u32, status: ReservationStatus) -> Vec<Reservation> {
    reservations
        .iter()
        .cloned()
        .map(|mut r| {
            if r.reservation_id == reservation_id {
                r.status = status;
            }
            r
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: u32, status: &str, created: &str) -> Reservation {
        serde_json::from_value(serde_json::json!({
            "reservation_id": id,
            "code": 1000 + id,
            "status": status,
            "time_created": created,
        }))
        .unwrap()
    }

    fn ids(reservations: &[Reservation]) -> Vec<u32> {
        reservations.iter().map(|r| r.reservation_id).collect()
    }

    fn sample() -> Vec<Reservation> {
        vec![
            reservation(1, "booked", "2024-06-15T09:00:00"),
            reservation(2, "booked", "2024-06-14T18:00:00"),
            reservation(3, "collected", "2024-06-15T08:00:00"),
            reservation(4, "booked", "2024-06-15T12:30:00"),
        ]
    }

    #[test]
    fn customer_active_means_booked_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let partition = partition_for_customer(sample(), today);
        assert_eq!(ids(&partition.active), vec![4, 1]);
        assert_eq!(ids(&partition.previous), vec![3, 2]);
    }

    #[test]
    fn vendor_active_means_booked() {
        let partition = partition_for_vendor(sample());
        assert_eq!(ids(&partition.active), vec![4, 1, 2]);
        assert_eq!(ids(&partition.previous), vec![3]);
        assert!(partition_for_vendor(Vec::new()).is_empty());
    }

    #[test]
    fn status_update_is_local() {
        let updated = with_status(&sample(), 4, ReservationStatus::Cancelled);
        assert_eq!(updated[3].status, ReservationStatus::Cancelled);
        assert_eq!(updated[0].status, ReservationStatus::Booked);
    }
}
