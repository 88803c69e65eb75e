use crate::models::{MessageResponse, PickupCheckRequest, Reservation, ReservationList, ReserveResponse};
use crate::services::api_client::{ApiClient, ApiError};

/// Reserva el primer bundle libre de hoy para la plantilla
pub async fn reserve(api: &ApiClient, template_id: u32) -> Result<ReserveResponse, ApiError> {
    log::info!("🛒 Reservando plantilla {}", template_id);
    api.post_empty(&format!("/reservations/{}/reserve", template_id))
        .await
}

pub async fn list_for_customer(api: &ApiClient) -> Result<Vec<Reservation>, ApiError> {
    let list: ReservationList = api.get("/reservations/customer").await?;
    Ok(list.bundles)
}

pub async fn list_for_vendor(api: &ApiClient) -> Result<Vec<Reservation>, ApiError> {
    let list: ReservationList = api.get("/reservations/vendor").await?;
    Ok(list.bundles)
}

pub async fn cancel(api: &ApiClient, reservation_id: u32) -> Result<MessageResponse, ApiError> {
    log::info!("🗑️ Cancelando reserva {}", reservation_id);
    api.post_empty(&format!("/reservations/{}/cancel", reservation_id))
        .await
}

/// El vendedor valida el código que presenta el cliente
pub async fn check_pickup_code(
    api: &ApiClient,
    reservation_id: u32,
    pickup_code: u32,
) -> Result<MessageResponse, ApiError> {
    api.post_json(
        &format!("/reservations/{}/check", reservation_id),
        &PickupCheckRequest { pickup_code },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::RetryPolicy;
    use crate::services::testing::test_client;
    use crate::services::transport::RequestBody;
    use futures::executor::block_on;

    #[test]
    fn wrong_pickup_code_surfaces_detail() {
        let (api, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(400, r#"{"detail": "Incorrect pickup code"}"#);

        let error = block_on(check_pickup_code(&api, 12, 1234)).unwrap_err();

        assert_eq!(error.user_message(), "Incorrect pickup code");
        let request = &transport.requests()[0];
        assert_eq!(request.path, "/reservations/12/check");
        match &request.body {
            RequestBody::Json(json) => assert_eq!(json, r#"{"pickup_code":1234}"#),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn reserve_accepts_message_only_body() {
        let (api, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(200, r#"{"message": "Bundle created successfully"}"#);

        let response = block_on(reserve(&api, 5)).unwrap();

        assert_eq!(response.code, None);
        assert_eq!(transport.paths(), vec!["/reservations/5/reserve"]);
    }

    #[test]
    fn lists_unwrap_bundles() {
        let (api, transport, _) = test_client(RetryPolicy::none());
        transport.push_json(
            200,
            r#"{"bundles": [{"reservation_id": 1, "code": 7, "status": "booked", "time_created": "2024-06-15T10:30:00"}]}"#,
        );
        let reservations = block_on(list_for_customer(&api)).unwrap();
        assert_eq!(reservations[0].pickup_code(), "0007");
    }
}
