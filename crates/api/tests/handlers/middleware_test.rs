use axum::http::StatusCode;
use placement_api::middleware::error_handling::map_error;
use placement_core::{errors::PlacementError, models::slot::SlotRequest, slots::generate_slots};
use rstest::rstest;

#[rstest]
#[case::not_found(PlacementError::NotFound("Drive".to_string()), StatusCode::NOT_FOUND)]
#[case::validation(PlacementError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case::conflict(PlacementError::Conflict("Already published".to_string()), StatusCode::CONFLICT)]
#[case::internal(
    PlacementError::Internal(eyre::eyre!("Lock poisoned")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: PlacementError, #[case] expected: StatusCode) {
    assert_eq!(map_error(error).status(), expected);
}

#[test]
fn test_invalid_range_is_bad_request() {
    let request = SlotRequest {
        date: "2025-12-10".to_string(),
        start_time: "10:00".to_string(),
        end_time: "09:00".to_string(),
        duration_minutes: 30,
        panel_count: 1,
        timezone: None,
    };
    let error = generate_slots(&request).unwrap_err();

    let response = map_error(error.into());

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
