//! Tests for client and registration HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockClientCommand, MockEnrollmentCommand, MockTripQuery};
use crate::domain::{ClientTrip, EnrollmentError, Trip};
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::test_app;

fn with_clients(command: MockClientCommand) -> HttpStatePorts {
    HttpStatePorts {
        clients: Arc::new(command),
        ..HttpStatePorts::default()
    }
}

fn with_enrollments(command: MockEnrollmentCommand) -> HttpStatePorts {
    HttpStatePorts {
        enrollments: Arc::new(command),
        ..HttpStatePorts::default()
    }
}

#[rstest]
#[actix_web::test]
async fn create_client_accepts_legacy_aliases() {
    let mut command = MockClientCommand::new();
    command
        .expect_create_client()
        .withf(|draft| {
            draft.first_name == "Ada"
                && draft.phone.as_deref() == Some("+48 600 100 200")
                && draft.national_id.as_deref() == Some("90010112345")
        })
        .times(1)
        .return_once(|_| Ok(ClientId::new(12)));
    let app = actix_test::init_service(test_app(with_clients(command))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/clients")
            .set_json(json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "telephone": "+48 600 100 200",
                "pesel": "90010112345",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/clients/12/trips")
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"idClient": 12}));
}

#[rstest]
#[case(json!({"lastName": "Lovelace", "email": "ada@example.com"}), "firstName")]
#[case(json!({"firstName": "Ada", "email": "ada@example.com"}), "lastName")]
#[case(json!({"firstName": "Ada", "lastName": "Lovelace"}), "email")]
#[case(json!({"firstName": "Ada", "lastName": "Lovelace", "email": "nope"}), "email")]
#[case(json!({"firstName": "  ", "lastName": "Lovelace", "email": "ada@example.com"}), "firstName")]
#[actix_web::test]
async fn create_client_rejects_invalid_payloads(#[case] payload: Value, #[case] field: &str) {
    let app = actix_test::init_service(test_app(HttpStatePorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/clients")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[actix_web::test]
async fn enroll_client_returns_no_content() {
    let mut command = MockEnrollmentCommand::new();
    command
        .expect_enroll_client()
        .with(eq(ClientId::new(3)), eq(TripId::new(5)))
        .times(1)
        .return_once(|_, _| Ok(()));
    let app = actix_test::init_service(test_app(with_enrollments(command))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/clients/3/trips")
            .set_json(json!({"tripId": 5}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[case(
    EnrollmentError::ClientNotFound { client_id: ClientId::new(3) },
    StatusCode::NOT_FOUND,
    "Client with ID 3 not found."
)]
#[case(
    EnrollmentError::TripNotFound { trip_id: TripId::new(5) },
    StatusCode::NOT_FOUND,
    "Trip with ID 5 not found."
)]
#[case(
    EnrollmentError::TripFull { trip_id: TripId::new(5), max_people: 2 },
    StatusCode::CONFLICT,
    "The maximum number of participants (2) for trip with ID 5 has been reached."
)]
#[case(
    EnrollmentError::AlreadyRegistered { client_id: ClientId::new(3), trip_id: TripId::new(5) },
    StatusCode::CONFLICT,
    "Client with ID 3 is already registered for trip with ID 5."
)]
#[case(
    EnrollmentError::Unavailable,
    StatusCode::SERVICE_UNAVAILABLE,
    "registration store unavailable"
)]
#[actix_web::test]
async fn enroll_client_maps_rejections(
    #[case] error: EnrollmentError,
    #[case] status: StatusCode,
    #[case] detail: &str,
) {
    let mut command = MockEnrollmentCommand::new();
    command
        .expect_enroll_client()
        .times(1)
        .return_once(move |_, _| Err(error));
    let app = actix_test::init_service(test_app(with_enrollments(command))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/clients/3/trips")
            .set_json(json!({"tripId": 5}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), status);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["detail"], detail);
    assert_eq!(body["status"], status.as_u16());
}

#[rstest]
#[actix_web::test]
async fn enroll_without_trip_id_is_a_bad_request() {
    let mut command = MockEnrollmentCommand::new();
    command.expect_enroll_client().times(0);
    let app = actix_test::init_service(test_app(with_enrollments(command))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/clients/3/trips")
            .set_json(json!({}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "tripId");
}

#[rstest]
#[case(Ok(()), StatusCode::NO_CONTENT)]
#[case(
    Err(EnrollmentError::NotRegistered { client_id: ClientId::new(3), trip_id: TripId::new(5) }),
    StatusCode::NOT_FOUND
)]
#[actix_web::test]
async fn unenroll_client_maps_outcomes(
    #[case] outcome: Result<(), EnrollmentError>,
    #[case] expected: StatusCode,
) {
    let mut command = MockEnrollmentCommand::new();
    command
        .expect_unenroll_client()
        .with(eq(ClientId::new(3)), eq(TripId::new(5)))
        .times(1)
        .return_once(move |_, _| outcome);
    let app = actix_test::init_service(test_app(with_enrollments(command))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/clients/3/trips/5")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), expected);
}

#[rstest]
#[case(Ok(()), StatusCode::NO_CONTENT)]
#[case(
    Err(Error::conflict("Client with ID 3 has 1 trip registration(s) and cannot be deleted.")),
    StatusCode::CONFLICT
)]
#[actix_web::test]
async fn delete_client_maps_outcomes(
    #[case] outcome: Result<(), Error>,
    #[case] expected: StatusCode,
) {
    let mut command = MockClientCommand::new();
    command
        .expect_delete_client()
        .with(eq(ClientId::new(3)))
        .times(1)
        .return_once(move |_| outcome);
    let app = actix_test::init_service(test_app(with_clients(command))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/clients/3").to_request(),
    )
    .await;

    assert_eq!(response.status(), expected);
}

#[rstest]
#[actix_web::test]
async fn list_client_trips_includes_registration_dates() {
    let day = |d| NaiveDate::from_ymd_opt(2026, 5, d).expect("valid date");
    let entry = ClientTrip {
        trip: Trip {
            id: TripId::new(5),
            name: "Alps".into(),
            description: None,
            date_from: day(10),
            date_to: day(12),
            max_people: 3,
            countries: vec!["Austria".into(), "Switzerland".into()],
        },
        registered_at: day(1),
        payment_date: None,
    };
    let mut query = MockTripQuery::new();
    query
        .expect_list_client_trips()
        .with(eq(ClientId::new(3)))
        .times(1)
        .return_once(move |_| Ok(vec![entry]));
    let app = actix_test::init_service(test_app(HttpStatePorts {
        trips_query: Arc::new(query),
        ..HttpStatePorts::default()
    }))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/clients/3/trips").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!([{
            "idTrip": 5,
            "name": "Alps",
            "description": null,
            "dateFrom": "2026-05-10",
            "dateTo": "2026-05-12",
            "maxPeople": 3,
            "countries": ["Austria", "Switzerland"],
            "registeredAt": "2026-05-01",
            "paymentDate": null,
        }])
    );
}

#[rstest]
#[actix_web::test]
async fn list_trips_for_unknown_client_is_not_found() {
    let app = actix_test::init_service(test_app(HttpStatePorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/clients/99/trips").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
