//! Tests for the client service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockClientRepository;

#[fixture]
fn draft() -> NewClientDraft {
    NewClientDraft {
        first_name: "Anna".into(),
        last_name: "Nowak".into(),
        email: "a@b.co".into(),
        phone: None,
        national_id: None,
    }
}

#[rstest]
#[tokio::test]
async fn create_client_stores_validated_client(draft: NewClientDraft) {
    let mut repo = MockClientRepository::new();
    repo.expect_insert()
        .withf(|client| client.email() == "a@b.co" && client.first_name() == "Anna")
        .times(1)
        .return_once(|_| Ok(ClientId::new(12)));

    let service = ClientService::new(Arc::new(repo));
    let client_id = service
        .create_client(draft)
        .await
        .expect("client is created");

    assert_eq!(client_id, ClientId::new(12));
}

#[rstest]
#[tokio::test]
async fn create_client_rejects_invalid_email_without_touching_store(mut draft: NewClientDraft) {
    draft.email = "not-an-email".into();
    let mut repo = MockClientRepository::new();
    repo.expect_insert().times(0);

    let service = ClientService::new(Arc::new(repo));
    let error = service
        .create_client(draft)
        .await
        .expect_err("invalid email");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|details| details.get("field")),
        Some(&serde_json::json!("email"))
    );
}

#[rstest]
#[tokio::test]
async fn create_client_maps_connection_error_to_service_unavailable(draft: NewClientDraft) {
    let mut repo = MockClientRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| {
            Err(ClientRepositoryError::connection(
                "timed out connecting to db.internal:5432",
            ))
        });

    let service = ClientService::new(Arc::new(repo));
    let error = service
        .create_client(draft)
        .await
        .expect_err("service unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(error.message(), "client repository unavailable");
}

#[rstest]
#[case(DeletionOutcome::NotFound, ErrorCode::NotFound)]
#[case(DeletionOutcome::HasRegistrations { count: 2 }, ErrorCode::Conflict)]
#[tokio::test]
async fn delete_client_maps_blocked_outcomes(
    #[case] outcome: DeletionOutcome,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockClientRepository::new();
    repo.expect_delete()
        .with(eq(ClientId::new(3)))
        .times(1)
        .return_once(move |_| Ok(outcome));

    let service = ClientService::new(Arc::new(repo));
    let error = service
        .delete_client(ClientId::new(3))
        .await
        .expect_err("deletion is refused");

    assert_eq!(error.code(), expected);
    assert!(error.message().contains("Client with ID 3"));
}

#[rstest]
#[tokio::test]
async fn delete_client_succeeds_when_deleted() {
    let mut repo = MockClientRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(|_| Ok(DeletionOutcome::Deleted));

    let service = ClientService::new(Arc::new(repo));
    service
        .delete_client(ClientId::new(3))
        .await
        .expect("client deleted");
}

#[rstest]
#[tokio::test]
async fn create_client_rejects_over_long_fields_without_touching_store(
    mut draft: NewClientDraft,
) {
    draft.last_name = "N".repeat(121);
    let mut repo = MockClientRepository::new();
    repo.expect_insert().times(0);

    let service = ClientService::new(Arc::new(repo));
    let error = service
        .create_client(draft)
        .await
        .expect_err("over-long last name");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "lastName must be at most 120 characters");
}

#[rstest]
#[tokio::test]
async fn query_errors_map_to_internal() {
    let mut repo = MockClientRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(|_| Err(ClientRepositoryError::query("syntax error")));

    let service = ClientService::new(Arc::new(repo));
    let error = service
        .delete_client(ClientId::new(3))
        .await
        .expect_err("internal");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
