//! Tests for the enrollment service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockRegistrationRepository;

const CLIENT: ClientId = ClientId::new(1);
const TRIP: TripId = TripId::new(2);

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 3, 14, 23, 59, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

fn service_with(
    repo: MockRegistrationRepository,
    clock: Arc<dyn Clock>,
) -> EnrollmentService<MockRegistrationRepository> {
    EnrollmentService::new(Arc::new(repo), clock)
}

#[rstest]
#[tokio::test]
async fn enroll_passes_clock_date_to_repository(clock: Arc<dyn Clock>) {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_enroll()
        .with(eq(CLIENT), eq(TRIP), eq(today()))
        .times(1)
        .return_once(|_, _, day| Ok(EnrollmentOutcome::Enrolled { registered_at: day }));

    service_with(repo, clock)
        .enroll_client(CLIENT, TRIP)
        .await
        .expect("client enrolled");
}

#[rstest]
#[case(EnrollmentOutcome::ClientNotFound, EnrollmentError::ClientNotFound { client_id: CLIENT })]
#[case(EnrollmentOutcome::TripNotFound, EnrollmentError::TripNotFound { trip_id: TRIP })]
#[case(
    EnrollmentOutcome::TripFull { max_people: 1 },
    EnrollmentError::TripFull { trip_id: TRIP, max_people: 1 }
)]
#[case(
    EnrollmentOutcome::AlreadyRegistered,
    EnrollmentError::AlreadyRegistered { client_id: CLIENT, trip_id: TRIP }
)]
#[tokio::test]
async fn enroll_reports_typed_rejections(
    clock: Arc<dyn Clock>,
    #[case] outcome: EnrollmentOutcome,
    #[case] expected: EnrollmentError,
) {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_enroll()
        .times(1)
        .return_once(move |_, _, _| Ok(outcome));

    let error = service_with(repo, clock)
        .enroll_client(CLIENT, TRIP)
        .await
        .expect_err("enrollment rejected");

    assert_eq!(error, expected);
}

#[rstest]
#[tokio::test]
async fn enroll_maps_connection_errors_to_unavailable(clock: Arc<dyn Clock>) {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_enroll()
        .times(1)
        .return_once(|_, _, _| Err(RegistrationRepositoryError::connection("pool exhausted")));

    let error = service_with(repo, clock)
        .enroll_client(CLIENT, TRIP)
        .await
        .expect_err("unavailable");

    assert_eq!(error, EnrollmentError::Unavailable);
    assert_eq!(error.to_string(), "registration store unavailable");
}

#[rstest]
#[tokio::test]
async fn unenroll_removes_registration(clock: Arc<dyn Clock>) {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_unenroll()
        .with(eq(CLIENT), eq(TRIP))
        .times(1)
        .return_once(|_, _| Ok(UnenrollmentOutcome::Removed));

    service_with(repo, clock)
        .unenroll_client(CLIENT, TRIP)
        .await
        .expect("client unenrolled");
}

#[rstest]
#[tokio::test]
async fn unenroll_unknown_pair_is_not_registered(clock: Arc<dyn Clock>) {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_unenroll()
        .times(1)
        .return_once(|_, _| Ok(UnenrollmentOutcome::NotRegistered));

    let error = service_with(repo, clock)
        .unenroll_client(CLIENT, TRIP)
        .await
        .expect_err("not registered");

    assert_eq!(
        error,
        EnrollmentError::NotRegistered {
            client_id: CLIENT,
            trip_id: TRIP
        }
    );
}

#[rstest]
#[tokio::test]
async fn unenroll_query_errors_are_internal(clock: Arc<dyn Clock>) {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_unenroll()
        .times(1)
        .return_once(|_, _| Err(RegistrationRepositoryError::query("deadlock detected")));

    let error = service_with(repo, clock)
        .unenroll_client(CLIENT, TRIP)
        .await
        .expect_err("internal");

    assert!(matches!(error, EnrollmentError::Internal { .. }));
}
