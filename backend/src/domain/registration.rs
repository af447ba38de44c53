//! Registration outcomes and the typed enrollment error.
//!
//! Enrollment is the one workflow where callers need to tell failures apart
//! programmatically, so it reports an [`EnrollmentError`] instead of the
//! generic domain [`Error`]. The conversion at the bottom of this module is
//! the only place where enrollment failures meet the generic taxonomy.

use chrono::NaiveDate;

use super::{ClientId, Error, TripId};

/// What the store did with an enrollment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    /// A registration was inserted with the given date.
    Enrolled { registered_at: NaiveDate },
    ClientNotFound,
    TripNotFound,
    /// The trip already holds `max_people` registrations.
    TripFull { max_people: i32 },
    AlreadyRegistered,
}

/// What the store did with an unenrollment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnenrollmentOutcome {
    Removed,
    NotRegistered,
}

/// What the store did with a client or trip deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    NotFound,
    /// Registrations still reference the record, so nothing was removed.
    HasRegistrations { count: i64 },
}

/// Failures of the enrollment workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentError {
    #[error("Client with ID {client_id} not found.")]
    ClientNotFound { client_id: ClientId },
    #[error("Trip with ID {trip_id} not found.")]
    TripNotFound { trip_id: TripId },
    #[error(
        "The maximum number of participants ({max_people}) for trip with ID {trip_id} has been reached."
    )]
    TripFull { trip_id: TripId, max_people: i32 },
    #[error("Client with ID {client_id} is already registered for trip with ID {trip_id}.")]
    AlreadyRegistered { client_id: ClientId, trip_id: TripId },
    #[error("Client with ID {client_id} is not registered for trip with ID {trip_id}.")]
    NotRegistered { client_id: ClientId, trip_id: TripId },
    #[error("registration store unavailable")]
    Unavailable,
    #[error("registration store error: {message}")]
    Internal { message: String },
}

impl From<EnrollmentError> for Error {
    fn from(value: EnrollmentError) -> Self {
        let message = value.to_string();
        match value {
            EnrollmentError::ClientNotFound { .. }
            | EnrollmentError::TripNotFound { .. }
            | EnrollmentError::NotRegistered { .. } => Self::not_found(message),
            EnrollmentError::TripFull { .. } | EnrollmentError::AlreadyRegistered { .. } => {
                Self::conflict(message)
            }
            EnrollmentError::Unavailable => Self::service_unavailable(message),
            EnrollmentError::Internal { .. } => Self::internal(message),
        }
    }
}
