//! Shared Diesel error mapping for the travel-agency repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Constraint violations the repositories recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConstraintViolation {
    Unique { constraint: Option<String> },
    ForeignKey { constraint: Option<String> },
}

/// Classify a Diesel error as a recoverable constraint violation.
pub(crate) fn constraint_violation(error: &DieselError) -> Option<ConstraintViolation> {
    let DieselError::DatabaseError(kind, info) = error else {
        return None;
    };
    let constraint = info.constraint_name().map(str::to_owned);
    match kind {
        DatabaseErrorKind::UniqueViolation => Some(ConstraintViolation::Unique { constraint }),
        DatabaseErrorKind::ForeignKeyViolation => {
            Some(ConstraintViolation::ForeignKey { constraint })
        }
        _ => None,
    }
}

/// Map a pool error onto a repository's connection constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map a Diesel error onto a repository's query/connection constructors.
///
/// Database messages stay in the debug log; the repository error carries a
/// stable description.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => connection("database connection error"),
        DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, _) => {
            query("concurrent update conflict")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            query("check constraint violated")
        }
        _ => query("database error"),
    }
}
