//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed travel-agency entities and the services
//! that operate on them. Types are immutable once validated and carry no
//! transport concerns; the HTTP adapter owns JSON shapes.
//!
//! Public surface:
//! - Error (alias to `error::Error`): service-level error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - NewClient / NewTrip: validated inputs built from their drafts.
//! - Trip / ClientTrip: stored trips with their ordered country lists.
//! - ClientService, TripService, EnrollmentService: driving port
//!   implementations generic over their repository ports.

pub mod client;
pub mod client_service;
pub mod enrollment_service;
pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;
pub mod trip;
pub mod trip_service;

pub use self::client::{
    ClientId, ClientValidationError, NewClient, NewClientDraft, is_valid_email,
};
pub use self::client_service::ClientService;
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::{
    DeletionOutcome, EnrollmentError, EnrollmentOutcome, UnenrollmentOutcome,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trip::{ClientTrip, NewTrip, NewTripDraft, Trip, TripId, TripValidationError};
pub use self::trip_service::TripService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use travel_agency::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::conflict("trip is full"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
