//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` pooling.
//!
//! - Repositories only translate between Diesel rows and domain types.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Every database failure is mapped into the owning port's error type.
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_agency::outbound::persistence::{DbPool, DieselClientRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/travel")).await?;
//! let repo = DieselClientRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_client_repository;
mod diesel_error_mapping;
mod diesel_registration_repository;
mod diesel_trip_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;
mod trip_grouping;

pub use diesel_client_repository::DieselClientRepository;
pub use diesel_registration_repository::DieselRegistrationRepository;
pub use diesel_trip_repository::DieselTripRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
