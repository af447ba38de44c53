//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//!
//! Adapters translate between domain types and storage rows. Business rules
//! stay in the domain services.

pub mod persistence;
