//! Travel agency backend: clients, trips and capacity-limited registrations.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
