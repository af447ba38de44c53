//! Port for client persistence.

use async_trait::async_trait;

use crate::domain::{ClientId, DeletionOutcome, NewClient};

use super::define_port_error;

define_port_error! {
    /// Errors raised by client repository adapters.
    pub enum ClientRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "client repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "client repository query failed: {message}",
    }
}

/// Port for storing and removing clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a validated client and return the store-assigned identifier.
    async fn insert(&self, client: &NewClient) -> Result<ClientId, ClientRepositoryError>;

    /// Delete a client unless registrations still reference it.
    async fn delete(&self, client_id: ClientId) -> Result<DeletionOutcome, ClientRepositoryError>;
}
