//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::TonicPowClient;
use crate::error::Result;

/// Delete an entity by ID.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id: Send;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty or the request fails.
    async fn delete(client: &TonicPowClient, id: Self::Id) -> Result<()>;
}
