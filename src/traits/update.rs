//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::TonicPowClient;
use crate::error::Result;

/// Update an existing entity.
///
/// The full entity is sent; fields left at their default value are omitted
/// from the payload and keep their stored value.
///
/// # Example
///
/// ```ignore
/// use tonicpow::{TonicPowClient, Goal, Get, Update};
///
/// let client = TonicPowClient::from_env()?;
/// let mut goal = Goal::get(&client, 7).await?;
/// goal.title = "New Title".to_string();
/// let updated = goal.update(&client).await?;
/// ```
#[async_trait]
pub trait Update: Sized + Sync {
    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity has no ID or the request fails.
    async fn update(&self, client: &TonicPowClient) -> Result<Self>;
}
