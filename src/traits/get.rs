//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::TonicPowClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use tonicpow::{TonicPowClient, User, Get};
///
/// let client = TonicPowClient::from_env()?;
/// let user = User::get(&client, 42).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty, the entity is not found or the
    /// request fails.
    async fn get(client: &TonicPowClient, id: Self::Id) -> Result<Self>;
}
