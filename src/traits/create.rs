//! Create trait for new entities.

use async_trait::async_trait;

use crate::client::TonicPowClient;
use crate::error::Result;

/// Create a new entity.
///
/// The API answers `201 Created` with the stored entity.
///
/// # Example
///
/// ```ignore
/// use tonicpow::{TonicPowClient, User, Create};
///
/// let client = TonicPowClient::from_env()?;
/// let user = User::create(&client, User {
///     email: "someone@example.com".to_string(),
///     ..Default::default()
/// }).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// What the endpoint accepts (often the entity itself).
    type Params: Send;

    /// Create the entity and return the stored version.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the request fails.
    async fn create(client: &TonicPowClient, params: Self::Params) -> Result<Self>;
}
