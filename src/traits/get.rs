//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::FugaClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by their FUGA-assigned numeric ID.
///
/// # Example
///
/// ```ignore
/// use fugapi::{FugaClient, Product, Get};
///
/// let client = FugaClient::from_env()?;
/// client.login().await?;
/// let product = Product::get(&client, 1002645007453).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity (numeric for all FUGA resources).
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &FugaClient, id: Self::Id) -> Result<Self>;
}
