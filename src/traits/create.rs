//! Create trait for registering new entities.

use async_trait::async_trait;

use crate::client::FugaClient;
use crate::error::Result;

/// Create a new entity in the catalog.
///
/// The server assigns the ID and returns the full entity.
///
/// # Example
///
/// ```ignore
/// use fugapi::{FugaClient, Product, Create, ProductCreateParams};
///
/// let client = FugaClient::from_env()?;
/// client.login().await?;
/// let product = Product::create(
///     &client,
///     ProductCreateParams {
///         name: "New Album".to_string(),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Parameters for creation.
    type Params;

    /// Create the entity and return the server's copy of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the data or the request fails.
    async fn create(client: &FugaClient, params: Self::Params) -> Result<Self>;
}
