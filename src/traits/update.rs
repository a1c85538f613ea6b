//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::FugaClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Params types serialize only the fields that are set, so unspecified
/// fields are left untouched by the server.
///
/// # Example
///
/// ```ignore
/// use fugapi::{FugaClient, Product, Update, ProductUpdateParams};
///
/// let client = FugaClient::from_env()?;
/// client.login().await?;
/// let updated = Product::update(
///     &client,
///     1002645007453,
///     ProductUpdateParams {
///         name: Some("Updated Album Name".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &FugaClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
