//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::FugaClient;
use crate::error::Result;

/// Delete an entity from the catalog.
///
/// FUGA delete endpoints reply with plain text or an empty body, so a
/// successful delete yields `()`.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &FugaClient, id: Self::Id) -> Result<()>;
}
