//! Product model and trait implementations.
//!
//! A product is a release (album, single, EP) in the FUGA catalog. It
//! carries the release-level metadata and an ordered tracklist of assets.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FugaClient;
use crate::error::Result;
use crate::models::asset::Asset;
use crate::models::common::ResourceRef;
use crate::pagination::Page;
use crate::traits::{Create, Delete, Get, List, Update};

/// A FUGA product (release).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// The FUGA-assigned product ID.
    pub id: u64,

    /// Release title.
    pub name: String,

    /// UPC/EAN barcode, assigned manually or via the barcode endpoint.
    #[serde(default)]
    pub upc: Option<String>,

    /// Catalog number within the label.
    #[serde(default)]
    pub catalog_number: Option<String>,

    /// Delivery state (e.g. "PENDING", "PUBLISHED", "DELIVERED").
    #[serde(default)]
    pub state: Option<String>,

    /// Release format (e.g. "ALBUM", "SINGLE", "EP").
    #[serde(default)]
    pub release_format_type: Option<String>,

    /// Street date.
    #[serde(default)]
    pub consumer_release_date: Option<NaiveDate>,

    /// Original release date for re-releases.
    #[serde(default)]
    pub original_release_date: Option<NaiveDate>,

    /// Artist name as displayed in stores.
    #[serde(default)]
    pub display_artist: Option<String>,

    /// Owning label.
    #[serde(default)]
    pub label: Option<ResourceRef>,

    /// Primary genre.
    #[serde(default)]
    pub genre: Option<ResourceRef>,

    /// Metadata language code.
    #[serde(default)]
    pub language: Option<String>,

    /// Explicit-content flag.
    #[serde(default)]
    pub parental_advisory: bool,

    /// When the product was created in FUGA.
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    /// When the product was last modified.
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product has been published for delivery.
    pub fn is_published(&self) -> bool {
        matches!(self.state.as_deref(), Some("PUBLISHED") | Some("DELIVERED"))
    }

    /// Publish the product, marking it ready for delivery.
    #[tracing::instrument(skip(client))]
    pub async fn publish(&self, client: &FugaClient) -> Result<Product> {
        let response = client
            .post_empty(&format!("products/{}/publish", self.id))
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Assign a fresh barcode to the product.
    #[tracing::instrument(skip(client))]
    pub async fn assign_barcode(&self, client: &FugaClient) -> Result<Product> {
        let response = client
            .post_empty(&format!("products/{}/barcode", self.id))
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Replace the product's delivery territories with the given
    /// ISO country codes.
    #[tracing::instrument(skip(client))]
    pub async fn update_territories(
        &self,
        client: &FugaClient,
        territories: &[String],
    ) -> Result<Vec<String>> {
        let response = client
            .put(&format!("products/{}/territories", self.id), territories)
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Fetch the assets (tracks) on this product, in sequence order.
    #[tracing::instrument(skip(client))]
    pub async fn assets(&self, client: &FugaClient) -> Result<Vec<Asset>> {
        let response = client.get(&format!("products/{}/assets", self.id)).await?;
        let envelope: ProductAssetsResponse = FugaClient::parse_json(response).await?;
        Ok(envelope.asset)
    }

    /// Attach an existing asset to this product at the given sequence.
    #[tracing::instrument(skip(client))]
    pub async fn add_asset(
        &self,
        client: &FugaClient,
        asset_id: u64,
        sequence: u32,
    ) -> Result<()> {
        let body = TracklistEntry {
            id: asset_id,
            sequence,
        };
        client
            .post(&format!("products/{}/assets", self.id), &body)
            .await?;
        Ok(())
    }

    /// Detach an asset from this product.
    #[tracing::instrument(skip(client))]
    pub async fn remove_asset(&self, client: &FugaClient, asset_id: u64) -> Result<()> {
        client
            .delete(&format!("products/{}/assets/{}", self.id, asset_id))
            .await?;
        Ok(())
    }

    /// Move an asset already on this product to a new sequence position.
    #[tracing::instrument(skip(client))]
    pub async fn set_asset_sequence(
        &self,
        client: &FugaClient,
        asset_id: u64,
        sequence: u32,
    ) -> Result<()> {
        client
            .put(
                &format!("products/{}/assets/{}/position/{}", self.id, asset_id, sequence),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    /// Reconcile the product's tracklist against a desired state.
    ///
    /// Assets missing from the product are attached, assets no longer in
    /// `desired` are detached, and the remainder are moved to their
    /// desired sequence positions.
    #[tracing::instrument(skip(client))]
    pub async fn sync_tracklist(
        &self,
        client: &FugaClient,
        desired: &[TracklistEntry],
    ) -> Result<()> {
        let current = self.assets(client).await?;
        let current_ids: Vec<u64> = current.iter().map(|a| a.id).collect();

        for entry in desired {
            if current_ids.contains(&entry.id) {
                self.set_asset_sequence(client, entry.id, entry.sequence)
                    .await?;
                tracing::debug!(asset = entry.id, sequence = entry.sequence, "reordered");
            } else {
                self.add_asset(client, entry.id, entry.sequence).await?;
                tracing::debug!(asset = entry.id, sequence = entry.sequence, "added");
            }
        }

        for id in current_ids {
            if !desired.iter().any(|e| e.id == id) {
                self.remove_asset(client, id).await?;
                tracing::debug!(asset = id, "removed");
            }
        }

        Ok(())
    }
}

/// One position in a product tracklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracklistEntry {
    /// The asset ID.
    pub id: u64,
    /// 1-based position on the release.
    pub sequence: u32,
}

/// Query parameters for listing products.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductListQuery {
    /// Filter by release name (partial match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for creating a product.
///
/// Only `name` is required; FUGA fills defaults for the rest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductCreateParams {
    /// Release title.
    pub name: String,

    /// Owning label ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<u64>,

    /// UPC/EAN barcode, if already assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// Release format (e.g. "ALBUM", "SINGLE").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_format_type: Option<String>,

    /// Street date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_release_date: Option<NaiveDate>,

    /// Catalog number within the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,

    /// Artist name as displayed in stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_artist: Option<String>,

    /// Metadata language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Parameters for updating a product.
///
/// Unset fields are omitted from the request body, leaving the remote
/// values untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdateParams {
    /// New release title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New UPC/EAN barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// New catalog number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,

    /// New release format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_format_type: Option<String>,

    /// New street date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_release_date: Option<NaiveDate>,

    /// New display artist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_artist: Option<String>,

    /// New metadata language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// New explicit-content flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parental_advisory: Option<bool>,
}

/// API response envelope for listing products.
#[derive(Debug, Deserialize)]
struct ProductListResponse {
    #[serde(default)]
    product: Vec<Product>,
    #[serde(default)]
    total: Option<u64>,
}

/// API response envelope for a product's tracklist.
#[derive(Debug, Deserialize)]
struct ProductAssetsResponse {
    #[serde(default)]
    asset: Vec<Asset>,
}

#[async_trait]
impl Get for Product {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &FugaClient, id: u64) -> Result<Self> {
        let response = client.get(&format!("products/{id}")).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl List for Product {
    type Query = ProductListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &FugaClient,
        query: &Self::Query,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Self>> {
        #[derive(Serialize)]
        struct RequestParams<'a> {
            #[serde(flatten)]
            query: &'a ProductListQuery,
            page: u32,
            page_size: u32,
        }

        let params = RequestParams {
            query,
            page,
            page_size,
        };

        let response = client.get_with_query("products", &params).await?;
        let data: ProductListResponse = FugaClient::parse_json(response).await?;

        Ok(Page::new(data.product, page, page_size, data.total))
    }
}

#[async_trait]
impl Create for Product {
    type Params = ProductCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FugaClient, params: Self::Params) -> Result<Self> {
        let response = client.post("products", &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Update for Product {
    type Id = u64;
    type Params = ProductUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &FugaClient, id: u64, params: Self::Params) -> Result<Self> {
        let response = client.put(&format!("products/{id}"), &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Delete for Product {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &FugaClient, id: u64) -> Result<()> {
        client.delete(&format!("products/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_skip_unset_fields() {
        let params = ProductUpdateParams {
            name: Some("Updated Album Name".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "Updated Album Name" })
        );
    }

    #[test]
    fn test_product_deserializes_minimal_response() {
        let product: Product = serde_json::from_str(
            r#"{ "id": 1002645007453, "name": "New Album" }"#,
        )
        .unwrap();
        assert_eq!(product.id, 1002645007453);
        assert_eq!(product.name, "New Album");
        assert!(product.upc.is_none());
        assert!(!product.parental_advisory);
    }

    #[test]
    fn test_is_published() {
        let mut product: Product =
            serde_json::from_str(r#"{ "id": 1, "name": "A" }"#).unwrap();
        assert!(!product.is_published());
        product.state = Some("PUBLISHED".to_string());
        assert!(product.is_published());
        product.state = Some("DELIVERED".to_string());
        assert!(product.is_published());
    }
}
