//! Asset model and trait implementations.
//!
//! An asset is a track or video in the FUGA catalog. Assets exist
//! independently of products and are attached to a product's tracklist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FugaClient;
use crate::error::Result;
use crate::models::common::ResourceRef;
use crate::pagination::Page;
use crate::traits::{Create, Delete, Get, List, Update};

/// A FUGA asset (track or video).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// The FUGA-assigned asset ID.
    pub id: u64,

    /// Track title.
    pub name: String,

    /// Asset kind (e.g. "TRACK", "VIDEO").
    #[serde(rename = "type", default)]
    pub asset_type: Option<String>,

    /// ISRC code.
    #[serde(default)]
    pub isrc: Option<String>,

    /// Duration in seconds, once audio has been attached.
    #[serde(default)]
    pub duration: Option<u32>,

    /// Artist name as displayed in stores.
    #[serde(default)]
    pub display_artist: Option<String>,

    /// Metadata language code.
    #[serde(default)]
    pub language: Option<String>,

    /// Locale of the recorded audio.
    #[serde(default)]
    pub audio_locale: Option<String>,

    /// Explicit-content flag.
    #[serde(default)]
    pub parental_advisory: bool,

    /// Position on a product tracklist; only present when the asset is
    /// returned through a product's assets endpoint.
    #[serde(default)]
    pub sequence: Option<u32>,

    /// When the asset was created in FUGA.
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    /// When the asset was last modified.
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

impl Asset {
    /// Whether this asset is a video.
    pub fn is_video(&self) -> bool {
        self.asset_type.as_deref() == Some("VIDEO")
    }

    /// Fetch the contributors (credits) on this asset.
    #[tracing::instrument(skip(client))]
    pub async fn contributors(&self, client: &FugaClient) -> Result<Vec<Contributor>> {
        let response = client
            .get(&format!("assets/{}/contributors", self.id))
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Credit a person on this asset with the given role
    /// (e.g. "ENGINEER", "PRODUCER").
    #[tracing::instrument(skip(client))]
    pub async fn add_contributor(
        &self,
        client: &FugaClient,
        person_id: u64,
        role: &str,
    ) -> Result<Contributor> {
        let body = serde_json::json!({ "person": person_id, "role": role });
        let response = client
            .post(&format!("assets/{}/contributors", self.id), &body)
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Remove a single contributor credit from this asset.
    #[tracing::instrument(skip(client))]
    pub async fn remove_contributor(
        &self,
        client: &FugaClient,
        contributor_id: u64,
    ) -> Result<()> {
        client
            .delete(&format!("assets/{}/contributors/{}", self.id, contributor_id))
            .await?;
        Ok(())
    }

    /// Remove every contributor credit from this asset.
    #[tracing::instrument(skip(client))]
    pub async fn clear_contributors(&self, client: &FugaClient) -> Result<()> {
        let contributors = self.contributors(client).await?;
        for contributor in contributors {
            self.remove_contributor(client, contributor.id).await?;
        }
        Ok(())
    }
}

/// A contributor credit on an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    /// The credit's own ID (not the person's).
    pub id: u64,
    /// The credited person.
    pub person: ResourceRef,
    /// Credit role (e.g. "ENGINEER", "PRODUCER", "DJ").
    pub role: String,
}

/// Query parameters for listing assets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetListQuery {
    /// Filter by track name (partial match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for creating an asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetCreateParams {
    /// Track title.
    pub name: String,

    /// Asset kind (e.g. "TRACK", "VIDEO"); FUGA defaults to "TRACK".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    /// ISRC code, if already assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,

    /// Artist name as displayed in stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_artist: Option<String>,

    /// Metadata language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Parameters for updating an asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetUpdateParams {
    /// New track title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New ISRC code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,

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

/// API response envelope for listing assets.
#[derive(Debug, Deserialize)]
struct AssetListResponse {
    #[serde(default)]
    asset: Vec<Asset>,
    #[serde(default)]
    total: Option<u64>,
}

#[async_trait]
impl Get for Asset {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &FugaClient, id: u64) -> Result<Self> {
        let response = client.get(&format!("assets/{id}")).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl List for Asset {
    type Query = AssetListQuery;

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
            query: &'a AssetListQuery,
            page: u32,
            page_size: u32,
        }

        let params = RequestParams {
            query,
            page,
            page_size,
        };

        let response = client.get_with_query("assets", &params).await?;
        let data: AssetListResponse = FugaClient::parse_json(response).await?;

        Ok(Page::new(data.asset, page, page_size, data.total))
    }
}

#[async_trait]
impl Create for Asset {
    type Params = AssetCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FugaClient, params: Self::Params) -> Result<Self> {
        let response = client.post("assets", &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Update for Asset {
    type Id = u64;
    type Params = AssetUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &FugaClient, id: u64, params: Self::Params) -> Result<Self> {
        let response = client.put(&format!("assets/{id}"), &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Delete for Asset {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &FugaClient, id: u64) -> Result<()> {
        client.delete(&format!("assets/{id}")).await?;
        Ok(())
    }
}
