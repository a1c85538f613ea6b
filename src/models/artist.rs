//! Artist model and trait implementations.
//!
//! Besides plain CRUD, artists carry DSP identifiers (Apple Music ID,
//! Spotify URI, ...) managed through the `/identifier` subresource.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FugaClient;
use crate::error::Result;
use crate::models::common::ResourceRef;
use crate::pagination::Page;
use crate::traits::{Create, Delete, Get, List, Update};

/// A FUGA artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// The FUGA-assigned artist ID.
    pub id: u64,

    /// Artist name.
    pub name: String,

    /// Caller-supplied identifier from an external system.
    #[serde(default)]
    pub proprietary_id: Option<String>,

    /// Owning organization ID.
    #[serde(default)]
    pub organization_id: Option<u64>,

    /// When the artist was created in FUGA.
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

impl Artist {
    /// Fetch all DSP identifiers attached to this artist.
    #[tracing::instrument(skip(client))]
    pub async fn identifiers(&self, client: &FugaClient) -> Result<Vec<ArtistIdentifier>> {
        let response = client
            .get(&format!("artists/{}/identifier", self.id))
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Fetch a single DSP identifier.
    #[tracing::instrument(skip(client))]
    pub async fn identifier(
        &self,
        client: &FugaClient,
        identifier_id: u64,
    ) -> Result<ArtistIdentifier> {
        let response = client
            .get(&format!("artists/{}/identifier/{}", self.id, identifier_id))
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Attach a DSP identifier to this artist.
    #[tracing::instrument(skip(client, params))]
    pub async fn create_identifier(
        &self,
        client: &FugaClient,
        params: ArtistIdentifierParams,
    ) -> Result<ArtistIdentifier> {
        let response = client
            .post(&format!("artists/{}/identifier", self.id), &params)
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Update an identifier, e.g. to fill in the DSP-assigned value once
    /// the platform has created the artist page.
    #[tracing::instrument(skip(client, params))]
    pub async fn update_identifier(
        &self,
        client: &FugaClient,
        identifier_id: u64,
        params: ArtistIdentifierParams,
    ) -> Result<ArtistIdentifier> {
        let response = client
            .put(
                &format!("artists/{}/identifier/{}", self.id, identifier_id),
                &params,
            )
            .await?;
        FugaClient::parse_json(response).await
    }

    /// Detach a DSP identifier from this artist.
    #[tracing::instrument(skip(client))]
    pub async fn delete_identifier(&self, client: &FugaClient, identifier_id: u64) -> Result<()> {
        client
            .delete(&format!("artists/{}/identifier/{}", self.id, identifier_id))
            .await?;
        Ok(())
    }
}

/// A DSP identifier attached to an artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistIdentifier {
    /// The identifier record's own ID.
    pub id: u64,

    /// The DSP that issued the identifier (e.g. Apple Music).
    #[serde(rename = "issuingOrganization")]
    pub issuing_organization: ResourceRef,

    /// The DSP's identifier value; `None` while the DSP is still creating
    /// a page for a new artist.
    #[serde(default)]
    pub identifier: Option<String>,

    /// Whether the artist should be created fresh at the issuing DSP.
    #[serde(rename = "newForIssuingOrg", default)]
    pub new_for_issuing_org: bool,
}

/// Parameters for creating or updating an artist identifier.
///
/// The endpoint uses camelCase keys, unlike the rest of the catalog API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtistIdentifierParams {
    /// The issuing DSP's FUGA organization ID.
    #[serde(rename = "issuingOrganization", skip_serializing_if = "Option::is_none")]
    pub issuing_organization: Option<u64>,

    /// The DSP's identifier value. Serialized even when `None`, since the
    /// API accepts an explicit null for to-be-created artists.
    pub identifier: Option<String>,

    /// Whether the artist should be created fresh at the issuing DSP.
    #[serde(rename = "newForIssuingOrg", skip_serializing_if = "Option::is_none")]
    pub new_for_issuing_org: Option<bool>,
}

/// Query parameters for listing artists.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtistListQuery {
    /// Filter by artist name (partial match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for creating an artist.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtistCreateParams {
    /// Artist name.
    pub name: String,

    /// Caller-supplied identifier from an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietary_id: Option<String>,

    /// Owning organization ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<u64>,
}

/// Parameters for updating an artist.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtistUpdateParams {
    /// New artist name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New proprietary identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietary_id: Option<String>,
}

/// API response envelope for listing artists.
#[derive(Debug, Deserialize)]
struct ArtistListResponse {
    #[serde(default)]
    artist: Vec<Artist>,
    #[serde(default)]
    total: Option<u64>,
}

#[async_trait]
impl Get for Artist {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &FugaClient, id: u64) -> Result<Self> {
        let response = client.get(&format!("artists/{id}")).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl List for Artist {
    type Query = ArtistListQuery;

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
            query: &'a ArtistListQuery,
            page: u32,
            page_size: u32,
        }

        let params = RequestParams {
            query,
            page,
            page_size,
        };

        let response = client.get_with_query("artists", &params).await?;
        let data: ArtistListResponse = FugaClient::parse_json(response).await?;

        Ok(Page::new(data.artist, page, page_size, data.total))
    }
}

#[async_trait]
impl Create for Artist {
    type Params = ArtistCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FugaClient, params: Self::Params) -> Result<Self> {
        let response = client.post("artists", &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Update for Artist {
    type Id = u64;
    type Params = ArtistUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &FugaClient, id: u64, params: Self::Params) -> Result<Self> {
        let response = client.put(&format!("artists/{id}"), &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Delete for Artist {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &FugaClient, id: u64) -> Result<()> {
        client.delete(&format!("artists/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_params_keep_explicit_null() {
        let params = ArtistIdentifierParams {
            issuing_organization: Some(1330598),
            identifier: None,
            new_for_issuing_org: Some(true),
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "issuingOrganization": 1330598,
                "identifier": null,
                "newForIssuingOrg": true
            })
        );
    }

    #[test]
    fn test_identifier_deserializes_camel_case() {
        let identifier: ArtistIdentifier = serde_json::from_str(
            r#"{
                "id": 5,
                "issuingOrganization": { "id": 1330598, "name": "Apple Music" },
                "identifier": "412778295",
                "newForIssuingOrg": false
            }"#,
        )
        .unwrap();
        assert_eq!(identifier.issuing_organization.id, 1330598);
        assert_eq!(identifier.identifier.as_deref(), Some("412778295"));
        assert!(!identifier.new_for_issuing_org);
    }
}
