//! Label model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FugaClient;
use crate::error::Result;
use crate::pagination::Page;
use crate::traits::{Create, Delete, Get, List, Update};

/// A FUGA label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// The FUGA-assigned label ID.
    pub id: u64,

    /// Label name.
    pub name: String,

    /// Caller-supplied identifier from an external system.
    #[serde(default)]
    pub proprietary_id: Option<String>,

    /// Owning organization ID.
    #[serde(default)]
    pub organization_id: Option<u64>,

    /// When the label was created in FUGA.
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

/// Query parameters for listing labels.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelListQuery {
    /// Filter by label name (partial match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for creating a label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelCreateParams {
    /// Label name.
    pub name: String,

    /// Caller-supplied identifier from an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietary_id: Option<String>,

    /// Owning organization ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<u64>,
}

/// Parameters for updating a label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelUpdateParams {
    /// New label name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New proprietary identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietary_id: Option<String>,
}

/// API response envelope for listing labels.
#[derive(Debug, Deserialize)]
struct LabelListResponse {
    #[serde(default)]
    label: Vec<Label>,
    #[serde(default)]
    total: Option<u64>,
}

#[async_trait]
impl Get for Label {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &FugaClient, id: u64) -> Result<Self> {
        let response = client.get(&format!("labels/{id}")).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl List for Label {
    type Query = LabelListQuery;

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
            query: &'a LabelListQuery,
            page: u32,
            page_size: u32,
        }

        let params = RequestParams {
            query,
            page,
            page_size,
        };

        let response = client.get_with_query("labels", &params).await?;
        let data: LabelListResponse = FugaClient::parse_json(response).await?;

        Ok(Page::new(data.label, page, page_size, data.total))
    }
}

#[async_trait]
impl Create for Label {
    type Params = LabelCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FugaClient, params: Self::Params) -> Result<Self> {
        let response = client.post("labels", &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Update for Label {
    type Id = u64;
    type Params = LabelUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &FugaClient, id: u64, params: Self::Params) -> Result<Self> {
        let response = client.put(&format!("labels/{id}"), &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Delete for Label {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &FugaClient, id: u64) -> Result<()> {
        client.delete(&format!("labels/{id}")).await?;
        Ok(())
    }
}
