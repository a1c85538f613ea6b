//! Person model and trait implementations.
//!
//! People are credited on assets as contributors; list responses come
//! back from `/people` under the singular `person` key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FugaClient;
use crate::error::Result;
use crate::pagination::Page;
use crate::traits::{Create, Delete, Get, List, Update};

/// A FUGA person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// The FUGA-assigned person ID.
    pub id: u64,

    /// Person name.
    pub name: String,

    /// When the person was created in FUGA.
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

/// Query parameters for listing people.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonListQuery {
    /// Filter by name (partial match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for creating a person.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonCreateParams {
    /// Person name.
    pub name: String,
}

/// Parameters for updating a person.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonUpdateParams {
    /// New person name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// API response envelope for listing people.
#[derive(Debug, Deserialize)]
struct PersonListResponse {
    #[serde(default)]
    person: Vec<Person>,
    #[serde(default)]
    total: Option<u64>,
}

#[async_trait]
impl Get for Person {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &FugaClient, id: u64) -> Result<Self> {
        let response = client.get(&format!("people/{id}")).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl List for Person {
    type Query = PersonListQuery;

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
            query: &'a PersonListQuery,
            page: u32,
            page_size: u32,
        }

        let params = RequestParams {
            query,
            page,
            page_size,
        };

        let response = client.get_with_query("people", &params).await?;
        let data: PersonListResponse = FugaClient::parse_json(response).await?;

        Ok(Page::new(data.person, page, page_size, data.total))
    }
}

#[async_trait]
impl Create for Person {
    type Params = PersonCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FugaClient, params: Self::Params) -> Result<Self> {
        let response = client.post("people", &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Update for Person {
    type Id = u64;
    type Params = PersonUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &FugaClient, id: u64, params: Self::Params) -> Result<Self> {
        let response = client.put(&format!("people/{id}"), &params).await?;
        FugaClient::parse_json(response).await
    }
}

#[async_trait]
impl Delete for Person {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &FugaClient, id: u64) -> Result<()> {
        client.delete(&format!("people/{id}")).await?;
        Ok(())
    }
}
