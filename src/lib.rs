//! FUGA Catalog API client library.
//!
//! A Rust library for interacting with the FUGA Catalog REST API using a
//! trait-based architecture where each operation (Get, List, Create,
//! Update, Delete) is defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use fugapi::{FugaClient, Product, ProductCreateParams, Create, Get, List};
//!
//! #[tokio::main]
//! async fn main() -> fugapi::Result<()> {
//!     // Create client from environment variables and log in
//!     let client = FugaClient::from_env()?;
//!     client.login().await?;
//!
//!     // Create a product
//!     let product = Product::create(
//!         &client,
//!         ProductCreateParams {
//!             name: "New Album".to_string(),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!     println!("Created product {}", product.id);
//!
//!     // Fetch it back
//!     let product = Product::get(&client, product.id).await?;
//!     println!("Product: {}", product.name);
//!
//!     // List the first page of products
//!     let page = Product::list_page(&client, &Default::default(), 0, 10).await?;
//!     println!("Found {} products", page.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around five operation traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch paginated collections of entities
//! - [`Create`] - Register a new entity
//! - [`Update`] - Modify an existing entity
//! - [`Delete`] - Remove an entity
//!
//! Each entity type ([`Product`], [`Asset`], [`Artist`], [`Label`],
//! [`Person`]) implements the traits supported by its endpoints, plus
//! inherent methods for subresources (tracklists, contributors, DSP
//! identifiers).
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `FUGA_USERNAME` (required) - FUGA account username
//! - `FUGA_PASSWORD` (required) - FUGA account password
//! - `FUGA_API_URL` (optional) - Base URL (defaults to
//!   `https://next.fuga.com/api/v2`)
//!
//! All requests require a prior [`FugaClient::login`]; calls made without
//! a session fail with [`FugaError::NotAuthenticated`].

mod client;
mod error;
mod models;
mod pagination;
mod traits;

pub mod cli;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::FugaClient;
pub use error::{FugaError, Result};
pub use pagination::{Page, PaginationParams};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    // Shared types
    ResourceRef,
    // Product types
    Product,
    ProductCreateParams,
    ProductListQuery,
    ProductUpdateParams,
    TracklistEntry,
    // Asset types
    Asset,
    AssetCreateParams,
    AssetListQuery,
    AssetUpdateParams,
    Contributor,
    // Artist types
    Artist,
    ArtistCreateParams,
    ArtistIdentifier,
    ArtistIdentifierParams,
    ArtistListQuery,
    ArtistUpdateParams,
    // Label types
    Label,
    LabelCreateParams,
    LabelListQuery,
    LabelUpdateParams,
    // Person types
    Person,
    PersonCreateParams,
    PersonListQuery,
    PersonUpdateParams,
};
