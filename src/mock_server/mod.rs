//! Mock FUGA API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the FUGA
//! catalog API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server maintains state across
//! requests, enabling realistic workflow testing: log in once, create a
//! product, attach assets, publish, and so on.
//!
//! # Example
//!
//! ```ignore
//! use fugapi::mock_server::{MockServer, TEST_PASSWORD, TEST_USERNAME};
//! use fugapi::{FugaClient, Get, Product};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = FugaClient::new(server.url(), TEST_USERNAME, TEST_PASSWORD).unwrap();
//!     client.login().await.unwrap();
//!
//!     // Server comes with default fixtures
//!     let product = Product::get(&client, 1000).await.unwrap();
//!     assert_eq!(product.name, "Test Album");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, TEST_PASSWORD, TEST_USERNAME};
pub use server::MockServer;
pub use state::MockState;
