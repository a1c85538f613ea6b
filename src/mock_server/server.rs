//! Mock FUGA API server.
//!
//! Provides an axum-based HTTP server that simulates the FUGA catalog API,
//! including the cookie-based `/login` flow.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock FUGA API server for testing.
///
/// The server runs in the background and can be used to test the FUGA client
/// against a realistic API implementation, including session handling.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL. The default scenario accepts
    /// [`TEST_USERNAME`](super::TEST_USERNAME)/[`TEST_PASSWORD`](super::TEST_PASSWORD)
    /// at `/login`.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available. Note
    /// that an empty state has no login accounts, so register one with
    /// [`MockState::with_account`] before calling `login`.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `FugaClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for (username, password) in scenario.accounts {
            state.accounts.insert(username, password);
        }

        for product in scenario.products {
            state.products.insert(product.id, product);
        }

        for asset in scenario.assets {
            state.assets.insert(asset.id, asset);
        }

        for artist in scenario.artists {
            state.artists.insert(artist.id, artist);
        }

        for label in scenario.labels {
            state.labels.insert(label.id, label);
        }

        for person in scenario.people {
            state.people.insert(person.id, person);
        }

        for (product_id, entries) in scenario.tracklists {
            state.tracklists.insert(product_id, entries);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Authentication
            .route("/login", post(handlers::login))
            // Product routes
            .route("/products", get(handlers::list_products))
            .route("/products", post(handlers::create_product))
            .route("/products/:id", get(handlers::get_product))
            .route("/products/:id", put(handlers::update_product))
            .route("/products/:id", delete(handlers::delete_product))
            .route("/products/:id/publish", post(handlers::publish_product))
            .route("/products/:id/barcode", post(handlers::assign_barcode))
            .route("/products/:id/territories", put(handlers::update_territories))
            .route("/products/:id/assets", get(handlers::list_product_assets))
            .route("/products/:id/assets", post(handlers::add_product_asset))
            .route(
                "/products/:id/assets/:asset_id",
                delete(handlers::remove_product_asset),
            )
            .route(
                "/products/:id/assets/:asset_id/position/:sequence",
                put(handlers::set_product_asset_position),
            )
            // Asset routes
            .route("/assets", get(handlers::list_assets))
            .route("/assets", post(handlers::create_asset))
            .route("/assets/:id", get(handlers::get_asset))
            .route("/assets/:id", put(handlers::update_asset))
            .route("/assets/:id", delete(handlers::delete_asset))
            .route("/assets/:id/contributors", get(handlers::list_contributors))
            .route("/assets/:id/contributors", post(handlers::add_contributor))
            .route(
                "/assets/:id/contributors/:contributor_id",
                delete(handlers::remove_contributor),
            )
            // Artist routes
            .route("/artists", get(handlers::list_artists))
            .route("/artists", post(handlers::create_artist))
            .route("/artists/:id", get(handlers::get_artist))
            .route("/artists/:id", put(handlers::update_artist))
            .route("/artists/:id", delete(handlers::delete_artist))
            .route("/artists/:id/identifier", get(handlers::list_identifiers))
            .route("/artists/:id/identifier", post(handlers::create_identifier))
            .route(
                "/artists/:id/identifier/:identifier_id",
                get(handlers::get_identifier),
            )
            .route(
                "/artists/:id/identifier/:identifier_id",
                put(handlers::update_identifier),
            )
            .route(
                "/artists/:id/identifier/:identifier_id",
                delete(handlers::delete_identifier),
            )
            // Label routes
            .route("/labels", get(handlers::list_labels))
            .route("/labels", post(handlers::create_label))
            .route("/labels/:id", get(handlers::get_label))
            .route("/labels/:id", put(handlers::update_label))
            .route("/labels/:id", delete(handlers::delete_label))
            // Person routes
            .route("/people", get(handlers::list_people))
            .route("/people", post(handlers::create_person))
            .route("/people/:id", get(handlers::get_person))
            .route("/people/:id", put(handlers::update_person))
            .route("/people/:id", delete(handlers::delete_person))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::{TEST_PASSWORD, TEST_USERNAME};
    use crate::{FugaClient, Get, List, Product};

    async fn logged_in_client(server: &MockServer) -> FugaClient {
        let client = FugaClient::new(server.url(), TEST_USERNAME, TEST_PASSWORD)
            .expect("Failed to create client");
        client.login().await.expect("Failed to log in");
        client
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_product_with_fuga_client() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        let product = Product::get(&client, 1000)
            .await
            .expect("Failed to get product");

        assert_eq!(product.name, "Test Album");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_list_products_with_fuga_client() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        let page = Product::list_page(&client, &Default::default(), 0, 20)
            .await
            .expect("Failed to list products");

        assert!(!page.items.is_empty());
        assert_eq!(page.items[0].name, "Test Album");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_request_without_login_is_unauthenticated() {
        let server = MockServer::start().await;
        let client = FugaClient::new(server.url(), TEST_USERNAME, TEST_PASSWORD)
            .expect("Failed to create client");

        let result = Product::get(&client, 1000).await;
        assert!(result.is_err());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let state = MockState::new().with_account(TEST_USERNAME, TEST_PASSWORD);
        let server = MockServer::with_state(state).await;
        let client = logged_in_client(&server).await;

        let result = Product::get(&client, 99999).await;

        assert!(result.is_err());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state() {
        let state = MockState::new()
            .with_account(TEST_USERNAME, TEST_PASSWORD)
            .with_product(Fixtures::minimal_product(42, "My Custom Album"));

        let server = MockServer::with_state(state).await;
        let client = logged_in_client(&server).await;

        let product = Product::get(&client, 42)
            .await
            .expect("Failed to get product");

        assert_eq!(product.name, "My Custom Album");

        server.shutdown().await;
    }
}
