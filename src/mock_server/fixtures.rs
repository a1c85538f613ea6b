//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Artist, Asset, Label, Person, Product, ResourceRef, TracklistEntry};

/// Username accepted by the default scenario's `/login`.
pub const TEST_USERNAME: &str = "test-user";
/// Password accepted by the default scenario's `/login`.
pub const TEST_PASSWORD: &str = "test-pass";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a minimal product with required fields only.
    pub fn minimal_product(id: u64, name: &str) -> Product {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name }))
            .expect("minimal product fixture")
    }

    /// Create a pending product owned by a label.
    pub fn pending_product(id: u64, name: &str, label: &Label) -> Product {
        let mut product = Self::minimal_product(id, name);
        product.state = Some("PENDING".to_string());
        product.label = Some(ResourceRef {
            id: label.id,
            name: Some(label.name.clone()),
        });
        product
    }

    /// Create a minimal asset.
    pub fn minimal_asset(id: u64, name: &str) -> Asset {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name, "type": "TRACK" }))
            .expect("minimal asset fixture")
    }

    /// Create a minimal artist.
    pub fn minimal_artist(id: u64, name: &str) -> Artist {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name }))
            .expect("minimal artist fixture")
    }

    /// Create a minimal label.
    pub fn minimal_label(id: u64, name: &str) -> Label {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name }))
            .expect("minimal label fixture")
    }

    /// Create a minimal person.
    pub fn minimal_person(id: u64, name: &str) -> Person {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name }))
            .expect("minimal person fixture")
    }

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub accounts: Vec<(String, String)>,
    pub products: Vec<Product>,
    pub assets: Vec<Asset>,
    pub artists: Vec<Artist>,
    pub labels: Vec<Label>,
    pub people: Vec<Person>,
    pub tracklists: Vec<(u64, Vec<TracklistEntry>)>,
}

impl DefaultScenario {
    fn new() -> Self {
        let label = Fixtures::minimal_label(100, "Test Label");
        let product = Fixtures::pending_product(1000, "Test Album", &label);

        let assets = vec![
            Fixtures::minimal_asset(2000, "Track One"),
            Fixtures::minimal_asset(2001, "Track Two"),
        ];

        let tracklists = vec![(
            product.id,
            vec![
                TracklistEntry { id: 2000, sequence: 1 },
                TracklistEntry { id: 2001, sequence: 2 },
            ],
        )];

        Self {
            accounts: vec![(TEST_USERNAME.to_string(), TEST_PASSWORD.to_string())],
            products: vec![product],
            assets,
            artists: vec![Fixtures::minimal_artist(200, "Test Artist")],
            labels: vec![label],
            people: vec![Fixtures::minimal_person(300, "Test Person")],
            tracklists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_product() {
        let product = Fixtures::minimal_product(1, "Test Album");
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Test Album");
        assert!(product.state.is_none());
    }

    #[test]
    fn test_pending_product_carries_label() {
        let label = Fixtures::minimal_label(5, "Some Label");
        let product = Fixtures::pending_product(1, "Test Album", &label);
        assert_eq!(product.state.as_deref(), Some("PENDING"));
        assert_eq!(product.label.as_ref().unwrap().id, 5);
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert!(!scenario.accounts.is_empty());
        assert!(!scenario.products.is_empty());
        assert!(!scenario.assets.is_empty());
        assert!(!scenario.tracklists.is_empty());
    }
}
