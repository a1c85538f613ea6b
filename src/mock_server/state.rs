//! Mock server state management.
//!
//! Provides the in-memory data store for the mock FUGA API server.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Artist, ArtistIdentifier, Asset, Contributor, Label, Person, Product, TracklistEntry};

/// First ID handed out for entities created through the mock API.
const FIRST_ALLOCATED_ID: u64 = 10_000;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Login accounts (username -> password).
    pub accounts: HashMap<String, String>,

    /// Active session tokens issued by `/login`.
    pub sessions: HashSet<String>,

    /// Products indexed by ID.
    pub products: HashMap<u64, Product>,

    /// Assets indexed by ID.
    pub assets: HashMap<u64, Asset>,

    /// Artists indexed by ID.
    pub artists: HashMap<u64, Artist>,

    /// Labels indexed by ID.
    pub labels: HashMap<u64, Label>,

    /// People indexed by ID.
    pub people: HashMap<u64, Person>,

    /// Product tracklists (product ID -> ordered entries).
    pub tracklists: HashMap<u64, Vec<TracklistEntry>>,

    /// Asset contributor credits (asset ID -> credits).
    pub contributors: HashMap<u64, Vec<Contributor>>,

    /// Artist DSP identifiers (artist ID -> identifiers).
    pub identifiers: HashMap<u64, Vec<ArtistIdentifier>>,

    /// Counter for server-assigned IDs.
    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            sessions: HashSet::new(),
            products: HashMap::new(),
            assets: HashMap::new(),
            artists: HashMap::new(),
            labels: HashMap::new(),
            people: HashMap::new(),
            tracklists: HashMap::new(),
            contributors: HashMap::new(),
            identifiers: HashMap::new(),
            next_id: FIRST_ALLOCATED_ID,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Hand out a fresh server-assigned ID.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a login account.
    pub fn with_account(mut self, username: &str, password: &str) -> Self {
        self.accounts
            .insert(username.to_string(), password.to_string());
        self
    }

    /// Add a product to the state.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id, product);
        self
    }

    /// Add an asset to the state.
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.insert(asset.id, asset);
        self
    }

    /// Add an artist to the state.
    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.artists.insert(artist.id, artist);
        self
    }

    /// Add a label to the state.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.insert(label.id, label);
        self
    }

    /// Add a person to the state.
    pub fn with_person(mut self, person: Person) -> Self {
        self.people.insert(person.id, person);
        self
    }

    /// Set a product's tracklist.
    pub fn with_tracklist(mut self, product_id: u64, entries: Vec<TracklistEntry>) -> Self {
        self.tracklists.insert(product_id, entries);
        self
    }

    /// Whether the given session token was issued by `/login`.
    pub fn is_valid_session(&self, token: &str) -> bool {
        self.sessions.contains(token)
    }

    /// List products, optionally filtered by name (case-insensitive
    /// substring match). Results are sorted by ID for stable paging.
    pub fn list_products(&self, name_filter: Option<&str>) -> Vec<&Product> {
        let mut items: Vec<&Product> = self
            .products
            .values()
            .filter(|p| matches_name(&p.name, name_filter))
            .collect();
        items.sort_by_key(|p| p.id);
        items
    }

    /// List assets, optionally filtered by name.
    pub fn list_assets(&self, name_filter: Option<&str>) -> Vec<&Asset> {
        let mut items: Vec<&Asset> = self
            .assets
            .values()
            .filter(|a| matches_name(&a.name, name_filter))
            .collect();
        items.sort_by_key(|a| a.id);
        items
    }

    /// List artists, optionally filtered by name.
    pub fn list_artists(&self, name_filter: Option<&str>) -> Vec<&Artist> {
        let mut items: Vec<&Artist> = self
            .artists
            .values()
            .filter(|a| matches_name(&a.name, name_filter))
            .collect();
        items.sort_by_key(|a| a.id);
        items
    }

    /// List labels, optionally filtered by name.
    pub fn list_labels(&self, name_filter: Option<&str>) -> Vec<&Label> {
        let mut items: Vec<&Label> = self
            .labels
            .values()
            .filter(|l| matches_name(&l.name, name_filter))
            .collect();
        items.sort_by_key(|l| l.id);
        items
    }

    /// List people, optionally filtered by name.
    pub fn list_people(&self, name_filter: Option<&str>) -> Vec<&Person> {
        let mut items: Vec<&Person> = self
            .people
            .values()
            .filter(|p| matches_name(&p.name, name_filter))
            .collect();
        items.sort_by_key(|p| p.id);
        items
    }

    /// A product's tracklist as assets with their sequence set, ordered
    /// by sequence.
    pub fn tracklist_assets(&self, product_id: u64) -> Vec<Asset> {
        let mut entries = self
            .tracklists
            .get(&product_id)
            .cloned()
            .unwrap_or_default();
        entries.sort_by_key(|e| e.sequence);

        entries
            .iter()
            .filter_map(|entry| {
                self.assets.get(&entry.id).map(|asset| {
                    let mut asset = asset.clone();
                    asset.sequence = Some(entry.sequence);
                    asset
                })
            })
            .collect()
    }
}

fn matches_name(name: &str, filter: Option<&str>) -> bool {
    filter
        .map(|f| name.to_lowercase().contains(&f.to_lowercase()))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_state_add_and_get_product() {
        let state = MockState::new().with_product(Fixtures::minimal_product(1, "Test Album"));

        let product = state.products.get(&1);
        assert!(product.is_some());
        assert_eq!(product.unwrap().name, "Test Album");
    }

    #[test]
    fn test_state_list_products_with_filter() {
        let state = MockState::new()
            .with_product(Fixtures::minimal_product(1, "Alpha Album"))
            .with_product(Fixtures::minimal_product(2, "Beta Album"))
            .with_product(Fixtures::minimal_product(3, "Gamma Single"));

        let all = state.list_products(None);
        assert_eq!(all.len(), 3);

        let filtered = state.list_products(Some("album"));
        assert_eq!(filtered.len(), 2);

        let exact = state.list_products(Some("gamma"));
        assert_eq!(exact.len(), 1);
    }

    #[test]
    fn test_allocate_id_is_monotonic() {
        let mut state = MockState::new();
        let first = state.allocate_id();
        let second = state.allocate_id();
        assert!(second > first);
    }

    #[test]
    fn test_tracklist_assets_ordered_by_sequence() {
        let state = MockState::new()
            .with_asset(Fixtures::minimal_asset(10, "Track One"))
            .with_asset(Fixtures::minimal_asset(11, "Track Two"))
            .with_tracklist(
                1,
                vec![
                    TracklistEntry { id: 11, sequence: 2 },
                    TracklistEntry { id: 10, sequence: 1 },
                ],
            );

        let assets = state.tracklist_assets(1);
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].id, 10);
        assert_eq!(assets[0].sequence, Some(1));
        assert_eq!(assets[1].id, 11);
    }
}
