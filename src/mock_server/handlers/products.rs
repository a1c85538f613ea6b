//! Product endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::auth::check_session;
use super::{not_found, paginate, ListQuery};
use crate::mock_server::state::MockState;
use crate::{Product, ResourceRef, TracklistEntry};

/// Body for `POST /products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductBody {
    pub name: String,
    pub label: Option<u64>,
    pub upc: Option<String>,
    pub release_format_type: Option<String>,
    pub consumer_release_date: Option<NaiveDate>,
    pub catalog_number: Option<String>,
    pub display_artist: Option<String>,
    pub language: Option<String>,
}

/// Body for `PUT /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub upc: Option<String>,
    pub catalog_number: Option<String>,
    pub release_format_type: Option<String>,
    pub consumer_release_date: Option<NaiveDate>,
    pub display_artist: Option<String>,
    pub language: Option<String>,
    pub parental_advisory: Option<bool>,
}

/// GET /products
pub async fn list_products(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let all = state.list_products(query.name.as_deref());
    let (items, total) = paginate(all, query.page(), query.page_size());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "product": items, "total": total })),
    )
        .into_response()
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    match state.products.get(&id) {
        Some(product) => (StatusCode::OK, Json(product.clone())).into_response(),
        None => not_found("product", id),
    }
}

/// POST /products
pub async fn create_product(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CreateProductBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let id = state.allocate_id();
    let label = body.label.map(|label_id| ResourceRef {
        id: label_id,
        name: state.labels.get(&label_id).map(|l| l.name.clone()),
    });

    let mut product: Product =
        serde_json::from_value(serde_json::json!({ "id": id, "name": body.name }))
            .expect("product from create body");
    product.state = Some("PENDING".to_string());
    product.label = label;
    product.upc = body.upc;
    product.release_format_type = body.release_format_type;
    product.consumer_release_date = body.consumer_release_date;
    product.catalog_number = body.catalog_number;
    product.display_artist = body.display_artist;
    product.language = body.language;
    product.created_date = Some(chrono::Utc::now());

    state.products.insert(id, product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<UpdateProductBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(product) = state.products.get_mut(&id) else {
        return not_found("product", id);
    };

    if let Some(name) = body.name {
        product.name = name;
    }
    if let Some(upc) = body.upc {
        product.upc = Some(upc);
    }
    if let Some(catalog_number) = body.catalog_number {
        product.catalog_number = Some(catalog_number);
    }
    if let Some(format) = body.release_format_type {
        product.release_format_type = Some(format);
    }
    if let Some(date) = body.consumer_release_date {
        product.consumer_release_date = Some(date);
    }
    if let Some(artist) = body.display_artist {
        product.display_artist = Some(artist);
    }
    if let Some(language) = body.language {
        product.language = Some(language);
    }
    if let Some(advisory) = body.parental_advisory {
        product.parental_advisory = advisory;
    }
    product.modified_date = Some(chrono::Utc::now());

    (StatusCode::OK, Json(product.clone())).into_response()
}

/// DELETE /products/{id}
///
/// FUGA delete endpoints answer with plain text, not JSON.
pub async fn delete_product(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if state.products.remove(&id).is_none() {
        return not_found("product", id);
    }
    state.tracklists.remove(&id);

    (StatusCode::OK, "product deleted").into_response()
}

/// POST /products/{id}/publish
pub async fn publish_product(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(product) = state.products.get_mut(&id) else {
        return not_found("product", id);
    };

    product.state = Some("PUBLISHED".to_string());
    (StatusCode::OK, Json(product.clone())).into_response()
}

/// POST /products/{id}/barcode
pub async fn assign_barcode(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(product) = state.products.get_mut(&id) else {
        return not_found("product", id);
    };

    if product.upc.is_none() {
        product.upc = Some(format!("{:013}", 600_000_000_000u64 + id));
    }
    (StatusCode::OK, Json(product.clone())).into_response()
}

/// PUT /products/{id}/territories
pub async fn update_territories(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(territories): Json<Vec<String>>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.products.contains_key(&id) {
        return not_found("product", id);
    }

    (StatusCode::OK, Json(territories)).into_response()
}

/// GET /products/{id}/assets
pub async fn list_product_assets(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.products.contains_key(&id) {
        return not_found("product", id);
    }

    let assets = state.tracklist_assets(id);
    (
        StatusCode::OK,
        Json(serde_json::json!({ "asset": assets, "total": assets.len() })),
    )
        .into_response()
}

/// POST /products/{id}/assets
pub async fn add_product_asset(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(entry): Json<TracklistEntry>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.products.contains_key(&id) {
        return not_found("product", id);
    }
    if !state.assets.contains_key(&entry.id) {
        return not_found("asset", entry.id);
    }

    let tracklist = state.tracklists.entry(id).or_default();
    tracklist.retain(|e| e.id != entry.id);
    tracklist.push(entry);

    (StatusCode::OK, Json(entry)).into_response()
}

/// DELETE /products/{id}/assets/{asset_id}
pub async fn remove_product_asset(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((id, asset_id)): Path<(u64, u64)>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(tracklist) = state.tracklists.get_mut(&id) else {
        return not_found("product", id);
    };

    let before = tracklist.len();
    tracklist.retain(|e| e.id != asset_id);
    if tracklist.len() == before {
        return not_found("asset", asset_id);
    }

    (StatusCode::OK, "asset removed").into_response()
}

/// PUT /products/{id}/assets/{asset_id}/position/{sequence}
pub async fn set_product_asset_position(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((id, asset_id, sequence)): Path<(u64, u64, u32)>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(tracklist) = state.tracklists.get_mut(&id) else {
        return not_found("product", id);
    };

    let Some(entry) = tracklist.iter_mut().find(|e| e.id == asset_id) else {
        return not_found("asset", asset_id);
    };
    entry.sequence = sequence;
    let entry = *entry;

    (StatusCode::OK, Json(entry)).into_response()
}
