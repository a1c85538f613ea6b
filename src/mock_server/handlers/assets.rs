//! Asset endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::auth::check_session;
use super::{not_found, paginate, ListQuery};
use crate::mock_server::state::MockState;
use crate::{Asset, Contributor, ResourceRef};

/// Body for `POST /assets`.
#[derive(Debug, Deserialize)]
pub struct CreateAssetBody {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub isrc: Option<String>,
    pub display_artist: Option<String>,
    pub language: Option<String>,
}

/// Body for `PUT /assets/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateAssetBody {
    pub name: Option<String>,
    pub isrc: Option<String>,
    pub display_artist: Option<String>,
    pub language: Option<String>,
    pub parental_advisory: Option<bool>,
}

/// Body for `POST /assets/{id}/contributors`.
#[derive(Debug, Deserialize)]
pub struct AddContributorBody {
    pub person: u64,
    pub role: String,
}

/// GET /assets
pub async fn list_assets(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let all = state.list_assets(query.name.as_deref());
    let (items, total) = paginate(all, query.page(), query.page_size());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "asset": items, "total": total })),
    )
        .into_response()
}

/// GET /assets/{id}
pub async fn get_asset(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    match state.assets.get(&id) {
        Some(asset) => (StatusCode::OK, Json(asset.clone())).into_response(),
        None => not_found("asset", id),
    }
}

/// POST /assets
pub async fn create_asset(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CreateAssetBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let id = state.allocate_id();
    let asset_type = body.asset_type.unwrap_or_else(|| "TRACK".to_string());

    let mut asset: Asset = serde_json::from_value(serde_json::json!({
        "id": id,
        "name": body.name,
        "type": asset_type
    }))
    .expect("asset from create body");
    asset.isrc = body.isrc;
    asset.display_artist = body.display_artist;
    asset.language = body.language;
    asset.created_date = Some(chrono::Utc::now());

    state.assets.insert(id, asset.clone());
    (StatusCode::CREATED, Json(asset)).into_response()
}

/// PUT /assets/{id}
pub async fn update_asset(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<UpdateAssetBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(asset) = state.assets.get_mut(&id) else {
        return not_found("asset", id);
    };

    if let Some(name) = body.name {
        asset.name = name;
    }
    if let Some(isrc) = body.isrc {
        asset.isrc = Some(isrc);
    }
    if let Some(artist) = body.display_artist {
        asset.display_artist = Some(artist);
    }
    if let Some(language) = body.language {
        asset.language = Some(language);
    }
    if let Some(advisory) = body.parental_advisory {
        asset.parental_advisory = advisory;
    }
    asset.modified_date = Some(chrono::Utc::now());

    (StatusCode::OK, Json(asset.clone())).into_response()
}

/// DELETE /assets/{id}
pub async fn delete_asset(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if state.assets.remove(&id).is_none() {
        return not_found("asset", id);
    }
    state.contributors.remove(&id);
    for tracklist in state.tracklists.values_mut() {
        tracklist.retain(|e| e.id != id);
    }

    (StatusCode::OK, "asset deleted").into_response()
}

/// GET /assets/{id}/contributors
pub async fn list_contributors(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.assets.contains_key(&id) {
        return not_found("asset", id);
    }

    let credits = state.contributors.get(&id).cloned().unwrap_or_default();
    (StatusCode::OK, Json(credits)).into_response()
}

/// POST /assets/{id}/contributors
pub async fn add_contributor(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<AddContributorBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.assets.contains_key(&id) {
        return not_found("asset", id);
    }
    let Some(person) = state.people.get(&body.person) else {
        return not_found("person", body.person);
    };
    let person_ref = ResourceRef {
        id: person.id,
        name: Some(person.name.clone()),
    };

    let credit = Contributor {
        id: state.allocate_id(),
        person: person_ref,
        role: body.role,
    };
    state.contributors.entry(id).or_default().push(credit.clone());

    (StatusCode::CREATED, Json(credit)).into_response()
}

/// DELETE /assets/{id}/contributors/{contributor_id}
pub async fn remove_contributor(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((id, contributor_id)): Path<(u64, u64)>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(credits) = state.contributors.get_mut(&id) else {
        return not_found("asset", id);
    };

    let before = credits.len();
    credits.retain(|c| c.id != contributor_id);
    if credits.len() == before {
        return not_found("contributor", contributor_id);
    }

    (StatusCode::OK, "contributor removed").into_response()
}
