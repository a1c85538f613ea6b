//! Artist endpoint handlers, including the DSP identifier subresource.

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
use crate::{Artist, ArtistIdentifier, ResourceRef};

/// Body for `POST /artists`.
#[derive(Debug, Deserialize)]
pub struct CreateArtistBody {
    pub name: String,
    pub proprietary_id: Option<String>,
    pub organization_id: Option<u64>,
}

/// Body for `PUT /artists/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateArtistBody {
    pub name: Option<String>,
    pub proprietary_id: Option<String>,
}

/// Body for creating or updating an artist identifier.
#[derive(Debug, Deserialize)]
pub struct IdentifierBody {
    #[serde(rename = "issuingOrganization")]
    pub issuing_organization: Option<u64>,
    pub identifier: Option<String>,
    #[serde(rename = "newForIssuingOrg")]
    pub new_for_issuing_org: Option<bool>,
}

/// GET /artists
pub async fn list_artists(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let all = state.list_artists(query.name.as_deref());
    let (items, total) = paginate(all, query.page(), query.page_size());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "artist": items, "total": total })),
    )
        .into_response()
}

/// GET /artists/{id}
pub async fn get_artist(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    match state.artists.get(&id) {
        Some(artist) => (StatusCode::OK, Json(artist.clone())).into_response(),
        None => not_found("artist", id),
    }
}

/// POST /artists
pub async fn create_artist(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CreateArtistBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let id = state.allocate_id();
    let mut artist: Artist =
        serde_json::from_value(serde_json::json!({ "id": id, "name": body.name }))
            .expect("artist from create body");
    artist.proprietary_id = body.proprietary_id;
    artist.organization_id = body.organization_id;
    artist.created_date = Some(chrono::Utc::now());

    state.artists.insert(id, artist.clone());
    (StatusCode::CREATED, Json(artist)).into_response()
}

/// PUT /artists/{id}
pub async fn update_artist(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<UpdateArtistBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(artist) = state.artists.get_mut(&id) else {
        return not_found("artist", id);
    };

    if let Some(name) = body.name {
        artist.name = name;
    }
    if let Some(pid) = body.proprietary_id {
        artist.proprietary_id = Some(pid);
    }

    (StatusCode::OK, Json(artist.clone())).into_response()
}

/// DELETE /artists/{id}
pub async fn delete_artist(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if state.artists.remove(&id).is_none() {
        return not_found("artist", id);
    }
    state.identifiers.remove(&id);

    (StatusCode::OK, "artist deleted").into_response()
}

/// GET /artists/{id}/identifier
pub async fn list_identifiers(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.artists.contains_key(&id) {
        return not_found("artist", id);
    }

    let identifiers = state.identifiers.get(&id).cloned().unwrap_or_default();
    (StatusCode::OK, Json(identifiers)).into_response()
}

/// GET /artists/{id}/identifier/{identifier_id}
pub async fn get_identifier(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((id, identifier_id)): Path<(u64, u64)>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let found = state
        .identifiers
        .get(&id)
        .and_then(|ids| ids.iter().find(|i| i.id == identifier_id));

    match found {
        Some(identifier) => (StatusCode::OK, Json(identifier.clone())).into_response(),
        None => not_found("identifier", identifier_id),
    }
}

/// POST /artists/{id}/identifier
pub async fn create_identifier(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<IdentifierBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if !state.artists.contains_key(&id) {
        return not_found("artist", id);
    }

    let identifier = ArtistIdentifier {
        id: state.allocate_id(),
        issuing_organization: ResourceRef::by_id(body.issuing_organization.unwrap_or_default()),
        identifier: body.identifier,
        new_for_issuing_org: body.new_for_issuing_org.unwrap_or(false),
    };
    state
        .identifiers
        .entry(id)
        .or_default()
        .push(identifier.clone());

    (StatusCode::CREATED, Json(identifier)).into_response()
}

/// PUT /artists/{id}/identifier/{identifier_id}
pub async fn update_identifier(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((id, identifier_id)): Path<(u64, u64)>,
    Json(body): Json<IdentifierBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let found = state
        .identifiers
        .get_mut(&id)
        .and_then(|ids| ids.iter_mut().find(|i| i.id == identifier_id));

    let Some(identifier) = found else {
        return not_found("identifier", identifier_id);
    };

    if let Some(org) = body.issuing_organization {
        identifier.issuing_organization = ResourceRef::by_id(org);
    }
    if body.identifier.is_some() {
        identifier.identifier = body.identifier;
    }
    if let Some(fresh) = body.new_for_issuing_org {
        identifier.new_for_issuing_org = fresh;
    }

    (StatusCode::OK, Json(identifier.clone())).into_response()
}

/// DELETE /artists/{id}/identifier/{identifier_id}
pub async fn delete_identifier(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((id, identifier_id)): Path<(u64, u64)>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(identifiers) = state.identifiers.get_mut(&id) else {
        return not_found("artist", id);
    };

    let before = identifiers.len();
    identifiers.retain(|i| i.id != identifier_id);
    if identifiers.len() == before {
        return not_found("identifier", identifier_id);
    }

    (StatusCode::OK, "identifier deleted").into_response()
}
