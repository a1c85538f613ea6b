//! Label endpoint handlers.

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
use crate::Label;

/// Body for `POST /labels`.
#[derive(Debug, Deserialize)]
pub struct CreateLabelBody {
    pub name: String,
    pub proprietary_id: Option<String>,
    pub organization_id: Option<u64>,
}

/// Body for `PUT /labels/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateLabelBody {
    pub name: Option<String>,
    pub proprietary_id: Option<String>,
}

/// GET /labels
pub async fn list_labels(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let all = state.list_labels(query.name.as_deref());
    let (items, total) = paginate(all, query.page(), query.page_size());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "label": items, "total": total })),
    )
        .into_response()
}

/// GET /labels/{id}
pub async fn get_label(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    match state.labels.get(&id) {
        Some(label) => (StatusCode::OK, Json(label.clone())).into_response(),
        None => not_found("label", id),
    }
}

/// POST /labels
pub async fn create_label(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CreateLabelBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let id = state.allocate_id();
    let mut label: Label =
        serde_json::from_value(serde_json::json!({ "id": id, "name": body.name }))
            .expect("label from create body");
    label.proprietary_id = body.proprietary_id;
    label.organization_id = body.organization_id;
    label.created_date = Some(chrono::Utc::now());

    state.labels.insert(id, label.clone());
    (StatusCode::CREATED, Json(label)).into_response()
}

/// PUT /labels/{id}
pub async fn update_label(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<UpdateLabelBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(label) = state.labels.get_mut(&id) else {
        return not_found("label", id);
    };

    if let Some(name) = body.name {
        label.name = name;
    }
    if let Some(pid) = body.proprietary_id {
        label.proprietary_id = Some(pid);
    }

    (StatusCode::OK, Json(label.clone())).into_response()
}

/// DELETE /labels/{id}
pub async fn delete_label(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if state.labels.remove(&id).is_none() {
        return not_found("label", id);
    }

    (StatusCode::OK, "label deleted").into_response()
}
