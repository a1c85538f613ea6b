//! Person endpoint handlers.

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
use crate::Person;

/// Body for `POST /people`.
#[derive(Debug, Deserialize)]
pub struct CreatePersonBody {
    pub name: String,
}

/// Body for `PUT /people/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonBody {
    pub name: Option<String>,
}

/// GET /people
pub async fn list_people(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let all = state.list_people(query.name.as_deref());
    let (items, total) = paginate(all, query.page(), query.page_size());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "person": items, "total": total })),
    )
        .into_response()
}

/// GET /people/{id}
pub async fn get_person(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let state = state.read().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    match state.people.get(&id) {
        Some(person) => (StatusCode::OK, Json(person.clone())).into_response(),
        None => not_found("person", id),
    }
}

/// POST /people
pub async fn create_person(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CreatePersonBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let id = state.allocate_id();
    let mut person: Person =
        serde_json::from_value(serde_json::json!({ "id": id, "name": body.name }))
            .expect("person from create body");
    person.created_date = Some(chrono::Utc::now());

    state.people.insert(id, person.clone());
    (StatusCode::CREATED, Json(person)).into_response()
}

/// PUT /people/{id}
pub async fn update_person(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<UpdatePersonBody>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    let Some(person) = state.people.get_mut(&id) else {
        return not_found("person", id);
    };

    if let Some(name) = body.name {
        person.name = name;
    }

    (StatusCode::OK, Json(person.clone())).into_response()
}

/// DELETE /people/{id}
pub async fn delete_person(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = state.write().await;
    if let Err(resp) = check_session(&headers, &state) {
        return resp;
    }

    if state.people.remove(&id).is_none() {
        return not_found("person", id);
    }

    (StatusCode::OK, "person deleted").into_response()
}
