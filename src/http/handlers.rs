//! Request dispatch and the five user actions.
//!
//! Every request lands in [`dispatch`], which resolves an [`Action`] and
//! always produces exactly one response, even on early rejection.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;

use crate::http::request::RequestIdExt;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Action;
use crate::users::{UpdateOutcome, User, UserError, UserStore};

/// Single entry point for all paths.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let action = match state.dispatcher.dispatch(&method, &path) {
        Ok(action) => action,
        Err(rejection) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                rejection = rejection.name(),
                "Request not dispatched"
            );
            let response = rejection.into_response();
            let status = response.status().as_u16();
            metrics::record_request(method.as_str(), status, rejection.name(), start_time);
            return response;
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        action = action.name(),
        "Dispatching request"
    );

    let response = match action {
        Action::List => list(&state.store).into_response(),
        Action::Read(id) => read(&state.store, id).into_response(),
        Action::Delete(id) => delete(&state.store, id).into_response(),
        Action::Create => match read_body(request, state.max_body_size).await {
            Ok(body) => create(&state.store, &body).into_response(),
            Err(e) => e.into_response(),
        },
        Action::Update(id) => match read_body(request, state.max_body_size).await {
            Ok(body) => update(&state.store, id, &body).into_response(),
            Err(e) => e.into_response(),
        },
    };

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::info!(
            request_id = %request_id,
            action = action.name(),
            status = status.as_u16(),
            "Action failed"
        );
    }
    metrics::record_request(method.as_str(), status.as_u16(), action.name(), start_time);
    response
}

async fn read_body(request: Request<Body>, limit: usize) -> Result<Bytes, ApiError> {
    axum::body::to_bytes(request.into_body(), limit)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, limit, "Failed to read request body");
            ApiError::from(UserError::Parse)
        })
}

/// All records, as a JSON array.
pub fn list(store: &UserStore) -> Json<Vec<User>> {
    Json(store.list())
}

/// A single record by ID.
pub fn read(store: &UserStore, id: u64) -> Result<Json<User>, ApiError> {
    Ok(Json(store.get(id)?))
}

/// Store a new record; the body must not carry an ID.
pub fn create(store: &UserStore, body: &[u8]) -> Result<Json<User>, ApiError> {
    let user = store.create(User::from_json(body)?)?;
    tracing::info!(user_id = user.id, "User created");
    metrics::record_user_count(store.len());
    Ok(Json(user))
}

/// Overwrite record `id`, falling back per the store's policy when missing.
pub fn update(store: &UserStore, id: u64, body: &[u8]) -> Result<Json<User>, ApiError> {
    let user = User::from_json(body)?;
    if user.id != id {
        return Err(UserError::IdMismatch.into());
    }

    let outcome = store.update(id, user)?;
    match &outcome {
        UpdateOutcome::Updated(u) => tracing::info!(user_id = u.id, "User updated"),
        UpdateOutcome::Inserted(u) => {
            tracing::info!(
                requested_id = id,
                user_id = u.id,
                "User missing on update, inserted under new id"
            );
            metrics::record_user_count(store.len());
        }
    }
    Ok(Json(outcome.into_user()))
}

/// Remove record `id`. Success is an explicit 200 with an empty body.
///
/// A missing ID is reported as 500, unlike `read`.
pub fn delete(store: &UserStore, id: u64) -> Result<StatusCode, ApiError> {
    store
        .delete(id)
        .map_err(|e| ApiError::with_status(StatusCode::INTERNAL_SERVER_ERROR, e))?;
    tracing::info!(user_id = id, "User deleted");
    metrics::record_user_count(store.len());
    Ok(StatusCode::OK)
}
