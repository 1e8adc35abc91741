//! Axum handler serving `<base>/<group>/<key>`, the inbound side of the
//! HTTP peer transport.

use crate::pool::PeerPool;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use ringcache_core::Error;
use std::sync::Arc;

/// Build a router serving groups under `pool.base_path()`.
///
/// `Group::get` is synchronous and may block on the loader or a further
/// peer hop, so each request runs on `spawn_blocking` rather than the
/// async runtime's worker threads.
pub fn router(pool: Arc<PeerPool>) -> Router {
    let base_path = pool.base_path().trim_end_matches('/').to_string();
    Router::new()
        .route(&format!("{base_path}/:group/:key"), get(handle_get))
        .with_state(pool)
}

async fn handle_get(
    State(pool): State<Arc<PeerPool>>,
    Path((group, key)): Path<(String, String)>,
) -> impl IntoResponse {
    tracing::info!(self_addr = %pool.self_addr(), %group, %key, "GET");

    let Some(handle) = ringcache_core::get_group(&group) else {
        return (StatusCode::NOT_FOUND, format!("no such group: {group}")).into_response();
    };

    match tokio::task::spawn_blocking(move || handle.get(&key)).await {
        Ok(Ok(view)) => (
            [(axum::http::header::CONTENT_TYPE, "application/octet-stream")],
            view.to_vec(),
        )
            .into_response(),
        Ok(Err(err)) => (status_for(&err), err.to_string()).into_response(),
        Err(_join_err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "worker task panicked").into_response()
        }
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::EmptyKey => StatusCode::BAD_REQUEST,
        Error::SourceMiss(_) => StatusCode::NOT_FOUND,
        Error::SourceFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Error::PeerFault(_) => StatusCode::BAD_GATEWAY,
    }
}
