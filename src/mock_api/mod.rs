//! Mock region metadata endpoint.
//!
//! `GET /api/v1/regions/metadata` reads a JSON file on every request,
//! checks that it is well-formed JSON and returns the file bytes unchanged.
//! Read or parse failures answer `500 {"error": "Failed to load region data"}`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use serde::de::IgnoredAny;
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

pub const METADATA_ROUTE: &str = "/api/v1/regions/metadata";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load region data";

#[derive(Debug, Error)]
pub enum MockApiError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
struct MockApiState {
    data_path: Arc<PathBuf>,
}

/// Router serving the metadata route from `data_path`.
pub fn router(data_path: impl Into<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(METADATA_ROUTE, get(region_metadata_handler))
        .layer(cors)
        .with_state(MockApiState {
            data_path: Arc::new(data_path.into()),
        })
}

async fn region_metadata_handler(State(state): State<MockApiState>) -> Response {
    match load_region_data(&state.data_path).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            tracing::error!("Region data unavailable: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": LOAD_FAILURE_MESSAGE })),
            )
                .into_response()
        }
    }
}

/// Read the data file and check it is valid JSON. The bytes are passed
/// through untouched, without checking them against the region schema.
pub async fn load_region_data(path: &Path) -> Result<Bytes, MockApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| MockApiError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice::<IgnoredAny>(&bytes).map_err(|source| MockApiError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Bytes::from(bytes))
}

/// Bind `addr` and serve in a background task. Returns the bound address
/// (useful with port 0) and the server task.
pub async fn spawn_mock_api(
    addr: SocketAddr,
    data_path: impl Into<PathBuf>,
) -> color_eyre::Result<(SocketAddr, JoinHandle<()>)> {
    let app = router(data_path);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Mock region API listening on http://{}{}", local_addr, METADATA_ROUTE);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Mock region API error: {}", e);
        }
    });
    Ok((local_addr, handle))
}

/// Serve in the foreground until the process is stopped.
pub async fn serve_mock_api(addr: SocketAddr, data_path: impl Into<PathBuf>) -> color_eyre::Result<()> {
    let app = router(data_path);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Mock region API listening on http://{}{}",
        listener.local_addr()?,
        METADATA_ROUTE
    );
    axum::serve(listener, app).await?;
    Ok(())
}
