//! Request handlers.

use crate::models::{CallApiRequest, HealthResponse, SaveJsonRequest, SaveResponse};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::storage::save_json as write_json;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        variables: state.fetcher().environment().len(),
    })
}

/// `POST /call-api`: proxies the request and returns the upstream JSON.
pub async fn call_api(
    State(state): State<AppState>,
    payload: Result<Json<CallApiRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    match state.fetcher().fetch(request.url()).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            log::error!("Error in /call-api ({}): {}", e.kind(), e);
            Err(e.into())
        }
    }
}

/// `POST /save-json`: writes the displayed response to the downloads directory.
pub async fn save_json(
    State(state): State<AppState>,
    payload: Result<Json<SaveJsonRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let json_data = request
        .json_data
        .ok_or_else(|| ApiError::BadRequest("jsonData is required".to_string()))?;

    let path = write_json(
        state.downloads_dir(),
        &json_data,
        request.original_url.as_deref(),
    )
    .await
    .map_err(|e| {
        log::error!("Error in /save-json: {}", e);
        ApiError::from(e)
    })?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Json(SaveResponse {
        message: format!(
            "File \"{}\" saved to {}",
            filename,
            state.downloads_dir().display()
        ),
        filename,
    }))
}
