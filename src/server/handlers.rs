use super::types::{HealthResponse, InferRequest, InferResponse};
use crate::mood::InferenceMode;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub mode: Arc<InferenceMode>,
}

impl AppState {
    pub fn new(mode: InferenceMode) -> Self {
        Self {
            mode: Arc::new(mode),
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn infer(
    State(state): State<AppState>,
    Json(request): Json<InferRequest>,
) -> Json<InferResponse> {
    debug!("Received inference request ({} characters)", request.text.len());

    let response = state.mode.infer(&request.text).await;

    debug!(
        "Inferred mood '{}' with intensity {}",
        response.mood, response.intensity
    );
    Json(response)
}
