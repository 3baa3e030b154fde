use serde::{Deserialize, Serialize};

pub use crate::mood::InferResponse;

#[derive(Debug, Deserialize)]
pub struct InferRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
