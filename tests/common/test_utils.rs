use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use mood_service::{
    config::{Config, EngineConfig, EngineMode, LogsConfig, ServerConfig},
    engine::Classifier,
    mood::InferenceMode,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        engine: EngineConfig {
            mode: EngineMode::Model,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "SamLowe/roberta-base-go_emotions".to_string(),
            api_key: None,
            warm_up: false,
        },
    }
}

/// Router in stub mode with the given ENABLE_MODEL value
pub fn create_stub_app(enable_model: &str) -> Router {
    server::router(AppState::new(InferenceMode::Stub {
        enable_model: enable_model.to_string(),
    }))
}

/// Router in model mode backed by the given classifier
pub fn create_model_app(classifier: Arc<dyn Classifier>) -> Router {
    server::router(AppState::new(InferenceMode::Model(classifier)))
}

pub fn infer_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/infer")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn health_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8081
  logs:
    level: "debug"

engine:
  mode: "model"
  base_url: "http://localhost:8080"
  model: "j-hartmann/emotion-english-distilroberta-base"
  api_key: "hf_test"
  warm_up: false
"#;

/// Stub mode with everything else defaulted
pub const STUB_CONFIG_YAML: &str = r#"
engine:
  mode: "stub"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

engine:
  mode: "gpu"
"#;
