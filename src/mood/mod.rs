use crate::{
    Result,
    config::{EngineConfig, EngineMode},
    engine::{self, Classifier},
    error::InferenceError,
};
use serde::{Deserialize, Serialize};
use std::{env, sync::Arc};
use tracing::{error, info};

const FALLBACK_MOOD: &str = "neutral";
const STUB_MOOD: &str = "NEUTRAL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferResponse {
    pub mood: String,
    pub intensity: f64,
}

impl InferResponse {
    /// Returned in place of any inference failure.
    pub fn fallback() -> Self {
        Self {
            mood: FALLBACK_MOOD.to_string(),
            intensity: 0.0,
        }
    }

    pub fn stub() -> Self {
        Self {
            mood: STUB_MOOD.to_string(),
            intensity: 0.0,
        }
    }
}

/// How `/infer` answers, fixed at startup.
#[derive(Clone)]
pub enum InferenceMode {
    /// Constant neutral answer. `enable_model` holds the raw `ENABLE_MODEL`
    /// value; it is reported at startup and otherwise has no effect.
    Stub { enable_model: String },
    Model(Arc<dyn Classifier>),
}

impl InferenceMode {
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::from_config_with(config, |key| env::var(key).ok())
    }

    /// Like [`InferenceMode::from_config`], reading `ENABLE_MODEL` through `lookup`.
    pub fn from_config_with<F>(config: &EngineConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match config.mode {
            EngineMode::Stub => {
                let enable_model = lookup("ENABLE_MODEL").unwrap_or_else(|| "0".to_string());
                info!("Running in stub mode (ENABLE_MODEL={})", enable_model);
                Ok(Self::Stub { enable_model })
            }
            EngineMode::Model => {
                info!("Running in model mode with {}", config.model);
                Ok(Self::Model(engine::create_classifier(config)?))
            }
        }
    }

    /// Never fails: errors from the engine collapse into the fallback answer.
    pub async fn infer(&self, text: &str) -> InferResponse {
        match self {
            Self::Stub { .. } => InferResponse::stub(),
            Self::Model(classifier) => match classify_mood(classifier.as_ref(), text).await {
                Ok(response) => response,
                Err(e) => {
                    error!("Error during inference: {}", e);
                    InferResponse::fallback()
                }
            },
        }
    }
}

impl std::fmt::Debug for InferenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stub { enable_model } => f
                .debug_struct("Stub")
                .field("enable_model", enable_model)
                .finish(),
            Self::Model(_) => f.write_str("Model"),
        }
    }
}

pub async fn classify_mood(
    classifier: &dyn Classifier,
    text: &str,
) -> std::result::Result<InferResponse, InferenceError> {
    let scores = classifier.classify(text).await?;
    let top = engine::top_label(scores)?;

    Ok(InferResponse {
        mood: top.label,
        intensity: top.score,
    })
}
