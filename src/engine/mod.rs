mod remote;

pub use remote::RemoteClassifier;

use crate::{Result, config::EngineConfig, error::InferenceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One `(label, score)` pair produced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A text classifier returning a score for every label in its vocabulary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> std::result::Result<Vec<LabelScore>, InferenceError>;

    /// Prepares the engine before traffic arrives.
    async fn warm_up(&self) -> std::result::Result<(), InferenceError> {
        Ok(())
    }
}

/// Picks the highest-scoring pair. Ties keep the first pair in engine order.
pub fn top_label(scores: Vec<LabelScore>) -> std::result::Result<LabelScore, InferenceError> {
    let mut best: Option<LabelScore> = None;

    for candidate in scores {
        if !candidate.score.is_finite() || candidate.score < 0.0 {
            return Err(InferenceError::InvalidScore {
                label: candidate.label,
                score: candidate.score,
            });
        }

        let replace = match &best {
            Some(current) => candidate.score > current.score,
            None => true,
        };
        if replace {
            best = Some(candidate);
        }
    }

    best.ok_or(InferenceError::EmptyScores)
}

pub fn create_classifier(config: &EngineConfig) -> Result<Arc<dyn Classifier>> {
    Ok(Arc::new(RemoteClassifier::new(config)?))
}
