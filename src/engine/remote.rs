use super::{Classifier, LabelScore};
use crate::{Error, Result, config::EngineConfig, error::InferenceError};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters,
}

/// `top_k: null` asks for every label instead of only the best one.
#[derive(Debug, Serialize)]
struct ClassifyParameters {
    top_k: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassifyResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            Self::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(scores) => scores,
        }
    }
}

/// Classifier backed by a hosted text-classification model speaking the
/// Hugging Face inference wire format.
pub struct RemoteClassifier {
    endpoint: String,
    client: reqwest::Client,
    model: String,
}

impl RemoteClassifier {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| Error::config(format!("Invalid engine API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let endpoint = format!(
            "{}/models/{}",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        debug!("Creating remote classifier for: {}", endpoint);

        Ok(Self {
            endpoint,
            client,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> std::result::Result<Vec<LabelScore>, InferenceError> {
        debug!("Classifying {} characters with {}", text.len(), self.model);

        let request = ClassifyRequest {
            inputs: text,
            parameters: ClassifyParameters { top_k: None },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::unavailable(format!("Failed to reach engine: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::malformed(format!("Failed to parse engine response: {}", e)))?;

        let scores = parsed.into_scores();
        debug!("Engine returned {} label scores", scores.len());
        Ok(scores)
    }

    /// Runs one throwaway classification so the hosted model is loaded.
    async fn warm_up(&self) -> std::result::Result<(), InferenceError> {
        info!("Warming up classification model: {}", self.model);
        let scores = self.classify("warm up").await?;
        info!(
            "Classification model {} ready with {} labels",
            self.model,
            scores.len()
        );
        Ok(())
    }
}
