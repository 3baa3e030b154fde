use async_trait::async_trait;
use mood_service::{
    InferenceError,
    engine::{Classifier, LabelScore},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Mock classifier returning the same scores for every input
#[derive(Debug, Default)]
pub struct MockClassifier {
    pub scores: Vec<LabelScore>,
    pub error: Option<InferenceError>,
    pub inputs: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(mut self, scores: &[(&str, f64)]) -> Self {
        self.scores = scores
            .iter()
            .map(|(label, score)| LabelScore::new(*label, *score))
            .collect();
        self
    }

    pub fn with_error(mut self, error: InferenceError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(error.clone());
        }

        Ok(self.scores.clone())
    }
}

/// go_emotions-style scores for a clearly joyful sentence
pub fn joyful_scores() -> Vec<(&'static str, f64)> {
    vec![
        ("joy", 0.8712),
        ("admiration", 0.0521),
        ("excitement", 0.0313),
        ("neutral", 0.0207),
        ("sadness", 0.0011),
    ]
}
