use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Implementations return labels sorted by descending confidence.
pub trait ImageClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError>;
}
