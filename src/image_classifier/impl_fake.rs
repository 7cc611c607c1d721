use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use std::sync::Arc;

const OBJECTS: [&str; 18] = [
    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book", "laptop",
    "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
];

enum Behavior {
    Random { top_k: usize },
    Fixed(Vec<Classification>),
    Fail(String),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, top_k: usize) -> Self {
        Self::with_behavior(logger, Behavior::Random { top_k })
    }

    #[cfg(test)]
    pub fn with_results(logger: Arc<dyn Logger + Send + Sync>, results: Vec<Classification>) -> Self {
        Self::with_behavior(logger, Behavior::Fixed(results))
    }

    #[cfg(test)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self::with_behavior(logger, Behavior::Fail(message.to_string()))
    }

    fn with_behavior(logger: Arc<dyn Logger + Send + Sync>, behavior: Behavior) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            behavior,
        }
    }

    fn random(top_k: usize) -> Result<Vec<Classification>, ClassifierError> {
        let mut rng = rand::rng();

        let confidence_dist = Uniform::new(0.0f32, 1.0)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut labels = OBJECTS.to_vec();
        labels.shuffle(&mut rng);

        let raw: Vec<(&str, f32)> = labels
            .into_iter()
            .take(top_k.max(1))
            .map(|label| (label, confidence_dist.sample(&mut rng)))
            .collect();

        // Scaled so the confidences sum to at most one, like a softmax head.
        let total: f32 = raw.iter().map(|(_, c)| c).sum::<f32>().max(1.0);

        let mut classifications: Vec<Classification> = raw
            .into_iter()
            .map(|(label, confidence)| Classification {
                label: label.to_string(),
                confidence: confidence / total,
            })
            .collect();

        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(classifications)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        match &self.behavior {
            Behavior::Random { top_k } => Self::random(*top_k),
            Behavior::Fixed(results) => Ok(results.clone()),
            Behavior::Fail(message) => Err(ClassifierError::Inference(message.clone())),
        }
    }
}
