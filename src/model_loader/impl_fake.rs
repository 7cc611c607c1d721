use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::{ClassifierError, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::model_loader::interface::{ModelHandle, ModelLoader};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct ModelLoaderFake {
    logger: Arc<dyn Logger + Send + Sync>,
    latency: Duration,
    outcome: Result<Arc<dyn ImageClassifier + Send + Sync>, ClassifierError>,
    load_count: AtomicUsize,
}

impl ModelLoaderFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, latency: Duration, top_k: usize) -> Self {
        let classifier = Arc::new(ImageClassifierFake::new(logger.clone(), top_k));
        Self::with_classifier(logger, latency, classifier)
    }

    pub fn with_classifier(
        logger: Arc<dyn Logger + Send + Sync>,
        latency: Duration,
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("model_loader").with_namespace("fake"),
            latency,
            outcome: Ok(classifier),
            load_count: AtomicUsize::new(0),
        }
    }

    #[cfg(test)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, latency: Duration, message: &str) -> Self {
        Self {
            logger: logger.with_namespace("model_loader").with_namespace("fake"),
            latency,
            outcome: Err(ClassifierError::ModelLoad(message.to_string())),
            load_count: AtomicUsize::new(0),
        }
    }

    #[cfg(test)]
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl ModelLoader for ModelLoaderFake {
    fn load(&self) -> Result<ModelHandle, ClassifierError> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        let _ = self.logger.info("Loading model...");
        std::thread::sleep(self.latency);

        match &self.outcome {
            Ok(classifier) => {
                let _ = self.logger.info("Model loaded");
                Ok(ModelHandle::new("fake", classifier.clone()))
            }
            Err(error) => {
                let _ = self.logger.error(&error.to_string());
                Err(error.clone())
            }
        }
    }
}
