use crate::image_classifier::interface::{ClassifierError, ImageClassifier};
use std::fmt;
use std::sync::Arc;

/// Session-wide classification capability. Cloning shares the same model;
/// two handles are equal only when they share it.
#[derive(Clone)]
pub struct ModelHandle {
    pub name: String,
    pub classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl ModelHandle {
    pub fn new(name: &str, classifier: Arc<dyn ImageClassifier + Send + Sync>) -> Self {
        Self {
            name: name.to_string(),
            classifier,
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle").field("name", &self.name).finish()
    }
}

impl PartialEq for ModelHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.classifier, &other.classifier)
    }
}

pub trait ModelLoader {
    /// Blocks until the model is usable. Called from an effect thread.
    fn load(&self) -> Result<ModelHandle, ClassifierError>;
}
