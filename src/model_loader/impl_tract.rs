use crate::image_classifier::impl_tract::ImageClassifierTract;
use crate::image_classifier::interface::ClassifierError;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::library::logger::interface::Logger;
use crate::model_loader::interface::{ModelHandle, ModelLoader};
use std::path::Path;
use std::sync::Arc;

pub struct ModelLoaderTract {
    logger: Arc<dyn Logger + Send + Sync>,
    config: ModelConfig,
    top_k: usize,
}

impl ModelLoaderTract {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, config: ModelConfig, top_k: usize) -> Self {
        Self {
            logger: logger.with_namespace("model_loader").with_namespace("tract"),
            config,
            top_k,
        }
    }

    fn model_name(&self) -> String {
        Path::new(&self.config.onnx_model_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| self.config.onnx_model_path.clone())
    }
}

impl ModelLoader for ModelLoaderTract {
    fn load(&self) -> Result<ModelHandle, ClassifierError> {
        let _ = self
            .logger
            .info(&format!("Loading {}...", self.config.onnx_model_path));

        let classifier = ImageClassifierTract::new(self.config.clone(), self.top_k)
            .inspect_err(|e| {
                let _ = self.logger.error(&e.to_string());
            })?;

        let _ = self.logger.info("Model loaded");

        Ok(ModelHandle::new(&self.model_name(), Arc::new(classifier)))
    }
}
