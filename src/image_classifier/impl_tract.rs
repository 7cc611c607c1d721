use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::image_to_tensor;
use crate::image_classifier::tract::output::{parse_labels, to_probabilities, top_k};
use image::DynamicImage;
use tract_onnx::prelude::*;

pub struct ImageClassifierTract {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    top_k: usize,
}

impl ImageClassifierTract {
    pub fn new(config: ModelConfig, top_k: usize) -> Result<Self, ClassifierError> {
        let to_error = |e: TractError| ClassifierError::ModelLoad(e.to_string());
        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(to_error)?
            .with_input_fact(
                0,
                f32::fact([1, 3, height as usize, width as usize]).into(),
            )
            .map_err(to_error)?
            .into_optimized()
            .map_err(to_error)?
            .into_runnable()
            .map_err(to_error)?;

        let labels_text = std::fs::read_to_string(&config.labels_path).map_err(|e| {
            ClassifierError::ModelLoad(format!("{}: {}", config.labels_path, e))
        })?;
        let labels = parse_labels(&labels_text);

        if labels.is_empty() {
            return Err(ClassifierError::ModelLoad(format!(
                "{} has no labels",
                config.labels_path
            )));
        }

        Ok(Self {
            model,
            labels,
            config,
            top_k,
        })
    }
}

impl ImageClassifier for ImageClassifierTract {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let to_error = |e: TractError| ClassifierError::Inference(e.to_string());
        let (height, width) = self.config.input_shape;

        let input = image_to_tensor(image, width, height);
        let outputs = self.model.run(tvec!(input.into_tvalue())).map_err(to_error)?;
        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no output".to_string()))?;
        let scores = output.to_array_view::<f32>().map_err(to_error)?;

        let scores: Vec<f32> = scores.iter().cloned().collect();
        let probabilities = to_probabilities(&scores);

        Ok(top_k(&probabilities, &self.labels, self.top_k))
    }
}
