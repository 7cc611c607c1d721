use crate::image_classifier::interface::{Classification, ClassifierError};
use crate::image_source::interface::{ImageFetcher, ImageReference, ImageSourceError};
use crate::model_loader::interface::ModelHandle;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error(transparent)]
    Source(#[from] ImageSourceError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Fetches and decodes the referenced image, then hands it to the model.
/// The ranking is returned exactly as the model produced it.
pub fn classify(
    model: &ModelHandle,
    reference: &ImageReference,
    fetcher: &dyn ImageFetcher,
) -> Result<Vec<Classification>, InferenceError> {
    let bytes = fetcher.fetch(reference)?;

    let image = image::load_from_memory(&bytes)
        .map_err(|e| ClassifierError::Decode(format!("{}: {}", reference, e)))?;

    Ok(model.classifier.classify(&image)?)
}
