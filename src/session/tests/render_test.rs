use super::fixture::cat_and_dog;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_source::interface::{BlobId, ImageReference};
use crate::library::logger::impl_fake::LoggerFake;
use crate::model_loader::interface::ModelHandle;
use crate::session::core::{Model, ModelState, Notice};
use crate::session::render::{format_confidence, render_lines};
use std::sync::Arc;

fn ready_model() -> Model {
    let classifier = ImageClassifierFake::new(Arc::new(LoggerFake::new()), 3);
    Model {
        model_state: ModelState::Ready(ModelHandle::new("mobilenet", Arc::new(classifier))),
        ..Model::default()
    }
}

#[test]
fn test_loading_shows_only_indicator() {
    let model = Model {
        model_state: ModelState::Loading,
        ..Model::default()
    };

    assert_eq!(render_lines(&model), vec!["Model Loading...".to_string()]);
}

#[test]
fn test_confidence_is_a_percentage_with_two_decimals() {
    assert_eq!(format_confidence(0.92), "92.00%");
    assert_eq!(format_confidence(0.05123), "5.12%");
}

#[test]
fn test_first_result_is_best_guess() {
    let mut model = ready_model();
    model.image = Some(ImageReference::Blob(BlobId(1)));
    model.results = cat_and_dog();
    model.history.append(ImageReference::Blob(BlobId(1)), None);

    let lines = render_lines(&model);

    assert!(lines.contains(&"cat Confidence level: 92.00% Best Guess".to_string()));
    assert!(lines.contains(&"dog Confidence level: 5.00%".to_string()));
    assert!(lines.contains(&"  blob:1".to_string()));
}

#[test]
fn test_notice_is_shown_first() {
    let mut model = ready_model();
    model.notice = Some(Notice::ClassificationFailed("bad png".to_string()));

    let lines = render_lines(&model);

    assert_eq!(lines[0], "Error: Could not identify image: bad png");
}
