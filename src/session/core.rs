use crate::config::Config;
use crate::image_classifier::interface::{Classification, ClassifierError};
use crate::image_source::interface::{BlobId, ImageReference};
use crate::image_source::resolver::resolve_from_url;
use crate::history::HistoryLog;
use crate::inference::InferenceError;
use crate::model_loader::interface::ModelHandle;
use std::collections::BTreeSet;
use std::fmt;

//
// Model
//

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModelState {
    #[default]
    Unloaded,
    Loading,
    Ready(ModelHandle),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Inference {
    #[default]
    Idle,
    Pending { request_id: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    ModelLoadFailed(String),
    ClassificationFailed(String),
    InferenceUnavailable(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ModelLoadFailed(reason) => write!(f, "Failed to load model: {}", reason),
            Notice::ClassificationFailed(reason) => {
                write!(f, "Could not identify image: {}", reason)
            }
            Notice::InferenceUnavailable(reason) => {
                write!(f, "Identification unavailable, model failed to load: {}", reason)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Bootstrapping,
    Failed,
    Idle,
    ImageSelected,
    ResultsShown,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Model {
    pub model_state: ModelState,
    pub image: Option<ImageReference>,
    pub results: Vec<Classification>,
    pub history: HistoryLog,
    pub inference: Inference,
    /// Content of the URL text field.
    pub url_input: String,
    pub notice: Option<Notice>,
    pub next_request_id: u64,
}

impl Model {
    pub fn phase(&self) -> Phase {
        match (&self.model_state, &self.image) {
            (ModelState::Unloaded | ModelState::Loading, _) => Phase::Bootstrapping,
            (ModelState::Failed(_), _) => Phase::Failed,
            (ModelState::Ready(_), None) => Phase::Idle,
            (ModelState::Ready(_), Some(_)) if self.results.is_empty() => Phase::ImageSelected,
            (ModelState::Ready(_), Some(_)) => Phase::ResultsShown,
        }
    }

    pub fn is_bootstrapping(&self) -> bool {
        self.phase() == Phase::Bootstrapping
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.inference, Inference::Pending { .. })
    }

    /// Whether the Identify control accepts a press. A failed model still
    /// takes the press so the user learns why nothing is identified.
    pub fn identify_enabled(&self) -> bool {
        matches!(self.model_state, ModelState::Ready(_) | ModelState::Failed(_))
            && self.image.is_some()
            && !self.is_busy()
    }

    #[cfg(test)]
    pub fn best_guess(&self) -> Option<&Classification> {
        self.results.first()
    }

    fn reachable_blobs(&self) -> BTreeSet<BlobId> {
        self.image
            .iter()
            .chain(self.history.iter())
            .filter_map(ImageReference::blob_id)
            .collect()
    }
}

//
// Msg
//

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    LoadModelRequested,
    ModelLoadDone(Result<ModelHandle, ClassifierError>),
    ImageSelected(Option<ImageReference>),
    UrlInputChanged(String),
    IdentifyRequested,
    ClassifyDone {
        request_id: u64,
        result: Result<Vec<Classification>, InferenceError>,
    },
    Shutdown,
}

impl Msg {
    fn incoming_blob(&self) -> Option<BlobId> {
        match self {
            Msg::ImageSelected(Some(reference)) => reference.blob_id(),
            _ => None,
        }
    }
}

//
// Effect
//

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadModel,
    ClassifyImage {
        request_id: u64,
        model: ModelHandle,
        image: ImageReference,
    },
    ReleaseBlobs(Vec<BlobId>),
}

//
// Init
//

pub fn init() -> (Model, Vec<Effect>) {
    load_model(Model::default())
}

//
// Transition
//

/// Blobs that were reachable before the message (including one it carries)
/// and are not reachable afterwards are released.
pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let mut before = model.reachable_blobs();
    before.extend(msg.incoming_blob());

    let (model, mut effects) = transition_model(config, model, msg);

    let after = model.reachable_blobs();
    let released: Vec<BlobId> = before.difference(&after).copied().collect();
    if !released.is_empty() {
        effects.push(Effect::ReleaseBlobs(released));
    }

    (model, effects)
}

fn transition_model(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::LoadModelRequested => load_model(model),

        Msg::ModelLoadDone(result) => model_loaded(model, result),

        Msg::Shutdown => (model, vec![]),

        // The interactive surface is hidden until the model settles.
        _ if model.is_bootstrapping() => (model, vec![]),

        Msg::ImageSelected(reference) => select_image(config, model, reference),

        Msg::UrlInputChanged(text) => {
            let reference = resolve_from_url(&text);
            let model = Model {
                url_input: text,
                ..model
            };
            if reference == model.image {
                // Editing the field always drops the previous ranking, but an
                // unchanged reference is not a new history entry.
                (clear_results(model), vec![])
            } else {
                select_image(config, model, reference)
            }
        }

        Msg::IdentifyRequested => identify(model),

        Msg::ClassifyDone { request_id, result } => classified(model, request_id, result),
    }
}

fn load_model(model: Model) -> (Model, Vec<Effect>) {
    match model.model_state {
        ModelState::Unloaded | ModelState::Failed(_) => (
            Model {
                model_state: ModelState::Loading,
                notice: None,
                ..model
            },
            vec![Effect::LoadModel],
        ),
        ModelState::Loading | ModelState::Ready(_) => (model, vec![]),
    }
}

fn model_loaded(model: Model, result: Result<ModelHandle, ClassifierError>) -> (Model, Vec<Effect>) {
    if model.model_state != ModelState::Loading {
        return (model, vec![]);
    }

    match result {
        Ok(handle) => (
            Model {
                model_state: ModelState::Ready(handle),
                ..model
            },
            vec![],
        ),
        Err(error) => (
            Model {
                model_state: ModelState::Failed(error.to_string()),
                notice: Some(Notice::ModelLoadFailed(error.to_string())),
                ..model
            },
            vec![],
        ),
    }
}

fn select_image(
    config: &Config,
    model: Model,
    reference: Option<ImageReference>,
) -> (Model, Vec<Effect>) {
    if reference == model.image {
        return (model, vec![]);
    }

    let mut history = model.history;
    if let Some(reference) = &reference {
        history.append(reference.clone(), config.history_limit);
    }

    (
        clear_results(Model {
            image: reference,
            history,
            ..model
        }),
        vec![],
    )
}

/// A pending request is abandoned; its result is dropped when it arrives.
fn clear_results(model: Model) -> Model {
    Model {
        results: vec![],
        inference: Inference::Idle,
        notice: None,
        ..model
    }
}

fn identify(model: Model) -> (Model, Vec<Effect>) {
    if let ModelState::Failed(reason) = &model.model_state {
        let notice = Notice::InferenceUnavailable(reason.clone());
        return (
            Model {
                notice: Some(notice),
                ..model
            },
            vec![],
        );
    }

    if model.is_busy() {
        return (model, vec![]);
    }

    let (handle, image) = match (&model.model_state, &model.image) {
        (ModelState::Ready(handle), Some(image)) => (handle.clone(), image.clone()),
        _ => return (model, vec![]),
    };

    let request_id = model.next_request_id;
    (
        Model {
            inference: Inference::Pending { request_id },
            next_request_id: request_id + 1,
            url_input: String::new(),
            ..model
        },
        vec![Effect::ClassifyImage {
            request_id,
            model: handle,
            image,
        }],
    )
}

fn classified(
    model: Model,
    request_id: u64,
    result: Result<Vec<Classification>, InferenceError>,
) -> (Model, Vec<Effect>) {
    if model.inference != (Inference::Pending { request_id }) {
        return (model, vec![]);
    }

    match result {
        Ok(results) => (
            Model {
                results,
                inference: Inference::Idle,
                notice: None,
                ..model
            },
            vec![],
        ),
        Err(error) => (
            Model {
                inference: Inference::Idle,
                notice: Some(Notice::ClassificationFailed(error.to_string())),
                ..model
            },
            vec![],
        ),
    }
}
