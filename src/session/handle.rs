use crate::image_source::resolver::ImageSourceResolver;
use crate::session::core::{Model, Msg};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// What a frontend holds: it posts user actions and reads the latest model.
#[derive(Clone)]
pub struct SessionHandle {
    event_sender: Sender<Msg>,
    model: Arc<Mutex<Model>>,
    resolver: ImageSourceResolver,
}

impl SessionHandle {
    pub fn new(
        event_sender: Sender<Msg>,
        model: Arc<Mutex<Model>>,
        resolver: ImageSourceResolver,
    ) -> Self {
        Self {
            event_sender,
            model,
            resolver,
        }
    }

    pub fn dispatch(&self, msg: Msg) -> bool {
        self.event_sender.send(msg).is_ok()
    }

    pub fn upload_files(&self, files: Vec<Vec<u8>>) -> bool {
        let reference = self.resolver.resolve_from_file(files);
        self.dispatch(Msg::ImageSelected(reference))
    }

    pub fn enter_url(&self, text: &str) -> bool {
        self.dispatch(Msg::UrlInputChanged(text.to_string()))
    }

    pub fn identify(&self) -> bool {
        self.dispatch(Msg::IdentifyRequested)
    }

    pub fn retry_model_load(&self) -> bool {
        self.dispatch(Msg::LoadModelRequested)
    }

    pub fn shutdown(&self) -> bool {
        self.dispatch(Msg::Shutdown)
    }

    pub fn snapshot(&self) -> Model {
        match self.model.lock() {
            Ok(model) => model.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
