use crate::config::Config;
use crate::display::interface::SessionDisplay;
use crate::image_source::blob_store::BlobStore;
use crate::image_source::interface::ImageFetcher;
use crate::image_source::resolver::ImageSourceResolver;
use crate::library::logger::interface::Logger;
use crate::model_loader::interface::ModelLoader;
use crate::session::core::{Model, Msg};
use crate::session::handle::SessionHandle;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Session {
    pub model: Arc<Mutex<Model>>,
    pub event_sender: Sender<Msg>,
    pub event_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub display: Arc<Mutex<dyn SessionDisplay + Send + Sync>>,
    pub model_loader: Arc<dyn ModelLoader + Send + Sync>,
    pub image_fetcher: Arc<dyn ImageFetcher + Send + Sync>,
    pub blob_store: BlobStore,
}

impl Session {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        display: Arc<Mutex<dyn SessionDisplay + Send + Sync>>,
        model_loader: Arc<dyn ModelLoader + Send + Sync>,
        image_fetcher: Arc<dyn ImageFetcher + Send + Sync>,
        blob_store: BlobStore,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            model: Arc::new(Mutex::new(Model::default())),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            config,
            logger: logger.with_namespace("session"),
            display,
            model_loader,
            image_fetcher,
            blob_store,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(
            self.event_sender.clone(),
            self.model.clone(),
            ImageSourceResolver::new(self.blob_store.clone()),
        )
    }

    /// Delivery fails only once the run loop has ended, in which case the
    /// message is dropped.
    pub fn send(&self, msg: Msg) {
        let _ = self.event_sender.send(msg);
    }
}
