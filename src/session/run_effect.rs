use super::main::Session;
use crate::inference;
use crate::session::core::{Effect, Msg};

impl Session {
    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::LoadModel => {
                let loaded = self.model_loader.load();
                if let Err(e) = &loaded {
                    let _ = self.logger.error(&format!("Model load failed: {}", e));
                }
                self.send(Msg::ModelLoadDone(loaded));
            }
            Effect::ClassifyImage {
                request_id,
                model,
                image,
            } => {
                let result = inference::classify(&model, &image, self.image_fetcher.as_ref());
                match &result {
                    Ok(results) => {
                        let _ = self.logger.info(&format!(
                            "Classified {}: {:?}",
                            image,
                            results.first().map(|c| &c.label)
                        ));
                    }
                    Err(e) => {
                        let _ = self
                            .logger
                            .error(&format!("Classification of {} failed: {}", image, e));
                    }
                }
                self.send(Msg::ClassifyDone { request_id, result });
            }
            Effect::ReleaseBlobs(ids) => {
                for id in ids {
                    if self.blob_store.release(id) {
                        let _ = self.logger.info(&format!("Released {:?}", id));
                    }
                }
            }
        }
    }
}
