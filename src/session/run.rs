use super::main::Session;
use crate::session::core::{init, transition, Effect, Model, Msg};
use std::error::Error;

impl Session {
    pub fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let receiver = self
            .event_receiver
            .lock()
            .map_err(|_| "session receiver poisoned")?;

        let (mut current_model, effects) = init();
        self.publish(&current_model)?;
        self.execute_effects(effects);

        loop {
            let msg = receiver.recv()?;

            if matches!(msg, Msg::Shutdown) {
                let released = self.blob_store.clear();
                let _ = self.logger.info(&format!(
                    "Session ended, released {} blob(s)",
                    released
                ));
                return Ok(());
            }

            let _ = self.logger.info(&format!("msg: {}", describe_msg(&msg)));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self.logger.info(&format!(
                "phase: {:?}, effects: {:?}",
                new_model.phase(),
                effects.iter().map(describe_effect).collect::<Vec<_>>()
            ));

            current_model = new_model;
            self.publish(&current_model)?;
            self.execute_effects(effects);
        }
    }

    /// Only a poisoned model is fatal. A display that fails to draw one frame
    /// gets the next model anyway.
    fn publish(&self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.model.lock().map_err(|_| "session model poisoned")? = model.clone();

        let rendered = match self.display.lock() {
            Ok(mut display) => display.render(model),
            Err(_) => Err("session display poisoned".into()),
        };
        if let Err(e) = rendered {
            let _ = self.logger.error(&format!("Render failed: {}", e));
        }

        Ok(())
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }
}

fn describe_msg(msg: &Msg) -> String {
    match msg {
        Msg::ClassifyDone {
            request_id,
            result: Ok(results),
        } => format!("ClassifyDone #{} ({} labels)", request_id, results.len()),
        Msg::ModelLoadDone(Ok(handle)) => format!("ModelLoadDone({})", handle.name),
        msg => format!("{:?}", msg),
    }
}

fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::ClassifyImage {
            request_id, image, ..
        } => format!("ClassifyImage #{} {}", request_id, image),
        effect => format!("{:?}", effect),
    }
}
