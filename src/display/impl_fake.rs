use crate::display::interface::SessionDisplay;
use crate::session::core::Model;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct SessionDisplayFake {
    frames: Arc<Mutex<Vec<Model>>>,
    failing_frame: Option<usize>,
}

impl SessionDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame at `index` (zero based) is recorded but reported as failed.
    pub fn failing_at(index: usize) -> Self {
        Self {
            failing_frame: Some(index),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<Model> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

impl SessionDisplay for SessionDisplayFake {
    fn render(&mut self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut frames = self.frames.lock().map_err(|_| "display frames poisoned")?;
        frames.push(model.clone());

        if Some(frames.len() - 1) == self.failing_frame {
            return Err("stdout closed".into());
        }
        Ok(())
    }
}
