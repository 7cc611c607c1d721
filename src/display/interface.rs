use crate::session::core::Model;
use std::error::Error;

/// Presentation surface. Receives every model the session settles on.
pub trait SessionDisplay: Send + Sync {
    fn render(&mut self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>>;
}
