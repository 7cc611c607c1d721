use crate::session::core::{Model, ModelState, Phase};

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Text rendition of the model, one entry per display line.
pub fn render_lines(model: &Model) -> Vec<String> {
    if model.phase() == Phase::Bootstrapping {
        return vec!["Model Loading...".to_string()];
    }

    let mut lines = vec![];

    if let Some(notice) = &model.notice {
        lines.push(format!("Error: {}", notice));
    }

    match &model.model_state {
        ModelState::Ready(handle) => lines.push(format!("Model: {}", handle.name)),
        ModelState::Failed(_) => lines.push("Model: unavailable".to_string()),
        ModelState::Unloaded | ModelState::Loading => {}
    }

    match &model.image {
        Some(image) => lines.push(format!("Image: {}", image)),
        None => lines.push("Image: none".to_string()),
    }

    if model.is_busy() {
        lines.push("Identifying...".to_string());
    }

    for (index, result) in model.results.iter().enumerate() {
        let mut line = format!(
            "{} Confidence level: {}",
            result.label,
            format_confidence(result.confidence)
        );
        if index == 0 {
            line.push_str(" Best Guess");
        }
        lines.push(line);
    }

    if !model.history.is_empty() {
        lines.push("Recent Images:".to_string());
        lines.extend(model.history.iter().map(|image| format!("  {}", image)));
    }

    lines
}
