use crate::image_classifier::models::model_config::ModelConfig;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierConfig {
    Fake { load_latency: Duration },
    Onnx(ModelConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Gui,
    Console,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    /// `None` keeps every image ever selected.
    pub history_limit: Option<usize>,
    pub classifier: ClassifierConfig,
    pub top_k: usize,
    pub fetch_timeout: Duration,
    pub frontend: Frontend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: local_timezone(),
            history_limit: None,
            classifier: ClassifierConfig::Fake {
                load_latency: Duration::from_secs(1),
            },
            top_k: 3,
            fetch_timeout: Duration::from_secs(10),
            frontend: Frontend::Gui,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(onnx_model_path) = var("IMAGE_IDENTIFY_MODEL") {
            config.classifier = ClassifierConfig::Onnx(ModelConfig {
                onnx_model_path,
                labels_path: var("IMAGE_IDENTIFY_LABELS")
                    .unwrap_or_else(|| "./models/imagenet_labels.txt".to_string()),
                input_shape: (224, 224),
            });
        }

        if let Some(limit) = var("IMAGE_IDENTIFY_HISTORY_LIMIT").and_then(|v| v.parse().ok()) {
            config.history_limit = Some(limit);
        }

        if let Some(top_k) = var("IMAGE_IDENTIFY_TOP_K").and_then(|v| v.parse().ok()) {
            config.top_k = top_k;
        }

        if let Some(frontend) = var("IMAGE_IDENTIFY_FRONTEND") {
            if frontend.eq_ignore_ascii_case("console") {
                config.frontend = Frontend::Console;
            }
        }

        config
    }
}

fn local_timezone() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
