use crate::library::logger::interface::{join_namespace, Logger};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: LogLevel,
    pub namespace: Option<String>,
    pub message: String,
}

/// Keeps every line in memory. Namespaced children share the same buffer.
#[derive(Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.level == LogLevel::Error)
            .map(|line| line.message)
            .collect()
    }

    fn push(
        &self,
        level: LogLevel,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| "logger buffer poisoned")?;
        lines.push(LogLine {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push(LogLevel::Info, message)
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push(LogLevel::Error, message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerFake {
            namespace: Some(join_namespace(&self.namespace, namespace)),
            lines: self.lines.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_children_share_the_buffer() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("session").with_namespace("effect");

        let _ = logger.info("starting");
        let _ = child.error("load failed");

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].namespace, None);
        assert_eq!(lines[1].namespace.as_deref(), Some("session:effect"));
        assert_eq!(lines[1].level, LogLevel::Error);
        assert_eq!(logger.errors(), vec!["load failed".to_string()]);
    }
}
