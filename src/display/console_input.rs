use crate::library::logger::interface::Logger;
use crate::session::handle::SessionHandle;
use std::io::BufRead;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    File(String),
    Url(String),
    Clear,
    Identify,
    Retry,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "file" => Some(Command::File(rest.to_string())),
        "url" => Some(Command::Url(rest.to_string())),
        "clear" => Some(Command::Clear),
        "identify" => Some(Command::Identify),
        "retry" => Some(Command::Retry),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Reads commands until `quit` or end of input, then ends the session.
pub fn run_console_input(
    session: &SessionHandle,
    input: impl BufRead,
    logger: Arc<dyn Logger + Send + Sync>,
) {
    let logger = logger.with_namespace("console");
    let _ = logger.info("Commands: file <path>, url <text>, clear, identify, retry, quit");

    for line in input.lines() {
        let Ok(line) = line else { break };

        match parse_command(&line) {
            Some(Command::File(path)) if path.is_empty() => {
                session.upload_files(vec![]);
            }
            Some(Command::File(path)) => match std::fs::read(&path) {
                Ok(bytes) => {
                    session.upload_files(vec![bytes]);
                }
                Err(e) => {
                    let _ = logger.error(&format!("Could not read {}: {}", path, e));
                }
            },
            Some(Command::Url(text)) => {
                session.enter_url(&text);
            }
            Some(Command::Clear) => {
                session.upload_files(vec![]);
            }
            Some(Command::Identify) => {
                session.identify();
            }
            Some(Command::Retry) => {
                session.retry_model_load();
            }
            Some(Command::Quit) => break,
            None if line.trim().is_empty() => {}
            None => {
                let _ = logger.error(&format!("Unknown command: {}", line.trim()));
            }
        }
    }

    session.shutdown();
}
