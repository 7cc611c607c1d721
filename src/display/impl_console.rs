use crate::display::interface::SessionDisplay;
use crate::session::core::Model;
use crate::session::render::render_lines;
use std::error::Error;
use std::io::Write;

pub struct SessionDisplayConsole {
    last_lines: Vec<String>,
}

impl SessionDisplayConsole {
    pub fn new() -> Self {
        Self { last_lines: vec![] }
    }
}

impl SessionDisplay for SessionDisplayConsole {
    fn render(&mut self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = render_lines(model);
        if lines == self.last_lines {
            return Ok(());
        }

        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut out = std::io::stdout().lock();

        writeln!(out, "┌{}┐", "─".repeat(width + 2))?;
        for line in &lines {
            writeln!(out, "│ {:<width$} │", line, width = width)?;
        }
        writeln!(out, "└{}┘", "─".repeat(width + 2))?;
        out.flush()?;

        self.last_lines = lines;
        Ok(())
    }
}
