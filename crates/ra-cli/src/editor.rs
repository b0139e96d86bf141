//! Line input for the play loop.
//!
//! The loop reads through the [`LineEditor`] trait so it can run against
//! rustyline in a terminal or against a script in tests.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D, or input ran out.
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, String>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Terminal line editor backed by rustyline.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    /// Create a new editor attached to the terminal.
    pub fn new() -> Result<Self, String> {
        let editor =
            DefaultEditor::new().map_err(|e| format!("cannot open line editor: {e}"))?;
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(format!("cannot read input: {e}")),
        }
    }

    fn add_history(&mut self, line: &str) {
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line);
        }
    }
}
