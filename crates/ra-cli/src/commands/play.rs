use std::io::{self, Write};

use ra_fiction::FictionSession;
use tracing::{debug, warn};

use crate::config::PlayConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render;

pub fn run(config: &PlayConfig) -> Result<(), String> {
    let world = super::build_world(config.seed)?;
    let session = FictionSession::new(world).map_err(|e| format!("failed to start session: {e}"))?;
    let mut editor = RustylineEditor::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(session, &mut editor, &mut out, config.width)
}

/// Drive a session until it ends or input runs out.
pub fn run_session<E: LineEditor, W: Write>(
    mut session: FictionSession,
    editor: &mut E,
    out: &mut W,
    width: usize,
) -> Result<(), String> {
    let welcome = session
        .welcome()
        .map_err(|e| format!("failed to start session: {e}"))?;
    render::print_narration(out, &welcome, width).map_err(|e| e.to_string())?;

    while !session.is_over() {
        let line = match editor.read_line(session.prompt())? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted | ReadResult::Eof => {
                debug!("input closed");
                let closing = session.close();
                render::print_narration(out, &closing, width).map_err(|e| e.to_string())?;
                break;
            }
        };
        editor.add_history(&line);

        match session.process(&line) {
            Ok(narration) => {
                render::print_narration(out, &narration, width).map_err(|e| e.to_string())?;
            }
            Err(e) if e.is_soft() => {
                render::print_soft_error(out, &e.to_string(), width).map_err(|e| e.to_string())?;
            }
            Err(e) => {
                warn!(error = %e, "session failed");
                return Err(e.to_string());
            }
        }
    }

    Ok(())
}
