//! Message loop for `transcript listen`
//!
//! Reads one JSON message per line (`{"action": "export_md"}` or
//! `{"action": "export_pdf"}`) and answers each with one JSON line. A failed
//! export is reported and the loop keeps going; only I/O on the streams
//! themselves ends it early.

use crate::session::Session;
use serde_json::json;
use std::io::{self, BufRead, Write};
use transcript_babel::{Action, ExportError};

/// Serve messages from `input` until it is exhausted. Returns the number of
/// messages that failed.
pub fn run(session: &Session, input: impl BufRead, mut output: impl Write) -> io::Result<usize> {
    let mut failures = 0;

    for line in input.lines() {
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        let reply = match handle(session, message) {
            Ok((action, path)) => json!({
                "status": "ok",
                "action": action.as_str(),
                "path": path,
            }),
            Err(err) => {
                failures += 1;
                tracing::warn!("export failed: {err}");
                json!({
                    "status": "error",
                    "error": err.to_string(),
                })
            }
        };
        writeln!(output, "{reply}")?;
        output.flush()?;
    }

    Ok(failures)
}

fn handle(session: &Session, message: &str) -> Result<(Action, String), ExportError> {
    let action = Action::parse_message(message)?;
    let artifact = session.run(action)?;
    let path = session.save(artifact)?;
    Ok((action, path.display().to_string()))
}
