//! ui::output
//!
//! Relay of captured child output to the standard streams.
//!
//! # Design
//!
//! Successful output is written line by line, in order. Failing output is
//! written verbatim so nothing the collaborator said is lost. Writers are
//! generic so the dispatcher can be exercised against in-memory buffers.

use std::fmt::Display;
use std::io::{self, Write};

/// Write `text` one line at a time, preserving order.
///
/// Line terminators are normalized to `\n`. A trailing newline in `text`
/// does not produce an extra blank line. A reader that hangs up early
/// (`gitgate log | head`) ends the output without an error.
pub fn write_lines<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    let written = text
        .lines()
        .try_for_each(|line| writeln!(out, "{}", line))
        .and_then(|()| out.flush());
    ignore_broken_pipe(written)
}

/// Write `text` exactly as captured.
pub fn write_raw<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    let written = out.write_all(text.as_bytes()).and_then(|()| out.flush());
    ignore_broken_pipe(written)
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
