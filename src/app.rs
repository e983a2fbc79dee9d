//! The run flow: resolve the path, read, convert, copy, then maybe pause.
//!
//! Every function here takes its input, output and capabilities as
//! parameters. `main.rs` passes the real stdin/stdout, clipboard and
//! launch detector; tests pass in-memory stand-ins.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};

use crate::clipboard::ClipboardWriter;
use crate::convert::markdown_to_html;
use crate::launch::LaunchContextDetector;

/// Printed for a wrong argument count and after `File not found`.
pub const USAGE: &str = "Usage: mdclip [path to .md file]";
/// Prompt shown when no path argument was given.
pub const PATH_PROMPT: &str = "Path to .md file: ";
pub const FILE_NOT_FOUND: &str = "File not found";
pub const COPIED: &str = "Copied HTML to clipboard!";
pub const PAUSE_PROMPT: &str = "Press ENTER to continue...";

/// How a run ended, when it ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The HTML is on the clipboard.
    Copied,
    /// Wrong argument count; usage printed.
    Usage,
    /// The path does not exist; usage printed.
    FileNotFound,
}

/// Runs one conversion.
///
/// The two recognized aborts are returned as `Outcome`s. Any other failure
/// (unreadable file, clipboard unavailable, closed stdin at the prompt) is
/// returned as an error.
pub fn run<R, W, C>(
    args: &[String],
    input: &mut R,
    out: &mut W,
    clipboard: &mut C,
) -> color_eyre::Result<Outcome>
where
    R: BufRead,
    W: Write,
    C: ClipboardWriter,
{
    let Some(path) = resolve_path(args, input, out)? else {
        log::info!("{} path arguments given, expected at most 1", args.len());
        writeln!(out, "{USAGE}")?;
        return Ok(Outcome::Usage);
    };

    let markdown = match read_markdown(Path::new(&path)) {
        Ok(markdown) => markdown,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("{path:?} does not exist");
            writeln!(out, "{FILE_NOT_FOUND}")?;
            writeln!(out, "{USAGE}")?;
            return Ok(Outcome::FileNotFound);
        }
        Err(err) => return Err(err).wrap_err_with(|| format!("failed to read {path}")),
    };

    let html = markdown_to_html(&markdown);
    log::debug!(
        "converted {} bytes of markdown into {} bytes of HTML",
        markdown.len(),
        html.len()
    );

    clipboard.set(&html)?;
    writeln!(out, "{COPIED}")?;
    Ok(Outcome::Copied)
}

/// Picks the markdown path from the arguments, prompting when there are none.
///
/// Returns `None` when more than one path was given; nothing is read in
/// that case. A prompted path is used as typed, minus the line terminator.
pub fn resolve_path<R, W>(
    args: &[String],
    input: &mut R,
    out: &mut W,
) -> color_eyre::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    match args {
        [] => {
            write!(out, "{PATH_PROMPT}")?;
            out.flush()?;
            let line = read_line(input)?
                .ok_or_else(|| eyre!("input closed before a path was entered"))?;
            log::debug!("path {line:?} read from prompt");
            Ok(Some(line))
        }
        [path] => {
            log::debug!("path {path:?} taken from arguments");
            Ok(Some(path.clone()))
        }
        _ => Ok(None),
    }
}

/// Blocks for ENTER when the process was launched standalone.
///
/// Returns whether it paused. A closed stdin ends the pause like ENTER would.
pub fn pause_if_needed<D, R, W>(detector: &D, input: &mut R, out: &mut W) -> io::Result<bool>
where
    D: LaunchContextDetector,
    R: BufRead,
    W: Write,
{
    if !detector.launched_standalone() {
        return Ok(false);
    }
    writeln!(out)?;
    write!(out, "{PAUSE_PROMPT}")?;
    out.flush()?;
    read_line(input)?;
    Ok(true)
}

/// Reads the whole file as UTF-8 text.
fn read_markdown(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Reads one line without its `\n` or `\r\n` terminator.
///
/// Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
