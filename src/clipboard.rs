//! Clipboard delivery: the `ClipboardWriter` seam and its system implementation.
//!
//! The rest of the crate only sees the trait, so the run flow can be tested
//! with an in-memory writer and no display server.

use arboard::Clipboard;
use color_eyre::eyre::WrapErr;

/// Destination for the rendered HTML.
pub trait ClipboardWriter {
    /// Replaces the clipboard content with `text`.
    fn set(&mut self, text: &str) -> color_eyre::Result<()>;
}

/// The operating system's general-purpose clipboard.
///
/// The clipboard is opened on each `set` call rather than up front, so
/// runs that abort early never touch it. Text is stored as a plain-text
/// entry: pasting yields the HTML source, not rendered rich text.
///
/// On Linux the content is owned by this process; arboard hands it to a
/// running clipboard manager when the `Clipboard` is dropped.
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn set(&mut self, text: &str) -> color_eyre::Result<()> {
        let mut clipboard = Clipboard::new().wrap_err("failed to open the system clipboard")?;
        clipboard
            .set_text(text)
            .wrap_err("failed to copy HTML to the clipboard")?;
        log::debug!("clipboard now holds {} bytes", text.len());
        Ok(())
    }
}
