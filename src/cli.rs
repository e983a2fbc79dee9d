//! CLI argument definition for mdclip.
//!
//! Paths are collected without an arity limit so that the "too many
//! arguments" case reaches `app::run`, which prints the usage line itself.
//! Hyphen-leading arguments are paths too, not unknown flags.

use clap::Parser;

/// Markdown to clipboard HTML converter.
#[derive(Parser)]
#[command(
    name = "mdclip",
    version,
    about = "Convert a markdown file to HTML and copy it to the clipboard"
)]
pub struct Cli {
    /// Markdown file to convert (prompted for when omitted).
    #[arg(value_name = "PATH", allow_hyphen_values = true, trailing_var_arg = true)]
    pub paths: Vec<String>,
}
