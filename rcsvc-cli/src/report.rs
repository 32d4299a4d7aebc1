//! User-facing error output

use colored::*;
use std::fmt::Display;

/// Name the dispatcher reports itself as
pub const APPLET: &str = "rc-service";

/// Print an error line to stderr in the ` * applet: message` style
pub fn error(message: impl Display) {
    eprintln!(" {} {}: {}", "*".red().bold(), APPLET, message);
}
