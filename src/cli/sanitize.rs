//! Sanitize CLI command.

use super::output_error;
use crate::Result;
use crate::models::Phrase;
use crate::services::ServiceContainer;
use std::io::Write;

/// Sanitizes `phrase` and prints the result.
///
/// # Errors
///
/// Returns an error if the phrase is blank or the word list cannot be read.
pub fn cmd_sanitize(services: &ServiceContainer, phrase: &str, out: &mut impl Write) -> Result<()> {
    let sanitized = services.sanitizer().sanitize(Phrase::new(phrase)?)?;
    writeln!(out, "{sanitized}").map_err(output_error)
}
