//! Word administration CLI commands.

use super::output_error;
use crate::Result;
use crate::models::{NewWordRequest, RemoveWordRequest, UpdateWordRequest};
use crate::services::ServiceContainer;
use std::io::Write;

/// Lists every sensitive word as `id<TAB>word`.
///
/// # Errors
///
/// Returns an error if the word list cannot be read or written.
pub fn cmd_words_list(services: &ServiceContainer, out: &mut impl Write) -> Result<()> {
    let words = services.words().get_all()?;
    if words.is_empty() {
        return writeln!(out, "No sensitive words configured.").map_err(output_error);
    }

    for word in &words {
        writeln!(out, "{}\t{}", word.id, word.word).map_err(output_error)?;
    }
    writeln!(out, "\n{} word(s)", words.len()).map_err(output_error)
}

/// Adds a sensitive word.
///
/// # Errors
///
/// Returns an error if the word is blank, already present, or cannot be
/// stored.
pub fn cmd_words_add(services: &ServiceContainer, word: &str, out: &mut impl Write) -> Result<()> {
    let request = NewWordRequest::new(Some(word))?;
    services.words().add(&request)?;
    writeln!(out, "Added '{}'", request.word()).map_err(output_error)
}

/// Renames a sensitive word.
///
/// # Errors
///
/// Returns an error if either word is blank, the target is missing, the new
/// text collides with another entry, or the write fails.
pub fn cmd_words_update(
    services: &ServiceContainer,
    id: Option<i64>,
    from_word: &str,
    to_word: &str,
    out: &mut impl Write,
) -> Result<()> {
    let request = UpdateWordRequest::new(id, Some(from_word), Some(to_word))?;
    let updated = services.words().update(&request)?;
    writeln!(
        out,
        "Updated #{}: '{}' -> '{}'",
        updated.id,
        request.from_word(),
        updated.word
    )
    .map_err(output_error)
}

/// Removes a sensitive word by id or text.
///
/// # Errors
///
/// Returns an error if neither id nor word is given, the target is missing,
/// or the delete fails.
pub fn cmd_words_remove(
    services: &ServiceContainer,
    id: Option<i64>,
    word: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let request = RemoveWordRequest::new(id, word)?;
    let removed = services.words().remove(&request)?;
    writeln!(out, "Removed #{} '{}'", removed.id, removed.word).map_err(output_error)
}
