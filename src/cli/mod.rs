//! CLI command implementations.
//!
//! Each command writes its human-readable output to the supplied writer so
//! the binary can hand in stdout and tests can hand in a buffer.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `serve` | Run the HTTP API |
//! | `sanitize` | Mask sensitive words in a phrase |
//! | `words list` | List the sensitive words |
//! | `words add` | Add a sensitive word |
//! | `words update` | Rename a sensitive word |
//! | `words remove` | Remove a sensitive word |
//! | `config` | Show the resolved configuration |
//!
//! # Example Usage
//!
//! ```bash
//! wordcensor words add bad
//! wordcensor sanitize "This is BAD"
//! wordcensor serve --port 3000
//! ```

mod config;
mod sanitize;
mod serve;
mod words;

pub use config::cmd_config;
pub use sanitize::cmd_sanitize;
pub use serve::cmd_serve;
pub use words::{cmd_words_add, cmd_words_list, cmd_words_remove, cmd_words_update};

use crate::Error;

#[allow(clippy::needless_pass_by_value)]
fn output_error(e: std::io::Error) -> Error {
    Error::operation("write_output", e)
}
