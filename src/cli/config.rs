//! Config CLI command.

use super::output_error;
use crate::Result;
use crate::config::CensorConfig;
use std::io::Write;

/// Prints the resolved configuration as TOML, or a one-line summary when
/// `show` is not set.
///
/// # Errors
///
/// Returns an error if the configuration cannot be rendered or written.
pub fn cmd_config(config: &CensorConfig, show: bool, out: &mut impl Write) -> Result<()> {
    if show {
        let rendered = config.to_toml_string()?;
        write!(out, "{rendered}").map_err(output_error)?;
        return Ok(());
    }

    writeln!(
        out,
        "database: {}\nlisten:   {}:{}\n\nUse --show to print the full configuration.",
        config.database_path.display(),
        config.server.host,
        config.server.port
    )
    .map_err(output_error)
}
