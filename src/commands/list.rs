//! Implementation of the `gen-slaves list` command.

use crate::config::Config;
use crate::error::Result;

/// Execute the `gen-slaves list` command.
///
/// Prints one line per worker, in generation order: the name and the file
/// it would be written to.
pub fn cmd_list(config: &Config) -> Result<()> {
    config.validate()?;
    print!("{}", format_listing(config));
    Ok(())
}

pub(crate) fn format_listing(config: &Config) -> String {
    let width = config.names.iter().map(|n| n.len()).max().unwrap_or(0);

    let mut out = String::new();
    for name in &config.names {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            name,
            config.output_path(name).display(),
            width = width
        ));
    }
    out
}
