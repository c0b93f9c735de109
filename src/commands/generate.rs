//! Implementation of the `gen-slaves generate` command.
//!
//! Loads the template once, then writes one configuration file per worker.
//! A template that fails to parse aborts the run before any file is opened.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generator::Generator;
use crate::template::Template;

/// Execute the `gen-slaves generate` command.
pub fn cmd_generate(config: Config, args: GenerateArgs) -> Result<()> {
    let config = config.with_overrides(args.template, args.output_dir);
    config.validate()?;

    let template = Template::load(&config.template)?;
    tracing::debug!(template = %config.template.display(), "template loaded");

    let written = Generator::from_config(&config, &template).run()?;

    tracing::info!(
        output_dir = %config.output_dir.display(),
        "generated {} worker configurations",
        written.len()
    );

    Ok(())
}
