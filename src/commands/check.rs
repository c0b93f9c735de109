//! Implementation of the `gen-slaves check` command.
//!
//! Parses the template and renders it in memory for every configured
//! worker, so unbound fields surface without touching any output file.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{GenError, Result};
use crate::generator::NAME_FIELD;
use crate::template::{Template, vars};
use std::collections::HashSet;

/// Outcome of a successful template check.
#[derive(Debug)]
pub(crate) struct CheckReport {
    pub template: String,
    pub workers: usize,
    /// Number of distinct rendered outputs across all workers.
    pub distinct_outputs: usize,
}

/// Execute the `gen-slaves check` command.
pub fn cmd_check(config: Config, args: CheckArgs) -> Result<()> {
    let config = config.with_overrides(args.template, None);
    config.validate()?;

    let report = check_template(&config)?;

    println!("Template OK: {}", report.template);
    println!("Workers:     {}", report.workers);
    println!("Distinct:    {}", report.distinct_outputs);

    Ok(())
}

pub(crate) fn check_template(config: &Config) -> Result<CheckReport> {
    let template = Template::load(&config.template)?;

    let mut outputs = HashSet::new();
    for name in &config.names {
        let fields = vars([(NAME_FIELD, name.as_str())]);
        let rendered = template
            .render(&fields)
            .map_err(|source| GenError::TemplateCheck {
                target: name.clone(),
                source,
            })?;
        outputs.insert(rendered);
    }

    let unique_names: HashSet<&String> = config.names.iter().collect();
    if unique_names.len() > 1 && outputs.len() == 1 {
        tracing::warn!(
            template = template.name(),
            "template never references {{{{.{}}}}}; every worker will get identical output",
            NAME_FIELD
        );
    }

    Ok(CheckReport {
        template: config.template.display().to_string(),
        workers: config.names.len(),
        distinct_outputs: outputs.len(),
    })
}
