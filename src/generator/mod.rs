//! Batch generation of worker configuration files.
//!
//! For each worker name, in order, the generator opens `<name>.yaml`,
//! renders the template into it with `Name` bound to the worker name, and
//! closes the file. The first failure aborts the run. Files written for
//! earlier names are left in place; re-running regenerates every file from
//! the start of the list.

mod output;


use crate::config::Config;
use crate::error::{GenError, Result};
use crate::template::{Template, vars};
use std::path::{Path, PathBuf};

pub use output::OutputFile;

/// Field the worker name is bound to when rendering.
pub const NAME_FIELD: &str = "Name";

/// Path of the output file for `name` inside `output_dir`.
pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.yaml", name))
}

/// Renders one file per worker name from a shared template.
#[derive(Debug)]
pub struct Generator<'a> {
    names: &'a [String],
    template: &'a Template,
    output_dir: &'a Path,
}

impl<'a> Generator<'a> {
    pub fn new(names: &'a [String], template: &'a Template, output_dir: &'a Path) -> Self {
        Self {
            names,
            template,
            output_dir,
        }
    }

    /// Build a generator for the names and output directory in `config`.
    pub fn from_config(config: &'a Config, template: &'a Template) -> Self {
        Self::new(&config.names, template, &config.output_dir)
    }

    /// Generate every file, stopping at the first failure.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PathBuf>)` - Paths written, in name order
    /// * `Err(GenError::Open | Render | Close)` - The first failing name and stage
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.names.len());
        for name in self.names {
            written.push(self.generate_one(name)?);
        }
        Ok(written)
    }

    /// Open, render and close the file for a single name.
    fn generate_one(&self, name: &str) -> Result<PathBuf> {
        let path = output_path(self.output_dir, name);

        let mut out = OutputFile::create(&path).map_err(|source| GenError::Open {
            target: name.to_string(),
            path: path.clone(),
            source,
        })?;

        let fields = vars([(NAME_FIELD, name)]);
        self.template
            .render_to(&fields, &mut out)
            .map_err(|source| GenError::Render {
                target: name.to_string(),
                path: path.clone(),
                source,
            })?;

        out.close().map_err(|source| GenError::Close {
            target: name.to_string(),
            path: path.clone(),
            source,
        })?;

        tracing::debug!(worker = name, path = %path.display(), "rendered worker configuration");
        Ok(path)
    }
}
