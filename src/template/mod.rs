//! Template engine for worker configuration files.
//!
//! Worker manifests are written in Go `text/template` syntax and rendered
//! with `gtmpl`. A template is parsed once, when it is loaded, so a malformed
//! template is rejected before any output file is opened.
//!
//! The render context is a struct-like object holding the bound fields.
//! Referencing a field that has no binding (e.g., `{{.Missing}}`) is a
//! render error rather than an empty substitution.


use crate::error::{GenError, Result};
use gtmpl::{Context, Value};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Field bindings a template is rendered against.
pub type Fields = HashMap<String, String>;

/// The template source is not valid Go template syntax.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ParseError(String);

/// Error type for template rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Executing the template failed, e.g. on an unbound field.
    #[error("{0}")]
    Exec(String),

    /// Writing rendered bytes to the destination failed.
    #[error("failed to write rendered output: {0}")]
    Io(#[from] io::Error),
}

/// An immutable, pre-parsed template.
pub struct Template {
    name: String,
    inner: gtmpl::Template,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template").field("name", &self.name).finish()
    }
}

impl Template {
    /// Parse a template from source text.
    ///
    /// `name` is only used for diagnostics.
    pub fn parse(name: impl Into<String>, source: &str) -> std::result::Result<Self, ParseError> {
        let mut inner = gtmpl::Template::default();
        inner
            .parse(source)
            .map_err(|e| ParseError(e.to_string()))?;

        Ok(Self {
            name: name.into(),
            inner,
        })
    }

    /// Read and parse a template file. The template is named after the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path).map_err(|source| GenError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::parse(name, &source).map_err(|source| GenError::TemplateParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template to a string.
    pub fn render(&self, fields: &Fields) -> std::result::Result<String, RenderError> {
        self.inner
            .render(&context(fields))
            .map_err(|e| RenderError::Exec(e.to_string()))
    }

    /// Render the template and write the result.
    ///
    /// Nothing is written when rendering fails.
    pub fn render_to<W: Write + ?Sized>(
        &self,
        fields: &Fields,
        out: &mut W,
    ) -> std::result::Result<(), RenderError> {
        let rendered = self.render(fields)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Build a struct-like context: unknown fields fail instead of rendering
/// `<no value>` as map lookups do.
fn context(fields: &Fields) -> Context {
    let object: HashMap<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Context::from(Value::Object(object))
}

/// Helper to create a field map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> Fields
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
