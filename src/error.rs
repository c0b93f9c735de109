//! Error types for the gen-slaves CLI.
//!
//! Uses thiserror for derive macros. Generation failures carry the worker
//! name and the lifecycle stage that failed so the fatal diagnostic can
//! name both.

use crate::exit_codes;
use crate::template::{ParseError, RenderError};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Step of a single output file's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Open,
    Render,
    Close,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Open => "open",
            Stage::Render => "render",
            Stage::Close => "close",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for gen-slaves operations.
#[derive(Error, Debug)]
pub enum GenError {
    /// Invalid arguments or fleet config.
    #[error("{0}")]
    UserError(String),

    /// The template source could not be read.
    #[error("failed to read template '{}': {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template source is malformed.
    #[error("failed to parse template '{}': {source}", .path.display())]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A dry render of the template failed for a worker.
    #[error("template check failed for {target}: {source}")]
    TemplateCheck {
        target: String,
        #[source]
        source: RenderError,
    },

    /// The output file could not be created or opened for writing.
    #[error("failed to generate {target} (stage: open, path: '{}'): {source}", .path.display())]
    Open {
        target: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendering into the output file failed.
    #[error("failed to generate {target} (stage: render, path: '{}'): {source}", .path.display())]
    Render {
        target: String,
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// Flushing or closing the output file failed.
    #[error(
        "failed to write configuration for {target} (stage: close, path: '{}'): {source}",
        .path.display()
    )]
    Close {
        target: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::UserError(_) => exit_codes::USER_ERROR,
            GenError::TemplateRead { .. }
            | GenError::TemplateParse { .. }
            | GenError::TemplateCheck { .. } => exit_codes::TEMPLATE_FAILURE,
            GenError::Open { .. } | GenError::Render { .. } | GenError::Close { .. } => {
                exit_codes::GENERATION_FAILURE
            }
        }
    }

    /// The lifecycle stage that failed, for generation errors.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            GenError::Open { .. } => Some(Stage::Open),
            GenError::Render { .. } => Some(Stage::Render),
            GenError::Close { .. } => Some(Stage::Close),
            _ => None,
        }
    }

    /// The worker name the error is about, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            GenError::Open { target, .. }
            | GenError::Render { target, .. }
            | GenError::Close { target, .. }
            | GenError::TemplateCheck { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for gen-slaves operations.
pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn open_error(target: &str) -> GenError {
        GenError::Open {
            target: target.to_string(),
            path: PathBuf::from(format!("{target}.yaml")),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        }
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = GenError::UserError("bad config".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.stage(), None);
        assert_eq!(err.target(), None);
    }

    #[test]
    fn template_errors_have_template_exit_code() {
        let err = GenError::TemplateRead {
            path: PathBuf::from("slave.yaml.tmpl"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);

        let err = GenError::TemplateParse {
            path: PathBuf::from("slave.yaml.tmpl"),
            source: crate::template::Template::parse("t", "{{").unwrap_err(),
        };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
        assert_eq!(err.stage(), None);
    }

    #[test]
    fn generation_errors_carry_stage_and_target() {
        let err = open_error("slave-mingw");
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
        assert_eq!(err.stage(), Some(Stage::Open));
        assert_eq!(err.target(), Some("slave-mingw"));

        let err = GenError::Render {
            target: "alpha".to_string(),
            path: PathBuf::from("alpha.yaml"),
            source: RenderError::Exec("can't evaluate field Missing".to_string()),
        };
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
        assert_eq!(err.stage(), Some(Stage::Render));
        assert_eq!(err.target(), Some("alpha"));

        let err = GenError::Close {
            target: "beta".to_string(),
            path: PathBuf::from("beta.yaml"),
            source: io::Error::other("no space left on device"),
        };
        assert_eq!(err.stage(), Some(Stage::Close));
    }

    #[test]
    fn error_messages_name_target_stage_and_cause() {
        let msg = open_error("slave-mingw").to_string();
        assert!(msg.contains("slave-mingw"));
        assert!(msg.contains("stage: open"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Open.to_string(), "open");
        assert_eq!(Stage::Render.to_string(), "render");
        assert_eq!(Stage::Close.to_string(), "close");
    }
}
