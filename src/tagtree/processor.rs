//! File processing API
//!
//! Glue between the filesystem and the pure core:
//!
//! ```rust,ignore
//! use tagtree::tagtree::formats::FormatRegistry;
//! use tagtree::tagtree::processor::process_file;
//!
//! let registry = FormatRegistry::with_defaults();
//! process_file("page.html", "tree.html", "html", &registry)?;
//! ```
//!
//! The formatter is resolved before anything is read, and the output is
//! produced in memory and written with a single call, so a failed run never
//! leaves a partial output file behind.

use crate::tagtree::ast::Node;
use crate::tagtree::building::build_tree;
use crate::tagtree::formats::{FormatError, FormatRegistry};
use crate::tagtree::lexing::tokenize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    ReadFailed(PathBuf),
    WriteFailed(PathBuf),
    Format(FormatError),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::ReadFailed(path) => {
                write!(f, "I/O error: file {} could not be read", path.display())
            }
            ProcessingError::WriteFailed(path) => write!(
                f,
                "I/O error: file {} could not be opened for writing",
                path.display()
            ),
            ProcessingError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

/// Tokenize and rebuild the node tree of a source text.
pub fn decompose(source: &str) -> Vec<Node> {
    build_tree(&tokenize(source))
}

/// Decompose source text and serialize the tree in the named format.
pub fn process_str(
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let formatter = registry.require(format)?;
    Ok(formatter.serialize(&decompose(source))?)
}

/// Read `input`, decompose it, and write the formatted tree to `output`.
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    format: &str,
    registry: &FormatRegistry,
) -> Result<(), ProcessingError> {
    let input = input.as_ref();
    let output = output.as_ref();
    let formatter = registry.require(format)?;

    let source = fs::read_to_string(input).map_err(|e| {
        tracing::warn!(path = %input.display(), error = %e, "failed to read input");
        ProcessingError::ReadFailed(input.to_path_buf())
    })?;

    let rendered = formatter.serialize(&decompose(&source))?;

    fs::write(output, rendered).map_err(|e| {
        tracing::warn!(path = %output.display(), error = %e, "failed to write output");
        ProcessingError::WriteFailed(output.to_path_buf())
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        output_format = format,
        "wrote tree"
    );
    Ok(())
}
