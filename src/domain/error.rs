//! Domain-level errors (no infrastructure concerns)

use thiserror::Error;

/// Failures while turning raw config text into a command tree.
///
/// All variants abort the whole conversion; no partial tree is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeBuildError {
    #[error("input is empty or whitespace only")]
    EmptyInput,

    #[error("inconsistent indentation at line {line} ({reason}): {text:?}")]
    InconsistentIndent {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("duplicate command at line {line}: {command:?}")]
    DuplicateCommand { command: String, line: usize },
}

/// Result type for tree construction.
pub type TreeBuildResult<T> = Result<T, TreeBuildError>;
