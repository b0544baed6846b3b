//! Error types for markup operations.

use miette::Diagnostic;
use smol_str::SmolStr;

#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Selection offsets violate `start <= end <= len`.
    #[error("selection {start}..{end} is out of range for a buffer of {len} chars")]
    #[diagnostic(
        code(quill::invalid_range),
        help("offsets are chars, and start must not exceed end")
    )]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Operation id isn't in the editor's table. Nothing was changed.
    #[error("unknown markup operation `{id}` in table `{table}`")]
    #[diagnostic(code(quill::unknown_operation))]
    UnknownOperation { id: SmolStr, table: SmolStr },
}

impl MarkupError {
    /// Whether the caller can treat this as "nothing happened".
    ///
    /// Hosts pass toolbar button ids straight through, so an unknown id
    /// leaves the field as it was instead of failing.
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::UnknownOperation { .. })
    }
}
