//! Selection markup editing.
//!
//! `SelectionMarkupEditor` wraps the current selection in a table's
//! delimiters and works out where the selection goes afterwards. It holds no
//! state besides its table: the host owns the field and writes the result
//! back.

use smol_str::SmolStr;

use crate::error::MarkupError;
use crate::table::{CursorPolicy, MarkupRule, MarkupTable};
use crate::text::{TextBuffer, char_to_byte};
use crate::types::{Edit, SelectionRange};

/// Operand used when the selection is a caret.
pub const PLACEHOLDER: &str = "text";

/// Applies markup operations from one table.
#[derive(Clone, Debug)]
pub struct SelectionMarkupEditor {
    table: MarkupTable,
}

/// Replacement computed for one operation, before it touches any buffer.
#[derive(Debug)]
struct Splice {
    replaced: SelectionRange,
    text: String,
    selection: SelectionRange,
}

impl SelectionMarkupEditor {
    pub fn new(table: MarkupTable) -> Self {
        Self { table }
    }

    pub fn markdown() -> Self {
        Self::new(MarkupTable::markdown())
    }

    pub fn bbcode() -> Self {
        Self::new(MarkupTable::bbcode())
    }

    pub fn table(&self) -> &MarkupTable {
        &self.table
    }

    /// Apply `op` to a buffer snapshot.
    ///
    /// Returns the new buffer and selection. No error carries a buffer: on
    /// `Err` the original `(buffer, selection)` pair is the result, and the
    /// caller keeps what it passed in.
    ///
    /// - `InvalidRange`: `selection` is reversed or runs past the buffer.
    ///   Checked first, so it wins over an unknown `op`.
    /// - `UnknownOperation`: `op` isn't in the table. This is a no-op rather
    ///   than a failure (see [`MarkupError::is_no_op`]).
    pub fn apply(
        &self,
        buffer: &str,
        selection: SelectionRange,
        op: &str,
    ) -> Result<Edit, MarkupError> {
        let len = buffer.chars().count();
        let selection = selection.validate(len)?;
        let start = char_to_byte(buffer, selection.start);
        let end = char_to_byte(buffer, selection.end);
        let splice = self.splice(&buffer[start..end], selection, op)?;

        let mut out = String::with_capacity(buffer.len() + splice.text.len());
        out.push_str(&buffer[..start]);
        out.push_str(&splice.text);
        out.push_str(&buffer[end..]);

        Ok(Edit::new(out, splice.selection))
    }

    /// Apply `op` to a host buffer in place, returning the new selection.
    ///
    /// The buffer is only written once the range and operation have both
    /// been accepted.
    pub fn apply_to<T: TextBuffer>(
        &self,
        buffer: &mut T,
        selection: SelectionRange,
        op: &str,
    ) -> Result<SelectionRange, MarkupError> {
        let selection = selection.validate(buffer.len_chars())?;
        let Some(selected) = buffer.slice(selection.into()) else {
            return Err(MarkupError::InvalidRange {
                start: selection.start,
                end: selection.end,
                len: buffer.len_chars(),
            });
        };
        let splice = self.splice(&selected, selection, op)?;
        buffer.replace(splice.replaced.into(), &splice.text);
        Ok(splice.selection)
    }

    fn splice(
        &self,
        selected: &str,
        selection: SelectionRange,
        op: &str,
    ) -> Result<Splice, MarkupError> {
        let Some(rule) = self.table.get(op) else {
            tracing::debug!(
                target: "quill::markup",
                op,
                table = self.table.name(),
                "unknown markup operation, leaving buffer unchanged"
            );
            return Err(MarkupError::UnknownOperation {
                id: SmolStr::new(op),
                table: SmolStr::new(self.table.name()),
            });
        };

        let operand = if selection.is_caret() {
            PLACEHOLDER
        } else {
            selected
        };
        let new_selection = landing(rule, selection, operand.chars().count());

        tracing::trace!(
            target: "quill::markup",
            op,
            start = selection.start,
            end = selection.end,
            new_start = new_selection.start,
            new_end = new_selection.end,
            "applied markup"
        );

        Ok(Splice {
            replaced: selection,
            text: format!("{}{}{}", rule.prefix, operand, rule.suffix),
            selection: new_selection,
        })
    }
}

/// Selection after inserting `rule` around an operand of `operand_len` chars.
///
/// `CollapseAfterPrefix` is computed from the original end offset. For a
/// caret that is the spot right after the marker; for a real selection it is
/// the end of the operand.
fn landing(rule: &MarkupRule, selection: SelectionRange, operand_len: usize) -> SelectionRange {
    let prefix_len = rule.prefix.chars().count();
    match rule.policy {
        CursorPolicy::WrapSelection => {
            let start = selection.start + prefix_len;
            SelectionRange::new(start, start + operand_len)
        }
        CursorPolicy::CollapseAfterPrefix => SelectionRange::caret(selection.end + prefix_len),
    }
}
