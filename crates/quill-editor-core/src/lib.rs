//! quill-editor-core: Pure Rust editor logic without framework dependencies.
//!
//! This crate provides:
//! - `SelectionMarkupEditor` - wraps a selection in markup from a `MarkupTable`
//! - `MarkupTable` - built-in Markdown and BBCode tables, or your own
//! - `TextBuffer` trait and `EditorRope` for editing host buffers in place
//! - Word count / reading time and reply quoting helpers

pub mod editor;
pub mod error;
pub mod quote;
pub mod stats;
pub mod table;
pub mod text;
pub mod types;

pub use editor::{PLACEHOLDER, SelectionMarkupEditor};
pub use error::MarkupError;
pub use quote::{quote_block, quote_into, quote_reply};
pub use smol_str::SmolStr;
pub use stats::{EditorStats, reading_time_minutes, word_count};
pub use table::{CursorPolicy, MarkupRule, MarkupTable};
pub use text::{EditorRope, TextBuffer};
pub use types::{Edit, SelectionRange};
