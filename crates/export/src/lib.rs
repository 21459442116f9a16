//! Plan export formatting.
//!
//! Pure text serializers for computed replenishment rows: CSV for file
//! download, TSV for clipboard copy, an HTML table for print preview. No IO
//! and no embedded timestamps; filename/date concerns stay with the caller.

pub mod csv;
pub mod table;

pub use csv::{to_csv, to_tsv};
pub use table::to_printable_table;

/// Whether the export covers one category or all of them.
///
/// The category column only appears in the all-categories context; a
/// single-category export already knows which category it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportScope {
    SingleCategory,
    AllCategories,
}

impl ExportScope {
    pub(crate) fn includes_category(self) -> bool {
        matches!(self, ExportScope::AllCategories)
    }
}
