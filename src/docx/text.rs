//! Text extraction primitives over the WordprocessingML tree.
//!
//! Every lookup here is a descendant query: paragraphs are found at any
//! depth (table cells, text boxes, content controls), and run text at any
//! depth below a paragraph.

use crate::model::{Row, Table};
use crate::namespaces::QName;
use crate::xml::XmlElement;

pub(crate) const PARAGRAPH: QName<'static> = QName::w("p");
pub(crate) const TEXT: QName<'static> = QName::w("t");
pub(crate) const TABLE: QName<'static> = QName::w("tbl");
pub(crate) const TABLE_ROW: QName<'static> = QName::w("tr");
pub(crate) const TABLE_CELL: QName<'static> = QName::w("tc");

/// Concatenate the `w:t` text below a paragraph, with no separator.
///
/// `w:t` elements without text content are skipped.
pub fn extract_runs_text(paragraph: &XmlElement) -> String {
    paragraph
        .find_all(TEXT)
        .filter_map(XmlElement::text)
        .collect()
}

/// Run text of every paragraph below `element` that has any, in order.
pub fn paragraph_texts(element: &XmlElement) -> impl Iterator<Item = String> + '_ {
    element
        .find_all(PARAGRAPH)
        .map(extract_runs_text)
        .filter(|text| !text.is_empty())
}

/// Newline-joined text of the non-empty paragraphs below `element`.
///
/// Used for the whole document body and for single table cells alike.
pub fn element_full_text(element: &XmlElement) -> String {
    paragraph_texts(element).collect::<Vec<_>>().join("\n")
}

/// Rows of a `w:tbl` element.
///
/// Rows and cells are matched at any depth, so a table nested in a cell
/// also contributes its rows to the enclosing table, as it does its text.
pub fn table_rows(table: &XmlElement) -> Table {
    table.find_all(TABLE_ROW).map(row_cells).collect()
}

fn row_cells(row: &XmlElement) -> Row {
    row.find_all(TABLE_CELL)
        .map(|cell| element_full_text(cell).trim().to_string())
        .collect()
}
