//! Render logic for the Table kind.

use super::RenderContext;
use super::types::Table;
use crate::fields::{FieldValue, TableRow};
use crate::render::Node;

impl Table {
    /// Render header row plus body rows.
    ///
    /// In preview with a resolved table field: one row per source row, each
    /// cell reading the column's `source_field` key (missing keys render
    /// empty). Otherwise: exactly `static_row_count` empty rows.
    pub fn render(&self, ctx: &RenderContext) -> Node {
        let source_rows: Option<&[TableRow]> = if ctx.is_preview() {
            ctx.resolver
                .resolve_table(&self.table_mapping)
                .and_then(|field| match &field.value {
                    FieldValue::Table { rows, .. } => Some(rows.as_slice()),
                    _ => None,
                })
        } else {
            None
        };

        let body: Vec<Node> = match source_rows {
            Some(rows) => rows.iter().map(|row| self.data_row(row)).collect(),
            None => (0..self.static_row_count).map(|_| self.empty_row()).collect(),
        };

        let header = (!self.hide_header).then(|| {
            Node::div("tp-table__header").children(
                self.columns
                    .iter()
                    .map(|col| Node::div("tp-table__th").with_text(&col.label)),
            )
        });

        Node::div("tp-table")
            .class_if(ctx.flush, "is-flush")
            .child_opt(header)
            .children(body)
    }

    fn data_row(&self, row: &TableRow) -> Node {
        Node::div("tp-table__row").children(self.columns.iter().map(|col| {
            let cell = row.get(&col.source_field).map(String::as_str).unwrap_or("");
            Node::div("tp-table__td").with_text(cell)
        }))
    }

    fn empty_row(&self) -> Node {
        Node::div("tp-table__row")
            .children(self.columns.iter().map(|_| Node::div("tp-table__td")))
    }
}
