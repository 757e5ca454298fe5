//! Render logic for row kinds: SingleRow, Row, FourFieldGrid, Signature.
//!
//! All row kinds share one structure: a bordered row of label/value
//! columns. In preview the value cell shows the resolved binding; while
//! editing it shows the binding badge.

use super::RenderContext;
use super::types::{FieldSlot, FourFieldGrid, Row, Signature, SingleRow};
use crate::fields::NO_BINDING;
use crate::render::Node;

/// Binding indicator shown while editing. Suppressed for the sentinel.
pub(super) fn badge(mapping: &str) -> Option<Node> {
    (mapping != NO_BINDING).then(|| Node::span("tp-link").with_text(format!("[{}]", mapping)))
}

/// Label cell for a slot, or `None` when hidden.
///
/// Inline labels read `Label:`; header-styled labels drop the colon and
/// are centered on a solid background.
pub(super) fn label_cell(
    base: &str,
    label: &str,
    hide: bool,
    as_header: bool,
) -> Option<Node> {
    if hide {
        return None;
    }
    let text = if as_header {
        label.to_string()
    } else {
        format!("{}:", label)
    };
    Some(
        Node::div(base)
            .class_if(as_header, &format!("{}--header", base))
            .with_text(text),
    )
}

/// Column for one slot; `value` renders the value cell's content.
fn slot_column(slot: &FieldSlot, value_class: Option<&str>, value: Node) -> Node {
    let value_cell = match value_class {
        Some(extra) => Node::div("tp-row__value").class(extra),
        None => Node::div("tp-row__value"),
    }
    .child(value);

    Node::div("tp-row__col")
        .class_if(slot.stacked, "tp-row__col--stacked")
        .child_opt(label_cell(
            "tp-row__label",
            &slot.label,
            slot.hide_label,
            slot.label_as_header,
        ))
        .child(value_cell)
}

/// Value content for a plain slot: resolved text or badge.
fn slot_value(slot: &FieldSlot, ctx: &RenderContext) -> Node {
    match ctx.scalar(&slot.mapping) {
        Some(value) => Node::text(value),
        None => Node::span("tp-row__badge").child_opt(badge(&slot.mapping)),
    }
}

fn row_shell(flush: bool, custom_height: Option<u32>) -> Node {
    let row = Node::div("tp-row").class_if(flush, "is-flush");
    match RenderContext::height_px(custom_height) {
        Some(h) => row.style("height", h),
        None => row,
    }
}

fn two_slot_row(left: &FieldSlot, right: &FieldSlot, flush: bool, custom_height: Option<u32>, ctx: &RenderContext) -> Node {
    row_shell(flush, custom_height)
        .child(slot_column(left, None, slot_value(left, ctx)))
        .child(slot_column(right, None, slot_value(right, ctx)))
}

impl SingleRow {
    pub fn render(&self, ctx: &RenderContext) -> Node {
        row_shell(ctx.flush, self.custom_height)
            .child(slot_column(&self.field, None, slot_value(&self.field, ctx)))
    }
}

impl Row {
    pub fn render(&self, ctx: &RenderContext) -> Node {
        two_slot_row(&self.left, &self.right, ctx.flush, self.custom_height, ctx)
    }
}

impl FourFieldGrid {
    /// Two stacked two-field rows; the lower row always renders flush.
    pub fn render(&self, ctx: &RenderContext) -> Node {
        Node::div("tp-four-field-grid")
            .child(two_slot_row(&self.f1, &self.f2, ctx.flush, self.custom_height, ctx))
            .child(two_slot_row(&self.f3, &self.f4, true, self.custom_height, ctx))
    }
}

impl Signature {
    pub fn render(&self, ctx: &RenderContext) -> Node {
        let value = match ctx.scalar(&self.field.mapping) {
            Some(value) => {
                // Keep the line's height when the signature is blank.
                let shown = if value.is_empty() { "\u{a0}".to_string() } else { value };
                Node::span("tp-signature-text").with_text(shown)
            }
            None => Node::div("tp-signature-line")
                .child(Node::span("tp-signature-placeholder").with_text("Signatory Line"))
                .child_opt(badge(&self.field.mapping)),
        };

        row_shell(ctx.flush, self.custom_height).child(slot_column(
            &self.field,
            Some("tp-row__value--signature"),
            value,
        ))
    }
}
