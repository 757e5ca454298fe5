//! Page assembly: wrappers, adjacency, and editing affordances.
//!
//! The per-kind strategies render an element in isolation. This pass walks
//! the template in order, computes each element's flush flag from its
//! predecessor, and wraps the result with the session's selection and drag
//! state. Nothing computed here is stored on the elements.

use super::{Node, ViewMode};
use crate::document::{ElementId, ElementKind, Template, TemplateElement};
use crate::fields::FieldCatalog;

/// Transient session state the page pass needs to draw affordances.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageState<'a> {
    pub mode: ViewMode,
    pub selected: Option<&'a ElementId>,
    /// Index of the element currently being dragged.
    pub dragged: Option<usize>,
}

/// Render a whole template as a single page node.
pub fn render_page(template: &Template, state: &PageState, catalog: &FieldCatalog) -> Node {
    let editing = state.mode == ViewMode::Editing;
    let page = Node::div("tp-document").class_if(!editing, "is-preview");

    if template.is_empty() {
        return if editing {
            page.child(
                Node::div("tp-empty-state")
                    .no_print()
                    .with_text("Canvas is empty"),
            )
        } else {
            page
        };
    }

    let last = template.len() - 1;
    let mut previous: Option<ElementKind> = None;
    let mut wrappers = Vec::with_capacity(template.len());

    for (index, element) in template.iter().enumerate() {
        let flush = previous == Some(ElementKind::SectionHeader);
        previous = Some(element.kind());
        wrappers.push(wrap(element, index, last, flush, state, catalog));
    }

    page.children(wrappers)
}

fn wrap(
    element: &TemplateElement,
    index: usize,
    last: usize,
    flush: bool,
    state: &PageState,
    catalog: &FieldCatalog,
) -> Node {
    let editing = state.mode == ViewMode::Editing;
    let selected = editing && state.selected == Some(element.id());
    let dragged = editing && state.dragged == Some(index);

    let affordance = match (editing, selected) {
        (false, _) => None,
        (true, true) => Some(controls(index, last)),
        (true, false) => Some(
            Node::div("tp-drag-handle")
                .no_print()
                .attr("title", "Drag to reorder"),
        ),
    };

    Node::div("tp-element")
        .class(&format!("tp-element--{}", element.kind().tag()))
        .class_if(selected, "is-selected")
        .class_if(flush, "is-flush")
        .class_if(dragged, "is-dragged")
        .class_if(!editing, "is-preview")
        .attr("data-id", element.id().as_str())
        .attr("data-index", index.to_string())
        .attr_if(editing, "draggable", "true")
        .child_opt(affordance)
        .child(element.render(state.mode, flush, catalog))
}

fn controls(index: usize, last: usize) -> Node {
    let button = |action: &str, label: &str, disabled: bool| {
        Node::el("button")
            .class("tp-controls__button")
            .attr("type", "button")
            .attr("data-action", action)
            .attr("title", label)
            .attr_if(disabled, "disabled", "disabled")
            .with_text(label)
    };

    Node::div("tp-controls")
        .no_print()
        .child(button("move-up", "Move up", index == 0))
        .child(button("move-down", "Move down", index == last))
        .child(button("remove", "Remove", false).class("tp-controls__button--danger"))
}
