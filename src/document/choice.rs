//! Render logic for the ChoiceGroup kind.

use super::RenderContext;
use super::rows::{badge, label_cell};
use super::types::{ChoiceGroup, ChoiceInput};
use crate::render::Node;

impl ChoiceGroup {
    /// Lay the options out in a `columns`-wide grid.
    ///
    /// In preview an option is marked iff its label appears in the bound
    /// list field. Matching is exact: no case folding or trimming.
    pub fn render(&self, ctx: &RenderContext) -> Node {
        let checked: &[String] = if ctx.is_preview() {
            ctx.resolver.resolve_list(&self.mapping)
        } else {
            &[]
        };
        let radio = self.input_type == ChoiceInput::Radio;
        let columns = self.columns.max(1);

        let items = self.options.iter().map(|opt| {
            let is_checked = checked.iter().any(|c| c == opt);
            let mark = match (is_checked, radio) {
                (false, _) => None,
                (true, true) => Some(Node::div("tp-checkbox-box__dot")),
                (true, false) => Some(Node::span("tp-checkbox-box__cross").with_text("\u{2715}")),
            };
            let input_type = if radio { "radio" } else { "checkbox" };
            Node::div("tp-checkbox-item")
                .child(
                    Node::div("tp-checkbox-box")
                        .class_if(radio, "tp-checkbox-box--radio")
                        .class_if(is_checked, "tp-checkbox-box--checked")
                        .attr("role", input_type)
                        .attr("aria-checked", is_checked.to_string())
                        .child_opt(mark),
                )
                .child(Node::span("tp-checkbox-label").with_text(opt))
        });

        let title = label_cell(
            "tp-checkbox-group__title",
            &self.title,
            self.hide_label,
            self.label_as_header,
        );
        let title = match (title, ctx.is_preview()) {
            (Some(t), false) => Some(t.child_opt(badge(&self.mapping))),
            (t, _) => t,
        };

        let group = Node::div("tp-checkbox-group").class_if(ctx.flush, "is-flush");
        let group = match RenderContext::height_px(self.custom_height) {
            Some(h) => group.style("height", h),
            None => group,
        };

        group.child_opt(title).child(
            Node::div("tp-checkbox-group__grid")
                .style("grid-template-columns", format!("repeat({}, 1fr)", columns))
                .children(items),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{ChoiceGroup, ChoiceInput, ElementMeta, RenderContext, Resolver};
    use crate::fields::{Field, FieldCatalog};
    use crate::render::{Node, ViewMode};
    use pretty_assertions::assert_eq;

    fn group(options: &[&str], mapping: &str) -> ChoiceGroup {
        ChoiceGroup {
            options: options.iter().map(|s| s.to_string()).collect(),
            mapping: mapping.into(),
            ..ChoiceGroup::editor_default()
        }
    }

    fn checked_labels(node: &Node) -> Vec<String> {
        node.find_all("tp-checkbox-item")
            .into_iter()
            .filter(|item| item.find("tp-checkbox-box--checked").is_some())
            .map(|item| item.find("tp-checkbox-label").unwrap().text_content())
            .collect()
    }

    fn render(group: &ChoiceGroup, catalog: &FieldCatalog, mode: ViewMode) -> Node {
        group.render(&RenderContext {
            mode,
            flush: false,
            resolver: Resolver::new(catalog),
        })
    }

    #[test]
    fn test_preview_marks_listed_options() {
        let catalog = FieldCatalog::new(vec![Field::list("picked", "Picked", &["A"])]).unwrap();
        let node = render(&group(&["A", "B"], "picked"), &catalog, ViewMode::Previewing);
        assert_eq!(checked_labels(&node), vec!["A"]);
        let grid = node.find("tp-checkbox-group__grid").unwrap().as_element().unwrap();
        assert_eq!(grid.style("grid-template-columns"), Some("repeat(2, 1fr)"));
    }

    #[test]
    fn test_editing_marks_nothing() {
        let catalog = FieldCatalog::new(vec![Field::list("picked", "Picked", &["A"])]).unwrap();
        let node = render(&group(&["A", "B"], "picked"), &catalog, ViewMode::Editing);
        assert!(checked_labels(&node).is_empty());
        assert_eq!(node.find("tp-link").unwrap().text_content(), "[picked]");
    }

    #[test]
    fn test_exact_match_only() {
        let catalog =
            FieldCatalog::new(vec![Field::list("picked", "Picked", &["first aid", " B"])]).unwrap();
        let node = render(&group(&["First Aid", "B"], "picked"), &catalog, ViewMode::Previewing);
        assert!(checked_labels(&node).is_empty());
    }

    #[test]
    fn test_scalar_binding_marks_nothing() {
        let catalog = FieldCatalog::new(vec![Field::scalar("s", "S", "A")]).unwrap();
        let node = render(&group(&["A"], "s"), &catalog, ViewMode::Previewing);
        assert!(checked_labels(&node).is_empty());
    }

    #[test]
    fn test_radio_variant() {
        let catalog = FieldCatalog::sample();
        let mut radio = group(&["First Aid", "Near Miss"], "classification");
        radio.input_type = ChoiceInput::Radio;
        let node = render(&radio, &catalog, ViewMode::Previewing);
        assert_eq!(node.find_all("tp-checkbox-box--radio").len(), 2);
        assert_eq!(node.find_all("tp-checkbox-box__dot").len(), 1);
    }

    #[test]
    fn test_title_hidden() {
        let catalog = FieldCatalog::sample();
        let mut hidden = group(&["A"], "none");
        hidden.hide_label = true;
        let node = render(&hidden, &catalog, ViewMode::Editing);
        assert!(node.find("tp-checkbox-group__title").is_none());
    }
}
