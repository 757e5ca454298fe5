//! Render logic for header kinds: MainHeader, Title, SectionHeader.

use super::RenderContext;
use super::types::{MainHeader, SectionHeader, Title};
use crate::render::Node;

fn company_block(prefix: &str, company: &str, report: &str, doc_id: &str) -> Vec<Node> {
    vec![
        Node::el("h2").class(&format!("{}__company", prefix)).with_text(company),
        Node::el("p").class(&format!("{}__report", prefix)).with_text(report),
        Node::el("p").class(&format!("{}__doc-id", prefix)).with_text(doc_id),
    ]
}

impl MainHeader {
    /// Render the company block with the logo (or its placeholder) beside it.
    pub fn render(&self, _ctx: &RenderContext) -> Node {
        let logo = match self.logo_url.as_deref() {
            Some(src) if !src.is_empty() => Node::el("img")
                .class("tp-main-header__logo")
                .attr("src", src)
                .attr("alt", "Logo"),
            _ => Node::div("tp-main-header__logo-placeholder").with_text("Logo Area"),
        };

        Node::div("tp-main-header")
            .child(Node::div("tp-main-header__content").children(company_block(
                "tp-main-header",
                &self.company_name,
                &self.report_title,
                &self.doc_id,
            )))
            .child(Node::div("tp-main-header__logo-wrapper").child(logo))
    }
}

impl Title {
    pub fn render(&self, ctx: &RenderContext) -> Node {
        Node::div("tp-title")
            .class_if(ctx.flush, "is-flush")
            .children(company_block(
                "tp-title",
                &self.company_name,
                &self.report_title,
                &self.doc_id,
            ))
    }
}

impl SectionHeader {
    pub fn render(&self, _ctx: &RenderContext) -> Node {
        Node::div("tp-section-header")
            .style("background-color", &self.bg_color)
            .style("color", &self.text_color)
            .with_text(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{
        ElementKind, ElementMeta, MainHeader, RenderContext, Resolver, TemplateElement,
    };
    use crate::fields::FieldCatalog;
    use crate::render::{Medium, ViewMode};

    #[test]
    fn test_main_header_placeholder_without_logo() {
        let catalog = FieldCatalog::sample();
        let el = TemplateElement::new(ElementKind::MainHeader);
        let node = el.render(ViewMode::Editing, false, &catalog);
        assert!(node.find("tp-main-header__logo-placeholder").is_some());
        assert!(node.text_content().contains("TIMEC Oil & Gas, Inc."));
    }

    #[test]
    fn test_main_header_logo_image() {
        let header = MainHeader {
            logo_url: Some("data:image/png;base64,AAAA".into()),
            ..MainHeader::editor_default()
        };
        let catalog = FieldCatalog::sample();
        let ctx = RenderContext {
            mode: ViewMode::Previewing,
            flush: false,
            resolver: Resolver::new(&catalog),
        };
        let html = header.render(&ctx).to_html(Medium::Screen);
        assert!(html.contains(r#"<img class="tp-main-header__logo" src="data:image/png;base64,AAAA" alt="Logo">"#));
    }

    #[test]
    fn test_section_header_colors() {
        let catalog = FieldCatalog::sample();
        let el = TemplateElement::new(ElementKind::SectionHeader);
        let node = el.render(ViewMode::Editing, false, &catalog);
        let inner = node.as_element().unwrap();
        assert_eq!(inner.style("background-color"), Some("#004a99"));
        assert_eq!(inner.style("color"), Some("#ffffff"));
        assert_eq!(node.text_content(), "SECTION TITLE");
    }

    #[test]
    fn test_title_flush() {
        let catalog = FieldCatalog::sample();
        let el = TemplateElement::new(ElementKind::Title);
        assert!(el.render(ViewMode::Editing, true, &catalog).has_class("is-flush"));
        assert!(!el.render(ViewMode::Editing, false, &catalog).has_class("is-flush"));
    }
}
