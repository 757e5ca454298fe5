//! Render logic for content kinds: TextArea, Attachment.

use super::RenderContext;
use super::rows::badge;
use super::types::{Attachment, TextArea};
use crate::render::Node;

impl TextArea {
    pub fn render(&self, ctx: &RenderContext) -> Node {
        let header = Node::div("tp-text-area__header")
            .child(Node::span("tp-text-area__label").with_text(&self.label));
        let header = if ctx.is_preview() {
            header
        } else {
            header.child_opt(badge(&self.mapping))
        };

        let content = match ctx.scalar(&self.mapping) {
            Some(value) => Node::div("tp-text-area__content").with_text(value),
            None => Node::div("tp-text-area__content").child(
                Node::span("tp-text-area__placeholder")
                    .no_print()
                    .with_text(&self.placeholder),
            ),
        };
        let content = match RenderContext::height_px(self.custom_height) {
            Some(h) => content.style("min-height", h),
            None => content,
        };

        Node::div("tp-text-area")
            .class_if(ctx.flush, "is-flush")
            .child(header)
            .child(content)
    }
}

impl Attachment {
    /// Preview shows the bound image (or a notice); editing shows an
    /// image-area placeholder sized like the image would be.
    pub fn render(&self, ctx: &RenderContext) -> Node {
        let content = match ctx.scalar(&self.mapping) {
            Some(src) if !src.is_empty() => {
                let img = Node::el("img")
                    .class("tp-attachment__image")
                    .attr("src", src)
                    .attr("alt", &self.label);
                if self.use_custom_size {
                    img.style("width", format!("{}px", self.custom_width))
                        .style("height", format!("{}px", self.custom_height))
                        .style("object-fit", "contain")
                } else {
                    img.style("max-width", "100%").style("height", "auto")
                }
            }
            Some(_) => Node::span("tp-attachment__placeholder-text").with_text("No image provided"),
            None => {
                let placeholder = Node::div("tp-attachment__placeholder")
                    .class_if(self.use_custom_size, "tp-attachment__placeholder--custom");
                let placeholder = if self.use_custom_size {
                    placeholder
                        .style("width", format!("{}px", self.custom_width))
                        .style("height", format!("{}px", self.custom_height))
                } else {
                    placeholder
                };
                placeholder
                    .child(Node::span("tp-attachment__placeholder-text").with_text("Image Area"))
                    .child_opt(badge(&self.mapping))
            }
        };

        Node::div("tp-attachment")
            .class_if(ctx.flush, "is-flush")
            .child(Node::div("tp-attachment__header").with_text(format!("{}:", self.label)))
            .child(Node::div("tp-attachment__content").child(content))
    }
}
