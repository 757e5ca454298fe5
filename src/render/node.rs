//! # Visual Tree
//!
//! The renderer's output: a nested tree of element and text nodes, inspectable
//! before it is serialized.
//!
//! ```text
//! Elements → Node tree (inspectable) → Codegen → HTML (screen or print)
//! ```
//!
//! Nodes built with [`Node::no_print`] are interactive affordances (drag
//! handles, selection controls, the empty-canvas placeholder). They stay in
//! the tree but are dropped when serializing for the print medium.

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element node: tag, classes, inline styles, attributes, children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub styles: Vec<(&'static str, String)>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    /// False for affordances excluded from the print medium.
    pub printable: bool,
}

impl Node {
    /// Start an element node with the given tag.
    pub fn el(tag: &'static str) -> Self {
        Node::Element(Element {
            tag,
            classes: Vec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            printable: true,
        })
    }

    /// Shorthand for `Node::el("div").class(class)`.
    pub fn div(class: &str) -> Self {
        Node::el("div").class(class)
    }

    /// Shorthand for `Node::el("span").class(class)`.
    pub fn span(class: &str) -> Self {
        Node::el("span").class(class)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn class(self, class: &str) -> Self {
        self.map_element(|el| el.classes.push(class.to_string()))
    }

    pub fn class_if(self, cond: bool, class: &str) -> Self {
        if cond { self.class(class) } else { self }
    }

    pub fn style(self, prop: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        self.map_element(|el| el.styles.push((prop, value)))
    }

    pub fn attr(self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        self.map_element(|el| el.attrs.push((name, value)))
    }

    pub fn attr_if(self, cond: bool, name: &'static str, value: impl Into<String>) -> Self {
        if cond { self.attr(name, value) } else { self }
    }

    pub fn child(self, child: Node) -> Self {
        self.map_element(|el| el.children.push(child))
    }

    pub fn child_opt(self, child: Option<Node>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        self.map_element(|el| el.children.extend(children))
    }

    /// Append a text child.
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Mark as an interactive affordance, excluded from print.
    pub fn no_print(self) -> Self {
        self.class("no-print").map_element(|el| el.printable = false)
    }

    fn map_element(mut self, f: impl FnOnce(&mut Element)) -> Self {
        if let Node::Element(el) = &mut self {
            f(el);
        }
        self
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.as_element().is_some_and(|el| el.has_class(class))
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All descendant-or-self nodes carrying `class`, in document order.
    pub fn find_all(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |n| {
            if n.has_class(class) {
                found.push(n);
            }
        });
        found
    }

    /// First descendant-or-self node carrying `class`.
    pub fn find(&self, class: &str) -> Option<&Node> {
        self.find_all(class).into_iter().next()
    }

    /// Visit this node and every descendant, pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Node::Element(el) = self {
            for child in &el.children {
                child.walk(visit);
            }
        }
    }
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style(&self, prop: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }
}
