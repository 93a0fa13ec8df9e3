//! Parser module for SVG markup.
//!
//! Wraps roxmltree and lowers its node tree into the arena-backed
//! [`Document`] the rule engine consumes.

use crate::dom::{Document, NodeId};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid SVG markup: {0}")]
    Markup(#[from] roxmltree::Error),
}

/// Parses SVG markup into a [`Document`] rooted at the top-level element.
pub fn parse_svg(source: &str) -> Result<Document, ParseError> {
    let xml = roxmltree::Document::parse(source)?;
    let root = xml.root_element();

    let mut doc = Document::new(root.tag_name().name());
    let doc_root = doc.root();
    copy_attributes(&root, &mut doc, doc_root);
    copy_text(&root, &mut doc, doc_root);
    for child in root.children().filter(roxmltree::Node::is_element) {
        copy_element(&child, &mut doc, doc_root);
    }

    Ok(doc)
}

fn copy_element(node: &roxmltree::Node<'_, '_>, doc: &mut Document, parent: NodeId) {
    let id = doc.push_child(parent, node.tag_name().name());
    copy_attributes(node, doc, id);
    copy_text(node, doc, id);
    for child in node.children().filter(roxmltree::Node::is_element) {
        copy_element(&child, doc, id);
    }
}

fn copy_attributes(node: &roxmltree::Node<'_, '_>, doc: &mut Document, id: NodeId) {
    for attr in node.attributes() {
        // roxmltree strips prefixes; xml:lang must keep its spelling since
        // rules match on the qualified attribute name.
        let name = if attr.namespace() == Some(XML_NAMESPACE) {
            format!("xml:{}", attr.name())
        } else {
            attr.name().to_string()
        };
        doc.set_attribute(id, name, attr.value());
    }
}

fn copy_text(node: &roxmltree::Node<'_, '_>, doc: &mut Document, id: NodeId) {
    let text: String = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        doc.set_text(id, trimmed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_svg() {
        let doc = parse_svg(r#"<svg viewBox="0 0 10 10"><title>Chart</title></svg>"#).unwrap();

        assert_eq!(doc.name(doc.root()), "svg");
        assert_eq!(doc.attribute(doc.root(), "viewBox"), Some("0 0 10 10"));
        let children = doc.children(doc.root());
        assert_eq!(children.len(), 1);
        assert_eq!(doc.name(children[0]), "title");
        assert_eq!(doc.text(children[0]), "Chart");
    }

    #[test]
    fn parse_preserves_document_order() {
        let doc = parse_svg("<svg><title/><desc/><rect/><text/></svg>").unwrap();

        let names: Vec<_> = doc
            .children(doc.root())
            .iter()
            .map(|&id| doc.name(id).to_string())
            .collect();

        assert_eq!(names, ["title", "desc", "rect", "text"]);
    }

    #[test]
    fn parse_keeps_xml_lang_qualified() {
        let doc = parse_svg(r#"<svg><g xml:lang="en"/></svg>"#).unwrap();

        let g = doc.children(doc.root())[0];
        assert_eq!(doc.attribute(g, "xml:lang"), Some("en"));
    }

    #[test]
    fn parse_nested_structure_links_parents() {
        let doc = parse_svg(r##"<svg><g fill="#fff"><text>hi</text></g></svg>"##).unwrap();

        let g = doc.children(doc.root())[0];
        let text = doc.children(g)[0];

        assert_eq!(doc.parent(text), Some(g));
        assert_eq!(doc.inherited_fill(text), Some("#fff"));
    }

    #[test]
    fn parse_invalid_markup_returns_error() {
        let result = parse_svg("<svg><unclosed></svg>");

        assert!(matches!(result, Err(ParseError::Markup(_))));
    }

    #[test]
    fn parse_empty_attribute_values_survive() {
        let doc = parse_svg(r#"<svg><a onclick="" tabindex=""/></svg>"#).unwrap();

        let a = doc.children(doc.root())[0];
        assert!(doc.has_attribute(a, "onclick"));
        assert_eq!(doc.attribute(a, "onclick"), Some(""));
    }
}
