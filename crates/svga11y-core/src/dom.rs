//! Element tree for parsed SVG documents.
//!
//! Elements are stored in a flat arena owned by [`Document`]; parent and
//! child links are indices, so upward lookups never create ownership cycles.

use std::collections::HashMap;

/// Index of an element inside its [`Document`] arena.
///
/// Ids are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ElementData {
    name: String,
    attributes: HashMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed SVG document: a rooted, finite element tree.
///
/// The tree is immutable once built; rules only ever read it.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<ElementData>,
}

impl Document {
    /// Creates a document containing only the root element.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![ElementData {
                name: root_name.into(),
                attributes: HashMap::new(),
                text: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new element under `parent` and returns its id.
    pub fn push_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementData {
            name: name.into(),
            attributes: HashMap::new(),
            text: String::new(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attribute(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.0].attributes.insert(name.into(), value.into());
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = text.into();
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attributes.get(name).map(String::as_str)
    }

    /// True when the attribute is defined at all, even with an empty value.
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.nodes[id.0].attributes.contains_key(name)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first pre-order walk starting at `start` (inclusive).
    ///
    /// Children are visited in document order; each node appears exactly once.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![start],
        }
    }

    /// All elements under `root` (inclusive) with the exact given name.
    pub fn find_by_name(&self, root: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| self.name(id) == name)
            .collect()
    }

    /// All elements under `root` (inclusive) whose name is in `names`.
    pub fn find_by_names(&self, root: NodeId, names: &[&str]) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| names.contains(&self.name(id)))
            .collect()
    }

    /// All elements under `root` (inclusive) carrying `attr` with a
    /// non-empty value.
    pub fn find_with_attribute(&self, root: NodeId, attr: &str) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| self.attribute(id, attr).is_some_and(|v| !v.is_empty()))
            .collect()
    }

    /// All elements under `root` (inclusive) carrying at least one of the
    /// given attributes. An empty value still counts as present.
    pub fn find_with_any_attribute(&self, root: NodeId, attrs: &[&str]) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| attrs.iter().any(|a| self.has_attribute(id, a)))
            .collect()
    }

    /// The `fill` value of the nearest ancestor that defines one.
    ///
    /// Walks strictly upward; the element's own `fill` is never consulted.
    pub fn inherited_fill(&self, id: NodeId) -> Option<&str> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if let Some(fill) = self.attribute(ancestor, "fill") {
                return Some(fill);
            }
            current = self.parent(ancestor);
        }
        None
    }
}

pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Reverse push keeps children in document order on the stack.
        for &child in self.doc.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
