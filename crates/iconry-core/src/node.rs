//! Node descriptions and live nodes.
//!
//! Components describe what they want rendered with [`VNode`] and
//! [`VElement`] values. A render host turns those descriptions into live
//! nodes addressed by [`NodeHandle`], which callers can query and modify
//! directly once mounted.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;
use svg::Node as _;

use crate::{attr::AttrValue, node_ref::NodeRef};

/// A description of rendered content: an element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element(VElement),
    Text(String),
}

impl VNode {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

impl From<VElement> for VNode {
    fn from(element: VElement) -> Self {
        Self::Element(element)
    }
}

/// A description of one element: its tag, attributes, children and an
/// optional reference slot to populate once the element is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct VElement {
    tag: String,
    attrs: IndexMap<String, AttrValue>,
    children: Vec<VNode>,
    node_ref: Option<NodeRef>,
}

impl VElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            node_ref: None,
        }
    }

    /// Sets an attribute. A later value for the same name replaces the
    /// earlier one in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets several attributes in order.
    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (name, value) in attrs {
            self.attrs.insert(name.into(), value.into());
        }
        self
    }

    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attaches `node_ref` to this element. `None` leaves it without one.
    pub fn node_ref(mut self, node_ref: Option<NodeRef>) -> Self {
        self.node_ref = node_ref;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn attr_entries(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn child_nodes(&self) -> &[VNode] {
        &self.children
    }

    pub fn get_node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// Splits the description into tag, attributes, children and ref.
    pub fn into_parts(
        self,
    ) -> (
        String,
        IndexMap<String, AttrValue>,
        Vec<VNode>,
        Option<NodeRef>,
    ) {
        (self.tag, self.attrs, self.children, self.node_ref)
    }
}

/// A mounted element.
#[derive(Debug)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, AttrValue>,
    children: Vec<LiveNode>,
}

/// A child of a mounted element.
#[derive(Debug, Clone)]
pub enum LiveNode {
    Element(NodeHandle),
    Text(String),
}

/// A shared handle to a mounted element.
///
/// Handles are cheap to clone; all clones address the same node. Identity
/// is compared with [`ptr_eq`](Self::ptr_eq).
///
/// Children changed through a handle of a mounted node are rebuilt from the
/// description on the owning root's next render.
#[derive(Clone)]
pub struct NodeHandle(Rc<RefCell<Element>>);

impl NodeHandle {
    /// Creates a detached element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Element {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn attr(&self, name: &str) -> Option<AttrValue> {
        self.0.borrow().attrs.get(name).cloned()
    }

    /// Returns a snapshot of the attributes in order.
    pub fn attrs(&self) -> Vec<(String, AttrValue)> {
        self.0
            .borrow()
            .attrs
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.borrow_mut().attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&self, name: &str) -> Option<AttrValue> {
        self.0.borrow_mut().attrs.shift_remove(name)
    }

    /// Replaces every attribute at once.
    pub fn replace_attrs(&self, attrs: IndexMap<String, AttrValue>) {
        self.0.borrow_mut().attrs = attrs;
    }

    /// Returns a snapshot of the children.
    pub fn children(&self) -> Vec<LiveNode> {
        self.0.borrow().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<LiveNode> {
        self.0.borrow().children.get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn push_child(&self, child: LiveNode) {
        self.0.borrow_mut().children.push(child);
    }

    /// Replaces the child at `index`, returning the old one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace_child(&self, index: usize, child: LiveNode) -> LiveNode {
        std::mem::replace(&mut self.0.borrow_mut().children[index], child)
    }

    /// Removes and returns every child from `len` onwards.
    pub fn truncate_children(&self, len: usize) -> Vec<LiveNode> {
        let mut element = self.0.borrow_mut();
        if len >= element.children.len() {
            return Vec::new();
        }
        element.children.split_off(len)
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.0.borrow().children {
            match child {
                LiveNode::Text(text) => out.push_str(text),
                LiveNode::Element(handle) => handle.collect_text(out),
            }
        }
    }

    pub fn ptr_eq(&self, other: &NodeHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Converts the subtree rooted here into an SVG element.
    pub fn to_svg(&self) -> svg::node::element::Element {
        let element = self.0.borrow();
        let mut out = svg::node::element::Element::new(element.tag.as_str());
        for (name, value) in &element.attrs {
            out.assign(name.as_str(), value);
        }
        for child in &element.children {
            match child {
                LiveNode::Element(handle) => out.append(handle.to_svg()),
                LiveNode::Text(text) => out.append(svg::node::Text::new(text.as_str())),
            }
        }
        out
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element = self.0.borrow();
        f.debug_struct("NodeHandle")
            .field("tag", &element.tag)
            .field("attrs", &element.attrs.len())
            .field("children", &element.children.len())
            .finish()
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg())
    }
}
