//! The properties bag handed to icon components.

use indexmap::IndexMap;

use crate::{attr::AttrValue, node::VNode};

/// An open-ended, insertion-ordered set of rendering attributes plus optional
/// child content.
///
/// No key is required and nothing is validated: whatever goes in is what a
/// component hands to the graphic it renders.
///
/// # Example
///
/// ```
/// # use iconry_core::Props;
/// let props = Props::new()
///     .with("size", 24)
///     .with("aria-label", "Google Drive");
///
/// assert_eq!(props.len(), 2);
/// assert_eq!(props.get("aria-label").unwrap().to_string(), "Google Drive");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    attrs: IndexMap<String, AttrValue>,
    children: Vec<VNode>,
}

impl Props {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Appends a child node (builder style).
    pub fn with_child(mut self, child: impl Into<VNode>) -> Self {
        self.push_child(child);
        self
    }

    /// Sets an attribute, returning the previous value if there was one.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attrs.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.attrs.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Iterates over the attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes (children are not counted).
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` when the bag holds neither attributes nor children.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.children.is_empty()
    }

    pub fn children(&self) -> &[VNode] {
        &self.children
    }

    pub fn push_child(&mut self, child: impl Into<VNode>) {
        self.children.push(child.into());
    }

    /// Splits the bag into its attributes and children.
    pub fn into_parts(self) -> (IndexMap<String, AttrValue>, Vec<VNode>) {
        (self.attrs, self.children)
    }

    /// Layers this bag over `base`.
    ///
    /// Attributes from `self` win over those in `base`. Keys already in
    /// `base` keep their position; keys new in `self` follow them. Children
    /// of `base` precede children of `self`.
    pub fn merged_over(&self, base: &Props) -> Props {
        let mut merged = base.clone();
        merged.extend(self.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged.children.extend(self.children.iter().cloned());
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Props::new();
        props.extend(iter);
        props
    }
}

impl<K, V> Extend<(K, V)> for Props
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let props = Props::new();
        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
    }

    #[test]
    fn test_set_keeps_position_on_replace() {
        let mut props = Props::new().with("a", 1).with("b", 2);
        let previous = props.set("a", 3);

        assert_eq!(previous, Some(AttrValue::from(1)));
        let keys: Vec<_> = props.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(props.get("a"), Some(&AttrValue::from(3)));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut props: Props = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        props.remove("b");

        let keys: Vec<_> = props.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert!(!props.contains("b"));
    }

    #[test]
    fn test_children_do_not_count_as_attributes() {
        let props = Props::new().with_child(VNode::text("hello"));
        assert_eq!(props.len(), 0);
        assert!(!props.is_empty());
        assert_eq!(props.children().len(), 1);
    }

    #[test]
    fn test_merged_over_prefers_self() {
        let base = Props::new().with("class", "base").with("fill", "none");
        let top = Props::new().with("class", "top").with("id", "x");

        let merged = top.merged_over(&base);

        let pairs: Vec<_> = merged
            .attrs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("class".to_string(), "top".to_string()),
                ("fill".to_string(), "none".to_string()),
                ("id".to_string(), "x".to_string()),
            ]
        );
    }
}
