//! Icon components and the forward-ref factory that builds them from assets.

use iconry_core::{NodeRef, Props, VElement};

use crate::asset::IconAsset;

/// Anything that renders as an icon.
///
/// All icon components share one surface: a properties bag and an optional
/// reference handle in, the root element description out. This lets them be
/// swapped for one another wherever an icon is expected.
pub trait IconComponent {
    /// Registry name of the icon.
    fn name(&self) -> &str;

    /// Describes the rendered icon. Pure: equal inputs give equal output.
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> VElement;
}

/// Wraps an [`IconAsset`] as an [`IconComponent`], forwarding both the props
/// and the ref to the asset's root `<svg>`.
///
/// # Example
///
/// ```
/// # use iconry::{GoogleDriveIcon, IconComponent, NodeRef, Props};
/// let icon = GoogleDriveIcon::default();
/// let node_ref = NodeRef::new();
///
/// let root = icon.render(Props::new().with("class", "icon"), Some(node_ref.clone()));
/// assert_eq!(root.get_attr("class").unwrap().to_string(), "icon");
/// assert_eq!(root.get_node_ref(), Some(&node_ref));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardRef<A> {
    asset: A,
}

impl<A: IconAsset> ForwardRef<A> {
    pub fn new(asset: A) -> Self {
        Self { asset }
    }

    pub fn asset(&self) -> &A {
        &self.asset
    }
}

impl<A: IconAsset> IconComponent for ForwardRef<A> {
    fn name(&self) -> &str {
        self.asset.name()
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> VElement {
        self.asset.render(props, node_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{GoogleDriveAsset, GoogleDriveIcon};

    #[test]
    fn test_forward_ref_matches_asset() {
        let props = Props::new().with("class", "x").with("data-id", 7);
        let node_ref = NodeRef::new();

        let via_component =
            GoogleDriveIcon::default().render(props.clone(), Some(node_ref.clone()));
        let via_asset = GoogleDriveAsset.render(props, Some(node_ref));

        assert_eq!(via_component, via_asset);
    }

    #[test]
    fn test_name_comes_from_asset() {
        let icon = ForwardRef::new(GoogleDriveAsset);
        assert_eq!(icon.name(), "GoogleDrive");
    }

    #[test]
    fn test_render_without_ref_matches_attrs_with_ref() {
        let icon = GoogleDriveIcon::default();
        let props = Props::new().with("size", 16);

        let without = icon.render(props.clone(), None);
        let with = icon.render(props, Some(NodeRef::new()));

        let attrs = |e: &VElement| {
            e.attr_entries()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(attrs(&without), attrs(&with));
        assert_eq!(without.child_nodes(), with.child_nodes());
    }
}
