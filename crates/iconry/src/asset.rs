//! Icon assets: the literal artwork behind each icon component.

use std::fmt;

use iconry_core::{NodeRef, Props, VElement, VNode};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const DEFAULT_EXTENT: &str = "1em";

/// The `viewBox` of an icon's root `<svg>` element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub const fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// A vector graphic definition that icon components delegate to.
///
/// Implementors supply the artwork; [`render`](Self::render) wraps it in a
/// root `<svg>` that takes the caller's props and ref.
pub trait IconAsset {
    /// Registry name of the icon, e.g. `"GoogleDrive"`.
    fn name(&self) -> &'static str;

    fn view_box(&self) -> ViewBox;

    /// The nodes drawn inside the root `<svg>`.
    fn artwork(&self) -> Vec<VNode>;

    /// Builds the root `<svg>` element for this asset.
    ///
    /// The root starts with `xmlns`, `viewBox` and a `1em` square extent. A
    /// `size` prop sets both `width` and `height`. Every prop is then applied
    /// verbatim in bag order, so an explicit `width` or `height` wins over
    /// `size`. Child props follow the artwork. `node_ref`, when given, is
    /// attached to the root.
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> VElement {
        let (attrs, children) = props.into_parts();

        let mut root = VElement::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("viewBox", self.view_box().to_string())
            .attr("width", DEFAULT_EXTENT)
            .attr("height", DEFAULT_EXTENT);

        if let Some(size) = attrs.get("size") {
            root = root.attr("width", size.clone()).attr("height", size.clone());
        }

        root.attrs(attrs)
            .children(self.artwork())
            .children(children)
            .node_ref(node_ref)
    }
}

#[cfg(test)]
mod tests {
    use iconry_core::AttrValue;

    use super::*;

    struct Square;

    impl IconAsset for Square {
        fn name(&self) -> &'static str {
            "Square"
        }

        fn view_box(&self) -> ViewBox {
            ViewBox::new(0.0, 0.0, 10.0, 10.0)
        }

        fn artwork(&self) -> Vec<VNode> {
            vec![VElement::new("rect").attr("width", 10).attr("height", 10).into()]
        }
    }

    #[test]
    fn test_view_box_display() {
        assert_eq!(ViewBox::new(0.0, 0.0, 87.3, 78.0).to_string(), "0 0 87.3 78");
    }

    #[test]
    fn test_defaults_without_props() {
        let root = Square.render(Props::new(), None);

        assert_eq!(root.tag(), "svg");
        assert_eq!(root.get_attr("width"), Some(&AttrValue::from("1em")));
        assert_eq!(root.get_attr("height"), Some(&AttrValue::from("1em")));
        assert_eq!(root.get_attr("viewBox"), Some(&AttrValue::from("0 0 10 10")));
        assert_eq!(root.get_attr("xmlns"), Some(&AttrValue::from(SVG_NAMESPACE)));
        assert_eq!(root.child_nodes().len(), 1);
    }

    #[test]
    fn test_size_sets_extent_and_passes_through() {
        let root = Square.render(Props::new().with("size", 24), None);

        assert_eq!(root.get_attr("width"), Some(&AttrValue::from(24)));
        assert_eq!(root.get_attr("height"), Some(&AttrValue::from(24)));
        assert_eq!(root.get_attr("size"), Some(&AttrValue::from(24)));
    }

    #[test]
    fn test_explicit_width_beats_size() {
        let props = Props::new().with("size", 24).with("width", 40);
        let root = Square.render(props, None);

        assert_eq!(root.get_attr("width"), Some(&AttrValue::from(40)));
        assert_eq!(root.get_attr("height"), Some(&AttrValue::from(24)));
    }

    #[test]
    fn test_children_follow_artwork() {
        let title = VElement::new("title").child(VNode::text("Square"));
        let root = Square.render(Props::new().with_child(title.clone()), None);

        let children = root.child_nodes();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1], VNode::Element(title));
    }

    #[test]
    fn test_ref_is_forwarded_to_root() {
        let node_ref = NodeRef::new();
        let root = Square.render(Props::new(), Some(node_ref.clone()));

        assert_eq!(root.get_node_ref(), Some(&node_ref));
    }
}
