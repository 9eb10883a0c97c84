//! Integration tests for the public icon API.
//!
//! These tests exercise components, the render host and the builder
//! together, the way an application would.

use indexmap::IndexMap;
use proptest::prelude::*;

use iconry::{
    AttrValue, GoogleDriveIcon, IconBuilder, IconComponent, IconryError, NodeRef, Props, Root,
    config::{AppConfig, ExportConfig, IconConfig},
};

#[test]
fn test_size_and_label_without_ref() {
    let props = Props::new()
        .with("size", 24)
        .with("aria-label", "Google Drive");

    let mut root = Root::new();
    let handle = root.render(GoogleDriveIcon::default().render(props, None));

    assert_eq!(handle.attr("width"), Some(AttrValue::from(24)));
    assert_eq!(handle.attr("height"), Some(AttrValue::from(24)));
    assert_eq!(
        handle.attr("aria-label"),
        Some(AttrValue::from("Google Drive"))
    );
}

#[test]
fn test_empty_props_with_ref() {
    let node_ref = NodeRef::new();

    let mut root = Root::new();
    let tree = GoogleDriveIcon::default().render(Props::new(), Some(node_ref.clone()));
    let handle = root.render(tree);

    let attached = node_ref.get().expect("ref should be attached after render");
    assert!(attached.ptr_eq(&handle));
    assert_eq!(attached.attr("width"), Some(AttrValue::from("1em")));
    assert_eq!(attached.attr("viewBox"), Some(AttrValue::from("0 0 87.3 78")));

    root.unmount();
    assert!(node_ref.get().is_none());
}

#[test]
fn test_ref_allows_direct_manipulation() {
    let node_ref = NodeRef::new();
    let mut root = Root::new();
    root.render(GoogleDriveIcon::default().render(Props::new(), Some(node_ref.clone())));

    node_ref.get().unwrap().set_attr("data-measured", true);

    let handle = root.handle().unwrap();
    assert_eq!(handle.attr("data-measured"), Some(AttrValue::from(true)));
}

#[test]
fn test_builder_renders_svg() {
    let builder = IconBuilder::default();
    let svg = builder
        .render_svg("google-drive", Props::new().with("class", "drive"))
        .expect("Failed to render icon");

    assert!(svg.starts_with("<svg"), "Output should start with an SVG tag");
    assert!(svg.contains(r#"class="drive""#));
    assert!(svg.contains("#ffba00"));
    assert!(svg.ends_with("</svg>"), "Output should be complete SVG");
}

#[test]
fn test_builder_unknown_icon() {
    let builder = IconBuilder::default();
    let err = builder.render_svg("Dropbox", Props::new()).unwrap_err();

    assert!(matches!(err, IconryError::UnknownIcon(name) if name == "Dropbox"));
}

#[test]
fn test_builder_applies_config_defaults_beneath_props() {
    let mut attributes = IndexMap::new();
    attributes.insert("role".to_string(), AttrValue::from("img"));
    let config = AppConfig::new(
        IconConfig::new(Some(AttrValue::from(16)), Some("base".into()), attributes),
        ExportConfig::new(true),
    );
    let builder = IconBuilder::new(config);

    let tree = builder
        .render("GoogleDrive", Props::new().with("class", "override"), None)
        .unwrap();
    assert_eq!(tree.get_attr("class"), Some(&AttrValue::from("override")));
    assert_eq!(tree.get_attr("role"), Some(&AttrValue::from("img")));
    assert_eq!(tree.get_attr("width"), Some(&AttrValue::from(16)));

    let svg = builder.render_svg("GoogleDrive", Props::new()).unwrap();
    assert!(svg.starts_with("<?xml"));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let config = AppConfig::new(
        IconConfig::new(Some(AttrValue::from(-4)), None, IndexMap::new()),
        ExportConfig::default(),
    );
    let err = IconBuilder::new(config)
        .render_svg("GoogleDrive", Props::new())
        .unwrap_err();

    assert!(matches!(err, IconryError::Config(_)));
}

fn attr_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

fn attr_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        "[ -~]{0,16}".prop_map(AttrValue::Text),
        (-1000i32..1000).prop_map(AttrValue::from),
        any::<bool>().prop_map(AttrValue::Flag),
    ]
}

fn props_strategy() -> impl Strategy<Value = Props> {
    prop::collection::vec((attr_name(), attr_value()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_every_prop_reaches_root(props in props_strategy()) {
        let mut root = Root::new();
        let handle = root.render(GoogleDriveIcon::default().render(props.clone(), None));

        for (name, value) in props.attrs() {
            let actual = handle.attr(name);
            prop_assert_eq!(actual.as_ref(), Some(value));
        }
    }

    #[test]
    fn prop_render_is_idempotent(props in props_strategy()) {
        let icon = GoogleDriveIcon::default();
        let node_ref = NodeRef::new();

        let first = icon.render(props.clone(), Some(node_ref.clone()));
        let second = icon.render(props, Some(node_ref));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_ref_does_not_change_output(props in props_strategy()) {
        let icon = GoogleDriveIcon::default();

        let mut plain_root = Root::new();
        let plain = plain_root.render(icon.render(props.clone(), None));

        let node_ref = NodeRef::new();
        let mut ref_root = Root::new();
        let with_ref = ref_root.render(icon.render(props, Some(node_ref.clone())));

        prop_assert_eq!(plain.to_string(), with_ref.to_string());
        prop_assert!(node_ref.get().unwrap().ptr_eq(&with_ref));
    }
}
