//! Serialization of mounted icons to SVG documents.

use log::debug;

use iconry_core::NodeHandle;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serializes the subtree at `handle` as SVG markup.
///
/// With `xml_declaration` set, the output starts with an XML declaration on
/// its own line, as expected by tools that read standalone `.svg` files.
pub fn to_svg_string(handle: &NodeHandle, xml_declaration: bool) -> String {
    let markup = handle.to_string();
    debug!(bytes = markup.len(), xml_declaration; "Serialized node");

    if xml_declaration {
        format!("{XML_DECLARATION}\n{markup}")
    } else {
        markup
    }
}
