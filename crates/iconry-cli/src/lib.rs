//! CLI logic for the Iconry icon exporter.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use iconry::{
    AttrValue, IconBuilder, IconryError, Props, VElement, VNode, config::validate_size,
};

/// Run the Iconry CLI application
///
/// With `--list`, prints the built-in icon names without reading any
/// configuration. Otherwise renders the requested icon with the props
/// assembled from the arguments and writes the SVG to the output file.
///
/// # Errors
///
/// Returns `IconryError` for:
/// - File I/O errors
/// - Configuration loading errors and invalid `--size` values
/// - Unknown icon names
pub fn run(args: &Args) -> Result<(), IconryError> {
    // Listing needs only the built-in registry, not the config file
    if args.list {
        for name in available_icons() {
            println!("{name}");
        }
        return Ok(());
    }

    let icon = args
        .icon
        .as_deref()
        .ok_or_else(|| IconryError::UnknownIcon("<none>".to_string()))?;
    let props = props_from_args(args)?;

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = IconBuilder::new(app_config);

    info!(icon, output_path = args.output; "Exporting icon");

    let svg = builder.render_svg(icon, props)?;
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Names of the built-in icons, for diagnostics.
pub fn available_icons() -> Vec<String> {
    IconBuilder::default()
        .registry()
        .names()
        .map(str::to_string)
        .collect()
}

fn props_from_args(args: &Args) -> Result<Props, IconryError> {
    let mut props = Props::new();

    if let Some(size) = &args.size {
        props.set("size", parse_size(size)?);
    }
    if let Some(class) = &args.class {
        props.set("class", class);
    }
    for (name, value) in &args.attrs {
        props.set(name, value);
    }
    if let Some(title) = &args.title {
        props.push_child(VElement::new("title").child(VNode::text(title)));
    }

    Ok(props)
}

/// Plain numbers become numeric values; anything else (`2rem`, `100%`) is
/// passed through as text. Numbers must be finite and positive.
fn parse_size(raw: &str) -> Result<AttrValue, IconryError> {
    let size = raw
        .parse::<f64>()
        .map(AttrValue::Number)
        .unwrap_or_else(|_| AttrValue::from(raw));
    validate_size(&size)?;
    Ok(size)
}
