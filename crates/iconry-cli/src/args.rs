//! Command-line argument definitions for the Iconry CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the icon, the props it is rendered with,
//! the output path, configuration file selection and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Iconry icon exporter
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the icon to export
    #[arg(required_unless_present = "list", help = "Icon name, e.g. GoogleDrive")]
    pub icon: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Icon size, as a number or a CSS length
    #[arg(long)]
    pub size: Option<String>,

    /// CSS class for the root element
    #[arg(long)]
    pub class: Option<String>,

    /// Accessible title rendered as a <title> child
    #[arg(long)]
    pub title: Option<String>,

    /// Extra attribute applied to the root element (repeatable)
    #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub attrs: Vec<(String, String)>,

    /// List the available icons and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("attribute name is empty in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
