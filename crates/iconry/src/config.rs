//! Configuration types for Iconry rendering.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining icon and export settings.
//! - [`IconConfig`] - Default props applied beneath every rendered icon.
//! - [`ExportConfig`] - Controls how rendered icons are serialized.
//!
//! # Example
//!
//! ```
//! # use iconry::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.default_props().is_empty());
//! assert!(!config.export().xml_declaration());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use iconry_core::{AttrValue, Props};

use crate::IconryError;

/// Top-level configuration combining icon and export settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Icon defaults section.
    #[serde(default)]
    icon: IconConfig,

    /// Export section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(icon: IconConfig, export: ExportConfig) -> Self {
        Self { icon, export }
    }

    pub fn icon(&self) -> &IconConfig {
        &self.icon
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the configured default props.
    ///
    /// `size` comes first, then `class`, then the `attributes` table in file
    /// order.
    pub fn default_props(&self) -> Props {
        let mut props = Props::new();
        if let Some(size) = &self.icon.size {
            props.set("size", size.clone());
        }
        if let Some(class) = &self.icon.class {
            props.set("class", class);
        }
        props.extend(
            self.icon
                .attributes
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        props
    }

    /// Checks values that would produce an unusable icon.
    ///
    /// # Errors
    ///
    /// Returns [`IconryError::Config`] if `size` is a number that is not
    /// strictly positive, or a flag.
    pub fn validate(&self) -> Result<(), IconryError> {
        self.icon.size.as_ref().map_or(Ok(()), validate_size)
    }
}

/// Checks a `size` value wherever it comes from.
///
/// # Errors
///
/// Returns [`IconryError::Config`] for a number that is not finite and
/// strictly positive, or for a flag. Text is accepted as a CSS length.
pub fn validate_size(size: &AttrValue) -> Result<(), IconryError> {
    match size {
        AttrValue::Number(size) if !size.is_finite() || *size <= 0.0 => Err(IconryError::Config(
            format!("icon size must be positive, got {size}"),
        )),
        AttrValue::Flag(_) => Err(IconryError::Config(
            "icon size must be a number or a CSS length".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Default props applied beneath every rendered icon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconConfig {
    /// Icon extent, as a number of user units or a CSS length.
    #[serde(default)]
    size: Option<AttrValue>,

    /// CSS class for the root element.
    #[serde(default)]
    class: Option<String>,

    /// Extra pass-through attributes.
    #[serde(default)]
    attributes: IndexMap<String, AttrValue>,
}

impl IconConfig {
    pub fn new(
        size: Option<AttrValue>,
        class: Option<String>,
        attributes: IndexMap<String, AttrValue>,
    ) -> Self {
        Self {
            size,
            class,
            attributes,
        }
    }

    pub fn size(&self) -> Option<&AttrValue> {
        self.size.as_ref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }
}

/// Serialization settings for exported icons.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Prefix output with an XML declaration.
    #[serde(default)]
    xml_declaration: bool,
}

impl ExportConfig {
    pub fn new(xml_declaration: bool) -> Self {
        Self { xml_declaration }
    }

    pub fn xml_declaration(&self) -> bool {
        self.xml_declaration
    }
}
