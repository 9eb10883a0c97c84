//! Iconry - forward-ref icon components rendered to SVG.
//!
//! Every icon is an [`IconAsset`] (the artwork) wrapped by [`ForwardRef`],
//! which hands the caller's [`Props`] and optional [`NodeRef`] straight to
//! the asset's root `<svg>`. A [`Root`] mounts the result so callers can
//! reach the live node through their ref.

pub mod asset;
pub mod config;
pub mod export;
pub mod icons;

mod component;
mod error;
mod registry;
mod root;

pub use iconry_core::{AttrValue, LiveNode, NodeHandle, NodeRef, Props, VElement, VNode};

pub use asset::{IconAsset, ViewBox};
pub use component::{ForwardRef, IconComponent};
pub use error::IconryError;
pub use icons::{GoogleDriveAsset, GoogleDriveIcon};
pub use registry::IconRegistry;
pub use root::Root;

use log::{debug, info};

use config::AppConfig;

/// Builder for rendering registered icons.
///
/// # Examples
///
/// ```rust
/// use iconry::{IconBuilder, Props};
///
/// let builder = IconBuilder::default();
///
/// let svg = builder
///     .render_svg("GoogleDrive", Props::new().with("size", 24))
///     .expect("Failed to render");
///
/// assert!(svg.contains(r#"width="24""#));
/// ```
pub struct IconBuilder {
    config: AppConfig,
    registry: IconRegistry,
}

impl Default for IconBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl IconBuilder {
    /// Create a new icon builder holding the built-in icons.
    ///
    /// # Arguments
    ///
    /// * `config` - Default props and export settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: IconRegistry::builtin(),
        }
    }

    /// Replace the registry used for name lookups.
    pub fn with_registry(mut self, registry: IconRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &IconRegistry {
        &self.registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Describe the icon registered as `name`.
    ///
    /// Configured default props sit beneath `props`; anything in `props`
    /// overrides them.
    ///
    /// # Errors
    ///
    /// Returns [`IconryError::UnknownIcon`] if no icon matches `name`.
    pub fn render(
        &self,
        name: &str,
        props: Props,
        node_ref: Option<NodeRef>,
    ) -> Result<VElement, IconryError> {
        let icon = self
            .registry
            .get(name)
            .ok_or_else(|| IconryError::UnknownIcon(name.to_string()))?;

        let props = props.merged_over(&self.config.default_props());
        debug!(icon = icon.name(), attrs = props.len(); "Rendering icon");

        Ok(icon.render(props, node_ref))
    }

    /// Render the icon registered as `name` to an SVG string.
    ///
    /// The icon is mounted on a temporary [`Root`], serialized and unmounted.
    ///
    /// # Errors
    ///
    /// Returns [`IconryError::UnknownIcon`] if no icon matches `name`, or
    /// [`IconryError::Config`] if the configuration is invalid.
    pub fn render_svg(&self, name: &str, props: Props) -> Result<String, IconryError> {
        self.config.validate()?;

        let tree = self.render(name, props, None)?;

        let mut root = Root::new();
        let handle = root.render(tree);
        let svg = export::to_svg_string(&handle, self.config.export().xml_declaration());
        root.unmount();

        info!(icon = name; "SVG rendered successfully");
        Ok(svg)
    }
}
