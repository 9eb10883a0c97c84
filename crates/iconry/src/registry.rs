//! Name-based lookup of icon components.

use log::{debug, warn};

use crate::{component::IconComponent, icons::GoogleDriveIcon};

/// A collection of icon components addressable by name.
///
/// Lookups try the exact registered name first, then fall back to a loose
/// match that ignores ASCII case, `-`, `_` and spaces, so `"google-drive"`
/// finds `"GoogleDrive"`.
#[derive(Default)]
pub struct IconRegistry {
    icons: Vec<Box<dyn IconComponent>>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in icon.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(GoogleDriveIcon::default());
        registry
    }

    /// Adds `component`, replacing any icon already registered under the
    /// same name.
    pub fn register(&mut self, component: impl IconComponent + 'static) {
        let name = component.name().to_string();
        if let Some(index) = self.icons.iter().position(|icon| icon.name() == name) {
            warn!(name; "Replacing registered icon");
            self.icons[index] = Box::new(component);
        } else {
            debug!(name; "Registering icon");
            self.icons.push(Box::new(component));
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn IconComponent> {
        if let Some(icon) = self.icons.iter().find(|icon| icon.name() == name) {
            return Some(icon.as_ref());
        }

        let wanted = normalize(name);
        self.icons
            .iter()
            .find(|icon| normalize(icon.name()) == wanted)
            .map(|icon| icon.as_ref())
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.name())
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use iconry_core::{NodeRef, Props, VElement};

    use super::*;

    struct Named(&'static str, &'static str);

    impl IconComponent for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn render(&self, _props: Props, _node_ref: Option<NodeRef>) -> VElement {
            VElement::new(self.1)
        }
    }

    #[test]
    fn test_builtin_has_google_drive() {
        let registry = IconRegistry::builtin();

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["GoogleDrive"]);
        assert!(registry.get("GoogleDrive").is_some());
    }

    #[test]
    fn test_loose_lookup() {
        let registry = IconRegistry::builtin();

        for name in ["googledrive", "google-drive", "Google Drive", "GOOGLE_DRIVE"] {
            let icon = registry.get(name);
            assert!(icon.is_some(), "{name} should resolve");
            assert_eq!(icon.unwrap().name(), "GoogleDrive");
        }
        assert!(registry.get("dropbox").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = IconRegistry::new();
        registry.register(Named("Box", "rect"));
        registry.register(Named("Box", "circle"));

        assert_eq!(registry.len(), 1);
        let rendered = registry.get("Box").unwrap().render(Props::new(), None);
        assert_eq!(rendered.tag(), "circle");
    }

    #[test]
    fn test_exact_match_wins_over_loose_match() {
        let mut registry = IconRegistry::new();
        registry.register(Named("ab", "first"));
        registry.register(Named("a-b", "second"));

        assert_eq!(registry.get("a-b").unwrap().render(Props::new(), None).tag(), "second");
        assert_eq!(registry.get("AB").unwrap().render(Props::new(), None).tag(), "first");
    }
}
