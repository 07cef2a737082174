use super::ConfigError;
use std::collections::HashSet;

/// One selectable slot: a view identity plus its display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor<V> {
    name: String,
    view: V,
    icon: String,
    tooltip: String,
}

impl<V> TabDescriptor<V> {
    pub fn new(
        name: impl Into<String>,
        view: V,
        icon: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            view,
            icon: icon.into(),
            tooltip: tooltip.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// Ordered, non-empty list of tabs. Order is display order; index 0 is the
/// default selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry<V> {
    tabs: Vec<TabDescriptor<V>>,
}

impl<V> ViewRegistry<V> {
    pub fn new(tabs: Vec<TabDescriptor<V>>) -> Result<Self, ConfigError> {
        if tabs.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut seen = HashSet::new();
        for tab in &tabs {
            if !seen.insert(tab.name()) {
                log::warn!("duplicate tab name '{}' in registry", tab.name());
            }
        }

        Ok(Self { tabs })
    }

    pub fn tabs(&self) -> &[TabDescriptor<V>] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Clamps an index into `[0, len - 1]`
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.tabs.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(name: &str, view: u8) -> TabDescriptor<u8> {
        TabDescriptor::new(name, view, "icon", "tooltip")
    }

    #[test]
    fn test_empty_registry_is_rejected() {
        let result = ViewRegistry::<u8>::new(Vec::new());
        assert_eq!(result, Err(ConfigError::Empty));
    }

    #[test]
    fn test_order_is_preserved() {
        let registry = ViewRegistry::new(vec![tab("b", 2), tab("a", 1), tab("c", 3)]).unwrap();
        let names: Vec<_> = registry.tabs().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_names_and_views_are_allowed() {
        let registry = ViewRegistry::new(vec![tab("a", 1), tab("a", 1)]).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clamp() {
        let registry = ViewRegistry::new(vec![tab("a", 1), tab("b", 2)]).unwrap();
        assert_eq!(registry.clamp(0), 0);
        assert_eq!(registry.clamp(1), 1);
        assert_eq!(registry.clamp(99), 1);
    }
}
