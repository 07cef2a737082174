use super::{RangeError, ResolveProps, TabDescriptor, ViewRegistry};

/// Selection state over a fixed [`ViewRegistry`].
///
/// The selected index is the only mutable state. It changes only through
/// [`TabHost::select`] (programmatic, checked) or [`TabHost::select_clamped`]
/// (tab clicks).
#[derive(Debug, Clone)]
pub struct TabHost<V> {
    registry: ViewRegistry<V>,
    selected: usize,
}

impl<V> TabHost<V> {
    pub fn new(registry: ViewRegistry<V>) -> Self {
        Self {
            registry,
            selected: 0,
        }
    }

    pub fn registry(&self) -> &ViewRegistry<V> {
        &self.registry
    }

    /// Current selection, always a valid index into the registry
    pub fn selected_index(&self) -> usize {
        self.registry.clamp(self.selected)
    }

    /// Selects the tab at `index`; out-of-range input is rejected and leaves
    /// the selection unchanged.
    pub fn select(&mut self, index: usize) -> Result<(), RangeError> {
        let len = self.registry.len();
        if index >= len {
            log::warn!("rejected tab selection {} (registry has {} tabs)", index, len);
            return Err(RangeError { index, len });
        }
        self.selected = index;
        log::debug!("tab selected: {} '{}'", index, self.selected().name());
        Ok(())
    }

    /// Selection from the tab strip. Never fails; returns the index actually
    /// selected.
    pub fn select_clamped(&mut self, index: usize) -> usize {
        self.selected = self.registry.clamp(index);
        log::debug!(
            "tab selected: {} '{}'",
            self.selected,
            self.selected().name()
        );
        self.selected
    }

    pub fn selected(&self) -> &TabDescriptor<V> {
        // non-empty registry: clamped index is always present
        &self.registry.tabs()[self.selected_index()]
    }
}

impl<V: ResolveProps> TabHost<V> {
    /// Input of the selected view, recomputed on every call
    pub fn current_props(&self, ctx: Option<&V::Context>) -> V::Props {
        self.selected().view().resolve(ctx)
    }
}
