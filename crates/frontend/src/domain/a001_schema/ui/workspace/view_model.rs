//! ViewModel for the schema workspace

use super::model::{schema_title, SchemaView, SchemaViewProps};
use crate::shared::tab_host::{TabDescriptor, TabHost, ViewRegistry};
use contracts::domain::a001_schema::SchemaRef;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SchemaWorkspaceVm {
    /// Registry plus selected tab
    pub host: RwSignal<TabHost<SchemaView>>,
    /// Active schema, owned by an ancestor
    pub schema: Signal<Option<SchemaRef>>,
}

impl SchemaWorkspaceVm {
    pub fn new(registry: ViewRegistry<SchemaView>, schema: Signal<Option<SchemaRef>>) -> Self {
        Self {
            host: RwSignal::new(TabHost::new(registry)),
            schema,
        }
    }

    /// Tabs in display order with their indices
    pub fn tabs(&self) -> Vec<(usize, TabDescriptor<SchemaView>)> {
        self.host.with_untracked(|host| {
            host.registry()
                .tabs()
                .iter()
                .cloned()
                .enumerate()
                .collect()
        })
    }

    pub fn selected_index(&self) -> usize {
        self.host.with(|host| host.selected_index())
    }

    /// Tab click; re-selecting the active tab notifies nobody
    pub fn select(&self, index: usize) {
        self.host.maybe_update(|host| {
            let before = host.selected_index();
            host.select_clamped(index) != before
        });
    }

    /// Props of the selected view, re-derived on every read
    pub fn current_props(&self) -> SchemaViewProps {
        let schema = self.schema;
        self.host
            .with(|host| schema.with(|schema| host.current_props(schema.as_ref())))
    }

    pub fn title(&self) -> String {
        self.schema.with(|schema| schema_title(schema.as_ref()))
    }
}
