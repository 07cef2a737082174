//! Active schema store - the ambient context of the schema workspace.
//!
//! Provided once by `App`; components that need the active schema receive it
//! as an explicit `Signal` prop rather than looking it up themselves.

use super::api;
use contracts::domain::a001_schema::SchemaRef;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ActiveSchemaContext {
    pub schemas: RwSignal<Vec<SchemaRef>>,
    pub active: RwSignal<Option<SchemaRef>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ActiveSchemaContext {
    pub fn new() -> Self {
        Self {
            schemas: RwSignal::new(Vec::new()),
            active: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Load the schema list; keeps the active schema if it still exists,
    /// otherwise falls back to the first one.
    pub fn load(&self, base_url: String) {
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            match api::list_schemas(&base_url).await {
                Ok(response) => {
                    log::debug!("loaded {} schemas", response.schemas.len());
                    let current = this.active.get_untracked().map(|s| s.id);
                    let next = pick_active(&response.schemas, current);
                    this.schemas.set(response.schemas);
                    this.active.set(next);
                }
                Err(e) => {
                    log::error!("Failed to load schemas: {}", e);
                    this.error.set(Some(format!("Ошибка загрузки схем: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn activate(&self, id: i64) {
        let next = self
            .schemas
            .with_untracked(|schemas| schemas.iter().find(|s| s.id == id).cloned());
        log::debug!("active schema: {:?}", next.as_ref().map(|s| s.id));
        self.active.set(next);
    }
}

impl Default for ActiveSchemaContext {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_active(schemas: &[SchemaRef], current: Option<i64>) -> Option<SchemaRef> {
    current
        .and_then(|id| schemas.iter().find(|s| s.id == id))
        .or_else(|| schemas.first())
        .cloned()
}
