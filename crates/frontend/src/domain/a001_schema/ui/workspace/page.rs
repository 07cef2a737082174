//! Schema Workspace - Main Page Component

use super::model::{SchemaView, SchemaViewProps};
use super::tabs::{AddEntityTab, EditSchemaTab, EntityListTab, HistoryTab, PermissionsTab};
use super::view_model::SchemaWorkspaceVm;
use crate::shared::icons::icon;
use crate::shared::tab_host::ViewRegistry;
use contracts::domain::a001_schema::SchemaRef;
use leptos::prelude::*;

/// Tabbed host over the active schema.
///
/// `schema` is read fresh on every render; the workspace never writes it.
#[component]
pub fn SchemaWorkspace(
    registry: ViewRegistry<SchemaView>,
    #[prop(into)] schema: Signal<Option<SchemaRef>>,
) -> impl IntoView {
    let vm = SchemaWorkspaceVm::new(registry, schema);

    view! {
        <div class="detail-form" id="a001_schema--detail">
            <Header vm=vm />
            <div class="detail-form-content">
                <TabStrip vm=vm />
                <div class="detail-tab-content">
                    {move || render_view(vm.current_props())}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Header(vm: SchemaWorkspaceVm) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{move || format!("Схема: {}", vm.title())}</h1>
            </div>
        </div>
    }
}

/// Icon/tooltip strip; one button per registry entry
#[component]
fn TabStrip(vm: SchemaWorkspaceVm) -> impl IntoView {
    view! {
        <div class="detail-tabs">
            {vm
                .tabs()
                .into_iter()
                .map(move |(index, tab)| {
                    let tab_icon = icon(tab.icon());
                    let tooltip = tab.tooltip().to_string();
                    let name = tab.name().to_string();
                    view! {
                        <button
                            class="detail-tab"
                            class:active=move || vm.selected_index() == index
                            title=tooltip
                            on:click=move |_| vm.select(index)
                        >
                            {tab_icon}
                            <span>{name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn render_view(props: SchemaViewProps) -> AnyView {
    match props {
        SchemaViewProps::Entities(input) => view! { <EntityListTab input=input /> }.into_any(),
        SchemaViewProps::Edit(input) => view! { <EditSchemaTab input=input /> }.into_any(),
        SchemaViewProps::Add(input) => view! { <AddEntityTab input=input /> }.into_any(),
        SchemaViewProps::Permissions(input) => {
            view! { <PermissionsTab input=input /> }.into_any()
        }
        SchemaViewProps::History(input) => view! { <HistoryTab input=input /> }.into_any(),
    }
}
