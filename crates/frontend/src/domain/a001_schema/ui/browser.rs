//! Schema browser - picks the active schema of the workspace

use crate::domain::a001_schema::ActiveSchemaContext;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SchemaBrowser() -> impl IntoView {
    let Some(ctx) = use_context::<ActiveSchemaContext>() else {
        log::error!("ActiveSchemaContext not provided");
        return ().into_any();
    };

    view! {
        <nav class="schema-browser">
            <h2 class="schema-browser__title">"Схемы"</h2>
            {move || {
                if ctx.loading.get() {
                    view! { <Spinner /> }.into_any()
                } else if let Some(err) = ctx.error.get() {
                    view! { <div class="error-message">{err}</div> }.into_any()
                } else {
                    let active_id = ctx.active.with(|active| active.as_ref().map(|s| s.id));
                    ctx.schemas
                        .get()
                        .into_iter()
                        .map(|schema| {
                            let id = schema.id;
                            let label = schema
                                .display_name()
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("#{}", id));
                            let appearance = if active_id == Some(id) {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            };
                            view! {
                                <Button appearance=appearance on_click=move |_| ctx.activate(id)>
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </nav>
    }
    .into_any()
}
