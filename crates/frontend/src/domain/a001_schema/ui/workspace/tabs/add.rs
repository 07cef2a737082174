//! Add tab - new entity form for the active schema

use super::super::model::{schema_title, SchemaProps};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddEntityTab(input: SchemaProps) -> impl IntoView {
    let title = schema_title(input.schema.as_ref());
    let has_schema = input.schema.is_some();

    view! {
        <div class="detail-form-section">
            <h3>{format!("Новая запись: {}", title)}</h3>
            <Button appearance=ButtonAppearance::Primary disabled=!has_schema>
                "Создать"
            </Button>
        </div>
    }
}
