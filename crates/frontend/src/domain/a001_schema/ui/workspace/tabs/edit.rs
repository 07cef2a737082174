//! Edit tab - schema editor

use super::super::model::SchemaProps;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EditSchemaTab(input: SchemaProps) -> impl IntoView {
    let Some(schema) = input.schema else {
        return view! { <div>"Схема не выбрана"</div> }.into_any();
    };

    let name = RwSignal::new(schema.display_name().unwrap_or_default().to_string());

    view! {
        <div class="detail-form-section">
            <Flex vertical=true gap=FlexGap::Small>
                <div>
                    <span class="form__label">"ID"</span>
                    <span>{schema.id}</span>
                </div>
                <div>
                    <span class="form__label">"Наименование"</span>
                    <Input value=name />
                </div>
            </Flex>
        </div>
    }
    .into_any()
}
