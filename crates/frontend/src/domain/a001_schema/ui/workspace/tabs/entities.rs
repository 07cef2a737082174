//! Entities tab - entity listing of the active schema

use super::super::model::{schema_title, EntityListProps};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EntityListTab(input: EntityListProps) -> impl IntoView {
    let title = schema_title(input.schema.as_ref());

    view! {
        <div class="entity-list">
            <div class="entity-list__toolbar">
                <h3>{format!("Записи: {}", title)}</h3>
                {input.advanced_controls.then(|| view! {
                    <Space>
                        <Button appearance=ButtonAppearance::Subtle>"Фильтры"</Button>
                        <Button appearance=ButtonAppearance::Subtle>"Колонки"</Button>
                        <Button appearance=ButtonAppearance::Subtle>"Экспорт"</Button>
                    </Space>
                })}
            </div>
            {input.schema.is_none().then(|| view! { <div>"Схема не выбрана"</div> })}
        </div>
    }
}
