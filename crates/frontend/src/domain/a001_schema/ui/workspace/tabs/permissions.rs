//! Permissions tab - permission listing of one editable object

use super::super::model::{PermissionProps, NOT_AVAILABLE};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PermissionsTab(input: PermissionProps) -> impl IntoView {
    let object_id = input
        .object_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    view! {
        <div class="detail-form-section">
            <Space>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {input.object_type.as_str()}
                </Badge>
                <span>{format!("#{}", object_id)}</span>
            </Space>
        </div>
    }
}
