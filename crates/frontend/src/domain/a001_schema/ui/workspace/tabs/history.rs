//! History tab - change requests raised against the active schema

use super::super::model::SchemaProps;
use crate::config::ApiConfig;
use crate::domain::a001_schema::api;
use crate::shared::date_utils::format_timestamp;
use contracts::domain::common::EditableObjectType;
use contracts::system::traceability::{ChangeRequestSummary, ChangeStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_color(status: ChangeStatus) -> BadgeColor {
    match status {
        ChangeStatus::Pending => BadgeColor::Warning,
        ChangeStatus::Approved => BadgeColor::Success,
        ChangeStatus::Declined => BadgeColor::Danger,
    }
}

/// "кто, когда" for reviewed requests; empty while pending
fn review_note(item: &ChangeRequestSummary) -> String {
    if !item.is_reviewed() {
        return String::new();
    }
    let reviewer = item.reviewed_by.as_deref().unwrap_or("-");
    match &item.reviewed_at {
        Some(at) => format!("{}, {}", reviewer, format_timestamp(at)),
        None => reviewer.to_string(),
    }
}

#[component]
pub fn HistoryTab(input: SchemaProps) -> impl IntoView {
    let (items, set_items) = signal(Vec::<ChangeRequestSummary>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let base_url = use_context::<ApiConfig>()
        .map(|config| config.base_url)
        .unwrap_or_default();

    if let Some(schema_id) = input.schema.as_ref().map(|s| s.id) {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_change_requests(&base_url, EditableObjectType::Schema, schema_id)
                .await
            {
                Ok(response) => set_items.set(response.items),
                Err(e) => {
                    log::error!("Failed to load change history: {}", e);
                    set_error.set(Some(format!("Ошибка загрузки истории: {}", e)));
                }
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="detail-form-section">
            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                            <span>"Загрузка истории..."</span>
                        </Flex>
                    }
                        .into_any()
                } else if let Some(err) = error.get() {
                    view! { <div class="error-message">{err}</div> }.into_any()
                } else if items.with(|items| items.is_empty()) {
                    view! { <div>"Изменений нет"</div> }.into_any()
                } else {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Дата"</TableHeaderCell>
                                    <TableHeaderCell>"Автор"</TableHeaderCell>
                                    <TableHeaderCell>"Операция"</TableHeaderCell>
                                    <TableHeaderCell>"Статус"</TableHeaderCell>
                                    <TableHeaderCell>"Рассмотрено"</TableHeaderCell>
                                    <TableHeaderCell>"Комментарий"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {items
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let review = review_note(&item);
                                        view! {
                                            <TableRow>
                                                <TableCell>{format_timestamp(&item.created_at)}</TableCell>
                                                <TableCell>{item.created_by}</TableCell>
                                                <TableCell>{item.change_type.label()}</TableCell>
                                                <TableCell>
                                                    <Badge
                                                        appearance=BadgeAppearance::Tint
                                                        color=status_color(item.status)
                                                    >
                                                        {item.status.label()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>{review}</TableCell>
                                                <TableCell>{item.comment.unwrap_or_default()}</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::system::traceability::ChangeType;

    fn request(status: ChangeStatus) -> ChangeRequestSummary {
        ChangeRequestSummary {
            id: 1,
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap(),
            created_by: "admin".to_string(),
            object_type: EditableObjectType::Schema,
            object_id: Some(7),
            change_type: ChangeType::Update,
            status,
            comment: None,
            reviewed_at: None,
            reviewed_by: None,
        }
    }

    #[test]
    fn test_review_note() {
        let mut item = request(ChangeStatus::Approved);
        item.reviewed_by = Some("reviewer".to_string());
        item.reviewed_at = Some(Utc.with_ymd_and_hms(2024, 3, 16, 9, 30, 0).unwrap());
        assert_eq!(review_note(&item), "reviewer, 16.03.2024 09:30:00");

        item.reviewed_at = None;
        assert_eq!(review_note(&item), "reviewer");

        let mut declined = request(ChangeStatus::Declined);
        declined.reviewed_at = Some(Utc.with_ymd_and_hms(2024, 3, 16, 9, 30, 0).unwrap());
        assert_eq!(review_note(&declined), "-, 16.03.2024 09:30:00");
    }

    #[test]
    fn test_pending_request_has_no_review_note() {
        let mut item = request(ChangeStatus::Pending);
        item.reviewed_by = Some("reviewer".to_string());
        assert_eq!(review_note(&item), "");
    }
}
