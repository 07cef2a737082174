//! Schema Workspace - Model Layer
//!
//! View identities, the input props of each view and the resolution rules
//! that derive those props from the active schema.

use crate::shared::tab_host::ResolveProps;
use contracts::domain::a001_schema::SchemaRef;
use contracts::domain::common::EditableObjectType;
use serde::{Deserialize, Serialize};

/// Заглушка заголовка, когда схема не загружена или без имени
pub const NOT_AVAILABLE: &str = "n/a";

/// Closed set of views a schema workspace can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaView {
    /// Entity listing
    Entities,
    /// Schema editor
    Edit,
    /// New entity form
    Add,
    /// Permission listing
    Permissions,
    /// Change history
    History,
}

/// Input of the entity listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityListProps {
    pub schema: Option<SchemaRef>,
    pub advanced_controls: bool,
}

/// Input shared by the schema-bearing views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaProps {
    pub schema: Option<SchemaRef>,
}

/// Input of the permission listing: object tag plus id, not the schema itself
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionProps {
    pub object_type: EditableObjectType,
    pub object_id: Option<i64>,
}

/// Resolved input of whichever view is active
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaViewProps {
    Entities(EntityListProps),
    Edit(SchemaProps),
    Add(SchemaProps),
    Permissions(PermissionProps),
    History(SchemaProps),
}

impl ResolveProps for SchemaView {
    type Context = SchemaRef;
    type Props = SchemaViewProps;

    fn resolve(&self, schema: Option<&SchemaRef>) -> SchemaViewProps {
        match self {
            SchemaView::Permissions => SchemaViewProps::Permissions(PermissionProps {
                object_type: EditableObjectType::Schema,
                object_id: schema.map(|s| s.id),
            }),
            SchemaView::Entities => SchemaViewProps::Entities(EntityListProps {
                schema: schema.cloned(),
                advanced_controls: true,
            }),
            SchemaView::Edit => SchemaViewProps::Edit(SchemaProps {
                schema: schema.cloned(),
            }),
            SchemaView::Add => SchemaViewProps::Add(SchemaProps {
                schema: schema.cloned(),
            }),
            SchemaView::History => SchemaViewProps::History(SchemaProps {
                schema: schema.cloned(),
            }),
        }
    }
}

/// Display title of the active schema; [`NOT_AVAILABLE`] when there is none
pub fn schema_title(schema: Option<&SchemaRef>) -> String {
    schema
        .and_then(SchemaRef::display_name)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tab_host::{TabDescriptor, TabHost, ViewRegistry};
    use serde_json::json;

    const ALL_VIEWS: [SchemaView; 5] = [
        SchemaView::Entities,
        SchemaView::Edit,
        SchemaView::Add,
        SchemaView::Permissions,
        SchemaView::History,
    ];

    fn host() -> TabHost<SchemaView> {
        let tabs = ["Entities", "Edit", "Add", "Permissions", "History"]
            .into_iter()
            .zip(ALL_VIEWS)
            .map(|(name, view)| TabDescriptor::new(name, view, "icon", "tooltip"))
            .collect();
        TabHost::new(ViewRegistry::new(tabs).unwrap())
    }

    fn invoice() -> SchemaRef {
        SchemaRef::new(7, "Invoice")
    }

    /// Property name -> value form of the props
    fn to_map(props: &SchemaViewProps) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(props).unwrap() {
            serde_json::Value::Object(map) => map,
            other => panic!("props serialized to {}", other),
        }
    }

    #[test]
    fn test_entities_tab_with_schema() {
        let mut host = host();
        host.select(0).unwrap();
        let props = host.current_props(Some(&invoice()));
        assert_eq!(
            serde_json::Value::Object(to_map(&props)),
            json!({"schema": {"id": 7, "name": "Invoice"}, "advancedControls": true})
        );
    }

    #[test]
    fn test_permissions_tab_with_schema() {
        let mut host = host();
        host.select(3).unwrap();
        let props = host.current_props(Some(&invoice()));
        assert_eq!(
            serde_json::Value::Object(to_map(&props)),
            json!({"objectType": "Schema", "objectId": 7})
        );
    }

    #[test]
    fn test_edit_tab_without_schema() {
        let mut host = host();
        host.select(1).unwrap();
        let props = host.current_props(None);
        assert_eq!(props, SchemaViewProps::Edit(SchemaProps { schema: None }));
        assert_eq!(
            serde_json::Value::Object(to_map(&props)),
            json!({"schema": null})
        );
        assert_eq!(schema_title(None), NOT_AVAILABLE);
    }

    #[test]
    fn test_programmatic_out_of_range_selection() {
        let mut host = host();
        let err = host.select(99).unwrap_err();
        assert_eq!(err.index, 99);
        assert_eq!(err.len, 5);
    }

    #[test]
    fn test_permissions_never_carry_schema() {
        let contexts = [
            None,
            Some(invoice()),
            Some(SchemaRef { id: 0, name: None }),
        ];
        for ctx in &contexts {
            let map = to_map(&SchemaView::Permissions.resolve(ctx.as_ref()));
            assert!(!map.contains_key("schema"));
            assert_eq!(map.get("objectType"), Some(&json!("Schema")));
        }
    }

    #[test]
    fn test_advanced_controls_only_for_entities() {
        let schema = invoice();
        for view in ALL_VIEWS {
            let map = to_map(&view.resolve(Some(&schema)));
            let expected = (view == SchemaView::Entities).then(|| json!(true));
            assert_eq!(map.get("advancedControls").cloned(), expected, "{:?}", view);
        }
    }

    #[test]
    fn test_entities_tab_without_schema_keeps_advanced_controls() {
        assert_eq!(
            serde_json::Value::Object(to_map(&SchemaView::Entities.resolve(None))),
            json!({"schema": null, "advancedControls": true})
        );
    }

    #[test]
    fn test_schema_views_receive_only_schema() {
        let schema = invoice();
        for view in [SchemaView::Edit, SchemaView::Add, SchemaView::History] {
            let map = to_map(&view.resolve(Some(&schema)));
            assert_eq!(
                serde_json::Value::Object(map),
                json!({"schema": {"id": 7, "name": "Invoice"}})
            );
        }
    }

    #[test]
    fn test_select_then_props_reflects_new_tab() {
        let mut host = host();
        let schema = invoice();
        assert!(matches!(
            host.current_props(Some(&schema)),
            SchemaViewProps::Entities(_)
        ));
        host.select(4).unwrap();
        assert!(matches!(
            host.current_props(Some(&schema)),
            SchemaViewProps::History(_)
        ));
    }

    #[test]
    fn test_current_props_is_idempotent() {
        let mut host = host();
        let schema = invoice();
        for index in 0..5 {
            host.select(index).unwrap();
            assert_eq!(
                host.current_props(Some(&schema)),
                host.current_props(Some(&schema))
            );
        }
    }

    #[test]
    fn test_props_follow_context_changes() {
        let host = host();
        let first = host.current_props(Some(&invoice()));
        let second = host.current_props(Some(&SchemaRef::new(8, "Order")));
        assert_ne!(first, second);
        assert_eq!(
            second,
            SchemaViewProps::Entities(EntityListProps {
                schema: Some(SchemaRef::new(8, "Order")),
                advanced_controls: true,
            })
        );
    }

    #[test]
    fn test_schema_title() {
        assert_eq!(schema_title(Some(&invoice())), "Invoice");
        assert_eq!(schema_title(Some(&SchemaRef { id: 1, name: None })), NOT_AVAILABLE);
        assert_eq!(schema_title(Some(&SchemaRef::new(1, ""))), NOT_AVAILABLE);
    }

    #[test]
    fn test_view_deserializes_from_snake_case() {
        let view: SchemaView = serde_json::from_str(r#""permissions""#).unwrap();
        assert_eq!(view, SchemaView::Permissions);
    }
}
