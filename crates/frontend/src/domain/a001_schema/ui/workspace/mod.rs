//! Schema Workspace UI Module (Standard Tab Structure)
//!
//! Structure:
//! - model.rs: view identities, per-view props and resolution rules
//! - view_model.rs: reactive wrapper around `TabHost`
//! - page.rs: main component with the tab strip and content dispatch
//! - tabs/: default view implementations

mod model;
mod page;
mod tabs;
mod view_model;

pub use model::{
    schema_title, EntityListProps, PermissionProps, SchemaProps, SchemaView, SchemaViewProps,
    NOT_AVAILABLE,
};
pub use page::SchemaWorkspace;
pub use view_model::SchemaWorkspaceVm;
