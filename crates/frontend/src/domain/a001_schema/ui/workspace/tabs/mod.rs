//! Schema Workspace Tabs
//!
//! Default view implementations. Each one renders only from its props.

pub mod add;
pub mod edit;
pub mod entities;
pub mod history;
pub mod permissions;

pub use add::AddEntityTab;
pub use edit::EditSchemaTab;
pub use entities::EntityListTab;
pub use history::HistoryTab;
pub use permissions::PermissionsTab;
