pub mod browser;
pub mod workspace;

pub use browser::SchemaBrowser;
pub use workspace::SchemaWorkspace;
