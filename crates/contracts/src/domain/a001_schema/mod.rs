//! a001: Schema — the object that owns entities, permissions and change history

pub mod aggregate;

pub use aggregate::{ListSchemasResponse, SchemaRef};
