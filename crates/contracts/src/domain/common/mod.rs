//! Common types shared by all editable objects

pub mod editable_object;

// Re-exports
pub use editable_object::EditableObjectType;
