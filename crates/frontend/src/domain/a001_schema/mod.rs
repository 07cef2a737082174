//! a001: Schema workspace
//!
//! Structure:
//! - api.rs: backend calls (schema list, change history)
//! - context.rs: active schema store provided to the whole app
//! - ui/: schema browser and the tabbed workspace

pub mod api;
pub mod context;
pub mod ui;

pub use context::ActiveSchemaContext;
