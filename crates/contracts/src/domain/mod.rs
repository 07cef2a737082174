pub mod a001_schema;
pub mod common;
