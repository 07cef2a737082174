pub mod a001_schema;
