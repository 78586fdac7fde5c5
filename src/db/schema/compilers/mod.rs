//! Database schema compilers.
//!
//! Converts `SchemaRelation` definitions into CozoScript: DDL, inserts and
//! the small read queries the generator needs.

pub mod cozo;

pub use cozo::CozoCompiler;
