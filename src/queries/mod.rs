//! Store queries used by the commands and the generator.

pub mod rows;
pub mod schema;
