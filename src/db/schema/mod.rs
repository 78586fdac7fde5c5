//! Backend-agnostic database schema definitions.
//!
//! Every registered model is stored in one relation keyed by an integer `id`.
//! The value columns follow the model's fields in declaration order.
//!
//! # Type Mapping
//!
//! | Field type | Cozo type |
//! |------------|-----------|
//! | BooleanField | Bool |
//! | NullBooleanField | Bool? |
//! | integer fields, relations | Int |
//! | text, email, slug, URL, date, date-time, time | String |
//!
//! Nullable fields get the `?` suffix.

pub mod compilers;
mod definition;
mod relations;

pub use definition::{DataType, SchemaField, SchemaRelation};
pub use relations::{PRIMARY_KEY, model_relation};
