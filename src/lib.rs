//! seed_data library - fake data generation for registered models
//!
//! Loads a JSON model registry, creates one CozoDB relation per model and
//! fills it with generated rows, following foreign keys and reverse
//! relations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod generator;
pub mod output;
pub mod queries;
pub mod registry;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
