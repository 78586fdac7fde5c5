//! Model registry: the schema the generator introspects.
//!
//! The registry is loaded from a JSON schema file listing apps, their models
//! and each model's fields. Once loaded it answers three questions:
//!
//! - which model does `module.model` name (`get_model`)
//! - which model does a relation field point at (`resolve_relation`)
//! - which models point back at a given model (`related_objects`)
//!
//! Everything is validated on load so the generator can rely on relation
//! targets resolving and defaults fitting their column types.

mod definition;

pub use definition::{AppDef, Choice, FieldDef, FieldType, ModelDef};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read schema file '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid schema JSON: {message}")]
    ParseFailed { message: String },

    #[error("Invalid name '{name}': names must start with a letter and contain only letters, digits and underscores")]
    InvalidName { name: String },

    #[error("Duplicate app label '{label}'")]
    DuplicateApp { label: String },

    #[error("Duplicate model '{model}' in app '{app}'")]
    DuplicateModel { app: String, model: String },

    #[error("Duplicate field '{field}' on model '{model}'")]
    DuplicateField { model: String, field: String },

    #[error("Field '{field}' on model '{model}' uses a reserved name")]
    ReservedField { model: String, field: String },

    #[error("Relation field '{model}.{field}' has no 'to' target")]
    MissingTarget { model: String, field: String },

    #[error("Field '{model}.{field}' is not a relation but declares 'to'")]
    UnexpectedTarget { model: String, field: String },

    #[error("Relation field '{model}.{field}' points at unknown model '{target}'")]
    UnknownTarget {
        model: String,
        field: String,
        target: String,
    },

    #[error("Value {value} does not fit field '{model}.{field}'")]
    InvalidValue {
        model: String,
        field: String,
        value: String,
    },
}

/// A reverse relation: `field` on `model` points at the model asked about.
#[derive(Debug, Clone, Copy)]
pub struct RelatedObject<'a> {
    pub model: &'a ModelDef,
    pub field: &'a FieldDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelRegistry {
    #[serde(default)]
    apps: Vec<AppDef>,
}

impl ModelRegistry {
    /// Load and validate a registry from a schema file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|e| RegistryError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a registry from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, RegistryError> {
        let mut registry: ModelRegistry =
            serde_json::from_str(content).map_err(|e| RegistryError::ParseFailed {
                message: e.to_string(),
            })?;

        for app in &mut registry.apps {
            for model in &mut app.models {
                model.app = app.label.clone();
            }
        }

        registry.validate()?;
        Ok(registry)
    }

    pub fn apps(&self) -> &[AppDef] {
        &self.apps
    }

    /// All models in declaration order.
    pub fn models(&self) -> impl Iterator<Item = &ModelDef> {
        self.apps.iter().flat_map(|app| app.models.iter())
    }

    /// Look up a model by app label and name. The model name is matched
    /// case-insensitively.
    pub fn get_model(&self, module: &str, model: &str) -> Option<&ModelDef> {
        self.apps
            .iter()
            .find(|app| app.label == module)?
            .models
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(model))
    }

    /// Resolve the target of a relation field declared on `model`.
    pub fn resolve_relation(&self, model: &ModelDef, field: &FieldDef) -> Option<&ModelDef> {
        let target = field.to.as_deref()?;
        match target.split_once('.') {
            Some((app, name)) => self.get_model(app, name),
            None => self.get_model(&model.app, target),
        }
    }

    /// Every relation field in the registry that points at `model`.
    pub fn related_objects(&self, model: &ModelDef) -> Vec<RelatedObject<'_>> {
        let mut related = Vec::new();
        for candidate in self.models() {
            for field in candidate.relation_fields() {
                if self
                    .resolve_relation(candidate, field)
                    .is_some_and(|target| target.is(model))
                {
                    related.push(RelatedObject {
                        model: candidate,
                        field,
                    });
                }
            }
        }
        related
    }

    /// Models that `model` points at through any of its relation fields.
    pub fn relation_targets(&self, model: &ModelDef) -> Vec<&ModelDef> {
        model
            .relation_fields()
            .filter_map(|field| self.resolve_relation(model, field))
            .collect()
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let mut labels = HashSet::new();
        for app in &self.apps {
            check_name(&app.label)?;
            if !labels.insert(app.label.as_str()) {
                return Err(RegistryError::DuplicateApp {
                    label: app.label.clone(),
                });
            }

            let mut names = HashSet::new();
            for model in &app.models {
                check_name(&model.name)?;
                if !names.insert(model.name.to_lowercase()) {
                    return Err(RegistryError::DuplicateModel {
                        app: app.label.clone(),
                        model: model.name.clone(),
                    });
                }
                self.validate_fields(model)?;
            }
        }
        Ok(())
    }

    fn validate_fields(&self, model: &ModelDef) -> Result<(), RegistryError> {
        let mut names = HashSet::new();
        for field in &model.fields {
            check_name(&field.name)?;
            if RESERVED_FIELD_NAMES.contains(&field.name.as_str()) {
                return Err(RegistryError::ReservedField {
                    model: model.label(),
                    field: field.name.clone(),
                });
            }
            if !names.insert(field.name.as_str()) {
                return Err(RegistryError::DuplicateField {
                    model: model.label(),
                    field: field.name.clone(),
                });
            }

            match (&field.to, field.is_relation()) {
                (None, true) => {
                    return Err(RegistryError::MissingTarget {
                        model: model.label(),
                        field: field.name.clone(),
                    });
                }
                (Some(_), false) => {
                    return Err(RegistryError::UnexpectedTarget {
                        model: model.label(),
                        field: field.name.clone(),
                    });
                }
                (Some(target), true) if self.resolve_relation(model, field).is_none() => {
                    return Err(RegistryError::UnknownTarget {
                        model: model.label(),
                        field: field.name.clone(),
                        target: target.clone(),
                    });
                }
                _ => {}
            }

            let declared = field
                .default
                .iter()
                .chain(field.choices.iter().map(|c| &c.0));
            for value in declared {
                if field.value_from_json(value).is_none() {
                    return Err(RegistryError::InvalidValue {
                        model: model.label(),
                        field: field.name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// The implicit primary key and words CozoScript reads as literals or
/// operators, which cannot be used as column names.
const RESERVED_FIELD_NAMES: &[&str] = &["id", "null", "true", "false", "and", "or", "not"];

fn check_name(name: &str) -> Result<(), RegistryError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidName {
            name: name.to_string(),
        })
    }
}
