//! Recursive fake-data generation for registered models.
//!
//! A `DataGenerator` fills `count` rows of one model. For every required
//! field it draws a value from the dispatch table in [`fakes`], or, for
//! relations, the id of an existing related row. Empty related tables are
//! populated first by a nested generator. After each row is saved, models
//! that point back at this one get their own rows.
//!
//! All generators of one run share a [`GenerationContext`]: the registry,
//! the store, the random source, the stack of generators in progress and the
//! running report.

pub mod fakes;

use std::error::Error;

use cozo::{DataValue, Num};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;

use crate::db::DatabaseBackend;
use crate::db::schema::{SchemaRelation, model_relation};
use crate::queries::{rows, schema};
use crate::registry::{FieldDef, ModelDef, ModelRegistry};

/// Collisions tolerated for one unique value before giving up.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Largest row count accepted from the command line.
pub const MAX_SIZE: u32 = 1000;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Model could not be found: {module}.{model}")]
    ModelNotFound { module: String, model: String },

    #[error("Relation {model}.{field} points at {target}, which is not a registered model")]
    UnresolvedRelation {
        model: String,
        field: String,
        target: String,
    },

    #[error("Relation {model}.{field} points at {target}, which has no rows")]
    NoRelatedRows {
        model: String,
        field: String,
        target: String,
    },

    #[error("Cyclic dependency: {model}.{field} needs a {target} row while {target} is still being generated")]
    CyclicDependency {
        model: String,
        field: String,
        target: String,
    },

    #[error("No unique value found for {model}.{field} after {attempts} attempts")]
    UniqueExhausted {
        model: String,
        field: String,
        attempts: usize,
    },

    #[error("Field {model}.{field} ({field_type}) has no value generator")]
    NoGenerator {
        model: String,
        field: String,
        field_type: &'static str,
    },

    #[error("Field {model}.{field} has no usable stored value")]
    InvalidValue { model: String, field: String },
}

/// Rows written for one model during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRows {
    pub model: String,
    pub rows: usize,
}

/// Rows written per model, in order of the first write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub models: Vec<ModelRows>,
}

impl GenerationReport {
    fn record(&mut self, model: &str) {
        match self.models.iter_mut().find(|m| m.model == model) {
            Some(entry) => entry.rows += 1,
            None => self.models.push(ModelRows {
                model: model.to_string(),
                rows: 1,
            }),
        }
    }

    /// Rows written for `model` (an `app.Model` label).
    pub fn rows_for(&self, model: &str) -> usize {
        self.models
            .iter()
            .find(|m| m.model == model)
            .map_or(0, |m| m.rows)
    }

    pub fn total_rows(&self) -> usize {
        self.models.iter().map(|m| m.rows).sum()
    }
}

/// A generator in progress: the model and the model whose dependents it
/// fills, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    model: String,
    related: Option<String>,
}

/// State shared by every generator of one run.
pub struct GenerationContext<'a> {
    registry: &'a ModelRegistry,
    db: &'a dyn DatabaseBackend,
    rng: StdRng,
    stack: Vec<Frame>,
    report: GenerationReport,
}

impl<'a> GenerationContext<'a> {
    /// A fixed `seed` makes the run reproducible.
    pub fn new(registry: &'a ModelRegistry, db: &'a dyn DatabaseBackend, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            registry,
            db,
            rng,
            stack: Vec::new(),
            report: GenerationReport::default(),
        }
    }

    pub fn into_report(self) -> GenerationReport {
        self.report
    }

    fn in_progress(&self, model: &ModelDef) -> bool {
        let label = model.label();
        self.stack.iter().any(|f| f.model == label)
    }

    /// Whether `model` is already being filled as a dependent of `related`.
    fn filling_dependents(&self, model: &ModelDef, related: &ModelDef) -> bool {
        let frame = Frame {
            model: model.label(),
            related: Some(related.label()),
        };
        self.stack.contains(&frame)
    }
}

/// Generates `count` rows of one model.
pub struct DataGenerator<'a> {
    model: &'a ModelDef,
    count: usize,
}

impl<'a> DataGenerator<'a> {
    pub fn new(model: &'a ModelDef, count: usize) -> Self {
        Self { model, count }
    }

    /// Generate rows for this model, its dependencies and the models that
    /// point back at it.
    ///
    /// `related` is the model whose dependents are being generated. Its
    /// table is not populated again when one of this model's relations
    /// points at it.
    pub fn generate_data(
        &self,
        ctx: &mut GenerationContext<'a>,
        related: Option<&ModelDef>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(
            model = %self.model.label(),
            count = self.count,
            related = related.map(|r| r.label()).as_deref(),
            "generating rows"
        );
        ctx.stack.push(Frame {
            model: self.model.label(),
            related: related.map(|r| r.label()),
        });
        let result = self.generate_rows(ctx, related);
        ctx.stack.pop();
        result
    }

    fn generate_rows(
        &self,
        ctx: &mut GenerationContext<'a>,
        related: Option<&ModelDef>,
    ) -> Result<(), Box<dyn Error>> {
        let label = self.model.label();
        let relation = model_relation(self.model);

        for _ in 0..self.count {
            let mut values = Vec::with_capacity(self.model.fields.len());
            for field in &self.model.fields {
                let value = if !field.is_required() {
                    field.stored_value().ok_or_else(|| GenerateError::InvalidValue {
                        model: label.clone(),
                        field: field.name.clone(),
                    })?
                } else if field.is_relation() {
                    match self.relation_value(ctx, &relation, field, related)? {
                        Some(value) => value,
                        None => {
                            tracing::warn!(
                                model = %label,
                                field = %field.name,
                                "every related row is already taken, stopping early"
                            );
                            return Ok(());
                        }
                    }
                } else {
                    self.field_value(ctx, &relation, field)?
                };
                values.push(value);
            }

            let key = rows::next_key(ctx.db, &relation)?;
            rows::insert_row(ctx.db, &relation, key, values)?;
            ctx.report.record(&label);
            tracing::trace!(model = %label, id = key, "saved row");

            self.generate_related_objects(ctx)?;
        }
        Ok(())
    }

    /// Id of a related row for a required relation field.
    ///
    /// Returns `Ok(None)` when a unique relation has no unreferenced row left.
    fn relation_value(
        &self,
        ctx: &mut GenerationContext<'a>,
        relation: &SchemaRelation,
        field: &FieldDef,
        related: Option<&ModelDef>,
    ) -> Result<Option<DataValue>, Box<dyn Error>> {
        let registry = ctx.registry;
        let target = registry
            .resolve_relation(self.model, field)
            .ok_or_else(|| GenerateError::UnresolvedRelation {
                model: self.model.label(),
                field: field.name.clone(),
                target: field.to.clone().unwrap_or_default(),
            })?;
        let target_relation = model_relation(target);

        let is_related = related.is_some_and(|r| r.is(target));
        if !is_related && rows::count_rows(ctx.db, &target_relation)? == 0 {
            if ctx.in_progress(target) {
                return Err(GenerateError::CyclicDependency {
                    model: self.model.label(),
                    field: field.name.clone(),
                    target: target.label(),
                }
                .into());
            }
            DataGenerator::new(target, self.count).generate_data(ctx, None)?;
        }

        let taken = if field.is_unique() {
            rows::column_values(ctx.db, relation, &field.name)?
        } else {
            Vec::new()
        };

        match foreign_object(ctx, &target_relation, &taken)? {
            Some(id) => Ok(Some(DataValue::Num(Num::Int(id)))),
            None if field.is_unique() => Ok(None),
            None => Err(GenerateError::NoRelatedRows {
                model: self.model.label(),
                field: field.name.clone(),
                target: target.label(),
            }
            .into()),
        }
    }

    /// Fake value for a required non-relation field, regenerated until it
    /// is unused when the field is unique.
    fn field_value(
        &self,
        ctx: &mut GenerationContext<'a>,
        relation: &SchemaRelation,
        field: &FieldDef,
    ) -> Result<DataValue, Box<dyn Error>> {
        let generate = fakes::value_fn(field.field_type).ok_or_else(|| GenerateError::NoGenerator {
            model: self.model.label(),
            field: field.name.clone(),
            field_type: field.field_type.type_name(),
        })?;

        let mut value = self.shape(field, generate(&mut ctx.rng), &mut ctx.rng)?;
        if !field.is_unique() {
            return Ok(value);
        }

        let mut attempts = 1;
        while rows::value_exists(ctx.db, relation, &field.name, &value)? {
            if attempts >= MAX_UNIQUE_ATTEMPTS {
                return Err(GenerateError::UniqueExhausted {
                    model: self.model.label(),
                    field: field.name.clone(),
                    attempts,
                }
                .into());
            }
            value = self.shape(field, generate(&mut ctx.rng), &mut ctx.rng)?;
            attempts += 1;
        }
        Ok(value)
    }

    /// Apply the field's choices or length limit to a generated value.
    fn shape(&self, field: &FieldDef, value: DataValue, rng: &mut StdRng) -> Result<DataValue, GenerateError> {
        if let Some(choice) = field.choices.choose(rng) {
            return field
                .value_from_json(&choice.0)
                .ok_or_else(|| GenerateError::InvalidValue {
                    model: self.model.label(),
                    field: field.name.clone(),
                });
        }

        match (field.max_length, value) {
            (Some(max), DataValue::Str(s)) if s.chars().count() > max => {
                Ok(DataValue::Str(s.chars().take(max).collect::<String>().into()))
            }
            (_, value) => Ok(value),
        }
    }

    /// Generate rows for models that point back at this one, skipping
    /// models this one already points at.
    ///
    /// A dependent that is already being filled for this model is not
    /// entered again, which ends chains of reverse relations that loop back.
    fn generate_related_objects(&self, ctx: &mut GenerationContext<'a>) -> Result<(), Box<dyn Error>> {
        let registry = ctx.registry;
        let targets = registry.relation_targets(self.model);

        let mut dependents: Vec<&'a ModelDef> = Vec::new();
        for related in registry.related_objects(self.model) {
            if targets.iter().any(|t| t.is(related.model))
                || dependents.iter().any(|d| d.is(related.model))
            {
                continue;
            }
            dependents.push(related.model);
        }

        for dependent in dependents {
            if ctx.filling_dependents(dependent, self.model) {
                tracing::debug!(
                    model = %self.model.label(),
                    dependent = %dependent.label(),
                    "dependent already being filled for this model, skipping"
                );
                continue;
            }
            DataGenerator::new(dependent, self.count).generate_data(ctx, Some(self.model))?;
        }
        Ok(())
    }
}

/// Id of a random stored row of `relation` whose id is not in `exclude`.
fn foreign_object(
    ctx: &mut GenerationContext<'_>,
    relation: &SchemaRelation,
    exclude: &[DataValue],
) -> Result<Option<i64>, Box<dyn Error>> {
    let candidates: Vec<i64> = rows::row_keys(ctx.db, relation)?
        .into_iter()
        .filter(|id| !exclude.contains(&DataValue::Num(Num::Int(*id))))
        .collect();
    Ok(candidates.choose(&mut ctx.rng).copied())
}

/// Create missing relations, resolve `module.model` and generate `size` rows.
pub fn generate(
    registry: &ModelRegistry,
    db: &dyn DatabaseBackend,
    module: &str,
    model: &str,
    size: usize,
    seed: Option<u64>,
) -> Result<GenerationReport, Box<dyn Error>> {
    schema::create_schema(db, registry)?;

    let target = registry
        .get_model(module, model)
        .ok_or_else(|| GenerateError::ModelNotFound {
            module: module.to_string(),
            model: model.to_string(),
        })?;

    let mut ctx = GenerationContext::new(registry, db, seed);
    DataGenerator::new(target, size).generate_data(&mut ctx, None)?;
    Ok(ctx.into_report())
}
