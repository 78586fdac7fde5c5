//! Model, field and app definitions as they appear in the schema file.

use cozo::{DataValue, Num};
use serde::{Deserialize, Serialize};

use crate::db::schema::DataType;

/// Field types understood by the generator.
///
/// Names follow the schema file spelling (`CharField`, `ForeignKey`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "BooleanField")]
    Boolean,
    #[serde(rename = "CharField")]
    Char,
    #[serde(rename = "EmailField")]
    Email,
    #[serde(rename = "SlugField")]
    Slug,
    #[serde(rename = "URLField")]
    Url,
    #[serde(rename = "DateField")]
    Date,
    #[serde(rename = "DateTimeField")]
    DateTime,
    #[serde(rename = "IntegerField")]
    Integer,
    #[serde(rename = "BigIntegerField")]
    BigInteger,
    #[serde(rename = "PositiveIntegerField")]
    PositiveInteger,
    #[serde(rename = "PositiveSmallIntegerField")]
    PositiveSmallInteger,
    #[serde(rename = "SmallIntegerField")]
    SmallInteger,
    #[serde(rename = "NullBooleanField")]
    NullBoolean,
    #[serde(rename = "TextField")]
    Text,
    #[serde(rename = "TimeField")]
    Time,
    #[serde(rename = "ForeignKey")]
    ForeignKey,
    #[serde(rename = "OneToOneField")]
    OneToOne,
}

impl FieldType {
    /// Name as written in the schema file.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Boolean => "BooleanField",
            FieldType::Char => "CharField",
            FieldType::Email => "EmailField",
            FieldType::Slug => "SlugField",
            FieldType::Url => "URLField",
            FieldType::Date => "DateField",
            FieldType::DateTime => "DateTimeField",
            FieldType::Integer => "IntegerField",
            FieldType::BigInteger => "BigIntegerField",
            FieldType::PositiveInteger => "PositiveIntegerField",
            FieldType::PositiveSmallInteger => "PositiveSmallIntegerField",
            FieldType::SmallInteger => "SmallIntegerField",
            FieldType::NullBoolean => "NullBooleanField",
            FieldType::Text => "TextField",
            FieldType::Time => "TimeField",
            FieldType::ForeignKey => "ForeignKey",
            FieldType::OneToOne => "OneToOneField",
        }
    }

    /// True for fields that reference a row of another model.
    pub fn is_relation(&self) -> bool {
        matches!(self, FieldType::ForeignKey | FieldType::OneToOne)
    }

    /// Storage type of the column. Relations store the related row id.
    pub fn data_type(&self) -> DataType {
        match self {
            FieldType::Boolean | FieldType::NullBoolean => DataType::Bool,
            FieldType::Integer
            | FieldType::BigInteger
            | FieldType::PositiveInteger
            | FieldType::PositiveSmallInteger
            | FieldType::SmallInteger
            | FieldType::ForeignKey
            | FieldType::OneToOne => DataType::Int,
            FieldType::Char
            | FieldType::Email
            | FieldType::Slug
            | FieldType::Url
            | FieldType::Date
            | FieldType::DateTime
            | FieldType::Text
            | FieldType::Time => DataType::String,
        }
    }
}

/// A `[value, label]` pair restricting a field to fixed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice(pub serde_json::Value, pub String);

/// A single field of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub null: bool,

    #[serde(default)]
    pub blank: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    #[serde(default)]
    pub unique: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    /// Related model, `"Model"` (same app) or `"app.Model"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl FieldDef {
    /// A field gets a generated value only when it is not null, not blank
    /// and has no default.
    pub fn is_required(&self) -> bool {
        !self.null && !self.blank && self.default.is_none()
    }

    /// One-to-one relations are unique whether or not the flag is set.
    pub fn is_unique(&self) -> bool {
        self.unique || self.field_type == FieldType::OneToOne
    }

    pub fn is_relation(&self) -> bool {
        self.field_type.is_relation()
    }

    /// Whether the stored column accepts null.
    ///
    /// Blank relations without a default have no sensible empty id, so they
    /// are stored as null as well.
    pub fn is_nullable(&self) -> bool {
        self.null
            || self.field_type == FieldType::NullBoolean
            || (self.is_relation() && self.blank && self.default.is_none())
    }

    /// Convert a JSON value (a default or a choice) into a value of this
    /// field's column type. Returns `None` when the value does not fit.
    pub fn value_from_json(&self, value: &serde_json::Value) -> Option<DataValue> {
        use serde_json::Value;

        match (self.field_type.data_type(), value) {
            (_, Value::Null) if self.is_nullable() => Some(DataValue::Null),
            (DataType::Bool, Value::Bool(b)) => Some(DataValue::Bool(*b)),
            (DataType::Int, Value::Number(n)) => n.as_i64().map(|i| DataValue::Num(Num::Int(i))),
            (DataType::String, Value::String(s)) => Some(DataValue::Str(s.as_str().into())),
            _ => None,
        }
    }

    /// Value stored for a field that is not generated: its default, null for
    /// nullable columns, otherwise the empty value of the column type.
    pub fn stored_value(&self) -> Option<DataValue> {
        if let Some(default) = &self.default {
            return self.value_from_json(default);
        }
        if self.is_nullable() {
            return Some(DataValue::Null);
        }
        Some(match self.field_type.data_type() {
            DataType::Bool => DataValue::Bool(false),
            DataType::Int => DataValue::Num(Num::Int(0)),
            DataType::String => DataValue::Str("".into()),
        })
    }
}

/// A model: a named, ordered list of fields with an implicit `id` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Label of the owning app, filled in when the registry is loaded
    #[serde(skip)]
    pub app: String,
}

impl ModelDef {
    /// `app.Model`
    pub fn label(&self) -> String {
        format!("{}.{}", self.app, self.name)
    }

    /// Stored relation name, `app_model` in lowercase.
    pub fn table_name(&self) -> String {
        format!("{}_{}", self.app, self.name.to_lowercase())
    }

    /// Fields that receive generated values, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_required())
    }

    pub fn relation_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Same model, compared by app label and case-insensitive name.
    pub fn is(&self, other: &ModelDef) -> bool {
        self.app == other.app && self.name.eq_ignore_ascii_case(&other.name)
    }
}

/// An app groups models under a label (the `--module` argument).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDef {
    pub label: String,

    #[serde(default)]
    pub models: Vec<ModelDef>,
}
