//! Fake-value dispatch table.
//!
//! Maps each non-relation field type to a function producing a plausible
//! value of that type. Relation fields have no entry; their values are ids
//! of existing related rows, picked by the generator.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use cozo::{DataValue, Num};
use fake::Fake;
use fake::faker::chrono::en as fake_chrono;
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::{Paragraph, Word, Words};
use fake::faker::name::en::Name;
use rand::Rng;
use rand::rngs::StdRng;

use crate::registry::FieldType;

/// Upper bound (exclusive) applied to small integer fields.
const SMALL_INT_MODULUS: i64 = 32767;

/// Produces one fake value.
pub type ValueFn = fn(&mut StdRng) -> DataValue;

/// Generator function for a field type, `None` for relation types.
pub fn value_fn(field_type: FieldType) -> Option<ValueFn> {
    let f: ValueFn = match field_type {
        FieldType::Boolean => boolean,
        FieldType::Char => name,
        FieldType::Email => email,
        FieldType::Slug => slug,
        FieldType::Url => url,
        FieldType::Date => date,
        FieldType::DateTime => date_time,
        FieldType::Integer | FieldType::BigInteger | FieldType::PositiveInteger => number,
        FieldType::PositiveSmallInteger | FieldType::SmallInteger => small_number,
        FieldType::NullBoolean => null_boolean,
        FieldType::Text => text,
        FieldType::Time => time,
        FieldType::ForeignKey | FieldType::OneToOne => return None,
    };
    Some(f)
}

fn string(s: String) -> DataValue {
    DataValue::Str(s.into())
}

fn int(i: i64) -> DataValue {
    DataValue::Num(Num::Int(i))
}

fn boolean(rng: &mut StdRng) -> DataValue {
    DataValue::Bool(rng.gen_bool(0.5))
}

fn name(rng: &mut StdRng) -> DataValue {
    string(Name().fake_with_rng(rng))
}

fn email(rng: &mut StdRng) -> DataValue {
    string(SafeEmail().fake_with_rng(rng))
}

fn slug(rng: &mut StdRng) -> DataValue {
    let words: Vec<String> = Words(2..5).fake_with_rng(rng);
    string(words.join("-").to_lowercase())
}

fn url(rng: &mut StdRng) -> DataValue {
    let host: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    string(format!("http://www.{}.{}/", host.to_lowercase(), suffix))
}

fn date(rng: &mut StdRng) -> DataValue {
    let d: NaiveDate = fake_chrono::Date().fake_with_rng(rng);
    string(d.format("%Y-%m-%d").to_string())
}

fn date_time(rng: &mut StdRng) -> DataValue {
    let dt: NaiveDateTime = fake_chrono::DateTime().fake_with_rng(rng);
    string(dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn time(rng: &mut StdRng) -> DataValue {
    let t: NaiveTime = fake_chrono::Time().fake_with_rng(rng);
    string(t.format("%H:%M:%S").to_string())
}

/// A number with a random digit count between 0 and 9.
fn random_number(rng: &mut StdRng) -> i64 {
    let digits = rng.gen_range(0..=9u32);
    rng.gen_range(0..10i64.pow(digits))
}

fn number(rng: &mut StdRng) -> DataValue {
    int(random_number(rng))
}

fn small_number(rng: &mut StdRng) -> DataValue {
    int(random_number(rng) % SMALL_INT_MODULUS)
}

fn null_boolean(rng: &mut StdRng) -> DataValue {
    match rng.gen_range(0..3) {
        0 => DataValue::Null,
        1 => DataValue::Bool(true),
        _ => DataValue::Bool(false),
    }
}

fn text(rng: &mut StdRng) -> DataValue {
    string(Paragraph(3..6).fake_with_rng(rng))
}
