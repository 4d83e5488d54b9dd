//! Dynamically typed elements for heterogeneous sequences.
//!
//! [`Value`] is what a sequence holds when its elements do not share one Rust
//! type: toy records, nested lists, JSON documents. The typed combinators use
//! [`Typed`] to check the runtime type of their results.

use std::fmt;

use derive_more::Display;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::sequence::Sequence;

/// Runtime type tag of a [`Value`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[display(fmt = "null")]
    Null,
    #[display(fmt = "logical")]
    Logical,
    #[display(fmt = "integer")]
    Integer,
    #[display(fmt = "double")]
    Double,
    #[display(fmt = "character")]
    Character,
    #[display(fmt = "list")]
    List,
}

impl ValueType {
    /// Whether a value of type `self` may be widened into `target`.
    ///
    /// Only logical → integer → double widening is allowed.
    pub fn widens_to(self, target: ValueType) -> bool {
        matches!(
            (self, target),
            (ValueType::Logical, ValueType::Integer)
                | (ValueType::Logical, ValueType::Double)
                | (ValueType::Integer, ValueType::Double)
        ) || self == target
    }
}

/// Equality policy for comparing numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericEquality {
    /// Integer and double values never compare equal.
    #[default]
    Strict,
    /// Integer and double values compare by magnitude.
    Loose,
}

/// Anything that can report its [`ValueType`].
pub trait Typed {
    fn value_type(&self) -> ValueType;
}

impl Typed for bool {
    fn value_type(&self) -> ValueType {
        ValueType::Logical
    }
}

impl Typed for i64 {
    fn value_type(&self) -> ValueType {
        ValueType::Integer
    }
}

impl Typed for i32 {
    fn value_type(&self) -> ValueType {
        ValueType::Integer
    }
}

impl Typed for f64 {
    fn value_type(&self) -> ValueType {
        ValueType::Double
    }
}

impl Typed for String {
    fn value_type(&self) -> ValueType {
        ValueType::Character
    }
}

impl<T: Clone> Typed for Sequence<T> {
    fn value_type(&self) -> ValueType {
        ValueType::List
    }
}

/// A single dynamically typed element.
///
/// `PartialEq` is strict: `Integer(2)` and `Double(2.0)` differ. Use
/// [`Value::equals`] for a configurable comparison.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Logical(bool),
    Integer(i64),
    Double(f64),
    Character(String),
    List(Sequence<Value>),
}

impl Value {
    /// Builds an unnamed list value.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a named list value.
    pub fn record<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::List(Sequence::named(
            entries.into_iter().map(|(name, value)| (name, value.into())),
        ))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Logical(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of integers and doubles.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Character(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Sequence<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Converts into `target` using widening only, `None` when that is not
    /// possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqops::prelude::*;
    ///
    /// assert_eq!(Value::Integer(2).coerce_to(ValueType::Double), Some(Value::Double(2.0)));
    /// assert_eq!(Value::Double(2.5).coerce_to(ValueType::Integer), None);
    /// ```
    pub fn coerce_to(&self, target: ValueType) -> Option<Value> {
        if self.value_type() == target {
            return Some(self.clone());
        }
        match (self, target) {
            (Value::Logical(b), ValueType::Integer) => Some(Value::Integer(i64::from(*b))),
            (Value::Logical(b), ValueType::Double) => Some(Value::Double(if *b { 1.0 } else { 0.0 })),
            (Value::Integer(i), ValueType::Double) => Some(Value::Double(*i as f64)),
            _ => None,
        }
    }

    /// Compares two values under an explicit numeric policy.
    ///
    /// Lists compare element-wise (names included) under the same policy.
    pub fn equals(&self, other: &Value, policy: NumericEquality) -> bool {
        match (self, other, policy) {
            (Value::Integer(a), Value::Double(b), NumericEquality::Loose)
            | (Value::Double(b), Value::Integer(a), NumericEquality::Loose) => {
                integer_matches_double(*a, *b)
            }
            (Value::List(a), Value::List(b), _) => {
                a.len() == b.len()
                    && a.names() == b.names()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y, policy))
            }
            _ => self == other,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Typed for Value {
    fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Logical(_) => ValueType::Logical,
            Value::Integer(_) => ValueType::Integer,
            Value::Double(_) => ValueType::Double,
            Value::Character(_) => ValueType::Character,
            Value::List(_) => ValueType::List,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Logical(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::Character(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, (name, value)) in items.entries().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(name) = name {
                        write!(f, "{} = ", name)?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Logical(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Character(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Character(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Character(c.to_string())
    }
}

impl From<Sequence<Value>> for Value {
    fn from(items: Sequence<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<JsonValue> for Value {
    /// Objects become named lists and arrays unnamed lists. Numbers that fit
    /// an `i64` become integers, the rest doubles.
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Logical(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Double),
            },
            JsonValue::String(s) => Value::Character(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(fields) => Value::List(Sequence::named(
                fields.into_iter().map(|(name, value)| (name, Value::from(value))),
            )),
        }
    }
}

impl From<&Value> for JsonValue {
    /// Lists carrying names become objects; unnamed positions in a partly
    /// named list are keyed by their 1-based position.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Logical(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::from(*i),
            Value::Double(d) => JsonValue::from(*d),
            Value::Character(s) => JsonValue::String(s.clone()),
            Value::List(items) if items.has_names() => JsonValue::Object(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (items.key_at(index).to_string(), JsonValue::from(item)))
                    .collect(),
            ),
            Value::List(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Logical(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Character(s) => serializer.serialize_str(s),
            Value::List(items) if items.has_names() => {
                let mut map = serializer.serialize_map(Some(items.len()))?;
                for (index, item) in items.iter().enumerate() {
                    map.serialize_entry(&items.key_at(index).to_string(), item)?;
                }
                map.end()
            }
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Value::from)
    }
}

/// Exact comparison: `double` must be integral, in `i64` range and convert
/// back to `integer` without rounding.
fn integer_matches_double(integer: i64, double: f64) -> bool {
    double.fract() == 0.0
        && double >= i64::MIN as f64
        && double < i64::MAX as f64
        && double as i64 == integer
}
