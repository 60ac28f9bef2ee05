//! # JSON Value Model
//!
//! The recursive value type that generation produces and shrinking
//! consumes. It mirrors a JavaScript-flavoured JSON model: alongside the
//! six JSON kinds there is an `Undefined` sentinel carrying a diagnostic
//! reason, so code under test can be exercised with values that have no
//! JSON text form.
//!
//! Objects are ordered sequences of `(name, value)` pairs. Field names are
//! not required to be unique and duplicates are kept as generated.
//!
//! ## Interop
//!
//! `JsValue::to_serde` lowers a value into `serde_json::Value` for handing
//! generated inputs to JSON-handling code, and `TryFrom<&serde_json::Value>`
//! builds fixtures the other way round.

use crate::error::GenError;
use crate::number::JsNumber;
use std::convert::TryFrom;

/// Ordered array contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsArray(pub Vec<JsValue>);

/// Ordered object contents; names may repeat
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsObject(pub Vec<(String, JsValue)>);

#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Null,
    /// Absent value, with a reason describing where it came from
    Undefined(String),
    Boolean(bool),
    Number(JsNumber),
    String(String),
    Array(JsArray),
    Object(JsObject),
}

/// Discriminant of a `JsValue`, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsKind {
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsKind {
    /// Kinds that `generate_primitive` chooses between
    pub const PRIMITIVES: [JsKind; 5] = [
        JsKind::Boolean,
        JsKind::Number,
        JsKind::String,
        JsKind::Null,
        JsKind::Undefined,
    ];

    pub fn is_primitive(self) -> bool {
        !matches!(self, JsKind::Array | JsKind::Object)
    }
}

impl JsArray {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JsValue> {
        self.0.iter()
    }
}

impl JsObject {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, JsValue)> {
        self.0.iter()
    }

    /// First value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&JsValue> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl JsValue {
    pub fn array(elements: Vec<JsValue>) -> JsValue {
        JsValue::Array(JsArray(elements))
    }

    pub fn object(fields: Vec<(String, JsValue)>) -> JsValue {
        JsValue::Object(JsObject(fields))
    }

    pub fn number(value: i64) -> JsValue {
        JsValue::Number(JsNumber::from(value))
    }

    pub fn string<S: Into<String>>(value: S) -> JsValue {
        JsValue::String(value.into())
    }

    pub fn undefined<S: Into<String>>(reason: S) -> JsValue {
        JsValue::Undefined(reason.into())
    }

    pub fn kind(&self) -> JsKind {
        match self {
            JsValue::Null => JsKind::Null,
            JsValue::Undefined(_) => JsKind::Undefined,
            JsValue::Boolean(_) => JsKind::Boolean,
            JsValue::Number(_) => JsKind::Number,
            JsValue::String(_) => JsKind::String,
            JsValue::Array(_) => JsKind::Array,
            JsValue::Object(_) => JsKind::Object,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    /// Number of collection levels in this value.
    ///
    /// Primitives have depth 0. An array or object has depth one more than
    /// its deepest child, so an empty collection has depth 1.
    pub fn nesting_depth(&self) -> u32 {
        match self {
            JsValue::Array(elements) => {
                1 + elements.iter().map(JsValue::nesting_depth).max().unwrap_or(0)
            }
            JsValue::Object(fields) => {
                1 + fields
                    .iter()
                    .map(|(_, value)| value.nesting_depth())
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Total number of values in the tree, this one included.
    pub fn size(&self) -> usize {
        match self {
            JsValue::Array(elements) => 1 + elements.iter().map(JsValue::size).sum::<usize>(),
            JsValue::Object(fields) => {
                1 + fields.iter().map(|(_, value)| value.size()).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Lowers into `serde_json`.
    ///
    /// `Undefined` has no JSON form: at the top level this returns `None`,
    /// inside an array it becomes `null`, and inside an object the field is
    /// left out. When names repeat the last occurrence wins.
    pub fn to_serde(&self) -> Option<serde_json::Value> {
        match self {
            JsValue::Undefined(_) => None,
            JsValue::Null => Some(serde_json::Value::Null),
            JsValue::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            JsValue::Number(n) => Some(number_to_serde(n)),
            JsValue::String(s) => Some(serde_json::Value::String(s.clone())),
            JsValue::Array(elements) => Some(serde_json::Value::Array(
                elements
                    .iter()
                    .map(|element| element.to_serde().unwrap_or(serde_json::Value::Null))
                    .collect(),
            )),
            JsValue::Object(fields) => {
                let mut map = serde_json::Map::new();
                for (name, value) in fields.iter() {
                    if let Some(value) = value.to_serde() {
                        map.insert(name.clone(), value);
                    }
                }
                Some(serde_json::Value::Object(map))
            }
        }
    }
}

fn number_to_serde(n: &JsNumber) -> serde_json::Value {
    if let Some(int) = n.to_i64() {
        return serde_json::Value::Number(int.into());
    }
    // Magnitudes beyond f64 lower to null.
    serde_json::Number::from_f64(n.to_f64())
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl From<JsArray> for JsValue {
    fn from(array: JsArray) -> Self {
        JsValue::Array(array)
    }
}

impl From<JsObject> for JsValue {
    fn from(object: JsObject) -> Self {
        JsValue::Object(object)
    }
}

impl From<JsNumber> for JsValue {
    fn from(number: JsNumber) -> Self {
        JsValue::Number(number)
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl TryFrom<&serde_json::Value> for JsValue {
    type Error = GenError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::Null => JsValue::Null,
            serde_json::Value::Bool(b) => JsValue::Boolean(*b),
            serde_json::Value::Number(n) => JsValue::Number(n.to_string().parse()?),
            serde_json::Value::String(s) => JsValue::String(s.clone()),
            serde_json::Value::Array(elements) => JsValue::Array(JsArray(
                elements
                    .iter()
                    .map(JsValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            serde_json::Value::Object(map) => JsValue::Object(JsObject(
                map.iter()
                    .map(|(name, value)| Ok((name.clone(), JsValue::try_from(value)?)))
                    .collect::<Result<Vec<_>, GenError>>()?,
            )),
        })
    }
}
