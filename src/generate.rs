//! # Bounded JSON Generation
//!
//! Random `JsValue` trees whose shape is controlled by a `GenConfig`:
//!
//! - **Depth** bounds how many collection levels may still be opened. At
//!   depth zero only primitives are produced, which is what guarantees
//!   termination.
//! - **Width** is the exact number of elements (or fields) every generated
//!   array (or object) receives. Each child re-decides on its own whether to
//!   nest, so siblings can differ in kind and in actual depth.
//!
//! All randomness is drawn from the supplied `DataSource`; given the same
//! seed and bounds the same value is produced.

use crate::config::GenConfig;
use crate::distributions::{integer_from_bitlengths, Repeat};
use crate::number::JsNumber;
use crate::source::DataSource;
use crate::value::{JsArray, JsObject, JsValue};
use log::{debug, trace};

/// Reason attached to every generated `Undefined`
pub const UNDEFINED_REASON: &str = "[generated by generate_primitive]";

const MAX_GENERATED_SCALE: i64 = 6;

const MAX_STRING_LEN: u64 = 32;
const EXPECTED_STRING_LEN: f64 = 6.0;

const MAX_FIELD_NAME_TAIL: u64 = 15;
const EXPECTED_FIELD_NAME_TAIL: f64 = 4.0;

const ALPHABETIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Types that can be drawn at random within generation bounds.
///
/// Implemented for the value model as a whole and for each kind a property
/// may want to ask for directly.
pub trait Arbitrary: Sized {
    fn arbitrary(source: &mut DataSource, config: GenConfig) -> Self;
}

pub fn generate_boolean(source: &mut DataSource) -> bool {
    source.draw_boolean(0.5)
}

/// A decimal with a bit-length-distributed magnitude; integral half the
/// time, otherwise carrying 1 to 6 fractional digits.
pub fn generate_number(source: &mut DataSource) -> JsNumber {
    let unscaled = integer_from_bitlengths(source);
    let scale = if source.draw_boolean(0.5) {
        0
    } else {
        1 + source.below(MAX_GENERATED_SCALE as u64) as i64
    };
    JsNumber::new(unscaled, scale)
}

fn generate_char(source: &mut DataSource) -> char {
    if source.draw_boolean(0.9) {
        // printable ASCII, space through tilde
        (b' ' + source.below(95) as u8) as char
    } else {
        source.draw_char()
    }
}

pub fn generate_string(source: &mut DataSource) -> String {
    let mut repeat = Repeat::new(0, MAX_STRING_LEN, EXPECTED_STRING_LEN);
    let mut result = String::new();
    while repeat.should_continue(source) {
        result.push(generate_char(source));
    }
    result
}

/// One of Boolean, Number, String, Null or Undefined, chosen uniformly.
pub fn generate_primitive(source: &mut DataSource) -> JsValue {
    let value = match source.below(5) {
        0 => JsValue::Boolean(generate_boolean(source)),
        1 => JsValue::Number(generate_number(source)),
        2 => JsValue::String(generate_string(source)),
        3 => JsValue::Null,
        _ => JsValue::Undefined(UNDEFINED_REASON.to_string()),
    };
    trace!("generate_primitive: {:?}", value.kind());
    value
}

/// Any value whose nesting depth is at most `config.depth`.
///
/// At depth zero this is exactly `generate_primitive`. Otherwise a
/// primitive, an array and an object are equally likely.
pub fn generate_value(source: &mut DataSource, config: GenConfig) -> JsValue {
    if config.depth.is_zero() {
        return generate_primitive(source);
    }

    let value = match source.below(3) {
        0 => generate_primitive(source),
        1 => JsValue::Array(generate_array(source, config)),
        _ => JsValue::Object(generate_object(source, config)),
    };
    debug!(
        "generate_value: {:?} at depth {} (width {})",
        value.kind(),
        config.depth.get(),
        config.width.get()
    );
    value
}

/// Exactly `config.width` elements, each generated one level further in.
///
/// Called directly at depth zero this still opens one level; the elements
/// are then primitives.
pub fn generate_array(source: &mut DataSource, config: GenConfig) -> JsArray {
    let inner = config.nested();
    let elements = (0..config.width.get())
        .map(|_| generate_value(source, inner))
        .collect::<Vec<_>>();
    trace!("generate_array: {} elements", elements.len());
    JsArray(elements)
}

/// Exactly `config.width` fields, each generated one level further in.
/// Field names are not deduplicated.
pub fn generate_object(source: &mut DataSource, config: GenConfig) -> JsObject {
    let inner = config.nested();
    let fields = (0..config.width.get())
        .map(|_| generate_field(source, inner))
        .collect::<Vec<_>>();
    trace!("generate_object: {} fields", fields.len());
    JsObject(fields)
}

/// An ASCII letter followed by zero or more ASCII letters and digits.
pub fn generate_field_name(source: &mut DataSource) -> String {
    let mut name = String::new();
    name.push(*source.choose(ALPHABETIC) as char);

    let mut repeat = Repeat::new(0, MAX_FIELD_NAME_TAIL, EXPECTED_FIELD_NAME_TAIL);
    while repeat.should_continue(source) {
        name.push(*source.choose(ALPHANUMERIC) as char);
    }
    name
}

pub fn generate_field(source: &mut DataSource, config: GenConfig) -> (String, JsValue) {
    let name = generate_field_name(source);
    let value = generate_value(source, config);
    (name, value)
}

impl Arbitrary for JsValue {
    fn arbitrary(source: &mut DataSource, config: GenConfig) -> Self {
        generate_value(source, config)
    }
}

impl Arbitrary for JsArray {
    fn arbitrary(source: &mut DataSource, config: GenConfig) -> Self {
        generate_array(source, config)
    }
}

impl Arbitrary for JsObject {
    fn arbitrary(source: &mut DataSource, config: GenConfig) -> Self {
        generate_object(source, config)
    }
}

impl Arbitrary for JsNumber {
    fn arbitrary(source: &mut DataSource, _config: GenConfig) -> Self {
        generate_number(source)
    }
}

impl Arbitrary for String {
    fn arbitrary(source: &mut DataSource, _config: GenConfig) -> Self {
        generate_string(source)
    }
}

impl Arbitrary for bool {
    fn arbitrary(source: &mut DataSource, _config: GenConfig) -> Self {
        generate_boolean(source)
    }
}
