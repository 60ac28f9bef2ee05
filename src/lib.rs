//! # Conjecture JSON
//!
//! Random JSON values for property-based tests of JSON-handling code, and
//! the shrinking needed to turn a failing value into a minimal one.
//!
//! Generation is bounded by a `GenConfig`: `Depth` caps how many levels of
//! arrays and objects may be nested, and `Width` is the exact number of
//! elements or fields each generated collection gets. Shrinking mirrors the
//! same recursive structure and returns lazy, restartable candidate streams.
//!
//! ```rust
//! use conjecture_json::{generate_value, shrink, DataSource, GenConfig};
//!
//! let mut source = DataSource::new(42);
//! let value = generate_value(&mut source, GenConfig::default().with_depth(3));
//! assert!(value.nesting_depth() <= 3);
//!
//! for candidate in shrink(&value).take(10) {
//!     assert_ne!(candidate, value);
//! }
//! ```

pub mod config;
pub mod distributions;
pub mod error;
pub mod generate;
pub mod number;
pub mod runner;
pub mod shrink;
pub mod source;
pub mod value;

// Re-export core types for easy access
pub use config::{Depth, GenConfig, Width};
pub use error::GenError;
pub use generate::{
    generate_array, generate_boolean, generate_field, generate_field_name, generate_number,
    generate_object, generate_primitive, generate_string, generate_value, Arbitrary,
    UNDEFINED_REASON,
};
pub use number::JsNumber;
pub use runner::{minimize, Counterexample, JsonRunner, Minimized, RunResult, RunnerConfig, RunnerStats};
pub use shrink::{shrink, shrink_number, shrink_string, SequenceShrinker, Shrink, Shrinks};
pub use source::DataSource;
pub use value::{JsArray, JsKind, JsObject, JsValue};
