//! Errors for the few fallible operations in this crate.
//!
//! Generation and shrinking never fail. Only building a number from
//! untrusted input, converting a `serde_json` fixture, and validating runner
//! configuration can go wrong.

/// Errors returned by number construction, fixture conversion and runner setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Text that is not a decimal literal
    InvalidNumber(String),
    /// Runner configuration that cannot drive a run
    InvalidConfig(String),
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::InvalidNumber(text) => write!(f, "Invalid decimal number: {:?}", text),
            GenError::InvalidConfig(reason) => write!(f, "Invalid runner configuration: {}", reason),
        }
    }
}

impl std::error::Error for GenError {}
