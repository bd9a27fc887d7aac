//! Serialized forms of a compiled subsystem.
//!
//! Enabled with the `interchange` feature. The shapes are the serde
//! derivations of the model types: classes and relationships keep their
//! declaration order, multiplicities render as `"1"` and `"M"`.

mod error;

pub use error::InterchangeError;

use crate::model::Subsystem;

/// Pretty-printed JSON
pub fn to_json(subsystem: &Subsystem) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string_pretty(subsystem)?)
}

/// Read a subsystem back from JSON written by [`to_json`]
pub fn from_json(input: &str) -> Result<Subsystem, InterchangeError> {
    Ok(serde_json::from_str(input)?)
}

pub fn to_yaml(subsystem: &Subsystem) -> Result<String, InterchangeError> {
    Ok(serde_yaml::to_string(subsystem)?)
}
