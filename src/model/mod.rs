//! Compiled information model.
//!
//! Every value here is built once by the reducers and never mutated after
//! the enclosing [`Subsystem`] is returned. Ownership is strictly
//! hierarchical: a subsystem owns its classes and relationships, a class owns
//! its attributes, and nothing points back at its container.

mod attribute;
mod class;
mod relationship;
mod subsystem;

pub use attribute::{Attribute, NavTarget, NavigationRef};
pub use class::Class;
pub use relationship::{AssocClass, Multiplicity, Relationship, Side};
pub use subsystem::{MetadataValue, Subsystem};
