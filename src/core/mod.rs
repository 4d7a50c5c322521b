//! Core record model and validation, free of I/O.

pub mod record;
pub mod validation;

#[cfg(test)]
mod validation_proptest;

pub use record::{Field, Named, Person, Student};
