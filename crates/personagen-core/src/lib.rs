//! Core contracts for Personagen.
//!
//! This crate defines the fixed profile field set, the scalar value model,
//! and the record/batch types shared by the pipeline and the CLI.

pub mod error;
pub mod fields;
pub mod record;
pub mod value;

pub use error::{Error, Result};
pub use fields::{FieldName, FieldSelection};
pub use record::{ProfileBatch, ProfileRecord};
pub use value::ScalarValue;
