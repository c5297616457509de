//! Schema inference module
//!
//! Derives a JSON Schema fragment from one sample JSON value.
//!
//! # Features
//!
//! - **Type Inference**: Maps every value to `null`, `boolean`, `integer`,
//!   `number`, `string`, `array` or `object`
//! - **Array Unification**: Summarizes array items into one `items` fragment,
//!   falling back to `anyOf` when item types disagree
//! - **Format Detection**: Tags strings as `uri`, `email`, `date` or `date-time`
//! - **Cycle Guard**: Terminates on self-referential in-memory graphs
//! - **Depth Guard**: Stops descending past a configurable nesting limit

mod format;
mod inference;
mod source;
mod types;
mod unify;

pub use format::detect_format;
pub use inference::{infer_schema, SchemaInferrer};
pub use source::{Sample, SampleKind, SharedValue};
pub use types::{JsonType, SchemaFragment, StringFormat};
pub use unify::unify;
