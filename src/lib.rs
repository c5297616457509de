// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # json-shape
//!
//! Infers a practical JSON Schema document from one sample JSON value.
//!
//! ## Features
//!
//! - **Type Inference**: Primitive, array and object structure
//! - **Array Unification**: Same-type merge, `anyOf` for mixed item types
//! - **Format Detection**: `uri`, `email`, `date`, `date-time` strings
//! - **Cycle Safety**: Terminates on self-referential in-memory graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use json_shape::infer_schema;
//! use serde_json::json;
//!
//! let schema = infer_schema(&json!([{"a": 1}, {"a": 2, "b": "x"}]));
//!
//! assert_eq!(
//!     schema.to_json(),
//!     json!({
//!         "type": "array",
//!         "items": {
//!             "type": "object",
//!             "properties": {"a": {"type": "integer"}, "b": {"type": "string"}},
//!             "required": ["a", "b"]
//!         }
//!     })
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  CLI: read file → parse → infer → write       │
//! └───────────────────────┬───────────────────────┘
//!                         │
//! ┌───────────────────────┴───────────────────────┐
//! │  SchemaInferrer (recursion, cycle/depth guard)│
//! ├───────────────┬───────────────┬───────────────┤
//! │ Sample input  │ Format detect │ Unifier       │
//! └───────────────┴───────────────┴───────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document enum variants and CLI fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Inference configuration
pub mod config;

/// Schema inference from JSON data
pub mod schema;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{FormatDetection, InferenceConfig};
pub use error::{Error, Result};
pub use schema::{
    infer_schema, unify, JsonType, Sample, SchemaFragment, SchemaInferrer, SharedValue,
    StringFormat,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
