//! Schema inference from JSON values

use super::format::detect_format;
use super::source::{Sample, SampleKind};
use super::types::{JsonType, SchemaFragment};
use super::unify::unify;
use crate::config::{FormatDetection, InferenceConfig, DEFAULT_MAX_DEPTH};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Containers currently on the recursion stack, by identity
type Visiting = HashSet<usize>;

/// Schema inferrer with configuration options
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// String formats to detect
    formats: FormatDetection,
    /// Maximum container nesting before degrading
    max_depth: usize,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self {
            formats: FormatDetection::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create an inferrer from loaded configuration
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self {
            formats: config.formats,
            max_depth: config.max_depth,
        }
    }

    /// Enable/disable URI detection
    #[must_use]
    pub fn with_uri_detection(mut self, enabled: bool) -> Self {
        self.formats.uri = enabled;
        self
    }

    /// Enable/disable email detection
    #[must_use]
    pub fn with_email_detection(mut self, enabled: bool) -> Self {
        self.formats.email = enabled;
        self
    }

    /// Enable/disable date detection
    #[must_use]
    pub fn with_date_detection(mut self, enabled: bool) -> Self {
        self.formats.date = enabled;
        self
    }

    /// Enable/disable date-time detection
    #[must_use]
    pub fn with_datetime_detection(mut self, enabled: bool) -> Self {
        self.formats.date_time = enabled;
        self
    }

    /// Replace all format toggles at once
    #[must_use]
    pub fn with_formats(mut self, formats: FormatDetection) -> Self {
        self.formats = formats;
        self
    }

    /// Set maximum depth for nested containers
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Maximum container depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Infer a schema fragment for one value.
    ///
    /// Never fails. A container already being inferred further up the stack
    /// (a reference cycle), or nested beyond the depth limit, yields a bare
    /// `{"type": "object"}` / `{"type": "array"}` instead of being descended.
    pub fn infer<S: Sample + ?Sized>(&self, value: &S) -> SchemaFragment {
        let mut visiting = Visiting::new();
        let fragment = self.infer_value(value, &mut visiting, 0);
        debug!(
            json_type = ?fragment.json_type,
            any_of = fragment.any_of.is_some(),
            "inferred schema"
        );
        fragment
    }

    fn infer_value<S: Sample + ?Sized>(
        &self,
        value: &S,
        visiting: &mut Visiting,
        depth: usize,
    ) -> SchemaFragment {
        match value.kind() {
            SampleKind::Null => SchemaFragment::new(JsonType::Null),
            SampleKind::Array => self.infer_array(value, visiting, depth),
            SampleKind::Object => self.infer_object(value, visiting, depth),
            SampleKind::String(s) => SchemaFragment::string(detect_format(s, &self.formats)),
            SampleKind::Number(n) if is_integral(n) => SchemaFragment::new(JsonType::Integer),
            SampleKind::Number(_) => SchemaFragment::new(JsonType::Number),
            SampleKind::Bool => SchemaFragment::new(JsonType::Boolean),
            SampleKind::Opaque => SchemaFragment::new(JsonType::String),
        }
    }

    /// Infer property type from an array value
    fn infer_array<S: Sample + ?Sized>(
        &self,
        value: &S,
        visiting: &mut Visiting,
        depth: usize,
    ) -> SchemaFragment {
        let id = value.identity();
        if !self.enter(id, JsonType::Array, visiting, depth) {
            return SchemaFragment::new(JsonType::Array);
        }

        let mut items = Vec::new();
        value.for_each_item(&mut |item: &S| {
            items.push(self.infer_value(item, visiting, depth + 1));
        });
        leave(id, visiting);

        if items.is_empty() {
            // Nothing observed, nothing to constrain
            SchemaFragment::array(SchemaFragment::any())
        } else {
            SchemaFragment::array(unify(items))
        }
    }

    /// Infer property type from an object value
    fn infer_object<S: Sample + ?Sized>(
        &self,
        value: &S,
        visiting: &mut Visiting,
        depth: usize,
    ) -> SchemaFragment {
        let id = value.identity();
        if !self.enter(id, JsonType::Object, visiting, depth) {
            return SchemaFragment::new(JsonType::Object);
        }

        let mut properties = IndexMap::new();
        value.for_each_entry(&mut |key: &str, val: &S| {
            let prop = self.infer_value(val, visiting, depth + 1);
            properties.insert(key.to_string(), prop);
        });
        leave(id, visiting);

        // A single sample cannot show a field to be optional.
        let required = properties.keys().cloned().collect();
        SchemaFragment::object(properties, required)
    }

    /// Push a container onto the visiting set.
    ///
    /// Returns `false` when the container must not be descended: it is already
    /// on the stack, or the depth limit is reached. Containers without an
    /// identity are descended untracked.
    fn enter(
        &self,
        id: Option<usize>,
        json_type: JsonType,
        visiting: &mut Visiting,
        depth: usize,
    ) -> bool {
        if depth >= self.max_depth {
            warn!(
                depth,
                max_depth = self.max_depth,
                "{json_type} nested too deeply, not descending"
            );
            return false;
        }

        match id {
            Some(id) if !visiting.insert(id) => {
                trace!(depth, "cyclic {json_type} reference, not descending");
                false
            }
            _ => true,
        }
    }
}

fn leave(id: Option<usize>, visiting: &mut Visiting) {
    if let Some(id) = id {
        visiting.remove(&id);
    }
}

/// Whole numbers, including floats with no fractional part
#[allow(clippy::float_cmp)]
fn is_integral(n: &Number) -> bool {
    n.is_i64()
        || n.is_u64()
        || n
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.trunc() == f)
}

/// Infer a schema from a single JSON value (convenience function)
pub fn infer_schema(value: &Value) -> SchemaFragment {
    SchemaInferrer::new().infer(value)
}
