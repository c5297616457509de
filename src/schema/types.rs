//! Schema types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::Null => write!(f, "null"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Number => write!(f, "number"),
            JsonType::String => write!(f, "string"),
            JsonType::Array => write!(f, "array"),
            JsonType::Object => write!(f, "object"),
        }
    }
}

/// Semantic format detected on a string value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Uri,
    Email,
    Date,
    DateTime,
}

impl std::fmt::Display for StringFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringFormat::Uri => write!(f, "uri"),
            StringFormat::Email => write!(f, "email"),
            StringFormat::Date => write!(f, "date"),
            StringFormat::DateTime => write!(f, "date-time"),
        }
    }
}

/// One JSON Schema node.
///
/// Every field is optional so the same struct covers the unconstrained
/// fragment `{}`, typed fragments and `anyOf` disjunctions. Field order here
/// is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFragment {
    /// Fragment type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub json_type: Option<JsonType>,

    /// Alternatives, used where sibling array items disagree on type
    #[serde(rename = "anyOf", default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaFragment>>,

    /// Nested properties (for objects), in first-seen order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaFragment>>,

    /// Array items schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaFragment>>,

    /// Required property names (for objects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Format hint (strings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

impl SchemaFragment {
    /// The unconstrained fragment `{}`
    pub fn any() -> Self {
        Self::default()
    }

    /// A bare fragment of the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type: Some(json_type),
            ..Self::default()
        }
    }

    /// A string fragment with an optional format hint
    pub fn string(format: Option<StringFormat>) -> Self {
        Self {
            format,
            ..Self::new(JsonType::String)
        }
    }

    /// Create an array fragment with item schema
    pub fn array(items: SchemaFragment) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(JsonType::Array)
        }
    }

    /// Create an object fragment with nested properties
    pub fn object(properties: IndexMap<String, SchemaFragment>, required: Vec<String>) -> Self {
        Self {
            properties: Some(properties),
            required: Some(required),
            ..Self::new(JsonType::Object)
        }
    }

    /// Create a disjunction over the given fragments, in order
    pub fn any_of(fragments: Vec<SchemaFragment>) -> Self {
        Self {
            any_of: Some(fragments),
            ..Self::default()
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// The `type` tag, if any
    pub fn json_type(&self) -> Option<JsonType> {
        self.json_type
    }

    /// True for `{}`
    pub fn is_any(&self) -> bool {
        *self == Self::default()
    }

    /// Get a nested property
    pub fn get_property(&self, name: &str) -> Option<&SchemaFragment> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }

    /// Check if a property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|r| r == name))
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
