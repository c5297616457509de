//! Inference input abstraction
//!
//! The inferrer does not require a `serde_json::Value`: anything that can
//! classify itself and walk its children implements [`Sample`]. Parsed JSON is
//! always a tree, but [`SharedValue`] is a live graph whose containers can
//! reference each other (or themselves), which is what the cycle guard exists
//! for.

use indexmap::IndexMap;
use serde_json::{Number, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Classification of one sample value
#[derive(Debug, Clone, Copy)]
pub enum SampleKind<'a> {
    Null,
    Bool,
    Number(&'a Number),
    String(&'a str),
    Array,
    Object,
    /// A runtime value with no JSON representation
    Opaque,
}

/// A JSON-like value the inferrer can walk
pub trait Sample {
    /// Classify this value
    fn kind(&self) -> SampleKind<'_>;

    /// Identity of the container behind this value, `None` for scalars.
    ///
    /// Two values with the same identity are the same container.
    fn identity(&self) -> Option<usize>;

    /// Visit array items in order. No-op for non-arrays.
    fn for_each_item(&self, f: &mut dyn FnMut(&Self));

    /// Visit object entries in iteration order. No-op for non-objects.
    fn for_each_entry(&self, f: &mut dyn FnMut(&str, &Self));
}

impl Sample for Value {
    fn kind(&self) -> SampleKind<'_> {
        match self {
            Value::Null => SampleKind::Null,
            Value::Bool(_) => SampleKind::Bool,
            Value::Number(n) => SampleKind::Number(n),
            Value::String(s) => SampleKind::String(s),
            Value::Array(_) => SampleKind::Array,
            Value::Object(_) => SampleKind::Object,
        }
    }

    fn identity(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(std::ptr::from_ref(items) as usize),
            Value::Object(map) => Some(std::ptr::from_ref(map) as usize),
            _ => None,
        }
    }

    fn for_each_item(&self, f: &mut dyn FnMut(&Self)) {
        if let Value::Array(items) = self {
            for item in items {
                f(item);
            }
        }
    }

    fn for_each_entry(&self, f: &mut dyn FnMut(&str, &Self)) {
        if let Value::Object(map) = self {
            for (key, val) in map {
                f(key, val);
            }
        }
    }
}

/// In-memory JSON graph with shared, mutable containers.
///
/// Cloning a container clones the handle, not the contents, so the same
/// array or object can appear at several places, including inside itself.
/// Reference cycles are not collected; break them with [`SharedValue::clear`]
/// when the graph is no longer needed.
#[derive(Clone)]
pub enum SharedValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Rc<RefCell<Vec<SharedValue>>>),
    Object(Rc<RefCell<IndexMap<String, SharedValue>>>),
    /// Runtime value with no JSON counterpart, described by a label
    Opaque(String),
}

impl SharedValue {
    /// Create an empty array
    pub fn array() -> Self {
        SharedValue::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// Create an empty object
    pub fn object() -> Self {
        SharedValue::Object(Rc::new(RefCell::new(IndexMap::new())))
    }

    /// Append to an array. Returns `false` if this is not an array.
    pub fn push(&self, value: SharedValue) -> bool {
        match self {
            SharedValue::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    /// Set an object entry. Returns `false` if this is not an object.
    pub fn insert(&self, key: impl Into<String>, value: SharedValue) -> bool {
        match self {
            SharedValue::Object(map) => {
                map.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Drop every child of a container, breaking any cycle through it
    pub fn clear(&self) {
        match self {
            SharedValue::Array(items) => items.borrow_mut().clear(),
            SharedValue::Object(map) => map.borrow_mut().clear(),
            _ => {}
        }
    }

    /// Check whether two values are the same container
    pub fn ptr_eq(&self, other: &SharedValue) -> bool {
        match (self, other) {
            (SharedValue::Array(a), SharedValue::Array(b)) => Rc::ptr_eq(a, b),
            (SharedValue::Object(a), SharedValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// Containers print shallowly; a derived impl would never finish on a cycle.
impl std::fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SharedValue::Null => write!(f, "Null"),
            SharedValue::Bool(b) => write!(f, "Bool({b})"),
            SharedValue::Number(n) => write!(f, "Number({n})"),
            SharedValue::String(s) => write!(f, "String({s:?})"),
            SharedValue::Array(items) => match items.try_borrow() {
                Ok(items) => write!(f, "Array(len={})", items.len()),
                Err(_) => write!(f, "Array(<borrowed>)"),
            },
            SharedValue::Object(map) => match map.try_borrow() {
                Ok(map) => write!(f, "Object(keys={:?})", map.keys().collect::<Vec<_>>()),
                Err(_) => write!(f, "Object(<borrowed>)"),
            },
            SharedValue::Opaque(label) => write!(f, "Opaque({label})"),
        }
    }
}

impl From<Value> for SharedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SharedValue::Null,
            Value::Bool(b) => SharedValue::Bool(b),
            Value::Number(n) => SharedValue::Number(n),
            Value::String(s) => SharedValue::String(s),
            Value::Array(items) => SharedValue::Array(Rc::new(RefCell::new(
                items.into_iter().map(SharedValue::from).collect(),
            ))),
            Value::Object(map) => SharedValue::Object(Rc::new(RefCell::new(
                map.into_iter()
                    .map(|(key, val)| (key, SharedValue::from(val)))
                    .collect(),
            ))),
        }
    }
}

impl Sample for SharedValue {
    fn kind(&self) -> SampleKind<'_> {
        match self {
            SharedValue::Null => SampleKind::Null,
            SharedValue::Bool(_) => SampleKind::Bool,
            SharedValue::Number(n) => SampleKind::Number(n),
            SharedValue::String(s) => SampleKind::String(s),
            SharedValue::Array(_) => SampleKind::Array,
            SharedValue::Object(_) => SampleKind::Object,
            SharedValue::Opaque(_) => SampleKind::Opaque,
        }
    }

    fn identity(&self) -> Option<usize> {
        match self {
            SharedValue::Array(items) => Some(Rc::as_ptr(items) as usize),
            SharedValue::Object(map) => Some(Rc::as_ptr(map) as usize),
            _ => None,
        }
    }

    fn for_each_item(&self, f: &mut dyn FnMut(&Self)) {
        if let SharedValue::Array(items) = self {
            for item in items.borrow().iter() {
                f(item);
            }
        }
    }

    fn for_each_entry(&self, f: &mut dyn FnMut(&str, &Self)) {
        if let SharedValue::Object(map) = self {
            for (key, val) in map.borrow().iter() {
                f(key, val);
            }
        }
    }
}
