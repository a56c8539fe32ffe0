//! Array-like composites

use parking_lot::RwLock;

use crate::value::Value;

/// An ordered, growable sequence of values
pub struct JsArray {
    elements: RwLock<Vec<Value>>,
}

impl JsArray {
    /// Create an empty array
    pub fn new() -> Self {
        Self {
            elements: RwLock::new(Vec::new()),
        }
    }

    /// Create an array holding `values`
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            elements: RwLock::new(values.into_iter().collect()),
        }
    }

    /// Get element at index
    pub fn get(&self, index: usize) -> Option<Value> {
        self.elements.read().get(index).cloned()
    }

    /// Set element at index, filling any gap with undefined
    pub fn set(&self, index: usize, value: Value) {
        let mut elements = self.elements.write();
        if index >= elements.len() {
            elements.resize(index + 1, Value::undefined());
        }
        elements[index] = value;
    }

    /// Append an element
    pub fn push(&self, value: Value) {
        self.elements.write().push(value);
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    /// Check if there are no elements
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Shorten to `len` elements
    pub fn truncate(&self, len: usize) {
        self.elements.write().truncate(len);
    }

    /// Snapshot of the elements
    pub fn to_vec(&self) -> Vec<Value> {
        self.elements.read().clone()
    }
}

impl Default for JsArray {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JsArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsArray")
            .field("length", &self.len())
            .finish()
    }
}
