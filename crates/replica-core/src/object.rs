//! Record-like objects with behavioral templates
//!
//! An object maps string keys to values. It may link to another object, its
//! template (prototype): keys found only on the template are inherited. They
//! show up in lookups and in [`JsObject::for_in_keys`], but never in
//! [`JsObject::own_keys`].

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::gc::GcRef;
use crate::value::Value;

/// Property key
pub type PropertyKey = Arc<str>;

/// Reserved bookkeeping key that hosts attach to track object identity
pub const HASH_KEY: &str = "$$hashKey";

/// Name of the ownership-check capability looked up on records
pub const HAS_OWN_PROPERTY: &str = "hasOwnProperty";

/// A record-like object
///
/// Thread-safe with interior mutability.
pub struct JsObject {
    /// Own properties, in insertion order
    properties: RwLock<IndexMap<PropertyKey, Value>>,
    /// Template (None for blank objects)
    prototype: Option<GcRef<JsObject>>,
}

impl JsObject {
    /// Create a new empty object with the given template
    pub fn new(prototype: Option<GcRef<JsObject>>) -> Self {
        Self {
            properties: RwLock::new(IndexMap::new()),
            prototype,
        }
    }

    /// Create an object with no template
    pub fn blank() -> Self {
        Self::new(None)
    }

    /// Create a blank object from key/value pairs
    pub fn from_entries<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let obj = Self::blank();
        for (key, value) in entries {
            obj.set(key.as_ref(), value);
        }
        obj
    }

    /// Get property by key, walking the template chain
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.properties.read().get(key) {
            return Some(value.clone());
        }
        self.prototype.as_ref().and_then(|proto| proto.get(key))
    }

    /// Get own property by key
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.properties.read().get(key).cloned()
    }

    /// Set own property
    pub fn set(&self, key: &str, value: Value) {
        let mut props = self.properties.write();
        if let Some(slot) = props.get_mut(key) {
            *slot = value;
        } else {
            props.insert(Arc::from(key), value);
        }
    }

    /// Delete own property, returning the removed value
    pub fn delete(&self, key: &str) -> Option<Value> {
        self.properties.write().shift_remove(key)
    }

    /// Check if object has own property
    pub fn has_own(&self, key: &str) -> bool {
        has_own_property(self, key)
    }

    /// Check if object has property (including template chain)
    pub fn has(&self, key: &str) -> bool {
        self.has_own(key) || self.prototype.as_ref().is_some_and(|proto| proto.has(key))
    }

    /// Own property keys, in insertion order
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.properties.read().keys().cloned().collect()
    }

    /// Own entries, in insertion order
    pub fn own_entries(&self) -> Vec<(PropertyKey, Value)> {
        self.properties
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Own keys followed by inherited keys not shadowed by a nearer object
    pub fn for_in_keys(&self) -> Vec<PropertyKey> {
        let mut seen = FxHashSet::default();
        let mut keys = Vec::new();
        let mut current: Option<&JsObject> = Some(self);
        while let Some(obj) = current {
            for key in obj.properties.read().keys() {
                if seen.insert(key.clone()) {
                    keys.push(key.clone());
                }
            }
            current = obj.prototype.as_deref();
        }
        keys
    }

    /// Remove every own key except `keep`, returning the kept value if present
    pub fn clear_except(&self, keep: &str) -> Option<Value> {
        let mut props = self.properties.write();
        let kept = props.shift_remove(keep);
        props.clear();
        if let Some(value) = &kept {
            props.insert(Arc::from(keep), value.clone());
        }
        kept
    }

    /// Get template
    pub fn prototype(&self) -> Option<&GcRef<JsObject>> {
        self.prototype.as_ref()
    }

    /// Check if the object has no template
    pub fn is_blank(&self) -> bool {
        self.prototype.is_none()
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    /// Check if there are no own properties
    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }
}

/// Ownership check that reads property storage directly.
///
/// Unlike a `hasOwnProperty` entry found on the object or its template, this
/// cannot be shadowed or removed by the object being inspected.
pub fn has_own_property(obj: &JsObject, key: &str) -> bool {
    obj.properties.read().contains_key(key)
}

impl std::fmt::Debug for JsObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let props = self.properties.read();
        f.debug_struct("JsObject")
            .field("properties", &props.len())
            .field("blank", &self.prototype.is_none())
            .finish()
    }
}
