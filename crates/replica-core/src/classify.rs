//! Type classification
//!
//! The copy engine asks a [`TypeClassifier`] what a value is and takes the
//! answer as given. Embedders that tag their own host objects differently can
//! plug in a classifier of their own.

use crate::host::HostKind;
use crate::value::Value;

/// Answers "what kind of value is this" for the copy engine
pub trait TypeClassifier {
    /// Array-like composite
    fn is_array(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    /// Record-like composite with no template
    fn is_blank_object(&self, value: &Value) -> bool {
        value.as_object().is_some_and(|obj| obj.is_blank())
    }

    /// Typed view over a buffer
    fn is_typed_array(&self, value: &Value) -> bool {
        matches!(value, Value::TypedArray(_))
    }

    /// Raw byte buffer
    fn is_array_buffer(&self, value: &Value) -> bool {
        matches!(value, Value::ArrayBuffer(_))
    }

    /// Global execution context
    fn is_window(&self, value: &Value) -> bool {
        value
            .as_host()
            .is_some_and(|host| host.host_kind() == HostKind::Window)
    }

    /// View/context scope
    fn is_scope(&self, value: &Value) -> bool {
        value
            .as_host()
            .is_some_and(|host| host.host_kind() == HostKind::Scope)
    }

    /// Values that must never be copied
    fn is_restricted(&self, value: &Value) -> bool {
        self.is_window(value) || self.is_scope(value)
    }
}

/// Classifier reading the built-in value variants
#[derive(Debug, Clone, Copy, Default)]
pub struct Intrinsics;

impl TypeClassifier for Intrinsics {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gc::GcRef;
    use crate::host::{HostObject, host_value};
    use crate::object::JsObject;

    #[derive(Debug)]
    struct Global;

    impl HostObject for Global {
        fn type_name(&self) -> &'static str {
            "Window"
        }

        fn host_kind(&self) -> HostKind {
            HostKind::Window
        }
    }

    #[test]
    fn test_blank_object() {
        let blank = Value::object(GcRef::new(JsObject::blank()));
        let proto = GcRef::new(JsObject::blank());
        let derived = Value::object(GcRef::new(JsObject::new(Some(proto))));
        assert!(Intrinsics.is_blank_object(&blank));
        assert!(!Intrinsics.is_blank_object(&derived));
        assert!(!Intrinsics.is_blank_object(&Value::null()));
    }

    #[test]
    fn test_restricted() {
        assert!(Intrinsics.is_restricted(&host_value(Global)));
        assert!(!Intrinsics.is_restricted(&Value::int32(1)));
    }
}
