//! Dynamic values
//!
//! A [`Value`] is either a primitive (copied by value, no identity), a
//! function (shared by reference, never copied), or a reference to one of the
//! heap kinds below. Reference identity is exposed through [`Value::heap_id`].

use crate::array::JsArray;
use crate::array_buffer::JsArrayBuffer;
use crate::blob::JsBlob;
use crate::boxed::JsBoxed;
use crate::date::JsDate;
use crate::gc::GcRef;
use crate::host::HostObject;
use crate::object::JsObject;
use crate::regexp::JsRegExp;
use crate::typed_array::JsTypedArray;
use std::fmt;
use std::sync::Arc;

/// Native function handler type
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A callable value
///
/// Functions carry behavior, not data, so the copy engine hands them through
/// untouched.
pub struct JsFunction {
    /// Function name (for diagnostics)
    pub name: String,
    handler: NativeFn,
}

impl JsFunction {
    /// Create a function from a native handler
    pub fn new(name: impl Into<String>, handler: NativeFn) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// Invoke the handler
    pub fn call(&self, args: &[Value]) -> Value {
        (self.handler)(args)
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}

/// A dynamic value
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value
    Undefined,
    /// Explicit null
    Null,
    /// Boolean primitive
    Boolean(bool),
    /// Number primitive
    Number(f64),
    /// String primitive (immutable, shared)
    String(Arc<str>),
    /// Callable
    Function(GcRef<JsFunction>),
    /// Record-like composite
    Object(GcRef<JsObject>),
    /// Array-like composite
    Array(GcRef<JsArray>),
    /// Boxed boolean/number/string
    Boxed(GcRef<JsBoxed>),
    /// Date wrapper
    Date(GcRef<JsDate>),
    /// Compiled pattern
    RegExp(GcRef<JsRegExp>),
    /// Raw byte buffer
    ArrayBuffer(GcRef<JsArrayBuffer>),
    /// Typed view over a byte buffer
    TypedArray(GcRef<JsTypedArray>),
    /// Byte payload with a content type
    Blob(GcRef<JsBlob>),
    /// Externally owned opaque object
    Host(GcRef<dyn HostObject>),
}

impl Value {
    /// Create undefined
    pub fn undefined() -> Self {
        Self::Undefined
    }

    /// Create null
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a boolean
    pub fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Create a number
    pub fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Create a number from an i32
    pub fn int32(n: i32) -> Self {
        Self::Number(n as f64)
    }

    /// Create a string
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Create a native function
    pub fn native_function(
        name: impl Into<String>,
        handler: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::Function(GcRef::new(JsFunction::new(name, Arc::new(handler))))
    }

    /// Wrap an object
    pub fn object(obj: GcRef<JsObject>) -> Self {
        Self::Object(obj)
    }

    /// Wrap an array
    pub fn array(arr: GcRef<JsArray>) -> Self {
        Self::Array(arr)
    }

    /// Wrap a boxed scalar
    pub fn boxed(b: GcRef<JsBoxed>) -> Self {
        Self::Boxed(b)
    }

    /// Wrap a date
    pub fn date(d: GcRef<JsDate>) -> Self {
        Self::Date(d)
    }

    /// Wrap a regex
    pub fn regex(r: GcRef<JsRegExp>) -> Self {
        Self::RegExp(r)
    }

    /// Wrap an ArrayBuffer
    pub fn array_buffer(ab: GcRef<JsArrayBuffer>) -> Self {
        Self::ArrayBuffer(ab)
    }

    /// Wrap a TypedArray
    pub fn typed_array(ta: GcRef<JsTypedArray>) -> Self {
        Self::TypedArray(ta)
    }

    /// Wrap a blob
    pub fn blob(b: GcRef<JsBlob>) -> Self {
        Self::Blob(b)
    }

    /// Wrap a host object
    pub fn host(h: GcRef<dyn HostObject>) -> Self {
        Self::Host(h)
    }

    /// Check if null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the value has no identity (copied by value)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::Null | Self::Boolean(_) | Self::Number(_) | Self::String(_)
        )
    }

    /// Check if the value is a callable
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Check if the value is an array or record composite
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as function
    pub fn as_function(&self) -> Option<&GcRef<JsFunction>> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Get as object
    pub fn as_object(&self) -> Option<&GcRef<JsObject>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&GcRef<JsArray>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as boxed scalar
    pub fn as_boxed(&self) -> Option<&GcRef<JsBoxed>> {
        match self {
            Self::Boxed(b) => Some(b),
            _ => None,
        }
    }

    /// Get as date
    pub fn as_date(&self) -> Option<&GcRef<JsDate>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Get as regex
    pub fn as_regex(&self) -> Option<&GcRef<JsRegExp>> {
        match self {
            Self::RegExp(r) => Some(r),
            _ => None,
        }
    }

    /// Get as ArrayBuffer
    pub fn as_array_buffer(&self) -> Option<&GcRef<JsArrayBuffer>> {
        match self {
            Self::ArrayBuffer(ab) => Some(ab),
            _ => None,
        }
    }

    /// Get as TypedArray
    pub fn as_typed_array(&self) -> Option<&GcRef<JsTypedArray>> {
        match self {
            Self::TypedArray(ta) => Some(ta),
            _ => None,
        }
    }

    /// Get as blob
    pub fn as_blob(&self) -> Option<&GcRef<JsBlob>> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Get as host object
    pub fn as_host(&self) -> Option<&GcRef<dyn HostObject>> {
        match self {
            Self::Host(h) => Some(h),
            _ => None,
        }
    }

    /// Identity of the referenced allocation, `None` for primitives
    pub fn heap_id(&self) -> Option<usize> {
        match self {
            Self::Undefined | Self::Null | Self::Boolean(_) | Self::Number(_) | Self::String(_) => {
                None
            }
            Self::Function(f) => Some(f.id()),
            Self::Object(o) => Some(o.id()),
            Self::Array(a) => Some(a.id()),
            Self::Boxed(b) => Some(b.id()),
            Self::Date(d) => Some(d.id()),
            Self::RegExp(r) => Some(r.id()),
            Self::ArrayBuffer(ab) => Some(ab.id()),
            Self::TypedArray(ta) => Some(ta.id()),
            Self::Blob(b) => Some(b.id()),
            Self::Host(h) => Some(h.id()),
        }
    }

    /// Reference equality; always false for primitives
    pub fn same_reference(&self, other: &Value) -> bool {
        match (self.heap_id(), other.heap_id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Short type name used in diagnostics and errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Object(_) => "Object",
            Self::Array(_) => "Array",
            Self::Boxed(b) => b.type_name(),
            Self::Date(_) => "Date",
            Self::RegExp(_) => "RegExp",
            Self::ArrayBuffer(_) => "ArrayBuffer",
            Self::TypedArray(ta) => ta.kind().name(),
            Self::Blob(_) => "Blob",
            Self::Host(h) => h.type_name(),
        }
    }
}

/// Primitives compare by value (NaN-aware); references compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            _ => self.same_reference(other),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::int32(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_equality() {
        assert_eq!(Value::int32(1), Value::number(1.0));
        assert_eq!(Value::number(f64::NAN), Value::number(f64::NAN));
        assert_eq!(Value::string("a"), Value::from("a"));
        assert_ne!(Value::undefined(), Value::null());
    }

    #[test]
    fn test_reference_identity() {
        let a = Value::object(GcRef::new(JsObject::blank()));
        let b = Value::object(GcRef::new(JsObject::blank()));
        assert!(a.same_reference(&a.clone()));
        assert!(!a.same_reference(&b));
        assert_ne!(a, b);
        assert!(a.heap_id().is_some());
        assert!(Value::int32(3).heap_id().is_none());
    }

    #[test]
    fn test_function_call() {
        let f = Value::native_function("double", |args| {
            Value::number(args.first().and_then(Value::as_number).unwrap_or(0.0) * 2.0)
        });
        let f = f.as_function().unwrap();
        assert_eq!(f.call(&[Value::int32(21)]), Value::int32(42));
    }

    #[test]
    fn test_value_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
    }
}
