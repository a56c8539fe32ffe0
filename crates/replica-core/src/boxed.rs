//! Boxed scalars
//!
//! A boxed scalar wraps a primitive but has reference identity of its own:
//! two boxes around the same number are different objects.

use std::sync::Arc;

use crate::value::Value;

/// The primitive held by a box
#[derive(Debug, Clone, PartialEq)]
pub enum BoxedPrimitive {
    /// Boolean wrapper
    Boolean(bool),
    /// Number wrapper
    Number(f64),
    /// String wrapper
    String(Arc<str>),
}

/// A boxed boolean, number or string
#[derive(Debug)]
pub struct JsBoxed {
    primitive: BoxedPrimitive,
}

impl JsBoxed {
    /// Box a primitive
    pub fn new(primitive: BoxedPrimitive) -> Self {
        Self { primitive }
    }

    /// Box a boolean
    pub fn boolean(b: bool) -> Self {
        Self::new(BoxedPrimitive::Boolean(b))
    }

    /// Box a number
    pub fn number(n: f64) -> Self {
        Self::new(BoxedPrimitive::Number(n))
    }

    /// Box a string
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::new(BoxedPrimitive::String(Arc::from(s.as_ref())))
    }

    /// The wrapped primitive
    pub fn primitive(&self) -> &BoxedPrimitive {
        &self.primitive
    }

    /// The wrapped primitive as a plain value
    pub fn value_of(&self) -> Value {
        match &self.primitive {
            BoxedPrimitive::Boolean(b) => Value::Boolean(*b),
            BoxedPrimitive::Number(n) => Value::Number(*n),
            BoxedPrimitive::String(s) => Value::String(s.clone()),
        }
    }

    /// Wrapper type name
    pub fn type_name(&self) -> &'static str {
        match self.primitive {
            BoxedPrimitive::Boolean(_) => "Boolean",
            BoxedPrimitive::Number(_) => "Number",
            BoxedPrimitive::String(_) => "String",
        }
    }
}
