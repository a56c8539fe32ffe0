//! # Replica Core
//!
//! Structural deep copy for dynamic, reference-based value graphs.
//!
//! ## Design Principles
//!
//! - **Identity-aware**: cycles terminate and shared sub-objects stay shared
//! - **Closed dispatch**: every special kind has its own rebuild strategy
//! - **Opaque hosts**: embedder objects clone themselves or are refused
//! - **Thread-safe**: values are `Send + Sync`; copies run synchronously
//!
//! ```
//! use replica_core::{JsObject, Value, copy};
//! use replica_core::gc::GcRef;
//!
//! let source = Value::object(GcRef::new(JsObject::from_entries([("x", Value::int32(1))])));
//! let copied = copy(&source, None, None).unwrap();
//! assert!(!copied.same_reference(&source));
//! assert_eq!(copied.as_object().unwrap().get("x"), Some(Value::int32(1)));
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod array;
pub mod array_buffer;
pub mod blob;
pub mod boxed;
pub mod classify;
pub mod config;
pub mod copy;
pub mod date;
pub mod error;
pub mod gc;
pub mod host;
pub mod object;
pub mod regexp;
pub mod typed_array;
pub mod value;

pub use array::JsArray;
pub use array_buffer::JsArrayBuffer;
pub use blob::JsBlob;
pub use boxed::{BoxedPrimitive, JsBoxed};
pub use classify::{Intrinsics, TypeClassifier};
pub use config::{CopyOptions, DepthBudget};
pub use copy::{DeepCopier, KeyPolicy, TRUNCATION_MARKER, copy, copy_with};
pub use date::JsDate;
pub use error::{CopyError, CopyResult};
pub use host::{HostKind, HostObject};
pub use object::JsObject;
pub use regexp::JsRegExp;
pub use typed_array::{JsTypedArray, TypedArrayKind};
pub use value::Value;
