//! Host objects
//!
//! Host objects are owned by the embedder (document nodes, handles into a
//! view layer, execution contexts). The copy engine never looks inside them:
//! it either asks the object to clone itself or refuses to copy it.

use std::fmt::Debug;
use std::sync::Arc;

use crate::gc::GcRef;
use crate::value::Value;

/// Role a host object plays for the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Node-like object, possibly clonable
    Node,
    /// Global execution context
    Window,
    /// View/context scope
    Scope,
}

/// An externally defined object
pub trait HostObject: Debug + Send + Sync {
    /// Name used in diagnostics and errors
    fn type_name(&self) -> &'static str;

    /// Role of this object
    fn host_kind(&self) -> HostKind {
        HostKind::Node
    }

    /// Clone-deep capability.
    ///
    /// Returns `None` when the object cannot clone itself; the copy engine
    /// then falls back to an empty record. With `deep` set the returned
    /// object must not share mutable state with `self`.
    fn clone_node(&self, deep: bool) -> Option<GcRef<dyn HostObject>> {
        let _ = deep;
        None
    }
}

impl GcRef<dyn HostObject> {
    /// Allocate a host object behind a trait-object handle
    pub fn host<H: HostObject + 'static>(host: H) -> Self {
        GcRef::from_arc(Arc::new(host) as Arc<dyn HostObject>)
    }
}

/// Wrap a host object as a value
pub fn host_value<H: HostObject + 'static>(host: H) -> Value {
    Value::host(GcRef::host(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque;

    impl HostObject for Opaque {
        fn type_name(&self) -> &'static str {
            "Opaque"
        }
    }

    #[test]
    fn test_defaults() {
        let value = host_value(Opaque);
        let host = value.as_host().unwrap();
        assert_eq!(host.host_kind(), HostKind::Node);
        assert!(host.clone_node(true).is_none());
        assert_eq!(value.type_name(), "Opaque");
    }
}
