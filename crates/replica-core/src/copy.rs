//! Deep copy
//!
//! Produces an independent, structurally equivalent copy of a value graph,
//! or rebuilds the copy inside a caller-supplied destination.
//!
//! Key features:
//! - Handles circular references
//! - Preserves object identity within a copy operation: a sub-object reached
//!   through several paths is copied once and shared in the result
//! - Dispatches special kinds (buffers, boxed scalars, dates, patterns, blobs,
//!   clonable host objects) to dedicated rebuild strategies
//! - Truncates branches that exceed the depth budget
//! - Refuses to copy global execution contexts and scopes

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::array::JsArray;
use crate::blob::JsBlob;
use crate::boxed::JsBoxed;
use crate::classify::{Intrinsics, TypeClassifier};
use crate::config::{CopyOptions, DepthBudget};
use crate::date::JsDate;
use crate::error::{CopyError, CopyResult};
use crate::gc::GcRef;
use crate::object::{HAS_OWN_PROPERTY, HASH_KEY, JsObject, PropertyKey, has_own_property};
use crate::regexp::JsRegExp;
use crate::typed_array::JsTypedArray;
use crate::value::Value;

/// Placeholder substituted for branches beyond the depth budget
pub const TRUNCATION_MARKER: &str = "...";

/// Source references already visited and the copies produced for them
///
/// The two sequences are parallel: `copies[i]` is the copy of `sources[i]`.
/// Holding the sources keeps their addresses from being reused while the
/// call is running.
#[derive(Debug, Default)]
struct IdentityLedger {
    sources: Vec<Value>,
    copies: Vec<Value>,
    index: FxHashMap<usize, usize>,
}

impl IdentityLedger {
    fn lookup(&self, source: &Value) -> Option<&Value> {
        let id = source.heap_id()?;
        self.index.get(&id).map(|&slot| &self.copies[slot])
    }

    fn record(&mut self, source: &Value, copy: Value) {
        if let Some(id) = source.heap_id() {
            self.index.insert(id, self.sources.len());
            self.sources.push(source.clone());
            self.copies.push(copy);
        }
    }

    fn len(&self) -> usize {
        self.sources.len()
    }
}

/// How own keys of a record are enumerated
///
/// The two templated policies differ only in how they are selected. Both
/// filter inherited-inclusive keys through [`has_own_property`], which reads
/// property storage; a native `hasOwnProperty` has no receiver to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// No template: own keys are read directly
    Blank,
    /// Template chain provides a callable `hasOwnProperty`
    OwnCheck,
    /// `hasOwnProperty` is shadowed, missing or not callable
    ShadowedOwnCheck,
}

impl KeyPolicy {
    /// Own keys of `obj`, in enumeration order
    pub fn own_keys(self, obj: &JsObject) -> Vec<PropertyKey> {
        match self {
            KeyPolicy::Blank => obj.own_keys(),
            KeyPolicy::OwnCheck | KeyPolicy::ShadowedOwnCheck => obj
                .for_in_keys()
                .into_iter()
                .filter(|key| has_own_property(obj, key))
                .collect(),
        }
    }
}

/// Where a copied member lands in its container
#[derive(Debug)]
enum Slot {
    Element,
    Property(PropertyKey),
}

/// A registered composite copy whose members are still being filled.
///
/// Members are snapshotted when the frame is created, so no lock on the
/// source is held while the rest of the graph is walked.
#[derive(Debug)]
struct PendingComposite {
    copy: Value,
    members: std::vec::IntoIter<(Slot, Value)>,
    budget: DepthBudget,
    hash_key: Option<Value>,
}

impl PendingComposite {
    fn store(&self, slot: Slot, member: Value) {
        match (&self.copy, slot) {
            (Value::Array(dst), Slot::Element) => dst.push(member),
            (Value::Object(dst), Slot::Property(key)) => dst.set(&key, member),
            _ => {}
        }
    }

    /// Restores the container's own `$$hashKey`, or strips the one copied
    /// from the source
    fn finish(self) {
        if let Value::Object(dst) = &self.copy {
            match self.hash_key {
                Some(h) => dst.set(HASH_KEY, h),
                None => {
                    dst.delete(HASH_KEY);
                }
            }
        }
    }
}

/// Performs one copy call.
///
/// The entry points consume the copier, so the identity ledger never outlives
/// the call. Composites are filled from an explicit work stack in depth-first
/// order, so graph depth is bounded by memory rather than the call stack.
pub struct DeepCopier<C: TypeClassifier = Intrinsics> {
    classifier: C,
    budget: DepthBudget,
    ledger: IdentityLedger,
    pending: Vec<PendingComposite>,
}

impl DeepCopier<Intrinsics> {
    /// Create a copier using the built-in classifier
    pub fn new(options: &CopyOptions) -> Self {
        Self::with_classifier(Intrinsics, options)
    }
}

impl<C: TypeClassifier> DeepCopier<C> {
    /// Create a copier using a caller-provided classifier
    pub fn with_classifier(classifier: C, options: &CopyOptions) -> Self {
        Self {
            classifier,
            budget: options.budget(),
            ledger: IdentityLedger::default(),
            pending: Vec::new(),
        }
    }

    /// Build and return an independent copy of `source`
    pub fn copy_value(mut self, source: &Value) -> CopyResult<Value> {
        debug!(source = source.type_name(), budget = ?self.budget, "deep copy");
        let copy = self.copy_element(source, self.budget)?;
        self.drain()?;
        trace!(visited = self.ledger.len(), "deep copy finished");
        Ok(copy)
    }

    /// Clear `destination` and rebuild the copy of `source` inside it.
    ///
    /// Returns `destination`. If an error is raised after clearing, the
    /// destination is left cleared and partially populated.
    pub fn copy_into(mut self, source: &Value, destination: &Value) -> CopyResult<Value> {
        debug!(
            source = source.type_name(),
            destination = destination.type_name(),
            budget = ?self.budget,
            "deep copy into destination"
        );
        self.check_destination(source, destination)?;
        if self.classifier.is_restricted(source) {
            return Err(self.restricted(source));
        }

        let Some(inner) = self.budget.descend() else {
            return Ok(Value::string(TRUNCATION_MARKER));
        };

        match destination {
            Value::Array(dst) => dst.truncate(0),
            Value::Object(dst) => {
                dst.clear_except(HASH_KEY);
            }
            _ => return Err(CopyError::Internal("destination is not a composite")),
        }

        self.ledger.record(source, destination.clone());
        self.schedule(source, destination.clone(), inner);
        self.drain()?;
        trace!(visited = self.ledger.len(), "deep copy finished");
        Ok(destination.clone())
    }

    fn check_destination(&self, source: &Value, destination: &Value) -> CopyResult<()> {
        if self.classifier.is_typed_array(destination) || self.classifier.is_array_buffer(destination)
        {
            debug!(destination = destination.type_name(), "fixed-length destination");
            return Err(CopyError::UnsupportedDestination(destination.type_name()));
        }
        if source.same_reference(destination) {
            debug!("source and destination are identical");
            return Err(CopyError::IdenticalSourceAndDestination);
        }

        let destination_is_array = self.classifier.is_array(destination);
        if !destination_is_array && destination.as_object().is_none() {
            debug!(destination = destination.type_name(), "non-composite destination");
            return Err(CopyError::UnsupportedDestination(destination.type_name()));
        }
        if source.is_composite() && self.classifier.is_array(source) != destination_is_array {
            debug!(
                source = source.type_name(),
                destination = destination.type_name(),
                "incompatible destination"
            );
            return Err(CopyError::IncompatibleDestination {
                source_type: source.type_name(),
                destination_type: destination.type_name(),
            });
        }
        Ok(())
    }

    fn restricted(&self, value: &Value) -> CopyError {
        debug!(value = value.type_name(), "refusing to copy restricted object");
        CopyError::RestrictedObject(value.type_name())
    }

    fn copy_element(&mut self, value: &Value, budget: DepthBudget) -> CopyResult<Value> {
        if value.is_primitive() || value.is_function() {
            return Ok(value.clone());
        }

        if let Some(copy) = self.ledger.lookup(value) {
            trace!(value = value.type_name(), "already copied");
            return Ok(copy.clone());
        }

        if self.classifier.is_restricted(value) {
            return Err(self.restricted(value));
        }

        if let Some(copy) = self.copy_type(value, budget)? {
            self.ledger.record(value, copy.clone());
            return Ok(copy);
        }

        let Some(inner) = budget.descend() else {
            trace!(value = value.type_name(), "depth budget exhausted");
            return Ok(Value::string(TRUNCATION_MARKER));
        };

        let copy = if self.classifier.is_array(value) {
            Value::array(GcRef::new(JsArray::new()))
        } else {
            let prototype = value.as_object().and_then(|obj| obj.prototype().cloned());
            Value::object(GcRef::new(JsObject::new(prototype)))
        };

        // Registered before members are visited so self-references resolve
        // to this copy.
        self.ledger.record(value, copy.clone());
        self.schedule(value, copy.clone(), inner);
        Ok(copy)
    }

    /// Fill pending composites until the work stack is empty.
    ///
    /// The top frame is always filled first, and a member that needs filling
    /// is pushed above its parent, which reproduces recursive depth-first
    /// order: a member's subgraph is finished before its next sibling is
    /// visited.
    fn drain(&mut self) -> CopyResult<()> {
        while let Some(frame) = self.pending.last_mut() {
            let Some((slot, item)) = frame.members.next() else {
                if let Some(done) = self.pending.pop() {
                    done.finish();
                }
                continue;
            };
            let budget = frame.budget;
            let depth = self.pending.len();

            let copy = self.copy_element(&item, budget)?;
            self.pending[depth - 1].store(slot, copy);
        }
        Ok(())
    }

    /// Rebuild strategies for kinds that are not plain composites.
    /// `None` means "treat as plain composite".
    fn copy_type(&mut self, value: &Value, budget: DepthBudget) -> CopyResult<Option<Value>> {
        let copy = match value {
            Value::TypedArray(ta) => {
                // Through the ledger, so views sharing a buffer keep sharing it
                let buffer = self.copy_element(&Value::array_buffer(ta.buffer().clone()), budget)?;
                let buffer = buffer
                    .as_array_buffer()
                    .cloned()
                    .ok_or(CopyError::Internal("typed array buffer copied to a non-buffer"))?;
                let view = JsTypedArray::new(buffer, ta.kind(), ta.byte_offset(), ta.length())
                    .map_err(CopyError::Internal)?;
                Value::typed_array(GcRef::new(view))
            }
            Value::ArrayBuffer(ab) => Value::array_buffer(GcRef::new(ab.slice(0, ab.byte_length()))),
            Value::Boxed(b) => Value::boxed(GcRef::new(JsBoxed::new(b.primitive().clone()))),
            Value::Date(d) => Value::date(GcRef::new(JsDate::new(d.time_value()))),
            Value::RegExp(r) => {
                let re = JsRegExp::new(r.source.clone(), r.flags.clone());
                re.set_last_index(r.last_index());
                Value::regex(GcRef::new(re))
            }
            Value::Blob(b) => Value::blob(GcRef::new(JsBlob::new(b.bytes(), b.content_type()))),
            Value::Host(h) => match h.clone_node(true) {
                Some(clone) => Value::host(clone),
                None => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(copy))
    }

    /// Queue `copy` to be filled with copies of the members of `source`
    fn schedule(&mut self, source: &Value, copy: Value, budget: DepthBudget) {
        let members = match source {
            Value::Array(src) => src
                .to_vec()
                .into_iter()
                .map(|item| (Slot::Element, item))
                .collect(),
            Value::Object(obj) => self.own_members(source, obj),
            _ => Vec::new(),
        };
        let hash_key = copy.as_object().and_then(|dst| dst.get_own(HASH_KEY));
        self.pending.push(PendingComposite {
            copy,
            members: members.into_iter(),
            budget,
            hash_key,
        });
    }

    /// Snapshot of a record's own entries
    fn own_members(&self, source: &Value, obj: &JsObject) -> Vec<(Slot, Value)> {
        let policy = self.key_policy(source, obj);
        trace!(?policy, "enumerating record keys");
        policy
            .own_keys(obj)
            .into_iter()
            .filter_map(|key| obj.get_own(&key).map(|value| (Slot::Property(key), value)))
            .collect()
    }

    fn key_policy(&self, source: &Value, obj: &JsObject) -> KeyPolicy {
        if self.classifier.is_blank_object(source) {
            KeyPolicy::Blank
        } else if obj.get(HAS_OWN_PROPERTY).is_some_and(|v| v.is_function()) {
            KeyPolicy::OwnCheck
        } else {
            KeyPolicy::ShadowedOwnCheck
        }
    }
}

/// Deep-copy `source`, optionally into `destination`, truncating branches
/// nested deeper than `max_depth` (`None` or `Some(0)` means unbounded)
///
/// Besides rejecting buffer destinations and self-copies, a destination must
/// be the same kind of composite as a composite source: an array cannot be
/// rebuilt inside a record or the other way round, and that mismatch fails
/// with [`CopyError::IncompatibleDestination`] before anything is cleared.
pub fn copy(
    source: &Value,
    destination: Option<&Value>,
    max_depth: Option<usize>,
) -> CopyResult<Value> {
    copy_with(source, destination, &CopyOptions { max_depth })
}

/// Deep-copy with loaded options
pub fn copy_with(
    source: &Value,
    destination: Option<&Value>,
    options: &CopyOptions,
) -> CopyResult<Value> {
    let copier = DeepCopier::new(options);
    match destination {
        Some(destination) => copier.copy_into(source, destination),
        None => copier.copy_value(source),
    }
}
