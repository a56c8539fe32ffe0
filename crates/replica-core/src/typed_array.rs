//! TypedArray implementation
//!
//! TypedArrays are views over an ArrayBuffer, providing typed access to binary
//! data. All 11 element kinds share one implementation via TypedArrayKind.
//! Elements are stored little-endian.

use crate::array_buffer::JsArrayBuffer;
use crate::gc::GcRef;

/// The kind of TypedArray - determines element size and interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    /// Int8Array - 8-bit signed integers
    Int8,
    /// Uint8Array - 8-bit unsigned integers
    Uint8,
    /// Uint8ClampedArray - 8-bit unsigned integers (clamped)
    Uint8Clamped,
    /// Int16Array - 16-bit signed integers
    Int16,
    /// Uint16Array - 16-bit unsigned integers
    Uint16,
    /// Int32Array - 32-bit signed integers
    Int32,
    /// Uint32Array - 32-bit unsigned integers
    Uint32,
    /// Float32Array - 32-bit floating point
    Float32,
    /// Float64Array - 64-bit floating point
    Float64,
    /// BigInt64Array - 64-bit signed integers
    BigInt64,
    /// BigUint64Array - 64-bit unsigned integers
    BigUint64,
}

impl TypedArrayKind {
    /// Get the byte size of each element
    pub fn element_size(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// Get the name of this TypedArray type
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }
}

/// A typed view over an ArrayBuffer
///
/// The view does not own data - it references the underlying buffer, and
/// several views may share one buffer.
#[derive(Debug)]
pub struct JsTypedArray {
    /// The underlying ArrayBuffer
    buffer: GcRef<JsArrayBuffer>,
    /// Byte offset into the buffer
    byte_offset: usize,
    /// Number of elements (not bytes)
    length: usize,
    /// The kind of typed array
    kind: TypedArrayKind,
}

impl JsTypedArray {
    /// Create a new TypedArray view over an ArrayBuffer
    pub fn new(
        buffer: GcRef<JsArrayBuffer>,
        kind: TypedArrayKind,
        byte_offset: usize,
        length: usize,
    ) -> Result<Self, &'static str> {
        let elem_size = kind.element_size();

        if byte_offset % elem_size != 0 {
            return Err("byte offset must be aligned to element size");
        }

        let byte_length = length
            .checked_mul(elem_size)
            .ok_or("TypedArray length overflow")?;
        let end = byte_offset
            .checked_add(byte_length)
            .ok_or("TypedArray length overflow")?;
        if end > buffer.byte_length() {
            return Err("TypedArray would extend past end of buffer");
        }

        Ok(Self {
            buffer,
            byte_offset,
            length,
            kind,
        })
    }

    /// Create a new TypedArray with its own zero-filled buffer
    pub fn with_length(kind: TypedArrayKind, length: usize) -> Result<Self, &'static str> {
        let byte_length = length
            .checked_mul(kind.element_size())
            .ok_or("TypedArray length overflow")?;
        Self::new(GcRef::new(JsArrayBuffer::new(byte_length)), kind, 0, length)
    }

    /// Get the kind of this TypedArray
    pub fn kind(&self) -> TypedArrayKind {
        self.kind
    }

    /// Get the underlying ArrayBuffer
    pub fn buffer(&self) -> &GcRef<JsArrayBuffer> {
        &self.buffer
    }

    /// Get the byte offset into the buffer
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Get the byte length of the view
    pub fn byte_length(&self) -> usize {
        self.length * self.kind.element_size()
    }

    /// Get the number of elements
    pub fn length(&self) -> usize {
        self.length
    }

    fn read_element<const N: usize>(&self, index: usize) -> Option<[u8; N]> {
        if index >= self.length {
            return None;
        }
        let mut bytes = [0u8; N];
        let byte_index = self.byte_offset + index * self.kind.element_size();
        self.buffer.read_bytes(byte_index, &mut bytes).then_some(bytes)
    }

    fn write_element(&self, index: usize, bytes: &[u8]) -> bool {
        if index >= self.length {
            return false;
        }
        let byte_index = self.byte_offset + index * self.kind.element_size();
        self.buffer.write_bytes(byte_index, bytes)
    }

    /// Get an element as f64 (BigInt arrays read as NaN; use get_bigint)
    pub fn get(&self, index: usize) -> Option<f64> {
        Some(match self.kind {
            TypedArrayKind::Int8 => i8::from_le_bytes(self.read_element(index)?) as f64,
            TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => {
                u8::from_le_bytes(self.read_element(index)?) as f64
            }
            TypedArrayKind::Int16 => i16::from_le_bytes(self.read_element(index)?) as f64,
            TypedArrayKind::Uint16 => u16::from_le_bytes(self.read_element(index)?) as f64,
            TypedArrayKind::Int32 => i32::from_le_bytes(self.read_element(index)?) as f64,
            TypedArrayKind::Uint32 => u32::from_le_bytes(self.read_element(index)?) as f64,
            TypedArrayKind::Float32 => f32::from_le_bytes(self.read_element(index)?) as f64,
            TypedArrayKind::Float64 => f64::from_le_bytes(self.read_element(index)?),
            TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => {
                self.read_element::<8>(index)?;
                f64::NAN
            }
        })
    }

    /// Get an element as i64 (for BigInt arrays)
    pub fn get_bigint(&self, index: usize) -> Option<i64> {
        let bytes = self.read_element::<8>(index)?;
        match self.kind {
            TypedArrayKind::BigInt64 => Some(i64::from_le_bytes(bytes)),
            TypedArrayKind::BigUint64 => Some(u64::from_le_bytes(bytes) as i64),
            _ => None,
        }
    }

    /// Set an element from f64 (BigInt arrays ignore this; use set_bigint)
    pub fn set(&self, index: usize, value: f64) -> bool {
        match self.kind {
            TypedArrayKind::Int8 => self.write_element(index, &(value as i8).to_le_bytes()),
            TypedArrayKind::Uint8 => self.write_element(index, &(value as u8).to_le_bytes()),
            TypedArrayKind::Uint8Clamped => {
                let clamped = if value.is_nan() {
                    0
                } else {
                    value.clamp(0.0, 255.0).round() as u8
                };
                self.write_element(index, &[clamped])
            }
            TypedArrayKind::Int16 => self.write_element(index, &(value as i16).to_le_bytes()),
            TypedArrayKind::Uint16 => self.write_element(index, &(value as u16).to_le_bytes()),
            TypedArrayKind::Int32 => self.write_element(index, &(value as i32).to_le_bytes()),
            TypedArrayKind::Uint32 => self.write_element(index, &(value as u32).to_le_bytes()),
            TypedArrayKind::Float32 => self.write_element(index, &(value as f32).to_le_bytes()),
            TypedArrayKind::Float64 => self.write_element(index, &value.to_le_bytes()),
            TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => index < self.length,
        }
    }

    /// Set an element from i64 (for BigInt arrays)
    pub fn set_bigint(&self, index: usize, value: i64) -> bool {
        match self.kind {
            TypedArrayKind::BigInt64 => self.write_element(index, &value.to_le_bytes()),
            TypedArrayKind::BigUint64 => self.write_element(index, &(value as u64).to_le_bytes()),
            _ => false,
        }
    }

    /// Create a subarray view over elements `begin..end` (shares the same buffer)
    pub fn subarray(&self, begin: usize, end: usize) -> JsTypedArray {
        let start = begin.min(self.length);
        let end = end.min(self.length).max(start);
        JsTypedArray {
            buffer: self.buffer.clone(),
            byte_offset: self.byte_offset + start * self.kind.element_size(),
            length: end - start,
            kind: self.kind,
        }
    }
}
