//! ArrayBuffer implementation
//!
//! ArrayBuffer is the fixed-length byte region that typed views read and
//! write through. Its length never changes after construction, which is why
//! the copy engine refuses it as a destination.

use parking_lot::RwLock;

/// A raw buffer of binary data
#[derive(Debug)]
pub struct JsArrayBuffer {
    data: RwLock<Vec<u8>>,
}

impl JsArrayBuffer {
    /// Create a new zero-filled ArrayBuffer with the specified byte length
    pub fn new(byte_length: usize) -> Self {
        Self {
            data: RwLock::new(vec![0; byte_length]),
        }
    }

    /// Create an ArrayBuffer owning `bytes`
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: RwLock::new(bytes.into()),
        }
    }

    /// Get the byte length
    pub fn byte_length(&self) -> usize {
        self.data.read().len()
    }

    /// Slice the buffer to create a new, independent ArrayBuffer
    pub fn slice(&self, start: usize, end: usize) -> JsArrayBuffer {
        let data = self.data.read();
        let len = data.len();
        let actual_start = start.min(len);
        let actual_end = end.min(len).max(actual_start);
        JsArrayBuffer::from_bytes(&data[actual_start..actual_end])
    }

    /// Read a byte at the given index
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.read().get(index).copied()
    }

    /// Write a byte at the given index
    pub fn set(&self, index: usize, value: u8) -> bool {
        match self.data.write().get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Read bytes into a slice
    pub fn read_bytes(&self, offset: usize, dest: &mut [u8]) -> bool {
        let data = self.data.read();
        match offset.checked_add(dest.len()) {
            Some(end) if end <= data.len() => {
                dest.copy_from_slice(&data[offset..end]);
                true
            }
            _ => false,
        }
    }

    /// Write bytes from a slice
    pub fn write_bytes(&self, offset: usize, src: &[u8]) -> bool {
        let mut data = self.data.write();
        match offset.checked_add(src.len()) {
            Some(end) if end <= data.len() => {
                data[offset..end].copy_from_slice(src);
                true
            }
            _ => false,
        }
    }

    /// Copy of the full contents
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.read().clone()
    }
}
