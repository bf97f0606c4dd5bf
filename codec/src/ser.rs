//! Serialization helpers: copy a value's native representation into bytes.
//!
//! These functions only move bytes. The pointer misuse check runs in
//! [`crate::ByteCodec`], which wraps every one of them.

use std::io::{self, Write};

use crate::buffer::ByteBuffer;
use crate::pod::Pod;

/// Encodes `value` after `OFFSET` zero bytes.
pub fn encode_to_buffer<T: Pod, const OFFSET: usize>(value: &T) -> ByteBuffer<T, OFFSET> {
    let mut buffer = ByteBuffer::<T, OFFSET>::zeroed();
    buffer.payload_mut().copy_from_slice(value.as_bytes());
    buffer
}

/// Encodes `value` into a stack array, right-aligned behind
/// `N - size_of::<T>()` zero bytes.
pub fn encode_to_array<T: Pod, const N: usize>(value: &T) -> [u8; N] {
    const {
        assert!(
            N >= core::mem::size_of::<T>(),
            "array is too small for the encoded value"
        )
    };

    let mut array = [0u8; N];
    let offset = N - core::mem::size_of::<T>();
    array[offset..].copy_from_slice(value.as_bytes());
    array
}

/// Writes `OFFSET` zero bytes, then the bytes of `value`, to `sink`.
///
/// Write errors are returned as produced by `sink`.
pub fn encode_to_stream<T: Pod, const OFFSET: usize>(
    value: &T,
    sink: &mut impl Write,
) -> io::Result<()> {
    if OFFSET > 0 {
        sink.write_all(&[0u8; OFFSET])?;
    }

    sink.write_all(value.as_bytes())
}

/// Appends the bytes of `value` to `dst`.
pub fn encode_into_vec<T: Pod>(value: &T, dst: &mut Vec<u8>) {
    dst.extend_from_slice(value.as_bytes());
}
