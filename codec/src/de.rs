//! Deserialization helpers: rebuild values from their raw bytes.

use std::io::{self, Read};

use crate::buffer::ByteBuffer;
use crate::pod::Pod;

/// Errors that can happen while interpreting raw bytes as a value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeserializeError {
    #[error("buffer size mismatch: expected {expected} bytes got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Rebuilds the value stored in `buffer`, skipping its zero prefix.
///
/// The buffer length is tied to `T`, so this cannot fail. The bytes are not
/// validated; `T: Pod` makes any content a valid value.
pub fn decode_from_buffer<T: Pod, const OFFSET: usize>(buffer: &ByteBuffer<T, OFFSET>) -> T {
    let mut value = T::new_zeroed();
    value.as_bytes_mut().copy_from_slice(buffer.payload());
    value
}

/// Rebuilds a value from exactly `size_of::<T>()` bytes.
pub fn decode_from_slice<T: Pod>(bytes: &[u8]) -> Result<T, DeserializeError> {
    let size = core::mem::size_of::<T>();
    if bytes.len() != size {
        return Err(DeserializeError::SizeMismatch {
            expected: size,
            actual: bytes.len(),
        });
    }

    let mut value = T::new_zeroed();
    value.as_bytes_mut().copy_from_slice(bytes);
    Ok(value)
}

/// Discards `OFFSET` bytes from `source`, then reads `size_of::<T>()` bytes
/// straight into `out`.
///
/// Errors come from `source` untouched; a short read surfaces as
/// [`io::ErrorKind::UnexpectedEof`]. On error `out` may hold a partial write.
pub fn decode_from_stream<T: Pod, const OFFSET: usize>(
    source: &mut impl Read,
    out: &mut T,
) -> io::Result<()> {
    if OFFSET > 0 {
        let mut prefix = [0u8; OFFSET];
        source.read_exact(&mut prefix)?;
    }

    source.read_exact(out.as_bytes_mut())
}

/// Reinterprets `bytes` as a `T` that is `Copy` but not [`Pod`].
///
/// # Safety
/// The caller must guarantee that `bytes` hold a valid representation of
/// `T` (e.g. `0`/`1` for `bool`, a declared discriminant for an enum).
pub unsafe fn decode_raw<T: Copy>(bytes: &[u8]) -> Result<T, DeserializeError> {
    let size = core::mem::size_of::<T>();
    if bytes.len() != size {
        return Err(DeserializeError::SizeMismatch {
            expected: size,
            actual: bytes.len(),
        });
    }

    let mut value = core::mem::MaybeUninit::<T>::uninit();
    // SAFETY: lengths match and the caller vouches for the content.
    unsafe {
        core::ptr::copy_nonoverlapping(bytes.as_ptr(), value.as_mut_ptr() as *mut u8, size);
        Ok(value.assume_init())
    }
}
