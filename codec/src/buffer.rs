//! Fixed-length byte buffers holding one encoded value.

use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;

use crate::de::DeserializeError;
use crate::pod::Pod;

/// The encoded form of a `T`: `OFFSET` leading zero bytes, then the
/// native representation of the value.
///
/// The length is always [`ByteBuffer::LEN`]; every constructor checks it.
pub struct ByteBuffer<T, const OFFSET: usize = 0> {
    bytes: Box<[u8]>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Pod, const OFFSET: usize> ByteBuffer<T, OFFSET> {
    /// Total encoded length, `size_of::<T>() + OFFSET`.
    pub const LEN: usize = size_of::<T>() + OFFSET;

    pub(crate) fn zeroed() -> Self {
        Self {
            bytes: vec![0u8; Self::LEN].into_boxed_slice(),
            _marker: PhantomData,
        }
    }

    /// Copies `bytes` into a new buffer, rejecting any length other than
    /// [`Self::LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeserializeError> {
        if bytes.len() != Self::LEN {
            return Err(DeserializeError::SizeMismatch {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            bytes: bytes.into(),
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The reserved prefix. Zero-filled by every encoder in this crate.
    #[inline]
    pub fn padding(&self) -> &[u8] {
        &self.bytes[..OFFSET]
    }

    /// The bytes of the value itself.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[OFFSET..]
    }

    pub(crate) fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[OFFSET..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }

    /// Moves the bytes into a stack array. `N` must equal [`Self::LEN`].
    pub fn into_array<const N: usize>(self) -> [u8; N] {
        const { assert!(N == Self::LEN, "array length must match the encoded length") };

        let mut array = [0u8; N];
        array.copy_from_slice(&self.bytes);
        array
    }
}

impl<T: Pod, const OFFSET: usize> TryFrom<&[u8]> for ByteBuffer<T, OFFSET> {
    type Error = DeserializeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl<T, const OFFSET: usize> AsRef<[u8]> for ByteBuffer<T, OFFSET> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<T, const OFFSET: usize> Clone for ByteBuffer<T, OFFSET> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, const OFFSET: usize> PartialEq for ByteBuffer<T, OFFSET> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<T, const OFFSET: usize> Eq for ByteBuffer<T, OFFSET> {}

impl<T, const OFFSET: usize> fmt::Debug for ByteBuffer<T, OFFSET> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("type", &core::any::type_name::<T>())
            .field("offset", &OFFSET)
            .field("bytes", &self.bytes)
            .finish()
    }
}
