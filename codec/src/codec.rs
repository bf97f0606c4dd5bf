//! Byte codec that runs the pointer misuse check before every encode.

use std::io::{self, Read, Write};

use crate::buffer::ByteBuffer;
use crate::de::{self, DeserializeError};
use crate::notifier::{MisuseNotifier, NotifierPolicy};
use crate::pod::Pod;
use crate::ser;

/// Converts `Pod` values to and from their native byte representation.
///
/// Encoded form: `OFFSET` zero bytes followed by `size_of::<T>()` bytes of
/// the value, in host byte order. Nothing is normalized, so bytes are only
/// portable between hosts with the same layout and endianness.
#[derive(Clone, Debug, Default)]
pub struct ByteCodec {
    notifier: MisuseNotifier,
}

impl ByteCodec {
    #[must_use]
    pub const fn new(notifier: MisuseNotifier) -> Self {
        Self { notifier }
    }

    #[must_use]
    pub const fn with_policy(policy: NotifierPolicy) -> Self {
        Self::new(MisuseNotifier::new(policy))
    }

    #[must_use]
    pub const fn notifier(&self) -> &MisuseNotifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut MisuseNotifier {
        &mut self.notifier
    }

    /// Encodes `value` with no prefix.
    pub fn encode<T: Pod>(&self, value: &T) -> ByteBuffer<T> {
        self.encode_to_buffer::<T, 0>(value)
    }

    /// Encodes `value` after `OFFSET` zero bytes.
    pub fn encode_to_buffer<T: Pod, const OFFSET: usize>(
        &self,
        value: &T,
    ) -> ByteBuffer<T, OFFSET> {
        self.notifier.check::<T>();
        ser::encode_to_buffer::<T, OFFSET>(value)
    }

    /// Encodes `value` into a stack array of `N` bytes, the value at the end.
    pub fn encode_to_array<T: Pod, const N: usize>(&self, value: &T) -> [u8; N] {
        self.notifier.check::<T>();
        ser::encode_to_array::<T, N>(value)
    }

    /// Writes `OFFSET` zero bytes and then `value` to `sink`.
    pub fn encode_to_stream<T: Pod, const OFFSET: usize>(
        &self,
        value: &T,
        sink: &mut impl Write,
    ) -> io::Result<()> {
        self.notifier.check::<T>();
        ser::encode_to_stream::<T, OFFSET>(value, sink)
    }

    /// Appends the bytes of `value` to `dst`, with no prefix.
    pub fn encode_into_vec<T: Pod>(&self, value: &T, dst: &mut Vec<u8>) {
        self.notifier.check::<T>();
        ser::encode_into_vec(value, dst);
    }

    /// Rebuilds the value in `buffer`, skipping its `OFFSET` prefix.
    pub fn decode_from_buffer<T: Pod, const OFFSET: usize>(
        &self,
        buffer: &ByteBuffer<T, OFFSET>,
    ) -> T {
        de::decode_from_buffer(buffer)
    }

    /// Rebuilds a value from exactly `size_of::<T>()` bytes.
    pub fn decode_from_slice<T: Pod>(&self, bytes: &[u8]) -> Result<T, DeserializeError> {
        de::decode_from_slice(bytes)
    }

    /// Skips `OFFSET` bytes of `source`, then overwrites `out` with the next
    /// `size_of::<T>()` bytes.
    pub fn decode_from_stream<T: Pod, const OFFSET: usize>(
        &self,
        source: &mut impl Read,
        out: &mut T,
    ) -> io::Result<()> {
        de::decode_from_stream::<T, OFFSET>(source, out)
    }
}
