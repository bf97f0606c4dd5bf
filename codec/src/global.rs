//! Process-wide default codec.
//!
//! Mirrors a static serializer API for callers that do not want to thread a
//! [`ByteCodec`] through their code. Handlers are cloned out of the lock
//! before they run, and replaced handlers are dropped after it is released,
//! so neither a handler nor a captured value's `Drop` runs under the lock.

use std::io::{self, Read, Write};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::buffer::ByteBuffer;
use crate::codec::ByteCodec;
use crate::de;
use crate::notifier::{MisuseNotifier, NotifierPolicy};
use crate::pod::Pod;

static DEFAULT_CODEC: RwLock<ByteCodec> =
    RwLock::new(ByteCodec::with_policy(NotifierPolicy::ALL_ACTIVE));

fn read() -> RwLockReadGuard<'static, ByteCodec> {
    DEFAULT_CODEC.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, ByteCodec> {
    DEFAULT_CODEC.write().unwrap_or_else(PoisonError::into_inner)
}

fn snapshot() -> ByteCodec {
    read().clone()
}

pub fn set_on_warn<F>(action: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = write().notifier_mut().set_on_warn(action);
    drop(previous);
}

pub fn set_on_error<F>(action: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = write().notifier_mut().set_on_error(action);
    drop(previous);
}

pub fn policy() -> NotifierPolicy {
    read().notifier().policy()
}

pub fn set_policy(policy: NotifierPolicy) {
    write().notifier_mut().set_policy(policy);
}

/// Restores both flags to active and drops the registered handlers.
pub fn reset() {
    let fresh = ByteCodec::new(MisuseNotifier::new(NotifierPolicy::ALL_ACTIVE));
    let previous = std::mem::replace(&mut *write(), fresh);
    drop(previous);
}

pub fn serialize<T: Pod, const OFFSET: usize>(value: &T) -> ByteBuffer<T, OFFSET> {
    snapshot().encode_to_buffer::<T, OFFSET>(value)
}

pub fn serialize_to<T: Pod, const OFFSET: usize>(
    value: &T,
    sink: &mut impl Write,
) -> io::Result<()> {
    snapshot().encode_to_stream::<T, OFFSET>(value, sink)
}

pub fn deserialize<T: Pod, const OFFSET: usize>(buffer: &ByteBuffer<T, OFFSET>) -> T {
    de::decode_from_buffer(buffer)
}

pub fn deserialize_from<T: Pod, const OFFSET: usize>(
    source: &mut impl Read,
    out: &mut T,
) -> io::Result<()> {
    de::decode_from_stream::<T, OFFSET>(source, out)
}
