//! Fixed-size byte (de)serialization for plain old data.
//!
//! A value of a [`Pod`] type is turned into `size_of::<T>() + OFFSET` bytes
//! (the first `OFFSET` zeroed) and back, either through an owned
//! [`ByteBuffer`] or through any `std::io` reader/writer. Encoding a raw
//! pointer raises a diagnostic through [`MisuseNotifier`].
//!
//! Encoding is only reachable through [`ByteCodec`] and [`global`], both of
//! which run the pointer check first; the raw copy routines stay private.
//!
//! ```compile_fail
//! let _ = codec::ser::encode_to_buffer::<*const u8, 0>(&core::ptr::null());
//! ```

pub mod buffer;
pub mod codec;
mod de;
pub mod global;
pub mod notifier;
pub mod pod;
mod ser;

pub use buffer::ByteBuffer;
pub use codec::ByteCodec;
pub use de::{DeserializeError, decode_raw};
pub use notifier::{Handler, MisuseDiagnostic, MisuseNotifier, NotifierPolicy};
pub use pod::Pod;

/// Returns the codec crate version string.
pub fn codec_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
