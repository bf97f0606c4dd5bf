//! One value through the buffer form and the stream form of the codec.

use std::io::Cursor;

use codec::{ByteCodec, MisuseNotifier, NotifierPolicy};

use crate::error::{Result, SmokeError};

/// Zero bytes written in front of the value in the stream round trip.
pub const STREAM_PREFIX: usize = 4;

/// Builds a codec whose pointer diagnostics go to the log.
pub fn build_codec(policy: NotifierPolicy) -> ByteCodec {
    let mut notifier = MisuseNotifier::new(policy);
    notifier.set_on_warn(|| {
        log::warn!("Serializing a raw pointer: only the address is stored");
    });
    notifier.set_on_error(|| {
        log::error!("Serialized a raw pointer: the bytes are not portable");
    });
    ByteCodec::new(notifier)
}

pub fn buffer_roundtrip(codec: &ByteCodec, value: i32) -> Result<i32> {
    let bytes = codec.encode(&value);
    log::debug!("Encoded {} into {:02X?}", value, bytes.as_bytes());

    let decoded: i32 = codec.decode_from_buffer(&bytes);
    check("buffer", value, decoded)
}

pub fn stream_roundtrip(codec: &ByteCodec, value: i32) -> Result<i32> {
    let mut stream = Cursor::new(Vec::new());
    codec.encode_to_stream::<i32, STREAM_PREFIX>(&value, &mut stream)?;
    log::debug!("Wrote {} bytes to the stream", stream.get_ref().len());

    stream.set_position(0);
    let mut decoded = 0i32;
    codec.decode_from_stream::<i32, STREAM_PREFIX>(&mut stream, &mut decoded)?;
    check("stream", value, decoded)
}

fn check(form: &'static str, expected: i32, actual: i32) -> Result<i32> {
    if expected != actual {
        return Err(SmokeError::Mismatch {
            form,
            expected,
            actual,
        });
    }
    Ok(actual)
}
