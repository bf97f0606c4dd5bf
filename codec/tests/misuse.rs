use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use codec::{ByteCodec, MisuseDiagnostic, MisuseNotifier, NotifierPolicy, global};
use serial_test::serial;

#[derive(Default)]
struct Calls {
    warns: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
}

impl Calls {
    fn notifier(&self, policy: NotifierPolicy) -> MisuseNotifier {
        let mut notifier = MisuseNotifier::new(policy);
        let warns = Arc::clone(&self.warns);
        notifier.set_on_warn(move || {
            warns.fetch_add(1, Ordering::SeqCst);
        });
        let errors = Arc::clone(&self.errors);
        notifier.set_on_error(move || {
            errors.fetch_add(1, Ordering::SeqCst);
        });
        notifier
    }

    fn warns(&self) -> usize {
        self.warns.load(Ordering::SeqCst)
    }

    fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

#[test]
fn pointer_raises_error_not_warning_when_both_active() {
    let calls = Calls::default();
    let codec = ByteCodec::new(calls.notifier(NotifierPolicy::ALL_ACTIVE));
    let value = 1u16;

    codec.encode(&(&value as *const u16));

    assert_eq!(calls.errors(), 1);
    assert_eq!(calls.warns(), 0);
}

#[test]
fn pointer_raises_warning_when_error_inactive() {
    let calls = Calls::default();
    let codec = ByteCodec::new(calls.notifier(NotifierPolicy {
        warn_on_pointer: true,
        error_on_pointer: false,
    }));

    codec.encode(&core::ptr::null_mut::<u8>());

    assert_eq!(calls.warns(), 1);
    assert_eq!(calls.errors(), 0);
}

#[test]
fn plain_values_stay_silent_under_every_policy() {
    for (warn_on_pointer, error_on_pointer) in
        [(true, true), (true, false), (false, true), (false, false)]
    {
        let calls = Calls::default();
        let codec = ByteCodec::new(calls.notifier(NotifierPolicy {
            warn_on_pointer,
            error_on_pointer,
        }));

        codec.encode(&27i32);
        codec.encode_to_buffer::<[u64; 2], 3>(&[1, 2]);
        codec.encode_to_stream::<f32, 1>(&1.5, &mut Vec::new()).unwrap();

        assert_eq!(calls.warns(), 0);
        assert_eq!(calls.errors(), 0);
    }
}

#[test]
fn active_flags_without_handlers_do_not_crash() {
    let codec = ByteCodec::default();
    let ptr = core::ptr::null::<u64>();

    let bytes = codec.encode(&ptr);

    assert_eq!(bytes.len(), core::mem::size_of::<*const u64>());
    assert_eq!(
        codec.notifier().resolve::<*const u64>(),
        Some(MisuseDiagnostic::Error)
    );
}

#[test]
fn toggling_flags_at_runtime_changes_dispatch() {
    let calls = Calls::default();
    let mut codec = ByteCodec::new(calls.notifier(NotifierPolicy::ALL_ACTIVE));
    let ptr = core::ptr::null::<u8>();

    codec.encode(&ptr);
    codec.notifier_mut().set_error_active(false);
    codec.encode(&ptr);
    codec.notifier_mut().set_warn_active(false);
    codec.encode(&ptr);

    assert_eq!(calls.errors(), 1);
    assert_eq!(calls.warns(), 1);
}

#[test]
fn arrays_of_pointers_are_flagged() {
    let calls = Calls::default();
    let codec = ByteCodec::new(calls.notifier(NotifierPolicy::ALL_ACTIVE));

    codec.encode(&[core::ptr::null::<u8>(); 4]);

    assert_eq!(calls.errors(), 1);
}

#[test]
#[serial]
fn global_codec_dispatches_registered_handlers() {
    global::reset();
    let calls = Calls::default();

    let errors = Arc::clone(&calls.errors);
    global::set_on_error(move || {
        errors.fetch_add(1, Ordering::SeqCst);
    });
    let warns = Arc::clone(&calls.warns);
    global::set_on_warn(move || {
        warns.fetch_add(1, Ordering::SeqCst);
    });

    let ptr = core::ptr::null::<u32>();
    global::serialize::<_, 0>(&ptr);
    assert_eq!(calls.errors(), 1);
    assert_eq!(calls.warns(), 0);

    global::set_policy(NotifierPolicy {
        warn_on_pointer: true,
        error_on_pointer: false,
    });
    global::serialize_to::<_, 2>(&ptr, &mut Vec::new()).unwrap();
    assert_eq!(calls.errors(), 1);
    assert_eq!(calls.warns(), 1);

    global::reset();
    assert_eq!(global::policy(), NotifierPolicy::ALL_ACTIVE);
}

#[test]
#[serial]
fn global_handler_may_reconfigure_the_codec() {
    global::reset();
    global::set_on_error(|| {
        global::set_policy(NotifierPolicy::SILENT);
    });

    global::serialize::<_, 0>(&core::ptr::null::<u8>());

    assert_eq!(global::policy(), NotifierPolicy::SILENT);
    global::reset();
}

#[test]
#[serial]
fn global_roundtrip_of_27() {
    global::reset();

    let bytes = global::serialize::<i32, 0>(&27);
    assert_eq!(global::deserialize(&bytes), 27);

    let mut stream = std::io::Cursor::new(Vec::new());
    global::serialize_to::<i32, 4>(&27, &mut stream).unwrap();
    stream.set_position(0);
    let mut out = 0i32;
    global::deserialize_from::<i32, 4>(&mut stream, &mut out).unwrap();
    assert_eq!(out, 27);
}

#[test]
#[serial]
fn every_public_encode_path_raises_the_diagnostic() {
    let calls = Calls::default();
    let codec = ByteCodec::new(calls.notifier(NotifierPolicy::ALL_ACTIVE));
    let ptr = core::ptr::null::<u64>();

    codec.encode(&ptr);
    codec.encode_to_buffer::<_, 3>(&ptr);
    let _ = codec.encode_to_array::<_, 8>(&ptr);
    codec.encode_to_stream::<_, 1>(&ptr, &mut Vec::new()).unwrap();
    codec.encode_into_vec(&ptr, &mut Vec::new());
    assert_eq!(calls.errors(), 5);

    global::reset();
    let errors = Arc::clone(&calls.errors);
    global::set_on_error(move || {
        errors.fetch_add(1, Ordering::SeqCst);
    });
    global::serialize::<_, 0>(&ptr);
    global::serialize_to::<_, 2>(&ptr, &mut Vec::new()).unwrap();
    assert_eq!(calls.errors(), 7);
    assert_eq!(calls.warns(), 0);
    global::reset();
}

/// Calls back into the global codec when the handler holding it is dropped.
struct ReentrantOnDrop(Arc<AtomicUsize>);

impl ReentrantOnDrop {
    fn drops(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Drop for ReentrantOnDrop {
    fn drop(&mut self) {
        let _ = global::policy();
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
#[serial]
fn replaced_global_handlers_drop_outside_the_lock() {
    global::reset();
    let drops = Arc::new(AtomicUsize::new(0));

    let guard = ReentrantOnDrop(Arc::clone(&drops));
    global::set_on_warn(move || {
        let _ = guard.drops();
    });
    global::set_on_warn(|| {});
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    let guard = ReentrantOnDrop(Arc::clone(&drops));
    global::set_on_error(move || {
        let _ = guard.drops();
    });
    global::set_on_error(|| {});
    assert_eq!(drops.load(Ordering::SeqCst), 2);

    let guard = ReentrantOnDrop(Arc::clone(&drops));
    global::set_on_error(move || {
        let _ = guard.drops();
    });
    global::reset();
    assert_eq!(drops.load(Ordering::SeqCst), 3);
}
