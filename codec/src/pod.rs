//! Marker for types that can be copied to and from raw bytes.

use core::mem::size_of;

/// A marker trait for plain old data (POD).
///
/// A `T: Pod` can be converted to and from exactly `size_of::<T>()` bytes.
/// Integers and floats qualify, as do raw pointers and arrays of POD.
/// `bool` and `char` do not, since only some bit patterns are valid for them.
///
/// User structs opt in with `unsafe impl Pod for Header {}` once they are
/// `#[repr(C)]` (or `#[repr(C, packed)]`) and made only of POD fields.
///
/// # Safety
///
/// Implementors guarantee that every bit pattern of `size_of::<Self>()`
/// bytes is a valid `Self` and that the type has no padding bytes.
pub unsafe trait Pod: Copy + Sized {
    /// Whether the value is (or consists of) raw pointer bits.
    ///
    /// Serializing such a value stores an address, not the data behind it.
    const IS_POINTER: bool = false;

    /// Creates a new instance filled with zeroes.
    fn new_zeroed() -> Self {
        // SAFETY: an all-zero value of `T: Pod` is always valid.
        unsafe { core::mem::zeroed() }
    }

    /// As a slice of bytes, in native byte order.
    fn as_bytes(&self) -> &[u8] {
        let ptr = self as *const Self as *const u8;
        // SAFETY: `Self` has no padding, so all bytes are initialized.
        unsafe { core::slice::from_raw_parts(ptr, size_of::<Self>()) }
    }

    /// As a mutable slice of bytes.
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        let ptr = self as *mut Self as *mut u8;
        // SAFETY: any byte written leaves a valid `Self` behind.
        unsafe { core::slice::from_raw_parts_mut(ptr, size_of::<Self>()) }
    }
}

macro_rules! impl_pod_for {
    ($($pod_ty:ty),*) => {
        $(unsafe impl Pod for $pod_ty {})*
    };
}

impl_pod_for!(u8, u16, u32, u64, u128, usize);
impl_pod_for!(i8, i16, i32, i64, i128, isize);
impl_pod_for!(f32, f64, ());

unsafe impl<T: Pod, const N: usize> Pod for [T; N] {
    const IS_POINTER: bool = T::IS_POINTER;
}

unsafe impl<T> Pod for *const T {
    const IS_POINTER: bool = true;
}

unsafe impl<T> Pod for *mut T {
    const IS_POINTER: bool = true;
}
