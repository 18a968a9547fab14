//! Raw, uninitialized element storage.

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};
use core::slice;

use const_default::ConstDefault;

use crate::error::StorageError;

use self::utils::array_layout;

pub(crate) mod alloc;

pub(crate) mod utils;

pub use self::alloc::handle_alloc_error;

/// An owned allocation of `capacity` uninitialized slots of `T`.
///
/// The buffer only manages memory. It never reads, writes or drops the
/// values held in its slots; tracking which slots are live is the
/// responsibility of the owner.
pub struct RawBuffer<T> {
    data: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// A buffer with no capacity and no allocation.
    #[inline]
    pub const fn dangling() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a buffer of exactly `capacity` slots.
    pub fn try_allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::dangling());
        }
        let layout = array_layout::<T>(capacity)?;
        let data = alloc::try_allocate(layout)?;
        trace_buffer!("allocated {} slots ({} bytes)", capacity, layout.size());
        Ok(Self {
            data,
            capacity,
            _marker: PhantomData,
        })
    }

    /// The number of slots in this buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A pointer to the first slot.
    #[inline]
    pub fn data_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// A mutable pointer to the first slot.
    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Access every slot of the buffer as possibly-uninitialized memory.
    #[inline]
    pub fn as_uninit_slice(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr().cast(), self.capacity) }
    }

    /// # Safety
    /// The index must be less than the capacity of the buffer, otherwise a
    /// memory access error may occur.
    #[inline]
    pub unsafe fn slot(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity);
        &mut *self.data.as_ptr().add(index).cast()
    }

    /// Move the first `length` values into a new allocation of exactly
    /// `capacity` slots and release the previous allocation. If the new
    /// allocation fails the buffer is left untouched.
    ///
    /// # Safety
    /// `length` must not exceed either capacity, and the first `length` slots
    /// must hold initialized values.
    pub unsafe fn try_relocate(
        &mut self,
        capacity: usize,
        length: usize,
    ) -> Result<(), StorageError> {
        debug_assert!(length <= self.capacity && length <= capacity);
        if capacity == self.capacity {
            return Ok(());
        }
        let mut target = Self::try_allocate(capacity)?;
        if length > 0 {
            ptr::copy_nonoverlapping(self.data.as_ptr(), target.data.as_ptr(), length);
        }
        trace_buffer!(
            "relocated {} values: capacity {} -> {}",
            length,
            self.capacity,
            capacity
        );
        // the previous allocation is released when `target` drops
        mem::swap(self, &mut target);
        Ok(())
    }
}

impl<T> ConstDefault for RawBuffer<T> {
    const DEFAULT: Self = Self::dangling();
}

impl<T> Default for RawBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::dangling()
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(layout) = array_layout::<T>(self.capacity) {
            unsafe { alloc::release(self.data, layout) };
            trace_buffer!("released {} slots", self.capacity);
        }
    }
}

// The buffer owns its slots like a `Box<[MaybeUninit<T>]>` would.
unsafe impl<T: Send> Send for RawBuffer<T> {}

unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[cfg(test)]
mod tests {
    use super::RawBuffer;
    use crate::error::StorageError;

    #[test]
    fn dangling_has_no_capacity() {
        let mut buf = RawBuffer::<u32>::dangling();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_uninit_slice().is_empty());
    }

    #[test]
    fn allocate_zero_is_dangling() {
        let buf = RawBuffer::<u32>::try_allocate(0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn relocate_preserves_values() {
        let mut buf = RawBuffer::<u64>::try_allocate(3).unwrap();
        for (idx, slot) in buf.as_uninit_slice().iter_mut().enumerate() {
            slot.write(idx as u64 * 10);
        }
        unsafe { buf.try_relocate(8, 3) }.unwrap();
        assert_eq!(buf.capacity(), 8);
        let values: std::vec::Vec<u64> = (0..3)
            .map(|idx| unsafe { buf.slot(idx).assume_init_read() })
            .collect();
        assert_eq!(values, [0, 10, 20]);
    }

    #[test]
    fn relocate_failure_keeps_buffer() {
        let mut buf = RawBuffer::<u64>::try_allocate(2).unwrap();
        buf.as_uninit_slice()[0].write(7);
        let res = unsafe { buf.try_relocate(usize::MAX, 1) };
        assert!(matches!(res, Err(StorageError::LayoutError(_))));
        assert_eq!(buf.capacity(), 2);
        assert_eq!(unsafe { buf.slot(0).assume_init_read() }, 7);
    }

    #[test]
    fn zero_sized_slots() {
        struct Zst;
        let mut buf = RawBuffer::<Zst>::try_allocate(1000).unwrap();
        assert_eq!(buf.capacity(), 1000);
        unsafe { buf.try_relocate(2000, 0) }.unwrap();
        assert_eq!(buf.capacity(), 2000);
    }
}
