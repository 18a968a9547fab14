use core::alloc::Layout;
use core::ptr::NonNull;

use alloc_crate::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

use crate::error::StorageError;

#[cfg(not(test))]
pub use alloc_crate::alloc::handle_alloc_error;

#[cfg(test)]
/// Custom allocation error handler.
pub fn handle_alloc_error(layout: Layout) -> ! {
    panic!("memory allocation of {} bytes failed", layout.size());
}

/// Allocate an uninitialized block for `layout` from the global allocator.
///
/// Zero-sized layouts produce a dangling, well-aligned pointer without
/// touching the allocator.
#[inline]
pub(crate) fn try_allocate<T>(layout: Layout) -> Result<NonNull<T>, StorageError> {
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: the layout has a non-zero size
    let Some(ptr) = NonNull::new(unsafe { raw_alloc(layout) }) else {
        return Err(StorageError::AllocError(layout));
    };
    Ok(ptr.cast())
}

/// Release a block produced by `try_allocate`.
///
/// # Safety
/// `ptr` must have been returned by `try_allocate` with the same `layout`,
/// and must not be used afterwards.
#[inline]
pub(crate) unsafe fn release<T>(ptr: NonNull<T>, layout: Layout) {
    if layout.size() > 0 {
        raw_dealloc(ptr.as_ptr().cast(), layout);
    }
}
