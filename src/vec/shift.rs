//! Directional relocation of a run of live values within one buffer.
//!
//! Both shifts move values bitwise, never cloning them. The source and
//! destination ranges overlap, so the copy must never read a slot after it
//! has been written: `ptr::copy` has memmove semantics and walks the run
//! back-to-front for [`shift_right`] and front-to-back for [`shift_left`].

use core::ptr;

/// Move the `count` values starting at `base + from` one slot higher,
/// opening a gap at `from`.
///
/// # Safety
/// `base + from + count` must be less than the capacity of the buffer and
/// the source run must be initialized. The slot at `from` is logically
/// uninitialized afterwards.
#[inline]
pub(crate) unsafe fn shift_right<T>(base: *mut T, from: usize, count: usize) {
    if count > 0 {
        let src = base.add(from);
        ptr::copy(src, src.add(1), count);
    }
}

/// Move the `count` values starting at `base + gap + 1` one slot lower,
/// closing the gap at `gap`.
///
/// # Safety
/// `base + gap + count` must be within the buffer, the source run must be
/// initialized, and the slot at `gap` must not hold a live value. The slot
/// at `gap + count` is logically uninitialized afterwards.
#[inline]
pub(crate) unsafe fn shift_left<T>(base: *mut T, gap: usize, count: usize) {
    if count > 0 {
        let dst = base.add(gap);
        ptr::copy(dst.add(1), dst, count);
    }
}

#[cfg(test)]
mod tests {
    use super::{shift_left, shift_right};

    #[test]
    fn right_opens_gap() {
        let mut data = [1u32, 2, 3, 4, 0];
        unsafe { shift_right(data.as_mut_ptr(), 1, 3) };
        assert_eq!(data, [1, 2, 2, 3, 4]);
    }

    #[test]
    fn left_closes_gap() {
        let mut data = [1u32, 2, 3, 4, 5];
        unsafe { shift_left(data.as_mut_ptr(), 1, 3) };
        assert_eq!(data, [1, 3, 4, 5, 5]);
    }

    #[test]
    fn empty_run_is_noop() {
        let mut data = [9u32, 8];
        unsafe {
            shift_right(data.as_mut_ptr(), 1, 0);
            shift_left(data.as_mut_ptr(), 1, 0);
        }
        assert_eq!(data, [9, 8]);
    }
}
