use core::mem::MaybeUninit;
use core::ptr;

use crate::storage::RawBuffer;

/// Writes values into the spare capacity of a buffer. Values written before
/// a panic are dropped again, so a partially constructed run never leaks
/// and never becomes visible to the owning vector.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    #[inline]
    pub fn for_spare(buf: &'a mut RawBuffer<T>, length: usize) -> Self {
        let buf = buf.as_uninit_slice();
        debug_assert!(length <= buf.len());
        Self {
            buf,
            start: length,
            end: length,
        }
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[T])
    where
        T: Clone,
    {
        for item in data {
            self.push_clone(item);
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.buf[self.end].write(val.clone());
        self.end += 1;
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.end == self.buf.len()
    }

    /// Hand the written values over to the caller, returning the new length
    /// of the buffer.
    #[inline]
    pub fn complete(mut self) -> usize {
        self.start = self.end;
        self.end
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    use super::Inserter;
    use crate::storage::RawBuffer;

    #[test]
    fn complete_reports_length() {
        let mut buf = RawBuffer::<u8>::try_allocate(4).unwrap();
        let mut ins = Inserter::for_spare(&mut buf, 1);
        ins.extend_from_slice(&[5, 6]);
        assert!(!ins.full());
        ins.push(7);
        assert!(ins.full());
        assert_eq!(ins.complete(), 4);
    }

    #[test]
    fn abandoned_values_are_dropped() {
        let tracker = Rc::new(());
        let mut buf = RawBuffer::<Rc<()>>::try_allocate(4).unwrap();
        let res = catch_unwind(AssertUnwindSafe(|| {
            let mut ins = Inserter::for_spare(&mut buf, 0);
            ins.push_clone(&tracker);
            ins.push_clone(&tracker);
            assert_eq!(Rc::strong_count(&tracker), 3);
            panic!("abandon");
        }));
        assert!(res.is_err());
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
