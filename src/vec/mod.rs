//! The growable vector type and its owning iterator.

use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::repeat;
use core::mem;
use core::ops::{
    Deref, DerefMut, Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo,
    RangeToInclusive,
};
use core::ptr;
use core::slice;

use const_default::ConstDefault;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::capacity::{next_capacity, slack_capacity, DEFAULT_CAPACITY};
use crate::error::{StorageError, UpdateError};
use crate::storage::RawBuffer;

use self::insert::Inserter;
use self::shift::{shift_left, shift_right};

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

mod cmp;
pub(crate) mod insert;
mod into_iter;
pub(crate) mod shift;

#[inline]
fn check_position(index: usize, length: usize) -> Result<(), StorageError> {
    if index > length {
        Err(StorageError::OutOfRange { index, length })
    } else {
        Ok(())
    }
}

#[inline]
fn check_element(index: usize, length: usize) -> Result<(), StorageError> {
    if index >= length {
        Err(StorageError::OutOfRange { index, length })
    } else {
        Ok(())
    }
}

/// Create a `KVec<T>` holding `count` clones of `elem`.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> KVec<T> {
    match try_from_elem(elem, count) {
        Ok(vec) => vec,
        Err(error) => error.panic(),
    }
}

/// Try to create a `KVec<T>` holding `count` clones of `elem`.
pub fn try_from_elem<T: Clone>(elem: T, count: usize) -> Result<KVec<T>, StorageError> {
    let capacity = slack_capacity(count).ok_or(StorageError::CapacityLimit)?;
    let mut vec = KVec::try_with_capacity(capacity)?;
    vec.try_extend_iter(&mut repeat(elem).take(count))?;
    Ok(vec)
}

/// Exchange the contents of two vectors without touching their elements.
#[inline]
pub fn swap<T>(left: &mut KVec<T>, right: &mut KVec<T>) {
    left.swap_with(right);
}

/// A growable, contiguous vector.
///
/// Slots `[0, len)` of the buffer hold live values while the remaining
/// capacity is uninitialized. Appends which find the buffer full relocate
/// it to `len + len / 2 + 1` slots.
pub struct KVec<T> {
    buffer: RawBuffer<T>,
    length: usize,
}

impl<T> KVec<T> {
    /// Constructs a new vector with room for
    /// [`DEFAULT_CAPACITY`](crate::capacity::DEFAULT_CAPACITY) elements.
    ///
    /// # Examples
    ///
    /// ```
    /// let vec = kvec::KVec::<i32>::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 20);
    /// ```
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(vec) => vec,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a new vector with room for
    /// [`DEFAULT_CAPACITY`](crate::capacity::DEFAULT_CAPACITY) elements.
    pub fn try_new() -> Result<Self, StorageError> {
        Self::try_with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a vector which owns no allocation.
    ///
    /// This is the state left behind by [`take`](Self::take).
    #[inline]
    pub const fn empty() -> Self {
        Self {
            buffer: RawBuffer::DEFAULT,
            length: 0,
        }
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(vec) => vec,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an empty vector with exactly `capacity` slots.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            buffer: RawBuffer::try_allocate(capacity)?,
            length: 0,
        })
    }

    /// Constructs a vector of `length` default values, with spare capacity
    /// for `length / 2 + 1` more.
    ///
    /// ```
    /// let vec = kvec::KVec::<u8>::with_len(4);
    /// assert_eq!(vec, [0, 0, 0, 0]);
    /// assert_eq!(vec.capacity(), 7);
    /// ```
    pub fn with_len(length: usize) -> Self
    where
        T: Default,
    {
        match Self::try_with_len(length) {
            Ok(vec) => vec,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a vector of `length` default values.
    pub fn try_with_len(length: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        let capacity = slack_capacity(length).ok_or(StorageError::CapacityLimit)?;
        let mut vec = Self::try_with_capacity(capacity)?;
        let mut insert = Inserter::for_spare(&mut vec.buffer, 0);
        for _ in 0..length {
            insert.push(T::default());
        }
        vec.length = insert.complete();
        Ok(vec)
    }

    /// Constructs a vector from an exactly sized sequence, moving each item
    /// into place. The capacity leaves room for `n / 2 + 1` more items.
    pub fn from_list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        match Self::try_from_list(items) {
            Ok(vec) => vec,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a vector from an exactly sized sequence.
    pub fn try_from_list<I>(items: I) -> Result<Self, StorageError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = items.into_iter();
        let capacity = slack_capacity(iter.len()).ok_or(StorageError::CapacityLimit)?;
        let mut vec = Self::try_with_capacity(capacity)?;
        vec.try_extend_iter(&mut iter)?;
        Ok(vec)
    }

    /// Constructs a vector holding clones of the values in a slice.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice(data) {
            Ok(vec) => vec,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct a vector holding clones of the values in a slice.
    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let capacity = slack_capacity(data.len()).ok_or(StorageError::CapacityLimit)?;
        let mut vec = Self::try_with_capacity(capacity)?;
        let mut insert = Inserter::for_spare(&mut vec.buffer, 0);
        insert.extend_from_slice(data);
        vec.length = insert.complete();
        Ok(vec)
    }
}

impl<T> KVec<T> {
    /// A raw pointer to the first slot of the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.data_ptr()
    }

    /// A mutable raw pointer to the first slot of the buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.data_ptr_mut()
    }

    /// Borrow the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.data_ptr(), self.length) }
    }

    /// Mutably borrow the live elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buffer.data_ptr_mut(), self.length) }
    }

    /// The number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Drop every element. The capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop the elements beyond the first `length`.
    pub fn truncate(&mut self, length: usize) {
        let old_len = self.length;
        let new_len = length.min(old_len);
        let remove = old_len - new_len;
        if remove > 0 {
            // the length is updated first so a panicking drop cannot cause a
            // second drop of the same values
            self.length = new_len;
            unsafe {
                let to_drop: &mut [T] =
                    slice::from_raw_parts_mut(self.buffer.data_ptr_mut().add(new_len), remove);
                ptr::drop_in_place(to_drop);
            }
        }
    }

    /// A reference to the first element, or `None` if the vector is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// A mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// A reference to the last element, or `None` if the vector is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// A mutable reference to the last element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Grow the buffer to exactly `new_capacity` slots, relocating the
    /// elements in order. Requests which do not exceed the current capacity
    /// leave the vector unchanged.
    ///
    /// Note that unlike `alloc::vec::Vec::reserve`, the argument is the total
    /// capacity rather than a number of additional elements.
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) {
        match self.try_reserve(new_capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to grow the buffer to exactly `new_capacity` slots. On failure the
    /// vector keeps its previous buffer and contents.
    #[inline]
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), StorageError> {
        if new_capacity <= self.buffer.capacity() {
            return Ok(());
        }
        self.relocate(new_capacity)
    }

    fn try_reserve_additional(&mut self, additional: usize) -> Result<(), StorageError> {
        let Some(needed) = self.length.checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        if needed <= self.buffer.capacity() {
            return Ok(());
        }
        let Some(capacity) = next_capacity(self.length, needed) else {
            return Err(StorageError::CapacityLimit);
        };
        self.relocate(capacity)
    }

    #[inline]
    fn relocate(&mut self, capacity: usize) -> Result<(), StorageError> {
        // SAFETY: callers only request capacities above the current length,
        // and the first `length` slots are live
        unsafe { self.buffer.try_relocate(capacity, self.length) }
    }

    /// Append a value, growing the buffer if it is full. Returns a reference
    /// to the new last element.
    ///
    /// ```
    /// let mut vec = kvec::KVec::new();
    /// *vec.push(1) += 1;
    /// assert_eq!(vec, [2]);
    /// ```
    pub fn push(&mut self, value: T) -> &mut T {
        match self.try_push(value) {
            Ok(slot) => slot,
            Err(error) => error.panic(),
        }
    }

    /// Try to append a value. If the buffer cannot grow, the value is
    /// returned inside the error.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, UpdateError<T>> {
        if let Err(error) = self.try_reserve_additional(1) {
            return Err(UpdateError::new(error, value));
        }
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Append a value built by `f` directly into the next free slot.
    ///
    /// Capacity is secured before `f` runs. If `f` panics the elements are
    /// left unchanged.
    pub fn push_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_push_with(f) {
            Ok(slot) => slot,
            Err(error) => error.panic(),
        }
    }

    /// Try to append a value built by `f`. `f` is not called if the buffer
    /// cannot grow.
    pub fn try_push_with<F>(&mut self, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        self.try_reserve_additional(1)?;
        let index = self.length;
        let slot = unsafe { self.buffer.slot(index) }.write(f());
        self.length = index + 1;
        Ok(slot)
    }

    /// # Safety
    /// The length of the vector must be less than its capacity.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        let index = self.length;
        let slot = self.buffer.slot(index).write(value);
        self.length = index + 1;
        slot
    }

    /// Remove and return the last element, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.length > 0 {
            self.length -= 1;
            Some(unsafe { self.buffer.slot(self.length).assume_init_read() })
        } else {
            None
        }
    }

    /// Insert `value` at `position`, shifting the later elements one place
    /// to the right. Returns the position of the new element.
    ///
    /// # Panics
    /// Panics if `position > len()`.
    ///
    /// ```
    /// let mut vec = kvec::kvec!['a', 'b', 'c'];
    /// assert_eq!(vec.insert_at(0, 'x'), 0);
    /// assert_eq!(vec, ['x', 'a', 'b', 'c']);
    /// ```
    pub fn insert_at(&mut self, position: usize, value: T) -> usize {
        match self.try_insert_at(position, value) {
            Ok(position) => position,
            Err(error) => error.panic(),
        }
    }

    /// Try to insert `value` at `position`. On failure the value is returned
    /// inside the error and the vector is unchanged.
    pub fn try_insert_at(&mut self, position: usize, value: T) -> Result<usize, UpdateError<T>> {
        if let Err(error) = check_position(position, self.length) {
            return Err(UpdateError::new(error, value));
        }
        if let Err(error) = self.try_reserve_additional(1) {
            return Err(UpdateError::new(error, value));
        }
        unsafe { self.insert_unchecked(position, value) };
        Ok(position)
    }

    /// Insert a value built by `f` at `position`, shifting the later
    /// elements one place to the right. Returns the position of the new
    /// element.
    ///
    /// # Panics
    /// Panics if `position > len()`.
    pub fn insert_with<F>(&mut self, position: usize, f: F) -> usize
    where
        F: FnOnce() -> T,
    {
        match self.try_insert_with(position, f) {
            Ok(position) => position,
            Err(error) => error.panic(),
        }
    }

    /// Try to insert a value built by `f` at `position`. `f` is not called
    /// if the position is invalid or the buffer cannot grow.
    pub fn try_insert_with<F>(&mut self, position: usize, f: F) -> Result<usize, StorageError>
    where
        F: FnOnce() -> T,
    {
        check_position(position, self.length)?;
        self.try_reserve_additional(1)?;
        // built before the shift so a panic in `f` leaves no gap behind
        let value = f();
        unsafe { self.insert_unchecked(position, value) };
        Ok(position)
    }

    /// # Safety
    /// `position` must not exceed the length, which must be less than the
    /// capacity.
    #[inline]
    unsafe fn insert_unchecked(&mut self, position: usize, value: T) {
        let tail = self.length - position;
        let base = self.buffer.data_ptr_mut();
        shift_right(base, position, tail);
        base.add(position).write(value);
        self.length += 1;
    }

    /// Drop the element at `position`, shifting the later elements one place
    /// to the left. Returns the position of the removed element.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    ///
    /// ```
    /// let mut vec = kvec::kvec!['a', 'b', 'c'];
    /// assert_eq!(vec.remove_at(1), 1);
    /// assert_eq!(vec, ['a', 'c']);
    /// ```
    pub fn remove_at(&mut self, position: usize) -> usize {
        match self.try_remove_at(position) {
            Ok(position) => position,
            Err(error) => error.panic(),
        }
    }

    /// Try to drop the element at `position`.
    pub fn try_remove_at(&mut self, position: usize) -> Result<usize, StorageError> {
        drop(self.try_remove(position)?);
        Ok(position)
    }

    /// Remove and return the element at `position`, shifting the later
    /// elements one place to the left.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    pub fn remove(&mut self, position: usize) -> T {
        match self.try_remove(position) {
            Ok(value) => value,
            Err(error) => error.panic(),
        }
    }

    /// Try to remove and return the element at `position`.
    pub fn try_remove(&mut self, position: usize) -> Result<T, StorageError> {
        check_element(position, self.length)?;
        let tail = self.length - position - 1;
        unsafe {
            let base = self.buffer.data_ptr_mut();
            let value = base.add(position).read();
            shift_left(base, position, tail);
            self.length -= 1;
            Ok(value)
        }
    }

    /// Take ownership of this vector's buffer and elements, leaving it
    /// [`empty`](Self::empty). No allocation takes place.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Exchange the buffers and lengths of two vectors.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the contents of `source` into this vector, leaving `source`
    /// empty. The previous contents of this vector are dropped.
    pub fn assign_move(&mut self, source: &mut Self) {
        let mut incoming = source.take();
        self.swap_with(&mut incoming);
    }

    /// Replace the contents of this vector with the items of an exactly
    /// sized sequence.
    ///
    /// The replacement is built in full before it is swapped in, so the
    /// vector is untouched if construction fails.
    pub fn assign<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        match self.try_assign(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to replace the contents of this vector with the items of an
    /// exactly sized sequence.
    pub fn try_assign<I>(&mut self, items: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut replacement = Self::try_from_list(items)?;
        self.swap_with(&mut replacement);
        Ok(())
    }

    /// Try to produce an independent copy of this vector, with the same
    /// capacity.
    pub fn try_clone(&self) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut inst = Self::try_with_capacity(self.buffer.capacity())?;
        let mut insert = Inserter::for_spare(&mut inst.buffer, 0);
        insert.extend_from_slice(self.as_slice());
        inst.length = insert.complete();
        Ok(inst)
    }

    /// Try to replace the contents of this vector with a copy of `source`.
    /// The vector is untouched if the copy fails.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), StorageError>
    where
        T: Clone,
    {
        let mut replacement = source.try_clone()?;
        self.swap_with(&mut replacement);
        Ok(())
    }

    /// Append clones of the values in a slice.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to append clones of the values in a slice. The vector is
    /// unchanged if the buffer cannot grow.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_reserve_additional(items.len())?;
        let mut insert = Inserter::for_spare(&mut self.buffer, self.length);
        insert.extend_from_slice(items);
        self.length = insert.complete();
        Ok(())
    }

    fn try_extend_iter(&mut self, iter: &mut impl Iterator<Item = T>) -> Result<(), UpdateError<T>> {
        loop {
            let mut insert = Inserter::for_spare(&mut self.buffer, self.length);
            let mut full;
            loop {
                full = insert.full();
                if full {
                    break;
                }
                let Some(item) = iter.next() else { break };
                insert.push(item);
            }
            self.length = insert.complete();
            if !full {
                // ran out of items to insert
                break;
            }
            let Some(item) = iter.next() else { break };
            let additional = iter.size_hint().0.saturating_add(1);
            if let Err(error) = self.try_reserve_additional(additional) {
                return Err(UpdateError::new(error, item));
            }
            unsafe { self.push_unchecked(item) };
        }
        Ok(())
    }
}

impl<T> AsRef<[T]> for KVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for KVec<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for KVec<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for KVec<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for KVec<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(inst) => inst,
            Err(error) => error.panic(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match self.try_clone_from(source) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for KVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T> ConstDefault for KVec<T> {
    const DEFAULT: Self = Self::empty();
}

impl<T> Default for KVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for KVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for KVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Drop for KVec<T> {
    fn drop(&mut self) {
        // the buffer releases its allocation once the elements are gone
        self.clear();
    }
}

impl<T> Extend<T> for KVec<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        match self.try_extend_iter(&mut iter.into_iter()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for KVec<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        match self.try_extend_iter(&mut iter.into_iter().cloned()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<T> FromIterator<T> for KVec<T> {
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let mut iter = iter.into_iter();
        let (min_len, _) = iter.size_hint();
        let capacity = match slack_capacity(min_len) {
            Some(capacity) => capacity,
            None => StorageError::CapacityLimit.panic(),
        };
        let mut vec = Self::with_capacity(capacity);
        if let Err(error) = vec.try_extend_iter(&mut iter) {
            error.panic();
        }
        vec
    }
}

impl<T: Hash> Hash for KVec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Index<usize> for KVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(item) => item,
            None => StorageError::OutOfRange {
                index,
                length: self.length,
            }
            .panic(),
        }
    }
}

impl<T> IndexMut<usize> for KVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.length;
        match self.as_mut_slice().get_mut(index) {
            Some(item) => item,
            None => StorageError::OutOfRange { index, length }.panic(),
        }
    }
}

macro_rules! impl_range_index {
    ($($range:ty),+) => {
        $(
            impl<T> Index<$range> for KVec<T> {
                type Output = [T];

                #[inline]
                fn index(&self, index: $range) -> &[T] {
                    Index::index(self.as_slice(), index)
                }
            }

            impl<T> IndexMut<$range> for KVec<T> {
                #[inline]
                fn index_mut(&mut self, index: $range) -> &mut [T] {
                    IndexMut::index_mut(self.as_mut_slice(), index)
                }
            }
        )+
    };
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>
);

impl<T: Clone> From<&[T]> for KVec<T> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone> From<&mut [T]> for KVec<T> {
    #[inline]
    fn from(data: &mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for KVec<T> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, const N: usize> From<[T; N]> for KVec<T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_list(data)
    }
}

impl<T> From<alloc_crate::vec::Vec<T>> for KVec<T> {
    #[inline]
    fn from(vec: alloc_crate::vec::Vec<T>) -> Self {
        Self::from_list(vec)
    }
}

impl<T> From<KVec<T>> for alloc_crate::vec::Vec<T> {
    #[inline]
    fn from(vec: KVec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> IntoIterator for KVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let length = mem::replace(&mut self.length, 0);
        let buffer = mem::take(&mut self.buffer);
        IntoIter::new(buffer, length)
    }
}

impl<'a, T> IntoIterator for &'a KVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut KVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(feature = "zeroize")]
impl<T: Zeroize> Zeroize for KVec<T> {
    fn zeroize(&mut self) {
        for item in self.as_mut_slice() {
            item.zeroize();
        }
        self.clear();
        self.buffer.as_uninit_slice().zeroize();
    }
}
