//! Equality and lexicographic ordering.
//!
//! Vectors of different lengths are never equal. Ordering walks the common
//! prefix and the first pair of elements which differ decides the result;
//! when one vector is a prefix of the other, the shorter one orders first.
//! For totally ordered elements `a <= b` is always `!(a > b)` and `a >= b`
//! is `!(a < b)`.

use core::cmp::Ordering;

use super::KVec;

impl<T, U> PartialEq<KVec<U>> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &KVec<U>) -> bool {
        elements_eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Eq> Eq for KVec<T> {}

impl<T: PartialOrd> PartialOrd for KVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (left, right) in self.iter().zip(other.iter()) {
            match left.partial_cmp(right) {
                Some(Ordering::Equal) => (),
                decided => return decided,
            }
        }
        Some(self.len().cmp(&other.len()))
    }
}

impl<T: Ord> Ord for KVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        for (left, right) in self.iter().zip(other.iter()) {
            match left.cmp(right) {
                Ordering::Equal => (),
                decided => return decided,
            }
        }
        self.len().cmp(&other.len())
    }
}

#[inline]
fn elements_eq<T: PartialEq<U>, U>(left: &[T], right: &[U]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter().zip(right).all(|(l, r)| l == r)
}

impl<T, U> PartialEq<[U]> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        elements_eq(self.as_slice(), other)
    }
}

impl<T, U> PartialEq<&[U]> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        elements_eq(self.as_slice(), other)
    }
}

impl<T, U> PartialEq<&mut [U]> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&mut [U]) -> bool {
        elements_eq(self.as_slice(), other)
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        elements_eq(self.as_slice(), &other[..])
    }
}

impl<T, U, const N: usize> PartialEq<&[U; N]> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; N]) -> bool {
        elements_eq(self.as_slice(), &other[..])
    }
}

impl<T, U> PartialEq<alloc_crate::vec::Vec<U>> for KVec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &alloc_crate::vec::Vec<U>) -> bool {
        elements_eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U> PartialEq<KVec<U>> for [T]
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &KVec<U>) -> bool {
        elements_eq(self, other.as_slice())
    }
}

impl<T, U> PartialEq<KVec<U>> for &[T]
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &KVec<U>) -> bool {
        elements_eq(self, other.as_slice())
    }
}

impl<T, U, const N: usize> PartialEq<KVec<U>> for [T; N]
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &KVec<U>) -> bool {
        elements_eq(&self[..], other.as_slice())
    }
}

impl<T, U> PartialEq<KVec<U>> for alloc_crate::vec::Vec<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &KVec<U>) -> bool {
        elements_eq(self.as_slice(), other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use crate::KVec;

    #[test]
    fn prefix_orders_first() {
        let short = KVec::from([1, 2]);
        let long = KVec::from([1, 2, 3]);
        assert!(short < long);
        assert!(!(long < short));
        assert_eq!(short.cmp(&long), Ordering::Less);
    }

    #[test]
    fn first_difference_decides() {
        let a = KVec::from([1, 3]);
        let b = KVec::from([1, 2]);
        assert!(b < a);
        assert!(a > b);
        assert!(b <= a && !(b >= a));
    }

    #[test]
    fn length_mismatch_is_unequal() {
        let a = KVec::from([1, 2]);
        let b = KVec::from([1, 2, 0]);
        assert_ne!(a, b);
        assert_eq!(a, [1, 2]);
        assert_eq!([1, 2], a);
    }

    #[test]
    fn incomparable_elements() {
        let a = KVec::from([1.0, f64::NAN]);
        let b = KVec::from([1.0, 2.0]);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b));
        assert_ne!(a, a.clone());
    }
}
