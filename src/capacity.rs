//! The capacity policy shared by every constructor and growth path.

/// The capacity allocated by [`KVec::new`](crate::KVec::new).
///
/// Gives short vectors a head start so the first appends never relocate.
pub const DEFAULT_CAPACITY: usize = 20;

/// The capacity reserved for `count` elements with room left to grow,
/// `count + count / 2 + 1`. Returns `None` if the result overflows.
#[inline]
pub const fn slack_capacity(count: usize) -> Option<usize> {
    count.checked_add(count / 2 + 1)
}

/// The capacity to request when a vector holding `length` elements needs
/// room for at least `minimum` elements.
///
/// Growth is approximately 1.5x the current length plus one, but never less
/// than the requested minimum.
#[inline]
pub fn next_capacity(length: usize, minimum: usize) -> Option<usize> {
    slack_capacity(length).map(|preferred| preferred.max(minimum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_formula() {
        assert_eq!(slack_capacity(0), Some(1));
        assert_eq!(slack_capacity(1), Some(2));
        assert_eq!(slack_capacity(3), Some(5));
        assert_eq!(slack_capacity(20), Some(31));
        assert_eq!(slack_capacity(usize::MAX), None);
    }

    #[test]
    fn next_respects_minimum() {
        assert_eq!(next_capacity(20, 21), Some(31));
        assert_eq!(next_capacity(4, 50), Some(50));
        assert_eq!(next_capacity(usize::MAX - 1, usize::MAX), None);
    }

    #[test]
    fn growth_sequence() {
        let mut cap = DEFAULT_CAPACITY;
        let mut seen = [0usize; 4];
        for slot in seen.iter_mut() {
            cap = next_capacity(cap, cap + 1).unwrap();
            *slot = cap;
        }
        assert_eq!(seen, [31, 47, 71, 107]);
    }
}
