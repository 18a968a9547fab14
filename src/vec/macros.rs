/// Create a [`KVec`](crate::KVec) containing the arguments.
///
/// - `kvec![]` constructs a vector with the default capacity,
/// - `kvec![elem; n]` holds `n` clones of `elem`,
/// - `kvec![a, b, c]` holds the listed values, moved into place in order.
///
/// ```
/// let v = kvec::kvec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 5);
/// ```
#[macro_export]
macro_rules! kvec {
    () => (
        $crate::KVec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::KVec::from_list([$($x),+])
    );
}
