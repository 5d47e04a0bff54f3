//! [Linear Search]: Method for finding an element within a list. It
//! sequentially checks each element of the list until a match is found or the
//! whole list has been searched.
//!
//! Bucket chains are scanned this way, so lookups in a skewed table degrade to
//! the length of the longest chain.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

/// Returns the index of the first element equal to `target`, or [`None`] if
/// it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use kvtable::prelude::*;
///
/// let arr = [11, 4, 30, 110, 20, 2, 70, 45];
///
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
/// ```
#[inline]
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    linear_search_by(arr, |elem| *elem == *target)
}

/// Returns the index of the first element for which `pred` returns `true`,
/// or [`None`] if no element matches.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use kvtable::prelude::*;
///
/// let chain = [("foo", 0), ("bar", 1), ("baz", 2)];
///
/// assert_eq!(linear_search_by(&chain, |(k, _)| *k == "bar"), Some(1));
/// assert_eq!(linear_search_by(&chain, |(k, _)| *k == "nope!"), None);
/// ```
pub fn linear_search_by<T, P>(arr: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    for (i, elem) in arr.iter().enumerate() {
        if pred(elem) {
            return Some(i);
        }
    }

    None
}
