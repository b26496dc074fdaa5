//! Property tests over the public `Tree` API.

mod tree;

/// Sorts and deduplicates `xs`, the way a bulk-built tree stores them.
pub(crate) fn distinct_sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
    xs.sort_unstable();
    xs.dedup();
    xs
}
