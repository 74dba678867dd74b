//! Random sampling without replacement.

/// Draw `min(size, arr.len())` elements from `arr` without replacement.
///
/// If `size >= arr.len()` the result is a random permutation of `arr`.
/// Uses the thread-local generator; not reproducible and not suitable for
/// anything security related. The input is never mutated.
pub fn random_subarray<T: Clone>(arr: &[T], size: usize) -> Vec<T> {
    random_subarray_with(&mut fastrand::Rng::new(), arr, size)
}

/// Same as [`random_subarray`] but driven by a caller-owned generator,
/// e.g. `fastrand::Rng::with_seed(42)` for reproducible samples.
pub fn random_subarray_with<T: Clone>(rng: &mut fastrand::Rng, arr: &[T], size: usize) -> Vec<T> {
    let n = size.min(arr.len());
    let mut shuffled = arr.to_vec();
    // Fisher-Yates, walking down from the end.
    for i in (1..shuffled.len()).rev() {
        let j = rng.usize(..=i);
        shuffled.swap(i, j);
    }
    shuffled.truncate(n);
    shuffled
}
