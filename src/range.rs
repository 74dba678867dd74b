/// The natural numbers `0..n` in ascending order.
///
/// `nat_range(0)` is empty.
pub fn nat_range(n: usize) -> Vec<usize> {
    (0..n).collect()
}
