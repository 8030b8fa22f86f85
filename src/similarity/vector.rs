// Sparse-vector arithmetic over frequency maps.
//
// Both operations are plain sums over map entries, so the iteration order of
// the underlying hash map never affects the result.

use crate::corpus::FrequencyMap;

/// Dot product of two frequency vectors.
///
/// Iterates whichever map has fewer entries and looks each word up in the
/// other. Words missing from either side contribute nothing, so the result is
/// the same whichever argument is larger.
pub fn inner_product(a: &FrequencyMap, b: &FrequencyMap) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .filter_map(|(word, count)| {
            large
                .get(word)
                .map(|other| count as f64 * other as f64)
        })
        .sum()
}

/// Euclidean length of a frequency vector.
pub fn norm(map: &FrequencyMap) -> f64 {
    map.iter()
        .map(|(_, count)| {
            let c = count as f64;
            c * c
        })
        .sum::<f64>()
        .sqrt()
}
