// Cosine similarity and angular distance between two documents.
//
//   cosine   = inner_product(a, b) / (norm(a) * norm(b))
//   distance = acos(cosine)            (radians)
//
// 0 means both documents use words in the same proportions; pi/2 means they
// share no vocabulary. Counts are non-negative, so in practice the distance
// never exceeds pi/2.

pub mod vector;

use thiserror::Error;

use crate::corpus::FrequencyMap;

pub use vector::{inner_product, norm};

/// Which side of a comparison had a zero-length vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySide {
    First,
    Second,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// At least one document has no words, so its norm is zero and the
    /// cosine is undefined.
    #[error("similarity is undefined: {}", describe(.0))]
    DegenerateNorm(EmptySide),
}

fn describe(side: &EmptySide) -> &'static str {
    match side {
        EmptySide::First => "the first document has no words",
        EmptySide::Second => "the second document has no words",
        EmptySide::Both => "neither document has any words",
    }
}

/// Result of comparing two frequency vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    /// Cosine of the angle, clamped to [-1, 1]
    pub cosine: f64,
    /// The angle itself, in radians
    pub radians: f64,
}

/// Cosine of the angle between two frequency vectors.
///
/// The quotient is clamped to [-1, 1]: rounding in the division can land just
/// past 1.0 for near-identical documents, where `acos` would return NaN.
pub fn cosine_similarity(a: &FrequencyMap, b: &FrequencyMap) -> Result<f64, SimilarityError> {
    let norm_a = norm(a);
    let norm_b = norm(b);

    match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => return Err(SimilarityError::DegenerateNorm(EmptySide::Both)),
        (true, false) => return Err(SimilarityError::DegenerateNorm(EmptySide::First)),
        (false, true) => return Err(SimilarityError::DegenerateNorm(EmptySide::Second)),
        (false, false) => {}
    }

    Ok((inner_product(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Angular distance between two frequency vectors, in radians.
pub fn angular_distance(a: &FrequencyMap, b: &FrequencyMap) -> Result<f64, SimilarityError> {
    cosine_similarity(a, b).map(f64::acos)
}

/// Compute both the cosine and the angle in one pass.
pub fn similarity(a: &FrequencyMap, b: &FrequencyMap) -> Result<Similarity, SimilarityError> {
    let cosine = cosine_similarity(a, b)?;
    Ok(Similarity {
        cosine,
        radians: cosine.acos(),
    })
}
