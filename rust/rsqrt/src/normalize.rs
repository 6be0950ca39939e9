use crate::matrix::FeatureMatrix;
use crate::types::InverseSqrt;

/// Scale `v` to unit L2 norm in place.
///
/// Computes the sum of squares with plain accumulation, asks `approx` for
/// `1 / sqrt` of it once, and multiplies every component by the result. For a
/// positive sum of squares and an approximator with relative error `eps`, the
/// true norm of the result lies within `1 ± eps`.
///
/// A zero vector comes out all-zero under both approximators, by different
/// routes: [`crate::HardwareRsqrt`] scales the zeros by a large finite
/// factor, [`crate::RsqrtTable`] scales them by exactly 0.0.
pub fn normalize_in_place<A: InverseSqrt + ?Sized>(v: &mut [f32], approx: &A) {
    let sum: f32 = v.iter().map(|x| x * x).sum();
    let inv = approx.approximate(sum);
    for x in v.iter_mut() {
        *x *= inv;
    }
}

/// Like [`normalize_in_place`], but leaves the input untouched.
pub fn normalized_copy<A: InverseSqrt + ?Sized>(v: &[f32], approx: &A) -> Vec<f32> {
    let mut out = v.to_vec();
    normalize_in_place(&mut out, approx);
    out
}

/// Normalize every row of the matrix, sequentially, in input order.
pub fn normalize_rows<A: InverseSqrt + ?Sized>(matrix: &mut FeatureMatrix, approx: &A) {
    for row in matrix.rows_mut() {
        normalize_in_place(row, approx);
    }
}
