use thiserror::Error;
use unitnorm_error::{ErrorCodes, UnitnormError};

use crate::types::InverseSqrt;

#[derive(Error, Debug, PartialEq)]
pub enum RsqrtTableError {
    #[error("Invalid table size `{0}`, must be nonzero")]
    InvalidSize(usize),
    #[error("Invalid table domain bound `{0}`, must be finite and positive")]
    InvalidMaxValue(f32),
    #[error("Input `{0}` is outside the table domain [0, {1})")]
    OutOfDomain(f32, f32),
}

impl UnitnormError for RsqrtTableError {
    fn code(&self) -> ErrorCodes {
        match self {
            RsqrtTableError::InvalidSize(_) | RsqrtTableError::InvalidMaxValue(_) => {
                ErrorCodes::InvalidArgument
            }
            RsqrtTableError::OutOfDomain(_, _) => ErrorCodes::OutOfRange,
        }
    }
}

/// Quantized inverse square root lookup table.
/// # Description
/// Precomputes `size` samples of `1 / sqrt(x)` over the half-open domain
/// `[0, max_value)`, one per equal-width bucket. Lookup floors the input into
/// a bucket and returns that bucket's stored sample, with no interpolation.
/// Built once, immutable afterwards; callers own the table and pass it
/// explicitly.
/// # Notes
/// Within a bucket the true value deviates from the stored sample by up to
/// the local derivative of `1 / sqrt` times the bucket width, so the error is
/// asymmetric and grows sharply as `x` approaches zero. Bucket 0's sample is
/// `1 / sqrt(0) = +inf`: a positive input small enough to floor into bucket 0
/// reads that infinite sample, matching the quantization rule rather than
/// papering over it. Pick `size` and `max_value` so the magnitudes you care
/// about land well above the first bucket.
#[derive(Clone, Debug)]
pub struct RsqrtTable {
    samples: Vec<f32>,
    max_value: f32,
}

impl RsqrtTable {
    pub const DEFAULT_SIZE: usize = 10000;
    pub const DEFAULT_MAX_VALUE: f32 = 10000.0;

    pub fn new(size: usize, max_value: f32) -> Result<RsqrtTable, RsqrtTableError> {
        if size == 0 {
            return Err(RsqrtTableError::InvalidSize(size));
        }
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(RsqrtTableError::InvalidMaxValue(max_value));
        }
        let mut samples = Vec::with_capacity(size);
        for i in 0..size {
            let value = i as f32 / size as f32 * max_value;
            samples.push(1.0 / value.sqrt());
        }
        Ok(RsqrtTable { samples, max_value })
    }

    pub fn size(&self) -> usize {
        self.samples.len()
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn bucket_width(&self) -> f32 {
        self.max_value / self.samples.len() as f32
    }

    // Only valid for 0 < x < max_value; the quotient is then strictly below
    // size - 1 + 1, so the cast cannot index past the end.
    fn bucket_index(&self, x: f32) -> usize {
        (x / self.max_value * (self.samples.len() - 1) as f32) as usize
    }

    /// Checked lookup: rejects inputs at or above `max_value` instead of
    /// clamping them the way [`InverseSqrt::approximate`] does.
    pub fn try_approximate(&self, x: f32) -> Result<f32, RsqrtTableError> {
        if x >= self.max_value {
            return Err(RsqrtTableError::OutOfDomain(x, self.max_value));
        }
        if x.is_nan() || x <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.samples[self.bucket_index(x)])
    }
}

impl InverseSqrt for RsqrtTable {
    /// Returns 0.0 for inputs at or below zero (and NaN), and the last
    /// bucket's sample for inputs at or above `max_value`.
    fn approximate(&self, x: f32) -> f32 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= self.max_value {
            return self.samples[self.samples.len() - 1];
        }
        self.samples[self.bucket_index(x)]
    }
}
