use thiserror::Error;
use unitnorm_error::{ErrorCodes, UnitnormError};

use crate::rsqrt;

/// The inverse square root capability.
/// # Description
/// Approximates `1 / sqrt(x)` faster than an exact division and root, at the
/// cost of a bounded relative error. Implemented by [`HardwareRsqrt`] and
/// [`crate::table::RsqrtTable`], which trade accuracy off very differently
/// near zero.
pub trait InverseSqrt {
    fn approximate(&self, x: f32) -> f32;
}

/// Run-time selection between the two approximation strategies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RsqrtStrategy {
    Hardware,
    Table,
}

#[derive(Error, Debug)]
pub enum RsqrtStrategyError {
    #[error("Invalid inverse sqrt strategy `{0}`")]
    InvalidStrategy(String),
}

impl UnitnormError for RsqrtStrategyError {
    fn code(&self) -> ErrorCodes {
        match self {
            RsqrtStrategyError::InvalidStrategy(_) => ErrorCodes::InvalidArgument,
        }
    }
}

impl TryFrom<&str> for RsqrtStrategy {
    type Error = RsqrtStrategyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "hardware" => Ok(RsqrtStrategy::Hardware),
            "table" => Ok(RsqrtStrategy::Table),
            _ => Err(RsqrtStrategyError::InvalidStrategy(value.to_string())),
        }
    }
}

impl From<RsqrtStrategy> for String {
    fn from(value: RsqrtStrategy) -> String {
        match value {
            RsqrtStrategy::Hardware => "hardware".to_string(),
            RsqrtStrategy::Table => "table".to_string(),
        }
    }
}

/// The CPU's reciprocal sqrt estimate: `rsqrtss` on x86 SSE, a refined
/// `frsqrte` on aarch64 NEON, and a bit-trick Newton-Raphson estimate
/// elsewhere. O(1), branch-free past the input clamp, relative error within
/// 2e-3 on every path (3.7e-4 on SSE).
///
/// Inputs at or below zero are clamped up to `f32::MIN_POSITIVE` before the
/// estimate, so `approximate(0.0)` is a large finite value (about 9.2e18)
/// rather than the `+inf`/NaN the raw instructions would produce. A zero
/// vector scaled by that factor therefore stays all-zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct HardwareRsqrt;

impl InverseSqrt for HardwareRsqrt {
    #[allow(unreachable_code)]
    fn approximate(&self, x: f32) -> f32 {
        let x = x.max(f32::MIN_POSITIVE);
        #[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
        {
            return unsafe { crate::rsqrt_sse::rsqrt_ss(x) };
        }
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            return unsafe { crate::rsqrt_neon::rsqrt_refined(x) };
        }
        rsqrt::rsqrt_scalar(x)
    }
}
