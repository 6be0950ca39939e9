#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

// rsqrtss: single-scalar reciprocal sqrt estimate, relative error bounded by
// 1.5 * 2^-12 per the Intel SDM. No refinement iteration is applied.
#[cfg(target_feature = "sse")]
pub unsafe fn rsqrt_ss(x: f32) -> f32 {
    _mm_cvtss_f32(_mm_rsqrt_ss(_mm_set_ss(x)))
}
