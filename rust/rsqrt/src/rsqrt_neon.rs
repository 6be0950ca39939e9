#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

// frsqrte alone is only good to about 2^-8, one frsqrts step brings the
// estimate inside the error band the x86 path gets from rsqrtss.
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub unsafe fn rsqrt_refined(x: f32) -> f32 {
    let est = vrsqrtes_f32(x);
    est * vrsqrtss_f32(x * est, est)
}
