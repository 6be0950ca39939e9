/// Portable inverse square root estimate: bit-trick initial guess plus one
/// Newton-Raphson step. Used on targets without an SSE or NEON estimate
/// instruction. Relative error is below 1.8e-3 for positive finite inputs.
pub fn rsqrt_scalar(x: f32) -> f32 {
    let i = 0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1);
    let y = f32::from_bits(i);
    y * (1.5 - 0.5 * x * y * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_estimate_tracks_exact_rsqrt() {
        for x in [1e-6f32, 0.25, 1.0, 2.0, 25.0, 5000.0, 1e6, 1e12] {
            let exact = 1.0 / x.sqrt();
            let got = rsqrt_scalar(x);
            let rel = ((got - exact) / exact).abs();
            assert!(rel < 1.8e-3, "x={x}: got {got}, exact {exact}, rel {rel}");
        }
    }
}
