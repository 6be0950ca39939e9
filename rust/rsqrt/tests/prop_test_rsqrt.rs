use proptest::prelude::*;
use unitnorm_rsqrt::{normalize_in_place, HardwareRsqrt, InverseSqrt, RsqrtTable};

proptest! {
    #[test]
    fn hardware_stays_in_the_error_band(x in 1e-3f32..1e9) {
        let exact = 1.0 / x.sqrt();
        let got = HardwareRsqrt.approximate(x);
        let rel = ((got - exact) / exact).abs();
        prop_assert!(rel < 2e-3, "x={}, rel={}", x, rel);
    }

    #[test]
    fn hardware_normalized_norm_is_close_to_one(
        mut v in proptest::collection::vec(-1e3f32..1e3, 1..64)
    ) {
        let sum: f32 = v.iter().map(|x| x * x).sum();
        prop_assume!(sum > 1e-3);
        normalize_in_place(&mut v, &HardwareRsqrt);
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!((norm - 1.0).abs() < 2e-3, "norm={}", norm);
    }

    #[test]
    fn table_lookup_always_returns_a_stored_sample(x in 0.0f32..10_000.0) {
        let table = RsqrtTable::new(1000, 10_000.0).unwrap();
        let got = table.approximate(x);
        if x > 0.0 {
            let index = (x / 10_000.0 * 999.0) as usize;
            let expected = 1.0 / (index as f32 / 1000.0 * 10_000.0).sqrt();
            prop_assert_eq!(got.to_bits(), expected.to_bits());
        } else {
            prop_assert_eq!(got, 0.0);
        }
    }

    #[test]
    fn table_handles_any_input_without_panicking(x in -1e6f32..1e6) {
        let table = RsqrtTable::new(100, 10.0).unwrap();
        let _ = table.approximate(x);
        if x >= 10.0 {
            prop_assert!(table.try_approximate(x).is_err());
        } else {
            prop_assert!(table.try_approximate(x).is_ok());
        }
    }
}
