//! Reference O(N*M) direct transform and the output-frequency helper.
//! Defines the ground-truth semantics the fast path approximates.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Frequencies of the transform output: `df * (-(m/2) + j)` for
/// `j = 0..m`.
pub fn nufftfreqs(m: usize, df: f64) -> Vec<f64> {
    let half = (m / 2) as f64;
    (0..m).map(|j| df * (j as f64 - half)).collect()
}

/// Direct evaluation of `Fk[j] = (1/m) * sum_i c_i * exp(i*sign*k_j*x_i)`
/// with `k_j = df * (-(m/2) + j)`.
///
/// Exact up to floating-point rounding; every term evaluates its own
/// exponential so no incremental-phase drift enters the oracle. Lengths
/// of `x` and `c` must already match.
pub fn nufft1d_direct<T: Float>(
    x: &[T],
    c: &[Complex<T>],
    m: usize,
    df: T,
    sign: i32,
) -> Vec<Complex<T>> {
    debug_assert_eq!(x.len(), c.len());
    let s = if sign < 0 { -T::one() } else { T::one() };
    let half = T::from_f64((m / 2) as f64);
    let inv_m = T::from_f64(1.0 / m as f64);
    (0..m)
        .map(|j| {
            let k = df * (T::from_f64(j as f64) - half);
            let mut acc = Complex::zero();
            for (&xi, &ci) in x.iter().zip(c.iter()) {
                acc = acc + ci.mul(Complex::expi(s * k * xi));
            }
            acc.scale(inv_m)
        })
        .collect()
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn test_freqs_even_odd() {
        assert_eq!(nufftfreqs(4, 1.0), vec![-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(nufftfreqs(5, 1.0), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_single_sample_phase() {
        // One unit sample at x0: Fk[j] = (1/m) * e^{i*sign*k*x0}.
        let x0 = 0.7;
        let x = [x0];
        let c = [Complex64::new(1.0, 0.0)];
        let m = 5;
        let out = nufft1d_direct(&x, &c, m, 1.0, 1);
        for (j, z) in out.iter().enumerate() {
            let k = j as f64 - 2.0;
            assert!((z.re - (k * x0).cos() / m as f64).abs() < 1e-12);
            assert!((z.im - (k * x0).sin() / m as f64).abs() < 1e-12);
        }
    }
}
