//! Partitioned spreading and parallel deconvolution must match the
//! reference transform just like the sequential path does.
#![cfg(feature = "parallel")]

use nufft::{nufft1d, Complex64, NufftConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn parallel_spread_matches_direct() {
    let mut rng = StdRng::seed_from_u64(21);
    // Enough samples to cross the partition threshold.
    let n = 10_000;
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
    let c: Vec<Complex64> = (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let m = 64;
    let cfg = NufftConfig {
        eps: 1e-9,
        ..NufftConfig::default()
    };
    let fast = nufft1d(&x, &c, m, &cfg).unwrap();
    let exact = nufft1d(&x, &c, m, &NufftConfig { direct: true, ..cfg }).unwrap();
    let scale: f64 = c
        .iter()
        .map(|z| (z.re * z.re + z.im * z.im).sqrt())
        .sum::<f64>()
        / m as f64;
    for (a, b) in fast.iter().zip(exact.iter()) {
        assert!((a.re - b.re).abs() < 1e-6 * scale);
        assert!((a.im - b.im).abs() < 1e-6 * scale);
    }
}
