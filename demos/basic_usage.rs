//! Basic usage example for nufft
//!
//! Computes the spectrum of a tone sampled at irregular times, once with
//! the fast gridding pipeline and once with the direct reference
//! transform, and prints the worst-case disagreement.

use nufft::{nufft1d, nufftfreqs, Complex64, NufftConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(1234);

    // Irregular sample times of a two-tone signal.
    let n = 500;
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..20.0)).collect();
    let c: Vec<Complex64> = x
        .iter()
        .map(|&t| Complex64::new((3.0 * t).cos() + 0.5 * (7.0 * t).sin(), 0.0))
        .collect();

    let m = 64;
    let cfg = NufftConfig {
        eps: 1e-12,
        ..NufftConfig::default()
    };

    let fast = nufft1d(&x, &c, m, &cfg).unwrap();
    let exact = nufft1d(&x, &c, m, &NufftConfig { direct: true, ..cfg }).unwrap();

    let freqs = nufftfreqs(m, cfg.df);
    println!("    freq    |F(k)|");
    for (f, z) in freqs.iter().zip(fast.iter()).take(8) {
        let mag = (z.re * z.re + z.im * z.im).sqrt();
        println!("{f:>8.2}  {mag:.6}");
    }
    println!("     ...");

    let worst = fast
        .iter()
        .zip(exact.iter())
        .map(|(a, b)| ((a.re - b.re).powi(2) + (a.im - b.im).powi(2)).sqrt())
        .fold(0.0f64, f64::max);
    println!("\nmax |fast - direct| = {worst:.3e} (eps = {:.0e})", cfg.eps);
}
