use nufft::{nufft1d, Complex64, NufftConfig, NufftError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> (Vec<f64>, Vec<Complex64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..30.0)).collect();
    let c: Vec<Complex64> = (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    (x, c)
}

fn max_abs_diff(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((x.re - y.re).powi(2) + (x.im - y.im).powi(2)).sqrt())
        .fold(0.0, f64::max)
}

// Upper bound on any output magnitude: sum|c| / m.
fn output_scale(c: &[Complex64], m: usize) -> f64 {
    let mass: f64 = c.iter().map(|z| (z.re * z.re + z.im * z.im).sqrt()).sum();
    (mass / m as f64).max(f64::MIN_POSITIVE)
}

#[test]
fn fast_path_tracks_direct_loose_eps() {
    let (x, c) = random_points(100, 1);
    let m = 32;
    let cfg = NufftConfig {
        eps: 1e-8,
        ..NufftConfig::default()
    };
    let fast = nufft1d(&x, &c, m, &cfg).unwrap();
    let exact = nufft1d(&x, &c, m, &NufftConfig { direct: true, ..cfg }).unwrap();
    assert!(max_abs_diff(&fast, &exact) < 1e-5 * output_scale(&c, m));
}

#[test]
fn fast_path_tracks_direct_tight_eps() {
    // eps below 1e-11 exercises the 3x oversampling branch.
    let (x, c) = random_points(100, 2);
    let m = 32;
    let cfg = NufftConfig {
        eps: 1e-13,
        ..NufftConfig::default()
    };
    let fast = nufft1d(&x, &c, m, &cfg).unwrap();
    let exact = nufft1d(&x, &c, m, &NufftConfig { direct: true, ..cfg }).unwrap();
    assert!(max_abs_diff(&fast, &exact) < 1e-10 * output_scale(&c, m));
}

#[test]
fn fast_path_negative_sign_tracks_direct() {
    let (x, c) = random_points(80, 3);
    let m = 24;
    let cfg = NufftConfig {
        eps: 1e-10,
        iflag: -1,
        ..NufftConfig::default()
    };
    let fast = nufft1d(&x, &c, m, &cfg).unwrap();
    let exact = nufft1d(&x, &c, m, &NufftConfig { direct: true, ..cfg }).unwrap();
    assert!(max_abs_diff(&fast, &exact) < 1e-7 * output_scale(&c, m));
}

// With x on the integer grid 0..n-1 and df = 2*pi/n, the direct path is
// the plain DFT of c scaled by 1/n (forward for iflag < 0).
#[test]
fn uniform_grid_matches_plain_dft() {
    let n = 16;
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let (_, c) = random_points(n, 4);
    let cfg = NufftConfig {
        df: 2.0 * std::f64::consts::PI / n as f64,
        iflag: -1,
        direct: true,
        ..NufftConfig::default()
    };
    let got = nufft1d(&x, &c, n, &cfg).unwrap();
    for (j, z) in got.iter().enumerate() {
        let k = j as f64 - (n / 2) as f64;
        let mut acc = Complex64::zero();
        for (i, ci) in c.iter().enumerate() {
            let ang = -2.0 * std::f64::consts::PI * k * i as f64 / n as f64;
            acc = acc + ci.mul(Complex64::new(ang.cos(), ang.sin()));
        }
        assert!((z.re - acc.re / n as f64).abs() < 1e-12);
        assert!((z.im - acc.im / n as f64).abs() < 1e-12);
    }
}

// Single unit-weight sample: Fk[j] = (1/m) * e^{i*sign*k*x0}, hand-checkable.
#[test]
fn sign_convention_single_sample() {
    let x0 = 1.25f64;
    let x = [x0];
    let c = [Complex64::new(1.0, 0.0)];
    let m = 4;
    for &(iflag, s) in &[(1i32, 1.0f64), (-1, -1.0)] {
        let cfg = NufftConfig {
            iflag,
            direct: true,
            ..NufftConfig::default()
        };
        let out = nufft1d(&x, &c, m, &cfg).unwrap();
        for (j, z) in out.iter().enumerate() {
            let k = j as f64 - 2.0;
            assert!((z.re - (s * k * x0).cos() / m as f64).abs() < 1e-14);
            assert!((z.im - (s * k * x0).sin() / m as f64).abs() < 1e-14);
        }
    }
}

// For real-valued c the two sign conventions are complex conjugates.
#[test]
fn sign_flip_conjugates_real_input() {
    let mut rng = StdRng::seed_from_u64(5);
    let x: Vec<f64> = (0..20).map(|_| rng.gen_range(0.0..10.0)).collect();
    let c: Vec<Complex64> = (0..20)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), 0.0))
        .collect();
    let base = NufftConfig {
        direct: true,
        ..NufftConfig::default()
    };
    let pos = nufft1d(&x, &c, 8, &base).unwrap();
    let neg = nufft1d(&x, &c, 8, &NufftConfig { iflag: -1, ..base }).unwrap();
    for (p, n) in pos.iter().zip(neg.iter()) {
        let pc = p.conj();
        assert!((pc.re - n.re).abs() < 1e-14);
        assert!((pc.im - n.im).abs() < 1e-14);
    }
}

#[test]
fn mismatched_lengths_error() {
    let x = [0.0, 1.0, 2.0];
    let c = [Complex64::zero(); 4];
    let err = nufft1d(&x, &c, 8, &NufftConfig::default()).unwrap_err();
    assert_eq!(err, NufftError::InvalidArgument);
}

#[test]
fn eps_out_of_range_error() {
    let x = [0.0, 1.0];
    let c = [Complex64::zero(); 2];
    let cfg = NufftConfig {
        eps: 1.0,
        ..NufftConfig::default()
    };
    assert_eq!(
        nufft1d(&x, &c, 8, &cfg).unwrap_err(),
        NufftError::InvalidParameter
    );
}

#[test]
fn zero_output_size_error() {
    let x = [0.0];
    let c = [Complex64::zero()];
    assert_eq!(
        nufft1d(&x, &c, 0, &NufftConfig::default()).unwrap_err(),
        NufftError::InvalidParameter
    );
}

// An eps out of range is ignored on the direct path, as in the reference
// semantics.
#[test]
fn direct_path_ignores_eps() {
    let x = [0.5];
    let c = [Complex64::new(1.0, 0.0)];
    let cfg = NufftConfig {
        eps: 1.0,
        direct: true,
        ..NufftConfig::default()
    };
    assert!(nufft1d(&x, &c, 4, &cfg).is_ok());
}

#[test]
fn empty_sample_set_yields_zeros() {
    let out = nufft1d::<f64>(&[], &[], 6, &NufftConfig::default()).unwrap();
    assert_eq!(out.len(), 6);
    for z in &out {
        assert!(z.re.abs() < 1e-300 && z.im.abs() < 1e-300);
    }
}
