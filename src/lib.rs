//! # nufft - fast 1-D non-uniform FFT for Rust
//!
//! Computes the discrete Fourier spectrum of N complex values located at
//! arbitrary real positions, evaluated at M uniformly spaced output
//! frequencies. The fast path follows Dutt & Rokhlin parameter selection
//! and Greengard & Lee Gaussian gridding: samples are spread onto an
//! oversampled periodic grid, the grid is transformed by a delegated
//! complex FFT, and the kernel's spectral attenuation is removed with a
//! closed-form correction. Cost is near-FFT instead of the O(N*M) direct
//! sum, to within a caller-chosen accuracy `eps`.
//!
//! ## Cargo Features
//!
//! - `std` (default): enables the bundled `rustfft` grid backend and
//!   `std::error::Error` impls
//! - `parallel`: partition-and-reduce spreading and parallel
//!   deconvolution with Rayon
//! - `verbose-logging`: per-call diagnostics through `log`
//!
//! ## Example
//!
//! ```rust
//! use nufft::{nufft1d, nufftfreqs, Complex64, NufftConfig};
//!
//! let x = [0.3, 1.9, 4.4];
//! let c = [
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(0.0, -1.0),
//!     Complex64::new(0.5, 0.5),
//! ];
//! let spectrum = nufft1d(&x, &c, 8, &NufftConfig::default()).unwrap();
//! let freqs = nufftfreqs(8, 1.0);
//! assert_eq!(spectrum.len(), freqs.len());
//! ```
//!
//! The algorithmic core is `no_std` + `alloc`; without `std` supply your
//! own FFT through [`GridFft`] and call [`nufft1d_with`].
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

/// Float abstraction and complex arithmetic used by every stage.
pub mod num;

/// Accuracy-driven selection of kernel width, oversampling ratio, and
/// Gaussian time constant.
pub mod params;

/// Gaussian-kernel gridding of non-uniform samples onto the oversampled
/// periodic grid, with two interchangeable evaluation strategies.
pub mod spread;

/// The delegated oversampled-grid transform seam and the bundled
/// `rustfft` backend.
pub mod transform;

/// Central-band extraction and analytic kernel deconvolution.
pub mod deconvolve;

/// O(N*M) reference transform and the output-frequency helper.
pub mod direct;

/// Entry points, configuration, and validation.
pub mod nufft;

pub use direct::nufftfreqs;
pub use num::{Complex, Complex32, Complex64, Float};
#[cfg(feature = "std")]
pub use nufft::nufft1d;
pub use nufft::{nufft1d_with, NufftConfig, NufftError};
pub use spread::Gridding;
pub use transform::GridFft;
#[cfg(feature = "std")]
pub use transform::RustFftGrid;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_fast_tracks_direct_smoke() {
        let mut rng = StdRng::seed_from_u64(7);
        let x: Vec<f64> = (0..48).map(|_| rng.gen_range(0.0..20.0)).collect();
        let c: Vec<Complex64> = (0..48)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let cfg = NufftConfig {
            eps: 1e-8,
            ..NufftConfig::default()
        };
        let fast = nufft1d(&x, &c, 16, &cfg).unwrap();
        let exact = nufft1d(
            &x,
            &c,
            16,
            &NufftConfig {
                direct: true,
                ..cfg
            },
        )
        .unwrap();
        for (a, b) in fast.iter().zip(exact.iter()) {
            assert!((a.re - b.re).abs() < 1e-6);
            assert!((a.im - b.im).abs() < 1e-6);
        }
    }
}
