//! Oversampled-grid transform seam.
//!
//! The pipeline never implements a dense Fourier transform of its own; it
//! consumes a complex-to-complex DFT of the grid through [`GridFft`]. The
//! bundled [`RustFftGrid`] backend delegates to the `rustfft` crate and is
//! available with the `std` feature; `no_std` users plug in their own
//! backend.

use crate::num::{Complex, Float};

/// Black-box length-`n` transform with the usual linearity and
/// periodicity properties.
///
/// Conventions match numpy's: `forward` is the unscaled DFT with the
/// `e^{-2*pi*i*mk/n}` kernel, `inverse` is the opposite-sign transform
/// *including* the `1/n` normalization. Backends must accept any length
/// `>= 1`; the oversampled grid is generally not a power of two.
pub trait GridFft<T: Float> {
    fn forward(&self, data: &mut [Complex<T>]);
    fn inverse(&self, data: &mut [Complex<T>]);
}

#[cfg(feature = "std")]
pub use rustfft_backend::RustFftGrid;

#[cfg(feature = "std")]
mod rustfft_backend {
    use super::GridFft;
    use crate::num::{Complex, Float};
    use alloc::vec::Vec;
    use rustfft::num_complex::Complex as FftComplex;
    use rustfft::{FftNum, FftPlanner};

    /// [`GridFft`] backend over `rustfft`. Planning is cheap relative to
    /// the transform itself and `rustfft` falls back to Bluestein for
    /// awkward lengths, so every grid size the parameter selection can
    /// produce is supported.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct RustFftGrid;

    fn run<S: FftNum + Float>(data: &mut [Complex<S>], forward: bool) {
        if data.is_empty() {
            return;
        }
        let mut buf: Vec<FftComplex<S>> =
            data.iter().map(|z| FftComplex::new(z.re, z.im)).collect();
        let mut planner = FftPlanner::new();
        let fft = if forward {
            planner.plan_fft_forward(buf.len())
        } else {
            planner.plan_fft_inverse(buf.len())
        };
        fft.process(&mut buf);
        for (dst, src) in data.iter_mut().zip(buf.into_iter()) {
            dst.re = src.re;
            dst.im = src.im;
        }
    }

    macro_rules! impl_grid_fft {
        ($t:ty) => {
            impl GridFft<$t> for RustFftGrid {
                fn forward(&self, data: &mut [Complex<$t>]) {
                    run(data, true);
                }
                fn inverse(&self, data: &mut [Complex<$t>]) {
                    run(data, false);
                    // rustfft's inverse is unnormalized.
                    let scale = 1.0 / data.len() as $t;
                    for z in data.iter_mut() {
                        z.re *= scale;
                        z.im *= scale;
                    }
                }
            }
        };
    }

    impl_grid_fft!(f32);
    impl_grid_fft!(f64);
}

#[cfg(all(feature = "std", feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn test_forward_impulse_is_flat() {
        let mut data = vec![Complex64::zero(); 6];
        data[0] = Complex64::new(1.0, 0.0);
        RustFftGrid.forward(&mut data);
        for z in &data {
            assert!((z.re - 1.0).abs() < 1e-12);
            assert!(z.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverse_normalization_roundtrip() {
        // Non-power-of-two length on purpose.
        let orig: vec::Vec<Complex64> = (0..5)
            .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
            .collect();
        let mut data = orig.clone();
        RustFftGrid.forward(&mut data);
        RustFftGrid.inverse(&mut data);
        for (a, b) in data.iter().zip(orig.iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }
}
