//! 1-D NUFFT entry points: validation, configuration, and pipeline
//! wiring (spread -> grid FFT -> deconvolve).
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::deconvolve::deconvolve;
use crate::direct::nufft1d_direct;
use crate::num::{Complex, Float};
use crate::params::SpreadParams;
use crate::spread::{spread_samples, DirectGaussian, Gridding, IncrementalGaussian};
use crate::transform::GridFft;

/// Errors that can occur before any numeric work starts. Nothing here is
/// transient; there are no retries and no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NufftError {
    /// Sample locations and values have different lengths.
    InvalidArgument,
    /// Accuracy target outside `(1e-33, 1e-1)`, or a zero output size.
    InvalidParameter,
}

impl core::fmt::Display for NufftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NufftError::InvalidArgument => {
                write!(f, "sample locations and values must have equal lengths")
            }
            NufftError::InvalidParameter => {
                write!(f, "eps must satisfy 1e-33 < eps < 1e-1 and m must be positive")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NufftError {}

/// Transform request. `Default` matches the common case: unit frequency
/// scale, near machine-precision accuracy, positive exponent, fast path
/// with incremental gridding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NufftConfig {
    /// Frequency scale; output bin `j` corresponds to `df * (-(m/2) + j)`.
    pub df: f64,
    /// Target approximate error of the fast path. Not referenced when
    /// `direct` is set.
    pub eps: f64,
    /// Sign selector: negative means the exponent carries `-i`, anything
    /// else `+i`.
    pub iflag: i32,
    /// Use the O(N*M) reference transform instead of the fast pipeline.
    pub direct: bool,
    /// Kernel evaluation strategy for the fast path.
    pub gridding: Gridding,
}

impl Default for NufftConfig {
    fn default() -> Self {
        Self {
            df: 1.0,
            eps: 1e-15,
            iflag: 1,
            direct: false,
            gridding: Gridding::Incremental,
        }
    }
}

/// Compute the 1-D non-uniform Fourier transform of points `x` with
/// complex values `c` at the `m` frequencies `df * (-(m/2) + j)`, using
/// `fft` for the oversampled-grid transform.
///
/// This is the backend-generic core; [`nufft1d`] wires it to the bundled
/// `rustfft` backend. A single synchronous pass: parameters are derived
/// once, the grid lives only for the duration of the call.
pub fn nufft1d_with<T: Float, F: GridFft<T>>(
    x: &[T],
    c: &[Complex<T>],
    m: usize,
    cfg: &NufftConfig,
    fft: &F,
) -> Result<Vec<Complex<T>>, NufftError>
where
    T: Send + Sync,
{
    if x.len() != c.len() {
        return Err(NufftError::InvalidArgument);
    }
    if m == 0 {
        return Err(NufftError::InvalidParameter);
    }
    let sign = if cfg.iflag < 0 { -1 } else { 1 };

    if cfg.direct {
        return Ok(nufft1d_direct(x, c, m, T::from_f64(cfg.df), sign));
    }

    let params = SpreadParams::new(cfg.eps, m)?;
    let df = T::from_f64(cfg.df);
    let mut grid = match cfg.gridding {
        Gridding::Incremental => {
            let kernel = IncrementalGaussian::new(&params);
            spread_samples(x, c, df, &kernel)
        }
        Gridding::Direct => {
            let kernel = DirectGaussian::new(&params);
            spread_samples(x, c, df, &kernel)
        }
    };
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "nufft1d: n={} m={} mr={} sign={} gridding={:?}",
        x.len(),
        m,
        params.mr,
        sign,
        cfg.gridding
    );

    if sign < 0 {
        fft.forward(&mut grid);
        let scale = T::from_f64(1.0 / params.mr as f64);
        for z in grid.iter_mut() {
            *z = z.scale(scale);
        }
    } else {
        // Inverse carries its own 1/mr normalization.
        fft.inverse(&mut grid);
    }

    Ok(deconvolve(&grid, m, params.tau))
}

/// [`nufft1d_with`] wired to the bundled [`RustFftGrid`] backend.
///
/// [`RustFftGrid`]: crate::transform::RustFftGrid
#[cfg(feature = "std")]
pub fn nufft1d<T: Float + Send + Sync>(
    x: &[T],
    c: &[Complex<T>],
    m: usize,
    cfg: &NufftConfig,
) -> Result<Vec<Complex<T>>, NufftError>
where
    crate::transform::RustFftGrid: GridFft<T>,
{
    nufft1d_with(x, c, m, cfg, &crate::transform::RustFftGrid)
}
