//! Accuracy-driven spreading parameters, after Dutt & Rokhlin (1993).
//! no_std + alloc compatible

use crate::nufft::NufftError;

/// Lower bound (exclusive) of the supported accuracy range.
pub const EPS_MIN: f64 = 1e-33;
/// Upper bound (exclusive) of the supported accuracy range.
pub const EPS_MAX: f64 = 1e-1;
/// Tolerance above which 2x oversampling is accurate enough; below it the
/// grid is stretched to 3x. Calibrated cutoff from the reference
/// algorithm, kept verbatim.
const RATIO_CUTOFF: f64 = 1e-11;

/// Constants derived once per call from the accuracy target `eps` and the
/// output size `m`. Read-only for the remainder of the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadParams {
    /// Oversampling ratio, 2 or 3.
    pub ratio: usize,
    /// Gaussian kernel half-width in grid cells; each sample touches
    /// `2 * msp` cells.
    pub msp: usize,
    /// Oversampled grid length, `max(ratio * m, 2 * msp)`.
    pub mr: usize,
    pub lambda: f64,
    /// Gaussian time constant `pi * lambda / m^2`.
    pub tau: f64,
}

impl SpreadParams {
    /// Derive kernel width, grid size, and time constant from `eps` and
    /// the requested output size `m`.
    ///
    /// Fails with [`NufftError::InvalidParameter`] when `eps` lies outside
    /// `(1e-33, 1e-1)` or `m` is zero. The error calibration is tightest
    /// in the `1e-12 ~ 1e-6` range.
    pub fn new(eps: f64, m: usize) -> Result<Self, NufftError> {
        if m == 0 {
            return Err(NufftError::InvalidParameter);
        }
        // NaN fails this check too.
        if !(eps > EPS_MIN && eps < EPS_MAX) {
            return Err(NufftError::InvalidParameter);
        }
        let ratio = if eps > RATIO_CUTOFF { 2 } else { 3 };
        let r = ratio as f64;
        let msp =
            libm::floor(-libm::log(eps) / (core::f64::consts::PI * (r - 1.0) / (r - 0.5)) + 0.5)
                as usize;
        let mr = core::cmp::max(ratio * m, 2 * msp);
        let lambda = msp as f64 / (r * (r - 0.5));
        let tau = core::f64::consts::PI * lambda / (m as f64 * m as f64);
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "spread params: eps={:e} m={} ratio={} msp={} mr={} tau={:e}",
            eps,
            m,
            ratio,
            msp,
            mr,
            tau
        );
        Ok(Self {
            ratio,
            msp,
            mr,
            lambda,
            tau,
        })
    }

    /// Width of one oversampled grid cell, `2*pi / mr`.
    #[inline]
    pub fn cell_width(&self) -> f64 {
        2.0 * core::f64::consts::PI / self.mr as f64
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_cutoff() {
        assert_eq!(SpreadParams::new(1e-6, 16).unwrap().ratio, 2);
        assert_eq!(SpreadParams::new(1e-12, 16).unwrap().ratio, 3);
    }

    #[test]
    fn test_grid_contains_kernel_support() {
        // Tiny m: the 2*msp bound must win over ratio*m.
        let p = SpreadParams::new(1e-15, 1).unwrap();
        assert!(p.mr >= 2 * p.msp);
        assert_eq!(p.mr, 2 * p.msp);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(SpreadParams::new(1.0, 16).is_err());
        assert!(SpreadParams::new(1e-1, 16).is_err());
        assert!(SpreadParams::new(1e-33, 16).is_err());
        assert!(SpreadParams::new(f64::NAN, 16).is_err());
        assert!(SpreadParams::new(1e-15, 0).is_err());
    }
}
