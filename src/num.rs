//! Float abstraction and complex arithmetic shared by every pipeline stage.
//! Transcendentals go through `libm` so the crate stays honest under
//! `no_std`.

// Minimal float trait for the generic transform pipeline (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn sin_cos(self) -> (Self, Self);
    fn exp(self) -> Self;
    fn floor(self) -> Self;
    fn pi() -> Self;
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
    /// Euclidean remainder: result lies in `[0, rhs)` for positive `rhs`
    /// (up to rounding at the boundary, which the periodic grid absorbs).
    #[inline(always)]
    fn rem_euclid(self, rhs: Self) -> Self {
        let r = self - (self / rhs).floor() * rhs;
        if r < Self::zero() {
            r + rhs
        } else {
            r
        }
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn exp(self) -> Self {
        libm::expf(self)
    }
    fn floor(self) -> Self {
        libm::floorf(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn exp(self) -> Self {
        libm::exp(self)
    }
    fn floor(self) -> Self {
        libm::floor(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// `e^{i·theta}` on the unit circle.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// Multiply by a real scalar.
    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a.mul(b);
        assert!((c.re - (1.0 * 3.0 - (-2.0) * 4.0)).abs() < 1e-12);
        assert!((c.im - (1.0 * 4.0 + (-2.0) * 3.0)).abs() < 1e-12);
        let n = -a;
        assert_eq!(n.re, -1.0);
        assert_eq!(n.im, 2.0);
        let e = Complex64::expi(<f64 as Float>::pi());
        assert!((e.re + 1.0).abs() < 1e-12);
        assert!(e.im.abs() < 1e-12);
    }

    #[test]
    fn test_rem_euclid_wraps_negative() {
        let p = 2.0 * core::f64::consts::PI;
        let r = (-1.0f64).rem_euclid(p);
        assert!(r >= 0.0 && r < p);
        assert!((r - (p - 1.0)).abs() < 1e-12);
    }
}
