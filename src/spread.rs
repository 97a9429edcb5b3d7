//! Gaussian-kernel gridding: scatters each non-uniform sample onto a small
//! window of the periodic oversampled grid.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::num::{Complex, Float};
use crate::params::SpreadParams;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many samples the partition-and-reduce path costs more than
/// it saves; spread sequentially instead.
#[cfg(feature = "parallel")]
const PARALLEL_SPREAD_MIN_SAMPLES: usize = 4096;

/// Gridding strategy selector exposed through the public configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gridding {
    /// Greengard & Lee (2004) incremental evaluation; default.
    #[default]
    Incremental,
    /// Direct exponential evaluation of every kernel weight.
    Direct,
}

/// One gridding strategy: distributes a single sample onto the periodic
/// grid. Implementations must produce identical weights up to
/// floating-point rounding; they differ only in how many transcendental
/// calls they spend per sample.
pub trait SpreadKernel<T: Float> {
    /// Length of the oversampled grid this kernel was built for.
    fn grid_len(&self) -> usize;
    /// Accumulate the sample at wrapped location `xmod` (in `[0, 2*pi)`)
    /// with value `value` into `grid`. Indices wrap modulo the grid
    /// length; accumulation is a plain scatter-add.
    fn spread_sample(&self, xmod: T, value: Complex<T>, grid: &mut [Complex<T>]);
}

/// Naive strategy: one `exp` per (sample, offset) pair.
pub struct DirectGaussian<T: Float> {
    msp: i64,
    mr: i64,
    hx: T,
    inv_4tau: T,
}

impl<T: Float> DirectGaussian<T> {
    pub fn new(params: &SpreadParams) -> Self {
        Self {
            msp: params.msp as i64,
            mr: params.mr as i64,
            hx: T::from_f64(params.cell_width()),
            inv_4tau: T::from_f64(0.25 / params.tau),
        }
    }
}

impl<T: Float> SpreadKernel<T> for DirectGaussian<T> {
    fn grid_len(&self) -> usize {
        self.mr as usize
    }

    fn spread_sample(&self, xmod: T, value: Complex<T>, grid: &mut [Complex<T>]) {
        let m0 = (xmod / self.hx).floor().to_f64() as i64 + 1;
        for j in -self.msp..self.msp {
            let cell = m0 + j;
            let d = xmod - self.hx * T::from_f64(cell as f64);
            let w = (-(d * d) * self.inv_4tau).exp();
            let idx = cell.rem_euclid(self.mr) as usize;
            grid[idx] = grid[idx] + value.scale(w);
        }
    }
}

/// Fast strategy: the Gaussian factors into a per-sample constant `E1`, a
/// per-offset power `step^j` carried as a running product, and a
/// sample-independent table `E3`. Roughly halves the transcendental calls
/// of [`DirectGaussian`].
pub struct IncrementalGaussian<T: Float> {
    msp: i64,
    mr: i64,
    hx: T,
    inv_4tau: T,
    /// `pi / (mr * tau)`; `step = exp(diff * step_scale)`.
    step_scale: T,
    /// `exp(-(pi*j/mr)^2 / tau)` for offsets `j = -msp..msp`, indexed by
    /// `j + msp`.
    e3: Vec<T>,
}

impl<T: Float> IncrementalGaussian<T> {
    pub fn new(params: &SpreadParams) -> Self {
        let pi = core::f64::consts::PI;
        let msp = params.msp as i64;
        let mr = params.mr as f64;
        let mut e3 = Vec::with_capacity(2 * params.msp);
        for t in 0..2 * params.msp {
            let j = t as f64 - params.msp as f64;
            let arg = pi * j / mr;
            e3.push(T::from_f64(libm::exp(-(arg * arg) / params.tau)));
        }
        Self {
            msp,
            mr: params.mr as i64,
            hx: T::from_f64(params.cell_width()),
            inv_4tau: T::from_f64(0.25 / params.tau),
            step_scale: T::from_f64(pi / (mr * params.tau)),
            e3,
        }
    }
}

impl<T: Float> SpreadKernel<T> for IncrementalGaussian<T> {
    fn grid_len(&self) -> usize {
        self.mr as usize
    }

    fn spread_sample(&self, xmod: T, value: Complex<T>, grid: &mut [Complex<T>]) {
        let m0 = (xmod / self.hx).floor().to_f64() as i64 + 1;
        // diff is in (-hx, 0], so step and its reciprocal stay O(1).
        let diff = xmod - self.hx * T::from_f64(m0 as f64);
        let e1 = (-(diff * diff) * self.inv_4tau).exp();
        let step = (diff * self.step_scale).exp();
        let base = value.scale(e1);

        // Center and positive offsets: weight step^j * e3[msp + j].
        let mut p = T::one();
        for j in 0..self.msp {
            let w = p * self.e3[(self.msp + j) as usize];
            let idx = (m0 + j).rem_euclid(self.mr) as usize;
            grid[idx] = grid[idx] + base.scale(w);
            p = p * step;
        }
        // Negative offsets: weight step^{-j} * e3[msp - j].
        let inv_step = T::one() / step;
        let mut q = T::one();
        for j in 1..=self.msp {
            q = q * inv_step;
            let w = q * self.e3[(self.msp - j) as usize];
            let idx = (m0 - j).rem_euclid(self.mr) as usize;
            grid[idx] = grid[idx] + base.scale(w);
        }
    }
}

fn spread_sequential<T: Float, K: SpreadKernel<T>>(
    x: &[T],
    c: &[Complex<T>],
    df: T,
    kernel: &K,
) -> Vec<Complex<T>> {
    let two_pi = T::from_f64(core::f64::consts::TAU);
    let mut grid = vec![Complex::zero(); kernel.grid_len()];
    for (&xi, &ci) in x.iter().zip(c.iter()) {
        let xmod = (df * xi).rem_euclid(two_pi);
        kernel.spread_sample(xmod, ci, &mut grid);
    }
    grid
}

/// Scatter every sample onto a fresh oversampled grid and return it.
/// Summation order does not affect the contract; only the usual
/// floating-point reassociation noise differs between execution orders.
#[cfg(not(feature = "parallel"))]
pub fn spread_samples<T: Float, K: SpreadKernel<T>>(
    x: &[T],
    c: &[Complex<T>],
    df: T,
    kernel: &K,
) -> Vec<Complex<T>> {
    spread_sequential(x, c, df, kernel)
}

/// Scatter every sample onto a fresh oversampled grid and return it.
///
/// Large inputs are partitioned across the rayon pool; each worker fills
/// a private grid and the grids are reduced elementwise, so no cell is
/// ever written concurrently.
#[cfg(feature = "parallel")]
pub fn spread_samples<T, K>(x: &[T], c: &[Complex<T>], df: T, kernel: &K) -> Vec<Complex<T>>
where
    T: Float + Send + Sync,
    K: SpreadKernel<T> + Sync,
{
    if x.len() < PARALLEL_SPREAD_MIN_SAMPLES {
        return spread_sequential(x, c, df, kernel);
    }
    let two_pi = T::from_f64(core::f64::consts::TAU);
    let n = kernel.grid_len();
    let threads = rayon::current_num_threads().max(1);
    let chunk = x.len().div_ceil(threads).max(1);
    x.par_chunks(chunk)
        .zip(c.par_chunks(chunk))
        .map(|(xs, cs)| {
            let mut local = vec![Complex::zero(); n];
            for (&xi, &ci) in xs.iter().zip(cs.iter()) {
                let xmod = (df * xi).rem_euclid(two_pi);
                kernel.spread_sample(xmod, ci, &mut local);
            }
            local
        })
        .reduce(
            || vec![Complex::zero(); n],
            |mut acc, part| {
                for (a, b) in acc.iter_mut().zip(part.into_iter()) {
                    *a = *a + b;
                }
                acc
            },
        )
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grids_close(a: &[Complex<f64>], b: &[Complex<f64>], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (za, zb) in a.iter().zip(b.iter()) {
            assert!(
                (za.re - zb.re).abs() < tol && (za.im - zb.im).abs() < tol,
                "{:?} vs {:?}",
                za,
                zb
            );
        }
    }

    #[test]
    fn test_kernel_parity_single_sample() {
        let params = SpreadParams::new(1e-9, 8).unwrap();
        let direct = DirectGaussian::<f64>::new(&params);
        let fast = IncrementalGaussian::<f64>::new(&params);
        let x = [1.2345];
        let c = [Complex::new(0.7, -0.3)];
        let a = spread_samples(&x, &c, 1.0, &direct);
        let b = spread_samples(&x, &c, 1.0, &fast);
        grids_close(&a, &b, 1e-12);
    }

    #[test]
    fn test_spread_wraps_near_two_pi() {
        // A sample in the last cell must spill onto the front of the grid.
        let params = SpreadParams::new(1e-6, 8).unwrap();
        let kernel = IncrementalGaussian::<f64>::new(&params);
        let x = [2.0 * core::f64::consts::PI - 1e-3];
        let c = [Complex::new(1.0, 0.0)];
        let grid = spread_samples(&x, &c, 1.0, &kernel);
        let front: f64 = grid[..params.msp].iter().map(|z| z.re.abs()).sum();
        assert!(front > 0.0);
    }

    #[test]
    fn test_empty_input_yields_zero_grid() {
        let params = SpreadParams::new(1e-6, 8).unwrap();
        let kernel = DirectGaussian::<f64>::new(&params);
        let grid = spread_samples(&[], &[], 1.0, &kernel);
        assert_eq!(grid.len(), params.mr);
        assert!(grid.iter().all(|z| z.re == 0.0 && z.im == 0.0));
    }

    proptest! {
        #[test]
        fn prop_strategies_agree(
            ref xs in proptest::collection::vec(-100.0f64..100.0, 1..16),
            df in 0.1f64..4.0,
        ) {
            let params = SpreadParams::new(1e-9, 8).unwrap();
            let direct = DirectGaussian::<f64>::new(&params);
            let fast = IncrementalGaussian::<f64>::new(&params);
            let c: Vec<Complex<f64>> =
                (0..xs.len()).map(|i| Complex::new(1.0, i as f64 * 0.25)).collect();
            let a = spread_samples(xs, &c, df, &direct);
            let b = spread_samples(xs, &c, df, &fast);
            for (za, zb) in a.iter().zip(b.iter()) {
                prop_assert!((za.re - zb.re).abs() < 1e-9);
                prop_assert!((za.im - zb.im).abs() < 1e-9);
            }
        }
    }
}
