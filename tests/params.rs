use nufft::params::SpreadParams;
use nufft::NufftError;

#[test]
fn ratio_two_above_cutoff() {
    let p = SpreadParams::new(1e-6, 32).unwrap();
    assert_eq!(p.ratio, 2);
    // floor(-ln(1e-6) / (pi/1.5) + 0.5) = 7
    assert_eq!(p.msp, 7);
    assert_eq!(p.mr, 64);
}

#[test]
fn ratio_three_below_cutoff() {
    let p = SpreadParams::new(1e-15, 32).unwrap();
    assert_eq!(p.ratio, 3);
    // floor(-ln(1e-15) / (2*pi/2.5) + 0.5) = 14
    assert_eq!(p.msp, 14);
    assert_eq!(p.mr, 96);
}

#[test]
fn grid_always_contains_kernel_support() {
    for &(eps, m) in &[(1e-6, 1usize), (1e-15, 1), (1e-30, 2)] {
        let p = SpreadParams::new(eps, m).unwrap();
        assert!(p.mr >= 2 * p.msp, "eps={eps} m={m}");
        assert!(p.mr >= p.ratio * m);
        assert!(p.tau > 0.0);
        assert!(p.msp >= 1);
    }
}

#[test]
fn kernel_width_grows_with_precision() {
    let loose = SpreadParams::new(1e-4, 32).unwrap();
    let tight = SpreadParams::new(1e-10, 32).unwrap();
    assert!(tight.msp > loose.msp);
}

#[test]
fn bounds_are_exclusive() {
    assert_eq!(
        SpreadParams::new(1e-1, 32).unwrap_err(),
        NufftError::InvalidParameter
    );
    assert_eq!(
        SpreadParams::new(1e-33, 32).unwrap_err(),
        NufftError::InvalidParameter
    );
    assert!(SpreadParams::new(9.9e-2, 32).is_ok());
    assert!(SpreadParams::new(1.1e-33, 32).is_ok());
}
