use nufft::nufftfreqs;

#[test]
fn even_count_is_asymmetric() {
    assert_eq!(nufftfreqs(4, 1.0), vec![-2.0, -1.0, 0.0, 1.0]);
}

#[test]
fn odd_count_is_symmetric() {
    assert_eq!(nufftfreqs(5, 1.0), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn df_scales_every_bin() {
    assert_eq!(nufftfreqs(4, 0.5), vec![-1.0, -0.5, 0.0, 0.5]);
}

#[test]
fn zero_bins_is_empty() {
    assert!(nufftfreqs(0, 1.0).is_empty());
}
