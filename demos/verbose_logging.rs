//! Demonstrates enabling verbose logging for nufft.
use nufft::{nufft1d, Complex64, NufftConfig};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let x = vec![0.1, 1.7, 2.9, 4.2];
    let c = vec![Complex64::new(1.0, 0.0); 4];
    let spectrum = nufft1d(&x, &c, 8, &NufftConfig::default()).unwrap();
    println!("{} output bins", spectrum.len());
}
