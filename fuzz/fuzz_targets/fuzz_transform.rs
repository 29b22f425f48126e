#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_transform::{forward, inverse, Complex64};

fuzz_target!(|data: &[u8]| {
    // One byte per real sample; any length is accepted so that invalid
    // lengths exercise the error path.
    let seq: Vec<Complex64> = data
        .iter()
        .take(1024)
        .map(|&b| Complex64::new(f64::from(b) - 128.0, 0.0))
        .collect();

    match forward(&seq) {
        Ok(spectrum) => {
            assert_eq!(spectrum.len(), seq.len());
            let back = inverse(&spectrum).expect("valid length must invert");
            for (i, (b, s)) in back.iter().zip(&seq).enumerate() {
                assert!((b.re - s.re).abs() < 1e-9, "re mismatch at {i}: {b} vs {s}");
                assert!(b.im.abs() < 1e-9, "im noise at {i}: {b}");
            }
        }
        Err(_) => assert!(seq.is_empty() || !seq.len().is_power_of_two()),
    }
});
