#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_core::{FftMultiplier, Multiplier, Polynomial, SchoolbookMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte splits the rest into two operands, capped at 16 coefficients
    // each; coefficients are small integers.
    let split = usize::from(data[0]) % data.len();
    let rest = &data[1..];
    let (a, b) = rest.split_at(split.min(rest.len()));
    let to_poly = |bytes: &[u8]| -> Polynomial<f64> {
        bytes
            .iter()
            .take(16)
            .map(|&x| f64::from(x % 21) - 10.0)
            .collect()
    };
    let (pa, pb) = (to_poly(a), to_poly(b));

    let fft = FftMultiplier::default()
        .multiply(&pa, &pb)
        .expect("non-empty operands always multiply");
    let naive = SchoolbookMultiplier::new()
        .multiply(&pa, &pb)
        .expect("schoolbook never fails");

    for (i, &want) in naive.coefficients().iter().enumerate() {
        let got = fft.coefficient(i);
        assert!((got - want).abs() < 1e-6, "coefficient {i}: FFT {got} != Schoolbook {want}");
    }
    for &v in &fft.coefficients()[naive.size()..] {
        assert_eq!(v, 0.0, "padding noise leaked");
    }
});
