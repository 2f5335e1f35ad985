#![no_main]

use exact_rational::{BigInt, Rational};
use libfuzzer_sys::fuzz_target;

fn split(data: &[u8]) -> Option<(Rational, Rational)> {
    if data.len() < 4 {
        return None;
    }
    let quarter = data.len() / 4;
    let part = |index: usize| BigInt::from_signed_bytes_le(&data[index * quarter..(index + 1) * quarter]);
    Some((
        Rational::from_parts(part(0), part(1)),
        Rational::from_parts(part(2), part(3)),
    ))
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 {
        return;
    }
    let Some((a, b)) = split(data) else {
        return;
    };
    // Zero denominators must surface as errors, never as panics.
    let _ = a.compare_to(&b);
    let _ = a.checked_sub(&b);
    let _ = a.checked_div(&b);
    let Ok(sum) = a.checked_add(&b) else {
        return;
    };
    if !sum.is_zero() {
        assert!(sum.is_normalized());
    }
    let Ok(product) = a.checked_mul(&b) else {
        return;
    };
    if !product.is_zero() {
        assert!(product.is_normalized());
    }
});
