use std::cmp::Ordering;

use exact_rational::{contains, parse_rational, BigInt, Rational};
use num_rational::BigRational;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_2a7e)
}

// Un-normalized, non-zero denominator of either sign.
fn random_raw(rng: &mut StdRng) -> Rational {
    let numer: i64 = rng.gen_range(-120..=120);
    let mut denom: i64 = rng.gen_range(1..=60);
    if rng.gen_bool(0.3) {
        denom = -denom;
    }
    Rational::from_parts(BigInt::from(numer), BigInt::from(denom))
}

fn random_normalized(rng: &mut StdRng) -> Rational {
    random_raw(rng).normalize().expect("normalize")
}

fn oracle(value: &Rational) -> BigRational {
    BigRational::try_from(value).expect("non-zero denominator")
}

#[test]
fn normalized_operands_sum_like_raw_ones() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_raw(&mut rng);
        let b = random_raw(&mut rng);
        let direct = a.checked_add(&b).expect("add");
        let via_normalized = a
            .normalize()
            .and_then(|a| b.normalize().and_then(|b| a.checked_add(&b)))
            .expect("add");
        assert_eq!(direct.compare_to(&via_normalized).expect("compare"), Ordering::Equal);
    }
}

#[test]
fn normalization_invariants() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let raw = random_raw(&mut rng);
        let once = raw.normalize().expect("normalize");
        assert_eq!(once.normalize().expect("normalize"), once);
        assert!(once.value_eq(&raw).expect("compare"));
        if !raw.is_zero() {
            assert!(once.is_normalized(), "{raw} -> {once}");
        }
    }
}

#[test]
fn display_round_trips() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let value = random_normalized(&mut rng);
        let reparsed = parse_rational(&value.to_string()).expect("parse");
        assert!(reparsed.value_eq(&value).expect("compare"));
        if value.is_normalized() {
            assert_eq!(reparsed, value);
        }
    }
}

#[test]
fn arithmetic_agrees_with_big_rational() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_raw(&mut rng);
        let b = random_raw(&mut rng);
        let (x, y) = (oracle(&a), oracle(&b));
        assert_eq!(oracle(&a.checked_add(&b).expect("add")), &x + &y);
        assert_eq!(oracle(&a.checked_sub(&b).expect("sub")), &x - &y);
        assert_eq!(oracle(&a.checked_mul(&b).expect("mul")), &x * &y);
        if !b.is_zero() {
            assert_eq!(oracle(&a.checked_div(&b).expect("div")), &x / &y);
        }
        assert_eq!(a.compare_to(&b).expect("compare"), x.cmp(&y));
    }
}

#[test]
fn identities() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_raw(&mut rng);
        assert!(a.checked_add(&-&a).expect("add").is_zero());
        assert!(a.checked_mul(&Rational::one()).expect("mul").value_eq(&a).expect("compare"));
        if !a.is_zero() {
            let quotient = a.checked_div(&a).expect("div");
            assert!(quotient.value_eq(&Rational::one()).expect("compare"));
        }
    }
}

#[test]
fn comparison_is_a_total_order() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_normalized(&mut rng);
        let b = random_normalized(&mut rng);
        let c = random_normalized(&mut rng);
        let ab = a.compare_to(&b).expect("compare");
        assert_eq!(b.compare_to(&a).expect("compare"), ab.reverse());
        let bc = b.compare_to(&c).expect("compare");
        if ab != Ordering::Greater && bc != Ordering::Greater {
            assert_ne!(a.compare_to(&c).expect("compare"), Ordering::Greater);
        }
    }
}

#[test]
fn interval_bounds() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let lo = random_normalized(&mut rng);
        let hi = random_normalized(&mut rng);
        let interval = lo.clone().range_to(hi.clone());
        let lo_inside = contains(&interval, &lo).expect("contains");
        assert_eq!(lo_inside, lo.compare_to(&hi).expect("compare") == Ordering::Less);
        assert!(!contains(&interval, &hi).expect("contains"));
    }
}
