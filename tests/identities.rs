//! Algebraic identities, cross-checked against native `i128` arithmetic on
//! randomly drawn operands. `i128` division truncates toward zero and its
//! remainder takes the dividend's sign, the same conventions `BigInt` uses,
//! so the native operators are a valid oracle.

use big_int::{BigInt, BigIntTestResult};
use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

fn big(n: i128) -> BigInt {
    BigInt::from(n)
}

#[test]
fn add_sub_mul_match_native() {
    let uniform: Uniform<i64> = Uniform::new_inclusive(i64::MIN, i64::MAX);
    let mut rng = thread_rng();
    for _ in 0..1000 {
        let a = uniform.sample(&mut rng) as i128;
        let b = uniform.sample(&mut rng) as i128;
        assert_eq!(big(a) + big(b), big(a + b), "{} + {}", a, b);
        assert_eq!(big(a) - big(b), big(a - b), "{} - {}", a, b);
        assert_eq!(big(a) * big(b), big(a * b), "{} * {}", a, b);
    }
}

#[test]
fn div_rem_match_native() {
    let uniform: Uniform<i64> = Uniform::new_inclusive(i64::MIN, i64::MAX);
    let small: Uniform<i64> = Uniform::new_inclusive(-1000, 1000);
    let mut rng = thread_rng();
    for _ in 0..1000 {
        let a = uniform.sample(&mut rng) as i128;
        let b = match small.sample(&mut rng) {
            0 => continue,
            n => n as i128,
        };
        let (q, r) = big(a).div_rem(&big(b)).unwrap();
        assert_eq!(q, big(a / b), "{} / {}", a, b);
        assert_eq!(r, big(a % b), "{} % {}", a, b);
        // the division identity ties quotient and remainder back together
        assert_eq!(q * big(b) + r, big(a));
    }
}

#[test]
fn add_commutes_and_associates() {
    let uniform: Uniform<i64> = Uniform::new_inclusive(i64::MIN, i64::MAX);
    let mut rng = thread_rng();
    for _ in 0..200 {
        let a = big(uniform.sample(&mut rng) as i128);
        let b = big(uniform.sample(&mut rng) as i128);
        let c = big(uniform.sample(&mut rng) as i128);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&a * &b, &b * &a);
    }
}

#[test]
fn neg_is_an_involution() {
    let uniform: Uniform<i64> = Uniform::new_inclusive(i64::MIN, i64::MAX);
    let mut rng = thread_rng();
    for _ in 0..200 {
        let a = big(uniform.sample(&mut rng) as i128);
        assert_eq!(-(-a.clone()), a);
        assert_eq!(&a + &(-a.clone()), BigInt::zero());
        assert_eq!(&a - &a, BigInt::zero());
    }
}

#[test]
fn string_roundtrip() {
    let uniform: Uniform<i64> = Uniform::new_inclusive(i64::MIN, i64::MAX);
    let mut rng = thread_rng();
    for _ in 0..200 {
        let n = uniform.sample(&mut rng);
        let parsed: BigInt = n.to_string().parse().unwrap();
        assert_eq!(parsed, BigInt::from(n));
        assert_eq!(parsed.to_string(), n.to_string());
    }
}

#[test]
fn pow_matches_repeated_multiplication() -> BigIntTestResult {
    let base = BigInt::from(-3);
    let mut expected = BigInt::one();
    for k in 0u32..=12 {
        assert_eq!(base.pow(k)?, expected, "(-3)^{}", k);
        expected = &expected * &base;
    }
    Ok(())
}

#[test]
fn pow_splits_over_exponent_sum() -> BigIntTestResult {
    let base = BigInt::from(7);
    // 7^(a+b) == 7^a * 7^b
    for (a, b) in [(0u32, 5u32), (3, 4), (10, 13), (25, 25)] {
        let lhs = base.pow(a + b)?;
        let rhs = &base.pow(a)? * &base.pow(b)?;
        assert_eq!(lhs, rhs, "7^({}+{})", a, b);
    }
    Ok(())
}

#[test]
fn ordering_matches_native() {
    let uniform: Uniform<i64> = Uniform::new_inclusive(i64::MIN, i64::MAX);
    let mut rng = thread_rng();
    for _ in 0..500 {
        let a = uniform.sample(&mut rng);
        let b = uniform.sample(&mut rng);
        assert_eq!(BigInt::from(a).cmp(&BigInt::from(b)), a.cmp(&b), "{} vs {}", a, b);
    }
}
