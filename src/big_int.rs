//! # BigInt
//! Immutable arbitrary-precision signed integers stored as decimal digits.
//! A value is a sign plus a most-significant-first digit sequence with no
//! leading zeros; zero is always `[0]` with the `Zero` sign.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a.pow(2) = {}", a.pow(2u32).unwrap());
//! ```

use std::fmt::Display;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::big_int_cache::*;
use crate::error::{BigIntError, BigIntResult};

macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            $vec
                .into_iter()
                .skip_while(|x| *x == 0)
                .collect()
        }
    };
}

/// Sign of a [`BigInt`]. Orders as `Negative < Zero < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Swaps `Positive` and `Negative`; `Zero` is its own negation.
    pub fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// The magnitude is a base-10 digit vector, most significant digit first.
/// Every constructor and operation returns a canonical value, so derived
/// equality and hashing agree with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<u8>,
}

// construction
impl BigInt {
    /// Builds a value without normalizing. Callers must pass a canonical
    /// sign and magnitude.
    pub(crate) fn from_raw(sign: Sign, digits: Vec<u8>) -> Self {
        BigInt { sign, digits }
    }

    /// The one normalizing constructor. Strips leading zero digits and
    /// collapses an all-zero magnitude to the canonical zero.
    fn from_sign_digits(sign: Sign, digits: Vec<u8>) -> Self {
        let digits: Vec<u8> = skip_leading_zero!(digits);
        if digits.is_empty() {
            BigInt { sign: Sign::Zero, digits: vec![0] }
        } else {
            BigInt { sign, digits }
        }
    }

    pub fn zero() -> BigInt {
        ZERO.clone()
    }

    pub fn one() -> BigInt {
        ONE.clone()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        ZERO.clone()
    }
}

// parsing
impl BigInt {
    /// Parses an optional leading `-` followed by one or more ASCII decimal
    /// digits. `"-0"` and zero-padded inputs normalize to canonical form.
    pub fn from_decimal_str(text: &str) -> BigIntResult<BigInt> {
        let (negative, num_part) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if num_part.is_empty() {
            return Err(BigIntError::InvalidFormat(text.to_string()));
        }
        let mut digits = Vec::with_capacity(num_part.len());
        for byte in num_part.bytes() {
            match byte {
                b'0'..=b'9' => digits.push(byte - b'0'),
                _ => return Err(BigIntError::InvalidFormat(text.to_string())),
            }
        }
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Ok(BigInt::from_sign_digits(sign, digits))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal_str(s)
    }
}

impl From<&str> for BigInt {
    /// Panics on invalid input. Use [`BigInt::from_decimal_str`] to handle
    /// bad text without panicking.
    fn from(val: &str) -> Self {
        match BigInt::from_decimal_str(val) {
            Ok(num) => num,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
        impl From<$u> for BigInt {
            fn from(val: $u) -> Self {
                BigInt::value_of(val as u128, Sign::Positive)
            }
        }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
        impl From<$i> for BigInt {
            fn from(val: $i) -> Self {
                if val < 0 {
                    BigInt::value_of(val.unsigned_abs() as u128, Sign::Negative)
                } else {
                    BigInt::value_of(val as u128, Sign::Positive)
                }
            }
        }
    )*
    };
}

impl_unsigned_to_big_int!(u8, u16, u32, u64, usize, u128);
impl_signed_to_big_int!(i8, i16, i32, i64, isize, i128);

impl BigInt {
    fn value_of(val: u128, sign: Sign) -> BigInt {
        if val == 0 {
            return ZERO.clone();
        }
        if val <= MAX_CONSTANT as u128 {
            return match sign {
                Sign::Negative => NEG_CACHE[val as usize].clone(),
                _ => POS_CACHE[val as usize].clone(),
            };
        }
        let digits = val.to_string().bytes().map(|b| b - b'0').collect();
        BigInt { sign, digits }
    }
}

// printing
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.digits.len() + 1);
        if self.sign == Sign::Negative {
            out.push('-');
        }
        for &digit in &self.digits {
            out.push((b'0' + digit) as char);
        }
        f.write_str(&out)
    }
}

// queries
impl BigInt {
    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Parity of the magnitude, read off the last decimal digit.
    pub fn is_even(&self) -> bool {
        self.digits[self.digits.len() - 1] % 2 == 0
    }

    pub fn abs(&self) -> BigInt {
        match self.sign {
            Sign::Negative => BigInt { sign: Sign::Positive, digits: self.digits.clone() },
            _ => self.clone(),
        }
    }
}

// comparison
impl BigInt {
    /// Compares two canonical magnitudes: a longer digit sequence is larger,
    /// equal lengths compare digit-by-digit from the most significant end.
    fn cmp_mag(a: &[u8], b: &[u8]) -> Ordering {
        match a.len().cmp(&b.len()) {
            Ordering::Equal => a.cmp(b),
            ord => ord,
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => BigInt::cmp_mag(&self.digits, &other.digits),
            // both negative: the larger magnitude is the smaller number
            Sign::Negative => BigInt::cmp_mag(&self.digits, &other.digits).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// magnitude arithmetic, least significant digit last
impl BigInt {
    fn add_mag(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
        let mut carry = 0;
        let mut i = a.len();
        let mut j = b.len();
        while i > 0 || j > 0 || carry > 0 {
            let mut sum = carry;
            if i > 0 {
                i -= 1;
                sum += a[i];
            }
            if j > 0 {
                j -= 1;
                sum += b[j];
            }
            result.push(sum % 10);
            carry = sum / 10;
        }
        result.reverse();
        result
    }

    /// Schoolbook subtraction. Callers guarantee `big >= little` in
    /// magnitude, so the final borrow is always zero.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0i8;
        let mut j = little.len();
        for i in (0..big.len()).rev() {
            let mut diff = big[i] as i8 - borrow;
            if j > 0 {
                j -= 1;
                diff -= little[j] as i8;
            }
            if diff < 0 {
                result.push((diff + 10) as u8);
                borrow = 1;
            } else {
                result.push(diff as u8);
                borrow = 0;
            }
        }
        result.reverse();
        result
    }

    /// Long multiplication into an accumulator of `a.len() + b.len()` cells.
    /// The product of digits at positions `i` and `j` lands at `i + j + 1`
    /// with its carry folded into `i + j`.
    fn mul_mag(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut acc = vec![0u32; a.len() + b.len()];
        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                let product = a[i] as u32 * b[j] as u32 + acc[i + j + 1];
                acc[i + j + 1] = product % 10;
                acc[i + j] += product / 10;
            }
        }
        acc.into_iter().map(|cell| cell as u8).collect()
    }

    fn trim_leading(mag: &mut Vec<u8>) {
        while mag.len() > 1 && mag[0] == 0 {
            mag.remove(0);
        }
    }

    /// Per-position long division: bring down one dividend digit at a time
    /// and subtract the divisor until the running remainder is smaller than
    /// it; the subtraction count is the quotient digit for that position.
    /// The remainder is re-trimmed after every step so the length-first
    /// magnitude comparison stays sound.
    fn div_rem_mag(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
        if BigInt::cmp_mag(a, b) == Ordering::Less {
            return (vec![0], a.to_vec());
        }
        let mut quotient = Vec::with_capacity(a.len());
        let mut remainder: Vec<u8> = Vec::with_capacity(b.len() + 1);
        for &digit in a {
            remainder.push(digit);
            BigInt::trim_leading(&mut remainder);
            let mut count = 0;
            while BigInt::cmp_mag(&remainder, b) != Ordering::Less {
                remainder = BigInt::sub_mag(&remainder, b);
                BigInt::trim_leading(&mut remainder);
                count += 1;
            }
            quotient.push(count);
        }
        (quotient, remainder)
    }
}

// addition
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        if rhs.sign == Sign::Zero {
            return self;
        }
        if self.sign == Sign::Zero {
            return rhs;
        }
        if self.sign == rhs.sign {
            let sum = BigInt::add_mag(&self.digits, &rhs.digits);
            return BigInt::from_sign_digits(self.sign, sum);
        }
        match BigInt::cmp_mag(&self.digits, &rhs.digits) {
            Ordering::Less => {
                let diff = BigInt::sub_mag(&rhs.digits, &self.digits);
                BigInt::from_sign_digits(rhs.sign, diff)
            }
            Ordering::Equal => ZERO.clone(),
            Ordering::Greater => {
                let diff = BigInt::sub_mag(&self.digits, &rhs.digits);
                BigInt::from_sign_digits(self.sign, diff)
            }
        }
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, digits } = self;
        BigInt { sign: sign.flip(), digits }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// subtraction
impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() - rhs.clone();
    }
}

// multiplication
impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.sign == Sign::Zero || rhs.sign == Sign::Zero {
            return ZERO.clone();
        }
        let sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        BigInt::from_sign_digits(sign, BigInt::mul_mag(&self.digits, &rhs.digits))
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() * rhs.clone();
    }
}

// division and modulo
impl BigInt {
    /// Computes quotient and remainder in one pass. The quotient truncates
    /// toward zero and a nonzero remainder takes the dividend's sign.
    pub fn div_rem(&self, rhs: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        if rhs.sign == Sign::Zero {
            return Err(BigIntError::DivisionByZero);
        }
        if self.sign == Sign::Zero {
            return Ok((ZERO.clone(), ZERO.clone()));
        }
        let (q_mag, r_mag) = BigInt::div_rem_mag(&self.digits, &rhs.digits);
        let q_sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Ok((
            BigInt::from_sign_digits(q_sign, q_mag),
            BigInt::from_sign_digits(self.sign, r_mag),
        ))
    }

    pub fn checked_div(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}

impl Div for BigInt {
    type Output = BigInt;

    /// Panics on a zero divisor. Use [`BigInt::checked_div`] to handle it.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        self.clone() / rhs.clone()
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() / rhs.clone();
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    /// Panics on a zero divisor. Use [`BigInt::checked_rem`] to handle it.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(&rhs) {
            Ok(remainder) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        self.clone() % rhs.clone()
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.clone() % rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() % rhs.clone();
    }
}

// exponentiation
impl BigInt {
    /// Raises `self` to `exp` by binary exponentiation, halving the exponent
    /// with division by two and reading parity off its last decimal digit.
    ///
    /// `x.pow(0)` is `1` for every `x` including zero; negative exponents
    /// are rejected before any other case.
    pub fn pow<E: Into<BigInt>>(&self, exp: E) -> BigIntResult<BigInt> {
        let exp = exp.into();
        if exp.sign == Sign::Negative {
            return Err(BigIntError::NegativeExponent);
        }
        if exp.sign == Sign::Zero {
            return Ok(ONE.clone());
        }
        if self.sign == Sign::Zero {
            return Ok(ZERO.clone());
        }
        let mut result = ONE.clone();
        let mut base = self.clone();
        let mut exponent = exp;
        while exponent.sign != Sign::Zero {
            if !exponent.is_even() {
                result = &result * &base;
            }
            base = &base * &base;
            exponent = &exponent / &POS_CACHE[2];
        }
        Ok(result)
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ZERO.clone(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, x| acc * x)
    }
}

crate::big_int_math_impl!(u8);
crate::big_int_math_impl!(u16);
crate::big_int_math_impl!(u32);
crate::big_int_math_impl!(u64);
crate::big_int_math_impl!(usize);
crate::big_int_math_impl!(u128);
crate::big_int_math_impl!(i8);
crate::big_int_math_impl!(i16);
crate::big_int_math_impl!(i32);
crate::big_int_math_impl!(i64);
crate::big_int_math_impl!(isize);
crate::big_int_math_impl!(i128);

#[test]
fn test_parse() {
    let a: BigInt = "123".into();
    assert_eq!(a.to_string(), "123");
    assert_eq!(BigInt::from("000123").to_string(), "123");
    assert_eq!(BigInt::from("-042").to_string(), "-42");
    assert_eq!(BigInt::from("0000").to_string(), "0");
    assert_eq!(BigInt::from("-0"), BigInt::zero());
    assert_eq!(BigInt::from("-0").sign(), Sign::Zero);
    assert_eq!("123".parse::<BigInt>().unwrap(), BigInt::from(123));
    assert_eq!("-987654321".parse::<BigInt>().unwrap().to_string(), "-987654321");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        BigInt::from_decimal_str("abc"),
        Err(BigIntError::InvalidFormat("abc".to_string()))
    );
    assert!(BigInt::from_decimal_str("").is_err());
    assert!(BigInt::from_decimal_str("-").is_err());
    assert!(BigInt::from_decimal_str("12a3").is_err());
    assert!(BigInt::from_decimal_str("--5").is_err());
    assert!(BigInt::from_decimal_str("+5").is_err());
    assert!(BigInt::from_decimal_str(" 5").is_err());
    assert!(BigInt::from_decimal_str("1 000").is_err());
}

#[should_panic(expected = "invalid input format")]
#[test]
fn test_from_str_panics() {
    let _ = BigInt::from("12ab");
}

#[test]
fn test_from_int() {
    assert_eq!(BigInt::from(0u8), BigInt::zero());
    assert_eq!(BigInt::from(-1i8).to_string(), "-1");
    assert_eq!(BigInt::from(16u32).to_string(), "16");
    assert_eq!(BigInt::from(17u32).to_string(), "17");
    assert_eq!(BigInt::from(-16i64).to_string(), "-16");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(
        BigInt::from(u128::MAX).to_string(),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(
        BigInt::from(i128::MIN).to_string(),
        "-170141183460469231731687303715884105728"
    );
}

#[test]
fn test_add() {
    assert_eq!((BigInt::from("123") + BigInt::from("456")).to_string(), "579");
    assert_eq!((BigInt::from("999") + BigInt::from("1")).to_string(), "1000");
    assert_eq!((BigInt::from("-5") + BigInt::from("3")).to_string(), "-2");
    assert_eq!((BigInt::from("5") + BigInt::from("-3")).to_string(), "2");
    assert_eq!(BigInt::from("5") + BigInt::from("-5"), BigInt::zero());
    let a = BigInt::from("123456789012345678901234567890");
    let b = BigInt::from("98765432109876543210");
    assert_eq!(&a + &BigInt::zero(), a);
    assert_eq!(&a + &b, &b + &a);
    let mut c = a.clone();
    c += &b;
    assert_eq!(c.to_string(), "123456789111111111011111111100");
}

#[test]
fn test_sub() {
    assert_eq!((BigInt::from("1000") - BigInt::from("1")).to_string(), "999");
    assert_eq!((BigInt::from("1") - BigInt::from("1000")).to_string(), "-999");
    assert_eq!(BigInt::from("-5") - BigInt::from("-5"), BigInt::zero());
    assert_eq!((BigInt::from("-5") - BigInt::from("3")).to_string(), "-8");
    let mut a = BigInt::from("100");
    a -= BigInt::from("58");
    assert_eq!(a.to_string(), "42");
}

#[test]
fn test_neg_abs() {
    let a = BigInt::from(42);
    assert_eq!(-(-a.clone()), a);
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(BigInt::from(-42).abs(), a);
    assert_eq!(a.abs(), a);
    assert_eq!(BigInt::from(-42).sign(), Sign::Negative);
    assert_eq!(BigInt::zero().sign(), Sign::Zero);
    assert_eq!(a.sign(), Sign::Positive);
}

#[test]
fn test_mul() {
    assert_eq!((BigInt::from("-7") * BigInt::from("6")).to_string(), "-42");
    assert_eq!((BigInt::from("-7") * BigInt::from("-6")).to_string(), "42");
    assert_eq!(BigInt::from("12345") * BigInt::zero(), BigInt::zero());
    assert_eq!(BigInt::from("12345") * BigInt::one(), BigInt::from("12345"));
    let a: BigInt = "10000000000000000".into();
    let b: BigInt = "3001".into();
    let product: BigInt = "30010000000000000000".into();
    assert_eq!(&a * &b, product);
    assert_eq!(&b * &a, product);
    assert_eq!(
        (BigInt::from("99999999999999999999") * BigInt::from("99999999999999999999")).to_string(),
        "9999999999999999999800000000000000000001"
    );
}

#[test]
fn test_div() {
    assert_eq!((BigInt::from("17") / BigInt::from("5")).to_string(), "3");
    assert_eq!((BigInt::from("-17") / BigInt::from("5")).to_string(), "-3");
    assert_eq!((BigInt::from("17") / BigInt::from("-5")).to_string(), "-3");
    assert_eq!((BigInt::from("-17") / BigInt::from("-5")).to_string(), "3");
    assert_eq!((BigInt::from("14") / BigInt::from("7")).to_string(), "2");
    assert_eq!((BigInt::from("3") / BigInt::from("5")).to_string(), "0");
    assert_eq!(BigInt::zero() / BigInt::from("5"), BigInt::zero());
    let a = BigInt::from("10000000000000000000000000000000000");
    let b = BigInt::from("1000");
    assert_eq!((a / b).to_string(), "10000000000000000000000000000000");
}

#[test]
fn test_mod() {
    assert_eq!((BigInt::from("17") % BigInt::from("5")).to_string(), "2");
    assert_eq!((BigInt::from("-17") % BigInt::from("5")).to_string(), "-2");
    assert_eq!((BigInt::from("17") % BigInt::from("-5")).to_string(), "2");
    assert_eq!((BigInt::from("-17") % BigInt::from("-5")).to_string(), "-2");
    assert_eq!(BigInt::from("100") % BigInt::from("10"), BigInt::zero());
}

#[test]
fn test_div_rem_large() {
    let b = BigInt::from("526738495607659438721653478560954837265378495607");
    let q = BigInt::from("44532879001234567890123456789");
    let r = BigInt::from("12345678901234567890");
    let a = &(&q * &b) + &r;
    let (quotient, remainder) = a.div_rem(&b).unwrap();
    assert_eq!(quotient, q);
    assert_eq!(remainder, r);
}

#[should_panic(expected = "division by zero")]
#[test]
fn test_div_zero_panics() {
    let _ = BigInt::from("5") / BigInt::from("0");
}

#[test]
fn test_checked_div_zero() {
    let five = BigInt::from(5);
    assert_eq!(five.checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(five.checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(five.div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
}

#[test]
fn test_pow() -> crate::BigIntTestResult {
    let two = BigInt::from(2);
    assert_eq!(two.pow(BigInt::from("10"))?.to_string(), "1024");
    assert_eq!(two.pow(0u32)?, BigInt::one());
    assert_eq!(BigInt::zero().pow(0u32)?, BigInt::one());
    assert_eq!(BigInt::zero().pow(5u32)?, BigInt::zero());
    assert_eq!(BigInt::from(-2).pow(3u32)?.to_string(), "-8");
    assert_eq!(BigInt::from(-2).pow(4u32)?.to_string(), "16");
    assert_eq!(two.pow(64u32)?.to_string(), "18446744073709551616");
    assert_eq!(BigInt::one().pow(1000u32)?, BigInt::one());
    assert_eq!(BigInt::from(5).pow(-1i32), Err(BigIntError::NegativeExponent));
    assert_eq!(BigInt::zero().pow(-3i32), Err(BigIntError::NegativeExponent));
    Ok(())
}

#[test]
fn test_cmp() {
    assert!(BigInt::from(-5) < BigInt::zero());
    assert!(BigInt::zero() < BigInt::from(5));
    assert!(BigInt::from(-10) < BigInt::from(-2));
    assert!(BigInt::from(-100) < BigInt::from(-99));
    assert!(BigInt::from("100") > BigInt::from("99"));
    assert!(BigInt::from("123") < BigInt::from("124"));
    assert_eq!(BigInt::from(7).cmp(&BigInt::from(7)), Ordering::Equal);
    let a = BigInt::from(42);
    assert!(a > -a.clone());
}

#[test]
fn test_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(n: &BigInt) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    let a = BigInt::from("00123");
    let b = BigInt::from(123);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&BigInt::from("-0")), hash_of(&BigInt::zero()));
    assert_ne!(BigInt::from(123), BigInt::from(-123));
}

#[test]
fn test_mixed_int_ops() {
    let a = BigInt::from("100");
    assert_eq!((a.clone() + 5u32).to_string(), "105");
    assert_eq!((5u32 + a.clone()).to_string(), "105");
    assert_eq!((a.clone() - 1i64).to_string(), "99");
    assert_eq!((a.clone() * -2i32).to_string(), "-200");
    assert_eq!((a.clone() / 3u8).to_string(), "33");
    assert_eq!((a.clone() % 3u8).to_string(), "1");
    assert!(a > 99i32);
    assert!(99i32 < a);
    assert!(a == 100u64);
    assert!(100u64 == a);
    let mut b = a;
    b += 1u8;
    assert_eq!(b.to_string(), "101");
}

#[test]
fn test_sum_product() {
    let sum: BigInt = (1..=100u32).map(BigInt::from).sum();
    assert_eq!(sum, BigInt::from(5050));
    let factorial: BigInt = (1..=25u32).map(BigInt::from).product();
    assert_eq!(factorial.to_string(), "15511210043330985984000000");
    let empty_sum: BigInt = std::iter::empty::<BigInt>().sum();
    assert_eq!(empty_sum, BigInt::zero());
    let empty_product: BigInt = std::iter::empty::<BigInt>().product();
    assert_eq!(empty_product, BigInt::one());
}

#[test]
fn test_is_even() {
    assert!(BigInt::zero().is_even());
    assert!(BigInt::from(42).is_even());
    assert!(!BigInt::from(-7).is_even());
    assert!(BigInt::from("123456789012345678901234567890").is_even());
}
