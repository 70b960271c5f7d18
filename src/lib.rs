//! Big Int \
//! This crate provides [`BigInt`]: immutable arbitrary-precision signed integers
//! stored as a sign plus a sequence of decimal digits. Values are always kept in
//! canonical form, so equality, ordering and hashing agree with numeric value.

mod big_int;
mod big_int_cache;
mod error;
mod macros;

pub use big_int::{BigInt, Sign};
pub use error::{BigIntError, BigIntResult, BigIntTestResult};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "900000000000".into();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!(a.pow(2u32).unwrap().to_string(), "100000000000000000000000000");
    }
}
