use lazy_static::*;

use crate::{BigInt, Sign};

/// Largest magnitude kept in the small-value caches.
pub const MAX_CONSTANT: usize = 16;

lazy_static! {
    pub static ref ZERO: BigInt = BigInt::from_raw(Sign::Zero, vec![0]);
    pub static ref ONE: BigInt = BigInt::from_raw(Sign::Positive, vec![1]);
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(Sign::Zero, vec![0]),
        BigInt::from_raw(Sign::Positive, vec![1]),
        BigInt::from_raw(Sign::Positive, vec![2]),
        BigInt::from_raw(Sign::Positive, vec![3]),
        BigInt::from_raw(Sign::Positive, vec![4]),
        BigInt::from_raw(Sign::Positive, vec![5]),
        BigInt::from_raw(Sign::Positive, vec![6]),
        BigInt::from_raw(Sign::Positive, vec![7]),
        BigInt::from_raw(Sign::Positive, vec![8]),
        BigInt::from_raw(Sign::Positive, vec![9]),
        BigInt::from_raw(Sign::Positive, vec![1, 0]),
        BigInt::from_raw(Sign::Positive, vec![1, 1]),
        BigInt::from_raw(Sign::Positive, vec![1, 2]),
        BigInt::from_raw(Sign::Positive, vec![1, 3]),
        BigInt::from_raw(Sign::Positive, vec![1, 4]),
        BigInt::from_raw(Sign::Positive, vec![1, 5]),
        BigInt::from_raw(Sign::Positive, vec![1, 6]),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(Sign::Zero, vec![0]),
        BigInt::from_raw(Sign::Negative, vec![1]),
        BigInt::from_raw(Sign::Negative, vec![2]),
        BigInt::from_raw(Sign::Negative, vec![3]),
        BigInt::from_raw(Sign::Negative, vec![4]),
        BigInt::from_raw(Sign::Negative, vec![5]),
        BigInt::from_raw(Sign::Negative, vec![6]),
        BigInt::from_raw(Sign::Negative, vec![7]),
        BigInt::from_raw(Sign::Negative, vec![8]),
        BigInt::from_raw(Sign::Negative, vec![9]),
        BigInt::from_raw(Sign::Negative, vec![1, 0]),
        BigInt::from_raw(Sign::Negative, vec![1, 1]),
        BigInt::from_raw(Sign::Negative, vec![1, 2]),
        BigInt::from_raw(Sign::Negative, vec![1, 3]),
        BigInt::from_raw(Sign::Negative, vec![1, 4]),
        BigInt::from_raw(Sign::Negative, vec![1, 5]),
        BigInt::from_raw(Sign::Negative, vec![1, 6]),
    ];
}
