/// Generates arithmetic and comparison impls between [`BigInt`](crate::BigInt)
/// and a native integer type, in both operand orders.
#[macro_export]
macro_rules! big_int_math_impl {
    ($t:ty) => {
        impl std::ops::Add<$t> for $crate::BigInt {
            type Output = $crate::BigInt;

            fn add(self, rhs: $t) -> Self::Output {
                self + $crate::BigInt::from(rhs)
            }
        }

        impl std::ops::Add<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn add(self, rhs: $crate::BigInt) -> Self::Output {
                $crate::BigInt::from(self) + rhs
            }
        }

        impl std::ops::AddAssign<$t> for $crate::BigInt {
            fn add_assign(&mut self, rhs: $t) {
                *self = self.clone() + $crate::BigInt::from(rhs);
            }
        }

        impl std::ops::Sub<$t> for $crate::BigInt {
            type Output = $crate::BigInt;

            fn sub(self, rhs: $t) -> Self::Output {
                self - $crate::BigInt::from(rhs)
            }
        }

        impl std::ops::Sub<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn sub(self, rhs: $crate::BigInt) -> Self::Output {
                $crate::BigInt::from(self) - rhs
            }
        }

        impl std::ops::SubAssign<$t> for $crate::BigInt {
            fn sub_assign(&mut self, rhs: $t) {
                *self = self.clone() - $crate::BigInt::from(rhs);
            }
        }

        impl std::ops::Mul<$t> for $crate::BigInt {
            type Output = $crate::BigInt;

            fn mul(self, rhs: $t) -> Self::Output {
                self * $crate::BigInt::from(rhs)
            }
        }

        impl std::ops::Mul<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn mul(self, rhs: $crate::BigInt) -> Self::Output {
                $crate::BigInt::from(self) * rhs
            }
        }

        impl std::ops::MulAssign<$t> for $crate::BigInt {
            fn mul_assign(&mut self, rhs: $t) {
                *self = self.clone() * $crate::BigInt::from(rhs);
            }
        }

        impl std::ops::Div<$t> for $crate::BigInt {
            type Output = $crate::BigInt;

            fn div(self, rhs: $t) -> Self::Output {
                self / $crate::BigInt::from(rhs)
            }
        }

        impl std::ops::Div<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn div(self, rhs: $crate::BigInt) -> Self::Output {
                $crate::BigInt::from(self) / rhs
            }
        }

        impl std::ops::DivAssign<$t> for $crate::BigInt {
            fn div_assign(&mut self, rhs: $t) {
                *self = self.clone() / $crate::BigInt::from(rhs);
            }
        }

        impl std::ops::Rem<$t> for $crate::BigInt {
            type Output = $crate::BigInt;

            fn rem(self, rhs: $t) -> Self::Output {
                self % $crate::BigInt::from(rhs)
            }
        }

        impl std::ops::Rem<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn rem(self, rhs: $crate::BigInt) -> Self::Output {
                $crate::BigInt::from(self) % rhs
            }
        }

        impl std::ops::RemAssign<$t> for $crate::BigInt {
            fn rem_assign(&mut self, rhs: $t) {
                *self = self.clone() % $crate::BigInt::from(rhs);
            }
        }

        impl PartialEq<$t> for $crate::BigInt {
            fn eq(&self, other: &$t) -> bool {
                *self == $crate::BigInt::from(*other)
            }
        }

        impl PartialEq<$crate::BigInt> for $t {
            fn eq(&self, other: &$crate::BigInt) -> bool {
                $crate::BigInt::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for $crate::BigInt {
            fn partial_cmp(&self, other: &$t) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&$crate::BigInt::from(*other))
            }
        }

        impl PartialOrd<$crate::BigInt> for $t {
            fn partial_cmp(&self, other: &$crate::BigInt) -> Option<std::cmp::Ordering> {
                $crate::BigInt::from(*self).partial_cmp(other)
            }
        }
    };
}
