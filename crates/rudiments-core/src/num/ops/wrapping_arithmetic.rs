// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use core::ops::{Add, Mul, Neg, Sub};

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! wrapping_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Self {
                    <$t>::$src_method(self)
                }
            }
        )+
    };
}

/// Wrapping (modular) addition by value.
///
/// Overflow wraps around at the boundary of the type in every build profile,
/// unlike the `+` operator which panics in debug builds.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// let a: i32 = i32::MAX;
/// assert_eq!(a.wrapping_add_val(1), i32::MIN); // Wraps around
/// assert_eq!(40_i32.wrapping_add_val(2), 42);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(
    WrappingAddVal, wrapping_add_val, wrapping_add,
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128
);

/// Wrapping (modular) subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// let a: i32 = i32::MIN;
/// assert_eq!(a.wrapping_sub_val(1), i32::MAX); // Wraps around
/// let b: u8 = 0;
/// assert_eq!(b.wrapping_sub_val(1), 255);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(
    WrappingSubVal, wrapping_sub_val, wrapping_sub,
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128
);

/// Wrapping (modular) multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// let a: u8 = 20;
/// assert_eq!(a.wrapping_mul_val(13), 4); // 260 mod 256
/// assert_eq!(6_i64.wrapping_mul_val(7), 42);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(
    WrappingMulVal, wrapping_mul_val, wrapping_mul,
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128
);

/// Wrapping negation by value.
///
/// Only implemented for signed integers. Negating `MIN` yields `MIN`.
///
/// # Examples
///
/// ```rust
/// # use rudiments_core::num::ops::wrapping_arithmetic::WrappingNegVal;
/// assert_eq!(5_i32.wrapping_neg_val(), -5);
/// assert_eq!(i32::MIN.wrapping_neg_val(), i32::MIN);
/// ```
pub trait WrappingNegVal: Sized + Neg<Output = Self> {
    /// Performs wrapping negation by value.
    fn wrapping_neg_val(self) -> Self;
}

wrapping_impl_unary_val!(
    WrappingNegVal, wrapping_neg_val, wrapping_neg,
    i8, i16, i32, i64, isize, i128
);
