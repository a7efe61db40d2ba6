use core::ops::{Add, Sub};

use crate::sealed::Sealed;

/// Logical type a field is read and written as.
///
/// Implemented for every primitive unsigned integer, every primitive signed
/// integer (decoded with arithmetic sign extension) and [`bool`] (any
/// non-zero field content reads as `true`). The signed/unsigned/bool split is
/// resolved entirely at compile time; there is no runtime dispatch.
pub trait FieldValue: Copy + Sealed {
    /// True for `bool`, which is only valid for one-bit fields.
    const SINGLE_BIT: bool;

    /// Decodes field content that has already been masked and shifted down
    /// to bit 0. `width` is the field width in bits.
    fn from_field(bits: u128, width: u32) -> Self;

    /// Encodes the value into the low bits of a word, two's complement for
    /// signed types. The field write masks the result to the field width,
    /// which is where out-of-range values get truncated.
    fn into_field(self) -> u128;
}

/// Integer field values, the ones that support increment and decrement.
pub trait FieldInt: FieldValue + Add<Output = Self> + Sub<Output = Self> {
    /// The value `1`.
    const ONE: Self;
}

macro_rules! impl_unsigned_value {
    ($($t:ty),*) => {$(
        impl FieldValue for $t {
            const SINGLE_BIT: bool = false;

            #[inline]
            fn from_field(bits: u128, _width: u32) -> Self {
                bits as $t
            }

            #[inline]
            fn into_field(self) -> u128 {
                self as u128
            }
        }

        impl FieldInt for $t {
            const ONE: Self = 1;
        }
    )*};
}

macro_rules! impl_signed_value {
    ($($t:ty),*) => {$(
        impl FieldValue for $t {
            const SINGLE_BIT: bool = false;

            #[inline]
            fn from_field(bits: u128, width: u32) -> Self {
                // Replicate the field's top bit into all higher bits.
                let shift = u128::BITS - width;
                (((bits as i128) << shift) >> shift) as $t
            }

            #[inline]
            fn into_field(self) -> u128 {
                self as i128 as u128
            }
        }

        impl FieldInt for $t {
            const ONE: Self = 1;
        }
    )*};
}

impl_unsigned_value!(u8, u16, u32, u64, u128);
impl_signed_value!(i8, i16, i32, i64, i128);

impl FieldValue for bool {
    const SINGLE_BIT: bool = true;

    #[inline]
    fn from_field(bits: u128, _width: u32) -> Self {
        bits != 0
    }

    #[inline]
    fn into_field(self) -> u128 {
        self as u128
    }
}
