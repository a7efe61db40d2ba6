//! Typed bit-range accessors over fixed-width integer words.
//!
//! A [`Field`] is a compile-time description of `WIDTH` bits starting at bit
//! `LSB` inside a backing word ([`u8`] through [`u128`]), read and written as
//! an ordinary typed value: an unsigned integer, a signed integer (with sign
//! extension), or a [`bool`]. Several fields laid over the same word form a
//! packed record such as a hardware register image or a protocol header, and
//! the declared layout is respected bit-for-bit on both read and write.
//!
//! Fields are zero-sized; the backing word stays a plain integer owned by the
//! caller, so overlapping fields (union-style reinterpretation) are just more
//! aliases over the same value.
//!
//! ```
//! use bitview::Field;
//!
//! // An 8-bit register: low nibble unsigned, high nibble signed.
//! type Counter = Field<u8, u8, 0, 4>;
//! type Trim = Field<u8, i8, 4, 4>;
//!
//! let mut reg = 0u8;
//! Counter::set(&mut reg, 12);
//! Trim::set(&mut reg, -3);
//! assert_eq!(reg, 0xDC);
//! assert_eq!(Counter::get(reg), 12);
//! assert_eq!(Trim::get(reg), -3);
//! ```
//!
//! Writes that do not fit the field truncate silently to the field's width;
//! range checking, if wanted, belongs at the call site. Invalid layouts (a
//! field past the end of its word, or a multi-bit `bool`) are compile errors.

#![no_std]
#![warn(missing_docs)]

mod field;
mod value;
mod view;
mod word;

pub use field::Field;
pub use value::{FieldInt, FieldValue};
pub use view::FieldMut;
pub use word::Word;

mod sealed {
    pub trait Sealed {}

    macro_rules! impl_sealed {
        ($($t:ty),*) => {
            $(impl Sealed for $t {})*
        };
    }

    impl_sealed!(u8, u16, u32, u64, u128);
    impl_sealed!(i8, i16, i32, i64, i128);
    impl_sealed!(bool);
}
