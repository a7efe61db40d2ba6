use core::marker::PhantomData;

use crate::view::FieldMut;
use crate::word::Word;
use crate::FieldValue;

/// A typed view of `WIDTH` bits starting at bit `LSB` of a backing word `B`,
/// read and written as a value of type `V`.
///
/// `Field` is zero-sized: it never owns storage. All accessors take the
/// backing word as an argument, so any number of fields, including
/// overlapping ones, can be laid over the same word. A packed record is a
/// set of type aliases next to whatever owns the word:
///
/// ```
/// use bitview::Field;
///
/// // 16-bit UART control register.
/// type Baudrate = Field<u16, u8, 0, 8>;
/// type ParityEnable = Field<u16, bool, 8, 1>;
/// type StopBits = Field<u16, u8, 9, 2>;
///
/// let mut ctrl = 0u16;
/// Baudrate::set(&mut ctrl, 0x67);
/// ParityEnable::set(&mut ctrl, true);
/// assert_eq!(ctrl, 0x0167);
/// assert_eq!(StopBits::get(ctrl), 0);
/// ```
///
/// Layouts are checked at compile time. A field reaching past the end of its
/// backing word does not build:
///
/// ```compile_fail
/// use bitview::Field;
///
/// type Broken = Field<u8, u8, 4, 8>;
/// let _ = Broken::get(0u8);
/// ```
///
/// and neither does a `bool` field wider than one bit:
///
/// ```compile_fail
/// use bitview::Field;
///
/// type Broken = Field<u16, bool, 0, 2>;
/// let _ = Broken::get(0u16);
/// ```
pub struct Field<B, V, const LSB: u32, const WIDTH: u32> {
    _word: PhantomData<B>,
    _value: PhantomData<V>,
}

impl<B: Word, V: FieldValue, const LSB: u32, const WIDTH: u32> Field<B, V, LSB, WIDTH> {
    /// Offset of the field's least significant bit within the word.
    pub const OFFSET: u32 = LSB;

    /// Width of the field in bits.
    pub const BITS: u32 = WIDTH;

    const LAYOUT_OK: () = {
        assert!(WIDTH >= 1, "bit fields must be at least one bit wide");
        assert!(
            WIDTH <= B::BITS && LSB <= B::BITS - WIDTH,
            "bit field range exceeds the backing word"
        );
        assert!(
            !V::SINGLE_BIT || WIDTH == 1,
            "bool bit fields must be exactly one bit wide"
        );
    };

    // Computed from a full-width complement so the whole-word case
    // (WIDTH == B::BITS) stays in range.
    const MASK_BITS: u128 = {
        let _layout = Self::LAYOUT_OK;
        (!0u128 >> (u128::BITS - WIDTH)) << LSB
    };

    /// Reads the field out of `word`.
    ///
    /// Bits outside the field are never observed. Signed values are
    /// sign-extended from the field's top bit; a `bool` field reads `true`
    /// for any non-zero content.
    #[inline]
    pub fn get(word: B) -> V {
        V::from_field((word.into_bits() & Self::MASK_BITS) >> LSB, WIDTH)
    }

    /// Writes `value` into the field, leaving every bit outside the field
    /// untouched.
    ///
    /// A value that does not fit in `WIDTH` bits is truncated to the
    /// low-order `WIDTH` bits of its two's-complement representation; there
    /// is no range check.
    #[inline]
    pub fn set(word: &mut B, value: V) {
        *word = Self::with(*word, value);
    }

    /// Returns `word` with the field replaced by `value`; builder-style
    /// variant of [`set`](Self::set) with the same truncation rule.
    #[inline]
    pub fn with(word: B, value: V) -> B {
        let bits = word.into_bits();
        B::from_bits((bits & !Self::MASK_BITS) | ((value.into_field() << LSB) & Self::MASK_BITS))
    }

    /// The word with exactly the field's bits set.
    #[inline]
    pub fn mask() -> B {
        B::from_bits(Self::MASK_BITS)
    }

    /// Borrows `word` as an assignable view of the field, which carries the
    /// compound-assignment and increment operators.
    ///
    /// ```
    /// use bitview::Field;
    ///
    /// type Count = Field<u32, u8, 3, 5>;
    ///
    /// let mut word = 0u32;
    /// let mut count = Count::view(&mut word);
    /// count += 9;
    /// count <<= 1;
    /// assert_eq!(count.get(), 18);
    /// assert_eq!(word, 18 << 3);
    /// ```
    #[inline]
    pub fn view(word: &mut B) -> FieldMut<'_, B, V, LSB, WIDTH> {
        FieldMut::new(word)
    }
}
