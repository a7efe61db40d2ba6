use core::fmt;
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::field::Field;
use crate::value::{FieldInt, FieldValue};
use crate::word::Word;

/// A borrowed, assignable view of one field inside a backing word.
///
/// Created by [`Field::view`]. The view does not own the word; it holds a
/// `&mut B` whose lifetime is bounded by the word's owner. All operators are
/// plain read-modify-write sequences over [`get`](Self::get) and
/// [`set`](Self::set) — nothing here is atomic, and a concurrent writer
/// between the two halves of `+=` can lose an update. Callers needing atomic
/// field updates must wrap the whole sequence in external synchronization.
///
/// Arithmetic happens in the value type `V` before the result is truncated
/// back into the field, so overflow and division by zero behave exactly as
/// they do for a plain `V` (overflow panics in debug builds and wraps in
/// release; division by zero always panics).
pub struct FieldMut<'a, B, V, const LSB: u32, const WIDTH: u32> {
    word: &'a mut B,
    _value: PhantomData<V>,
}

impl<'a, B: Word, V: FieldValue, const LSB: u32, const WIDTH: u32> FieldMut<'a, B, V, LSB, WIDTH> {
    #[inline]
    pub(crate) fn new(word: &'a mut B) -> Self {
        FieldMut {
            word,
            _value: PhantomData,
        }
    }

    /// Current value of the field.
    #[inline]
    pub fn get(&self) -> V {
        Field::<B, V, LSB, WIDTH>::get(*self.word)
    }

    /// Replaces the field's value, truncating to the field width; bits
    /// outside the field are preserved.
    #[inline]
    pub fn set(&mut self, value: V) {
        Field::<B, V, LSB, WIDTH>::set(self.word, value);
    }
}

impl<B: Word, V: FieldInt, const LSB: u32, const WIDTH: u32> FieldMut<'_, B, V, LSB, WIDTH> {
    /// Adds one and returns the field's value after the increment, i.e. after
    /// truncation into the field (`++x`).
    #[inline]
    pub fn increment(&mut self) -> V {
        self.set(self.get() + V::ONE);
        self.get()
    }

    /// Adds one and returns the value from before the increment (`x++`).
    #[inline]
    pub fn post_increment(&mut self) -> V {
        let value = self.get();
        self.set(value + V::ONE);
        value
    }

    /// Subtracts one and returns the field's value after the decrement
    /// (`--x`).
    #[inline]
    pub fn decrement(&mut self) -> V {
        self.set(self.get() - V::ONE);
        self.get()
    }

    /// Subtracts one and returns the value from before the decrement (`x--`).
    #[inline]
    pub fn post_decrement(&mut self) -> V {
        let value = self.get();
        self.set(value - V::ONE);
        value
    }
}

macro_rules! impl_compound_assign {
    ($($assign:ident :: $method:ident => $op:ident :: $apply:ident),* $(,)?) => {$(
        impl<B: Word, V: FieldValue + $op<Output = V>, const LSB: u32, const WIDTH: u32>
            $assign<V> for FieldMut<'_, B, V, LSB, WIDTH>
        {
            #[inline]
            fn $method(&mut self, rhs: V) {
                self.set($op::$apply(self.get(), rhs));
            }
        }
    )*};
}

impl_compound_assign!(
    AddAssign::add_assign => Add::add,
    SubAssign::sub_assign => Sub::sub,
    MulAssign::mul_assign => Mul::mul,
    DivAssign::div_assign => Div::div,
    BitAndAssign::bitand_assign => BitAnd::bitand,
    BitOrAssign::bitor_assign => BitOr::bitor,
    BitXorAssign::bitxor_assign => BitXor::bitxor,
);

impl<B: Word, V: FieldValue + Shl<u32, Output = V>, const LSB: u32, const WIDTH: u32> ShlAssign<u32>
    for FieldMut<'_, B, V, LSB, WIDTH>
{
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        self.set(self.get() << rhs);
    }
}

impl<B: Word, V: FieldValue + Shr<u32, Output = V>, const LSB: u32, const WIDTH: u32> ShrAssign<u32>
    for FieldMut<'_, B, V, LSB, WIDTH>
{
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        self.set(self.get() >> rhs);
    }
}

impl<B: Word, V: FieldValue + PartialEq, const LSB: u32, const WIDTH: u32> PartialEq<V>
    for FieldMut<'_, B, V, LSB, WIDTH>
{
    #[inline]
    fn eq(&self, other: &V) -> bool {
        self.get() == *other
    }
}

impl<B: Word, V: FieldValue + fmt::Debug, const LSB: u32, const WIDTH: u32> fmt::Debug
    for FieldMut<'_, B, V, LSB, WIDTH>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

#[cfg(feature = "defmt")]
impl<B: Word, V: FieldValue + defmt::Format, const LSB: u32, const WIDTH: u32> defmt::Format
    for FieldMut<'_, B, V, LSB, WIDTH>
{
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.get());
    }
}
