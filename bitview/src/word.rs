use crate::sealed::Sealed;

/// Backing storage of a packed record: a fixed-width unsigned integer.
///
/// The generic field arithmetic is written once over [`u128`] and narrowed
/// back through this trait, so every operation monomorphizes down to a few
/// native-width shifts and masks.
pub trait Word: Copy + Sealed {
    /// Width of the word in bits.
    const BITS: u32;

    /// Narrows `bits` to this word type, discarding high bits.
    fn from_bits(bits: u128) -> Self;

    /// Widens the word losslessly.
    fn into_bits(self) -> u128;
}

macro_rules! impl_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn from_bits(bits: u128) -> Self {
                bits as $t
            }

            #[inline]
            fn into_bits(self) -> u128 {
                self as u128
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64, u128);
