use bitview::Field;

// Union-style reinterpretation: four views over one 32-bit status word.
type Raw = Field<u32, u32, 0, 32>;
type Low = Field<u32, u16, 0, 16>;
type High = Field<u32, u16, 16, 16>;
type SignedLow = Field<u32, i16, 0, 16>;

fn main() {
    let mut word = 0u32;
    Raw::set(&mut word, 0x8000_FFFF);

    assert_eq!(Low::get(word), 0xFFFF);
    assert_eq!(High::get(word), 0x8000);
    assert_eq!(SignedLow::get(word), -1);

    // A write through one view is immediately visible through the others.
    High::set(&mut word, 0x1234);
    assert_eq!(Raw::get(word), 0x1234_FFFF);
    assert_eq!(Low::get(word), 0xFFFF);
}
