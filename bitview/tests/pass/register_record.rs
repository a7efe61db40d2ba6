use bitview::Field;

// 16-bit UART-style control register.
type Baudrate = Field<u16, u8, 0, 8>;
type ParityEnable = Field<u16, bool, 8, 1>;
type StopBits = Field<u16, u8, 9, 2>;
type Trim = Field<u16, i8, 11, 5>;

fn main() {
    let mut ctrl = 0u16;
    Baudrate::set(&mut ctrl, 0x67);
    ParityEnable::set(&mut ctrl, true);
    StopBits::set(&mut ctrl, 2);
    Trim::set(&mut ctrl, -5);

    assert_eq!(Baudrate::get(ctrl), 0x67);
    assert!(ParityEnable::get(ctrl));
    assert_eq!(StopBits::get(ctrl), 2);
    assert_eq!(Trim::get(ctrl), -5);

    // -5 in five bits is 0b11011.
    assert_eq!(ctrl, 0b11011_10_1_0110_0111);

    // Builder-style construction produces the same image.
    let built = Trim::with(
        StopBits::with(ParityEnable::with(Baudrate::with(0, 0x67), true), 2),
        -5,
    );
    assert_eq!(built, ctrl);
}
