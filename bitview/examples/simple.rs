use bitview::Field;

// 8-bit motor status register: 4-bit duty cycle, 3-bit signed trim, busy flag.
type Duty = Field<u8, u8, 0, 4>;
type Trim = Field<u8, i8, 4, 3>;
type Busy = Field<u8, bool, 7, 1>;

fn main() {
    let mut reg = 0u8;
    Duty::set(&mut reg, 12);
    Trim::set(&mut reg, -2);
    Busy::set(&mut reg, true);

    println!("Register: {reg:#010b}");
    println!("Duty: {}", Duty::get(reg));
    println!("Trim: {}", Trim::get(reg));
    println!("Busy: {}", Busy::get(reg));

    let mut duty = Duty::view(&mut reg);
    duty += 3;
    println!("Duty after bump: {}", Duty::get(reg));
    println!("Register: {reg:#010b}");
}
