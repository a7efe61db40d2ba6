//! Proves that `bitview` builds without the standard library.
#![no_std]

use bitview::Field;

type Opcode = Field<u32, u8, 26, 6>;
type Offset = Field<u32, i32, 0, 26>;

pub fn encode(opcode: u8, offset: i32) -> u32 {
    Offset::with(Opcode::with(0, opcode), offset)
}

pub fn decode(word: u32) -> (u8, i32) {
    (Opcode::get(word), Offset::get(word))
}
