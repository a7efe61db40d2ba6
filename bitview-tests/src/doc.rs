//! This ensures that callers can compile even if they specify missing_docs
#![deny(missing_docs)]

use bitview::Field;

/// Interrupt-enable bits of a made-up peripheral register.
pub type InterruptEnable = Field<u32, u16, 2, 16>;

/// Reads the enable bits out of a raw register image.
pub fn interrupt_enable(raw: u32) -> u16 {
    InterruptEnable::get(raw)
}
