//! Downstream-style checks for the `bitview` crate. The interesting tests
//! live in `tests/`; this library only proves the public surface holds up
//! under a strict consumer.

pub mod doc;
