//! Test helpers shared across crates.
//!
//! [`calls`] records handler invocations so dispatch tests can assert which
//! command ran and with what options; [`text`] slices rendered help output.

pub mod calls;
pub mod text;
