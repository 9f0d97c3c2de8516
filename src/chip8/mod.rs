//! The full implementation of the chip8 interpreter, from the machine state to
//! the execution of the single opcodes.
mod chipset;
mod opcodes;

/// reexport chipset structs and data for simpler usage
pub use chipset::*;
