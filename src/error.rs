use std::path::PathBuf;

use thiserror::Error;

use crate::opcode::Opcode;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    UnknownInstruction(Opcode),
    #[error("Memory access of {len} byte(s) at {address:#06X} is out of bounds.")]
    MemoryFault { address: usize, len: usize },
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
}

impl From<OpcodeError> for ProcessError {
    fn from(err: OpcodeError) -> Self {
        match err {
            OpcodeError::MemoryInvalid { pointer, .. } => ProcessError::MemoryFault {
                address: pointer,
                len: 2,
            },
        }
    }
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("Pointer location invalid there can not be an opcode at {pointer}, if data len is {len}")]
    MemoryInvalid { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("The rom '{path}' does not exist.")]
    NotFound { path: PathBuf },
    #[error("The rom '{path}' could not be read.")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The rom is {size} bytes long, but only {max} bytes are available.")]
    TooLarge { size: usize, max: usize },
}
