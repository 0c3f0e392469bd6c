pub mod codec;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod instructions;
pub mod listing;
pub mod registers;

pub mod isa {
    pub mod mips32; // R/I-format subset
}

pub use decoder::{Decoded, Decoder, Instruction, InstructionKind};
pub use error::{DecodeError, DisasmError};
pub use listing::{disassemble, disassemble_bin, Line, Listing, RenderConfig};
