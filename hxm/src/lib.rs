pub mod types;
pub mod value;
pub mod error;
pub mod opcode;
pub mod program;
pub mod asm;
pub mod image;
pub mod disasm;

pub use crate::asm::{compile, compile_str, Compiled, Config};
pub use crate::error::{CompileError, ErrorKind, ImageError, ValueFormatError};
pub use crate::image::ImageOptions;
pub use crate::opcode::Opcode;
pub use crate::program::{Instruction, Program};
pub use crate::types::ValueType;
