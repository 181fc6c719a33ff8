use thiserror::Error;


/// A literal could not be read as the type it was declared with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{literal}\" is not a valid {expected}")]
pub struct ValueFormatError {
    pub literal: String,
    pub expected: &'static str,
}

impl ValueFormatError {
    pub fn new(literal: &str, expected: &'static str) -> ValueFormatError {
        ValueFormatError { literal: literal.to_string(), expected }
    }
}


// Everything that can go wrong on a single source line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("metadata entry \"{0}\" is invalid")]
    InvalidMetadataEntry(String),

    #[error("op-code \"{0}\" not recognized")]
    InvalidOpcode(String),

    #[error("the opcode {mnemonic} requires {expected} arguments, while {found} were provided")]
    InvalidParameterCount {
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    ValueFormat(#[from] ValueFormatError),

    #[error("invalid resource entry: {0}")]
    InvalidResourceEntry(String),
}


/// A compilation failure, `line` is the 0-based index into the source lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (line {line})")]
pub struct CompileError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl CompileError {
    pub fn new(line: usize, kind: ErrorKind) -> CompileError {
        CompileError { line, kind }
    }
}


#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{field} is {len} bytes long, its length field holds at most {max}")]
    FieldOverflow {
        field: String,
        len: usize,
        max: usize,
    },

    #[error("{field} contains '{ch}', which does not fit in a single byte")]
    NonAscii {
        field: &'static str,
        ch: char,
    },

    #[error("expected the \"{expected}\" signature at offset {offset}")]
    BadSignature {
        expected: &'static str,
        offset: usize,
    },

    #[error("unknown opcode 0x{code:02X} at offset {offset}")]
    UnknownOpcode {
        code: u8,
        offset: usize,
    },

    #[error("{mnemonic} declares {found} arguments but its schema has {expected} (offset {offset})")]
    SchemaMismatch {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
        offset: usize,
    },

    #[error("image ends early, needed {needed} more bytes at offset {offset}")]
    Truncated {
        needed: usize,
        offset: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}


#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn compile_error_message_carries_line() {
        let err = CompileError::new(4, ErrorKind::InvalidOpcode("FOOBAR".to_string()));
        assert_eq!(err.to_string(), "op-code \"FOOBAR\" not recognized (line 4)");
    }

    #[test]
    fn value_format_is_transparent() {
        let kind: ErrorKind = ValueFormatError::new("abc", "int32").into();
        assert_eq!(kind.to_string(), "\"abc\" is not a valid int32");
    }

    #[test]
    fn parameter_count_message() {
        let kind = ErrorKind::InvalidParameterCount {
            mnemonic: "jmpequ".to_string(),
            expected: 2,
            found: 3,
        };
        assert_eq!(kind.to_string(), "the opcode jmpequ requires 2 arguments, while 3 were provided");
    }
}
