use std::fmt;


// Scalar kinds an opcode argument can be encoded as.
//
// The declaration order follows the legacy toolchain, but nothing on the wire depends
// on it, the image only carries the encoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    UInt,     // u32
    UShort,   // u16
    Byte,     // u8
    Int,      // i32
    Short,    // i16
    Char,     // 1 byte character
    WideChar, // 2 byte (utf-16 unit) character
    Float,    // f32
    Double,   // f64
    Long,     // i64
    ULong,    // u64
}

impl ValueType {
    pub const ALL: [ValueType; 11] = [
        ValueType::UInt, ValueType::UShort, ValueType::Byte, ValueType::Int,
        ValueType::Short, ValueType::Char, ValueType::WideChar, ValueType::Float,
        ValueType::Double, ValueType::Long, ValueType::ULong,
    ];

    /// Size in bytes of one encoded value of this type.
    pub fn byte_width(self) -> usize {
        match self {
            ValueType::Byte  | ValueType::Char                         => 1,
            ValueType::Short | ValueType::UShort | ValueType::WideChar => 2,
            ValueType::Int   | ValueType::UInt   | ValueType::Float    => 4,
            ValueType::Long  | ValueType::ULong  | ValueType::Double   => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::UInt     => "uint32",
            ValueType::UShort   => "uint16",
            ValueType::Byte     => "byte",
            ValueType::Int      => "int32",
            ValueType::Short    => "int16",
            ValueType::Char     => "char",
            ValueType::WideChar => "widechar",
            ValueType::Float    => "float32",
            ValueType::Double   => "float64",
            ValueType::Long     => "int64",
            ValueType::ULong    => "uint64",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


// Sum of the widths of an argument list
pub fn total_width(types: &[ValueType]) -> usize {
    types.iter().map(|t| t.byte_width()).sum()
}


#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(ValueType::Byte.byte_width(), 1);
        assert_eq!(ValueType::Char.byte_width(), 1);
        assert_eq!(ValueType::Short.byte_width(), 2);
        assert_eq!(ValueType::UShort.byte_width(), 2);
        assert_eq!(ValueType::WideChar.byte_width(), 2);
        assert_eq!(ValueType::Int.byte_width(), 4);
        assert_eq!(ValueType::UInt.byte_width(), 4);
        assert_eq!(ValueType::Float.byte_width(), 4);
        assert_eq!(ValueType::Long.byte_width(), 8);
        assert_eq!(ValueType::ULong.byte_width(), 8);
        assert_eq!(ValueType::Double.byte_width(), 8);
    }

    #[test]
    fn total() {
        assert_eq!(total_width(&[]), 0);
        assert_eq!(total_width(&[ValueType::UShort, ValueType::UInt]), 6);
        assert_eq!(total_width(&ValueType::ALL), 1 + 1 + 2 * 3 + 4 * 3 + 8 * 3);
    }
}
