use std::fmt;
use std::str::FromStr;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::ValueFormatError;
use crate::types::ValueType;


/// One typed scalar, as written in an instruction argument or read back out of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    UInt(u32),
    UShort(u16),
    Byte(u8),
    Int(i32),
    Short(i16),
    Char(u8),
    WideChar(u16),
    Float(f32),
    Double(f64),
    Long(i64),
    ULong(u64),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match *self {
            Value::UInt(_)     => ValueType::UInt,
            Value::UShort(_)   => ValueType::UShort,
            Value::Byte(_)     => ValueType::Byte,
            Value::Int(_)      => ValueType::Int,
            Value::Short(_)    => ValueType::Short,
            Value::Char(_)     => ValueType::Char,
            Value::WideChar(_) => ValueType::WideChar,
            Value::Float(_)    => ValueType::Float,
            Value::Double(_)   => ValueType::Double,
            Value::Long(_)     => ValueType::Long,
            Value::ULong(_)    => ValueType::ULong,
        }
    }

    /// Little endian encoding, always `value_type().byte_width()` long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; self.value_type().byte_width()];
        match *self {
            Value::Byte(v) | Value::Char(v)       => buf[0] = v,
            Value::UShort(v) | Value::WideChar(v) => LittleEndian::write_u16(&mut buf, v),
            Value::Short(v)                       => LittleEndian::write_i16(&mut buf, v),
            Value::UInt(v)                        => LittleEndian::write_u32(&mut buf, v),
            Value::Int(v)                         => LittleEndian::write_i32(&mut buf, v),
            Value::Float(v)                       => LittleEndian::write_f32(&mut buf, v),
            Value::ULong(v)                       => LittleEndian::write_u64(&mut buf, v),
            Value::Long(v)                        => LittleEndian::write_i64(&mut buf, v),
            Value::Double(v)                      => LittleEndian::write_f64(&mut buf, v),
        }
        buf
    }
}

// Renders in the same syntax `parse` accepts
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::UInt(v)     => write!(f, "{}", v),
            Value::UShort(v)   => write!(f, "{}", v),
            Value::Byte(v)     => write!(f, "{}", v),
            Value::Int(v)      => write!(f, "{}", v),
            Value::Short(v)    => write!(f, "{}", v),
            Value::Char(v)     => write!(f, "{}", char::from(v)),
            Value::WideChar(v) => {
                let c = char::from_u32(u32::from(v)).unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f, "{}", c)
            },
            Value::Float(v)    => write!(f, "{}", v),
            Value::Double(v)   => write!(f, "{}", v),
            Value::Long(v)     => write!(f, "{}", v),
            Value::ULong(v)    => write!(f, "{}", v),
        }
    }
}


/// Parse a textual literal as `ty`.
pub fn parse(ty: ValueType, literal: &str) -> Result<Value, ValueFormatError> {
    match ty {
        ValueType::UInt   => parse_number(ty, literal).map(Value::UInt),
        ValueType::UShort => parse_number(ty, literal).map(Value::UShort),
        ValueType::Byte   => parse_number(ty, literal).map(Value::Byte),
        ValueType::Int    => parse_number(ty, literal).map(Value::Int),
        ValueType::Short  => parse_number(ty, literal).map(Value::Short),
        ValueType::Float  => parse_number(ty, literal).map(Value::Float),
        ValueType::Double => parse_number(ty, literal).map(Value::Double),
        ValueType::Long   => parse_number(ty, literal).map(Value::Long),
        ValueType::ULong  => parse_number(ty, literal).map(Value::ULong),
        ValueType::Char => {
            let c = single_char(ty, literal)?;
            u8::try_from(u32::from(c))
                .map(Value::Char)
                .map_err(|_| ValueFormatError::new(literal, ty.name()))
        },
        ValueType::WideChar => {
            let c = single_char(ty, literal)?;
            u16::try_from(u32::from(c))
                .map(Value::WideChar)
                .map_err(|_| ValueFormatError::new(literal, ty.name()))
        },
    }
}

/// Parse a textual literal as `ty` and return its little endian bytes.
pub fn encode(ty: ValueType, literal: &str) -> Result<Vec<u8>, ValueFormatError> {
    parse(ty, literal).map(|v| v.to_bytes())
}

/// Read one `ty` off the front of `bytes`, `None` if there isn't enough data.
pub fn decode(ty: ValueType, bytes: &[u8]) -> Option<Value> {
    let width = ty.byte_width();
    if bytes.len() < width {
        return None;
    }
    let b = &bytes[..width];

    Some(match ty {
        ValueType::Byte     => Value::Byte(b[0]),
        ValueType::Char     => Value::Char(b[0]),
        ValueType::UShort   => Value::UShort(LittleEndian::read_u16(b)),
        ValueType::WideChar => Value::WideChar(LittleEndian::read_u16(b)),
        ValueType::Short    => Value::Short(LittleEndian::read_i16(b)),
        ValueType::UInt     => Value::UInt(LittleEndian::read_u32(b)),
        ValueType::Int      => Value::Int(LittleEndian::read_i32(b)),
        ValueType::Float    => Value::Float(LittleEndian::read_f32(b)),
        ValueType::ULong    => Value::ULong(LittleEndian::read_u64(b)),
        ValueType::Long     => Value::Long(LittleEndian::read_i64(b)),
        ValueType::Double   => Value::Double(LittleEndian::read_f64(b)),
    })
}

/// Parse the binary representation of a byte, ie `0000 0001`.
///
/// Whitespace is ignored, exactly eight `0`/`1` digits must remain.
pub fn parse_binary_byte(text: &str) -> Result<u8, ValueFormatError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.len() != 8 || !digits.chars().all(|c| c == '0' || c == '1') {
        return Err(ValueFormatError::new(text, "binary byte"));
    }
    u8::from_str_radix(&digits, 2).map_err(|_| ValueFormatError::new(text, "binary byte"))
}

fn parse_number<T: FromStr>(ty: ValueType, literal: &str) -> Result<T, ValueFormatError> {
    literal.trim().parse::<T>().map_err(|_| ValueFormatError::new(literal, ty.name()))
}

// A lone character is taken verbatim (so ' ' is a valid char), anything else gets trimmed
fn single_char(ty: ValueType, literal: &str) -> Result<char, ValueFormatError> {
    let text = if literal.chars().count() == 1 { literal } else { literal.trim() };

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ValueFormatError::new(literal, ty.name())),
    }
}
