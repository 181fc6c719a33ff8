use std::str::FromStr;

use crate::error::{ErrorKind, ValueFormatError};
use crate::types::ValueType;
use crate::value;


// Types a resource entry can be declared as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    String,
    Int,
    Long,
    Short,
    UInt,
    ULong,
    UShort,
    Byte,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResourceKindError { _priv: () }

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STRING" | "STR"                => Ok(ResourceKind::String),
            "INT" | "INTEGER" | "INT32"     => Ok(ResourceKind::Int),
            "LONG" | "INT64"                => Ok(ResourceKind::Long),
            "SHORT" | "INT16"               => Ok(ResourceKind::Short),
            "UINT" | "UINTEGER" | "UINT32"  => Ok(ResourceKind::UInt),
            "ULONG" | "UINT64"              => Ok(ResourceKind::ULong),
            "USHORT" | "UINT16"             => Ok(ResourceKind::UShort),
            "BYTE"                          => Ok(ResourceKind::Byte),
            _                               => Err(ParseResourceKindError { _priv: () }),
        }
    }
}

impl ResourceKind {
    pub fn encode(self, text: &str) -> Result<Vec<u8>, ErrorKind> {
        let scalar = match self {
            ResourceKind::String => {
                if !text.is_ascii() {
                    return Err(ValueFormatError::new(text, "ascii string").into());
                }
                return Ok(text.as_bytes().to_vec());
            },
            ResourceKind::Byte => return Ok(vec![value::parse_binary_byte(text)?]),

            ResourceKind::Int    => ValueType::Int,
            ResourceKind::Long   => ValueType::Long,
            ResourceKind::Short  => ValueType::Short,
            ResourceKind::UInt   => ValueType::UInt,
            ResourceKind::ULong  => ValueType::ULong,
            ResourceKind::UShort => ValueType::UShort,
        };
        Ok(value::encode(scalar, text)?)
    }
}

/// Parse one `TYPE:VALUE` line of a resource block into its blob.
///
/// The value is everything after the first colon, untouched. With `join_colons` the
/// remaining colons of a `STRING` value are dropped.
pub fn parse_entry(entry: &str, join_colons: bool) -> Result<Vec<u8>, ErrorKind> {
    let (kind, text) = entry.split_once(':')
        .ok_or_else(|| ErrorKind::InvalidResourceEntry(format!("\"{}\" has no type separator", entry.trim())))?;

    let kind: ResourceKind = kind.parse()
        .map_err(|_| ErrorKind::InvalidResourceEntry(format!("unknown resource type \"{}\"", kind.trim())))?;

    if join_colons && kind == ResourceKind::String {
        return kind.encode(&text.replace(':', ""));
    }
    kind.encode(text)
}


#[cfg(test)]
mod resource_tests {
    use super::*;

    fn entry(text: &str) -> Result<Vec<u8>, ErrorKind> {
        parse_entry(text, false)
    }

    #[test]
    fn kind_aliases() {
        assert_eq!("STR".parse::<ResourceKind>(), Ok(ResourceKind::String));
        assert_eq!("string".parse::<ResourceKind>(), Ok(ResourceKind::String));
        assert_eq!("Int32".parse::<ResourceKind>(), Ok(ResourceKind::Int));
        assert_eq!("UINTEGER".parse::<ResourceKind>(), Ok(ResourceKind::UInt));
        assert_eq!("int64".parse::<ResourceKind>(), Ok(ResourceKind::Long));
        assert_eq!("UINT16".parse::<ResourceKind>(), Ok(ResourceKind::UShort));
        assert_eq!(" byte ".parse::<ResourceKind>(), Ok(ResourceKind::Byte));
        assert_eq!("FLOAT".parse::<ResourceKind>(), Err(ParseResourceKindError { _priv: () }));
    }

    #[test]
    fn scalar_entries() {
        assert_eq!(entry("INT:42"), Ok(vec![42, 0, 0, 0]));
        assert_eq!(entry("SHORT:-2"), Ok(vec![0xFE, 0xFF]));
        assert_eq!(entry("USHORT:258"), Ok(vec![0x02, 0x01]));
        assert_eq!(entry("ULONG:1"), Ok(vec![1, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(entry("BYTE:0000 0001"), Ok(vec![1]));
    }

    #[test]
    fn strings_keep_colons() {
        assert_eq!(entry("STRING:hi"), Ok(b"hi".to_vec()));
        assert_eq!(entry("STR:a:b:c"), Ok(b"a:b:c".to_vec()));
        assert_eq!(entry("STRING: padded "), Ok(b" padded ".to_vec()));
        assert_eq!(entry("STRING:"), Ok(vec![]));
        assert_eq!(entry("STRING:a // b"), Ok(b"a // b".to_vec()));
    }

    #[test]
    fn joined_colons() {
        assert_eq!(parse_entry("STR:key:value", true), Ok(b"keyvalue".to_vec()));
        assert_eq!(parse_entry("STRING:http://x", true), Ok(b"http//x".to_vec()));
        // Only strings are affected
        assert!(matches!(parse_entry("INT:1:2", true), Err(ErrorKind::ValueFormat(_))));
    }

    #[test]
    fn bad_entries() {
        assert!(matches!(entry("INT 42"), Err(ErrorKind::InvalidResourceEntry(_))));
        assert!(matches!(entry("FLOAT:1.0"), Err(ErrorKind::InvalidResourceEntry(_))));
        assert!(matches!(entry("INT:forty"), Err(ErrorKind::ValueFormat(_))));
        assert!(matches!(entry("BYTE:0001"), Err(ErrorKind::ValueFormat(_))));
        assert!(matches!(entry("STRING:caf\u{e9}"), Err(ErrorKind::ValueFormat(_))));
    }
}
