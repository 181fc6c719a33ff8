use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::program::Program;


/// Render `program` as HXM assembly.
///
/// Compiling the listing with the default `Config` gives back the same instructions and,
/// with these exceptions, the same metadata and resources:
///
/// * copyright has no directive and becomes a comment
/// * metadata with leading whitespace, a `//` or a line break becomes a comment
/// * resources that aren't printable ASCII and aren't 1, 2, 4 or 8 bytes long are only
///   listed as comments, shifting the ids of the resources after them
pub fn disassemble(program: &Program) -> String {
    Listing(program).to_string()
}

pub struct Listing<'a>(pub &'a Program);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.0;

        for (key, value) in [
            ("TITLE", &program.title),
            ("AUTHOR", &program.author),
            ("VERSION", &program.version),
            ("DESCRIPTION", &program.description),
        ] {
            if value.is_empty() {
                continue;
            }
            if metadata_compiles(value) {
                writeln!(f, "#{}: {}", key, value)?;
            } else {
                writeln!(f, "// {}: {:?}", key.to_ascii_lowercase(), value)?;
            }
        }
        if !program.copyright.is_empty() {
            writeln!(f, "// copyright: {}", program.copyright)?;
        }

        if !program.resources.is_empty() {
            writeln!(f, "RESOURCES")?;
            for (id, blob) in program.resources.iter().enumerate() {
                // Everything after `TYPE:` is data, ids go on their own line
                writeln!(f, "\t// #{}", id)?;
                write!(f, "\t")?;
                resource(f, blob)?;
                writeln!(f)?;
            }
            writeln!(f, "END")?;
        }

        for inst in &program.instructions {
            write!(f, "{}", inst.opcode().mnemonic())?;
            for (i, value) in inst.values().iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{}", sep, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// The directive drops leading whitespace and stops at a comment or line break
fn metadata_compiles(value: &str) -> bool {
    !value.starts_with(char::is_whitespace)
        && !value.contains("//")
        && !value.contains(['\n', '\r'])
}

// Pick an entry type that reproduces the blob byte for byte
fn resource(f: &mut fmt::Formatter<'_>, blob: &[u8]) -> fmt::Result {
    let printable = blob.iter().all(|&b| b == b' ' || b.is_ascii_graphic());
    if printable {
        // Printable ASCII only, so this never loses anything
        return write!(f, "STRING:{}", String::from_utf8_lossy(blob));
    }

    match blob.len() {
        1 => write!(f, "BYTE:{:04b} {:04b}", blob[0] >> 4, blob[0] & 0x0F),
        2 => write!(f, "USHORT:{}", LittleEndian::read_u16(blob)),
        4 => write!(f, "UINT:{}", LittleEndian::read_u32(blob)),
        8 => write!(f, "ULONG:{}", LittleEndian::read_u64(blob)),
        _ => {
            // No entry type fits, the blob is listed but won't compile back
            write!(f, "// raw:")?;
            for b in blob {
                write!(f, " {:02X}", b)?;
            }
            Ok(())
        },
    }
}


#[cfg(test)]
mod disasm_tests {
    use super::*;
    use crate::asm::{self, Config};

    fn compile(source: &str) -> Program {
        asm::compile_str(source, &Config::default()).unwrap().program
    }

    #[test]
    fn listing() {
        let program = compile("#TITLE: t\nRESOURCES\nSTRING:hi\nBYTE:0000 1010\nEND\njmpequ 1, 2\nnoop");
        assert_eq!(
            disassemble(&program),
            "#TITLE: t\nRESOURCES\n\t// #0\n\tSTRING:hi\n\t// #1\n\tBYTE:0000 1010\nEND\njmpequ 1, 2\nnoop\n"
        );
    }

    #[test]
    fn recompiles() {
        for source in [
            include_str!("../test-hxm/hello.hxmasm"),
            include_str!("../test-hxm/layouts.hxmasm"),
        ] {
            let program = compile(source);
            let again = compile(&disassemble(&program));
            assert_eq!(again, program);
        }
    }

    #[test]
    fn binary_resources_keep_their_bytes() {
        let program = compile("RESOURCES\nINT:-2\nSHORT:-3\nLONG:-4\nEND");
        let listing = disassemble(&program);

        assert!(listing.contains("UINT:4294967294"));
        assert!(listing.contains("USHORT:65533"));
        assert!(listing.contains("ULONG:18446744073709551612"));
        assert_eq!(compile(&listing).resources, program.resources);
    }

    #[test]
    fn unrepresentable_blob() {
        let mut program = Program::new();
        program.add_resource(vec![0x00, 0x01, 0xFF]);
        assert_eq!(disassemble(&program), "RESOURCES\n\t// #0\n\t// raw: 00 01 FF\nEND\n");
    }

    #[test]
    fn slashes_in_strings() {
        let program = compile("RESOURCES\nSTRING:http://example.com\nEND");
        let listing = disassemble(&program);

        assert!(listing.contains("\tSTRING:http://example.com\n"));
        assert_eq!(compile(&listing), program);
    }

    #[test]
    fn metadata_that_cannot_compile_back() {
        let program = Program {
            title: "ok".to_string(),
            author: "  padded".to_string(),
            version: "1.0 // beta".to_string(),
            description: "two\nlines".to_string(),
            ..Program::default()
        };
        assert_eq!(
            disassemble(&program),
            "#TITLE: ok\n// author: \"  padded\"\n// version: \"1.0 // beta\"\n// description: \"two\\nlines\"\n"
        );
        assert_eq!(compile(&disassemble(&program)).title, "ok");
    }

    #[test]
    fn copyright_is_a_comment() {
        let program = Program { copyright: "2019".to_string(), ..Program::default() };
        assert_eq!(disassemble(&program), "// copyright: 2019\n");
    }
}
