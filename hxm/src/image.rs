use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::debug;

use crate::error::ImageError;
use crate::opcode::Opcode;
use crate::program::{Instruction, Program};


// Section signatures
pub const HEADER: &str = "HXM";
pub const RESOURCES: &str = "RES";
pub const EXEC: &str = "EXEC";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    /// Write the version slot the way the legacy toolchain does: the version's length
    /// followed by the author's bytes.
    pub legacy_version_field: bool,
}

impl Default for ImageOptions {
    fn default() -> ImageOptions {
        ImageOptions { legacy_version_field: true }
    }
}


pub fn build(program: &Program) -> Result<Vec<u8>, ImageError> {
    build_with(program, &ImageOptions::default())
}

pub fn build_with(program: &Program, options: &ImageOptions) -> Result<Vec<u8>, ImageError> {
    let mut image = Vec::new();
    write(program, options, &mut image)?;
    Ok(image)
}

/// Serialize `program` into `out`.
///
/// Layout, all integers little endian:
///
/// ```text
/// "HXM"
/// u8  len + title
/// u8  len + author
/// u16 len + description
/// u8  len + version         (legacy: version's len + author's bytes)
/// u8  len + copyright
/// "RES" u16 count, per resource: u16 len + bytes
/// "EXEC", per instruction: u8 opcode, u16 argument count, argument bytes
/// ```
///
/// Metadata must be single byte characters, no length is ever truncated.
pub fn write<W: Write>(program: &Program, options: &ImageOptions, out: &mut W) -> Result<(), ImageError> {
    let title = latin1("title", &program.title)?;
    let author = latin1("author", &program.author)?;
    let description = latin1("description", &program.description)?;
    let version = latin1("version", &program.version)?;
    let copyright = latin1("copyright", &program.copyright)?;

    out.write_all(HEADER.as_bytes())?;
    write_short_field(out, "title", &title)?;
    write_short_field(out, "author", &author)?;
    write_long_field(out, "description", &description)?;

    if options.legacy_version_field {
        out.write_u8(fit_u8("version", version.len())?)?;
        out.write_all(&author)?;
    } else {
        write_short_field(out, "version", &version)?;
    }
    write_short_field(out, "copyright", &copyright)?;

    out.write_all(RESOURCES.as_bytes())?;
    out.write_u16::<LittleEndian>(fit_u16("resource count", program.resources.len())?)?;
    for (id, blob) in program.resources.iter().enumerate() {
        write_long_field(out, &format!("resource #{}", id), blob)?;
    }

    out.write_all(EXEC.as_bytes())?;
    for inst in &program.instructions {
        let opcode = inst.opcode();
        out.write_u8(opcode.code())?;
        // Number of declared arguments, not their byte length
        out.write_u16::<LittleEndian>(fit_u16(opcode.mnemonic(), opcode.argument_types().len())?)?;
        out.write_all(inst.arguments())?;
    }

    debug!(
        "image written: {} resources, {} instructions",
        program.resources.len(),
        program.instructions.len(),
    );
    Ok(())
}


/// Parse an image back into a `Program`.
///
/// With `legacy_version_field` the version slot is read with the author's length and
/// `version` ends up holding those bytes, the real version is lost in such images.
pub fn read(image: &[u8], options: &ImageOptions) -> Result<Program, ImageError> {
    let mut rd = Reader { image, pos: 0 };
    let mut program = Program::new();

    rd.signature(HEADER)?;
    let len = rd.u8()? as usize;
    program.title = rd.text(len)?;
    let len = rd.u8()? as usize;
    program.author = rd.text(len)?;
    let len = rd.u16()? as usize;
    program.description = rd.text(len)?;

    let len = rd.u8()? as usize;
    program.version = if options.legacy_version_field {
        debug!("legacy version slot, declared length {}", len);
        rd.text(program.author.chars().count())?
    } else {
        rd.text(len)?
    };
    let len = rd.u8()? as usize;
    program.copyright = rd.text(len)?;

    rd.signature(RESOURCES)?;
    let count = rd.u16()?;
    for _ in 0..count {
        let len = rd.u16()? as usize;
        program.add_resource(rd.take(len)?.to_vec());
    }

    rd.signature(EXEC)?;
    while !rd.is_empty() {
        let offset = rd.pos;
        let code = rd.u8()?;
        let opcode = Opcode::from_code(code).ok_or(ImageError::UnknownOpcode { code, offset })?;

        let found = rd.u16()? as usize;
        let expected = opcode.argument_types().len();
        let mismatch = ImageError::SchemaMismatch { mnemonic: opcode.mnemonic(), expected, found, offset };
        if found != expected {
            return Err(mismatch);
        }

        let arguments = rd.take(opcode.argument_width())?.to_vec();
        program.push(Instruction::from_raw(opcode, arguments).ok_or(mismatch)?);
    }

    Ok(program)
}


// Metadata is stored one byte per character
fn latin1(field: &'static str, text: &str) -> Result<Vec<u8>, ImageError> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| ImageError::NonAscii { field, ch }))
        .collect()
}

fn fit_u8(field: &str, len: usize) -> Result<u8, ImageError> {
    u8::try_from(len).map_err(|_| overflow(field, len, u8::MAX as usize))
}

fn fit_u16(field: &str, len: usize) -> Result<u16, ImageError> {
    u16::try_from(len).map_err(|_| overflow(field, len, u16::MAX as usize))
}

fn overflow(field: &str, len: usize, max: usize) -> ImageError {
    ImageError::FieldOverflow { field: field.to_string(), len, max }
}

fn write_short_field<W: Write>(out: &mut W, field: &str, data: &[u8]) -> Result<(), ImageError> {
    out.write_u8(fit_u8(field, data.len())?)?;
    out.write_all(data)?;
    Ok(())
}

fn write_long_field<W: Write>(out: &mut W, field: &str, data: &[u8]) -> Result<(), ImageError> {
    out.write_u16::<LittleEndian>(fit_u16(field, data.len())?)?;
    out.write_all(data)?;
    Ok(())
}


struct Reader<'a> {
    image: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.pos >= self.image.len()
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ImageError> {
        let left = self.image.len() - self.pos;
        if left < len {
            return Err(ImageError::Truncated { needed: len - left, offset: self.pos });
        }
        let data = &self.image[self.pos..self.pos + len];
        self.pos += len;
        Ok(data)
    }

    fn u8(&mut self) -> Result<u8, ImageError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, ImageError> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    fn text(&mut self, len: usize) -> Result<String, ImageError> {
        Ok(self.take(len)?.iter().map(|&b| char::from(b)).collect())
    }

    fn signature(&mut self, expected: &'static str) -> Result<(), ImageError> {
        let offset = self.pos;
        let found = self.take(expected.len()).map_err(|_| ImageError::BadSignature { expected, offset })?;
        if found == expected.as_bytes() {
            Ok(())
        } else {
            Err(ImageError::BadSignature { expected, offset })
        }
    }
}


#[cfg(test)]
mod image_tests {
    use super::*;
    use crate::asm::{self, Config};

    const FIXED: ImageOptions = ImageOptions { legacy_version_field: false };

    fn compile(source: &str) -> Program {
        asm::compile_str(source, &Config::default()).unwrap().program
    }

    #[test]
    fn empty_program() {
        let image = build(&Program::new()).unwrap();

        let mut expected = b"HXM".to_vec();
        expected.extend([0, 0, 0, 0, 0, 0]);
        expected.extend(b"RES");
        expected.extend([0, 0]);
        expected.extend(b"EXEC");
        assert_eq!(image, expected);
    }

    #[test]
    fn legacy_version_field() {
        let program = Program {
            title: "T".to_string(),
            author: "ab".to_string(),
            version: "1.0".to_string(),
            ..Program::default()
        };
        let image = build(&program).unwrap();

        let mut expected = b"HXM".to_vec();
        expected.extend([1, b'T']);
        expected.extend([2, b'a', b'b']);
        expected.extend([0, 0]);
        expected.extend([3, b'a', b'b']);
        expected.extend([0]);
        expected.extend(b"RES\x00\x00EXEC");
        assert_eq!(image, expected);
    }

    #[test]
    fn fixed_version_field() {
        let program = Program {
            author: "ab".to_string(),
            version: "1.0".to_string(),
            copyright: "c".to_string(),
            ..Program::default()
        };
        let image = build_with(&program, &FIXED).unwrap();

        assert_eq!(&image[3..13], &[0, 2, b'a', b'b', 0, 0, 3, b'1', b'.', b'0']);
        assert_eq!(&image[13..15], &[1, b'c']);
    }

    #[test]
    fn sections() {
        let program = compile("RESOURCES\nSTRING:hi\nINT:-1\nEND\njmpequ 1, 2\nnoop\nsyscall 258");
        let image = build(&program).unwrap();

        let mut expected = b"HXM".to_vec();
        expected.extend([0, 0, 0, 0, 0, 0]);
        expected.extend(b"RES");
        expected.extend([2, 0]);
        expected.extend([2, 0, b'h', b'i']);
        expected.extend([4, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
        expected.extend(b"EXEC");
        expected.extend([0x0F, 2, 0, 1, 0, 0, 0, 2, 0, 0, 0]);
        expected.extend([0x20, 0, 0]);
        expected.extend([0x00, 1, 0, 0x02, 0x01]);
        assert_eq!(image, expected);
    }

    #[test]
    fn long_description() {
        let program = Program { description: "d".repeat(300), ..Program::default() };
        let image = build(&program).unwrap();
        assert_eq!(&image[5..7], &[0x2C, 0x01]);
        assert_eq!(image.len(), 3 + 6 + 300 + 3 + 2 + 4);
    }

    #[test]
    fn overflow() {
        let program = Program { title: "t".repeat(256), ..Program::default() };
        assert!(matches!(
            build(&program),
            Err(ImageError::FieldOverflow { len: 256, max: 255, .. })
        ));

        let program = Program { version: "v".repeat(256), ..Program::default() };
        assert!(matches!(build(&program), Err(ImageError::FieldOverflow { .. })));

        let mut program = Program::new();
        program.add_resource(vec![0; 65536]);
        match build(&program) {
            Err(ImageError::FieldOverflow { field, len, max }) => {
                assert_eq!(field, "resource #0");
                assert_eq!(len, 65536);
                assert_eq!(max, 65535);
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_latin1_metadata() {
        let program = Program { author: "\u{20AC}uro".to_string(), ..Program::default() };
        assert!(matches!(
            build(&program),
            Err(ImageError::NonAscii { field: "author", ch: '\u{20AC}' })
        ));

        // Single byte characters are fine
        let program = Program { author: "caf\u{e9}".to_string(), ..Program::default() };
        assert_eq!(build(&program).unwrap()[4..9], [4, b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn read_back() {
        let mut program = compile(include_str!("../test-hxm/hello.hxmasm"));
        program.copyright = "(c) hxm".to_string();

        let image = build_with(&program, &FIXED).unwrap();
        assert_eq!(read(&image, &FIXED).unwrap(), program);
    }

    #[test]
    fn read_back_legacy() {
        let program = compile(include_str!("../test-hxm/hello.hxmasm"));
        let image = build(&program).unwrap();
        let read = read(&image, &ImageOptions::default()).unwrap();

        assert_eq!(read.version, program.author);
        assert_eq!(read.title, program.title);
        assert_eq!(read.resources, program.resources);
        assert_eq!(read.instructions, program.instructions);
    }

    #[test]
    fn bad_signature() {
        let mut image = build(&Program::new()).unwrap();
        image[2] = b'N';
        assert!(matches!(
            read(&image, &FIXED),
            Err(ImageError::BadSignature { expected: "HXM", offset: 0 })
        ));

        let image = build(&Program::new()).unwrap();
        assert!(matches!(
            read(&image[..image.len() - 1], &FIXED),
            Err(ImageError::BadSignature { expected: "EXEC", offset: 14 })
        ));
    }

    #[test]
    fn truncated() {
        let image = build_with(&compile("var 1"), &FIXED).unwrap();
        assert!(matches!(
            read(&image[..image.len() - 1], &FIXED),
            Err(ImageError::Truncated { needed: 1, .. })
        ));
        assert!(matches!(read(&image[..2], &FIXED), Err(ImageError::BadSignature { .. })));
    }

    #[test]
    fn unknown_opcode() {
        let mut image = build(&Program::new()).unwrap();
        let offset = image.len();
        image.extend([0xFF, 0, 0]);
        assert!(matches!(
            read(&image, &FIXED),
            Err(ImageError::UnknownOpcode { code: 0xFF, offset: o }) if o == offset
        ));
    }

    #[test]
    fn schema_mismatch() {
        let mut image = build(&Program::new()).unwrap();
        image.extend([0x01, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            read(&image, &FIXED),
            Err(ImageError::SchemaMismatch { mnemonic: "var", expected: 1, found: 2, .. })
        ));
    }
}
