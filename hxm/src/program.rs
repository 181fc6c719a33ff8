use crate::error::ErrorKind;
use crate::opcode::Opcode;
use crate::value::{self, Value};


/// A compiled HXM program, everything that ends up in an image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub title: String,
    pub author: String,
    pub version: String,
    pub description: String,
    pub copyright: String,

    // Resource id is the position in this list
    pub resources: Vec<Vec<u8>>,
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Append a resource blob, returning its id.
    pub fn add_resource(&mut self, blob: Vec<u8>) -> usize {
        self.resources.push(blob);
        self.resources.len() - 1
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}


// Opcode + its encoded arguments, the argument length always matches the opcode schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    arguments: Vec<u8>,
}

impl Instruction {
    /// Encode each literal with the opcode's schema.
    pub fn encode<S: AsRef<str>>(opcode: Opcode, literals: &[S]) -> Result<Instruction, ErrorKind> {
        let types = opcode.argument_types();
        if literals.len() != types.len() {
            return Err(ErrorKind::InvalidParameterCount {
                mnemonic: opcode.mnemonic().to_string(),
                expected: types.len(),
                found: literals.len(),
            });
        }

        let mut arguments = Vec::with_capacity(opcode.argument_width());
        for (ty, literal) in types.iter().zip(literals) {
            arguments.extend(value::encode(*ty, literal.as_ref())?);
        }

        Ok(Instruction { opcode, arguments })
    }

    /// Wrap already encoded arguments, `None` if they don't fit the schema width.
    pub fn from_raw(opcode: Opcode, arguments: Vec<u8>) -> Option<Instruction> {
        if arguments.len() == opcode.argument_width() {
            Some(Instruction { opcode, arguments })
        } else {
            None
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn arguments(&self) -> &[u8] {
        &self.arguments
    }

    /// Decode the arguments back into typed values, in schema order.
    pub fn values(&self) -> Vec<Value> {
        let mut rest = &self.arguments[..];
        self.opcode.argument_types().iter()
            .filter_map(|&ty| {
                let v = value::decode(ty, rest)?;
                rest = &rest[ty.byte_width()..];
                Some(v)
            })
            .collect()
    }
}


#[cfg(test)]
mod program_tests {
    use super::*;
    use crate::error::ValueFormatError;

    #[test]
    fn encode_two_vars() {
        let inst = Instruction::encode(Opcode::JmpEqu, &["1", "2"]).unwrap();
        assert_eq!(inst.opcode(), Opcode::JmpEqu);
        assert_eq!(inst.arguments(), &[1, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(inst.values(), vec![Value::UInt(1), Value::UInt(2)]);
    }

    #[test]
    fn encode_mixed_schema() {
        let inst = Instruction::encode(Opcode::SetAccByte, &["513", "7"]).unwrap();
        assert_eq!(inst.arguments(), &[0x01, 0x02, 0x07]);
        assert_eq!(inst.values(), vec![Value::UShort(513), Value::Byte(7)]);
    }

    #[test]
    fn encode_no_arguments() {
        let none: [&str; 0] = [];
        let inst = Instruction::encode(Opcode::Noop, &none).unwrap();
        assert!(inst.arguments().is_empty());
        assert!(inst.values().is_empty());
    }

    #[test]
    fn encode_every_opcode() {
        for op in Opcode::ALL {
            let literals: Vec<&str> = op.argument_types().iter().map(|_| "1").collect();
            let inst = Instruction::encode(op, &literals).unwrap();
            assert_eq!(inst.arguments().len(), op.argument_width(), "{:?}", op);
        }
    }

    #[test]
    fn wrong_argument_count() {
        for op in Opcode::ALL {
            let expected = op.argument_types().len();

            let more: Vec<&str> = vec!["1"; expected + 1];
            assert_eq!(
                Instruction::encode(op, &more),
                Err(ErrorKind::InvalidParameterCount {
                    mnemonic: op.mnemonic().to_string(),
                    expected,
                    found: expected + 1,
                })
            );

            if expected > 0 {
                let fewer: Vec<&str> = vec!["1"; expected - 1];
                assert!(matches!(
                    Instruction::encode(op, &fewer),
                    Err(ErrorKind::InvalidParameterCount { found, .. }) if found == expected - 1
                ));
            }
        }
    }

    #[test]
    fn bad_literal() {
        assert_eq!(
            Instruction::encode(Opcode::Var, &["x"]),
            Err(ErrorKind::ValueFormat(ValueFormatError::new("x", "uint32")))
        );
    }

    #[test]
    fn raw_width_is_checked() {
        assert!(Instruction::from_raw(Opcode::Var, vec![1, 0, 0, 0]).is_some());
        assert!(Instruction::from_raw(Opcode::Var, vec![1, 0, 0]).is_none());
        assert!(Instruction::from_raw(Opcode::Noop, vec![0]).is_none());
    }

    #[test]
    fn resource_ids_are_positional() {
        let mut program = Program::new();
        assert_eq!(program.add_resource(vec![1]), 0);
        assert_eq!(program.add_resource(vec![]), 1);
        assert_eq!(program.resources, vec![vec![1], vec![]]);
    }
}
