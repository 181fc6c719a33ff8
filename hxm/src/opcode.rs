use crate::types::{self, ValueType};


// Argument layouts shared by many opcodes
const NONE:        &[ValueType] = &[];
const ONE_VAR:     &[ValueType] = &[ValueType::UInt];
const TWO_VARS:    &[ValueType] = &[ValueType::UInt, ValueType::UInt];
const JMP_PARAMS:  &[ValueType] = &[ValueType::UInt, ValueType::UInt, ValueType::UInt];
const USHORT:      &[ValueType] = &[ValueType::UShort];
const BYTE:        &[ValueType] = &[ValueType::Byte];
const USHORT_BYTE: &[ValueType] = &[ValueType::UShort, ValueType::Byte];
const USHORT_UINT: &[ValueType] = &[ValueType::UShort, ValueType::UInt];


/// Every HXM operation. The discriminant is the byte written to the image, so the
/// variants must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Syscall = 0x00,
    Var = 0x01,
    SubVar = 0x02,
    AddVar = 0x03,
    MulVar = 0x04,
    DivVar = 0x05,
    SetVar = 0x06,
    SetAcc = 0x07,
    SubAcc = 0x08,
    AddAcc = 0x09,
    MulAcc = 0x0A,
    DivAcc = 0x0B,
    Jmp = 0x0C,
    JmpVar = 0x0D,
    DelVar = 0x0E,
    JmpEqu = 0x0F,
    JmpNeq = 0x10,
    JmpG = 0x11,
    JmpGe = 0x12,
    JmpL = 0x13,
    JmpLe = 0x14,
    JmpEquVar = 0x15,
    JmpNeqVar = 0x16,
    JmpGVar = 0x17,
    JmpGeVar = 0x18,
    JmpLVar = 0x19,
    JmpLeVar = 0x1A,
    Inc = 0x1B,
    IncVar = 0x1C,
    Dec = 0x1D,
    DecVar = 0x1E,
    VarCpy = 0x1F,
    Noop = 0x20,
    AndVar = 0x21,
    And = 0x22,
    AndAccVar = 0x23,
    OrVar = 0x24,
    Or = 0x25,
    OrAccVar = 0x26,
    XorVar = 0x27,
    Xor = 0x28,
    XorAccVar = 0x29,
    LShiftVar = 0x2A,
    LShift = 0x2B,
    LShiftAccVar = 0x2C,
    RShiftVar = 0x2D,
    RShift = 0x2E,
    RShiftAccVar = 0x2F,
    NotVar = 0x30,
    Not = 0x31,
    NotAccVar = 0x32,
    SyscallRet = 0x33,
    SyscallAcc = 0x34,
    Wait = 0x35,
    WaitVar = 0x36,
    End = 0x37,
    EndEqu = 0x38,
    EndNeq = 0x39,
    EndG = 0x3A,
    EndGe = 0x3B,
    EndL = 0x3C,
    EndLe = 0x3D,
    EndEquVar = 0x3E,
    EndNeqVar = 0x3F,
    EndGVar = 0x40,
    EndGeVar = 0x41,
    EndLVar = 0x42,
    EndLeVar = 0x43,
    Mod = 0x44,
    ModVar = 0x45,
    ModAcc = 0x46,
    ModAccO = 0x47,
    SyscallVar = 0x48,
    ScaAppend = 0x49,
    ScaAppendAcc = 0x4A,
    ScaClear = 0x4B,
    VarAppend = 0x4C,
    ChangeAcc = 0x4D,
    ChangeVar = 0x4E,
    VarAppendB = 0x4F,
    AppendAcc = 0x50,
    AppendAccVar = 0x51,
    VarAppendAcc = 0x52,
    PopStack = 0x53,
    PushStack = 0x54,
    PopStackVar = 0x55,
    PushStackVar = 0x56,
    InitStack = 0x57,
    UnloadStack = 0x58,
    DelayJmp = 0x59,
    DelayJmpVar = 0x5A,
    Lipk = 0x5B,
    LipkVar = 0x5C,
    Prev = 0x5D,
    Back = 0x5E,
    BackVar = 0x5F,
    SetAccByte = 0x60,
    SetAccByteVar = 0x61,
    SetVarByte = 0x62,
    SetVarByteVar = 0x63,
    SetByteConstPos = 0x64,
    SetByteConstVal = 0x65,
    ResetAcc = 0x66,
    TrimAcc = 0x67,
    TrimAccVar = 0x68,
    SkipAcc = 0x69,
    SkipAccVar = 0x6A,
    TrimVar = 0x6B,
    TrimVarVar = 0x6C,
    SkipVar = 0x6D,
    SkipVarVar = 0x6E,
    LoadRes = 0x6F,
    LoadResVar = 0x70,
    F2xm1 = 0x71,
    F2xm1Var = 0x72,
    F2xm1Acc = 0x73,
    FAbs = 0x74,
    FAbsVar = 0x75,
    FAbsAcc = 0x76,
    FRndInt = 0x77,
    FRndIntVar = 0x78,
    FRndIntAcc = 0x79,
    FAdd = 0x7A,
    FSub = 0x7B,
    FMul = 0x7C,
    FDiv = 0x7D,
    FSqrt = 0x7E,
    FChs = 0x7F,
    FChsCpy = 0x80,
    FTan = 0x81,
    FPatan = 0x82,
    FJmpEqu = 0x83,
    FJmpNeq = 0x84,
    FJmpG = 0x85,
    FJmpGe = 0x86,
    FJmpL = 0x87,
    FJmpLe = 0x88,
    FJmpEquVar = 0x89,
    FJmpNeqVar = 0x8A,
    FJmpGVar = 0x8B,
    FJmpGeVar = 0x8C,
    FJmpLVar = 0x8D,
    FJmpLeVar = 0x8E,
}

// Mnemonic lookup table, generated by build.rs
include!(concat!(env!("OUT_DIR"), "/mnemonic.rs"));

impl Opcode {
    /// Every opcode, indexed by its code.
    pub const ALL: [Opcode; 143] = [
        Opcode::Syscall,
        Opcode::Var,
        Opcode::SubVar,
        Opcode::AddVar,
        Opcode::MulVar,
        Opcode::DivVar,
        Opcode::SetVar,
        Opcode::SetAcc,
        Opcode::SubAcc,
        Opcode::AddAcc,
        Opcode::MulAcc,
        Opcode::DivAcc,
        Opcode::Jmp,
        Opcode::JmpVar,
        Opcode::DelVar,
        Opcode::JmpEqu,
        Opcode::JmpNeq,
        Opcode::JmpG,
        Opcode::JmpGe,
        Opcode::JmpL,
        Opcode::JmpLe,
        Opcode::JmpEquVar,
        Opcode::JmpNeqVar,
        Opcode::JmpGVar,
        Opcode::JmpGeVar,
        Opcode::JmpLVar,
        Opcode::JmpLeVar,
        Opcode::Inc,
        Opcode::IncVar,
        Opcode::Dec,
        Opcode::DecVar,
        Opcode::VarCpy,
        Opcode::Noop,
        Opcode::AndVar,
        Opcode::And,
        Opcode::AndAccVar,
        Opcode::OrVar,
        Opcode::Or,
        Opcode::OrAccVar,
        Opcode::XorVar,
        Opcode::Xor,
        Opcode::XorAccVar,
        Opcode::LShiftVar,
        Opcode::LShift,
        Opcode::LShiftAccVar,
        Opcode::RShiftVar,
        Opcode::RShift,
        Opcode::RShiftAccVar,
        Opcode::NotVar,
        Opcode::Not,
        Opcode::NotAccVar,
        Opcode::SyscallRet,
        Opcode::SyscallAcc,
        Opcode::Wait,
        Opcode::WaitVar,
        Opcode::End,
        Opcode::EndEqu,
        Opcode::EndNeq,
        Opcode::EndG,
        Opcode::EndGe,
        Opcode::EndL,
        Opcode::EndLe,
        Opcode::EndEquVar,
        Opcode::EndNeqVar,
        Opcode::EndGVar,
        Opcode::EndGeVar,
        Opcode::EndLVar,
        Opcode::EndLeVar,
        Opcode::Mod,
        Opcode::ModVar,
        Opcode::ModAcc,
        Opcode::ModAccO,
        Opcode::SyscallVar,
        Opcode::ScaAppend,
        Opcode::ScaAppendAcc,
        Opcode::ScaClear,
        Opcode::VarAppend,
        Opcode::ChangeAcc,
        Opcode::ChangeVar,
        Opcode::VarAppendB,
        Opcode::AppendAcc,
        Opcode::AppendAccVar,
        Opcode::VarAppendAcc,
        Opcode::PopStack,
        Opcode::PushStack,
        Opcode::PopStackVar,
        Opcode::PushStackVar,
        Opcode::InitStack,
        Opcode::UnloadStack,
        Opcode::DelayJmp,
        Opcode::DelayJmpVar,
        Opcode::Lipk,
        Opcode::LipkVar,
        Opcode::Prev,
        Opcode::Back,
        Opcode::BackVar,
        Opcode::SetAccByte,
        Opcode::SetAccByteVar,
        Opcode::SetVarByte,
        Opcode::SetVarByteVar,
        Opcode::SetByteConstPos,
        Opcode::SetByteConstVal,
        Opcode::ResetAcc,
        Opcode::TrimAcc,
        Opcode::TrimAccVar,
        Opcode::SkipAcc,
        Opcode::SkipAccVar,
        Opcode::TrimVar,
        Opcode::TrimVarVar,
        Opcode::SkipVar,
        Opcode::SkipVarVar,
        Opcode::LoadRes,
        Opcode::LoadResVar,
        Opcode::F2xm1,
        Opcode::F2xm1Var,
        Opcode::F2xm1Acc,
        Opcode::FAbs,
        Opcode::FAbsVar,
        Opcode::FAbsAcc,
        Opcode::FRndInt,
        Opcode::FRndIntVar,
        Opcode::FRndIntAcc,
        Opcode::FAdd,
        Opcode::FSub,
        Opcode::FMul,
        Opcode::FDiv,
        Opcode::FSqrt,
        Opcode::FChs,
        Opcode::FChsCpy,
        Opcode::FTan,
        Opcode::FPatan,
        Opcode::FJmpEqu,
        Opcode::FJmpNeq,
        Opcode::FJmpG,
        Opcode::FJmpGe,
        Opcode::FJmpL,
        Opcode::FJmpLe,
        Opcode::FJmpEquVar,
        Opcode::FJmpNeqVar,
        Opcode::FJmpGVar,
        Opcode::FJmpGeVar,
        Opcode::FJmpLVar,
        Opcode::FJmpLeVar,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Opcode> {
        Opcode::ALL.get(code as usize).copied()
    }

    /// Case sensitive, mnemonics are all lowercase.
    pub fn lookup(mnemonic: &str) -> Option<Opcode> {
        MNEMONIC.get(mnemonic).copied()
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Syscall          => "syscall",
            Opcode::Var              => "var",
            Opcode::SubVar           => "subvar",
            Opcode::AddVar           => "addvar",
            Opcode::MulVar           => "mulvar",
            Opcode::DivVar           => "divvar",
            Opcode::SetVar           => "setvar",
            Opcode::SetAcc           => "setacc",
            Opcode::SubAcc           => "subacc",
            Opcode::AddAcc           => "addacc",
            Opcode::MulAcc           => "mulacc",
            Opcode::DivAcc           => "divacc",
            Opcode::Jmp              => "jmp",
            Opcode::JmpVar           => "jmpvar",
            Opcode::DelVar           => "delvar",
            Opcode::JmpEqu           => "jmpequ",
            Opcode::JmpNeq           => "jmpneq",
            Opcode::JmpG             => "jmpg",
            Opcode::JmpGe            => "jmpge",
            Opcode::JmpL             => "jmpl",
            Opcode::JmpLe            => "jmple",
            Opcode::JmpEquVar        => "jmpequvar",
            Opcode::JmpNeqVar        => "jmpneqvar",
            Opcode::JmpGVar          => "jmpgvar",
            Opcode::JmpGeVar         => "jmpgevar",
            Opcode::JmpLVar          => "jmplvar",
            Opcode::JmpLeVar         => "jmplevar",
            Opcode::Inc              => "inc",
            Opcode::IncVar           => "incvar",
            Opcode::Dec              => "dec",
            Opcode::DecVar           => "decvar",
            Opcode::VarCpy           => "varcpy",
            Opcode::Noop             => "noop",
            Opcode::AndVar           => "andvar",
            Opcode::And              => "and",
            Opcode::AndAccVar        => "andaccvar",
            Opcode::OrVar            => "orvar",
            Opcode::Or               => "or",
            Opcode::OrAccVar         => "oraccvar",
            Opcode::XorVar           => "xorvar",
            Opcode::Xor              => "xor",
            Opcode::XorAccVar        => "xoraccvar",
            Opcode::LShiftVar        => "lshiftvar",
            Opcode::LShift           => "lshift",
            Opcode::LShiftAccVar     => "lshiftaccvar",
            Opcode::RShiftVar        => "rshiftvar",
            Opcode::RShift           => "rshift",
            Opcode::RShiftAccVar     => "rshiftaccvar",
            Opcode::NotVar           => "notvar",
            Opcode::Not              => "not",
            Opcode::NotAccVar        => "notaccvar",
            Opcode::SyscallRet       => "syscallret",
            Opcode::SyscallAcc       => "syscallacc",
            Opcode::Wait             => "wait",
            Opcode::WaitVar          => "waitvar",
            Opcode::End              => "end",
            Opcode::EndEqu           => "endequ",
            Opcode::EndNeq           => "endneq",
            Opcode::EndG             => "endg",
            Opcode::EndGe            => "endge",
            Opcode::EndL             => "endl",
            Opcode::EndLe            => "endle",
            Opcode::EndEquVar        => "endequvar",
            Opcode::EndNeqVar        => "endneqvar",
            Opcode::EndGVar          => "endgvar",
            Opcode::EndGeVar         => "endgevar",
            Opcode::EndLVar          => "endlvar",
            Opcode::EndLeVar         => "endlevar",
            Opcode::Mod              => "mod",
            Opcode::ModVar           => "modvar",
            Opcode::ModAcc           => "modacc",
            Opcode::ModAccO          => "modacco",
            Opcode::SyscallVar       => "syscallvar",
            Opcode::ScaAppend        => "scaappend",
            Opcode::ScaAppendAcc     => "scaappendacc",
            Opcode::ScaClear         => "scaclear",
            Opcode::VarAppend        => "varappend",
            Opcode::ChangeAcc        => "changeacc",
            Opcode::ChangeVar        => "changevar",
            Opcode::VarAppendB       => "varappendb",
            Opcode::AppendAcc        => "appendacc",
            Opcode::AppendAccVar     => "appendaccvar",
            Opcode::VarAppendAcc     => "varappendacc",
            Opcode::PopStack         => "popstack",
            Opcode::PushStack        => "pushstack",
            Opcode::PopStackVar      => "popstackvar",
            Opcode::PushStackVar     => "pushstackvar",
            Opcode::InitStack        => "initstack",
            Opcode::UnloadStack      => "unloadstack",
            Opcode::DelayJmp         => "delayjmp",
            Opcode::DelayJmpVar      => "delayjmpvar",
            Opcode::Lipk             => "lipk",
            Opcode::LipkVar          => "lipkvar",
            Opcode::Prev             => "prev",
            Opcode::Back             => "back",
            Opcode::BackVar          => "backvar",
            Opcode::SetAccByte       => "setaccbyte",
            Opcode::SetAccByteVar    => "setaccbytevar",
            Opcode::SetVarByte       => "setvarbyte",
            Opcode::SetVarByteVar    => "setvarbytevar",
            Opcode::SetByteConstPos  => "setbyteconstpos",
            Opcode::SetByteConstVal  => "setbyteconstval",
            Opcode::ResetAcc         => "resetacc",
            Opcode::TrimAcc          => "trimacc",
            Opcode::TrimAccVar       => "trimaccvar",
            Opcode::SkipAcc          => "skipacc",
            Opcode::SkipAccVar       => "skipaccvar",
            Opcode::TrimVar          => "trimvar",
            Opcode::TrimVarVar       => "trimvarvar",
            Opcode::SkipVar          => "skipvar",
            Opcode::SkipVarVar       => "skipvarvar",
            Opcode::LoadRes          => "loadres",
            Opcode::LoadResVar       => "loadresvar",
            Opcode::F2xm1            => "f2xm1",
            Opcode::F2xm1Var         => "f2xm1var",
            Opcode::F2xm1Acc         => "f2xm1acc",
            Opcode::FAbs             => "fabs",
            Opcode::FAbsVar          => "fabsvar",
            Opcode::FAbsAcc          => "fabsacc",
            Opcode::FRndInt          => "frndint",
            Opcode::FRndIntVar       => "frndintvar",
            Opcode::FRndIntAcc       => "frndintacc",
            Opcode::FAdd             => "fadd",
            Opcode::FSub             => "fsub",
            Opcode::FMul             => "fmul",
            Opcode::FDiv             => "fdiv",
            Opcode::FSqrt            => "fsqrt",
            Opcode::FChs             => "fchs",
            Opcode::FChsCpy          => "fchscpy",
            Opcode::FTan             => "ftan",
            Opcode::FPatan           => "fpatan",
            Opcode::FJmpEqu          => "fjmpequ",
            Opcode::FJmpNeq          => "fjmpneq",
            Opcode::FJmpG            => "fjmpg",
            Opcode::FJmpGe           => "fjmpge",
            Opcode::FJmpL            => "fjmpl",
            Opcode::FJmpLe           => "fjmple",
            Opcode::FJmpEquVar       => "fjmpequvar",
            Opcode::FJmpNeqVar       => "fjmpneqvar",
            Opcode::FJmpGVar         => "fjmpgvar",
            Opcode::FJmpGeVar        => "fjmpgevar",
            Opcode::FJmpLVar         => "fjmplvar",
            Opcode::FJmpLeVar        => "fjmplevar",
        }
    }

    /// Argument types in the order they are written, anything unlisted takes none.
    pub fn argument_types(self) -> &'static [ValueType] {
        match self {
            Opcode::Syscall | Opcode::SyscallAcc => USHORT,
            Opcode::SyscallRet => USHORT_UINT,

            // Variables and accumulator
            Opcode::Var | Opcode::SubVar | Opcode::AddVar | Opcode::MulVar | Opcode::DivVar
            | Opcode::SetVar | Opcode::SetAcc | Opcode::SubAcc | Opcode::AddAcc
            | Opcode::MulAcc | Opcode::DivAcc | Opcode::DelVar => ONE_VAR,
            Opcode::IncVar | Opcode::DecVar => ONE_VAR,
            Opcode::VarCpy => TWO_VARS,

            // Jumps
            Opcode::JmpVar => ONE_VAR,
            Opcode::JmpEqu | Opcode::JmpNeq | Opcode::JmpG
            | Opcode::JmpGe | Opcode::JmpL | Opcode::JmpLe => TWO_VARS,
            Opcode::JmpEquVar | Opcode::JmpNeqVar | Opcode::JmpGVar
            | Opcode::JmpGeVar | Opcode::JmpLVar | Opcode::JmpLeVar => JMP_PARAMS,

            // Bitwise
            Opcode::AndVar | Opcode::OrVar | Opcode::XorVar => TWO_VARS,
            Opcode::And | Opcode::Or | Opcode::Xor => ONE_VAR,
            Opcode::LShiftVar | Opcode::RShiftVar | Opcode::NotVar => TWO_VARS,
            Opcode::LShift | Opcode::LShiftAccVar | Opcode::RShift
            | Opcode::RShiftAccVar | Opcode::Not | Opcode::NotAccVar => ONE_VAR,

            // Waiting and ending
            Opcode::WaitVar => ONE_VAR,
            Opcode::EndEqu | Opcode::EndNeq | Opcode::EndG
            | Opcode::EndGe | Opcode::EndL | Opcode::EndLe => ONE_VAR,
            Opcode::EndEquVar | Opcode::EndNeqVar | Opcode::EndGVar
            | Opcode::EndGeVar | Opcode::EndLVar | Opcode::EndLeVar => TWO_VARS,

            // Modulo
            Opcode::Mod | Opcode::ModAcc => TWO_VARS,
            Opcode::ModVar => JMP_PARAMS,
            Opcode::ModAccO => ONE_VAR,

            // Syscall argument buffer and appending
            Opcode::SyscallVar | Opcode::ScaAppend | Opcode::VarAppend => ONE_VAR,
            Opcode::ChangeAcc | Opcode::ChangeVar | Opcode::VarAppendB => BYTE,
            Opcode::AppendAcc | Opcode::AppendAccVar | Opcode::VarAppendAcc => ONE_VAR,

            // Stack and control flow history
            Opcode::PopStackVar | Opcode::PushStackVar | Opcode::DelayJmpVar
            | Opcode::LipkVar | Opcode::BackVar => ONE_VAR,

            // Byte level access
            Opcode::SetAccByte | Opcode::SetVarByte => USHORT_BYTE,
            Opcode::SetAccByteVar | Opcode::SetVarByteVar => TWO_VARS,
            Opcode::SetByteConstVal => &[ValueType::UInt, ValueType::Byte],
            Opcode::SetByteConstPos => USHORT_UINT,
            Opcode::TrimAcc | Opcode::SkipAcc | Opcode::TrimVar | Opcode::SkipVar => USHORT,
            Opcode::TrimAccVar | Opcode::SkipAccVar
            | Opcode::TrimVarVar | Opcode::SkipVarVar => ONE_VAR,

            // Resources
            Opcode::LoadRes => USHORT,
            Opcode::LoadResVar => USHORT_UINT,

            // Floating point
            Opcode::F2xm1 | Opcode::F2xm1Acc
            | Opcode::FAbs | Opcode::FAbsAcc
            | Opcode::FRndInt | Opcode::FRndIntAcc => ONE_VAR,
            Opcode::F2xm1Var | Opcode::FAbsVar | Opcode::FRndIntVar => TWO_VARS,
            Opcode::FAdd | Opcode::FSub | Opcode::FMul | Opcode::FDiv | Opcode::FSqrt
            | Opcode::FChs | Opcode::FChsCpy | Opcode::FTan | Opcode::FPatan => ONE_VAR,
            Opcode::FJmpEqu | Opcode::FJmpNeq | Opcode::FJmpG
            | Opcode::FJmpGe | Opcode::FJmpL | Opcode::FJmpLe
            | Opcode::FJmpEquVar | Opcode::FJmpNeqVar | Opcode::FJmpGVar
            | Opcode::FJmpGeVar | Opcode::FJmpLVar | Opcode::FJmpLeVar => JMP_PARAMS,

            _ => NONE,
        }
    }

    /// Encoded size of the arguments, not counting the opcode and length bytes.
    pub fn argument_width(self) -> usize {
        types::total_width(self.argument_types())
    }
}
