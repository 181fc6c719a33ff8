use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    // phf_codegen for mnemonics, every value must name a variant of `opcode::Opcode`
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("mnemonic.rs");
    let mut file = BufWriter::new(File::create(&path)?);

    let mut map = phf_codegen::Map::new();
    map
        // Variables and accumulator arithmetic
        .entry("syscall",        "Opcode::Syscall")
        .entry("var",            "Opcode::Var")
        .entry("subvar",         "Opcode::SubVar")
        .entry("addvar",         "Opcode::AddVar")
        .entry("mulvar",         "Opcode::MulVar")
        .entry("divvar",         "Opcode::DivVar")
        .entry("setvar",         "Opcode::SetVar")
        .entry("setacc",         "Opcode::SetAcc")
        .entry("subacc",         "Opcode::SubAcc")
        .entry("addacc",         "Opcode::AddAcc")
        .entry("mulacc",         "Opcode::MulAcc")
        .entry("divacc",         "Opcode::DivAcc")

        // Jumps
        .entry("jmp",            "Opcode::Jmp")
        .entry("jmpvar",         "Opcode::JmpVar")
        .entry("delvar",         "Opcode::DelVar")
        .entry("jmpequ",         "Opcode::JmpEqu")
        .entry("jmpneq",         "Opcode::JmpNeq")
        .entry("jmpg",           "Opcode::JmpG")
        .entry("jmpge",          "Opcode::JmpGe")
        .entry("jmpl",           "Opcode::JmpL")
        .entry("jmple",          "Opcode::JmpLe")
        .entry("jmpequvar",      "Opcode::JmpEquVar")
        .entry("jmpneqvar",      "Opcode::JmpNeqVar")
        .entry("jmpgvar",        "Opcode::JmpGVar")
        .entry("jmpgevar",       "Opcode::JmpGeVar")
        .entry("jmplvar",        "Opcode::JmpLVar")
        .entry("jmplevar",       "Opcode::JmpLeVar")

        // Increment / decrement
        .entry("inc",            "Opcode::Inc")
        .entry("incvar",         "Opcode::IncVar")
        .entry("dec",            "Opcode::Dec")
        .entry("decvar",         "Opcode::DecVar")
        .entry("varcpy",         "Opcode::VarCpy")
        .entry("noop",           "Opcode::Noop")

        // Bitwise
        .entry("andvar",         "Opcode::AndVar")
        .entry("and",            "Opcode::And")
        .entry("andaccvar",      "Opcode::AndAccVar")
        .entry("orvar",          "Opcode::OrVar")
        .entry("or",             "Opcode::Or")
        .entry("oraccvar",       "Opcode::OrAccVar")
        .entry("xorvar",         "Opcode::XorVar")
        .entry("xor",            "Opcode::Xor")
        .entry("xoraccvar",      "Opcode::XorAccVar")
        .entry("lshiftvar",      "Opcode::LShiftVar")
        .entry("lshift",         "Opcode::LShift")
        .entry("lshiftaccvar",   "Opcode::LShiftAccVar")
        .entry("rshiftvar",      "Opcode::RShiftVar")
        .entry("rshift",         "Opcode::RShift")
        .entry("rshiftaccvar",   "Opcode::RShiftAccVar")
        .entry("notvar",         "Opcode::NotVar")
        .entry("not",            "Opcode::Not")
        .entry("notaccvar",      "Opcode::NotAccVar")

        // Syscalls, waiting and conditional program end
        .entry("syscallret",     "Opcode::SyscallRet")
        .entry("syscallacc",     "Opcode::SyscallAcc")
        .entry("wait",           "Opcode::Wait")
        .entry("waitvar",        "Opcode::WaitVar")
        .entry("end",            "Opcode::End")
        .entry("endequ",         "Opcode::EndEqu")
        .entry("endneq",         "Opcode::EndNeq")
        .entry("endg",           "Opcode::EndG")
        .entry("endge",          "Opcode::EndGe")
        .entry("endl",           "Opcode::EndL")
        .entry("endle",          "Opcode::EndLe")
        .entry("endequvar",      "Opcode::EndEquVar")
        .entry("endneqvar",      "Opcode::EndNeqVar")
        .entry("endgvar",        "Opcode::EndGVar")
        .entry("endgevar",       "Opcode::EndGeVar")
        .entry("endlvar",        "Opcode::EndLVar")
        .entry("endlevar",       "Opcode::EndLeVar")

        // Modulo
        .entry("mod",            "Opcode::Mod")
        .entry("modvar",         "Opcode::ModVar")
        .entry("modacc",         "Opcode::ModAcc")
        .entry("modacco",        "Opcode::ModAccO")

        // Syscall argument buffer and appends
        .entry("syscallvar",     "Opcode::SyscallVar")
        .entry("scaappend",      "Opcode::ScaAppend")
        .entry("scaappendacc",   "Opcode::ScaAppendAcc")
        .entry("scaclear",       "Opcode::ScaClear")
        .entry("varappend",      "Opcode::VarAppend")
        .entry("changeacc",      "Opcode::ChangeAcc")
        .entry("changevar",      "Opcode::ChangeVar")
        .entry("varappendb",     "Opcode::VarAppendB")
        .entry("appendacc",      "Opcode::AppendAcc")
        .entry("appendaccvar",   "Opcode::AppendAccVar")
        .entry("varappendacc",   "Opcode::VarAppendAcc")

        // Stack
        .entry("popstack",       "Opcode::PopStack")
        .entry("pushstack",      "Opcode::PushStack")
        .entry("popstackvar",    "Opcode::PopStackVar")
        .entry("pushstackvar",   "Opcode::PushStackVar")
        .entry("initstack",      "Opcode::InitStack")
        .entry("unloadstack",    "Opcode::UnloadStack")

        // Delayed jumps and program counter
        .entry("delayjmp",       "Opcode::DelayJmp")
        .entry("delayjmpvar",    "Opcode::DelayJmpVar")
        .entry("lipk",           "Opcode::Lipk")
        .entry("lipkvar",        "Opcode::LipkVar")
        .entry("prev",           "Opcode::Prev")
        .entry("back",           "Opcode::Back")
        .entry("backvar",        "Opcode::BackVar")

        // Byte access
        .entry("setaccbyte",     "Opcode::SetAccByte")
        .entry("setaccbytevar",  "Opcode::SetAccByteVar")
        .entry("setvarbyte",     "Opcode::SetVarByte")
        .entry("setvarbytevar",  "Opcode::SetVarByteVar")
        .entry("setbyteconstpos", "Opcode::SetByteConstPos")
        .entry("setbyteconstval", "Opcode::SetByteConstVal")

        // Trimming and skipping
        .entry("resetacc",       "Opcode::ResetAcc")
        .entry("trimacc",        "Opcode::TrimAcc")
        .entry("trimaccvar",     "Opcode::TrimAccVar")
        .entry("skipacc",        "Opcode::SkipAcc")
        .entry("skipaccvar",     "Opcode::SkipAccVar")
        .entry("trimvar",        "Opcode::TrimVar")
        .entry("trimvarvar",     "Opcode::TrimVarVar")
        .entry("skipvar",        "Opcode::SkipVar")
        .entry("skipvarvar",     "Opcode::SkipVarVar")

        // Resources
        .entry("loadres",        "Opcode::LoadRes")
        .entry("loadresvar",     "Opcode::LoadResVar")

        // Floating point
        .entry("f2xm1",          "Opcode::F2xm1")
        .entry("f2xm1var",       "Opcode::F2xm1Var")
        .entry("f2xm1acc",       "Opcode::F2xm1Acc")
        .entry("fabs",           "Opcode::FAbs")
        .entry("fabsvar",        "Opcode::FAbsVar")
        .entry("fabsacc",        "Opcode::FAbsAcc")
        .entry("frndint",        "Opcode::FRndInt")
        .entry("frndintvar",     "Opcode::FRndIntVar")
        .entry("frndintacc",     "Opcode::FRndIntAcc")
        .entry("fadd",           "Opcode::FAdd")
        .entry("fsub",           "Opcode::FSub")
        .entry("fmul",           "Opcode::FMul")
        .entry("fdiv",           "Opcode::FDiv")
        .entry("fsqrt",          "Opcode::FSqrt")
        .entry("fchs",           "Opcode::FChs")
        .entry("fchscpy",        "Opcode::FChsCpy")
        .entry("ftan",           "Opcode::FTan")
        .entry("fpatan",         "Opcode::FPatan")

        // Floating point jumps
        .entry("fjmpequ",        "Opcode::FJmpEqu")
        .entry("fjmpneq",        "Opcode::FJmpNeq")
        .entry("fjmpg",          "Opcode::FJmpG")
        .entry("fjmpge",         "Opcode::FJmpGe")
        .entry("fjmpl",          "Opcode::FJmpL")
        .entry("fjmple",         "Opcode::FJmpLe")
        .entry("fjmpequvar",     "Opcode::FJmpEquVar")
        .entry("fjmpneqvar",     "Opcode::FJmpNeqVar")
        .entry("fjmpgvar",       "Opcode::FJmpGVar")
        .entry("fjmpgevar",      "Opcode::FJmpGeVar")
        .entry("fjmplvar",       "Opcode::FJmpLVar")
        .entry("fjmplevar",      "Opcode::FJmpLeVar");

    writeln!(
        &mut file,
        "static MNEMONIC: phf::Map<&'static str, Opcode> = {};",
        map.build()
    )?;
    file.flush()
}
