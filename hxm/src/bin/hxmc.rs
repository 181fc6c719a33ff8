use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use hxm::{asm, disasm, image};


#[derive(Parser, Debug)]
#[command(name = "hxmc", version, about = "Compile HXM assembly into an HXM image")]
struct Cli {
    /// Source file
    #[arg(short, long)]
    input: PathBuf,

    /// Image file to write
    #[arg(short, long)]
    output: PathBuf,

    #[arg(short, long = "comment-prefix", default_value = "//")]
    comment_prefix: String,

    #[arg(short, long = "metadata-prefix", default_value = "#")]
    metadata_prefix: String,

    /// Log every compiled line
    #[arg(short, long)]
    verbose: bool,

    /// Skip lines that fail to compile instead of stopping
    #[arg(long)]
    ignore_errors: bool,

    /// Write the program's own version instead of the legacy author bytes
    #[arg(long)]
    fix_version_field: bool,

    /// Drop the colons inside STRING resources like the legacy toolchain
    #[arg(long)]
    join_string_colons: bool,

    /// Copyright notice stored in the image
    #[arg(long)]
    copyright: Option<String>,

    /// Print a listing of the compiled program
    #[arg(long)]
    disasm: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!("input: {}", cli.input.display());
    info!("output: {}", cli.output.display());

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let config = asm::Config {
        comment_prefix: cli.comment_prefix.clone(),
        metadata_prefix: cli.metadata_prefix.clone(),
        ignore_errors: cli.ignore_errors,
        join_string_colons: cli.join_string_colons,
    };
    let compiled = asm::compile_str(&source, &config)
        .with_context(|| format!("compiling {}", cli.input.display()))?;
    if !compiled.skipped.is_empty() {
        warn!("{} lines skipped", compiled.skipped.len());
    }

    let mut program = compiled.program;
    if let Some(copyright) = &cli.copyright {
        program.copyright = copyright.clone();
    }

    let options = image::ImageOptions { legacy_version_field: !cli.fix_version_field };
    let bytes = image::build_with(&program, &options).context("building image")?;
    fs::write(&cli.output, &bytes)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if cli.disasm {
        print!("{}", disasm::disassemble(&program));
    }

    info!("compiled {} ({} bytes)", cli.output.display(), bytes.len());
    Ok(())
}
