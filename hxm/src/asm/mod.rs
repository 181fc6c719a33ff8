use log::{debug, info, warn};

use crate::error::{CompileError, ErrorKind};
use crate::opcode::Opcode;
use crate::program::{Instruction, Program};

pub mod resource;


// Opens a resource block, matched case-insensitively at the start of a line
const RESOURCES: &str = "RESOURCES";
const END: &str = "END";


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start of a comment, empty disables comments.
    pub comment_prefix: String,
    /// Start of a metadata line, empty disables metadata.
    pub metadata_prefix: String,
    /// Initial state of the error-tolerant mode, metadata can flip it mid-source.
    pub ignore_errors: bool,
    /// Drop the colons inside `STRING` resource values the way the legacy toolchain
    /// does (`STR:key:value` stores `keyvalue`). Off by default, colons are kept.
    pub join_string_colons: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            comment_prefix: "//".to_string(),
            metadata_prefix: "#".to_string(),
            ignore_errors: false,
            join_string_colons: false,
        }
    }
}


/// Result of a successful pass, `skipped` holds the errors tolerated along the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compiled {
    pub program: Program,
    pub skipped: Vec<CompileError>,
}


pub fn compile_str(source: &str, config: &Config) -> Result<Compiled, CompileError> {
    compile(source.lines(), config)
}

/// Compile source lines into a `Program`.
///
/// Errors carry the 0-based index of the offending line. In error-tolerant mode the
/// offending line is dropped and the error lands in `Compiled::skipped` instead.
pub fn compile<I, S>(lines: I, config: &Config) -> Result<Compiled, CompileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pass = Pass::new(config);
    let mut lines = lines.into_iter().enumerate();

    info!("compiling (ignore errors: {})", pass.ignore_errors);
    while let Some((idx, line)) = lines.next() {
        let text = match pass.clean(line.as_ref()) {
            Some(text) => text,
            None => continue,
        };

        if let Some(body) = pass.metadata_body(text) {
            debug!("line {}: metadata {:?}", idx, body);
            let result = pass.metadata(body);
            pass.check(idx, result)?;
        } else if starts_with_ignore_case(text, RESOURCES) {
            pass.resources(idx, &mut lines)?;
        } else {
            debug!("line {}: {:?}", idx, text);
            let result = pass.instruction(text);
            pass.check(idx, result)?;
        }
    }

    info!(
        "compiled {} instructions, {} resources, {} errors ignored",
        pass.program.instructions.len(),
        pass.program.resources.len(),
        pass.skipped.len(),
    );
    Ok(Compiled { program: pass.program, skipped: pass.skipped })
}


// State of one compilation
struct Pass<'c> {
    config: &'c Config,
    ignore_errors: bool,
    program: Program,
    skipped: Vec<CompileError>,
}

impl<'c> Pass<'c> {
    fn new(config: &'c Config) -> Pass<'c> {
        Pass {
            config,
            ignore_errors: config.ignore_errors,
            program: Program::new(),
            skipped: Vec::new(),
        }
    }

    // Strip leading whitespace and comments, None if nothing is left
    fn clean<'a>(&self, line: &'a str) -> Option<&'a str> {
        let mut text = line.trim_start();

        let prefix = self.config.comment_prefix.as_str();
        if !prefix.is_empty() {
            if let Some(pos) = text.find(prefix) {
                text = &text[..pos];
            }
        }

        if text.trim().is_empty() { None } else { Some(text) }
    }

    fn is_comment(&self, text: &str) -> bool {
        let prefix = self.config.comment_prefix.as_str();
        !prefix.is_empty() && text.starts_with(prefix)
    }

    fn metadata_body<'a>(&self, text: &'a str) -> Option<&'a str> {
        let prefix = self.config.metadata_prefix.as_str();
        if prefix.is_empty() {
            None
        } else {
            text.strip_prefix(prefix)
        }
    }

    fn metadata(&mut self, body: &str) -> Result<(), ErrorKind> {
        // Only the first colon separates, the value keeps the rest
        let (key, value) = body.split_once(':').unwrap_or((body, ""));
        let value = value.trim_start().to_string();

        match key.trim().to_ascii_uppercase().as_str() {
            "TITLE"       => self.program.title = value,
            "AUTHOR"      => self.program.author = value,
            "VERSION"     => self.program.version = value,
            "DESCRIPTION" => self.program.description = value,

            "IGNORE_COMPILER_ERRORS" | "IGNORECOMPILERERRORS" => {
                warn!("compiler errors will now be ignored");
                self.ignore_errors = true;
            },
            "ENABLE_COMPILER_ERRORS" | "ENABLECOMPILERERRORS" => {
                warn!("compiler errors are no longer ignored");
                self.ignore_errors = false;
            },

            _ => return Err(ErrorKind::InvalidMetadataEntry(key.trim().to_string())),
        }
        Ok(())
    }

    // Consume lines up to END, each one is a resource entry
    fn resources<L, S>(&mut self, start: usize, lines: &mut L) -> Result<(), CompileError>
    where
        L: Iterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        debug!("line {}: resource block opened", start);

        for (idx, line) in lines {
            // Entries are taken raw, a comment marker inside a value is data
            let entry = line.as_ref().trim_start();
            if entry.trim().is_empty() || self.is_comment(entry) {
                continue;
            }

            if entry.trim().eq_ignore_ascii_case(END) {
                debug!("line {}: resource block closed", idx);
                return Ok(());
            }

            let result = resource::parse_entry(entry, self.config.join_string_colons).map(|blob| {
                debug!("line {}: resource #{} ({} bytes)", idx, self.program.resources.len(), blob.len());
                self.program.add_resource(blob);
            });
            self.check(idx, result)?;
        }

        self.check(start, Err(ErrorKind::InvalidResourceEntry("resource block is missing END".to_string())))
    }

    fn instruction(&mut self, text: &str) -> Result<(), ErrorKind> {
        let text = text.trim();
        let (mnemonic, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));

        let opcode = Opcode::lookup(mnemonic)
            .ok_or_else(|| ErrorKind::InvalidOpcode(mnemonic.to_string()))?;

        let rest = rest.trim();
        let literals: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(',').collect()
        };

        self.program.push(Instruction::encode(opcode, &literals)?);
        Ok(())
    }

    // Abort on error, or record it and carry on when errors are being ignored
    fn check(&mut self, line: usize, result: Result<(), ErrorKind>) -> Result<(), CompileError> {
        match result {
            Ok(()) => Ok(()),
            Err(kind) => {
                let err = CompileError::new(line, kind);
                if self.ignore_errors {
                    warn!("ignoring error: {}", err);
                    self.skipped.push(err);
                    Ok(())
                } else {
                    Err(err)
                }
            },
        }
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}


// Tests getting too long, include instead
include!("test.rs");
