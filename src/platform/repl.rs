//! Interactive read-eval-print loop
//!
//! Every line is one independent evaluation; an error on one line has no
//! effect on the next.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::cli::{quote, raw};
use crate::api::{self, CalcError, Trace};
use crate::core::compiler::Sequence;
use crate::core::config::EvalConfig;

/// Notation accepted by the REPL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// `(1 + 2) * 3`
    #[default]
    Infix,
    /// `1 2 + 3 *`
    Postfix,
}

impl Mode {
    pub fn prompt(&self) -> &'static str {
        match self {
            Mode::Infix => "infix> ",
            Mode::Postfix => "postfix> ",
        }
    }
}

/// REPL settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    pub mode: Mode,
    /// Print the token, resolved and postfix sequences (infix mode)
    pub show_steps: bool,
    pub eval: EvalConfig,
}

/// Evaluate one line in the given mode
pub fn eval_line(line: &str, options: &ReplOptions) -> Result<i64, CalcError> {
    match options.mode {
        Mode::Infix => api::evaluate_with(line, &options.eval),
        Mode::Postfix => api::evaluate_postfix(line, &options.eval),
    }
}

/// Run until `input` reaches EOF
///
/// Each line is echoed as `input="..."` with whitespace made visible, then
/// answered with `val = N` or `Error: ...`. Invalid UTF-8 is replaced with
/// U+FFFD and left for the scanner to reject.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, options: &ReplOptions) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", options.mode.prompt())?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            debug!(target: "calc::cli", "EOF, leaving REPL");
            return Ok(());
        }
        let line = String::from_utf8_lossy(strip_line_ending(&buf));

        writeln!(output, "input={}", quote(&raw(&line, ".")))?;

        let result = match (options.mode, options.show_steps) {
            (Mode::Infix, true) => {
                let traced = api::trace(&line, &options.eval);
                if let Ok(t) = &traced {
                    write_steps(output, t)?;
                }
                traced.map(|t| t.value)
            }
            _ => eval_line(&line, options),
        };

        match result {
            Ok(value) => writeln!(output, "val = {value}")?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }
}

/// `line` without its trailing `\n` or `\r\n`
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Token, resolved and postfix sequences of one evaluation
pub fn write_steps<W: Write>(output: &mut W, t: &Trace) -> io::Result<()> {
    writeln!(output, "tokens   = {}", Sequence(&t.tokens))?;
    writeln!(output, "resolved = {}", Sequence(&t.resolved))?;
    writeln!(output, "postfix  = {}", Sequence(&t.postfix))
}
