use std::io::{self, BufRead, Write};

use crate::interpreter::{
    evaluator::core::eval_program,
    parser::core::parse,
    value::{core::Value, environment::Environment},
};

/// The prompt printed before every line.
pub const PROMPT: &str = ">> ";

const BANNER: &str = r"
      .-.
     (q q)   that line did not parse
     /   \
    (__|__)
";

/// Runs the interactive shell until the input ends.
///
/// One line is read per prompt. Lines that fail to parse print the banner
/// followed by every parser error, tab-indented, and evaluate nothing.
/// Lines that parse are evaluated against an environment that persists for
/// the whole session, so `let` bindings survive across prompts. Runtime
/// errors render with an `ERROR: ` prefix; `Void` results (from `print` and
/// the assignment forms) print nothing.
///
/// # Errors
/// Returns any I/O error raised by the underlying reader or writer.
pub fn start(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Environment::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            writeln!(output, "{BANNER}")?;
            for error in &errors {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Value::Void) => {},
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
