use std::{fs, io};

use clap::Parser;
use quill::{get_result, interpreter::repl};

/// quill is a small, dynamically typed scripting language with first-class
/// functions, arrays and hashes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path to a script file instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the final value of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text (or a script path with --file). Starts the
    /// interactive shell when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(stdin.lock(), io::stdout()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
