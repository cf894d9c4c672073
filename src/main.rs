use std::fs;

use clap::Parser;
use quill::run;

/// quill is a small, dynamically-typed scripting language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a quill
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
