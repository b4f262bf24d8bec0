use std::{fs, path::PathBuf, process};

use clap::Parser;
use helang::{interpreter::evaluator::core::Context, run_script};
use rustyline::{DefaultEditor, error::ReadlineError};

/// helang is an interpreter for the he programming language, where every
/// value is a u8.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a he script to run. Starts the interactive shell when
    /// omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_shell(),
    }
}

/// Reads a script file and evaluates it once against a fresh context. The
/// first error terminates the process.
fn run_file(path: &PathBuf) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     process::exit(1);
                 });

    let mut context = Context::new();
    if let Err(e) = run_script(&source, &mut context) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Runs the interactive shell: one line at a time against a persistent
/// context, printing errors without ending the session.
fn run_shell() {
    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                         eprintln!("Failed to start the shell: {e}");
                         process::exit(1);
                     });
    let mut context = Context::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" {
                    break;
                }
                let _ = editor.add_history_entry(line);

                let mut source = line.to_string();
                if !source.ends_with(';') {
                    source.push(';');
                }

                if let Err(e) = run_script(&source, &mut context) {
                    println!("{e}");
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }
    }
}
