use std::fs;
use std::io::{self, BufRead, Write};

use anaconda::run;
use clap::Parser;

/// anaconda is an easy to use interactive shell and interpreter for
/// arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells anaconda to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate, or a path when --file is set. When
    /// omitted, anaconda starts the interactive shell.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        shell();
        return;
    };

    let (source_name, text) = if args.file {
        let text = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        (contents, text)
    } else {
        ("<cli>".to_string(), contents)
    };

    match run(&source_name, text.trim_end()) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// The interactive read-eval-print loop. One line is one expression; the
/// loop ends at end of input.
fn shell() {
    let stdin = io::stdin();

    loop {
        print!("anaconda >");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match run("<stdin>", line.trim_end()) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("{e}"),
        }
    }
}
