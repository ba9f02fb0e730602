use std::fs;

use clap::Parser;
use roman_calc::{REFERENCE_EXPRESSION, evaluate};
use tracing_subscriber::EnvFilter;

/// roman-calc evaluates arithmetic expressions written with Roman numerals,
/// such as `(MMMDCCXXIV - MMCCXXIX) * II`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells roman-calc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Logs every evaluation step. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let expression = match args.contents {
        Some(path) if args.file => fs::read_to_string(&path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                       std::process::exit(1);
                                   }),
        Some(expression) => expression,
        None => REFERENCE_EXPRESSION.to_string(),
    };

    match evaluate(&expression) {
        Ok(numeral) => println!("{numeral}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
