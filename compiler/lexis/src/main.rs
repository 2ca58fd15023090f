//! Lexis CLI
//!
//! Inspect the token catalog and the source-position space.

use lexis::commands::{run, USAGE};
use lexis::CliError;

fn main() {
    lexis::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err @ CliError::UnknownCommand(_)) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
