//! trackdiff CLI
//!
//! Command-line interface for comparing two test-run tracks

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trackdiff", version)]
#[command(about = "trackdiff - Explain how a test run evolved", long_about = None)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => {
            // --help and --version
            let _ = e.print();
            std::process::exit(0);
        }
    };

    if let Err(e) = commands::compare::execute(cli.compare) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
