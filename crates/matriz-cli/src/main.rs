//! matriz: interactive console calculator for dense matrices.
//!
//! Prompts for two matrices, then serves an operation menu (sum,
//! difference, product) until exit.

use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(name = "matriz")]
#[command(about = "Interactive matrix calculator: add, subtract, multiply")]
#[command(version)]
struct Cli {
    /// Decimal places used when printing matrices
    #[arg(short, long, default_value = "2")]
    precision: usize,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    matriz_cli::run(stdin.lock(), stdout.lock(), cli.precision)
}
