mod ledger;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => run::as_tui(),
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V" | "version") => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown argument: {other}");
        }
    }
}

fn print_usage() {
    println!("FinTrack — in-memory personal finance ledger");
    println!();
    println!("Usage: fintrack");
    println!();
    println!("Declare an income, record categorized transactions against it,");
    println!("and watch the running total. Nothing is persisted: the ledger");
    println!("lives for the session and is discarded on exit.");
    println!();
    println!("Options:");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}
