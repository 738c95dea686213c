// Chain of Responsibility: a claim passes Receptionist -> Nurse -> Doctor -> Insurance Officer.

use std::io;
use std::process::ExitCode;

use healthcare_patterns::chain::{self, Claim};
use healthcare_patterns::{console, DemoConfig, Result};

fn run() -> Result<()> {
    let claim = Claim::new("Marcos", 5000.0);
    let mut out = io::stdout().lock();

    println!("{}", console::section("Before: every role called by hand"));
    chain::naive::process_individually(&claim, &mut out)?;
    println!();

    println!("{}", console::section("After: handlers linked into a chain"));
    chain::claim_chain().handle(&claim, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    console::init(&DemoConfig::load_or_default());
    println!("{}\n", console::banner("Pattern: Chain of Responsibility"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::failure(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
