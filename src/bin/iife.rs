// Module encapsulation: IMC figures behind a single public operation.

use std::io;
use std::process::ExitCode;

use healthcare_patterns::encapsulation::{self, ImcApp};
use healthcare_patterns::{console, DemoConfig, Result};

fn run() -> Result<()> {
    let mut out = io::stdout().lock();

    println!("{}", console::section("Before: public data and free functions"));
    encapsulation::naive::display_user_imc(&encapsulation::naive::users(), &mut out)?;
    println!();

    println!("{}", console::section("After: private state, public display_imc"));
    ImcApp::new().display_imc(&mut out)?;
    println!();

    println!("{}", console::section("After: captured state behind a closure"));
    let app = encapsulation::imc_app();
    (app.display_imc)(&mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    console::init(&DemoConfig::load_or_default());
    println!("{}\n", console::banner("Pattern: IIFE / Module Encapsulation"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::failure(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
