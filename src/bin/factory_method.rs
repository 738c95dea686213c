// Factory Method: menu choices from the command line become health reports.
//
//   cargo run --bin factory_method -- 1 2 3 0

use std::env;
use std::io;
use std::process::ExitCode;

use healthcare_patterns::factory::{self, MENU};
use healthcare_patterns::{console, DemoConfig, Result};

fn run(choices: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    println!("Menu: {MENU}");
    println!("Choices: {}\n", choices.join(" "));

    println!("{}", console::section("Before: the menu loop builds reports itself"));
    let reports = factory::naive::collect_reports(choices);
    factory::generate_all(&reports, &mut out)?;
    println!();

    println!("{}", console::section("After: reports come from the factory"));
    let reports = factory::collect_reports(choices);
    factory::generate_all(&reports, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    console::init(&DemoConfig::load_or_default());
    println!("{}\n", console::banner("Pattern: Factory Method"));

    let mut choices: Vec<String> = env::args().skip(1).collect();
    if choices.is_empty() {
        choices = vec!["1".to_string(), "2".to_string(), "0".to_string()];
    }

    match run(&choices) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::failure(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
