// Flyweight: medical conditions are built once and shared by every patient.

use std::process::ExitCode;
use std::rc::Rc;

use healthcare_patterns::flyweight::{self, Appointment, ConditionRegistry};
use healthcare_patterns::{console, DemoConfig, Result};

fn print_appointments(appointments: &[Appointment]) -> Result<()> {
    for appointment in appointments {
        println!("{}", appointment.to_pretty_json()?);
    }
    Ok(())
}

fn run() -> Result<()> {
    println!("{}", console::section("Before: conditions constructed directly"));
    let appointments = flyweight::naive::sample_appointments();
    print_appointments(&appointments)?;
    println!();

    println!("{}", console::section("After: conditions from a shared registry"));
    let mut registry = ConditionRegistry::new();
    let appointments = flyweight::sample_appointments(&mut registry);
    print_appointments(&appointments)?;

    let again = registry.get_or_create("Diabetes", flyweight::ConditionDetails::default());
    let shared = Rc::ptr_eq(&again, &appointments[0].patient.conditions[0]);
    println!("\nDistinct conditions in registry: {}", registry.len());
    println!("Second request for Diabetes returns the shared instance: {shared}");
    Ok(())
}

fn main() -> ExitCode {
    console::init(&DemoConfig::load_or_default());
    println!("{}\n", console::banner("Pattern: Flyweight"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::failure(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
