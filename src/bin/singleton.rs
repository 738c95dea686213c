// Singleton: one logger for the whole process, injected into its consumers.

use std::process::ExitCode;

use healthcare_patterns::singleton::{self, Doctor, Logger, Patient};
use healthcare_patterns::{console, DemoConfig, HealthMetrics, Result};

fn run(logger: &Logger) -> Result<()> {
    let metrics = HealthMetrics::new(72, "120/80");

    println!("{}", console::section("Before: consumers reach for a module-level logger"));
    let patient = singleton::naive::Patient::new("Felipe");
    let doctor = singleton::naive::Doctor::new("Dr. Marcos");
    patient.update_health_metrics(&metrics)?;
    doctor.review_health_metrics(&patient, &metrics)?;
    singleton::naive::logger().print_log_count();
    println!();

    println!("{}", console::section("After: one shared logger"));
    let patient = Patient::new("Felipe Barros", logger);
    let doctor = Doctor::new("Dr. Marcos", logger);
    patient.update_health_metrics(&metrics)?;
    doctor.review_health_metrics(&patient, &metrics)?;

    let same = std::ptr::eq(logger, Logger::global());
    println!("Same logger instance everywhere: {same}");
    logger.print_log_count();
    Ok(())
}

fn main() -> ExitCode {
    console::init(&DemoConfig::load_or_default());
    println!("{}\n", console::banner("Pattern: Singleton"));

    // Obtained once here and passed down from this point on.
    let logger = Logger::global();

    match run(logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::failure(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
