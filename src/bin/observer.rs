// Observer: a dashboard and a doctor notification follow a patient's vitals.

use std::process::ExitCode;
use std::rc::Rc;

use healthcare_patterns::observer::{self, Dashboard, DoctorNotification, Patient, PatientObserver};
use healthcare_patterns::{console, DemoConfig, HealthMetrics, Result};

fn readings() -> [HealthMetrics; 2] {
    [HealthMetrics::new(72, "120/80"), HealthMetrics::new(75, "125/85")]
}

fn run() -> Result<()> {
    println!("{}", console::section("Before: the patient calls each party"));
    let mut patient = observer::naive::Patient::new("Jonas");
    for metrics in readings() {
        patient.set_health_metrics(metrics)?;
    }
    println!();

    println!("{}", console::section("After: observers subscribe to the patient"));
    let dashboard: Rc<dyn PatientObserver> = Rc::new(Dashboard);
    let doctor_notification: Rc<dyn PatientObserver> = Rc::new(DoctorNotification);

    let mut patient = Patient::new("Jonas");
    patient.add_observer(Rc::clone(&dashboard));
    patient.add_observer(Rc::clone(&doctor_notification));

    for metrics in readings() {
        patient.set_health_metrics(metrics);
    }

    println!("\nDashboard unsubscribes:");
    patient.remove_observer(&dashboard);
    patient.set_health_metrics(HealthMetrics::new(70, "118/78"));
    Ok(())
}

fn main() -> ExitCode {
    console::init(&DemoConfig::load_or_default());
    println!("{}\n", console::banner("Pattern: Observer"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::failure(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
