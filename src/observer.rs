//! Observer: a patient notifies every subscribed party when its health
//! metrics change.

use std::rc::Rc;

use tracing::debug;

use crate::metrics::HealthMetrics;

pub trait PatientObserver {
    fn update(&self, patient: &Patient);
}

pub struct Dashboard;

impl Dashboard {
    pub fn message(&self, patient_name: &str) -> String {
        format!("Dashboard: Displaying updated health metrics for {patient_name}.")
    }
}

impl PatientObserver for Dashboard {
    fn update(&self, patient: &Patient) {
        println!("{}", self.message(patient.name()));
    }
}

pub struct DoctorNotification;

impl DoctorNotification {
    pub fn message(&self, patient_name: &str) -> String {
        format!("Doctor Notification: Sending health metrics update for {patient_name} to the doctor.")
    }
}

impl PatientObserver for DoctorNotification {
    fn update(&self, patient: &Patient) {
        println!("{}", self.message(patient.name()));
    }
}

// ============================================================================
// Before: the patient knows every party it must tell
// ============================================================================

pub mod naive {
    use super::{Dashboard, DoctorNotification};
    use crate::error::Result;
    use crate::metrics::HealthMetrics;

    pub struct Patient {
        name: String,
        health_metrics: HealthMetrics,
        dashboard: Dashboard,
        doctor_notification: DoctorNotification,
    }

    impl Patient {
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                health_metrics: HealthMetrics::default(),
                dashboard: Dashboard,
                doctor_notification: DoctorNotification,
            }
        }

        pub fn health_metrics(&self) -> &HealthMetrics {
            &self.health_metrics
        }

        pub fn set_health_metrics(&mut self, metrics: HealthMetrics) -> Result<()> {
            self.health_metrics = metrics;
            self.notify()
        }

        fn notify(&self) -> Result<()> {
            println!(
                "{}'s health metrics updated: {}",
                self.name,
                self.health_metrics.to_json()?
            );
            println!("{}", self.dashboard.message(&self.name));
            println!("{}", self.doctor_notification.message(&self.name));
            Ok(())
        }
    }
}

// ============================================================================
// After: subscribers register themselves
// ============================================================================

pub struct Patient {
    name: String,
    health_metrics: HealthMetrics,
    observers: Vec<Rc<dyn PatientObserver>>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health_metrics: HealthMetrics::default(),
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health_metrics(&self) -> &HealthMetrics {
        &self.health_metrics
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn PatientObserver>) {
        self.observers.push(observer);
    }

    /// Drops every subscription that is this exact observer instance.
    pub fn remove_observer(&mut self, observer: &Rc<dyn PatientObserver>) {
        self.observers.retain(|existing| !Rc::ptr_eq(existing, observer));
    }

    pub fn set_health_metrics(&mut self, metrics: HealthMetrics) {
        self.health_metrics = metrics;
        self.notify_observers();
    }

    fn notify_observers(&self) {
        debug!(
            patient = %self.name,
            observers = self.observers.len(),
            "notifying observers"
        );
        for observer in &self.observers {
            observer.update(self);
        }
    }
}
