//! Singleton: one process-wide logger, created lazily by `Logger::global` and
//! handed to its consumers explicitly.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, info};

use crate::error::Result;
use crate::metrics::HealthMetrics;

#[derive(Debug, Default)]
pub struct Logger {
    entries: Mutex<Vec<String>>,
}

impl Logger {
    /// Builds a separate logger. Prefer [`Logger::global`]; every direct
    /// construction starts another log, as the naive module does.
    pub fn new() -> Self {
        debug!("logger constructed");
        Self::default()
    }

    pub fn global() -> &'static Logger {
        static LOGGER: OnceLock<Logger> = OnceLock::new();
        LOGGER.get_or_init(Logger::new)
    }

    fn entries_guard(&self) -> MutexGuard<'_, Vec<String>> {
        // Entries stay consistent even if a holder panicked mid-push.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        println!("Log: {message}");
        info!(%message, "log entry");
        self.entries_guard().push(message);
    }

    pub fn count(&self) -> usize {
        self.entries_guard().len()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries_guard().clone()
    }

    pub fn print_log_count(&self) {
        println!("{} Logs", self.count());
    }
}

// ============================================================================
// Before: a module-level logger that consumers reach for on their own
// ============================================================================

pub mod naive {
    use super::*;

    /// The module's logger. Nothing stops another `Logger::new()` elsewhere,
    /// and consumers depend on it without saying so.
    pub fn logger() -> &'static Logger {
        static MODULE_LOGGER: OnceLock<Logger> = OnceLock::new();
        MODULE_LOGGER.get_or_init(Logger::new)
    }

    pub struct Patient {
        pub name: String,
    }

    impl Patient {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        pub fn update_health_metrics(&self, metrics: &HealthMetrics) -> Result<()> {
            logger().log(format!(
                "Updating health metrics for {}: {}",
                self.name,
                metrics.to_json()?
            ));
            Ok(())
        }
    }

    pub struct Doctor {
        pub name: String,
    }

    impl Doctor {
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        pub fn review_health_metrics(&self, patient: &Patient, metrics: &HealthMetrics) -> Result<()> {
            logger().log(format!(
                "Doctor {} reviewing health metrics for {}: {}",
                self.name,
                patient.name,
                metrics.to_json()?
            ));
            Ok(())
        }
    }
}

// ============================================================================
// After: one logger, injected
// ============================================================================

pub struct Patient<'a> {
    name: String,
    logger: &'a Logger,
}

impl<'a> Patient<'a> {
    pub fn new(name: impl Into<String>, logger: &'a Logger) -> Self {
        Self {
            name: name.into(),
            logger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn update_health_metrics(&self, metrics: &HealthMetrics) -> Result<()> {
        self.logger.log(format!(
            "Updating health metrics for {}: {}",
            self.name,
            metrics.to_json()?
        ));
        Ok(())
    }
}

pub struct Doctor<'a> {
    name: String,
    logger: &'a Logger,
}

impl<'a> Doctor<'a> {
    pub fn new(name: impl Into<String>, logger: &'a Logger) -> Self {
        Self {
            name: name.into(),
            logger,
        }
    }

    pub fn review_health_metrics(&self, patient: &Patient<'_>, metrics: &HealthMetrics) -> Result<()> {
        self.logger.log(format!(
            "Doctor {} reviewing health metrics for {}: {}",
            self.name,
            patient.name(),
            metrics.to_json()?
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals() -> HealthMetrics {
        HealthMetrics::new(72, "120/80")
    }

    #[test]
    fn test_global_returns_same_instance() {
        let first = Logger::global();
        for _ in 0..10 {
            assert!(std::ptr::eq(first, Logger::global()));
        }
    }

    #[test]
    fn test_count_tracks_logs() {
        let logger = Logger::new();
        for i in 0..5 {
            logger.log(format!("entry {i}"));
        }
        assert_eq!(logger.count(), 5);
        assert_eq!(logger.entries()[4], "entry 4");
    }

    #[test]
    fn test_injected_consumers_share_one_log() {
        let logger = Logger::new();
        let patient = Patient::new("Felipe Barros", &logger);
        let doctor = Doctor::new("Dr. Marcos", &logger);

        patient.update_health_metrics(&vitals()).unwrap();
        doctor.review_health_metrics(&patient, &vitals()).unwrap();

        assert_eq!(
            logger.entries(),
            vec![
                r#"Updating health metrics for Felipe Barros: {"heartRate":72,"bloodPressure":"120/80"}"#,
                r#"Doctor Dr. Marcos reviewing health metrics for Felipe Barros: {"heartRate":72,"bloodPressure":"120/80"}"#,
            ]
        );
    }

    #[test]
    fn test_global_logger_grows_with_injected_writes() {
        let logger = Logger::global();
        let before = logger.count();

        Patient::new("Felipe Barros", logger)
            .update_health_metrics(&vitals())
            .unwrap();

        // Other tests may log to the global concurrently.
        assert!(logger.count() > before);
    }

    #[test]
    fn test_naive_consumers_write_to_the_module_logger() {
        let before = naive::logger().count();
        let patient = naive::Patient::new("Felipe");
        let doctor = naive::Doctor::new("Dr. Marcos");

        patient.update_health_metrics(&vitals()).unwrap();
        doctor.review_health_metrics(&patient, &vitals()).unwrap();

        assert!(std::ptr::eq(naive::logger(), naive::logger()));
        assert!(!std::ptr::eq(naive::logger(), Logger::global()));
        assert!(naive::logger().count() >= before + 2);
        assert!(naive::logger()
            .entries()
            .iter()
            .any(|e| e.starts_with("Doctor Dr. Marcos reviewing health metrics for Felipe:")));
    }
}
