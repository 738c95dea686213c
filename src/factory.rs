//! Factory Method: one creation function maps a report kind to a concrete
//! report generator.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PatternError, Result};

pub trait HealthReport {
    fn generate(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImcReport;

impl HealthReport for ImcReport {
    fn generate(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Generating IMC Report")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressureReport;

impl HealthReport for BloodPressureReport {
    fn generate(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Generating Blood Pressure Report")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Imc,
    BloodPressure,
}

impl ReportKind {
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Imc => "IMC",
            ReportKind::BloodPressure => "BloodPressure",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "IMC" => Ok(ReportKind::Imc),
            "BloodPressure" => Ok(ReportKind::BloodPressure),
            other => Err(PatternError::unknown_report_type(other)),
        }
    }
}

// ============================================================================
// Before: the menu loop builds concrete reports itself
// ============================================================================

pub mod naive {
    use super::*;

    pub fn collect_reports<I, S>(choices: I) -> Vec<Box<dyn HealthReport>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reports: Vec<Box<dyn HealthReport>> = Vec::new();
        for choice in choices {
            match choice.as_ref() {
                "0" => break,
                "1" => reports.push(Box::new(ImcReport)),
                "2" => reports.push(Box::new(BloodPressureReport)),
                _ => {}
            }
        }
        reports
    }
}

// ============================================================================
// After: a single creation point
// ============================================================================

pub struct ReportFactory;

impl ReportFactory {
    pub fn create(kind: &str) -> Result<Box<dyn HealthReport>> {
        let kind: ReportKind = kind.parse()?;
        Ok(Self::create_kind(kind))
    }

    pub fn create_kind(kind: ReportKind) -> Box<dyn HealthReport> {
        debug!(%kind, "creating report");
        match kind {
            ReportKind::Imc => Box::new(ImcReport),
            ReportKind::BloodPressure => Box::new(BloodPressureReport),
        }
    }
}

/// Menu prompt text, kept for the binary's usage line.
pub const MENU: &str = "IMC Report(1) Blood Pressure Report(2) Go(0)";

/// Reads menu choices until `"0"`. `"1"` asks for an IMC report and every
/// other choice asks for a blood pressure report.
pub fn collect_reports<I, S>(choices: I) -> Vec<Box<dyn HealthReport>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reports = Vec::new();
    for choice in choices {
        let kind = match choice.as_ref() {
            "0" => break,
            "1" => ReportKind::Imc,
            _ => ReportKind::BloodPressure,
        };
        reports.push(ReportFactory::create_kind(kind));
    }
    reports
}

pub fn generate_all(reports: &[Box<dyn HealthReport>], out: &mut dyn Write) -> Result<()> {
    for report in reports {
        report.generate(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(reports: &[Box<dyn HealthReport>]) -> String {
        let mut out = Vec::new();
        generate_all(reports, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_create_imc() {
        let report = ReportFactory::create("IMC").unwrap();
        let mut out = Vec::new();
        report.generate(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Generating IMC Report\n");
    }

    #[test]
    fn test_create_blood_pressure() {
        let report = ReportFactory::create("BloodPressure").unwrap();
        let mut out = Vec::new();
        report.generate(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Generating Blood Pressure Report\n"
        );
    }

    #[test]
    fn test_unknown_kind_fails() {
        let err = ReportFactory::create("unknown").err().unwrap();
        assert!(matches!(err, PatternError::UnknownReportType(ref kind) if kind == "unknown"));
    }

    #[test]
    fn test_kind_names_are_case_sensitive() {
        assert!("imc".parse::<ReportKind>().is_err());
        assert_eq!("IMC".parse::<ReportKind>().unwrap(), ReportKind::Imc);
    }

    #[test]
    fn test_menu_stops_at_zero() {
        let reports = collect_reports(["1", "2", "0", "1"]);
        assert_eq!(reports.len(), 2);
        assert_eq!(
            render(&reports),
            "Generating IMC Report\nGenerating Blood Pressure Report\n"
        );
    }

    #[test]
    fn test_menu_treats_other_choices_as_blood_pressure() {
        let reports = collect_reports(["3", "IMC", "1", "0"]);
        assert_eq!(
            render(&reports),
            "Generating Blood Pressure Report\nGenerating Blood Pressure Report\nGenerating IMC Report\n"
        );
    }

    #[test]
    fn test_menu_without_zero_reads_every_choice() {
        assert_eq!(collect_reports(["1", "2", "1"]).len(), 3);
        assert!(collect_reports(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_naive_ignores_unknown_choices() {
        let reports = naive::collect_reports(["1", "7", "2", "0"]);
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [ReportKind::Imc, ReportKind::BloodPressure] {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
        }
    }
}
