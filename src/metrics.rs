use serde::Serialize;

use crate::error::Result;

/// A snapshot of a patient's vitals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub heart_rate: u32,
    pub blood_pressure: String,
}

impl HealthMetrics {
    pub fn new(heart_rate: u32, blood_pressure: impl Into<String>) -> Self {
        Self {
            heart_rate,
            blood_pressure: blood_pressure.into(),
        }
    }

    /// Compact JSON, e.g. `{"heartRate":72,"bloodPressure":"120/80"}`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_camel_case_keys() {
        let metrics = HealthMetrics::new(72, "120/80");
        assert_eq!(
            metrics.to_json().unwrap(),
            r#"{"heartRate":72,"bloodPressure":"120/80"}"#
        );
    }

    #[test]
    fn test_json_keeps_blood_pressure_as_text() {
        let json = HealthMetrics::new(75, "125/85").to_json().unwrap();
        assert!(json.contains(r#""bloodPressure":"125/85""#));
    }
}
