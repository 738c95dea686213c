//! Flyweight: medical conditions are immutable and shared, so the registry
//! builds each one once and hands out the same `Rc` for every later request.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Everything about a condition except its name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionDetails {
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub diagnosis_methods: Vec<String>,
    pub risk_factors: Vec<String>,
    pub prevention_measures: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCondition {
    name: String,
    symptoms: Vec<String>,
    treatments: Vec<String>,
    diagnosis_methods: Vec<String>,
    risk_factors: Vec<String>,
    prevention_measures: Vec<String>,
}

impl MedicalCondition {
    pub fn new(name: impl Into<String>, details: ConditionDetails) -> Self {
        Self {
            name: name.into(),
            symptoms: details.symptoms,
            treatments: details.treatments,
            diagnosis_methods: details.diagnosis_methods,
            risk_factors: details.risk_factors,
            prevention_measures: details.prevention_measures,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn treatments(&self) -> &[String] {
        &self.treatments
    }

    pub fn diagnosis_methods(&self) -> &[String] {
        &self.diagnosis_methods
    }

    pub fn risk_factors(&self) -> &[String] {
        &self.risk_factors
    }

    pub fn prevention_measures(&self) -> &[String] {
        &self.prevention_measures
    }
}

#[derive(Debug, Serialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    #[serde(rename = "medicalConditions")]
    pub conditions: Vec<Rc<MedicalCondition>>,
}

#[derive(Debug, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Serialize)]
pub struct Appointment {
    pub id: u32,
    pub patient: Rc<Patient>,
    pub doctor: Rc<Doctor>,
    pub date: String,
}

impl Appointment {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Sample data
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn diabetes_details() -> ConditionDetails {
    ConditionDetails {
        symptoms: strings(&["High blood sugar", "Frequent urination", "Increased thirst"]),
        treatments: strings(&["Insulin therapy", "Dietary changes", "Exercise"]),
        diagnosis_methods: strings(&["Blood sugar test", "HbA1c test"]),
        risk_factors: strings(&["Obesity", "Sedentary lifestyle", "Genetics"]),
        prevention_measures: strings(&["Healthy diet", "Regular exercise", "Weight management"]),
    }
}

pub fn hypertension_details() -> ConditionDetails {
    ConditionDetails {
        symptoms: strings(&["High blood pressure", "Headaches", "Dizziness"]),
        treatments: strings(&["Beta blockers", "ACE inhibitors", "Lifestyle changes"]),
        diagnosis_methods: strings(&["Blood pressure measurement", "Blood tests"]),
        risk_factors: strings(&["Obesity", "Smoking", "Stress"]),
        prevention_measures: strings(&["Healthy diet", "Regular exercise", "Stress management"]),
    }
}

fn schedule(
    diabetes: &Rc<MedicalCondition>,
    hypertension: &Rc<MedicalCondition>,
) -> Vec<Appointment> {
    let patient = |id, name: &str, age, conditions: &[&Rc<MedicalCondition>]| {
        Rc::new(Patient {
            id,
            name: name.to_string(),
            age,
            conditions: conditions.iter().map(|c| Rc::clone(c)).collect(),
        })
    };
    let doctor = |id, name: &str, specialty: &str| {
        Rc::new(Doctor {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
        })
    };

    let marcos = patient(1, "Marcos Peixoto", 30, &[diabetes, hypertension]);
    let carlos = patient(2, "Carlos Maciel", 45, &[diabetes]);
    let casimiro = patient(3, "Casimiro Miguel", 37, &[hypertension]);

    let gustavo = doctor(1, "Dr. Gustavo", "Cardiology");
    let mauricio = doctor(2, "Dr. Maurício", "Endocrinology");

    vec![
        Appointment {
            id: 1,
            patient: marcos,
            doctor: Rc::clone(&gustavo),
            date: "2024-07-01".to_string(),
        },
        Appointment {
            id: 2,
            patient: carlos,
            doctor: mauricio,
            date: "2024-07-02".to_string(),
        },
        Appointment {
            id: 3,
            patient: casimiro,
            doctor: gustavo,
            date: "2024-07-03".to_string(),
        },
    ]
}

// ============================================================================
// Before: conditions are built wherever they are needed
// ============================================================================

pub mod naive {
    use super::*;

    pub fn sample_appointments() -> Vec<Appointment> {
        let diabetes = Rc::new(MedicalCondition::new("Diabetes", diabetes_details()));
        let hypertension = Rc::new(MedicalCondition::new("Hypertension", hypertension_details()));
        schedule(&diabetes, &hypertension)
    }
}

// ============================================================================
// After: a registry keyed by condition name
// ============================================================================

#[derive(Debug, Default)]
pub struct ConditionRegistry {
    conditions: HashMap<String, Rc<MedicalCondition>>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored condition for `name`, building it from `details`
    /// only on the first request. Later details are ignored.
    pub fn get_or_create(&mut self, name: &str, details: ConditionDetails) -> Rc<MedicalCondition> {
        match self.conditions.entry(name.to_string()) {
            Entry::Occupied(slot) => {
                debug!(name, "condition reused");
                Rc::clone(slot.get())
            }
            Entry::Vacant(slot) => {
                debug!(name, "condition created");
                Rc::clone(slot.insert(Rc::new(MedicalCondition::new(name, details))))
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Rc<MedicalCondition>> {
        self.conditions.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

pub fn sample_appointments(registry: &mut ConditionRegistry) -> Vec<Appointment> {
    let diabetes = registry.get_or_create("Diabetes", diabetes_details());
    let hypertension = registry.get_or_create("Hypertension", hypertension_details());
    schedule(&diabetes, &hypertension)
}
