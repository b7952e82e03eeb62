use crate::workflows::expiration::{
    collect_alerts, summarize, Alert, CategoryRules, DocumentCategory, ExpirationSummary,
    TrackedDocument, TrackedSubject,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u64,
    pub plate: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub vtv_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub insurance_due_date: Option<NaiveDate>,
}

impl TrackedSubject for Vehicle {
    fn subject_id(&self) -> &str {
        &self.plate
    }

    fn tracked_documents(&self) -> Vec<TrackedDocument> {
        vec![
            TrackedDocument::new(DocumentCategory::Vtv, self.vtv_due_date),
            TrackedDocument::new(DocumentCategory::Insurance, self.insurance_due_date),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub full_name: String,
    #[serde(default)]
    pub license_due_date: Option<NaiveDate>,
}

impl TrackedSubject for Employee {
    fn subject_id(&self) -> &str {
        &self.full_name
    }

    fn tracked_documents(&self) -> Vec<TrackedDocument> {
        vec![TrackedDocument::new(
            DocumentCategory::DriverLicense,
            self.license_due_date,
        )]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: u64,
    pub business_name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub art_due_date: Option<NaiveDate>,
}

impl TrackedSubject for Provider {
    fn subject_id(&self) -> &str {
        &self.business_name
    }

    fn tracked_documents(&self) -> Vec<TrackedDocument> {
        vec![TrackedDocument::new(
            DocumentCategory::ArtCoverage,
            self.art_due_date,
        )]
    }
}

/// Everything with expiring paperwork, as loaded from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetRegistry {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

impl FleetRegistry {
    /// Vehicles, then employees, then providers, each in stored order.
    pub fn subjects(&self) -> impl Iterator<Item = &dyn TrackedSubject> + '_ {
        let vehicles = self.vehicles.iter().map(|v| v as &dyn TrackedSubject);
        let employees = self.employees.iter().map(|e| e as &dyn TrackedSubject);
        let providers = self.providers.iter().map(|p| p as &dyn TrackedSubject);
        vehicles.chain(employees).chain(providers)
    }

    pub fn alerts(&self, rules: &CategoryRules, now: NaiveDateTime) -> Vec<Alert> {
        collect_alerts(self.subjects(), rules, now)
    }

    pub fn summary(&self, rules: &CategoryRules, now: NaiveDateTime) -> ExpirationSummary {
        summarize(self.subjects(), rules, now)
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty() && self.employees.is_empty() && self.providers.is_empty()
    }
}
