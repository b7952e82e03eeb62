use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Days remaining at or below which an alert is critical (overdue included).
pub const CRITICAL_WITHIN_DAYS: i64 = 7;
/// Days remaining at or below which an alert is high priority.
pub const HIGH_WITHIN_DAYS: i64 = 15;

pub const DEFAULT_VTV_ALERT_DAYS: u32 = 30;
pub const DEFAULT_INSURANCE_ALERT_DAYS: u32 = 45;
pub const DEFAULT_LICENSE_ALERT_DAYS: u32 = 30;
pub const DEFAULT_ART_ALERT_DAYS: u32 = 30;

/// Compliance documents tracked against vehicles, staff, and providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Vtv,
    Insurance,
    DriverLicense,
    ArtCoverage,
}

impl DocumentCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Vtv,
            Self::Insurance,
            Self::DriverLicense,
            Self::ArtCoverage,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vtv => "VTV",
            Self::Insurance => "Seguro",
            Self::DriverLicense => "Licencia de conducir",
            Self::ArtCoverage => "Cobertura ART",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationStatus {
    NotApplicable,
    Expired,
    ExpiringSoon,
    Valid,
}

impl ExpirationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "No aplica",
            Self::Expired => "Vencido",
            Self::ExpiringSoon => "Por vencer",
            Self::Valid => "Vigente",
        }
    }

    /// Whether a document in this state should surface as an alert.
    pub const fn is_alerting(self) -> bool {
        matches!(self, Self::Expired | Self::ExpiringSoon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Crítica",
            Self::High => "Alta",
            Self::Medium => "Media",
        }
    }
}

/// Lead-time thresholds (in days) per document category.
///
/// Categories without a rule are not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRules {
    thresholds: BTreeMap<DocumentCategory, u32>,
}

impl CategoryRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::new()
            .with_threshold(DocumentCategory::Vtv, DEFAULT_VTV_ALERT_DAYS)
            .with_threshold(DocumentCategory::Insurance, DEFAULT_INSURANCE_ALERT_DAYS)
            .with_threshold(DocumentCategory::DriverLicense, DEFAULT_LICENSE_ALERT_DAYS)
            .with_threshold(DocumentCategory::ArtCoverage, DEFAULT_ART_ALERT_DAYS)
    }

    pub fn with_threshold(mut self, category: DocumentCategory, days: u32) -> Self {
        self.set_threshold(category, days);
        self
    }

    pub fn set_threshold(&mut self, category: DocumentCategory, days: u32) {
        self.thresholds.insert(category, days);
    }

    pub fn threshold_for(&self, category: DocumentCategory) -> Option<u32> {
        self.thresholds.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocumentCategory, u32)> + '_ {
        self.thresholds.iter().map(|(category, days)| (*category, *days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_cover_every_category() {
        let rules = CategoryRules::standard();
        for category in DocumentCategory::ordered() {
            assert!(rules.threshold_for(category).is_some(), "{category:?}");
        }
        assert_eq!(rules.threshold_for(DocumentCategory::Vtv), Some(30));
        assert_eq!(rules.threshold_for(DocumentCategory::Insurance), Some(45));
    }

    #[test]
    fn set_threshold_overrides_previous_value() {
        let mut rules = CategoryRules::standard();
        rules.set_threshold(DocumentCategory::Vtv, 10);
        assert_eq!(rules.threshold_for(DocumentCategory::Vtv), Some(10));
    }

    #[test]
    fn only_expired_and_expiring_statuses_alert() {
        assert!(ExpirationStatus::Expired.is_alerting());
        assert!(ExpirationStatus::ExpiringSoon.is_alerting());
        assert!(!ExpirationStatus::Valid.is_alerting());
        assert!(!ExpirationStatus::NotApplicable.is_alerting());
    }
}
