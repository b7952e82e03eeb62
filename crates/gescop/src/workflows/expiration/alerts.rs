use super::domain::{CategoryRules, DocumentCategory, ExpirationStatus, Priority};
use super::engine::{classify, days_remaining, priority_of};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

/// A dated compliance document attached to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedDocument {
    pub category: DocumentCategory,
    pub due_date: Option<NaiveDate>,
}

impl TrackedDocument {
    pub fn new(category: DocumentCategory, due_date: Option<NaiveDate>) -> Self {
        Self { category, due_date }
    }
}

/// Anything that carries expiring documents: vehicles, staff, providers.
pub trait TrackedSubject {
    /// Human-facing identifier used in alerts (plate, name, business name).
    fn subject_id(&self) -> &str;

    /// Documents in the order alerts should be emitted.
    fn tracked_documents(&self) -> Vec<TrackedDocument>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub category: DocumentCategory,
    pub subject_id: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
    pub status: ExpirationStatus,
    pub priority: Priority,
}

impl Alert {
    pub fn to_view(&self) -> AlertView {
        AlertView {
            category: self.category,
            category_label: self.category.label(),
            subject_id: self.subject_id.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            days_remaining: self.days_remaining,
            status: self.status,
            status_label: self.status.label(),
            priority: self.priority,
            priority_label: self.priority.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub category: DocumentCategory,
    pub category_label: &'static str,
    pub subject_id: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
    pub status: ExpirationStatus,
    pub status_label: &'static str,
    pub priority: Priority,
    pub priority_label: &'static str,
}

/// Alerts for every expired or expiring document, in input order.
///
/// Subjects are walked in the order given and each subject's documents in the
/// order it declares them. No sorting by urgency is applied.
pub fn collect_alerts<'a, I, S>(subjects: I, rules: &CategoryRules, now: NaiveDateTime) -> Vec<Alert>
where
    I: IntoIterator<Item = &'a S>,
    S: TrackedSubject + ?Sized + 'a,
{
    let mut alerts = Vec::new();

    for subject in subjects {
        for document in subject.tracked_documents() {
            let Some(threshold) = rules.threshold_for(document.category) else {
                debug!(
                    subject = subject.subject_id(),
                    category = ?document.category,
                    "no alert threshold configured; skipping document"
                );
                continue;
            };

            let status = classify(document.due_date, threshold, now);
            if !status.is_alerting() {
                continue;
            }

            let (Some(due_date), Some(days)) =
                (document.due_date, days_remaining(document.due_date, now))
            else {
                continue;
            };

            alerts.push(Alert {
                category: document.category,
                subject_id: subject.subject_id().to_owned(),
                description: describe(document.category, days),
                due_date,
                days_remaining: days,
                status,
                priority: priority_of(days),
            });
        }
    }

    alerts
}

pub fn describe(category: DocumentCategory, days_remaining: i64) -> String {
    let label = category.label();
    match days_remaining {
        0 => format!("{label} vence hoy"),
        days if days > 0 => format!("{label} vence en {days} días"),
        days => format!("{label} venció hace {} días", days.unsigned_abs()),
    }
}
