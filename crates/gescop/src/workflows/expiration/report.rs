use super::alerts::TrackedSubject;
use super::domain::{CategoryRules, DocumentCategory, ExpirationStatus};
use super::engine::classify;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTally {
    pub expired: usize,
    pub expiring_soon: usize,
    pub valid: usize,
    pub not_applicable: usize,
}

impl StatusTally {
    fn record(&mut self, status: ExpirationStatus) {
        match status {
            ExpirationStatus::Expired => self.expired += 1,
            ExpirationStatus::ExpiringSoon => self.expiring_soon += 1,
            ExpirationStatus::Valid => self.valid += 1,
            ExpirationStatus::NotApplicable => self.not_applicable += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.expired + self.expiring_soon + self.valid + self.not_applicable
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStatusEntry {
    pub category: DocumentCategory,
    pub category_label: &'static str,
    pub threshold_days: u32,
    pub expired: usize,
    pub expiring_soon: usize,
    pub valid: usize,
    pub not_applicable: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpirationSummary {
    pub categories: Vec<CategoryStatusEntry>,
}

impl ExpirationSummary {
    pub fn total_alerting(&self) -> usize {
        self.categories
            .iter()
            .map(|entry| entry.expired + entry.expiring_soon)
            .sum()
    }
}

/// Status counts per category, for dashboard tiles.
pub fn summarize<'a, I, S>(subjects: I, rules: &CategoryRules, now: NaiveDateTime) -> ExpirationSummary
where
    I: IntoIterator<Item = &'a S>,
    S: TrackedSubject + ?Sized + 'a,
{
    let mut tallies: HashMap<DocumentCategory, StatusTally> = HashMap::new();

    for subject in subjects {
        for document in subject.tracked_documents() {
            let Some(threshold) = rules.threshold_for(document.category) else {
                continue;
            };
            tallies
                .entry(document.category)
                .or_default()
                .record(classify(document.due_date, threshold, now));
        }
    }

    let categories = DocumentCategory::ordered()
        .into_iter()
        .filter_map(|category| {
            let tally = tallies.get(&category)?;
            let threshold_days = rules.threshold_for(category)?;
            Some(CategoryStatusEntry {
                category,
                category_label: category.label(),
                threshold_days,
                expired: tally.expired,
                expiring_soon: tally.expiring_soon,
                valid: tally.valid,
                not_applicable: tally.not_applicable,
            })
        })
        .collect();

    ExpirationSummary { categories }
}
