use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::alerts::{collect_alerts, AlertView};
use super::clock::{start_of_day, Clock};
use super::domain::{CategoryRules, ExpirationStatus, Priority};
use super::engine::{classify, days_remaining, priority_of};
use super::report::{summarize, ExpirationSummary};
use crate::workflows::registry::FleetRegistry;

/// Shared, read-only inputs for the expiration endpoints.
#[derive(Clone)]
pub struct ExpirationState {
    pub rules: Arc<CategoryRules>,
    pub clock: Arc<dyn Clock>,
}

impl ExpirationState {
    pub fn new(rules: CategoryRules, clock: Arc<dyn Clock>) -> Self {
        Self {
            rules: Arc::new(rules),
            clock,
        }
    }

    fn now_for(&self, today: Option<NaiveDate>) -> chrono::NaiveDateTime {
        today
            .map(start_of_day)
            .unwrap_or_else(|| self.clock.now())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub threshold_days: u32,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub today: NaiveDate,
    pub status: ExpirationStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AlertsRequest {
    #[serde(flatten)]
    pub registry: FleetRegistry,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub today: NaiveDate,
    pub alerts: Vec<AlertView>,
    pub summary: ExpirationSummary,
}

/// Router exposing classification and alert collection over JSON.
pub fn expiration_router(state: ExpirationState) -> Router {
    Router::new()
        .route("/api/v1/expiration/classify", post(classify_handler))
        .route("/api/v1/alerts", post(alerts_handler))
        .with_state(state)
}

pub async fn classify_handler(
    State(state): State<ExpirationState>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let now = state.now_for(request.today);
    let status = classify(request.due_date, request.threshold_days, now);
    let remaining = days_remaining(request.due_date, now);
    let priority = if status.is_alerting() {
        remaining.map(priority_of)
    } else {
        None
    };

    Json(ClassifyResponse {
        today: now.date(),
        status,
        status_label: status.label(),
        days_remaining: remaining,
        priority,
    })
}

pub async fn alerts_handler(
    State(state): State<ExpirationState>,
    Json(request): Json<AlertsRequest>,
) -> Json<AlertsResponse> {
    let now = state.now_for(request.today);
    let alerts = collect_alerts(request.registry.subjects(), &state.rules, now)
        .iter()
        .map(|alert| alert.to_view())
        .collect();
    let summary = summarize(request.registry.subjects(), &state.rules, now);

    tracing::info!(
        vehicles = request.registry.vehicles.len(),
        employees = request.registry.employees.len(),
        providers = request.registry.providers.len(),
        "evaluated expiration alerts"
    );

    Json(AlertsResponse {
        today: now.date(),
        alerts,
        summary,
    })
}
