use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use gescop::config::AppConfig;
use gescop::error::AppError;
use gescop::workflows::expiration::{
    start_of_day, Alert, CategoryRules, Clock, ExpirationSummary, SystemClock,
};
use gescop::workflows::registry::{FleetRegistry, RegistryImporter};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AlertsReportArgs {
    /// Vehicles export (CSV with backend column names)
    #[arg(long)]
    pub(crate) vehicles: Option<PathBuf>,
    /// Staff export (CSV with backend column names)
    #[arg(long)]
    pub(crate) employees: Option<PathBuf>,
    /// Providers export (CSV with backend column names)
    #[arg(long)]
    pub(crate) providers: Option<PathBuf>,
    /// Evaluation date for the report (defaults to now)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_alerts_report(args: AlertsReportArgs) -> Result<(), AppError> {
    let AlertsReportArgs {
        vehicles,
        employees,
        providers,
        today,
    } = args;

    let config = AppConfig::load()?;
    let registry = RegistryImporter::registry_from_paths(
        vehicles.as_deref(),
        employees.as_deref(),
        providers.as_deref(),
    )?;

    let now = evaluation_instant(today, &SystemClock);
    let alerts = registry.alerts(&config.alerts.rules, now);
    let summary = registry.summary(&config.alerts.rules, now);

    print!(
        "{}",
        render_alerts_report(&registry, &config.alerts.rules, &alerts, &summary, now)
    );
    Ok(())
}

fn evaluation_instant(today: Option<NaiveDate>, clock: &dyn Clock) -> NaiveDateTime {
    today.map(start_of_day).unwrap_or_else(|| clock.now())
}

pub(crate) fn render_alerts_report(
    registry: &FleetRegistry,
    rules: &CategoryRules,
    alerts: &[Alert],
    summary: &ExpirationSummary,
    now: NaiveDateTime,
) -> String {
    let mut out = String::new();

    out.push_str("GESCOP expiration report\n");
    out.push_str(&format!(
        "Evaluated {} | {} vehicles, {} employees, {} providers\n",
        now.date(),
        registry.vehicles.len(),
        registry.employees.len(),
        registry.providers.len()
    ));

    out.push_str("\nThresholds\n");
    for (category, days) in rules.iter() {
        out.push_str(&format!("- {}: {} days\n", category.label(), days));
    }

    if summary.categories.is_empty() {
        out.push_str("\nStatus by category: no tracked documents\n");
    } else {
        out.push_str("\nStatus by category\n");
        for entry in &summary.categories {
            out.push_str(&format!(
                "- {}: {} expired, {} expiring soon, {} valid, {} without date\n",
                entry.category_label,
                entry.expired,
                entry.expiring_soon,
                entry.valid,
                entry.not_applicable
            ));
        }
    }

    if alerts.is_empty() {
        out.push_str("\nAlerts: none\n");
    } else {
        out.push_str("\nAlerts\n");
        for alert in alerts {
            out.push_str(&format!(
                "- [{}] {}: {} (due {})\n",
                alert.priority.label(),
                alert.subject_id,
                alert.description,
                alert.due_date
            ));
        }
    }

    out
}
