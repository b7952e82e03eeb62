use chrono::{Duration, NaiveDate, NaiveDateTime};
use gescop::workflows::expiration::{
    classify, collect_alerts, days_remaining, priority_of, start_of_day, CategoryRules,
    DocumentCategory, ExpirationStatus, Priority, TrackedDocument, TrackedSubject,
};
use gescop::workflows::registry::{FleetRegistry, Vehicle};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid evaluation date")
}

fn now() -> NaiveDateTime {
    start_of_day(today())
}

fn vehicle(plate: &str, vtv: Option<NaiveDate>, insurance: Option<NaiveDate>) -> Vehicle {
    Vehicle {
        id: 1,
        plate: plate.to_string(),
        brand: "Mercedes-Benz".to_string(),
        model: "Sprinter".to_string(),
        vtv_due_date: vtv,
        insurance_due_date: insurance,
    }
}

fn urgency(status: ExpirationStatus) -> u8 {
    match status {
        ExpirationStatus::Expired => 3,
        ExpirationStatus::ExpiringSoon => 2,
        ExpirationStatus::Valid => 1,
        ExpirationStatus::NotApplicable => 0,
    }
}

#[test]
fn absent_due_date_is_the_only_not_applicable_case() {
    for threshold in [0, 1, 30, 45, 365] {
        assert_eq!(classify(None, threshold, now()), ExpirationStatus::NotApplicable);
        for offset in -400..=400 {
            let due = today() + Duration::days(offset);
            assert_ne!(
                classify(Some(due), threshold, now()),
                ExpirationStatus::NotApplicable
            );
        }
    }
}

#[test]
fn due_today_is_expiring_soon_for_any_threshold() {
    assert_eq!(days_remaining(Some(today()), now()), Some(0));
    for threshold in 0..=100 {
        assert_eq!(
            classify(Some(today()), threshold, now()),
            ExpirationStatus::ExpiringSoon
        );
    }
}

#[test]
fn larger_thresholds_never_reduce_urgency() {
    for offset in -30..=120 {
        let due = Some(today() + Duration::days(offset));
        let mut previous = urgency(classify(due, 0, now()));
        for threshold in 1..=120 {
            let current = urgency(classify(due, threshold, now()));
            assert!(
                current >= previous,
                "offset {offset}, threshold {threshold}: {current} < {previous}"
            );
            previous = current;
        }
    }
}

#[test]
fn expired_does_not_depend_on_threshold() {
    let due = Some(today() - Duration::days(1));
    for threshold in [0, 7, 30, 10_000] {
        assert_eq!(classify(due, threshold, now()), ExpirationStatus::Expired);
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let registry = FleetRegistry {
        vehicles: vec![vehicle(
            "AB123CD",
            Some(today() - Duration::days(4)),
            Some(today() + Duration::days(12)),
        )],
        ..FleetRegistry::default()
    };
    let rules = CategoryRules::standard();

    let first = registry.alerts(&rules, now());
    let second = registry.alerts(&rules, now());
    assert_eq!(first, second);
    assert_eq!(
        classify(Some(today()), 30, now()),
        classify(Some(today()), 30, now())
    );
}

#[test]
fn scenario_a_three_days_left_is_critical() {
    let due = Some(today() + Duration::days(3));
    assert_eq!(classify(due, 30, now()), ExpirationStatus::ExpiringSoon);
    assert_eq!(days_remaining(due, now()), Some(3));
    assert_eq!(priority_of(3), Priority::Critical);
}

#[test]
fn scenario_b_overdue_alert_uses_overdue_wording() {
    let due = Some(today() - Duration::days(2));
    assert_eq!(classify(due, 30, now()), ExpirationStatus::Expired);
    assert_eq!(days_remaining(due, now()), Some(-2));

    let registry = FleetRegistry {
        vehicles: vec![vehicle("AB123CD", due, None)],
        ..FleetRegistry::default()
    };
    let alerts = registry.alerts(&CategoryRules::standard(), now());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].description, "VTV venció hace 2 días");
    assert_eq!(alerts[0].days_remaining, -2);
    assert_eq!(alerts[0].priority, Priority::Critical);
}

#[test]
fn scenario_c_far_future_is_valid_without_alert() {
    let due = Some(today() + Duration::days(60));
    assert_eq!(classify(due, 45, now()), ExpirationStatus::Valid);

    let registry = FleetRegistry {
        vehicles: vec![vehicle("AB123CD", None, due)],
        ..FleetRegistry::default()
    };
    assert!(registry.alerts(&CategoryRules::standard(), now()).is_empty());
}

#[test]
fn scenario_d_missing_date_yields_nothing() {
    assert_eq!(classify(None, 30, now()), ExpirationStatus::NotApplicable);
    assert_eq!(days_remaining(None, now()), None);

    let registry = FleetRegistry {
        vehicles: vec![vehicle("AB123CD", None, None)],
        ..FleetRegistry::default()
    };
    assert!(registry.alerts(&CategoryRules::standard(), now()).is_empty());
}

#[test]
fn scenario_e_two_subjects_emit_in_input_order() {
    let expired_vtv = vehicle("AA111AA", Some(today() - Duration::days(10)), None);
    let expiring_insurance = vehicle("BB222BB", None, Some(today() + Duration::days(8)));
    let rules = CategoryRules::new()
        .with_threshold(DocumentCategory::Vtv, 30)
        .with_threshold(DocumentCategory::Insurance, 45);

    let alerts = collect_alerts([&expired_vtv, &expiring_insurance], &rules, now());

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].subject_id, "AA111AA");
    assert_eq!(alerts[0].category, DocumentCategory::Vtv);
    assert_eq!(alerts[0].priority, Priority::Critical);
    assert_eq!(alerts[1].subject_id, "BB222BB");
    assert_eq!(alerts[1].category, DocumentCategory::Insurance);
    assert_eq!(alerts[1].days_remaining, 8);
    assert_eq!(alerts[1].priority, Priority::High);
    assert_eq!(alerts[1].description, "Seguro vence en 8 días");
}

#[test]
fn alerts_are_not_sorted_by_urgency() {
    struct Site(&'static str, Vec<TrackedDocument>);

    impl TrackedSubject for Site {
        fn subject_id(&self) -> &str {
            self.0
        }

        fn tracked_documents(&self) -> Vec<TrackedDocument> {
            self.1.clone()
        }
    }

    let relaxed = Site(
        "Base Norte",
        vec![TrackedDocument::new(
            DocumentCategory::Insurance,
            Some(today() + Duration::days(40)),
        )],
    );
    let urgent = Site(
        "Base Sur",
        vec![TrackedDocument::new(
            DocumentCategory::Insurance,
            Some(today() - Duration::days(40)),
        )],
    );

    let alerts = collect_alerts(
        [&relaxed, &urgent],
        &CategoryRules::standard(),
        now(),
    );
    let priorities: Vec<_> = alerts.iter().map(|alert| alert.priority).collect();
    assert_eq!(priorities, vec![Priority::Medium, Priority::Critical]);
}

#[test]
fn registry_walks_vehicles_then_employees_then_providers() {
    let registry: FleetRegistry = serde_json::from_value(serde_json::json!({
        "providers": [{
            "id": 9,
            "businessName": "Transportes del Litoral SA",
            "taxId": "30-70000000-1",
            "artDueDate": "2025-09-20"
        }],
        "employees": [{ "id": 4, "fullName": "Juan Pérez", "licenseDueDate": "2025-09-30" }],
        "vehicles": [{ "id": 1, "plate": "AE987ZZ", "vtvDueDate": "2025-10-01" }]
    }))
    .expect("registry deserializes");

    let alerts = registry.alerts(&CategoryRules::standard(), now());
    let subjects: Vec<_> = alerts.iter().map(|alert| alert.subject_id.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["AE987ZZ", "Juan Pérez", "Transportes del Litoral SA"]
    );

    let summary = registry.summary(&CategoryRules::standard(), now());
    assert_eq!(summary.total_alerting(), 3);
}
