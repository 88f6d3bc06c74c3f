use lifedelta_core::config::HabitConfig;
use lifedelta_core::habits::{HabitChangeSet, HabitKey};
use lifedelta_core::health::HealthSnapshot;
use lifedelta_core::traits::IHabitDeltaCalculator;
use lifedelta_habits::factors::{self, exercise, sleep, smoking, weight};
use lifedelta_habits::HabitDeltaCalculator;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct GoldenFactor {
    name: String,
    impact: f64,
    is_positive: bool,
}

#[derive(Debug, Deserialize)]
struct GoldenScenario {
    name: String,
    changes: BTreeMap<String, f64>,
    expected_total: f64,
    expected_interval: (f64, f64),
    expected_factors: Vec<GoldenFactor>,
}

#[test]
fn golden_scenarios() {
    let scenarios: Vec<GoldenScenario> = test_fixtures::load_fixture("golden/habit_deltas.json");
    assert!(!scenarios.is_empty());
    let engine = HabitDeltaCalculator::new();
    let snapshot = HealthSnapshot::default();

    for s in scenarios {
        let changes = HabitChangeSet::from_raw(s.changes.iter().map(|(k, v)| (k.as_str(), *v)));
        let delta = engine.compute_delta(&snapshot, &changes);

        assert_eq!(delta.days_gained, s.expected_total, "{}: total", s.name);
        assert_eq!(
            (delta.confidence_interval.lower, delta.confidence_interval.upper),
            s.expected_interval,
            "{}: interval",
            s.name
        );
        assert_eq!(
            delta.top_risk_factors.len(),
            s.expected_factors.len(),
            "{}: factor count",
            s.name
        );
        for (got, want) in delta.top_risk_factors.iter().zip(&s.expected_factors) {
            assert_eq!(got.name, want.name, "{}: factor order", s.name);
            assert_eq!(got.impact, want.impact, "{}: {} impact", s.name, want.name);
            assert_eq!(got.is_positive, want.is_positive, "{}: {} polarity", s.name, want.name);
        }
    }
}

#[test]
fn empty_change_set_gives_zero_with_fixed_band() {
    let delta = HabitDeltaCalculator::new()
        .compute_delta(&HealthSnapshot::default(), &HabitChangeSet::new());
    assert_eq!(delta.days_gained, 0.0);
    assert_eq!(delta.confidence_interval.lower, -30.0);
    assert_eq!(delta.confidence_interval.upper, 30.0);
    assert!(delta.top_risk_factors.is_empty());
}

#[test]
fn smoking_wording_follows_literal_branch() {
    let up = smoking::assess(1.0);
    assert_eq!(up.impact, -365.0);
    assert!(!up.is_positive);
    assert_eq!(up.description, "Quitting smoking adds significant years");

    let down = smoking::assess(-1.0);
    assert_eq!(down.impact, 365.0);
    assert!(!down.is_positive);
    assert_eq!(down.description, "Smoking reduces life expectancy");

    let zero = smoking::assess(0.0);
    assert_eq!(zero.description, "Smoking reduces life expectancy");
}

#[test]
fn polarity_flags_are_fixed_per_habit() {
    assert!(exercise::assess(-50.0).is_positive);
    assert!(sleep::assess(-2.0).is_positive);
    assert!(!weight::assess(-10.0).is_positive);
    assert_eq!(weight::assess(-10.0).impact, 100.0);
}

#[test]
fn alcohol_is_not_wired() {
    assert!(factors::assess(HabitKey::Alcohol, 10.0).is_none());
    assert!(!factors::WIRED_HABITS.contains(&HabitKey::Alcohol));
}

#[test]
fn out_of_range_values_are_accepted() {
    let changes = HabitChangeSet::new()
        .with(HabitKey::Exercise, 10_000.0)
        .with(HabitKey::Sleep, -24.0);
    let delta = HabitDeltaCalculator::new().compute_delta(&HealthSnapshot::default(), &changes);
    assert_eq!(delta.days_gained, 5_000.0 - 720.0);
    assert_eq!(delta.top_risk_factors[0].name, "Exercise");
}

#[test]
fn non_finite_inputs_propagate() {
    let engine = HabitDeltaCalculator::new();
    let snapshot = HealthSnapshot::default();

    let nan = HabitChangeSet::new()
        .with(HabitKey::Sleep, f64::NAN)
        .with(HabitKey::Exercise, 10.0);
    let delta = engine.compute_delta(&snapshot, &nan);
    assert!(delta.days_gained.is_nan());
    assert!(delta.confidence_interval.lower.is_nan());
    assert_eq!(delta.top_risk_factors.len(), 2);
    assert_eq!(delta.top_risk_factors[0].name, "Sleep");

    let inf = HabitChangeSet::new().with(HabitKey::Weight, f64::INFINITY);
    let delta = engine.compute_delta(&snapshot, &inf);
    assert_eq!(delta.days_gained, f64::NEG_INFINITY);
}

#[test]
fn breakdown_keeps_evaluation_order() {
    let changes = HabitChangeSet::new()
        .with(HabitKey::Weight, 5.0)
        .with(HabitKey::Sleep, 1.0)
        .with(HabitKey::Exercise, 60.0)
        .with(HabitKey::Smoking, 0.0);
    let breakdown =
        HabitDeltaCalculator::new().compute_breakdown(&HealthSnapshot::default(), &changes);
    let names: Vec<&str> = breakdown.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Smoking", "Exercise", "Sleep", "Weight"]);
    assert_eq!(breakdown.total_days, 10.0);
}

#[test]
fn zero_change_still_reports_a_factor() {
    let changes = HabitChangeSet::new().with(HabitKey::Smoking, 0.0);
    let delta = HabitDeltaCalculator::new().compute_delta(&HealthSnapshot::default(), &changes);
    assert_eq!(delta.top_risk_factors.len(), 1);
    assert_eq!(delta.top_risk_factors[0].impact, 0.0);
}

#[test]
fn custom_limit_and_band() {
    let engine = HabitDeltaCalculator::with_config(HabitConfig {
        confidence_half_width_days: 0.0,
        top_risk_factor_limit: 10,
    });
    let changes = HabitChangeSet::new()
        .with(HabitKey::Smoking, 1.0)
        .with(HabitKey::Exercise, 1.0)
        .with(HabitKey::Sleep, 1.0)
        .with(HabitKey::Weight, 1.0);
    let delta = engine.compute_delta(&HealthSnapshot::default(), &changes);
    assert_eq!(delta.top_risk_factors.len(), 4);
    assert_eq!(delta.confidence_interval.lower, delta.days_gained);
    assert_eq!(delta.confidence_interval.upper, delta.days_gained);
}

#[test]
fn repeated_calls_are_identical_apart_from_timestamp() {
    let engine = HabitDeltaCalculator::new();
    let snapshot = HealthSnapshot::default();
    let changes = HabitChangeSet::new()
        .with(HabitKey::Exercise, 60.0)
        .with(HabitKey::Sleep, 1.0)
        .with(HabitKey::Weight, 5.0);

    let a = engine.compute_delta(&snapshot, &changes);
    let b = engine.compute_delta(&snapshot, &changes);
    assert_eq!(a.days_gained, b.days_gained);
    assert_eq!(a.confidence_interval, b.confidence_interval);
    assert_eq!(a.top_risk_factors, b.top_risk_factors);
}
