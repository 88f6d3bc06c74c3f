use lifedelta_core::errors::SnapshotError;
use lifedelta_core::health::{BiologicalSex, HealthSnapshot};

#[test]
fn default_snapshot_uses_collaborator_fallbacks() {
    let s = HealthSnapshot::default();
    assert_eq!(s.age, 30);
    assert_eq!(s.sex, BiologicalSex::NotSet);
    assert_eq!(s.weight_kg, 70.0);
    assert_eq!(s.height_cm, 170.0);
    assert_eq!(s.steps_today, 8000);
    assert_eq!(s.resting_heart_rate_bpm, 70.0);
    assert_eq!(s.sleep_hours, 7.5);
    assert_eq!(s.vo2_max, 35.0);
    assert!(!s.smoker);
    assert_eq!(s.alcohol_drinks_per_week, 0.0);
    assert_eq!(s.exercise_minutes_per_week, 150.0);
    assert!(s.validate().is_ok());
}

#[test]
fn bmi_uses_height_in_meters() {
    let s = HealthSnapshot {
        weight_kg: 81.0,
        height_cm: 180.0,
        ..Default::default()
    };
    assert!((s.bmi() - 25.0).abs() < 1e-9);

    let default_bmi = HealthSnapshot::default().bmi();
    assert!((default_bmi - 70.0 / (1.7 * 1.7)).abs() < 1e-9);
}

#[test]
fn bmi_propagates_degenerate_inputs() {
    let zero_height = HealthSnapshot {
        height_cm: 0.0,
        ..Default::default()
    };
    assert!(zero_height.bmi().is_infinite());

    let nan_weight = HealthSnapshot {
        weight_kg: f64::NAN,
        ..Default::default()
    };
    assert!(nan_weight.bmi().is_nan());
}

#[test]
fn validate_flags_each_bad_field() {
    let s = HealthSnapshot {
        height_cm: 0.0,
        ..Default::default()
    };
    assert_eq!(
        s.validate(),
        Err(SnapshotError::NotPositive {
            field: "heightCm",
            value: 0.0
        })
    );

    let s = HealthSnapshot {
        sleep_hours: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        s.validate(),
        Err(SnapshotError::Negative {
            field: "sleepHours",
            ..
        })
    ));

    let s = HealthSnapshot {
        vo2_max: f64::NAN,
        ..Default::default()
    };
    assert_eq!(
        s.validate(),
        Err(SnapshotError::NonFinite { field: "vo2Max" })
    );
}

#[test]
fn partial_json_fills_defaults() {
    let s: HealthSnapshot =
        serde_json::from_str(r#"{"age": 52, "sex": "female", "weightKg": 64.5, "smoker": true}"#)
            .unwrap();
    assert_eq!(s.age, 52);
    assert_eq!(s.sex, BiologicalSex::Female);
    assert_eq!(s.weight_kg, 64.5);
    assert!(s.smoker);
    assert_eq!(s.height_cm, 170.0);
    assert_eq!(s.exercise_minutes_per_week, 150.0);
}

#[test]
fn snapshot_serializes_camel_case() {
    let json = serde_json::to_value(HealthSnapshot::default()).unwrap();
    assert_eq!(json["restingHeartRateBpm"], 70.0);
    assert_eq!(json["sex"], "notSet");
    assert_eq!(json["stepsToday"], 8000);
}
