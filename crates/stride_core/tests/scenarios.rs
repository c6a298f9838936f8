use std::time::Duration;

use stride_core::{
    ActivityError, ActivityKind, Biometrics, Calculator, Field, RecordMode, parse_steps_record,
    parse_training_record,
};

#[test]
fn steps_only_walk() {
    let parsed = parse_steps_record("678,0h50m").expect("parsed");
    assert_eq!(parsed.steps, 678);
    assert_eq!(parsed.duration, Duration::from_secs(50 * 60));

    let result = Calculator::default()
        .summarize(&parsed, Biometrics::new(75.0, 175.0))
        .expect("summary");
    assert_eq!(result.mode, RecordMode::StepsOnly);
    assert_eq!(result.steps, 678);
    assert!(result.distance_km.is_finite() && result.distance_km > 0.0);
    assert!(result.calories.is_finite() && result.calories > 0.0);
}

#[test]
fn full_walking_record() {
    let parsed = parse_training_record("3456,Walking,3h00m").expect("parsed");
    let result = Calculator::default()
        .summarize(&parsed, Biometrics::new(85.0, 185.0))
        .expect("summary");
    assert_eq!(result.activity, ActivityKind::Walking);
    assert_eq!(format!("{:.2}", result.duration_hours()), "3.00");
    assert!(result.distance_km > 0.0);
    assert!(result.mean_speed_kmh > 0.0);
    assert!(result.calories > 0.0);
}

#[test]
fn full_running_record_burns_twice_walking() {
    let calc = Calculator::default();
    let bio = Biometrics::new(85.0, 1.85);
    let run = calc
        .summarize(&parse_training_record("3456,Running,3h00m").unwrap(), bio)
        .unwrap();
    let walk = calc
        .summarize(&parse_training_record("3456,Walking,3h00m").unwrap(), bio)
        .unwrap();
    assert_eq!(run.activity, ActivityKind::Running);
    assert_eq!(walk.calories, run.calories * 0.5);
    assert_eq!(walk.distance_km, run.distance_km);
}

#[test]
fn unknown_activity_names_label() {
    let parsed = parse_training_record("3456,Dancing,3h00m").expect("well-formed");
    let err = Calculator::default()
        .summarize(&parsed, Biometrics::new(85.0, 185.0))
        .unwrap_err();
    match err {
        ActivityError::UnknownActivity { label, expected } => {
            assert_eq!(label, "Dancing");
            assert_eq!(expected, vec!["Walking", "Running"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_steps_out_of_range() {
    let err = parse_steps_record("0,3h00m").unwrap_err();
    assert!(matches!(
        err,
        ActivityError::OutOfRange {
            field: Field::Steps,
            ..
        }
    ));
}

#[test]
fn missing_duration_is_malformed() {
    let err = parse_training_record("3456,Walking").unwrap_err();
    assert!(matches!(
        err,
        ActivityError::MalformedRecord {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn bad_biometrics_fail_at_computation() {
    let parsed = parse_steps_record("678,0h50m").unwrap();
    let err = Calculator::default()
        .summarize(&parsed, Biometrics::new(75.0, -1.0))
        .unwrap_err();
    assert_eq!(err.field(), Some(Field::Height));
    assert_eq!(err.to_string(), "height = -1, expected a positive non-zero height");
}
