//! # Runner Test Suite
//!
//! End-to-end runs of the generate / check / minimize loop against small
//! JSON-handling properties.

use conjecture_json::{
    GenConfig, GenError, JsArray, JsKind, JsObject, JsValue, JsonRunner, RunResult, RunnerConfig,
};

/// Test helper to create a minimal test configuration
fn minimal_config() -> RunnerConfig {
    RunnerConfig {
        max_examples: 200,
        max_shrinks: 5000,
        seed: 42,
        generation: GenConfig::default(),
    }
}

#[test]
fn test_passing_property_runs_every_example() {
    let mut runner = JsonRunner::new(minimal_config()).unwrap();
    let result = runner.run(|value| value.to_serde().is_some() || value.kind() == JsKind::Undefined);

    assert_eq!(result, RunResult::Passed);
    assert_eq!(runner.stats.examples_generated, 200);
    assert_eq!(runner.stats.failed_examples, 0);
}

#[test]
fn test_counterexample_is_minimal_object() {
    let mut runner = JsonRunner::new(minimal_config()).unwrap();
    let result = runner.check::<JsObject, _>(|object| object.iter().all(|(_, v)| v.is_primitive()));

    let counterexample = result.counterexample().expect("nested fields are generated");
    assert!(counterexample.original.len() == 2);
    let minimal = &counterexample.minimal;
    assert_eq!(minimal.len(), 1);
    let (_, value) = &minimal.0[0];
    assert!(value == &JsValue::array(vec![]) || value == &JsValue::object(vec![]));
    assert_eq!(runner.stats.shrink_steps, counterexample.shrink_steps);
}

#[test]
fn test_same_seed_same_counterexample() {
    let property = |array: &JsArray| array.iter().all(|v| v.kind() != JsKind::String);

    let first = JsonRunner::new(minimal_config()).unwrap().check::<JsArray, _>(property);
    let second = JsonRunner::new(minimal_config()).unwrap().check::<JsArray, _>(property);
    assert_eq!(first, second);

    let counterexample = first.counterexample().expect("strings are generated");
    assert_eq!(counterexample.minimal, JsArray(vec![JsValue::string("")]));
    assert!(counterexample.seed >= 42);
}

#[test]
fn test_undefined_survives_lowering_inside_arrays() {
    // Code under test that expects undefined elements to become null.
    let mut runner = JsonRunner::new(minimal_config()).unwrap();
    let result = runner.check::<JsArray, _>(|array| match JsValue::Array(array.clone()).to_serde() {
        Some(serde_json::Value::Array(lowered)) => lowered.len() == array.len(),
        _ => false,
    });
    assert!(result.is_passed());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = RunnerConfig {
        max_examples: 0,
        ..minimal_config()
    };
    match JsonRunner::new(config) {
        Err(GenError::InvalidConfig(reason)) => assert!(reason.contains("max_examples")),
        other => panic!("expected config error, got {:?}", other),
    }
}
