//! Command-set validation: every rejection happens before anything runs.

use strew_core::Value;
use strew_engine::{
    normalize, run_in, validate, Command, CommandError, Context, RunError, Runner,
};
use strew_ops::builtins;
use strew_tests::{count_of, counter_op};

fn entry(fields: Vec<Value>) -> Value {
    Value::List(fields)
}

#[test]
fn rejects_non_list_command_set() {
    let registry = builtins();
    let err = validate(&Value::String("abc".into()), &registry).unwrap_err();
    assert!(matches!(err, CommandError::NotASet { .. }));
}

#[test]
fn rejects_malformed_command() {
    let registry = builtins();

    let err = validate(&Value::List(vec![Value::String("abc".into())]), &registry).unwrap_err();
    assert!(matches!(err, CommandError::BadShape { index: 0, .. }));

    let err = validate(&Value::List(vec![entry(vec![])]), &registry).unwrap_err();
    assert!(matches!(err, CommandError::BadShape { index: 0, .. }));
}

#[test]
fn rejects_bad_weight() {
    let registry = builtins();
    let raw = Value::List(vec![entry(vec!["abc".into(), "create_group".into()])]);
    let err = validate(&raw, &registry).unwrap_err();
    assert!(matches!(err, CommandError::BadWeight { index: 0, .. }));
}

#[test]
fn rejects_unknown_operation() {
    let registry = builtins();
    let raw = Value::List(vec![
        entry(vec![Value::Float(1.0), "create_group".into()]),
        entry(vec![Value::Float(1.0), "summon_dragon".into()]),
    ]);
    let err = validate(&raw, &registry).unwrap_err();
    assert!(matches!(err, CommandError::UnknownOp { index: 1, .. }));
}

#[test]
fn rejects_bad_args_and_kwargs() {
    let registry = builtins();

    let raw = Value::List(vec![entry(vec![
        Value::Float(1.0),
        "create_group".into(),
        "abc".into(),
    ])]);
    let err = validate(&raw, &registry).unwrap_err();
    assert!(matches!(err, CommandError::BadArgs { index: 0, .. }));

    let raw = Value::List(vec![entry(vec![
        Value::Float(1.0),
        "create_group".into(),
        Value::Null,
        "abc".into(),
    ])]);
    let err = validate(&raw, &registry).unwrap_err();
    assert!(matches!(err, CommandError::BadKwargs { index: 0, .. }));
}

#[test]
fn shape_errors_win_over_field_errors() {
    // A later command with a broken shape is reported before an earlier
    // command's broken field, mirroring the two-pass check order.
    let registry = builtins();
    let raw = Value::List(vec![
        entry(vec!["abc".into(), "create_group".into()]),
        Value::Int(7),
    ]);
    let err = validate(&raw, &registry).unwrap_err();
    assert!(matches!(err, CommandError::BadShape { index: 1, .. }));
}

#[test]
fn run_raw_rejects_before_invoking_anything() {
    let registry = builtins();
    let raw = Value::List(vec![
        entry(vec![Value::Float(1.0), "create_group".into()]),
        entry(vec![Value::Float(1.0), "summon_dragon".into()]),
    ]);

    let err = Runner::new()
        .seed(1)
        .run_raw(&raw, &registry, 100)
        .unwrap_err();
    assert!(matches!(err, RunError::Command(_)));
}

#[test]
fn typed_nan_weight_fails_before_invocation() {
    let commands = vec![
        Command::new(1.0, counter_op("ok", "ok")),
        Command::new(f64::NAN, counter_op("nan", "nan")),
    ];

    let mut context = Context::default();
    let err = run_in(&mut context, &commands, 100, Some(1)).unwrap_err();

    assert!(matches!(
        err,
        RunError::Command(CommandError::BadWeight { index: 1, .. })
    ));
    assert_eq!(count_of(&context, "ok"), 0);
    assert!(context.structural_log().is_empty());
    assert!(context.data_log().is_empty());
}

#[test]
fn normalize_preserves_order_and_fills_defaults() {
    let registry = builtins();
    let raw = Value::List(vec![
        entry(vec![Value::Float(2.0), "create_primitive".into()]),
        entry(vec![Value::Int(1), "create_group".into(), Value::Null, Value::Null]),
    ]);

    let commands = normalize(&raw, &registry).unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].op.name(), "create_primitive");
    assert_eq!(commands[1].op.name(), "create_group");
    assert_eq!(commands[1].weight, 1.0);
    assert!(commands[1].call.is_empty());
}

#[test]
fn run_raw_executes_normalized_commands() {
    let registry = builtins();
    let raw = Value::List(vec![entry(vec![Value::Float(1.0), "create_group".into()])]);

    let context = Runner::new()
        .seed(2)
        .run_raw(&raw, &registry, 5)
        .unwrap();
    assert_eq!(context.groups().len(), 5);
}
