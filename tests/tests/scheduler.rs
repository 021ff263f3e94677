//! Scheduler behavior: weight handling, determinism, failure semantics.

use pretty_assertions::assert_eq;
use strew_core::NodeHandle;
use strew_engine::{run_in, seed_from, Command, Context, Op, OpError, RunError, Runner};
use strew_ops::{create_group_op, create_primitive_op};
use strew_scene::MemoryScene;
use strew_tests::{count_of, counter_op};

fn memory(context: &Context) -> &MemoryScene {
    context.backend_as::<MemoryScene>().expect("memory backend")
}

#[test]
fn equal_weights_split_every_iteration() {
    let commands = vec![
        Command::new(1.0, counter_op("a", "a")),
        Command::new(1.0, counter_op("b", "b")),
    ];

    let context = Runner::new().seed(17).run(&commands, 123).unwrap();

    let a = count_of(&context, "a");
    let b = count_of(&context, "b");
    assert!(a > 0, "a was never picked");
    assert!(b > 0, "b was never picked");
    assert_eq!(a + b, 123);
}

#[test]
fn zero_weight_is_never_picked() {
    let commands = vec![
        Command::new(1.0, counter_op("a", "a")),
        Command::new(0.0, counter_op("b", "b")),
    ];

    let context = Runner::new().seed(17).run(&commands, 123).unwrap();

    assert_eq!(count_of(&context, "a"), 123);
    assert_eq!(count_of(&context, "b"), 0);
}

#[test]
fn negative_weight_is_never_picked() {
    let commands = vec![
        Command::new(-2.5, counter_op("a", "a")),
        Command::new(1.0, counter_op("b", "b")),
    ];

    let context = Runner::new().seed(17).run(&commands, 50).unwrap();

    assert_eq!(count_of(&context, "a"), 0);
    assert_eq!(count_of(&context, "b"), 50);
}

#[test]
fn heavier_weight_dominates() {
    let commands = vec![
        Command::new(2.0, counter_op("a", "a")),
        Command::new(1.0, counter_op("b", "b")),
    ];

    let context = Runner::new().seed(17).run(&commands, 123).unwrap();

    let a = count_of(&context, "a");
    let b = count_of(&context, "b");
    assert!(a > b, "a={} b={}", a, b);
    assert!(b > 0);
    assert_eq!(a + b, 123);
}

#[test]
fn fixed_seed_repeats_exact_counts() {
    let commands = vec![
        Command::new(2.34, counter_op("a", "a")),
        Command::new(1.23, counter_op("b", "b")),
    ];
    let seed = seed_from("1.23");

    let reference = Runner::new().seed(seed).run(&commands, 123).unwrap();
    let expected = (count_of(&reference, "a"), count_of(&reference, "b"));

    for _ in 0..123 {
        let context = Runner::new().seed(seed).run(&commands, 123).unwrap();
        assert_eq!(
            (count_of(&context, "a"), count_of(&context, "b")),
            expected
        );
    }
}

#[test]
fn fixed_seed_repeats_exact_scene() {
    let commands = vec![
        Command::new(2.0, create_primitive_op()),
        Command::new(1.0, create_group_op()).kwarg("attach", true),
    ];

    let first = Runner::new().seed(99).run(&commands, 60).unwrap();
    let second = Runner::new().seed(99).run(&commands, 60).unwrap();

    assert_eq!(first.groups(), second.groups());

    let first_nodes: Vec<_> = memory(&first)
        .nodes()
        .map(|n| (n.handle, n.kind.clone(), n.parent))
        .collect();
    let second_nodes: Vec<_> = memory(&second)
        .nodes()
        .map(|n| (n.handle, n.kind.clone(), n.parent))
        .collect();
    assert_eq!(first_nodes, second_nodes);
    assert_eq!(memory(&first).connections(), memory(&second).connections());
}

#[test]
fn all_commands_filtered_still_commits() {
    let commands = vec![Command::new(0.0, counter_op("a", "a"))];

    let context = Runner::new().seed(1).run(&commands, 123).unwrap();

    assert_eq!(count_of(&context, "a"), 0);
    assert_eq!(memory(&context).structural_commits(), 1);
    assert_eq!(memory(&context).data_commits(), 1);
}

#[test]
fn empty_command_set_is_not_an_error() {
    let context = Runner::new().seed(1).run(&[], 10).unwrap();
    assert_eq!(memory(&context).node_count(), 0);
}

#[test]
fn op_failure_propagates_and_keeps_staged_state() {
    let fail_after_staging = Op::new("stage_then_fail", |context: &mut Context, _call: &_| {
        let group = context.create_child("group", NodeHandle::NONE);
        context.register_group(group);
        Err(OpError::failed("backend fell over"))
    });
    let commands = vec![Command::new(1.0, fail_after_staging)];

    let mut context = Context::default();
    let err = run_in(&mut context, &commands, 10, Some(3)).unwrap_err();

    match err {
        RunError::Operation { name, .. } => assert_eq!(name, "stage_then_fail"),
        other => panic!("unexpected error: {:?}", other),
    }

    // The staged edit and the registration survive; nothing was committed.
    assert_eq!(context.structural_log().len(), 1);
    assert_eq!(context.groups().len(), 1);
    assert_eq!(memory(&context).node_count(), 0);
    assert_eq!(memory(&context).structural_commits(), 0);
}

#[test]
fn supplied_context_is_chained_and_returned() {
    let commands = vec![Command::new(1.0, create_group_op())];

    let context = Context::default().with_extra("owner", "bench-7");
    let context = Runner::new()
        .seed(5)
        .context(context)
        .run(&commands, 4)
        .unwrap();

    assert_eq!(context.groups().len(), 4);
    assert_eq!(
        context.extra().get("owner").and_then(|v| v.as_str()),
        Some("bench-7")
    );

    // Second run on the same context keeps building on the registry.
    let context = Runner::new()
        .seed(6)
        .context(context)
        .run(&commands, 2)
        .unwrap();
    assert_eq!(context.groups().len(), 6);
}
