//! Two-phase commit ordering against a recording backend.

use strew_core::NodeHandle;
use strew_engine::Context;
use strew_ops::{create_primitive, detach_random, PrimitiveKind, PrimitiveOptions};
use strew_tests::{BackendCall, RecordingBackend};

fn recording(context: &Context) -> &RecordingBackend {
    context.backend_as::<RecordingBackend>().expect("recording backend")
}

#[test]
fn structural_calls_precede_data_calls() {
    let mut context = Context::new(Box::new(RecordingBackend::new())).with_seed(8);

    // Primitives interleave structural and data staging heavily.
    create_primitive(
        &mut context,
        PrimitiveOptions::new()
            .kind(PrimitiveKind::SurfaceCube)
            .name("crate"),
    );
    create_primitive(
        &mut context,
        PrimitiveOptions::new().kind(PrimitiveKind::MeshTorus),
    );
    detach_random(&mut context);

    context.commit().unwrap();

    let calls = recording(&context).calls();
    let commit_structural = calls
        .iter()
        .position(|call| matches!(call, BackendCall::CommitStructural))
        .expect("structural commit ran");

    // Every structural call sits before the structural flush; everything
    // after is data work, ending with the data flush.
    for (index, call) in calls.iter().enumerate() {
        if index < commit_structural {
            assert!(call.is_structural(), "call #{}: {:?}", index, call);
        } else if index > commit_structural {
            assert!(!call.is_structural(), "call #{}: {:?}", index, call);
        }
    }
    assert!(matches!(calls.last(), Some(BackendCall::CommitData)));
}

#[test]
fn staging_order_is_preserved_within_each_log() {
    let mut context = Context::new(Box::new(RecordingBackend::new()));

    let group = context.create_child("group", NodeHandle::NONE);
    let child = context.create_child("mesh", group);
    context.set_name(group, "first");
    context.set_name(child, "second");

    context.commit().unwrap();

    let calls = recording(&context).calls();
    let creates: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            BackendCall::CreateNode { node, .. } => Some(*node),
            _ => None,
        })
        .collect();
    let names: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            BackendCall::SetName { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(creates, vec![group, child]);
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn empty_commit_still_flushes_both_phases() {
    let mut context = Context::new(Box::new(RecordingBackend::new()));

    context.commit().unwrap();
    context.commit().unwrap();

    let calls = recording(&context).calls();
    assert_eq!(
        calls,
        &[
            BackendCall::CommitStructural,
            BackendCall::CommitData,
            BackendCall::CommitStructural,
            BackendCall::CommitData,
        ]
    );
}

#[test]
fn commit_clears_and_does_not_replay() {
    let mut context = Context::new(Box::new(RecordingBackend::new()));
    context.create_child("group", NodeHandle::NONE);

    context.commit().unwrap();
    context.commit().unwrap();

    let creates = recording(&context)
        .calls()
        .iter()
        .filter(|call| matches!(call, BackendCall::CreateNode { .. }))
        .count();
    assert_eq!(creates, 1);
}
