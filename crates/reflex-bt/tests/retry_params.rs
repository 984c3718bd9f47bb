use std::collections::VecDeque;

use reflex_bt::{BtNode, NodeStatus, Retry};
use reflex_core::{Blackboard, BtError, NodeParams, Result, TickContext};

struct Scripted {
    name: &'static str,
    status: NodeStatus,
    script: VecDeque<NodeStatus>,
}

impl Scripted {
    fn new(name: &'static str, script: impl IntoIterator<Item = NodeStatus>) -> Box<Self> {
        Box::new(Self {
            name,
            status: NodeStatus::Idle,
            script: script.into_iter().collect(),
        })
    }
}

impl BtNode for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn status(&self) -> NodeStatus {
        self.status
    }

    fn set_status(&mut self, status: NodeStatus) {
        self.status = status;
    }

    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut Blackboard) -> Result<NodeStatus> {
        if let Some(ticked) = blackboard.get_mut::<Vec<&'static str>>("test.ticked") {
            ticked.push(self.name);
        }
        self.status = self.script.pop_front().expect("script exhausted");
        Ok(self.status)
    }
}

fn ctx(tick: u64) -> TickContext {
    TickContext { tick }
}

#[test]
fn missing_attempt_count_is_a_construction_error() {
    let err = Retry::from_params("retry", &NodeParams::new(), Scripted::new("leaf", []))
        .err()
        .expect("construction must fail");

    assert_eq!(
        err,
        BtError::MissingParameter {
            node: "retry".into(),
            key: Retry::NUM_ATTEMPTS.into(),
        }
    );
}

#[test]
fn literal_attempt_count_is_fixed_at_construction() {
    use NodeStatus::*;

    let params = NodeParams::new().with(Retry::NUM_ATTEMPTS, "2");
    let mut retry =
        Retry::from_params("retry", &params, Scripted::new("leaf", [Failure, Failure])).unwrap();
    assert_eq!(retry.max_attempts(), 2);

    let mut bb = Blackboard::new();
    assert_eq!(retry.tick(&ctx(0), &mut bb).unwrap(), Running);
    assert_eq!(retry.tick(&ctx(1), &mut bb).unwrap(), Failure);
}

#[test]
fn zero_or_garbage_literals_are_invalid() {
    for bad in ["0", "three", "-1", ""] {
        let params = NodeParams::new().with(Retry::NUM_ATTEMPTS, bad);
        let err = Retry::from_params("retry", &params, Scripted::new("leaf", []))
            .err()
            .expect("construction must fail");
        assert!(matches!(err, BtError::InvalidParameter { value, .. } if value == bad));
    }
}

#[test]
fn blackboard_budget_is_resolved_freshly_every_tick() {
    use NodeStatus::*;

    let params = NodeParams::new().with(Retry::NUM_ATTEMPTS, "{retry.attempts}");
    let mut retry = Retry::from_params(
        "retry",
        &params,
        Scripted::new("leaf", [Failure, Failure, Failure, Failure]),
    )
    .unwrap();

    let mut bb = Blackboard::new();
    bb.set("retry.attempts", "2".to_string());

    assert_eq!(retry.tick(&ctx(0), &mut bb).unwrap(), Running);
    assert_eq!(retry.try_index(), 1);
    assert_eq!(retry.max_attempts(), 2);

    // Raising the budget mid-sequence extends the run.
    bb.set("retry.attempts", "4".to_string());
    assert_eq!(retry.tick(&ctx(1), &mut bb).unwrap(), Running);
    assert_eq!(retry.tick(&ctx(2), &mut bb).unwrap(), Running);
    assert_eq!(retry.try_index(), 3);
    assert_eq!(retry.max_attempts(), 4);

    // Lowering it below the counter exhausts on the next failure.
    bb.set("retry.attempts", "3".to_string());
    assert_eq!(retry.tick(&ctx(3), &mut bb).unwrap(), Failure);
    assert_eq!(retry.try_index(), 0);
}

#[test]
fn unresolved_blackboard_budget_aborts_the_tick() {
    let params = NodeParams::new().with(Retry::NUM_ATTEMPTS, "{retry.attempts}");
    let mut retry = Retry::from_params(
        "retry",
        &params,
        Scripted::new("leaf", [NodeStatus::Failure]),
    )
    .unwrap();

    let mut bb = Blackboard::new();
    bb.set("test.ticked", Vec::<&'static str>::new());

    let err = retry.tick(&ctx(0), &mut bb).err().expect("tick must fail");
    assert_eq!(
        err,
        BtError::MissingBlackboardEntry {
            node: "retry".into(),
            key: "retry.attempts".into(),
        }
    );

    // The error is raised before the child runs; nothing was ticked and the
    // counter is untouched.
    assert!(bb.get::<Vec<&'static str>>("test.ticked").unwrap().is_empty());
    assert_eq!(retry.try_index(), 0);
}

#[test]
fn garbage_blackboard_budget_aborts_the_tick() {
    let params = NodeParams::new().with(Retry::NUM_ATTEMPTS, "{retry.attempts}");
    let mut retry = Retry::from_params(
        "retry",
        &params,
        Scripted::new("leaf", [NodeStatus::Failure]),
    )
    .unwrap();

    let mut bb = Blackboard::new();
    bb.set("retry.attempts", "plenty".to_string());

    let err = retry.tick(&ctx(0), &mut bb).err().expect("tick must fail");
    assert!(matches!(err, BtError::InvalidParameter { value, .. } if value == "plenty"));
}
