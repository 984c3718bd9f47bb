use reflex_core::{blackboard_key, Blackboard, BtError, NodeParams, Result, TickContext};
use reflex_tools::{emit as trace_emit, TraceEvent};

use crate::bt::{BtNode, DecoratorNode, NodeStatus};

/// How the attempt budget is bound: fixed at construction, or re-read from
/// the blackboard at the top of every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttemptBudget {
    Literal(u32),
    Blackboard(String),
}

/// Re-drives its child on `Failure`, up to a bounded number of attempts.
///
/// Between attempts the decorator reports `Running` so the parent re-ticks
/// it later; retries are immediate, one per tick cycle, with no backoff at
/// this layer. A still-`Running` child is left untouched so its internal
/// progress survives; after `Success` or a counted `Failure` the child is
/// put back to `Idle` for a fresh run.
pub struct Retry {
    name: String,
    status: NodeStatus,
    child: Box<dyn BtNode>,
    budget: AttemptBudget,
    max_attempts: u32,
    try_index: u32,
}

impl Retry {
    /// Reserved parameter key holding the attempt budget.
    pub const NUM_ATTEMPTS: &'static str = "num_attempts";

    /// Build with a fixed attempt budget.
    pub fn new(name: impl Into<String>, max_attempts: u32, child: Box<dyn BtNode>) -> Self {
        debug_assert!(max_attempts > 0, "attempt budget must be positive");
        Self {
            name: name.into(),
            status: NodeStatus::Idle,
            child,
            budget: AttemptBudget::Literal(max_attempts),
            max_attempts,
            try_index: 0,
        }
    }

    /// Build from node parameters.
    ///
    /// A `{key}` value for [`Self::NUM_ATTEMPTS`] binds the budget to the
    /// blackboard and defers resolution to tick time. Anything else must
    /// parse as a positive integer; a missing key is a configuration error,
    /// never a silent default.
    pub fn from_params(
        name: impl Into<String>,
        params: &NodeParams,
        child: Box<dyn BtNode>,
    ) -> Result<Self> {
        let name = name.into();
        let value = params
            .get(Self::NUM_ATTEMPTS)
            .ok_or_else(|| BtError::MissingParameter {
                node: name.clone(),
                key: Self::NUM_ATTEMPTS.into(),
            })?;

        let budget = match blackboard_key(value) {
            Some(key) => AttemptBudget::Blackboard(key.to_owned()),
            None => AttemptBudget::Literal(parse_attempts(&name, value)?),
        };
        // A blackboard-bound budget is resolved before first use, at the top
        // of every tick; 0 here is never compared against.
        let max_attempts = match &budget {
            AttemptBudget::Literal(n) => *n,
            AttemptBudget::Blackboard(_) => 0,
        };

        Ok(Self {
            name,
            status: NodeStatus::Idle,
            child,
            budget,
            max_attempts,
            try_index: 0,
        })
    }

    /// Attempt budget in effect after the most recent tick.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Failures counted so far in the current run; 0 after a terminal
    /// outcome.
    pub fn try_index(&self) -> u32 {
        self.try_index
    }
}

fn parse_attempts(node: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BtError::InvalidParameter {
            node: node.to_owned(),
            key: Retry::NUM_ATTEMPTS.into(),
            value: value.to_owned(),
        }),
    }
}

impl BtNode for Retry {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> NodeStatus {
        self.status
    }

    fn set_status(&mut self, status: NodeStatus) {
        self.status = status;
    }

    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> Result<NodeStatus> {
        if let AttemptBudget::Blackboard(key) = &self.budget {
            let Some(value) = blackboard.resolve(key) else {
                return Err(BtError::MissingBlackboardEntry {
                    node: self.name.clone(),
                    key: key.clone(),
                });
            };
            self.max_attempts = parse_attempts(&self.name, value)?;
        }

        self.status = NodeStatus::Running;
        let child_status = self.child.tick(ctx, blackboard)?;

        match child_status {
            NodeStatus::Success => {
                self.try_index = 0;
                self.status = NodeStatus::Success;
                self.child.set_status(NodeStatus::Idle);
                trace_emit(
                    blackboard,
                    TraceEvent::new(ctx.tick, "bt.retry.success").with_b(self.max_attempts as u64),
                );
            }
            NodeStatus::Failure => {
                self.try_index += 1;
                if self.try_index >= self.max_attempts {
                    self.try_index = 0;
                    self.status = NodeStatus::Failure;
                    trace_emit(
                        blackboard,
                        TraceEvent::new(ctx.tick, "bt.retry.exhausted")
                            .with_b(self.max_attempts as u64),
                    );
                } else {
                    trace_emit(
                        blackboard,
                        TraceEvent::new(ctx.tick, "bt.retry.attempt")
                            .with_a(self.try_index as u64)
                            .with_b(self.max_attempts as u64),
                    );
                }
                self.child.set_status(NodeStatus::Idle);
            }
            NodeStatus::Running => {}
            NodeStatus::Idle => {
                // A tick must land on Running/Success/Failure. Treated as a
                // child defect; the counter and the child are left alone.
                debug_assert!(false, "child `{}` returned Idle from tick", self.child.name());
            }
        }

        Ok(self.status)
    }

    fn reset(&mut self) {
        self.try_index = 0;
        self.child.reset();
        self.status = NodeStatus::Idle;
    }
}

impl DecoratorNode for Retry {
    fn child(&self) -> &dyn BtNode {
        self.child.as_ref()
    }

    fn child_mut(&mut self) -> &mut dyn BtNode {
        self.child.as_mut()
    }
}
