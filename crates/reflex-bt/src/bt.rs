use reflex_core::{Blackboard, Result, TickContext};

/// Outcome of evaluating a node.
///
/// `Idle` is the reset/initial state; a well-behaved `tick` never returns it.
/// `Running` means in-progress work that needs a later re-tick. `Success`
/// and `Failure` are the outcomes a parent acts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeStatus {
    #[default]
    Idle,
    Running,
    Success,
    Failure,
}

impl NodeStatus {
    pub fn is_running(self) -> bool {
        matches!(self, NodeStatus::Running)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, NodeStatus::Success | NodeStatus::Failure)
    }
}

/// The contract every tree node implements.
///
/// Ticking is synchronous and single-threaded: a parent ticks a child as a
/// plain recursive call and acts on the returned status. The status a tick
/// (or reset) leaves behind stays observable until the next one.
pub trait BtNode: 'static {
    fn name(&self) -> &str;

    /// Status left behind by the most recent tick or reset.
    fn status(&self) -> NodeStatus;

    /// Overwrite the current status. Parents use this to put a finished
    /// child back to `Idle` so it re-executes from scratch next time.
    fn set_status(&mut self, status: NodeStatus);

    /// Evaluate the node once.
    ///
    /// Configuration problems (a dynamically bound parameter that no longer
    /// resolves, for instance) abort the tick with an error; they are never
    /// reported as `Failure`.
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> Result<NodeStatus>;

    /// Return the node to a fresh start. Nodes with internal progress state
    /// override this to clear it along with the status.
    fn reset(&mut self) {
        self.set_status(NodeStatus::Idle);
    }
}

/// A node that owns exactly one child and reinterprets how or when it runs.
///
/// Ownership is exclusive: the child lives and dies with its decorator, and
/// a decorator without a child cannot be built.
pub trait DecoratorNode: BtNode {
    fn child(&self) -> &dyn BtNode;

    fn child_mut(&mut self) -> &mut dyn BtNode;
}
