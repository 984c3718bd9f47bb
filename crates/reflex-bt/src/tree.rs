use reflex_core::{Blackboard, Result, TickContext};

use crate::bt::{BtNode, NodeStatus};

/// Drives a root node.
///
/// After a terminal tick the root is reset so the next tick starts a fresh
/// run; a `Running` root is left alone and simply re-ticked.
pub struct Tree {
    root: Box<dyn BtNode>,
    last: NodeStatus,
}

impl Tree {
    pub fn new(root: Box<dyn BtNode>) -> Self {
        Self {
            root,
            last: NodeStatus::Idle,
        }
    }

    pub fn last_status(&self) -> NodeStatus {
        self.last
    }

    pub fn root(&self) -> &dyn BtNode {
        self.root.as_ref()
    }

    pub fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> Result<NodeStatus> {
        self.last = self.root.tick(ctx, blackboard)?;
        if self.last.is_terminal() {
            self.root.reset();
        }
        Ok(self.last)
    }

    pub fn reset(&mut self) {
        self.last = NodeStatus::Idle;
        self.root.reset();
    }
}
