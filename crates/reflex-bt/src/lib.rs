//! Behavior Tree runtime built on `reflex-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod tree;

pub use bt::{BtNode, DecoratorNode, NodeStatus};
pub use nodes::Retry;
pub use tree::Tree;
