//! Deterministic, engine-agnostic behavior-tree kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod error;
pub mod params;
pub mod tick;

pub use blackboard::Blackboard;
pub use error::{BtError, Result};
pub use params::{blackboard_key, is_blackboard_pattern, NodeParams};
pub use tick::TickContext;
