#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-tick context passed down the tree by the driver.
///
/// This layer only consumes the tick counter (trace events are stamped with
/// it); richer drivers can wrap it with whatever else their leaves need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
}
