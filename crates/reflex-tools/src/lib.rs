//! Tooling primitives for behavior trees.
//!
//! Intentionally lightweight and engine-agnostic: events are routed through
//! the blackboard so the runtime crates stay free of logging dependencies.
//! Higher-level integrations (inspectors, visualizers) should live in
//! dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    capture, emit, NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink, TRACE_LOG,
    TRACE_SINK,
};
