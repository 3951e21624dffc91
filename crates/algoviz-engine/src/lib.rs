#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Step-trace generation for the AlgoViz visualizer.
//!
//! Each engine is a pure function from an input array (plus a target value
//! for searches) to a [`Trace`](algoviz_model::Trace): the complete ordered
//! sequence of snapshots a renderer plays back, with cumulative
//! comparison/swap counters and a description per step. Given the same input
//! an engine produces a structurally identical trace — no clocks, no RNG, no
//! I/O.
//!
//! Hosts normally go through [`dispatch::run`] (or [`dispatch::run_by_id`]
//! for string identifiers), which validates search targets, invokes the right
//! engine, and attaches the static complexity metadata. The
//! [`playback`] module provides the cursor state machine that walks a
//! finished trace; the timer driving it belongs to the host.

pub mod dispatch;
pub mod playback;
mod recorder;
pub mod searching;
pub mod sorting;

pub use dispatch::{run, run_by_id, AlgorithmRun, DispatchError};
pub use playback::{Playback, PlaybackState};
pub use recorder::TraceRecorder;
