//! Discrete-event CPU scheduling simulator.
//!
//! Computes, for a set of processes with known arrival and service times,
//! the per-tick execution timeline and completion statistics under eight
//! classical disciplines: FCFS, Round-Robin, SPN, SRT, HRRN, two feedback
//! queue variants (FB-1, FB-2i), and Aging.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Process`, `ProcessTable`, `Algorithm`, `Timeline`)
//! - **`dispatching`**: Per-run context and candidate selection rules
//! - **`engines`**: One simulation routine per discipline
//! - **`simulation`**: `Simulator` orchestration and turnaround statistics
//! - **`validation`**: Input integrity checks (counts, service times, quanta)
//! - **`workload`**: Seeded random process tables
//!
//! # Architecture
//!
//! Everything is a pure function of its input: no shared mutable state,
//! no wall clock, no randomness outside `workload`. Parsing, rendering and
//! file I/O belong to the caller.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod dispatching;
pub mod engines;
pub mod error;
pub mod models;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::ConfigurationError;
