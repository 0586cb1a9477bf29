//! Simulation domain models.
//!
//! Provides the input data (processes, algorithm specifications) and the
//! per-run execution grid.
//!
//! # Domain Mappings
//!
//! | u-cpusim | OS textbook | Job shop |
//! |----------|-------------|----------|
//! | Process | CPU burst | Job |
//! | Algorithm | Short-term scheduler | Dispatching rule |
//! | Timeline | Gantt chart | Machine schedule |

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::{Process, ProcessTable};
pub use timeline::{Slot, Timeline};
