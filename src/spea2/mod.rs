//! SPEA2: strength Pareto evolutionary algorithm with an external archive.
//!
//! Every generation the working population and the archive are merged,
//! each member receives `fitness = raw + density`, and a bounded archive of
//! `archive_size` members is selected (truncation by nearest-neighbor
//! distance or backfill by fitness). Offspring come from fitness
//! tournaments over the archive followed by bit-flip mutation.
//!
//! # Key Types
//!
//! - [`Spea2Config`]: population and archive sizes, mutation rate
//! - [`Spea2Runner`]: executes the archive loop
//! - [`Individual`]: decision vector, objectives and fitness
//! - [`Spea2Result`]: final archive
//!
//! # References
//!
//! - Zitzler, Laumanns & Thiele (2001), *SPEA2: Improving the Strength
//!   Pareto Evolutionary Algorithm*

mod archive;
mod config;
mod fitness;
mod runner;
mod types;

pub use archive::environmental_selection;
pub use config::Spea2Config;
pub use fitness::{assign_fitness, density, raw_fitness};
pub use runner::{Spea2Result, Spea2Runner};
pub use types::Individual;
