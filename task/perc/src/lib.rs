#![forbid(unsafe_code)]

//! Monte Carlo estimation of the percolation threshold of a square grid.
//!
//! A [`Percolation`] grid starts with every site blocked. Sites are opened
//! one at a time and the grid answers whether a site is open, whether it is
//! full (connected to the top row through open sites) and whether the grid
//! percolates (some open path joins the top row to the bottom row).
//! [`PercolationStats`] repeats [`run_trial`] and summarizes the thresholds.

pub mod grid;
pub mod random;
pub mod stats;
pub mod trial;
pub mod union_find;

pub use grid::Percolation;
pub use random::RandomSource;
pub use stats::PercolationStats;
pub use trial::run_trial;
pub use union_find::DisjointSet;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Every variant is an invalid argument reported at the call that received it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid size must be positive and its sites must fit in memory")]
    GridSize,
    #[error("number of trials must be positive")]
    TrialCount,
    #[error("site ({row}, {col}) is outside of a {size}x{size} grid")]
    SiteOutOfBounds { row: usize, col: usize, size: usize },
    #[error("index {index} is outside of a universe of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
