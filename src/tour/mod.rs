//! Tours and tour heuristics.
//!
//! A [`Tour`] is a permutation of every city of a [`DistanceOracle`]
//! interpreted as a closed cycle, together with its cached length.
//! Construction heuristics replace the permutation wholesale; local search
//! mutates it in place. The cached length always equals the sum of the
//! cycle's edges.
//!
//! # Heuristics
//!
//! - **Canonical**: cities in index order.
//! - **Random**: seeded Fisher–Yates shuffle.
//! - **Nearest neighbor from both ends (NND)**: grows a path from a start
//!   city at both of its ends, always extending the end whose nearest
//!   unvisited city is closer.
//! - **2-Opt-Best**: repeatedly applies the single best improving 2-opt
//!   exchange until none remains.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"
//!
//! [`DistanceOracle`]: crate::oracle::DistanceOracle

mod construction;
mod two_opt;
mod types;

pub use construction::{choose_end, GrowEnd};
pub use two_opt::Exchange;
pub use types::Tour;
