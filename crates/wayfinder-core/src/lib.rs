//! # Wayfinder Core
//!
//! Start-to-goal pathfinding over undirected graphs whose nodes may carry a
//! small numeric value vector.
//!
//! ## Features
//!
//! - **4 Search Methods**: breadth-first, depth-first, uniform-cost and A*
//! - **Bidirectional Search**: two frontiers meeting in the middle, same result cost
//! - **2 Storage Disciplines**: inline `[f32; D]` arrays or run-time checked vectors, `D` in `1..=3`
//! - **Pluggable Metrics**: Manhattan (default) and Euclidean, or any [`DistanceEngine`]
//! - **Edge Cost Functions**: constant, distance, or a weighted sum of both via [`EdgeCost`]
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder_core::{PathFinderF1, SearchMethod, SearchRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = SearchRequest::new(6, 0, 5)
//!         .with_edges(vec![(0, 1), (0, 2), (1, 4), (2, 3), (2, 4), (3, 4), (3, 5), (4, 5)])
//!         .with_values([0.0, 1.0, 1.0, 2.0, 9.0, 6.0].map(|v| Some(vec![v])).to_vec())
//!         .with_method(SearchMethod::UniformCost);
//!
//!     let path = PathFinderF1::fixed().search(&request)?;
//!     assert_eq!(path.names(), vec!["Node_0", "Node_2", "Node_3", "Node_5"]);
//!     assert_eq!(path.total_cost(), Some(6.0));
//!     # Ok(())
//! }
//! ```
//!
//! An unreachable goal yields an empty [`Path`], not an error. Errors are
//! reserved for malformed requests (see [`Error`]).

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args
    )
)]

pub mod config;
pub mod cost;
pub mod distance;
pub mod engine;
pub mod error;
pub mod graph;
pub mod naming;
pub mod request;
pub mod search;
pub mod storage;

pub use config::{LoggingConfig, SearchConfig, WayfinderConfig};
pub use cost::{AggregateCost, DefaultCost, DistanceCost, EdgeCost};
pub use distance::{CpuDistance, DistanceEngine, DistanceMetric};
pub use engine::{PathFinder, PathFinderDynamic, PathFinderF1, PathFinderF2, PathFinderF3};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node};
pub use request::SearchRequest;
pub use search::{
    find_path, find_path_with_cost, Path, PathStep, SearchMethod, SearchOptions, SearchStats,
};
pub use storage::{DynamicStorage, FixedStorage, StorageKind, ValueStorage};
