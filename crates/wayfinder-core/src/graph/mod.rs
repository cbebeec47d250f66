//! In-memory search graph.
//!
//! Provides the node/edge types and the immutable undirected [`Graph`] the
//! search algorithms explore. The graph owns its value storage, so one
//! `Graph<S>` carries everything a search reads.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::graph::{Edge, Graph};
//! use wayfinder_core::storage::{DynamicStorage, ValueStorage};
//!
//! let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! let values = DynamicStorage::ingest(1, 3, &[]).unwrap();
//! let edges = [Edge::new(0, 1), Edge::new(1, 0), Edge::new(1, 2)];
//!
//! let graph = Graph::build(names, values, &edges).unwrap();
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
//! ```

mod store;
mod types;


pub use store::Graph;
pub use types::{Edge, Node};
