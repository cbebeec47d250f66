//! End-to-end search scenarios.
//!
//! Each submodule drives the public `PathFinder` API with full
//! `SearchRequest`s, the way a host application would.

mod helpers;

mod bidirectional;
mod dimension_guard;
mod methods;
mod naming;
mod storage_equivalence;
