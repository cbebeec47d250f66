//! Edge cost and heuristic evaluation.

use crate::cost::{EdgeCost, UNIT_COST};
use crate::graph::Graph;
use crate::storage::ValueStorage;

use super::SearchMethod;

/// Cost model of one search: which edges cost what, and how far a node
/// looks from its target.
///
/// Cost-aware methods always pay the edge cost function. BFS and DFS order
/// their frontier by hops; their path annotations accumulate the edge cost
/// only when `use_node_value` is set.
pub(crate) struct CostModel<'a, S, C: ?Sized> {
    graph: &'a Graph<S>,
    edge_cost: &'a C,
    method: SearchMethod,
    value_annotations: bool,
}

impl<'a, S: ValueStorage, C: EdgeCost + ?Sized> CostModel<'a, S, C> {
    pub(crate) fn new(
        graph: &'a Graph<S>,
        edge_cost: &'a C,
        method: SearchMethod,
        use_node_value: bool,
    ) -> Self {
        Self {
            graph,
            edge_cost,
            method,
            value_annotations: method.is_cost_aware() || use_node_value,
        }
    }

    pub(crate) fn graph(&self) -> &'a Graph<S> {
        self.graph
    }

    pub(crate) fn method(&self) -> SearchMethod {
        self.method
    }

    /// Cost accumulated when moving from `from` to `to`.
    pub(crate) fn step_cost(&self, from: usize, to: usize) -> f32 {
        if !self.value_annotations {
            return UNIT_COST;
        }
        self.edge_cost
            .cost(self.graph.value_of(from), self.graph.value_of(to))
    }

    /// Estimated remaining cost from `node` to `target` (A* only).
    pub(crate) fn heuristic(&self, node: usize, target: usize) -> f32 {
        if self.method != SearchMethod::AStar {
            return 0.0;
        }
        self.edge_cost
            .estimate(self.graph.value_of(node), self.graph.value_of(target))
    }
}
