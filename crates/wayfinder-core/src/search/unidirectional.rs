//! Single-frontier search from start to goal.

use crate::cost::EdgeCost;
use crate::storage::ValueStorage;

use super::cost::CostModel;
use super::frontier::Frontier;
use super::path::Path;
use super::path_step;

/// Runs one frontier until the goal is closed or the frontier is exhausted.
pub(crate) fn search<S, C>(cost: &CostModel<'_, S, C>, start: usize, goal: usize) -> Path
where
    S: ValueStorage,
    C: EdgeCost + ?Sized,
{
    let mut frontier = Frontier::new(cost, start, goal);

    while let Some(node) = frontier.close_next() {
        if node == goal {
            let steps = frontier
                .chain(goal)
                .into_iter()
                .map(|(index, link)| path_step(cost.graph(), index, link.cost))
                .collect();
            return Path::new(steps, frontier.stats());
        }
        frontier.expand(node, cost);
    }

    Path::not_found(frontier.stats())
}
