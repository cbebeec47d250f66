//! Bidirectional search: two frontiers of the same discipline meeting in
//! the middle.
//!
//! The forward frontier is rooted at the start and aims at the goal, the
//! backward one is rooted at the goal and aims at the start. They advance in
//! strict alternation, one closed node per turn. An exhausted side yields
//! its turn to the other.
//!
//! BFS, UCS and A* track `mu`, the best known `g_f(n) + g_b(n)` over nodes
//! both sides have reached, and stop once no unexplored node can beat it:
//!
//! - BFS and UCS: `top_f + top_b >= mu` (smallest queued depth or `g`)
//! - A*: `max(top_f, top_b) >= mu` (smallest queued `f`)
//!
//! DFS stops at the first node closed by both sides.

use crate::cost::EdgeCost;
use crate::storage::ValueStorage;

use super::cost::CostModel;
use super::frontier::Frontier;
use super::path::{Path, PathStep};
use super::{path_step, SearchMethod};

/// Best meeting point found so far.
#[derive(Debug, Clone, Copy)]
struct Meeting {
    node: usize,
    measure: f32,
}

/// Runs both frontiers until they meet under the method's stop rule.
pub(crate) fn search<S, C>(cost: &CostModel<'_, S, C>, start: usize, goal: usize) -> Path
where
    S: ValueStorage,
    C: EdgeCost + ?Sized,
{
    let mut forward = Frontier::new(cost, start, goal);
    if start == goal {
        let _ = forward.close_next();
        return Path::new(vec![path_step(cost.graph(), start, 0.0)], forward.stats());
    }
    let mut backward = Frontier::new(cost, goal, start);

    let method = cost.method();
    let mut meeting: Option<Meeting> = None;
    let mut forward_turn = true;

    while !(forward.is_exhausted() && backward.is_exhausted()) {
        if let Some(best) = meeting {
            if lower_bound(method, &forward, &backward) >= best.measure {
                break;
            }
        }

        let use_forward = if forward_turn {
            !forward.is_exhausted()
        } else {
            backward.is_exhausted()
        };
        forward_turn = !forward_turn;

        let (side, other) = if use_forward {
            (&mut forward, &backward)
        } else {
            (&mut backward, &forward)
        };

        let Some(node) = side.close_next() else {
            continue;
        };

        if method == SearchMethod::DepthFirst {
            if other.is_closed(node) {
                meeting = Some(Meeting { node, measure: 0.0 });
                break;
            }
            side.expand(node, cost);
            continue;
        }

        side.expand(node, cost);

        let candidates = std::iter::once(node).chain(cost.graph().neighbors(node));
        for candidate in candidates {
            let (Some(f), Some(b)) = (forward.measure(candidate), backward.measure(candidate))
            else {
                continue;
            };
            if meeting.is_none_or(|best| f + b < best.measure) {
                meeting = Some(Meeting {
                    node: candidate,
                    measure: f + b,
                });
            }
        }
    }

    let stats = forward.stats().merge(backward.stats());
    let Some(best) = meeting else {
        tracing::trace!(start, goal, "Frontiers never met");
        return Path::not_found(stats);
    };

    tracing::trace!(node = best.node, measure = best.measure, "Frontiers met");
    Path::new(stitch(cost, &forward, &backward, best.node), stats)
}

/// Lower bound on any start-to-goal path through a node neither side has
/// closed yet. An exhausted side contributes infinity.
fn lower_bound(method: SearchMethod, forward: &Frontier, backward: &Frontier) -> f32 {
    let top_f = forward.lower_bound().unwrap_or(f32::INFINITY);
    let top_b = backward.lower_bound().unwrap_or(f32::INFINITY);
    match method {
        SearchMethod::AStar => top_f.max(top_b),
        _ => top_f + top_b,
    }
}

/// Forward chain up to the meeting node followed by the backward chain from
/// it to the goal.
fn stitch<S, C>(
    cost: &CostModel<'_, S, C>,
    forward: &Frontier,
    backward: &Frontier,
    meeting: usize,
) -> Vec<PathStep>
where
    S: ValueStorage,
    C: EdgeCost + ?Sized,
{
    let graph = cost.graph();
    let head = forward.chain(meeting);
    let tail = backward.chain(meeting);

    let g_forward = head.last().map_or(0.0, |(_, link)| link.cost);
    let g_backward = tail.last().map_or(0.0, |(_, link)| link.cost);
    let through = g_forward + g_backward;

    let mut steps: Vec<PathStep> = head
        .iter()
        .map(|&(index, link)| path_step(graph, index, link.cost))
        .collect();
    steps.extend(
        tail.iter()
            .rev()
            .skip(1)
            .map(|&(index, link)| path_step(graph, index, through - link.cost)),
    );
    steps
}
