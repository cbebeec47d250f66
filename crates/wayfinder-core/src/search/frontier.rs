//! Frontier state of one search direction.
//!
//! The expansion skeleton (close on first dequeue, skip closed neighbours,
//! record the predecessor carried by the closing entry) is shared by every
//! method. [`FrontierQueue`] is the only per-method variation point.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::cost::EdgeCost;
use crate::storage::ValueStorage;

use super::cost::CostModel;
use super::ordered_float::OrderedFloat;
use super::path::SearchStats;
use super::SearchMethod;

/// Predecessor link of a discovered or closed node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    /// Node this one was reached from (`None` for the root).
    pub parent: Option<usize>,
    /// Accumulated cost from the root.
    pub cost: f32,
    /// Number of hops from the root.
    pub depth: usize,
}

/// A queued frontier entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    node: usize,
    link: Link,
    priority: f32,
    seq: u64,
}

impl Entry {
    fn key(&self) -> (OrderedFloat, u64) {
        (OrderedFloat(self.priority), self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Frontier data structure, one variant per ordering discipline.
#[derive(Debug)]
pub(crate) enum FrontierQueue {
    /// Breadth-first: oldest entry first.
    Fifo(VecDeque<Entry>),
    /// Depth-first: newest entry first.
    Lifo(Vec<Entry>),
    /// Uniform-cost and A*: lowest priority first, ties by insertion order.
    Priority(BinaryHeap<Reverse<Entry>>),
}

impl FrontierQueue {
    pub(crate) fn for_method(method: SearchMethod) -> Self {
        match method {
            SearchMethod::BreadthFirst => Self::Fifo(VecDeque::new()),
            SearchMethod::DepthFirst => Self::Lifo(Vec::new()),
            SearchMethod::UniformCost | SearchMethod::AStar => Self::Priority(BinaryHeap::new()),
        }
    }

    fn push(&mut self, entry: Entry) {
        match self {
            Self::Fifo(queue) => queue.push_back(entry),
            Self::Lifo(stack) => stack.push(entry),
            Self::Priority(heap) => heap.push(Reverse(entry)),
        }
    }

    fn pop(&mut self) -> Option<Entry> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) => stack.pop(),
            Self::Priority(heap) => heap.pop().map(|Reverse(entry)| entry),
        }
    }

    fn peek(&self) -> Option<&Entry> {
        match self {
            Self::Fifo(queue) => queue.front(),
            Self::Lifo(stack) => stack.last(),
            Self::Priority(heap) => heap.peek().map(|Reverse(entry)| entry),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Fifo(queue) => queue.len(),
            Self::Lifo(stack) => stack.len(),
            Self::Priority(heap) => heap.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Search state rooted at one node and heading for one target.
#[derive(Debug)]
pub(crate) struct Frontier {
    method: SearchMethod,
    root: usize,
    target: usize,
    queue: FrontierQueue,
    closed: Vec<Option<Link>>,
    discovered: Vec<Option<Link>>,
    next_seq: u64,
    stats: SearchStats,
}

impl Frontier {
    /// Creates a frontier holding only `root`.
    pub(crate) fn new<S, C>(cost: &CostModel<'_, S, C>, root: usize, target: usize) -> Self
    where
        S: ValueStorage,
        C: EdgeCost + ?Sized,
    {
        let num_nodes = cost.graph().node_count();
        let mut frontier = Self {
            method: cost.method(),
            root,
            target,
            queue: FrontierQueue::for_method(cost.method()),
            closed: vec![None; num_nodes],
            discovered: vec![None; num_nodes],
            next_seq: 0,
            stats: SearchStats::default(),
        };

        let link = Link {
            parent: None,
            cost: 0.0,
            depth: 0,
        };
        frontier.discovered[root] = Some(link);
        frontier.push(root, link, cost.heuristic(root, target));
        frontier
    }

    fn push(&mut self, node: usize, link: Link, heuristic: f32) {
        let priority = match self.method {
            SearchMethod::UniformCost | SearchMethod::AStar => link.cost + heuristic,
            SearchMethod::BreadthFirst | SearchMethod::DepthFirst => 0.0,
        };
        let entry = Entry {
            node,
            link,
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.queue.push(entry);
    }

    /// Dequeues entries until one reaches an open node, closes it and
    /// returns it. Returns `None` once the frontier is exhausted.
    pub(crate) fn close_next(&mut self) -> Option<usize> {
        while let Some(entry) = self.queue.pop() {
            if self.closed[entry.node].is_some() {
                continue;
            }
            self.closed[entry.node] = Some(entry.link);
            self.stats.nodes_expanded += 1;
            tracing::trace!(
                root = self.root,
                node = entry.node,
                cost = entry.link.cost,
                depth = entry.link.depth,
                "Closed node"
            );
            return Some(entry.node);
        }
        None
    }

    /// Pushes every open neighbour of a closed node.
    ///
    /// Cost-aware methods only push a neighbour whose tentative cost strictly
    /// improves the best known one; BFS and DFS keep the first discovery as
    /// the node's best link.
    pub(crate) fn expand<S, C>(&mut self, node: usize, cost: &CostModel<'_, S, C>)
    where
        S: ValueStorage,
        C: EdgeCost + ?Sized,
    {
        let Some(current) = self.closed[node] else {
            return;
        };

        for neighbor in cost.graph().neighbors(node) {
            self.stats.edges_scanned += 1;
            if self.closed[neighbor].is_some() {
                continue;
            }

            let link = Link {
                parent: Some(node),
                cost: current.cost + cost.step_cost(node, neighbor),
                depth: current.depth + 1,
            };

            if self.method.is_cost_aware() {
                if self.discovered[neighbor].is_some_and(|known| known.cost <= link.cost) {
                    continue;
                }
                self.discovered[neighbor] = Some(link);
            } else if self.discovered[neighbor].is_none() {
                self.discovered[neighbor] = Some(link);
            }

            self.push(neighbor, link, cost.heuristic(neighbor, self.target));
        }
    }

    /// Returns true once the frontier has nothing left to dequeue.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Lower bound on the measure of any node this frontier has yet to close.
    ///
    /// Hop depth for BFS, `g` for UCS, `g + h` for A*. `None` when exhausted.
    /// DFS gives no useful bound.
    pub(crate) fn lower_bound(&self) -> Option<f32> {
        let entry = self.queue.peek()?;
        match self.method {
            #[allow(clippy::cast_precision_loss)]
            SearchMethod::BreadthFirst => Some(entry.link.depth as f32),
            SearchMethod::UniformCost | SearchMethod::AStar => Some(entry.priority),
            SearchMethod::DepthFirst => None,
        }
    }

    /// Returns true if `node` has been closed.
    pub(crate) fn is_closed(&self, node: usize) -> bool {
        self.closed.get(node).is_some_and(Option::is_some)
    }

    /// Best known link of a node: its closing link, else its best discovery.
    pub(crate) fn link(&self, node: usize) -> Option<Link> {
        self.closed
            .get(node)
            .copied()
            .flatten()
            .or_else(|| self.discovered.get(node).copied().flatten())
    }

    /// Measure used to compare paths meeting at a node: hops for BFS,
    /// accumulated cost otherwise.
    pub(crate) fn measure(&self, node: usize) -> Option<f32> {
        let link = self.link(node)?;
        #[allow(clippy::cast_precision_loss)]
        let measure = match self.method {
            SearchMethod::BreadthFirst | SearchMethod::DepthFirst => link.depth as f32,
            SearchMethod::UniformCost | SearchMethod::AStar => link.cost,
        };
        Some(measure)
    }

    /// Node indices and their links from the root to `node` inclusive.
    ///
    /// Empty if `node` has not been reached.
    pub(crate) fn chain(&self, node: usize) -> Vec<(usize, Link)> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(index) = current {
            let Some(link) = self.link(index) else {
                return Vec::new();
            };
            chain.push((index, link));
            current = link.parent;
        }
        chain.reverse();
        chain
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }
}
