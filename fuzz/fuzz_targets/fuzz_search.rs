//! Fuzz target for whole-request search.
//!
//! Arbitrary graphs, values and switches must never panic: malformed
//! requests come back as `Err`, unreachable goals as an empty path, and any
//! found path must be a walk from start to goal.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_search
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wayfinder_core::{PathFinder, PathFinderF2, SearchMethod, SearchRequest};

const MAX_NODES: usize = 64;

#[derive(Arbitrary, Debug)]
struct SearchInput {
    num_nodes: u8,
    edges: Vec<(u8, u8)>,
    values: Vec<Option<Vec<f32>>>,
    start: u8,
    goal: u8,
    method: u8,
    bidirectional: bool,
    use_node_value: bool,
}

fuzz_target!(|input: SearchInput| {
    let num_nodes = usize::from(input.num_nodes).min(MAX_NODES);
    let method = SearchMethod::ALL[usize::from(input.method) % SearchMethod::ALL.len()];

    let mut request = SearchRequest::new(num_nodes, usize::from(input.start), usize::from(input.goal))
        .with_edges(
            input
                .edges
                .iter()
                .map(|&(u, v)| (usize::from(u), usize::from(v)))
                .collect(),
        )
        .with_values(input.values)
        .with_method(method)
        .with_bidirectional(input.bidirectional);
    request.use_node_value = input.use_node_value;

    let fixed = PathFinderF2::fixed().search(&request);
    let dynamic = PathFinder::d2().search(&request);

    match (fixed, dynamic) {
        (Ok(fixed), Ok(dynamic)) => {
            assert_eq!(fixed.indices(), dynamic.indices());
            let indices = fixed.indices();
            if let (Some(first), Some(last)) = (indices.first(), indices.last()) {
                assert_eq!(*first, request.start_node_idx);
                assert_eq!(*last, request.goal_node_idx);
            }
            for pair in indices.windows(2) {
                assert!(request
                    .edges
                    .iter()
                    .any(|&(u, v)| (u, v) == (pair[0], pair[1]) || (v, u) == (pair[0], pair[1])));
            }
        }
        (Err(fixed), Err(dynamic)) => assert_eq!(fixed, dynamic),
        (fixed, dynamic) => panic!("storage disagreement: {fixed:?} vs {dynamic:?}"),
    }
});
