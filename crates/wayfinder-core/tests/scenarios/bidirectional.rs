//! Bidirectional scenarios.

use wayfinder_core::{DistanceMetric, PathFinder, SearchMethod};

use crate::helpers::{names, six_node, six_node_valued, sixteen_node, sixteen_node_valued};

#[test]
fn test_bidirectional_bfs_with_bare_index_names() {
    let mut request = six_node().with_bidirectional(true);
    request.node_prefix_name = String::new();
    request.use_node_value = true;
    request.distance_metric = DistanceMetric::Manhattan;

    let path = PathFinder::d1().search(&request).unwrap();
    assert_eq!(names(&path), vec!["0", "1", "4", "5"]);
}

#[test]
fn test_bidirectional_matches_unidirectional() {
    let finder = PathFinder::d1();
    for request in [six_node(), sixteen_node(), six_node_valued(), sixteen_node_valued()] {
        for method in [
            SearchMethod::BreadthFirst,
            SearchMethod::UniformCost,
            SearchMethod::AStar,
        ] {
            let one_way = finder.search(&request.clone().with_method(method)).unwrap();
            let two_way = finder
                .search(&request.clone().with_method(method).with_bidirectional(true))
                .unwrap();
            assert_eq!(two_way.indices(), one_way.indices(), "{method}");
            assert_eq!(two_way.total_cost(), one_way.total_cost(), "{method}");
        }
    }
}

#[test]
fn test_bidirectional_depth_first() {
    let finder = PathFinder::d1();
    let path = finder
        .search(
            &six_node()
                .with_method(SearchMethod::DepthFirst)
                .with_bidirectional(true),
        )
        .unwrap();
    assert_eq!(path.indices(), vec![0, 2, 4, 5]);

    let path = finder
        .search(
            &sixteen_node()
                .with_method(SearchMethod::DepthFirst)
                .with_bidirectional(true),
        )
        .unwrap();
    assert_eq!(path.indices(), vec![0, 2, 7, 8, 9, 15]);
}
