//! One scenario per search method on the reference graphs.

use wayfinder_core::{
    AggregateCost, DefaultCost, DistanceCost, DistanceMetric, Error, PathFinder, PathFinderF1,
    SearchMethod,
};

use crate::helpers::{
    names, node_names, six_node, six_node_valued, sixteen_node, sixteen_node_valued,
};

#[test]
fn test_default_method_is_breadth_first() {
    let finder = PathFinder::d1();
    let path = finder.search(&six_node()).unwrap();
    assert_eq!(names(&path), node_names(&[0, 1, 4, 5]));

    let path = finder.search(&sixteen_node()).unwrap();
    assert_eq!(names(&path), node_names(&[0, 1, 3, 10, 13, 15]));
}

#[test]
fn test_optimal_methods_agree_without_values() {
    let finder = PathFinderF1::fixed();
    for method in [
        SearchMethod::BreadthFirst,
        SearchMethod::UniformCost,
        SearchMethod::AStar,
    ] {
        let path = finder.search(&six_node().with_method(method)).unwrap();
        assert_eq!(path.indices(), vec![0, 1, 4, 5], "{method}");

        let path = finder.search(&sixteen_node().with_method(method)).unwrap();
        assert_eq!(path.indices(), vec![0, 1, 3, 10, 13, 15], "{method}");
    }
}

#[test]
fn test_depth_first_follows_adjacency_order() {
    let finder = PathFinder::d1();
    let path = finder
        .search(&six_node().with_method(SearchMethod::DepthFirst))
        .unwrap();
    assert_eq!(names(&path), node_names(&[0, 2, 4, 5]));

    let path = finder
        .search(&sixteen_node().with_method(SearchMethod::DepthFirst))
        .unwrap();
    assert_eq!(names(&path), node_names(&[0, 2, 7, 8, 9, 15]));
}

#[test]
fn test_uniform_cost_avoids_expensive_node() {
    let path = PathFinder::d1()
        .search(&six_node_valued().with_method(SearchMethod::UniformCost))
        .unwrap();
    assert_eq!(names(&path), node_names(&[0, 2, 3, 5]));
    assert_eq!(path.total_cost(), Some(6.0));
}

#[test]
fn test_a_star_matches_uniform_cost_on_valued_graphs() {
    let finder = PathFinderF1::fixed();
    for request in [six_node_valued(), sixteen_node_valued()] {
        let ucs = finder
            .search(&request.clone().with_method(SearchMethod::UniformCost))
            .unwrap();
        let astar = finder
            .search(&request.with_method(SearchMethod::AStar))
            .unwrap();
        assert_eq!(astar.indices(), ucs.indices());
        assert_eq!(astar.total_cost(), ucs.total_cost());
    }
}

#[test]
fn test_sixteen_node_min_cost_route() {
    let path = PathFinder::d1()
        .search(&sixteen_node_valued().with_method(SearchMethod::UniformCost))
        .unwrap();
    assert_eq!(path.indices(), vec![0, 2, 3, 10, 13, 15]);
    assert_eq!(path.total_cost(), Some(20.0));
}

#[test]
fn test_values_leave_unweighted_order_alone() {
    let finder = PathFinder::d1();
    let bfs = finder.search(&six_node_valued()).unwrap();
    assert_eq!(bfs.indices(), vec![0, 1, 4, 5]);

    let dfs = finder
        .search(&six_node_valued().with_method(SearchMethod::DepthFirst))
        .unwrap();
    assert_eq!(dfs.indices(), vec![0, 2, 4, 5]);
}

#[test]
fn test_unreachable_goal_is_empty_not_error() {
    let mut request = six_node();
    request.num_nodes = 7;
    request.goal_node_idx = 6;
    for method in SearchMethod::ALL {
        let path = PathFinder::d1()
            .search(&request.clone().with_method(method))
            .unwrap();
        assert!(path.is_empty(), "{method}");
    }
}

#[test]
fn test_path_serializes_to_json() {
    let path = PathFinder::d1()
        .search(&six_node_valued().with_method(SearchMethod::UniformCost))
        .unwrap();
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(json["steps"][1]["name"], "Node_2");
    assert_eq!(json["steps"][3]["cost"], 6.0);
    assert_eq!(json["stats"]["nodes_expanded"], path.stats().nodes_expanded);
}

#[test]
fn test_custom_edge_cost_through_path_finder() {
    let request = six_node_valued().with_method(SearchMethod::UniformCost);
    let by_metric = PathFinder::d1().search(&request).unwrap();
    assert_eq!(by_metric.indices(), vec![0, 2, 3, 5]);

    // Hop count only: values no longer steer the search.
    let hops = AggregateCost::weighted(
        vec![1.0, 0.0],
        vec![
            Box::new(DefaultCost::unit()),
            Box::new(DistanceCost::with_metric(DistanceMetric::Manhattan)),
        ],
    )
    .unwrap();
    let by_hops = PathFinderF1::fixed()
        .search_with_cost(&request, &hops)
        .unwrap();
    assert_eq!(by_hops.indices(), vec![0, 1, 4, 5]);
    assert_eq!(by_hops.total_cost(), Some(3.0));
}

#[test]
fn test_cost_weight_mismatch_is_a_typed_error() {
    let err = AggregateCost::weighted(vec![1.0, 2.0, 3.0], vec![Box::new(DefaultCost::unit())])
        .unwrap_err();
    assert_eq!(
        err,
        Error::CostWeightMismatch {
            weights: 3,
            terms: 1
        }
    );
}
