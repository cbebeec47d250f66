//! Fixed and dynamic storage must give identical results at every dimension.

use wayfinder_core::{
    Path, PathFinder, PathFinderF1, PathFinderF2, PathFinderF3, SearchMethod, SearchRequest,
    StorageKind,
};

use crate::helpers::{node_names, six_node_embedded};

fn run_all(request: &SearchRequest, dim: usize) -> (Path, Path) {
    let dynamic = PathFinder::dynamic(dim).unwrap().search(request).unwrap();
    let fixed = match dim {
        1 => PathFinderF1::fixed().search(request),
        2 => PathFinderF2::fixed().search(request),
        3 => PathFinderF3::fixed().search(request),
        _ => unreachable!("dimension {dim}"),
    }
    .unwrap();
    (fixed, dynamic)
}

#[test]
fn test_default_search_per_dimension() {
    for dim in 1..=3 {
        let (fixed, dynamic) = run_all(&six_node_embedded(dim), dim);
        assert_eq!(fixed.names(), node_names(&[0, 1, 4, 5]), "dim {dim}");
        assert_eq!(fixed, dynamic, "dim {dim}");
    }
}

#[test]
fn test_fixed_equals_dynamic_for_every_method() {
    for dim in 1..=3 {
        for method in SearchMethod::ALL {
            for bidirectional in [false, true] {
                let request = six_node_embedded(dim)
                    .with_method(method)
                    .with_bidirectional(bidirectional);
                let (fixed, dynamic) = run_all(&request, dim);
                assert_eq!(fixed, dynamic, "dim {dim} {method} bidirectional={bidirectional}");
            }
        }
    }
}

#[test]
fn test_embedded_scalars_keep_cost_route() {
    for dim in 1..=3 {
        let request = six_node_embedded(dim).with_method(SearchMethod::UniformCost);
        let (fixed, _) = run_all(&request, dim);
        assert_eq!(fixed.indices(), vec![0, 2, 3, 5], "dim {dim}");
        assert_eq!(fixed.total_cost(), Some(6.0));
        assert_eq!(fixed.steps()[0].value.as_ref().map(Vec::len), Some(dim));
    }
}

#[test]
fn test_instance_metadata() {
    assert_eq!(PathFinderF2::fixed().dimension(), 2);
    assert_eq!(PathFinderF3::default().kind(), StorageKind::Fixed);
    assert_eq!(PathFinder::d3().dimension(), 3);
    assert_eq!(PathFinder::d2().kind(), StorageKind::Dynamic);
}
