//! Validation failures surface before any search step.

use wayfinder_core::{Error, PathFinder, PathFinderF1, PathFinderF2};

use crate::helpers::{six_node, six_node_embedded};

#[test]
fn test_two_dimensional_values_rejected_by_dim_one_instances() {
    let request = six_node_embedded(2);
    let expected = Error::DimensionMismatch {
        node: 0,
        expected: 1,
        actual: 2,
    };
    assert_eq!(PathFinderF1::fixed().search(&request).unwrap_err(), expected);
    assert_eq!(PathFinder::d1().search(&request).unwrap_err(), expected);
}

#[test]
fn test_single_bad_vector_invalidates_request() {
    let mut request = six_node_embedded(2);
    request.node_values[3] = Some(vec![1.0, 2.0, 3.0]);
    let err = PathFinderF2::fixed().search(&request).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            node: 3,
            expected: 2,
            actual: 3,
        }
    );
    assert!(err.is_validation());
}

#[test]
fn test_unsupported_dynamic_dimension() {
    assert_eq!(
        PathFinder::dynamic(0).unwrap_err(),
        Error::UnsupportedDimension(0)
    );
    assert_eq!(
        PathFinder::dynamic(4).unwrap_err(),
        Error::UnsupportedDimension(4)
    );
}

#[test]
fn test_partial_value_list_rejected() {
    let request = six_node().with_values(vec![Some(vec![0.0]), Some(vec![1.0])]);
    assert_eq!(
        PathFinder::d1().search(&request).unwrap_err(),
        Error::ValueCountMismatch {
            expected: 6,
            actual: 2,
        }
    );
}

#[test]
fn test_edge_endpoint_out_of_range() {
    let mut request = six_node();
    request.edges.push((5, 6));
    assert_eq!(
        PathFinder::d1().search(&request).unwrap_err(),
        Error::OutOfRange { index: 6, bound: 6 }
    );
}

#[test]
fn test_start_and_goal_out_of_range() {
    let mut request = six_node();
    request.start_node_idx = 6;
    assert_eq!(
        PathFinder::d1().search(&request).unwrap_err(),
        Error::OutOfRange { index: 6, bound: 6 }
    );

    let mut request = six_node();
    request.goal_node_idx = 10;
    assert_eq!(
        PathFinderF1::fixed().search(&request).unwrap_err(),
        Error::OutOfRange { index: 10, bound: 6 }
    );
}

#[test]
fn test_missing_values_are_allowed() {
    let mut request = six_node_embedded(2);
    request.node_values[4] = None;
    let path = PathFinderF2::fixed().search(&request).unwrap();
    assert_eq!(path.indices(), vec![0, 1, 4, 5]);
    assert_eq!(path.steps()[2].value, None);
}

#[test]
fn test_nan_value_rejected_before_search() {
    let mut request = six_node_embedded(2);
    request.node_values[4] = Some(vec![f32::NAN, 0.0]);
    let expected = Error::NonFiniteValue {
        node: 4,
        component: 0,
    };
    assert_eq!(PathFinderF2::fixed().search(&request).unwrap_err(), expected);
    assert_eq!(PathFinder::d2().search(&request).unwrap_err(), expected);
}
