//! Node naming through the request.

use wayfinder_core::{PathFinder, SearchRequest};

use crate::helpers::six_node;

#[test]
fn test_explicit_names() {
    let names: Vec<String> = ["home", "a", "b", "c", "d", "work"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let path = PathFinder::d1()
        .search(&six_node().with_names(names))
        .unwrap();
    assert_eq!(path.names(), vec!["home", "a", "d", "work"]);
}

#[test]
fn test_short_name_list_falls_back_to_prefix() {
    let mut request = six_node().with_names(vec!["only".to_string()]);
    request.node_prefix_name = "N".to_string();
    let path = PathFinder::d1().search(&request).unwrap();
    assert_eq!(path.names(), vec!["N0", "N1", "N4", "N5"]);
}

#[test]
fn test_request_from_json_uses_defaults() {
    let request: SearchRequest = serde_json::from_str(
        r#"{
            "num_nodes": 3,
            "edges": [[0, 1], [1, 2]],
            "start_node_idx": 0,
            "goal_node_idx": 2,
            "method": "A_STAR"
        }"#,
    )
    .unwrap();
    assert_eq!(request.node_prefix_name, "Node_");
    assert!(!request.bidirectional);

    let path = PathFinder::d1().search(&request).unwrap();
    assert_eq!(path.names(), vec!["Node_0", "Node_1", "Node_2"]);
}
