//! Node display names.
//!
//! Names never influence a search; they only label the nodes of a returned
//! path.

/// Default prefix for generated node names.
pub const DEFAULT_NODE_PREFIX: &str = "Node_";

/// Resolves the display name of every node.
///
/// Uses `names` when it holds exactly one entry per node, otherwise
/// generates `prefix + index`. An empty prefix yields bare indices.
///
/// # Example
///
/// ```rust
/// use wayfinder_core::naming::resolve_names;
///
/// assert_eq!(resolve_names(2, &[], "Node_"), vec!["Node_0", "Node_1"]);
/// assert_eq!(resolve_names(4, &[], "")[3], "3");
/// ```
#[must_use]
pub fn resolve_names(num_nodes: usize, names: &[String], prefix: &str) -> Vec<String> {
    if !names.is_empty() {
        if names.len() == num_nodes {
            return names.to_vec();
        }
        tracing::warn!(
            supplied = names.len(),
            num_nodes,
            prefix,
            "Node name list does not cover every node, falling back to generated names"
        );
    }

    (0..num_nodes).map(|i| format!("{prefix}{i}")).collect()
}
