use k8s_openapi::api::core::v1::Node;

use crate::errors::DiveError;
use crate::query::ClusterQuery;
use crate::types::{NodeProfile, NodeReadiness};

const ROLE_LABEL: &str = "kubernetes.io/role";
const CONTROL_PLANE_ROLE: &str = "master";

/// Resolve the hosting node into its readiness state and role.
pub async fn profile_node<Q: ClusterQuery>(
    gateway: &Q,
    node_name: &str,
) -> Result<NodeProfile, DiveError> {
    let node = gateway
        .get_node(node_name)
        .await
        .map_err(|e| DiveError::lookup("node", e))?;

    Ok(NodeProfile {
        name: node_name.to_string(),
        role: node_role(&node),
        readiness: node_readiness(&node),
    })
}

/// Walk the condition list; the last `Ready`-typed condition wins. The
/// cluster API returns at most one entry per type in practice, so
/// last-match-wins only matters for malformed input. No `Ready` condition
/// at all leaves the state unset.
fn node_readiness(node: &Node) -> Option<NodeReadiness> {
    let conditions = node.status.as_ref().and_then(|s| s.conditions.as_ref())?;
    let mut readiness = None;
    for condition in conditions {
        if condition.type_ == "Ready" {
            readiness = Some(match condition.status.as_str() {
                "False" => NodeReadiness::NotReady,
                "Unknown" => NodeReadiness::Unknown,
                _ => NodeReadiness::Ready,
            });
        }
    }
    readiness
}

/// A node is control-plane iff the role label carries the literal master
/// value; absence of the label is not an error.
fn node_role(node: &Node) -> Option<String> {
    node.metadata
        .labels
        .as_ref()
        .and_then(|labels| labels.get(ROLE_LABEL))
        .filter(|v| v.as_str() == CONTROL_PLANE_ROLE)
        .cloned()
}
