use crate::errors::DiveError;
use crate::query::ClusterQuery;

/// List the names of all pods scheduled on the same node, excluding the
/// target pod itself. The cluster-returned order is preserved; no sorting
/// is applied.
pub async fn collect_siblings<Q: ClusterQuery>(
    gateway: &Q,
    node_name: &str,
    exclude: &str,
) -> Result<Vec<String>, DiveError> {
    let selector = format!("spec.nodeName={}", node_name);
    let pods = gateway
        .list_pods(None, &selector)
        .await
        .map_err(|e| DiveError::lookup("sibling pods", e))?;

    Ok(pods
        .into_iter()
        .filter_map(|pod| pod.metadata.name)
        .filter(|name| name != exclude)
        .collect())
}
