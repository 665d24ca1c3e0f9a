use k8s_openapi::api::core::v1::Pod;
use tracing::warn;

use crate::errors::DiveError;
use crate::query::ClusterQuery;

/// Resolve a pod name to exactly one pod record.
///
/// An empty scope searches cluster-wide; `Some(ns)` restricts the query to
/// that namespace. The match is an exact-name field selector, never a
/// prefix. When the same name exists in several namespaces and no scope is
/// given, the first record returned by the query wins.
pub async fn locate_pod<Q: ClusterQuery>(
    gateway: &Q,
    pod_name: &str,
    namespace: Option<&str>,
) -> Result<Pod, DiveError> {
    let selector = format!("metadata.name={}", pod_name);
    let matches = gateway
        .list_pods(namespace, &selector)
        .await
        .map_err(|e| {
            // The locating query does not distinguish "not found" from a
            // transport failure; both end the run the same way.
            warn!("pod listing failed: {}", e);
            DiveError::NotFound(pod_name.to_string())
        })?;

    let pod = matches
        .into_iter()
        .next()
        .ok_or_else(|| DiveError::NotFound(pod_name.to_string()))?;

    let scheduled = pod
        .spec
        .as_ref()
        .and_then(|s| s.node_name.as_deref())
        .map(|n| !n.is_empty())
        .unwrap_or(false);
    if !scheduled {
        return Err(DiveError::PendingScheduling(pod_name.to_string()));
    }

    Ok(pod)
}
