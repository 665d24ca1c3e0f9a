use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;

use crate::errors::DiveError;
use crate::query::ClusterQuery;
use crate::types::{OwnerEntry, OwnerKind, WorkloadCount};

/// Classify the pod's owner references and, for recognized controller
/// kinds, fetch the declared replica/desired count.
///
/// A pod without owner references yields a single bare entry. Unrecognized
/// kinds are not errors; they carry an unknown count and trigger no
/// secondary lookup. A failed secondary lookup for a recognized kind
/// aborts the whole run.
pub async fn resolve_owners<Q: ClusterQuery>(
    gateway: &Q,
    owner_refs: &[OwnerReference],
    namespace: &str,
) -> Result<Vec<OwnerEntry>, DiveError> {
    if owner_refs.is_empty() {
        return Ok(vec![OwnerEntry::Bare]);
    }

    let mut entries = Vec::with_capacity(owner_refs.len());
    for owner in owner_refs {
        let kind = OwnerKind::classify(&owner.kind);
        let count = declared_count(gateway, &kind, namespace, &owner.name).await?;
        entries.push(OwnerEntry::Owned {
            kind,
            name: owner.name.clone(),
            count,
        });
    }
    Ok(entries)
}

async fn declared_count<Q: ClusterQuery>(
    gateway: &Q,
    kind: &OwnerKind,
    namespace: &str,
    name: &str,
) -> Result<WorkloadCount, DiveError> {
    let count = match kind {
        OwnerKind::ReplicaSet => gateway
            .replica_set_replicas(namespace, name)
            .await
            .map_err(|e| DiveError::lookup("replicaset workload", e))?,
        OwnerKind::StatefulSet => gateway
            .stateful_set_replicas(namespace, name)
            .await
            .map_err(|e| DiveError::lookup("statefulset workload", e))?,
        OwnerKind::DaemonSet => gateway
            .daemon_set_desired(namespace, name)
            .await
            .map_err(|e| DiveError::lookup("daemonset workload", e))?,
        OwnerKind::Other(_) => return Ok(WorkloadCount::Unknown),
    };
    Ok(WorkloadCount::Declared(count))
}
