use tracing::info;

use crate::errors::DiveError;
use crate::query::ClusterQuery;
use crate::render::render_report;
use crate::resolve::{
    collect_siblings, container_entries, locate_pod, profile_node, resolve_owners,
};
use crate::types::DiveReport;

/// One dive run over a cluster query gateway.
///
/// Stages execute strictly in sequence (locate, node profile, siblings,
/// owner chain) and every stage fails fast; the assembled report is owned
/// by the run and discarded after rendering.
pub struct Dive<'a, Q: ClusterQuery> {
    gateway: &'a Q,
}

impl<'a, Q: ClusterQuery> Dive<'a, Q> {
    pub fn new(gateway: &'a Q) -> Self {
        Self { gateway }
    }

    /// Resolve a pod name (optionally scoped to a namespace) into the
    /// fully populated report model.
    pub async fn run(
        &self,
        pod_name: &str,
        namespace: Option<&str>,
    ) -> Result<DiveReport, DiveError> {
        let pod = locate_pod(self.gateway, pod_name, namespace).await?;

        let pod_name = pod
            .metadata
            .name
            .clone()
            .unwrap_or_else(|| pod_name.to_string());
        let pod_namespace = pod.metadata.namespace.clone().unwrap_or_default();
        // Non-empty by the locate stage's pending-scheduling check.
        let node_name = pod
            .spec
            .as_ref()
            .and_then(|s| s.node_name.clone())
            .unwrap_or_default();
        info!("located pod {} in namespace {}", pod_name, pod_namespace);

        let node = profile_node(self.gateway, &node_name).await?;
        let siblings = collect_siblings(self.gateway, &node_name, &pod_name).await?;

        let owner_refs = pod.metadata.owner_references.clone().unwrap_or_default();
        let owners = resolve_owners(self.gateway, &owner_refs, &pod_namespace).await?;

        let (containers, init_containers) = container_entries(&pod);
        let phase = pod
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(DiveReport {
            pod_name,
            namespace: pod_namespace,
            phase,
            node,
            owners,
            containers,
            init_containers,
            siblings,
        })
    }

    /// Resolve and render in one pass; the entry point the CLI consumes.
    pub async fn lines(
        &self,
        pod_name: &str,
        namespace: Option<&str>,
    ) -> Result<Vec<String>, DiveError> {
        let report = self.run(pod_name, namespace).await?;
        Ok(render_report(&report))
    }
}
