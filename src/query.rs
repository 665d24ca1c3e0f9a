use anyhow::Result;
use k8s_openapi::api::apps::v1::{DaemonSet, ReplicaSet, StatefulSet};
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::{api::ListParams, Api, Client};

/// Cluster query capability the pipeline depends on.
///
/// Field selectors use the `key=value` exact-match form
/// (`metadata.name=...`, `spec.nodeName=...`). Errors are raw transport
/// errors; classification into [`crate::DiveError`] happens in the stages.
#[allow(async_fn_in_trait)]
pub trait ClusterQuery {
    /// List pods matching a field selector, namespaced or cluster-wide.
    async fn list_pods(&self, namespace: Option<&str>, field_selector: &str) -> Result<Vec<Pod>>;

    /// Fetch a node by exact name.
    async fn get_node(&self, name: &str) -> Result<Node>;

    /// Declared replica count of a ReplicaSet.
    async fn replica_set_replicas(&self, namespace: &str, name: &str) -> Result<i32>;

    /// Declared replica count of a StatefulSet.
    async fn stateful_set_replicas(&self, namespace: &str, name: &str) -> Result<i32>;

    /// Desired scheduled count of a DaemonSet.
    async fn daemon_set_desired(&self, namespace: &str, name: &str) -> Result<i32>;
}

/// Live gateway over an authenticated `kube::Client`.
pub struct KubeGateway {
    client: Client,
}

impl KubeGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ClusterQuery for KubeGateway {
    async fn list_pods(&self, namespace: Option<&str>, field_selector: &str) -> Result<Vec<Pod>> {
        let api: Api<Pod> = match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let lp = ListParams::default().fields(field_selector);
        Ok(api.list(&lp).await?.items)
    }

    async fn get_node(&self, name: &str) -> Result<Node> {
        let api: Api<Node> = Api::all(self.client.clone());
        Ok(api.get(name).await?)
    }

    async fn replica_set_replicas(&self, namespace: &str, name: &str) -> Result<i32> {
        let api: Api<ReplicaSet> = Api::namespaced(self.client.clone(), namespace);
        let rs = api.get(name).await?;
        Ok(rs.spec.and_then(|s| s.replicas).unwrap_or(0))
    }

    async fn stateful_set_replicas(&self, namespace: &str, name: &str) -> Result<i32> {
        let api: Api<StatefulSet> = Api::namespaced(self.client.clone(), namespace);
        let sts = api.get(name).await?;
        Ok(sts.spec.and_then(|s| s.replicas).unwrap_or(0))
    }

    async fn daemon_set_desired(&self, namespace: &str, name: &str) -> Result<i32> {
        let api: Api<DaemonSet> = Api::namespaced(self.client.clone(), namespace);
        let ds = api.get(name).await?;
        Ok(ds.status.map(|s| s.desired_number_scheduled).unwrap_or(0))
    }
}
