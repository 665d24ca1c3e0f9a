/// Readiness derived from the node's `Ready` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeReadiness {
    Ready,
    NotReady,
    Unknown,
}

impl NodeReadiness {
    pub fn describe(&self) -> &'static str {
        match self {
            NodeReadiness::Ready => "ready",
            NodeReadiness::NotReady => "not ready",
            NodeReadiness::Unknown => "unknown state",
        }
    }
}

/// The hosting node, reduced to what the report needs.
///
/// `readiness` is `None` when the node carried no `Ready`-typed condition
/// at all; that case renders without any condition text rather than
/// pretending the node is healthy.
#[derive(Debug, Clone)]
pub struct NodeProfile {
    pub name: String,
    pub role: Option<String>,
    pub readiness: Option<NodeReadiness>,
}

/// Owner reference kind, classified case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerKind {
    ReplicaSet,
    StatefulSet,
    DaemonSet,
    Other(String),
}

impl OwnerKind {
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "replicaset" => OwnerKind::ReplicaSet,
            "statefulset" => OwnerKind::StatefulSet,
            "daemonset" => OwnerKind::DaemonSet,
            other => OwnerKind::Other(other.to_string()),
        }
    }

    /// Lower-cased display form, matching how the kind is compared.
    pub fn display(&self) -> &str {
        match self {
            OwnerKind::ReplicaSet => "replicaset",
            OwnerKind::StatefulSet => "statefulset",
            OwnerKind::DaemonSet => "daemonset",
            OwnerKind::Other(raw) => raw,
        }
    }
}

/// Declared replica/desired count of the owning workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadCount {
    Declared(i32),
    Unknown,
}

/// One resolved entry of the pod's owner chain.
#[derive(Debug, Clone)]
pub enum OwnerEntry {
    /// Pod with no owner references at all.
    Bare,
    Owned {
        kind: OwnerKind,
        name: String,
        count: WorkloadCount,
    },
}

#[derive(Debug, Clone)]
pub struct TerminationInfo {
    pub reason: Option<String>,
    pub exit_code: i32,
}

#[derive(Debug, Clone)]
pub struct WaitingInfo {
    pub reason: Option<String>,
    pub message: Option<String>,
}

/// One container's runtime status, used for the containers branch and the
/// trailing diagnostics section.
#[derive(Debug, Clone)]
pub struct ContainerEntry {
    pub name: String,
    pub restart_count: i32,
    pub last_termination: Option<TerminationInfo>,
    pub waiting: Option<WaitingInfo>,
}

/// Fully resolved model for a single dive run. Built once, rendered, and
/// discarded; nothing is cached across invocations.
#[derive(Debug, Clone)]
pub struct DiveReport {
    pub pod_name: String,
    pub namespace: String,
    pub phase: String,
    pub node: NodeProfile,
    pub owners: Vec<OwnerEntry>,
    pub containers: Vec<ContainerEntry>,
    pub init_containers: Vec<ContainerEntry>,
    pub siblings: Vec<String>,
}
