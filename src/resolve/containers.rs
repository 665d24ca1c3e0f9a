use k8s_openapi::api::core::v1::{ContainerStatus, Pod};

use crate::types::{ContainerEntry, TerminationInfo, WaitingInfo};

/// Extract the regular and init container status lists from a pod record,
/// preserving status order.
pub fn container_entries(pod: &Pod) -> (Vec<ContainerEntry>, Vec<ContainerEntry>) {
    let containers = pod
        .status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .map(|statuses| statuses.iter().map(entry_from).collect())
        .unwrap_or_default();

    let init_containers = pod
        .status
        .as_ref()
        .and_then(|s| s.init_container_statuses.as_ref())
        .map(|statuses| statuses.iter().map(entry_from).collect())
        .unwrap_or_default();

    (containers, init_containers)
}

fn entry_from(cs: &ContainerStatus) -> ContainerEntry {
    let last_termination = cs
        .last_state
        .as_ref()
        .and_then(|state| state.terminated.as_ref())
        .map(|term| TerminationInfo {
            reason: term.reason.clone(),
            exit_code: term.exit_code,
        });

    // Prefer the current waiting state (e.g. CrashLoopBackOff), fall back
    // to a waiting record left in lastState.
    let waiting = cs
        .state
        .as_ref()
        .and_then(|state| state.waiting.as_ref())
        .or_else(|| cs.last_state.as_ref().and_then(|state| state.waiting.as_ref()))
        .map(|wait| WaitingInfo {
            reason: wait.reason.clone(),
            message: wait.message.clone(),
        });

    ContainerEntry {
        name: cs.name.clone(),
        restart_count: cs.restart_count,
        last_termination,
        waiting,
    }
}
