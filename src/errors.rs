use thiserror::Error;

/// Failure taxonomy for a dive run. Every variant is fatal for the run:
/// there is no retry and no partial render of a half-resolved model.
#[derive(Debug, Error)]
pub enum DiveError {
    /// The cluster session could not be established; nothing was looked up.
    #[error("failed to establish a cluster session: {0}")]
    Configuration(String),

    /// No pod matched the given name/namespace scope. Transport failures
    /// from the locating query are folded into this variant too.
    #[error(
        "no pod named \"{0}\" was found; check the current context, \
         API server reachability, and the pod name spelling"
    )]
    NotFound(String),

    /// The pod exists but has no assigned node yet, so the node-dependent
    /// stages cannot proceed.
    #[error("pod \"{0}\" has not been scheduled to a node yet")]
    PendingScheduling(String),

    /// A secondary cluster lookup failed or was unreachable.
    #[error("{stage} lookup failed: {message}")]
    Lookup { stage: String, message: String },
}

impl DiveError {
    pub(crate) fn lookup(stage: &str, err: impl std::fmt::Display) -> Self {
        DiveError::Lookup {
            stage: stage.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_corrective_hint() {
        let msg = DiveError::NotFound("web-0".to_string()).to_string();
        assert!(msg.contains("web-0"));
        assert!(msg.contains("context"));
        assert!(msg.contains("reachability"));
        assert!(msg.contains("spelling"));
    }

    #[test]
    fn test_lookup_message_names_the_stage() {
        let err = DiveError::lookup("node", "connection refused");
        assert_eq!(err.to_string(), "node lookup failed: connection refused");
    }
}
