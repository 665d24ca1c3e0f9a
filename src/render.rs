use crate::types::{DiveReport, NodeProfile, NodeReadiness, OwnerEntry, WorkloadCount};

const LABEL_WIDTH: usize = 15;

/// Render the fully resolved model as display lines: the node header, one
/// connected tree per owner entry, the flat siblings section, and the
/// trailing diagnostics. Pure function; reads the report, mutates nothing,
/// and produces the same bytes on every call.
pub fn render_report(report: &DiveReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(node_line(&report.node));
    for owner in &report.owners {
        render_owner_block(&mut lines, report, owner);
    }
    render_siblings(&mut lines, report);
    render_diagnostics(&mut lines, report);

    lines
}

/// Position-dependent connector: the last row at a level terminates the
/// branch, every other row continues it.
fn connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        "└───"
    } else {
        "├───"
    }
}

/// Render an ordered list with tree connectors; the formatter receives the
/// item index and the glyph chosen for that position.
fn connected<T>(
    items: &[T],
    mut format_row: impl FnMut(usize, &T, &'static str) -> String,
) -> Vec<String> {
    let len = items.len();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format_row(i, item, connector(i, len)))
        .collect()
}

/// A labeled branch row under the `│` spine; each level indents by two
/// columns.
fn branch(label: &str, level: usize, glyph: &str, text: &str) -> String {
    format!(
        "{:<width$}│{}{} {}",
        label,
        " ".repeat(2 * level - 1),
        glyph,
        text,
        width = LABEL_WIDTH
    )
}

fn node_line(node: &NodeProfile) -> String {
    let body = match (&node.role, &node.readiness) {
        (Some(role), Some(readiness)) => {
            format!("{} ({}, {})", node.name, role, readiness.describe())
        }
        // Unset readiness renders no condition text rather than a false
        // "ready".
        (Some(role), None) => format!("{} ({})", node.name, role),
        (None, Some(readiness)) => format!("{} ({})", node.name, readiness.describe()),
        (None, None) => node.name.clone(),
    };
    format!("{:<12}{}", "[node]", body)
}

fn render_owner_block(lines: &mut Vec<String>, report: &DiveReport, owner: &OwnerEntry) {
    let pod_text = format!("{} ({})", report.pod_name, report.phase);
    lines.push(format!(
        "{:<width$}├─┬─ {}",
        "[namespace]",
        report.namespace,
        width = LABEL_WIDTH
    ));
    match owner {
        OwnerEntry::Bare => {
            lines.push(branch("[type]", 1, "└─┬─", "pod (bare)"));
            lines.push(branch("[pod]", 2, "└─┬─", &pod_text));
            render_containers(lines, report, 3);
        }
        OwnerEntry::Owned { kind, name, count } => {
            lines.push(branch("[type]", 1, "└─┬─", kind.display()));
            let workload_text = format!("{} {}", name, count_text(count));
            lines.push(branch("[workload]", 2, "└─┬─", &workload_text));
            lines.push(branch("[pod]", 3, "└─┬─", &pod_text));
            render_containers(lines, report, 4);
        }
    }
}

fn count_text(count: &WorkloadCount) -> String {
    match count {
        WorkloadCount::Declared(n) => format!("[{}]", pluralize(*n, "replica")),
        WorkloadCount::Unknown => "[unknown replicas]".to_string(),
    }
}

/// Regular containers first, init containers directly beneath at the same
/// indentation; connector glyphs are computed independently over each
/// list's own count. The section label goes on the first emitted row only.
fn render_containers(lines: &mut Vec<String>, report: &DiveReport, level: usize) {
    let mut label = Some("[containers]");

    lines.extend(connected(&report.containers, |_, container, glyph| {
        let text = format!(
            "{} ({})",
            container.name,
            pluralize(container.restart_count, "restart")
        );
        branch(label.take().unwrap_or(""), level, glyph, &text)
    }));

    lines.extend(connected(&report.init_containers, |_, container, glyph| {
        let text = format!(
            "{} (init, {})",
            container.name,
            pluralize(container.restart_count, "restart")
        );
        branch(label.take().unwrap_or(""), level, glyph, &text)
    }));
}

fn render_siblings(lines: &mut Vec<String>, report: &DiveReport) {
    let mut label = Some("[siblings]");
    lines.extend(connected(&report.siblings, |_, name, glyph| {
        format!(
            "{:<width$}{} {}",
            label.take().unwrap_or(""),
            glyph,
            name,
            width = LABEL_WIDTH
        )
    }));
}

/// Trailing diagnostics: containers stuck in a waiting state, then
/// non-benign last terminations. Both checks are independent and may fire
/// for the same container; init containers are scanned after regular ones.
fn render_diagnostics(lines: &mut Vec<String>, report: &DiveReport) {
    lines.push(String::new());

    let all = report.containers.iter().chain(report.init_containers.iter());
    let waiting: Vec<String> = all
        .clone()
        .filter_map(|container| {
            container.waiting.as_ref().map(|wait| {
                format!(
                    "    {} waiting: {} ({})",
                    container.name,
                    wait.reason.as_deref().unwrap_or("unknown"),
                    wait.message.as_deref().unwrap_or("no message")
                )
            })
        })
        .collect();
    if !waiting.is_empty() {
        lines.push("Stuck containers:".to_string());
        lines.extend(waiting);
        lines.push(String::new());
    }

    lines.push("Last terminations:".to_string());
    for container in all {
        if let Some(term) = &container.last_termination {
            match term.reason.as_deref() {
                Some("Completed") | None => {}
                Some(reason) => lines.push(format!(
                    "    {} {} (code {})",
                    container.name,
                    reason.to_lowercase(),
                    term.exit_code
                )),
            }
        }
    }

    if let Some(readiness) = report.node.readiness {
        let echo = match readiness {
            NodeReadiness::Ready => "Node: ready",
            NodeReadiness::NotReady => "Node: not ready",
            NodeReadiness::Unknown => "Node: unknown condition",
        };
        lines.push(echo.to_string());
    }
}

fn pluralize(count: i32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContainerEntry, OwnerKind, TerminationInfo, WaitingInfo};

    fn container(name: &str, restarts: i32) -> ContainerEntry {
        ContainerEntry {
            name: name.to_string(),
            restart_count: restarts,
            last_termination: None,
            waiting: None,
        }
    }

    fn base_report() -> DiveReport {
        DiveReport {
            pod_name: "web-0".to_string(),
            namespace: "default".to_string(),
            phase: "Running".to_string(),
            node: NodeProfile {
                name: "node-1".to_string(),
                role: None,
                readiness: Some(NodeReadiness::Ready),
            },
            owners: vec![OwnerEntry::Owned {
                kind: OwnerKind::StatefulSet,
                name: "web".to_string(),
                count: WorkloadCount::Declared(3),
            }],
            containers: vec![container("app", 0)],
            init_containers: vec![],
            siblings: vec!["web-1".to_string(), "cache-0".to_string()],
        }
    }

    #[test]
    fn test_pluralize_singular_only_at_one() {
        assert_eq!(pluralize(0, "restart"), "0 restarts");
        assert_eq!(pluralize(1, "restart"), "1 restart");
        assert_eq!(pluralize(2, "replica"), "2 replicas");
    }

    #[test]
    fn test_connector_positions() {
        // N = 1: sole row terminates the branch
        assert_eq!(connector(0, 1), "└───");
        // N = 3: only the final row terminates
        assert_eq!(connector(0, 3), "├───");
        assert_eq!(connector(1, 3), "├───");
        assert_eq!(connector(2, 3), "└───");
    }

    #[test]
    fn test_tree_shape_for_owned_pod() {
        let lines = render_report(&base_report());
        assert_eq!(lines[0], "[node]      node-1 (ready)");
        assert_eq!(lines[1], "[namespace]    ├─┬─ default");
        assert_eq!(lines[2], "[type]         │ └─┬─ statefulset");
        assert_eq!(lines[3], "[workload]     │   └─┬─ web [3 replicas]");
        assert_eq!(lines[4], "[pod]          │     └─┬─ web-0 (Running)");
        assert_eq!(lines[5], "[containers]   │       └─── app (0 restarts)");
        assert_eq!(lines[6], "[siblings]     ├─── web-1");
        assert_eq!(lines[7], "               └─── cache-0");
    }

    #[test]
    fn test_bare_pod_skips_workload_line() {
        let mut report = base_report();
        report.owners = vec![OwnerEntry::Bare];
        let lines = render_report(&report);
        assert_eq!(lines[2], "[type]         │ └─┬─ pod (bare)");
        assert_eq!(lines[3], "[pod]          │   └─┬─ web-0 (Running)");
        assert_eq!(lines[4], "[containers]   │     └─── app (0 restarts)");
        assert!(!lines.iter().any(|l| l.starts_with("[workload]")));
    }

    #[test]
    fn test_unrecognized_owner_renders_unknown_count() {
        let mut report = base_report();
        report.owners = vec![OwnerEntry::Owned {
            kind: OwnerKind::Other("job".to_string()),
            name: "backup".to_string(),
            count: WorkloadCount::Unknown,
        }];
        let lines = render_report(&report);
        assert_eq!(lines[2], "[type]         │ └─┬─ job");
        assert_eq!(lines[3], "[workload]     │   └─┬─ backup [unknown replicas]");
    }

    #[test]
    fn test_singular_replica_wording() {
        let mut report = base_report();
        report.owners = vec![OwnerEntry::Owned {
            kind: OwnerKind::ReplicaSet,
            name: "api-6fd9c".to_string(),
            count: WorkloadCount::Declared(1),
        }];
        let lines = render_report(&report);
        assert!(lines[3].ends_with("api-6fd9c [1 replica]"));
    }

    #[test]
    fn test_container_connectors_over_each_list() {
        let mut report = base_report();
        report.containers = vec![container("app", 1), container("sidecar", 0)];
        report.init_containers = vec![container("migrate", 0)];
        let lines = render_report(&report);
        assert_eq!(lines[5], "[containers]   │       ├─── app (1 restart)");
        assert_eq!(lines[6], "               │       └─── sidecar (0 restarts)");
        assert_eq!(lines[7], "               │       └─── migrate (init, 0 restarts)");
    }

    #[test]
    fn test_node_line_variants() {
        let mut node = NodeProfile {
            name: "node-1".to_string(),
            role: Some("master".to_string()),
            readiness: Some(NodeReadiness::NotReady),
        };
        assert_eq!(node_line(&node), "[node]      node-1 (master, not ready)");

        node.readiness = None;
        assert_eq!(node_line(&node), "[node]      node-1 (master)");

        node.role = None;
        assert_eq!(node_line(&node), "[node]      node-1");
    }

    #[test]
    fn test_completed_termination_suppressed() {
        let mut report = base_report();
        report.containers[0].last_termination = Some(TerminationInfo {
            reason: Some("Completed".to_string()),
            exit_code: 0,
        });
        let lines = render_report(&report);
        let header = lines.iter().position(|l| l == "Last terminations:").unwrap();
        // Nothing between the header and the trailing node echo
        assert_eq!(lines[header + 1], "Node: ready");
    }

    #[test]
    fn test_waiting_and_termination_both_fire_for_one_container() {
        let mut report = base_report();
        report.containers[0].waiting = Some(WaitingInfo {
            reason: Some("CrashLoopBackOff".to_string()),
            message: Some("back-off 5m restarting failed container".to_string()),
        });
        report.containers[0].last_termination = Some(TerminationInfo {
            reason: Some("OOMKilled".to_string()),
            exit_code: 137,
        });
        let lines = render_report(&report);
        assert!(lines.contains(&"Stuck containers:".to_string()));
        assert!(lines.contains(
            &"    app waiting: CrashLoopBackOff (back-off 5m restarting failed container)"
                .to_string()
        ));
        assert!(lines.contains(&"    app oomkilled (code 137)".to_string()));
    }

    #[test]
    fn test_no_stuck_section_without_waiting_containers() {
        let lines = render_report(&base_report());
        assert!(!lines.iter().any(|l| l == "Stuck containers:"));
        assert!(lines.contains(&"Last terminations:".to_string()));
    }
}
