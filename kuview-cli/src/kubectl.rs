///! Data fetchers backed by the kubectl binary
///!
///! Node and pod inventories are pulled with jsonpath templates that emit
///! one tab-separated line per resource, then parsed into the typed rows
///! kuview-common aggregates over.

use anyhow::{Context, Result};
use kuview_common::{parse_cpu, parse_mem, NodeRow, PodRow, QuantityError};
use tokio::process::Command;
use tracing::debug;

/// Explicit query configuration; nothing is read from ambient shell state
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub context: Option<String>,
    pub selector: Option<String>,
    pub namespace: Option<String>,
}

const NODE_JSONPATH: &str = r#"{range .items[*]}{.metadata.name}{"\t"}{.status.allocatable.cpu}{"\t"}{.status.allocatable.memory}{"\n"}{end}"#;

const POD_JSONPATH: &str = r#"{range .items[*]}{.metadata.name}{"\t"}{.metadata.namespace}{"\t"}{.spec.nodeName}{"\t"}{.spec.containers[*].resources.requests.cpu}{"\t"}{.spec.containers[*].resources.requests.memory}{"\t"}{.spec.containers[*].resources.limits.cpu}{"\t"}{.spec.containers[*].resources.limits.memory}{"\n"}{end}"#;

/// Fetch schedulable nodes with their allocatable CPU and memory.
pub async fn fetch_nodes(opts: &FetchOptions) -> Result<Vec<NodeRow>> {
    let mut args = base_args(opts);
    args.push("get".to_string());
    args.push("nodes".to_string());
    if let Some(selector) = &opts.selector {
        args.push("-l".to_string());
        args.push(selector.clone());
    }
    args.push("--field-selector=spec.unschedulable=false".to_string());
    args.push(format!("-o=jsonpath={}", NODE_JSONPATH));

    let data = run_kubectl(&args).await?;
    let rows = parse_node_output(&data)?;
    debug!(nodes = rows.len(), "parsed node inventory");
    Ok(rows)
}

/// Fetch non-terminal pods with per-pod request/limit totals.
pub async fn fetch_pods(opts: &FetchOptions) -> Result<Vec<PodRow>> {
    let mut args = base_args(opts);
    args.push("get".to_string());
    args.push("pods".to_string());
    match &opts.namespace {
        Some(namespace) => {
            args.push("-n".to_string());
            args.push(namespace.clone());
        }
        None => args.push("--all-namespaces".to_string()),
    }
    // Terminal pods no longer occupy capacity
    args.push("--field-selector=status.phase!=Succeeded,status.phase!=Failed".to_string());
    args.push(format!("-o=jsonpath={}", POD_JSONPATH));

    let data = run_kubectl(&args).await?;
    let rows = parse_pod_output(&data)?;
    debug!(pods = rows.len(), "parsed pod inventory");
    Ok(rows)
}

fn base_args(opts: &FetchOptions) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(context) = &opts.context {
        args.push("--context".to_string());
        args.push(context.clone());
    }
    args
}

async fn run_kubectl(args: &[String]) -> Result<String> {
    debug!(command = ?args, "invoking kubectl");

    let output = Command::new("kubectl")
        .args(args)
        .output()
        .await
        .context("failed to run kubectl")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("kubectl failed: {} - {}", output.status, stderr.trim());
    }

    Ok(String::from_utf8(output.stdout).context("kubectl produced non-UTF-8 output")?)
}

/// Parse node lines of the form `name\tcpu\tmemory`.
fn parse_node_output(data: &str) -> Result<Vec<NodeRow>> {
    let mut rows = Vec::new();

    for line in data.lines().filter(|l| !l.trim().is_empty()) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            anyhow::bail!("malformed node line: {}", line);
        }

        rows.push(NodeRow {
            name: fields[0].to_string(),
            cpu_allocatable: parse_cpu(fields[1])?,
            mem_allocatable: parse_mem(fields[2])?,
        });
    }

    Ok(rows)
}

/// Parse pod lines of the form
/// `name\tnamespace\tnode\treq-cpu\treq-mem\tlim-cpu\tlim-mem`.
///
/// The resource fields hold one space-separated token per container that
/// declares the value; containers without a declaration are simply absent
/// and contribute zero.
fn parse_pod_output(data: &str) -> Result<Vec<PodRow>> {
    let mut rows = Vec::new();

    for line in data.lines().filter(|l| !l.trim().is_empty()) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 7 {
            anyhow::bail!("malformed pod line: {}", line);
        }

        rows.push(PodRow {
            name: fields[0].to_string(),
            namespace: fields[1].to_string(),
            node_name: fields[2].to_string(),
            cpu_request: sum_tokens(fields[3], parse_cpu)?,
            mem_request: sum_tokens(fields[4], parse_mem)?,
            cpu_limit: sum_tokens(fields[5], parse_cpu)?,
            mem_limit: sum_tokens(fields[6], parse_mem)?,
        });
    }

    Ok(rows)
}

fn sum_tokens(
    field: &str,
    parse: impl Fn(&str) -> std::result::Result<u64, QuantityError>,
) -> std::result::Result<u64, QuantityError> {
    let mut total = 0u64;
    for token in field.split_whitespace() {
        total += parse(token)?;
    }
    Ok(total)
}
