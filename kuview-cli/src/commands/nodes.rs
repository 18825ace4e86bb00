///! Per-node utilization command

use crate::kubectl::{self, FetchOptions};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use kuview_common::node_utilization;

pub async fn handle_nodes_command(opts: &FetchOptions, output_format: &str) -> Result<()> {
    let (nodes, pods) = tokio::try_join!(kubectl::fetch_nodes(opts), kubectl::fetch_pods(opts))?;

    let table = node_utilization(&nodes, &pods);
    output::print_utilization(&table, OutputFormat::from_str(output_format))
}
