//! Formatters turning node/pod inventories into display tables

use crate::aggregate::{free, percentage, schedulable, sum_cpu, sum_mem};
use crate::model::{NodeRow, PodRow, UtilizationHeader, UtilizationRow, UtilizationTable};
use crate::pretty::{cpu_pretty, mem_pretty};

/// Cluster-wide utilization summary.
///
/// Allocatable is summed across every node, requests and limits across
/// every pod, yielding one CPU row and one Memory row.
pub fn cluster_utilization(nodes: &[NodeRow], pods: &[PodRow]) -> UtilizationTable {
    let alloc_cpu = sum_cpu(nodes, |n| n.cpu_allocatable);
    let alloc_mem = sum_mem(nodes, |n| n.mem_allocatable);
    let req_cpu = sum_cpu(pods, |p| p.cpu_request);
    let req_mem = sum_mem(pods, |p| p.mem_request);
    let lim_cpu = sum_cpu(pods, |p| p.cpu_limit);
    let lim_mem = sum_mem(pods, |p| p.mem_limit);

    let cpu_row = UtilizationRow {
        name: "CPU".to_string(),
        values: vec![
            cpu_pretty(req_cpu),
            percentage(req_cpu, alloc_cpu),
            cpu_pretty(lim_cpu),
            percentage(lim_cpu, alloc_cpu),
            cpu_pretty(alloc_cpu),
            cpu_pretty(schedulable(req_cpu, alloc_cpu)),
            cpu_pretty(free(req_cpu, lim_cpu, alloc_cpu)),
        ],
    };
    let mem_row = UtilizationRow {
        name: "Memory".to_string(),
        values: vec![
            mem_pretty(req_mem),
            percentage(req_mem, alloc_mem),
            mem_pretty(lim_mem),
            percentage(lim_mem, alloc_mem),
            mem_pretty(alloc_mem),
            mem_pretty(schedulable(req_mem, alloc_mem)),
            mem_pretty(free(req_mem, lim_mem, alloc_mem)),
        ],
    };

    UtilizationTable {
        title: "Cluster Utilization".to_string(),
        header: UtilizationHeader {
            name: "Resource".to_string(),
            columns: vec![
                "Requests".to_string(),
                "%Requests".to_string(),
                "Limits".to_string(),
                "%Limits".to_string(),
                "Allocatable".to_string(),
                "Schedulable".to_string(),
                "Free".to_string(),
            ],
        },
        body: vec![cpu_row, mem_row],
    }
}

/// Per-node utilization summary, one row per node.
///
/// A pod contributes to exactly the node whose name equals its recorded
/// node name; pods bound to no known node are left out entirely.
pub fn node_utilization(nodes: &[NodeRow], pods: &[PodRow]) -> UtilizationTable {
    let body = nodes
        .iter()
        .map(|node| {
            let bound: Vec<&PodRow> = pods.iter().filter(|p| p.node_name == node.name).collect();

            let req_cpu = sum_cpu(&bound, |p| p.cpu_request);
            let req_mem = sum_mem(&bound, |p| p.mem_request);
            let lim_cpu = sum_cpu(&bound, |p| p.cpu_limit);
            let lim_mem = sum_mem(&bound, |p| p.mem_limit);

            UtilizationRow {
                name: node.name.clone(),
                values: vec![
                    cpu_pretty(req_cpu),
                    percentage(req_cpu, node.cpu_allocatable),
                    cpu_pretty(lim_cpu),
                    percentage(lim_cpu, node.cpu_allocatable),
                    mem_pretty(req_mem),
                    percentage(req_mem, node.mem_allocatable),
                    mem_pretty(lim_mem),
                    percentage(lim_mem, node.mem_allocatable),
                ],
            }
        })
        .collect();

    UtilizationTable {
        title: "Node Utilization".to_string(),
        header: UtilizationHeader {
            name: "Node".to_string(),
            columns: vec![
                "CPU Requests".to_string(),
                "CPU %Requests".to_string(),
                "CPU Limits".to_string(),
                "CPU %Limits".to_string(),
                "Mem Requests".to_string(),
                "Mem %Requests".to_string(),
                "Mem Limits".to_string(),
                "Mem %Limits".to_string(),
            ],
        },
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    fn node(name: &str, cpu_millicores: u64, mem_bytes: u64) -> NodeRow {
        NodeRow {
            name: name.to_string(),
            cpu_allocatable: cpu_millicores,
            mem_allocatable: mem_bytes,
        }
    }

    fn pod(name: &str, node_name: &str, req_cpu: u64, req_mem: u64, lim_cpu: u64, lim_mem: u64) -> PodRow {
        PodRow {
            name: name.to_string(),
            namespace: "default".to_string(),
            node_name: node_name.to_string(),
            cpu_request: req_cpu,
            mem_request: req_mem,
            cpu_limit: lim_cpu,
            mem_limit: lim_mem,
        }
    }

    #[test]
    fn test_cluster_utilization_two_nodes() {
        let nodes = vec![node("a", 4000, 8 * GIB), node("b", 4000, 8 * GIB)];
        let pods = vec![
            pod("p1", "a", 2000, 4 * GIB, 0, 0),
            pod("p2", "b", 3000, 4 * GIB, 0, 0),
        ];

        let table = cluster_utilization(&nodes, &pods);
        assert_eq!(table.header.name, "Resource");
        assert_eq!(table.header.columns.len(), 7);
        assert_eq!(table.body.len(), 2);

        let cpu = &table.body[0];
        assert_eq!(cpu.name, "CPU");
        assert_eq!(cpu.values[0], "5.000000");
        assert_eq!(cpu.values[1], "62.50%");
        assert_eq!(cpu.values[4], "8.000000");

        let mem = &table.body[1];
        assert_eq!(mem.name, "Memory");
        assert_eq!(mem.values[0], "8.00 GiB");
        assert_eq!(mem.values[1], "50.00%");
        assert_eq!(mem.values[4], "16.00 GiB");
    }

    #[test]
    fn test_cluster_utilization_schedulable_and_free() {
        let nodes = vec![node("a", 10_000, 10 * GIB)];
        let pods = vec![pod("p1", "a", 4000, 2 * GIB, 6000, 3 * GIB)];

        let table = cluster_utilization(&nodes, &pods);
        let cpu = &table.body[0];
        // Schedulable subtracts requests; Free subtracts the larger of
        // requests and limits.
        assert_eq!(cpu.values[5], "6.000000");
        assert_eq!(cpu.values[6], "4.000000");

        let mem = &table.body[1];
        assert_eq!(mem.values[5], "8.00 GiB");
        assert_eq!(mem.values[6], "7.00 GiB");
    }

    #[test]
    fn test_cluster_utilization_empty_cluster_reports_err() {
        let table = cluster_utilization(&[], &[]);
        let cpu = &table.body[0];
        assert_eq!(cpu.values[1], "Err");
        assert_eq!(cpu.values[3], "Err");
    }

    #[test]
    fn test_node_utilization_exact_name_match() {
        let nodes = vec![node("a", 4000, 8 * GIB), node("b", 4000, 8 * GIB)];
        let pods = vec![
            pod("p1", "a", 1000, GIB, 2000, 2 * GIB),
            pod("p2", "b", 500, GIB, 0, 0),
            pod("p3", "gone", 9000, 9 * GIB, 9000, 9 * GIB),
            pod("p4", "", 9000, 9 * GIB, 9000, 9 * GIB),
        ];

        let table = node_utilization(&nodes, &pods);
        assert_eq!(table.header.name, "Node");
        assert_eq!(table.header.columns.len(), 8);
        assert_eq!(table.body.len(), 2);

        let row_a = &table.body[0];
        assert_eq!(row_a.name, "a");
        assert_eq!(row_a.values[0], "1.000000");
        assert_eq!(row_a.values[1], "25.00%");
        assert_eq!(row_a.values[2], "2.000000");
        assert_eq!(row_a.values[3], "50.00%");
        assert_eq!(row_a.values[4], "1.00 GiB");
        assert_eq!(row_a.values[6], "2.00 GiB");

        // p3 and p4 match no node and appear in no row's totals
        let row_b = &table.body[1];
        assert_eq!(row_b.values[0], "0.500000");
        assert_eq!(row_b.values[2], "0.000000");
        assert_eq!(row_b.values[3], "0%");
    }

    #[test]
    fn test_node_utilization_limit_columns_stay_per_resource() {
        // CPU limit and memory limit differ wildly; each must land in its
        // own column.
        let nodes = vec![node("a", 8000, 8 * GIB)];
        let pods = vec![pod("p1", "a", 0, 0, 4000, GIB)];

        let table = node_utilization(&nodes, &pods);
        let row = &table.body[0];
        assert_eq!(row.values[2], "4.000000");
        assert_eq!(row.values[6], "1.00 GiB");
    }

    #[test]
    fn test_node_utilization_zero_allocatable_reports_err() {
        let nodes = vec![node("a", 0, 0)];
        let pods = vec![pod("p1", "a", 1000, GIB, 0, 0)];

        let table = node_utilization(&nodes, &pods);
        let row = &table.body[0];
        assert_eq!(row.values[1], "Err");
        assert_eq!(row.values[5], "Err");
    }
}
