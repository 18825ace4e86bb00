//! Typed rows and the display-table object
//!
//! Node and pod rows carry named, normalized fields instead of the
//! positional attribute arrays the raw kubectl output is delivered in.

use serde::{Deserialize, Serialize};

/// One schedulable node with its allocatable capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRow {
    pub name: String,
    /// Allocatable CPU in millicores
    pub cpu_allocatable: u64,
    /// Allocatable memory in bytes
    pub mem_allocatable: u64,
}

/// One pod with request/limit totals summed over its containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRow {
    pub name: String,
    pub namespace: String,
    /// Name of the node the pod is bound to; empty while unscheduled
    pub node_name: String,
    pub cpu_request: u64,
    pub mem_request: u64,
    pub cpu_limit: u64,
    pub mem_limit: u64,
}

/// Header of a utilization table: subject label plus ordered column labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationHeader {
    pub name: String,
    pub columns: Vec<String>,
}

/// One body row: subject name plus ordered display values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationRow {
    pub name: String,
    pub values: Vec<String>,
}

/// Display-ready utilization summary handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationTable {
    pub title: String,
    pub header: UtilizationHeader,
    pub body: Vec<UtilizationRow>,
}
