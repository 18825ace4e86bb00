///! Output formatting for CLI
///!
///! Renders the utilization table object as a terminal table, JSON or YAML.

use colored::Colorize;
use kuview_common::UtilizationTable;
use tabled::builder::Builder;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Table,
        }
    }
}

/// Print a utilization table in the specified format
pub fn print_utilization(table: &UtilizationTable, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(table),
        OutputFormat::Json => print_json(table)?,
        OutputFormat::Yaml => print_yaml(table)?,
    }
    Ok(())
}

/// Print as a terminal table; columns are dynamic so the builder API is used
fn print_table(table: &UtilizationTable) {
    if table.body.is_empty() {
        println!("{}", "No results found".yellow());
        return;
    }

    let mut builder = Builder::default();

    let mut header = Vec::with_capacity(table.header.columns.len() + 1);
    header.push(table.header.name.clone());
    header.extend(table.header.columns.iter().cloned());
    builder.push_record(header);

    for row in &table.body {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.name.clone());
        record.extend(row.values.iter().cloned());
        builder.push_record(record);
    }

    println!("{}", builder.build());
}

/// Print data as pretty-printed JSON
fn print_json<T: serde::Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print data as YAML
fn print_yaml<T: serde::Serialize>(data: &T) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    println!("{}", yaml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("YAML"), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_str("yml"), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_str("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("anything"), OutputFormat::Table);
    }
}
