///! Kuview CLI
///!
///! Command-line viewer for Kubernetes cluster resource utilization

mod commands;
mod config;
mod kubectl;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Kubeconfig context to query
    #[arg(long)]
    context: Option<String>,

    /// Node label selector
    #[arg(short = 'l', long, alias = "label")]
    selector: Option<String>,

    /// Namespace to inspect (all namespaces when omitted)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cluster-wide resource utilization
    Cluster,
    /// Show per-node resource utilization
    Nodes,
    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load config for defaults; flags win
    let config = config::Config::load().unwrap_or_default();

    let opts = kubectl::FetchOptions {
        context: cli.context.or(config.default_context),
        selector: cli.selector.or(config.default_selector),
        namespace: cli.namespace,
    };
    let output_format = cli.output.unwrap_or(config.default_output);

    match cli.command {
        Commands::Cluster => {
            commands::cluster::handle_cluster_command(&opts, &output_format).await?
        }
        Commands::Nodes => {
            commands::nodes::handle_nodes_command(&opts, &output_format).await?
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Generate shell completions
fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut io::stdout());
}
