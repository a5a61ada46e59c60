//! CLI entry point for the `iadj` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use int_adjacency::cli::{commands, OutputFormat};
use int_adjacency::{GraphError, VertexId};

#[derive(Parser)]
#[command(
    name = "iadj",
    about = "iadj — inspect integer adjacency graphs built from edge lists"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Vertex count (default: largest id in the file + 1)
    #[arg(long, global = true)]
    vertices: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display size and degree statistics
    Info {
        /// Path to the edge list
        file: PathBuf,
    },
    /// Look up the edge between two vertices
    Edge {
        /// Path to the edge list
        file: PathBuf,
        /// First vertex
        i: VertexId,
        /// Second vertex
        j: VertexId,
    },
    /// Label connected components
    Components {
        /// Path to the edge list
        file: PathBuf,
        /// List the members of every component
        #[arg(long)]
        list: bool,
    },
    /// Print the subgraph induced by a vertex subset
    Induce {
        /// Path to the edge list
        file: PathBuf,
        /// Comma-separated vertices to keep, in new-id order
        #[arg(long = "keep", value_delimiter = ',', required = true)]
        keep: Vec<VertexId>,
    },
    /// Test whether two vertex sets are within a hop distance
    Connected {
        /// Path to the edge list
        file: PathBuf,
        /// Comma-separated first vertex set
        #[arg(long, value_delimiter = ',', required = true)]
        a: Vec<VertexId>,
        /// Comma-separated second vertex set
        #[arg(long, value_delimiter = ',', required = true)]
        b: Vec<VertexId>,
        /// Maximum number of hops
        #[arg(long, default_value = "1")]
        max_distance: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let vertices = cli.vertices;
    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, vertices, json),
        Commands::Edge { file, i, j } => commands::cmd_edge(&file, vertices, i, j, json),
        Commands::Components { file, list } => {
            commands::cmd_components(&file, vertices, list, json)
        }
        Commands::Induce { file, keep } => commands::cmd_induce(&file, vertices, &keep, json),
        Commands::Connected {
            file,
            a,
            b,
            max_distance,
        } => commands::cmd_connected(&file, vertices, a, b, max_distance, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexOutOfRange { .. }
            | GraphError::TooManyVertices { .. }
            | GraphError::DuplicateVertex(_)
            | GraphError::UnsortedVertexSet => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
