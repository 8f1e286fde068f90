//! CLI entry point for the `mgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use multigraph::cli::commands;
use multigraph::graph::{TraversalDirection, TraversalOrder};
use multigraph::types::{Edge, DEFAULT_MIN_CUT_SEED, DEFAULT_MIN_CUT_TRIALS};
use multigraph::MinCutParams;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Multigraph CLI: run graph algorithms on a graph given on the command line"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Treat edges as one-way
    #[arg(long, global = true)]
    directed: bool,

    /// Declare a vertex (repeatable)
    #[arg(long = "vertex", global = true, value_name = "LABEL")]
    vertices: Vec<String>,

    /// Add an edge FROM,TO[,COST] (repeatable)
    #[arg(
        long = "edge",
        global = true,
        value_name = "FROM,TO[,COST]",
        value_parser = commands::parse_edge
    )]
    edges: Vec<Edge<String>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Bfs,
    Dfs,
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Forward,
    Backward,
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph, its counts and properties
    Info,
    /// Traverse from a starting vertex
    Traverse {
        /// Starting vertex
        #[arg(long)]
        start: String,
        /// Visit order
        #[arg(long, value_enum, default_value = "bfs")]
        order: Order,
        /// Which edges to follow
        #[arg(long, value_enum, default_value = "forward")]
        direction: Direction,
    },
    /// Hop distance to every reachable vertex
    Hops {
        /// Starting vertex
        #[arg(long)]
        from: String,
    },
    /// Single-source shortest paths
    Path {
        /// Source vertex
        #[arg(long)]
        from: String,
    },
    /// All-pairs shortest distances
    AllPairs,
    /// Topological order of a directed acyclic graph
    Topo,
    /// Connected (or strongly connected) components
    Components,
    /// Minimum spanning tree or forest
    Mst,
    /// Randomized minimum cut
    Mincut {
        /// Number of contraction trials
        #[arg(long, default_value_t = DEFAULT_MIN_CUT_TRIALS)]
        trials: usize,
        /// Random seed
        #[arg(long, default_value_t = DEFAULT_MIN_CUT_SEED)]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let graph = match commands::build_graph(cli.directed, cli.vertices, cli.edges) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::Traverse {
            start,
            order,
            direction,
        } => {
            let order = match order {
                Order::Bfs => TraversalOrder::BreadthFirst,
                Order::Dfs => TraversalOrder::DepthFirst,
            };
            let direction = match direction {
                Direction::Forward => TraversalDirection::Forward,
                Direction::Backward => TraversalDirection::Backward,
                Direction::Both => TraversalDirection::Both,
            };
            commands::cmd_traverse(&graph, &start, order, direction, json)
        }
        Commands::Hops { from } => commands::cmd_hops(&graph, &from, json),
        Commands::Path { from } => commands::cmd_path(&graph, &from, json),
        Commands::AllPairs => commands::cmd_all_pairs(&graph, json),
        Commands::Topo => commands::cmd_topo(&graph, json),
        Commands::Components => commands::cmd_components(&graph, json),
        Commands::Mst => commands::cmd_mst(&graph, json),
        Commands::Mincut { trials, seed } => {
            commands::cmd_mincut(&graph, &MinCutParams { trials, seed }, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
