use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use neoplus::{
    graphs::{graph_factory::FileType, weighted_view::WeightedView, NodeId},
    logging::init_tracing,
    reading_graph,
    search::{
        config::{FrontierKind, SearchConfig},
        dijkstra::ShortestPathEngine,
    },
};

/// Computes the weighted shortest path length between two nodes, following
/// relationships in either direction.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,

    /// Format of the graph file
    #[arg(short = 't', long, value_enum, default_value = "json")]
    file_type: FileType,

    /// Start node id
    #[arg(short, long)]
    start: NodeId,

    /// End node id
    #[arg(short, long)]
    end: NodeId,

    /// Relationship property holding the weight
    #[arg(short, long, default_value = "weight")]
    weight_property: String,

    /// Search configuration in JSON format
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the frontier of the configuration
    #[arg(short, long, value_enum)]
    frontier: Option<FrontierKind>,

    /// Print the nodes along the path as well
    #[arg(long)]
    path: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = init_tracing(args.verbose, args.log_level.as_deref(), args.log_json) {
        eprintln!("unable to initialize logging: {}", error);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> neoplus::error::Result<()> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(frontier) = args.frontier {
        config = config.with_frontier(frontier);
    }

    let graph = reading_graph(&args.graph, args.file_type)?;
    let view = WeightedView::new(&graph, &args.weight_property);
    let engine = ShortestPathEngine::with_config(&view, config);

    if args.path {
        match engine.path(args.start, args.end)? {
            Some(path) => {
                println!("{}", path.distance);
                println!("{}", itertools::join(&path.nodes, " -> "));
            }
            None => println!("unreachable"),
        }
    } else {
        match engine.distance(args.start, args.end)? {
            Some(distance) => println!("{}", distance),
            None => println!("unreachable"),
        }
    }

    Ok(())
}
