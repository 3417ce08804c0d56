use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use neoplus::{
    graphs::{graph_factory::FileType, graph_functions::random_requests, weighted_view::WeightedView},
    reading_graph,
    search::{
        config::{FrontierKind, SearchConfig},
        dijkstra::ShortestPathEngine,
    },
    utility::benchmark,
};
use rand::{rngs::StdRng, SeedableRng};

/// Compares the average query time of the frontier implementations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,

    /// Format of the graph file
    #[arg(short = 't', long, value_enum, default_value = "json")]
    file_type: FileType,

    #[arg(short, long, default_value = "weight")]
    weight_property: String,

    /// Number of random queries
    #[arg(short, long, default_value = "100")]
    number_of_requests: usize,

    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> neoplus::error::Result<()> {
    let graph = reading_graph(&args.graph, args.file_type)?;
    let view = WeightedView::new(&graph, &args.weight_property);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let requests = random_requests(&mut rng, &graph, args.number_of_requests);

    println!("Value over {} sequential searches", requests.len());
    for frontier in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
        let engine =
            ShortestPathEngine::with_config(&view, SearchConfig::default().with_frontier(frontier));
        let average = benchmark(&engine, &requests);
        println!("Average {:?} duration is {:?}", frontier, average);
    }

    Ok(())
}
