use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use neoplus::graphs::{
    graph_functions::{random_graph, random_requests},
    in_memory_graph::InMemoryGraph,
};
use rand::{rngs::StdRng, SeedableRng};

/// Generates a random graph snapshot and, optionally, random requests on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path where the graph will be saved
    #[arg(short, long)]
    graph: PathBuf,

    /// Path where the requests will be saved
    #[arg(short, long)]
    requests: Option<PathBuf>,

    #[arg(short, long, default_value = "1000")]
    nodes: u64,

    #[arg(short = 'e', long, default_value = "5000")]
    relationships: usize,

    #[arg(short = 'q', long, default_value = "100")]
    number_of_requests: usize,

    #[arg(long, default_value = "100.0")]
    max_weight: f64,

    /// Share of relationships without a weight property
    #[arg(long, default_value = "0.1")]
    missing_weight_ratio: f64,

    #[arg(short, long, default_value = "weight")]
    weight_property: String,

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
    let mut rng = StdRng::seed_from_u64(args.seed);

    let snapshot = random_graph(
        &mut rng,
        args.nodes,
        args.relationships,
        args.max_weight,
        args.missing_weight_ratio,
        &args.weight_property,
    )?;

    let mut writer = BufWriter::new(File::create(&args.graph)?);
    serde_json::to_writer(&mut writer, &snapshot)?;
    writer.flush()?;

    if let Some(path) = &args.requests {
        let graph = InMemoryGraph::from_snapshot(snapshot)?;
        let requests = random_requests(&mut rng, &graph, args.number_of_requests);
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &requests)?;
        writer.flush()?;
    }

    Ok(())
}
