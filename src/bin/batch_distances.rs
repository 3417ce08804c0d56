use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use neoplus::{
    graphs::{graph_factory::FileType, weighted_view::WeightedView},
    logging::init_tracing,
    reading_graph,
    search::{batch::distances_parallel, config::SearchConfig, path::ShortestPathRequest},
};
use tracing::info;

/// Answers a JSON list of `{"start": .., "end": ..}` requests in parallel and
/// writes the answers as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,

    /// Format of the graph file
    #[arg(short = 't', long, value_enum, default_value = "json")]
    file_type: FileType,

    /// Relationship property holding the weight
    #[arg(short, long, default_value = "weight")]
    weight_property: String,

    /// Requests in JSON format
    #[arg(short, long)]
    requests: PathBuf,

    /// Path where the answers will be saved
    #[arg(short, long)]
    answers: PathBuf,

    /// Search configuration in JSON format
    #[arg(short, long)]
    config: Option<PathBuf>,

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
    let config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };

    let graph = reading_graph(&args.graph, args.file_type)?;
    let view = WeightedView::new(&graph, &args.weight_property);

    let reader = BufReader::new(File::open(&args.requests)?);
    let requests: Vec<ShortestPathRequest> = serde_json::from_reader(reader)?;

    let answers = distances_parallel(&view, &requests, &config, true);
    let unreachable = answers
        .iter()
        .filter(|answer| answer.distance.is_none() && answer.error.is_none())
        .count();
    let failed = answers.iter().filter(|answer| answer.error.is_some()).count();
    info!(requests = answers.len(), unreachable, failed, "batch finished");

    let writer = BufWriter::new(File::create(&args.answers)?);
    serde_json::to_writer(writer, &answers)?;

    Ok(())
}
