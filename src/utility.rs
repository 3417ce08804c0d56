use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

use crate::search::{path::ShortestPathRequest, PathFinding};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {human_pos}/{human_len} {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Average duration of a query over `requests`, run sequentially. Failed
/// queries are timed like successful ones.
pub fn benchmark(pathfinder: &dyn PathFinding, requests: &[ShortestPathRequest]) -> Duration {
    if requests.is_empty() {
        return Duration::ZERO;
    }

    let start = Instant::now();
    for request in requests
        .iter()
        .progress_with(get_progressbar("benchmarking", requests.len() as u64))
    {
        let _ = pathfinder.shortest_path_distance(request.start, request.end);
    }
    start.elapsed() / requests.len() as u32
}
