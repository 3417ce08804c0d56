use std::{fs::File, io::BufReader, path::Path, time::Duration};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the search picks the next node to finalize.
#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Scan all open nodes for the minimum on every step.
    LinearScan,
    /// Binary heap keyed by distance.
    #[default]
    BinaryHeap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub frontier: FrontierKind,
    /// Abort a query once it has run this long.
    pub timeout_ms: Option<u64>,
}

impl SearchConfig {
    pub fn from_file(path: &Path) -> Result<SearchConfig> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Sets the timeout, rounded up to whole milliseconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{FrontierKind, SearchConfig};

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.frontier, FrontierKind::BinaryHeap);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn parses_frontier_and_timeout() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"frontier": "linear_scan", "timeout_ms": 250}"#).unwrap();
        assert_eq!(config.frontier, FrontierKind::LinearScan);
        assert_eq!(config.timeout(), Some(std::time::Duration::from_millis(250)));
    }

    #[test]
    fn timeout_rounds_up_to_whole_milliseconds() {
        let config = SearchConfig::default().with_timeout(Duration::from_micros(900));
        assert_eq!(config.timeout(), Some(Duration::from_millis(1)));

        let config = SearchConfig::default().with_timeout(Duration::from_micros(1500));
        assert_eq!(config.timeout(), Some(Duration::from_millis(2)));

        let config = SearchConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(config.timeout(), Some(Duration::ZERO));
    }

    #[test]
    fn huge_timeout_saturates() {
        let config = SearchConfig::default().with_timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, Some(u64::MAX));
    }
}
