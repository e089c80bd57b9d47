use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use super::catalog::reference_catalog;
use super::loader::load_file;
use super::model::VehicleRecord;

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where listings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Bundled reference listings; stands in for the listings API.
    Reference,
    /// A JSON export in the API's schema.
    File(PathBuf),
}

impl DataSource {
    fn fetch(&self) -> Result<Vec<VehicleRecord>> {
        match self {
            DataSource::Reference => reference_catalog(),
            DataSource::File(path) => load_file(path),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Reference => write!(f, "reference catalog"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Load outcome
// ---------------------------------------------------------------------------

/// Result of one load. Failures arrive as an empty record list plus a message,
/// never as an error the filter code has to handle.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub source: DataSource,
    pub records: Vec<VehicleRecord>,
    pub error: Option<String>,
}

/// Fetch from `source` on the calling thread, degrading failures to empty.
pub fn load_now(source: DataSource) -> LoadOutcome {
    match source.fetch() {
        Ok(records) => {
            log::info!("Loaded {} cars from {source}", records.len());
            LoadOutcome {
                source,
                records,
                error: None,
            }
        }
        Err(e) => {
            log::error!("Failed to load cars from {source}: {e:#}");
            LoadOutcome {
                source,
                records: Vec::new(),
                error: Some(format!("Error: {e:#}")),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deferred load
// ---------------------------------------------------------------------------

/// A load running on a background thread after an artificial delay.
///
/// Dropping the handle discards the result when it arrives.
pub struct PendingLoad {
    receiver: Receiver<LoadOutcome>,
    source: DataSource,
}

/// Start loading `source` after `latency`, mimicking a network round trip.
pub fn load(source: DataSource, latency: Duration) -> PendingLoad {
    let (sender, receiver) = channel();
    let worker_source = source.clone();

    thread::spawn(move || {
        if !latency.is_zero() {
            thread::sleep(latency);
        }
        let _ = sender.send(load_now(worker_source));
    });

    PendingLoad { receiver, source }
}

impl PendingLoad {
    /// Non-blocking check, meant to be called once per frame.
    pub fn poll(&self) -> Option<LoadOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.thread_died()),
        }
    }

    /// Block until the load finishes.
    #[cfg(test)]
    pub fn wait(self) -> LoadOutcome {
        self.receiver.recv().unwrap_or_else(|_| self.thread_died())
    }

    fn thread_died(&self) -> LoadOutcome {
        log::error!("Loader thread for {} exited without a result", self.source);
        LoadOutcome {
            source: self.source.clone(),
            records: Vec::new(),
            error: Some("Error: loader thread exited".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reference_source_always_succeeds() {
        let outcome = load_now(DataSource::Reference);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.records.len(), 16);
    }

    #[test]
    fn failed_file_degrades_to_empty() {
        let outcome = load_now(DataSource::File(PathBuf::from("/nonexistent/cars.json")));
        assert!(outcome.records.is_empty());
        assert!(outcome.error.unwrap().starts_with("Error:"));
    }

    #[test]
    fn malformed_file_degrades_to_empty() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"[{\"basic\": 42}]").unwrap();
        let outcome = load_now(DataSource::File(file.path().to_path_buf()));
        assert!(outcome.records.is_empty());
        assert!(outcome.error.unwrap().contains("Row 0"));
    }

    #[test]
    fn deferred_load_delivers_through_channel() {
        let pending = load(DataSource::Reference, Duration::ZERO);
        let outcome = pending.wait();
        assert_eq!(outcome.source, DataSource::Reference);
        assert_eq!(outcome.records.len(), 16);
    }

    #[test]
    fn poll_is_empty_until_latency_elapses() {
        let pending = load(DataSource::Reference, Duration::from_secs(60));
        assert!(pending.poll().is_none());
    }

    #[test]
    fn dead_worker_reports_its_own_source() {
        let path = PathBuf::from("cars.json");
        let (sender, receiver) = channel::<LoadOutcome>();
        drop(sender);
        let pending = PendingLoad {
            receiver,
            source: DataSource::File(path.clone()),
        };

        let outcome = pending.poll().unwrap();
        assert_eq!(outcome.source, DataSource::File(path.clone()));
        assert!(outcome.records.is_empty());
        assert!(outcome.error.unwrap().contains("loader thread exited"));

        assert_eq!(pending.wait().source, DataSource::File(path));
    }

    #[test]
    fn source_display() {
        assert_eq!(DataSource::Reference.to_string(), "reference catalog");
        assert_eq!(
            DataSource::File(PathBuf::from("cars.json")).to_string(),
            "cars.json"
        );
    }
}
