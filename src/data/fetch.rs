//! Background Fetch Module
//! Reads the score file on a worker thread so the caller never blocks on I/O.

use crate::data::loader::{fetch_scores, LoaderError, ScoreTable};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

pub type FetchResult = Result<ScoreTable, LoaderError>;

/// A fetch in flight. Resolves exactly once.
pub struct PendingFetch {
    rx: Receiver<FetchResult>,
    path: PathBuf,
}

/// Start reading the score file in a background thread.
pub fn spawn_fetch(path: impl Into<PathBuf>) -> PendingFetch {
    let path = path.into();
    let (tx, rx) = channel();
    let worker_path = path.clone();

    tracing::debug!(path = %path.display(), "fetch started");
    thread::spawn(move || {
        let _ = tx.send(fetch_scores(&worker_path));
    });

    PendingFetch { rx, path }
}

impl PendingFetch {
    /// Path being fetched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking poll. `None` while the worker is still reading.
    pub fn try_take(&self) -> Option<FetchResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoaderError::Disconnected)),
        }
    }

    /// Block until the worker finishes.
    pub fn wait(self) -> FetchResult {
        self.rx.recv().unwrap_or(Err(LoaderError::Disconnected))
    }
}
