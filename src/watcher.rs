//! File system watcher for watch mode

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Directories whose contents are never transcripts
const SKIPPED_DIRS: &[&str] = &[".git", "target", "node_modules"];

/// Watches a file or directory for transcript changes
pub struct TranscriptWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    suffixes: Vec<String>,
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

impl TranscriptWatcher {
    /// Start watching the given path (file or directory) for files ending in one of `suffixes`
    pub fn watch(path: &Path, suffixes: &[&str]) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;

        if path.is_dir() {
            watcher.watch(path, RecursiveMode::Recursive)?;
        } else if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
        } else {
            watcher.watch(Path::new("."), RecursiveMode::NonRecursive)?;
        }
        tracing::debug!(path = %path.display(), "watching for transcript changes");

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Check if the path looks like a transcript we care about
    pub fn is_transcript_file(p: &Path, suffixes: &[&str]) -> bool {
        let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if p
            .components()
            .any(|c| SKIPPED_DIRS.iter().any(|d| c.as_os_str() == *d))
        {
            return false;
        }
        suffixes.iter().any(|suffix| name.ends_with(suffix))
    }

    /// Collect transcript paths from an event
    fn paths_from_event(event: &notify::Event, suffixes: &[&str]) -> Vec<PathBuf> {
        if !is_create_or_modify(&event.kind) {
            return vec![];
        }
        event
            .paths
            .iter()
            .filter(|p| Self::is_transcript_file(p, suffixes))
            .cloned()
            .collect()
    }

    /// Wait for the next batch of changes (debounced). Blocks until at least one change, then drains for DEBOUNCE_MS.
    pub fn next_changes(&self) -> Vec<PathBuf> {
        let suffixes: Vec<&str> = self.suffixes.iter().map(String::as_str).collect();
        let mut all = HashSet::new();

        match self.receiver.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) => all.extend(Self::paths_from_event(&event, &suffixes)),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "watch error");
                return vec![];
            }
            Err(_) => return vec![],
        }

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while let Ok(ev) = self.receiver.try_recv() {
            if let Ok(event) = ev {
                all.extend(Self::paths_from_event(&event, &suffixes));
            }
        }

        let mut changed: Vec<PathBuf> = all.into_iter().collect();
        changed.sort();
        changed
    }
}
