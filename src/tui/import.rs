// File: ./src/tui/import.rs
// Reads and parses an ICS file off the UI loop.
use crate::model::adapter::courses_from_ics;
use crate::tui::action::AppEvent;
use std::path::PathBuf;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Spawns the import. Exactly one event is sent when it finishes:
/// `Imported` once the file was read (possibly with no courses), `Error`
/// if it could not be read.
pub fn spawn_import(path: PathBuf, tx: Sender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        log::info!("Importing {:?}", path);
        let event = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let courses = courses_from_ics(&raw);
                AppEvent::Imported { path, courses }
            }
            Err(e) => AppEvent::Error(format!("Failed to read {}: {}", path.display(), e)),
        };
        let _ = tx.send(event).await;
    })
}
