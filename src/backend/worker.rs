//! Background worker thread owning the persistence backend.

use crate::backend::{StoreCmd, StoreErrorSource, StoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use snipvault_core::{AppError, Config, SnippetBackend};
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the store worker.
pub struct StoreHandle {
    pub cmd_tx: Sender<StoreCmd>,
    pub evt_rx: Receiver<StoreEvent>,
}

impl StoreHandle {
    /// Wire a handle directly to raw channel ends.
    ///
    /// Used by tests that assert on outbound commands and inject events
    /// without a live worker thread.
    pub fn from_test_channels(cmd_tx: Sender<StoreCmd>, evt_rx: Receiver<StoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn send_error(evt_tx: &Sender<StoreEvent>, source: StoreErrorSource, message: String) {
    let _ = evt_tx.send(StoreEvent::Error { source, message });
}

/// Spawn the store worker thread that performs blocking backend access.
///
/// All store I/O stays off the session's thread of control; the worker
/// replies with [`StoreEvent`] values drained on each session tick.
///
/// # Returns
/// A [`StoreHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_store_worker<B: SnippetBackend>(mut backend: B, config: &Config) -> StoreHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let max_snippet_size = config.max_snippet_size;

    thread::Builder::new()
        .name("snipvault-store".to_string())
        .spawn(move || {
            let mut active_folder: Option<String> = None;
            for cmd in cmd_rx.iter() {
                match cmd {
                    StoreCmd::SetFolder { folder } => {
                        active_folder = folder;
                        if active_folder.is_none() {
                            let _ = evt_tx.send(StoreEvent::FolderCleared);
                        }
                    }
                    StoreCmd::LoadFolder { folder } => match backend.load_folder(&folder) {
                        Ok(items) => {
                            let _ = evt_tx.send(StoreEvent::FolderIndex { folder, items });
                        }
                        Err(err) => {
                            error!("store load failed for folder '{}': {}", folder, err);
                            send_error(
                                &evt_tx,
                                StoreErrorSource::Load,
                                format!("Load failed: {}", err),
                            );
                        }
                    },
                    StoreCmd::CreateSnippet { new, content } => {
                        let Some(folder) = active_folder.as_deref() else {
                            send_error(
                                &evt_tx,
                                StoreErrorSource::Other,
                                "Create failed: no active folder".to_string(),
                            );
                            continue;
                        };
                        if content.len() > max_snippet_size {
                            send_error(
                                &evt_tx,
                                StoreErrorSource::Other,
                                format!("Create failed: content exceeds {} bytes", max_snippet_size),
                            );
                            continue;
                        }
                        match backend.create_snippet(folder, new, &content) {
                            Ok(snippet) => {
                                let _ = evt_tx.send(StoreEvent::SnippetCreated { snippet });
                            }
                            Err(err) => {
                                error!("store create failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    StoreErrorSource::Other,
                                    format!("Create failed: {}", err),
                                );
                            }
                        }
                    }
                    StoreCmd::UpdateContent { id, content } => {
                        if content.len() > max_snippet_size {
                            send_error(
                                &evt_tx,
                                StoreErrorSource::SaveContent,
                                format!("Save failed: content exceeds {} bytes", max_snippet_size),
                            );
                            continue;
                        }
                        match backend.update_content(&id, &content) {
                            Ok(snippet) => {
                                let _ = evt_tx.send(StoreEvent::ContentSaved { snippet, content });
                            }
                            Err(AppError::NotFound) => {
                                let _ = evt_tx.send(StoreEvent::SnippetMissing { id });
                            }
                            Err(err) => {
                                error!("store content save failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    StoreErrorSource::SaveContent,
                                    format!("Save failed: {}", err),
                                );
                            }
                        }
                    }
                    StoreCmd::UpdateField { id, field, value } => {
                        match backend.update_field(&id, field, &value) {
                            Ok(snippet) => {
                                let _ = evt_tx.send(StoreEvent::FieldSaved { snippet, field });
                            }
                            Err(AppError::NotFound) => {
                                let _ = evt_tx.send(StoreEvent::SnippetMissing { id });
                            }
                            Err(err) => {
                                error!("store {} save failed: {}", field.as_str(), err);
                                send_error(
                                    &evt_tx,
                                    StoreErrorSource::SaveField,
                                    format!("Save failed: {}", err),
                                );
                            }
                        }
                    }
                    StoreCmd::MoveToTrash { ids, restoring } => {
                        match backend.move_to_trash(&ids, restoring) {
                            Ok(snippets) => {
                                let _ = evt_tx.send(StoreEvent::TrashToggled {
                                    snippets,
                                    restoring,
                                });
                            }
                            Err(err) => {
                                error!("store trash transition failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    StoreErrorSource::Lifecycle,
                                    format!("Trash transition failed: {}", err),
                                );
                            }
                        }
                    }
                    StoreCmd::DeleteForever { id } => match backend.delete_forever(&id) {
                        Ok(()) => {
                            let _ = evt_tx.send(StoreEvent::SnippetPurged { id });
                        }
                        Err(AppError::NotFound) => {
                            let _ = evt_tx.send(StoreEvent::SnippetMissing { id });
                        }
                        Err(err) => {
                            error!("store purge failed: {}", err);
                            send_error(
                                &evt_tx,
                                StoreErrorSource::Lifecycle,
                                format!("Delete failed: {}", err),
                            );
                        }
                    },
                    StoreCmd::EmptyTrash => {
                        let Some(folder) = active_folder.as_deref() else {
                            send_error(
                                &evt_tx,
                                StoreErrorSource::Lifecycle,
                                "Empty trash failed: no active folder".to_string(),
                            );
                            continue;
                        };
                        match backend.empty_trash(folder) {
                            Ok(ids) => {
                                let _ = evt_tx.send(StoreEvent::TrashEmptied { ids });
                            }
                            Err(err) => {
                                error!("store empty trash failed: {}", err);
                                send_error(
                                    &evt_tx,
                                    StoreErrorSource::Lifecycle,
                                    format!("Empty trash failed: {}", err),
                                );
                            }
                        }
                    }
                    StoreCmd::ReadContent { id } => match backend.read_content(&id) {
                        Ok(content) => {
                            let _ = evt_tx.send(StoreEvent::ContentLoaded { id, content });
                        }
                        Err(AppError::NotFound) => {
                            let _ = evt_tx.send(StoreEvent::SnippetMissing { id });
                        }
                        Err(err) => {
                            error!("store content read failed: {}", err);
                            send_error(
                                &evt_tx,
                                StoreErrorSource::Load,
                                format!("Read failed: {}", err),
                            );
                        }
                    },
                }
            }
        })
        .expect("spawn store worker thread");

    StoreHandle { cmd_tx, evt_rx }
}
