//! Session behavior tests exercising command emission, event application,
//! and the effect graph.

use super::*;
use crate::backend::{StoreCmd, StoreEvent, StoreHandle};
use crate::nav::NavParams;
use chrono::{Duration as ChronoDuration, Utc};
use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use snipvault_core::models::snippet::Snippet;
use snipvault_core::Config;
use std::time::{Duration, Instant};

struct TestHarness {
    session: SnippetSession,
    cmd_rx: Receiver<StoreCmd>,
}

fn test_snippet(id: &str, name: &str, created_offset_secs: i64) -> Snippet {
    let mut snippet = Snippet::new(name.to_string(), None);
    snippet.id = id.to_string();
    snippet.created_at = Utc::now() + ChronoDuration::seconds(created_offset_secs);
    snippet.updated_at = snippet.created_at;
    snippet
}

fn trashed_snippet(
    id: &str,
    name: &str,
    created_offset_secs: i64,
    deleted_offset_secs: i64,
) -> Snippet {
    let mut snippet = test_snippet(id, name, created_offset_secs);
    snippet.deleted_at = Some(Utc::now() + ChronoDuration::seconds(deleted_offset_secs));
    snippet
}

fn make_session() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (_evt_tx, evt_rx) = unbounded();
    let store = StoreHandle::from_test_channels(cmd_tx, evt_rx);
    let session = SnippetSession::new(store, &Config::default());
    TestHarness { session, cmd_rx }
}

/// Session with folder "notes" applied and snippets Alpha/Beta seeded
/// (Alpha newest, both active, nothing open).
fn make_seeded_session() -> TestHarness {
    let mut harness = make_session();
    harness.session.apply_nav(NavParams {
        folder: Some("notes".to_string()),
        snippet: None,
    });
    drain(&harness.cmd_rx);
    harness.session.apply_event(StoreEvent::FolderIndex {
        folder: "notes".to_string(),
        items: vec![
            test_snippet("alpha", "Alpha", 10),
            test_snippet("beta", "Beta", 0),
        ],
    });
    harness
}

/// Open a snippet and settle its content buffer, draining the fetch command.
fn open_with_content(harness: &mut TestHarness, id: &str, content: &str) {
    harness.session.open_snippet(id.to_string());
    drain(&harness.cmd_rx);
    harness.session.apply_event(StoreEvent::ContentLoaded {
        id: id.to_string(),
        content: content.to_string(),
    });
    let _ = harness.session.take_nav_request();
}

fn recv_cmd(rx: &Receiver<StoreCmd>) -> StoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

fn drain(rx: &Receiver<StoreCmd>) {
    while rx.try_recv().is_ok() {}
}

fn assert_no_cmd(rx: &Receiver<StoreCmd>) {
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

/// Rewind an armed debounce slot so its window reads as elapsed.
fn expire_content_window(session: &mut SnippetSession) {
    let window = session.write_debounce;
    let write = session.content_write.as_mut().expect("armed content write");
    write.armed_at = Instant::now() - window - Duration::from_millis(5);
}

fn expire_name_window(session: &mut SnippetSession) {
    let window = session.write_debounce;
    let write = session.name_write.as_mut().expect("armed name write");
    write.armed_at = Instant::now() - window - Duration::from_millis(5);
}

mod lifecycle;
mod selection_and_filter;
