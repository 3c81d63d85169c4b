//! Trash/restore/purge/empty-trash flows and confirmation gating.

use super::*;

#[test]
fn toggle_trash_asks_then_dispatches_on_accept() {
    let mut harness = make_seeded_session();
    harness.session.toggle_trash("alpha");

    let prompt = harness.session.pending_confirmation().expect("prompt");
    assert!(prompt.contains("Move \"Alpha\" to the trash?"), "{}", prompt);
    assert_no_cmd(&harness.cmd_rx);

    harness.session.confirm_pending(true);
    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::MoveToTrash { ids, restoring } => {
            assert_eq!(ids, vec!["alpha".to_string()]);
            assert!(!restoring);
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(harness.session.pending_confirmation().is_none());
}

#[test]
fn declining_a_confirmation_changes_nothing() {
    let mut harness = make_seeded_session();
    harness.session.toggle_trash("alpha");

    harness.session.confirm_pending(false);

    assert!(harness.session.pending_confirmation().is_none());
    assert_no_cmd(&harness.cmd_rx);
    assert!(!harness.session.snippets()[0].is_trashed());
}

#[test]
fn toggle_trash_on_trashed_snippet_offers_restore() {
    let mut harness = make_seeded_session();
    harness.session.apply_event(StoreEvent::FolderIndex {
        folder: "notes".to_string(),
        items: vec![trashed_snippet("gamma", "Gamma", 0, 5)],
    });

    harness.session.toggle_trash("gamma");
    let prompt = harness.session.pending_confirmation().expect("prompt");
    assert!(prompt.contains("Restore \"Gamma\""), "{}", prompt);

    harness.session.confirm_pending(true);
    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::MoveToTrash { ids, restoring } => {
            assert_eq!(ids, vec!["gamma".to_string()]);
            assert!(restoring);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn stale_reference_aborts_silently() {
    let mut harness = make_seeded_session();
    harness.session.toggle_trash("ghost");
    harness.session.purge("ghost");

    assert!(harness.session.pending_confirmation().is_none());
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn repeated_request_for_same_entity_is_ignored_while_pending() {
    let mut harness = make_seeded_session();
    harness.session.toggle_trash("alpha");
    let first = harness.session.pending_confirmation().expect("prompt");

    harness.session.toggle_trash("alpha");
    assert_eq!(harness.session.pending_confirmation().as_deref(), Some(first.as_str()));

    // A request for a different entity replaces the pending prompt instead
    // of blocking.
    harness.session.toggle_trash("beta");
    let replaced = harness.session.pending_confirmation().expect("prompt");
    assert!(replaced.contains("Beta"), "{}", replaced);
}

#[test]
fn bulk_toggle_acts_on_effective_selection_and_clears_it() {
    let mut harness = make_seeded_session();
    open_with_content(&mut harness, "alpha", "body");
    harness.session.toggle_selected("beta");

    harness.session.bulk_toggle_trash();
    let prompt = harness.session.pending_confirmation().expect("prompt");
    assert!(prompt.contains("Move 2 snippets"), "{}", prompt);

    harness.session.confirm_pending(true);
    let sent_ids = match recv_cmd(&harness.cmd_rx) {
        StoreCmd::MoveToTrash { ids, restoring } => {
            assert!(!restoring);
            ids
        }
        other => panic!("unexpected command: {:?}", other),
    };
    assert_eq!(sent_ids.len(), 2);
    assert!(sent_ids.contains(&"alpha".to_string()));
    assert!(sent_ids.contains(&"beta".to_string()));

    let trashed: Vec<Snippet> = harness
        .session
        .snippets()
        .iter()
        .cloned()
        .map(|mut snippet| {
            snippet.deleted_at = Some(Utc::now());
            snippet
        })
        .collect();
    harness.session.apply_event(StoreEvent::TrashToggled {
        snippets: trashed,
        restoring: false,
    });

    assert!(harness.session.selected_ids().is_empty());
    assert!(harness.session.snippets().iter().all(Snippet::is_trashed));
}

#[test]
fn bulk_toggle_in_trash_view_restores() {
    let mut harness = make_seeded_session();
    harness.session.apply_event(StoreEvent::FolderIndex {
        folder: "notes".to_string(),
        items: vec![
            trashed_snippet("gamma", "Gamma", 0, 5),
            trashed_snippet("delta", "Delta", 1, 6),
        ],
    });
    harness.session.set_search_mode(SearchMode::ViewingTrash);
    harness.session.toggle_selected("gamma");
    harness.session.toggle_selected("delta");

    harness.session.bulk_toggle_trash();
    harness.session.confirm_pending(true);

    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::MoveToTrash { ids, restoring } => {
            assert_eq!(ids.len(), 2);
            assert!(restoring, "trash view implies restore direction");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn bulk_toggle_with_empty_effective_selection_is_a_noop() {
    let mut harness = make_seeded_session();
    harness.session.bulk_toggle_trash();

    assert!(harness.session.pending_confirmation().is_none());
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn purge_requires_trash_state() {
    let mut harness = make_seeded_session();
    harness.session.purge("alpha");
    assert!(harness.session.pending_confirmation().is_none());

    for snippet in harness.session.snippets.iter_mut() {
        if snippet.id == "alpha" {
            snippet.deleted_at = Some(Utc::now());
        }
    }
    harness.session.purge("alpha");
    let prompt = harness.session.pending_confirmation().expect("prompt");
    assert!(prompt.contains("Permanently delete \"Alpha\""), "{}", prompt);

    harness.session.confirm_pending(true);
    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::DeleteForever { id } => assert_eq!(id, "alpha"),
        other => panic!("unexpected command: {:?}", other),
    }

    harness.session.apply_event(StoreEvent::SnippetPurged {
        id: "alpha".to_string(),
    });
    assert!(harness.session.snippets().iter().all(|s| s.id != "alpha"));
}

#[test]
fn purging_the_open_snippet_retargets_to_first_visible() {
    let mut harness = make_seeded_session();
    open_with_content(&mut harness, "alpha", "body");
    drain(&harness.cmd_rx);

    harness.session.apply_event(StoreEvent::SnippetPurged {
        id: "alpha".to_string(),
    });

    assert_eq!(harness.session.open_id(), Some("beta"));
    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::ReadContent { id } => assert_eq!(id, "beta"),
        other => panic!("unexpected command: {:?}", other),
    }
    let nav = harness.session.take_nav_request().expect("nav request");
    assert_eq!(nav.snippet.as_deref(), Some("beta"));
}

#[test]
fn empty_trash_is_disabled_until_something_is_trashed() {
    let mut harness = make_seeded_session();
    harness.session.empty_trash();
    assert!(harness.session.pending_confirmation().is_none());

    harness.session.apply_event(StoreEvent::FolderIndex {
        folder: "notes".to_string(),
        items: vec![
            test_snippet("alpha", "Alpha", 10),
            trashed_snippet("gamma", "Gamma", 0, 5),
            trashed_snippet("delta", "Delta", 1, 6),
        ],
    });

    harness.session.empty_trash();
    let prompt = harness.session.pending_confirmation().expect("prompt");
    assert!(prompt.contains("2 trashed snippets"), "{}", prompt);

    harness.session.confirm_pending(true);
    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::EmptyTrash => {}
        other => panic!("unexpected command: {:?}", other),
    }

    harness.session.apply_event(StoreEvent::TrashEmptied {
        ids: vec!["gamma".to_string(), "delta".to_string()],
    });
    assert_eq!(harness.session.snippets().len(), 1);
    assert_eq!(harness.session.snippets()[0].id, "alpha");
}
