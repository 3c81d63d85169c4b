//! Selection toggling, highlight state, and effective-selection derivation.

use super::*;

#[test]
fn toggle_selected_is_involutive() {
    let mut harness = make_seeded_session();
    assert!(harness.session.selected_ids().is_empty());

    harness.session.toggle_selected("beta");
    assert!(harness.session.selected_ids().contains("beta"));

    harness.session.toggle_selected("beta");
    assert!(harness.session.selected_ids().is_empty());
}

#[test]
fn modified_activation_toggles_without_navigating() {
    let mut harness = make_seeded_session();
    harness.session.activate_snippet("beta", true);

    assert!(harness.session.selected_ids().contains("beta"));
    assert!(harness.session.open_id().is_none());
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn plain_activation_navigates_and_clears_selection() {
    let mut harness = make_seeded_session();
    harness.session.activate_snippet("beta", true);

    harness.session.activate_snippet("alpha", false);

    assert_eq!(harness.session.open_id(), Some("alpha"));
    assert!(
        harness.session.selected_ids().is_empty(),
        "open change must clear the explicit selection"
    );
    match recv_cmd(&harness.cmd_rx) {
        StoreCmd::ReadContent { id } => assert_eq!(id, "alpha"),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn highlight_covers_open_and_explicitly_selected() {
    let mut harness = make_seeded_session();
    open_with_content(&mut harness, "alpha", "body");
    harness.session.toggle_selected("beta");

    assert!(harness.session.is_highlighted("alpha"));
    assert!(harness.session.is_highlighted("beta"));
    assert!(!harness.session.is_highlighted("ghost"));
}

#[test]
fn effective_selection_includes_open_only_when_visible() {
    let mut harness = make_seeded_session();
    open_with_content(&mut harness, "beta", "body");
    harness.session.toggle_selected("alpha");

    assert_eq!(
        harness.session.effective_selection(),
        vec!["alpha".to_string(), "beta".to_string()]
    );

    // Trash the open snippet behind the session's back; in inactive mode it
    // drops out of the visible list and out of the effective selection.
    for snippet in harness.session.snippets.iter_mut() {
        if snippet.id == "beta" {
            snippet.deleted_at = Some(Utc::now());
        }
    }
    assert_eq!(
        harness.session.effective_selection(),
        vec!["alpha".to_string()]
    );
}

#[test]
fn effective_selection_does_not_duplicate_open_id() {
    let mut harness = make_seeded_session();
    open_with_content(&mut harness, "alpha", "body");
    harness.session.toggle_selected("alpha");

    assert_eq!(
        harness.session.effective_selection(),
        vec!["alpha".to_string()]
    );
}

#[test]
fn changing_open_id_empties_any_prior_selection() {
    let mut harness = make_seeded_session();
    harness.session.toggle_selected("alpha");
    harness.session.toggle_selected("beta");
    assert_eq!(harness.session.selected_ids().len(), 2);

    harness.session.open_snippet("alpha");
    assert!(harness.session.selected_ids().is_empty());
}

#[test]
fn changing_mode_clears_selection_but_keyword_does_not() {
    let mut harness = make_seeded_session();
    harness.session.toggle_selected("alpha");

    harness.session.set_search_keyword("alp");
    assert!(
        harness.session.selected_ids().contains("alpha"),
        "keyword edits alone must not clear the selection"
    );

    harness.session.set_search_mode(SearchMode::Searching);
    assert!(harness.session.selected_ids().is_empty());
}

#[test]
fn visible_list_tracks_mode_and_snapshot() {
    let mut harness = make_seeded_session();
    harness.session.apply_event(StoreEvent::FolderIndex {
        folder: "notes".to_string(),
        items: vec![
            test_snippet("alpha", "Alpha", 10),
            trashed_snippet("beta", "Beta", 0, 20),
        ],
    });

    let active: Vec<String> = harness
        .session
        .visible_snippets()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(active, vec!["alpha".to_string()]);

    harness.session.set_search_mode(SearchMode::ViewingTrash);
    let trash: Vec<String> = harness
        .session
        .visible_snippets()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(trash, vec!["beta".to_string()]);
}
