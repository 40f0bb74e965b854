use daybook_core::{EditDraft, NoteStore};

fn store_with_two_notes() -> NoteStore {
    let mut store = NoteStore::new();
    store.add("first");
    store.add("second");
    store
}

#[test]
fn begin_edit_seeds_draft_from_current_title() {
    let mut store = store_with_two_notes();
    assert!(store.begin_edit(2));

    let draft = store.editing().expect("edit in progress");
    assert_eq!(draft.id, 2);
    assert_eq!(draft.text, "second");
}

#[test]
fn begin_edit_unknown_id_is_a_noop() {
    let mut store = store_with_two_notes();
    assert!(!store.begin_edit(42));
    assert!(store.editing().is_none());
}

#[test]
fn at_most_one_edit_switching_abandons_the_previous_draft() {
    let mut store = store_with_two_notes();
    assert!(store.begin_edit(1));
    store.set_draft("unsaved change to first");

    assert!(store.begin_edit(2));
    let draft = store.editing().expect("edit in progress");
    assert_eq!(draft.id, 2);
    assert_eq!(draft.text, "second");

    // The abandoned draft never touched note 1.
    assert_eq!(store.get(1).unwrap().title, "first");
}

#[test]
fn save_edit_commits_the_draft_and_leaves_edit_mode() {
    let mut store = store_with_two_notes();
    store.begin_edit(1);
    store.set_draft("renamed");

    assert!(store.save_edit());
    assert!(store.editing().is_none());
    assert_eq!(store.get(1).unwrap().title, "renamed");
}

#[test]
fn save_edit_with_empty_draft_discards_and_exits() {
    let mut store = store_with_two_notes();
    store.begin_edit(1);
    store.set_draft("   ");

    assert!(!store.save_edit());
    assert!(store.editing().is_none());
    assert_eq!(store.get(1).unwrap().title, "first");
}

#[test]
fn save_edit_without_changes_keeps_the_title() {
    let mut store = store_with_two_notes();
    store.begin_edit(1);

    // Draft still equals the seeded title; commit rewrites it in place.
    assert!(store.save_edit());
    assert_eq!(store.get(1).unwrap().title, "first");
    assert!(store.editing().is_none());
}

#[test]
fn cancel_edit_discards_the_draft() {
    let mut store = store_with_two_notes();
    store.begin_edit(2);
    store.set_draft("never saved");
    store.cancel_edit();

    assert!(store.editing().is_none());
    assert_eq!(store.get(2).unwrap().title, "second");
}

#[test]
fn removing_the_edited_note_makes_save_a_noop() {
    let mut store = store_with_two_notes();
    store.begin_edit(2);
    store.set_draft("orphan draft");

    assert!(store.remove(2));
    assert!(!store.save_edit());
    assert!(store.editing().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn draft_and_cancel_report_whether_an_edit_was_active() {
    let mut store = store_with_two_notes();
    assert!(!store.set_draft("no target"));
    assert!(!store.cancel_edit());

    assert!(store.begin_edit(1));
    assert!(store.set_draft("live draft"));
    assert!(store.cancel_edit());
    assert!(!store.cancel_edit());
    assert_eq!(store.get(1).unwrap().title, "first");
}

#[test]
fn edit_draft_serializes_with_stable_field_names() {
    let mut store = store_with_two_notes();
    store.begin_edit(1);
    let draft = store.editing().unwrap();

    let json = serde_json::to_value(draft).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["text"], "first");

    let decoded: EditDraft = serde_json::from_value(json).unwrap();
    assert_eq!(&decoded, draft);
}
