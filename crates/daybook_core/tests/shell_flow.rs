use daybook_core::AppShell;

#[test]
fn logged_out_shell_exposes_no_notes() {
    let shell = AppShell::new();
    assert!(!shell.is_authenticated());
    assert!(shell.visible_notes().is_none());
}

#[test]
fn first_login_seeds_welcome_notes() {
    let mut shell = AppShell::new();
    assert!(shell.login("user", "pass"));

    let notes = shell.visible_notes().expect("authenticated");
    let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Note 1", "Note 2"]);
}

#[test]
fn notes_survive_logout_and_seeding_does_not_repeat() {
    let mut shell = AppShell::new();
    assert!(shell.login("user", "pass"));
    shell.notes_mut().add("mine");
    assert_eq!(shell.notes().len(), 3);

    shell.logout();
    assert!(shell.visible_notes().is_none());

    assert!(shell.login("user", "pass"));
    let notes = shell.visible_notes().expect("authenticated again");
    assert_eq!(notes.len(), 3, "relogin must not reseed or clear");
}

#[test]
fn full_session_walkthrough() {
    let mut shell = AppShell::new();
    assert!(!shell.login("user", "wrong"));
    assert!(shell.login("user", "pass"));

    let id = shell.notes_mut().add("buy milk").expect("valid title");
    assert_eq!(id, 3);

    assert!(shell.notes_mut().begin_edit(id));
    shell.notes_mut().set_draft("buy oat milk");
    assert!(shell.notes_mut().save_edit());
    assert_eq!(shell.notes().get(id).unwrap().title, "buy oat milk");

    assert!(shell.notes_mut().remove(id));
    assert!(!shell.notes_mut().remove(id));

    shell.logout();
    assert!(!shell.is_authenticated());
    assert_eq!(shell.notes().len(), 2);
}
