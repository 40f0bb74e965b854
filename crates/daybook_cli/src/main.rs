//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daybook_core` linkage.
//! - Walk the shell through one scripted session so every store operation
//!   is reachable outside the FFI runtime.
//! - Keep output deterministic for quick local sanity checks.

use daybook_core::AppShell;

fn main() {
    println!("daybook_core ping={}", daybook_core::ping());
    println!("daybook_core version={}", daybook_core::core_version());

    let mut shell = AppShell::new();
    println!("login(bad)={}", shell.login("user", "wrong"));
    println!("login(ok)={}", shell.login("user", "pass"));
    println!("seeded={}", shell.notes().len());

    let id = shell
        .notes_mut()
        .add("from the cli")
        .expect("non-empty title");
    println!("added id={id}");

    shell.notes_mut().begin_edit(id);
    shell.notes_mut().set_draft("edited from the cli");
    println!("saved={}", shell.notes_mut().save_edit());

    for note in shell.visible_notes().unwrap_or_default() {
        println!("note id={} title={}", note.id, note.title);
    }

    println!("removed={}", shell.notes_mut().remove(id));
    shell.logout();
    println!("authenticated={}", shell.is_authenticated());
}
