//! Split panes and per-pane editing
//!
//! Shows that splits clone the active pane and then diverge independently,
//! each with its own undo history.

use modal_core::{EditorSession, Key, KeyEvent};

fn type_text(session: &mut EditorSession, text: &str) {
    for ch in text.chars() {
        session.handle_key(KeyEvent::char(ch));
    }
}

fn dump(session: &EditorSession) {
    for (i, pane) in session.panes().panes().iter().enumerate() {
        let marker = if session.panes().is_active(i) { "*" } else { " " };
        println!(
            "{} pane {}: {:?} ({} lines)",
            marker,
            i + 1,
            pane.buffer().line(0),
            pane.buffer().line_count()
        );
    }
}

fn main() {
    let mut session = EditorSession::new();
    type_text(&mut session, "shared start");

    // `:vsp` clones the active pane; the original stays active.
    session.handle_key(KeyEvent::char(':'));
    type_text(&mut session, "vsp");
    session.handle_key(KeyEvent::plain(Key::Enter));
    session.handle_key(KeyEvent::char('i'));
    println!("after :vsp");
    dump(&session);

    // Tab cycles panes when more than one exists; edits stay local.
    session.handle_key(KeyEvent::plain(Key::Tab));
    type_text(&mut session, "second pane! ");
    println!("\nafter editing pane 2");
    dump(&session);

    // Undo only touches the active pane's history.
    session.handle_key(KeyEvent::ctrl(Key::Char('z')));
    println!("\nafter undo in pane 2");
    dump(&session);
}
