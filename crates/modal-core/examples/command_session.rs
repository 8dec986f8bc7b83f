//! Driving a session with key events
//!
//! Demonstrates typing, the Command mode round trip, search, and undo.

use modal_core::{EditorSession, HostRequest, Key, KeyEvent};

fn type_text(session: &mut EditorSession, text: &str) -> HostRequest {
    let mut request = HostRequest::None;
    for ch in text.chars() {
        request = session.handle_key(KeyEvent::char(ch));
    }
    request
}

fn main() {
    let mut session = EditorSession::new();

    // Type two lines of text in Insert mode.
    type_text(&mut session, "hello world");
    session.handle_key(KeyEvent::plain(Key::Enter));
    type_text(&mut session, "goodbye world");
    println!("buffer after typing:");
    for line in session.active_buffer().lines() {
        println!("  | {}", line);
    }

    // Search for "goodbye" (Ctrl+F opens the overlay, Enter submits).
    session.handle_key(KeyEvent::ctrl(Key::Char('f')));
    type_text(&mut session, "goodbye");
    session.handle_key(KeyEvent::plain(Key::Enter));
    println!("cursor after search: {:?}", session.active_buffer().cursor());
    println!("status: {}", session.status());

    // Undo the last edit.
    session.handle_key(KeyEvent::ctrl(Key::Char('z')));
    println!("line 1 after undo: {:?}", session.active_buffer().line(1));

    // Enter Command mode and ask to quit; the request is for the host to act on.
    session.handle_key(KeyEvent::char(':'));
    type_text(&mut session, "q");
    let request = session.handle_key(KeyEvent::plain(Key::Enter));
    println!("host request: {:?}", request);
}
