use modal_core::{EditorSession, Key, KeyEvent, PaneSet, SplitOrientation};

fn type_text(session: &mut EditorSession, text: &str) {
    for ch in text.chars() {
        session.handle_key(KeyEvent::char(ch));
    }
}

#[test]
fn test_new_pane_set_has_one_untitled_pane() {
    let panes = PaneSet::new();
    assert_eq!(panes.len(), 1);
    assert_eq!(panes.active_index(), 0);
    assert_eq!(panes.active().filename(), "Untitled");
    assert!(!panes.active().is_modified());
}

#[test]
fn test_split_clones_content_and_keeps_active_pane() {
    let mut session = EditorSession::new();
    type_text(&mut session, "x");

    session.split_vertical();
    assert_eq!(session.panes().len(), 2);
    assert_eq!(session.panes().active_index(), 0);
    assert_eq!(session.panes().orientation(), SplitOrientation::Vertical);
    assert_eq!(session.panes().panes()[1].buffer().line(0), Some("x"));
}

#[test]
fn test_split_panes_do_not_share_content() {
    let mut session = EditorSession::new();
    type_text(&mut session, "shared");
    session.split_vertical();

    session.handle_key(KeyEvent::plain(Key::Tab));
    type_text(&mut session, "!");

    let panes = session.panes().panes();
    assert_eq!(panes[0].buffer().line(0), Some("shared"));
    assert_ne!(panes[1].buffer().line(0), Some("shared"));
}

#[test]
fn test_horizontal_split_sets_orientation() {
    let mut session = EditorSession::new();
    session.split_horizontal();
    assert_eq!(session.panes().orientation(), SplitOrientation::Horizontal);
}

#[test]
fn test_tab_cycles_through_panes_in_order() {
    let mut session = EditorSession::new();
    session.split_vertical();
    session.split_vertical();
    assert_eq!(session.panes().len(), 3);
    assert_eq!(session.panes().active_index(), 0);

    session.handle_key(KeyEvent::plain(Key::Tab));
    assert_eq!(session.panes().active_index(), 1);
    session.handle_key(KeyEvent::plain(Key::Tab));
    assert_eq!(session.panes().active_index(), 2);
    session.handle_key(KeyEvent::plain(Key::Tab));
    assert_eq!(session.panes().active_index(), 0);
}

#[test]
fn test_ctrl_digit_activates_pane_by_number() {
    let mut session = EditorSession::new();
    session.split_vertical();
    session.split_vertical();

    session.handle_key(KeyEvent::ctrl(Key::Char('3')));
    assert_eq!(session.panes().active_index(), 2);

    // Out-of-range digits leave the active pane unchanged
    session.handle_key(KeyEvent::ctrl(Key::Char('9')));
    assert_eq!(session.panes().active_index(), 2);
}

#[test]
fn test_close_refuses_last_pane() {
    let mut session = EditorSession::new();
    assert!(!session.close_pane());
    assert_eq!(session.panes().len(), 1);
    assert_eq!(session.status(), "Cannot close the last pane");
}

#[test]
fn test_close_clamps_active_index() {
    let mut session = EditorSession::new();
    session.split_vertical();
    session.split_vertical();
    session.handle_key(KeyEvent::ctrl(Key::Char('3')));

    assert!(session.close_pane());
    assert_eq!(session.panes().len(), 2);
    assert_eq!(session.panes().active_index(), 1);
}

#[test]
fn test_pane_ids_are_never_reused() {
    let mut panes = PaneSet::new();
    let first = panes.split_vertical();
    panes.activate(1);
    panes.close_active();
    let second = panes.split_vertical();
    assert_ne!(first, second);
}
