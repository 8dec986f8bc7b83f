use modal_core::{
    Buffer, EditError, EditorSession, Key, KeyEvent, Limits, Motion, Position, Selection,
};

fn type_text(session: &mut EditorSession, text: &str) {
    for ch in text.chars() {
        session.handle_key(KeyEvent::char(ch));
    }
}

#[test]
fn test_new_buffer_has_one_empty_line_and_origin_cursor() {
    let buffer = Buffer::new();
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), Some(""));
    assert_eq!(buffer.cursor(), Position::new(0, 0));
    assert!(!buffer.selection().is_selected());
}

#[test]
fn test_typing_enter_backspace_undo_scenario() {
    let mut session = EditorSession::new();

    type_text(&mut session, "hello");
    assert_eq!(session.active_buffer().line(0), Some("hello"));
    assert_eq!(session.active_buffer().cursor(), Position::new(0, 5));

    session.handle_key(KeyEvent::plain(Key::Enter));
    assert_eq!(session.active_buffer().line_count(), 2);
    assert_eq!(session.active_buffer().cursor(), Position::new(1, 0));

    // Backspace at column 0 joins with the previous line
    session.handle_key(KeyEvent::plain(Key::Backspace));
    assert_eq!(session.active_buffer().line_count(), 1);
    assert_eq!(session.active_buffer().line(0), Some("hello"));
    assert_eq!(session.active_buffer().cursor(), Position::new(0, 5));

    session.handle_key(KeyEvent::ctrl(Key::Char('z')));
    assert_eq!(session.active_buffer().line_count(), 2);
    assert_eq!(session.active_buffer().line(0), Some("hello"));
    assert_eq!(session.active_buffer().line(1), Some(""));
}

#[test]
fn test_select_all_then_delete_leaves_one_empty_line() {
    let mut session = EditorSession::new();
    type_text(&mut session, "ab");
    session.handle_key(KeyEvent::plain(Key::Enter));
    type_text(&mut session, "cd");

    session.handle_key(KeyEvent::ctrl(Key::Char('a')));
    assert!(session.active_buffer().selection().is_selected());

    session.handle_key(KeyEvent::plain(Key::Backspace));
    assert_eq!(session.active_buffer().line_count(), 1);
    assert_eq!(session.active_buffer().line(0), Some(""));
    assert_eq!(session.active_buffer().cursor(), Position::new(0, 0));
    assert!(!session.active_buffer().selection().is_selected());
}

#[test]
fn test_typing_replaces_live_selection() {
    let mut session = EditorSession::new();
    type_text(&mut session, "abcdef");

    session.handle_key(KeyEvent::plain(Key::Home));
    session.handle_key(KeyEvent::shifted(Key::Right));
    session.handle_key(KeyEvent::shifted(Key::Right));
    session.handle_key(KeyEvent::shifted(Key::Right));

    session.handle_key(KeyEvent::char('X'));
    assert_eq!(session.active_buffer().line(0), Some("Xdef"));
    assert_eq!(session.active_buffer().cursor(), Position::new(0, 1));
}

#[test]
fn test_shift_motion_extends_and_plain_motion_clears() {
    let mut buffer = Buffer::from_lines(vec!["hello".to_string()]);
    buffer.move_cursor(Motion::Right, true);
    buffer.move_cursor(Motion::Right, true);
    assert!(buffer.selection().is_selected());
    assert_eq!(
        buffer.selection().normalized(),
        (Position::new(0, 0), Position::new(0, 2))
    );

    buffer.move_cursor(Motion::Left, false);
    assert!(!buffer.selection().is_selected());
}

#[test]
fn test_cursor_column_clamps_on_vertical_motion() {
    let mut buffer = Buffer::from_lines(vec!["longer line".to_string(), "ab".to_string()]);
    buffer.set_cursor(Position::new(0, 8));
    buffer.move_cursor(Motion::Down, false);
    assert_eq!(buffer.cursor(), Position::new(1, 2));
}

#[test]
fn test_delete_forward_joins_next_line() {
    let mut buffer = Buffer::from_lines(vec!["ab".to_string(), "cd".to_string()]);
    buffer.set_cursor(Position::new(0, 2));
    assert!(buffer.delete_forward());
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), Some("abcd"));
    assert_eq!(buffer.cursor(), Position::new(0, 2));
}

#[test]
fn test_delete_forward_at_buffer_end_is_noop() {
    let mut buffer = Buffer::from_lines(vec!["ab".to_string()]);
    buffer.set_cursor(Position::new(0, 2));
    assert!(!buffer.delete_forward());
    assert_eq!(buffer.line(0), Some("ab"));
}

#[test]
fn test_insert_rejects_oversized_chunk_without_mutation() {
    let limits = Limits {
        max_insert_chars: 4,
        ..Limits::default()
    };
    let mut buffer = Buffer::from_lines(vec!["keep".to_string()]);
    buffer.set_cursor(Position::new(0, 2));

    let result = buffer.insert_text("abcde", &limits);
    assert!(matches!(
        result,
        Err(EditError::ChunkTooLarge { length: 5, max: 4 })
    ));
    assert_eq!(buffer.line(0), Some("keep"));
    assert_eq!(buffer.cursor(), Position::new(0, 2));
}

#[test]
fn test_insert_rejects_line_overflow_without_mutation() {
    let limits = Limits {
        max_line_chars: 6,
        ..Limits::default()
    };
    let mut buffer = Buffer::from_lines(vec!["abcdef".to_string()]);
    buffer.set_cursor(Position::new(0, 3));

    let result = buffer.insert_text("x", &limits);
    assert!(matches!(result, Err(EditError::LineTooLong { .. })));
    assert_eq!(buffer.line(0), Some("abcdef"));
}

#[test]
fn test_multiline_insert_is_all_or_nothing() {
    let limits = Limits {
        max_line_chars: 8,
        ..Limits::default()
    };
    let mut buffer = Buffer::from_lines(vec!["prefix-suffix".to_string()]);
    buffer.set_cursor(Position::new(0, 7));

    // The final segment would join "xx" + "suffix" = 8 chars, fine; the middle
    // segment is 10 chars and must reject the whole insertion up front.
    let result = buffer.insert_multiline_text("a\n0123456789\nxx", &limits);
    assert!(matches!(result, Err(EditError::LineTooLong { .. })));
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), Some("prefix-suffix"));
    assert_eq!(buffer.cursor(), Position::new(0, 7));
}

#[test]
fn test_multiline_insert_splits_at_cursor() {
    let mut buffer = Buffer::from_lines(vec!["headtail".to_string()]);
    buffer.set_cursor(Position::new(0, 4));
    buffer
        .insert_multiline_text("A\nB", &Limits::default())
        .unwrap();
    assert_eq!(buffer.line(0), Some("headA"));
    assert_eq!(buffer.line(1), Some("Btail"));
    assert_eq!(buffer.cursor(), Position::new(1, 1));
}

#[test]
fn test_duplicate_line_keeps_cursor_on_original() {
    let mut buffer = Buffer::from_lines(vec!["one".to_string(), "two".to_string()]);
    buffer.set_cursor(Position::new(0, 2));
    buffer.duplicate_current_line();
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line(1), Some("one"));
    assert_eq!(buffer.cursor(), Position::new(0, 2));
}

#[test]
fn test_delete_line_refuses_last_line() {
    let mut session = EditorSession::new();
    type_text(&mut session, "only");
    session.handle_key(KeyEvent::ctrl(Key::Char('k')));
    // The line itself may not be removed when it is the only one
    assert_eq!(session.active_buffer().line_count(), 1);
    assert_eq!(session.active_buffer().line(0), Some("only"));
    assert_eq!(session.status(), "Cannot delete the last line");
}

#[test]
fn test_delete_line_clamps_cursor_to_remaining_lines() {
    let mut buffer = Buffer::from_lines(vec!["a".to_string(), "b".to_string()]);
    buffer.set_cursor(Position::new(1, 1));
    assert!(buffer.delete_current_line());
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.cursor(), Position::new(0, 0));
}

#[test]
fn test_selected_text_joins_lines_with_newline() {
    let mut buffer = Buffer::from_lines(vec!["abc".to_string(), "def".to_string()]);
    buffer.set_cursor(Position::new(0, 1));
    buffer.move_cursor(Motion::Down, true);
    buffer.move_cursor(Motion::Right, true);
    assert_eq!(buffer.selected_text().as_deref(), Some("bc\nde"));
}

#[test]
fn test_selection_with_equal_endpoints_is_not_selected() {
    let mut selection = Selection::default();
    selection.begin_at(Position::new(2, 3));
    assert!(!selection.is_selected());
    selection.focus = Position::new(2, 4);
    assert!(selection.is_selected());
}

#[test]
fn test_escape_in_insert_mode_clears_selection() {
    let mut session = EditorSession::new();
    type_text(&mut session, "abc");
    session.handle_key(KeyEvent::shifted(Key::Home));
    assert!(session.active_buffer().selection().is_selected());

    session.handle_key(KeyEvent::plain(Key::Escape));
    assert!(!session.active_buffer().selection().is_selected());
}

#[test]
fn test_tab_inserts_four_spaces_with_single_pane() {
    let mut session = EditorSession::new();
    session.handle_key(KeyEvent::plain(Key::Tab));
    assert_eq!(session.active_buffer().line(0), Some("    "));
}
