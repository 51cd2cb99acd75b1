use super::*;

#[test]
fn walks_and_reports_sentinel_at_end() {
    let mut c = StrCursor::new("ab");
    assert_eq!(c.current_char(), 'a');
    assert_eq!(c.peek_char(), 'b');
    assert_eq!(c.next_char(), 'b');
    assert_eq!(c.peek_char(), EOF_CHAR);
    assert_eq!(c.next_char(), EOF_CHAR);
    assert_eq!(c.current_char(), EOF_CHAR);
    // Advancing at end stays put.
    assert_eq!(c.next_char(), EOF_CHAR);
    assert_eq!(c.rest(), "");
}

#[test]
fn empty_input_is_all_sentinel() {
    let mut c = StrCursor::new("");
    assert_eq!(c.current_char(), EOF_CHAR);
    assert_eq!(c.peek_char(), EOF_CHAR);
    assert_eq!(c.next_char(), EOF_CHAR);
    assert_eq!(c.offset(), 0);
    assert_eq!(c.chars_consumed(), 0);
}

#[test]
fn peek_looks_exactly_one_ahead_without_advancing() {
    let c = StrCursor::new("123");
    assert_eq!(c.peek_char(), '2');
    assert_eq!(c.current_char(), '1');
    assert_eq!(c.offset(), 0);
}

#[test]
fn decodes_multibyte_scalars() {
    let mut c = StrCursor::new("é9");
    assert_eq!(c.current_char(), 'é');
    assert_eq!(c.peek_char(), '9');
    assert_eq!(c.next_char(), '9');
    assert_eq!(c.offset(), 'é'.len_utf8());
    assert_eq!(c.rest(), "9");
}

#[test]
fn tracks_lines_and_columns() {
    let mut c = StrCursor::new("1\n23");
    assert_eq!((c.line(), c.column()), (1, 1));
    c.next_char(); // past '1'
    assert_eq!((c.line(), c.column()), (1, 2));
    c.next_char(); // past '\n'
    assert_eq!((c.line(), c.column()), (2, 1));
    c.next_char(); // past '2'
    assert_eq!((c.line(), c.column()), (2, 2));
    assert_eq!(c.chars_consumed(), 3);
}
