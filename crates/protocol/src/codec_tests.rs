use super::*;
use std::io::Cursor;

#[test]
fn write_message_line_appends_newline_once() {
    let mut buf = Vec::new();
    write_message_line(&mut buf, b"{\"id\":1}").expect("write line");
    assert_eq!(buf, b"{\"id\":1}\n");
}

#[test]
fn read_message_line_strips_line_endings() {
    let mut reader = Cursor::new(b"{\"id\":1}\r\n{\"id\":2}\n".to_vec());

    let first = read_message_line(&mut reader).expect("read").expect("line");
    assert_eq!(first, b"{\"id\":1}");

    let second = read_message_line(&mut reader).expect("read").expect("line");
    assert_eq!(second, b"{\"id\":2}");
}

#[test]
fn read_message_line_returns_none_at_eof() {
    let mut reader = Cursor::new(Vec::new());
    assert!(read_message_line(&mut reader).expect("read").is_none());
}

#[test]
fn read_message_line_yields_final_unterminated_line() {
    let mut reader = Cursor::new(b"{\"id\":9}".to_vec());
    let line = read_message_line(&mut reader).expect("read").expect("line");
    assert_eq!(line, b"{\"id\":9}");
    assert!(read_message_line(&mut reader).expect("read").is_none());
}
