use super::*;

#[test]
fn in_memory_keeps_the_last_write() {
    let mut cb = InMemoryClipboard::new();
    assert_eq!(cb.contents(), None);
    cb.write_text("var(--a)").unwrap();
    cb.write_text("var(--b)").unwrap();
    assert_eq!(cb.contents(), Some("var(--b)"));
}

#[test]
fn unavailable_always_fails() {
    assert!(UnavailableClipboard.write_text("x").is_err());
}

#[test]
fn xclip_is_always_a_candidate() {
    let last = CommandClipboard::candidates().pop().unwrap();
    assert_eq!(last, CommandClipboard::new("xclip", &["-selection", "clipboard"]));
}

#[test]
fn missing_program_is_an_error() {
    let mut cb = CommandClipboard::new("gladia-studio-no-such-clipboard", &[]);
    assert!(cb.write_text("x").is_err());
}

#[cfg(unix)]
#[test]
fn command_receives_text_on_stdin() {
    let mut cb = CommandClipboard::new("cat", &[]);
    cb.write_text("var(--color-purple-400)").unwrap();
}

#[cfg(unix)]
#[test]
fn command_that_ignores_stdin_reports_the_broken_pipe() {
    let mut cb = CommandClipboard::new("true", &[]);
    let payload = "x".repeat(4 << 20);
    match cb.write_text(&payload) {
        Err(StudioError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("expected a broken pipe, got {other:?}"),
    }
}
