//! Tokenizer tests

use esp_serial_shell::shell::Args;

#[test]
fn test_tokenize_command_and_arg() {
    let mut args = Args::new("SET A6");

    assert_eq!(args.next_token(), Some("SET"));
    assert_eq!(args.next_token(), Some("A6"));
    assert_eq!(args.next_token(), None);
}

#[test]
fn test_tokenize_empty_line() {
    let mut args = Args::new("");
    assert_eq!(args.next_token(), None);
}

#[test]
fn test_tokenize_whitespace_only() {
    let mut args = Args::new("   \t  ");
    assert_eq!(args.next_token(), None);
}

#[test]
fn test_tokenize_ignores_excess_whitespace() {
    let padded: Vec<&str> = Args::new("  SET   A6  ").collect();
    let tight: Vec<&str> = Args::new("SET A6").collect();

    assert_eq!(padded, tight);
    assert_eq!(padded, ["SET", "A6"]);
}

#[test]
fn test_tokenize_exhaustion_is_terminal() {
    let mut args = Args::new("only");

    assert_eq!(args.next_token(), Some("only"));
    assert_eq!(args.next_token(), None);
    assert_eq!(args.next_token(), None);
}

#[test]
fn test_rest_is_unconsumed_remainder() {
    let mut args = Args::new("LED SET 128");

    assert_eq!(args.next_token(), Some("LED"));
    assert_eq!(args.rest(), "SET 128");

    assert_eq!(args.next_token(), Some("SET"));
    assert_eq!(args.next_token(), Some("128"));
    assert_eq!(args.rest(), "");
}

#[test]
fn test_tokens_borrow_the_line() {
    let line = String::from("BUTTON INV ON");
    let mut args = Args::new(&line);

    let cmd = args.next_token().unwrap();
    let sub = args.next_token().unwrap();

    // Spans, not copies: same backing storage as the line.
    assert_eq!(cmd.as_ptr(), line.as_ptr());
    assert_eq!(sub.as_ptr(), line[7..].as_ptr());
}
