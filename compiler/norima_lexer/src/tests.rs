#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_let() {
    let tokens = tokenize("let x = 42;").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Ident, "let"),
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Eq, "="),
            Token::new(TokenKind::Number, "42"),
            Token::new(TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_lex_numbers() {
    let tokens = tokenize("1 2.5 003").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "2.5", "003"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_lex_number_followed_by_ident() {
    assert_eq!(kinds("12abc"), vec![TokenKind::Number, TokenKind::Ident]);
}

#[test]
fn test_lex_string_strips_quotes() {
    let tokens = tokenize(r#"print("hello world");"#).unwrap();
    assert_eq!(tokens[2], Token::new(TokenKind::String, "hello world"));
}

#[test]
fn test_lex_string_is_not_greedy() {
    let tokens = tokenize(r#""a" + "b""#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::String, "a"),
            Token::new(TokenKind::Plus, "+"),
            Token::new(TokenKind::String, "b"),
        ]
    );
}

#[test]
fn test_lex_no_escape_processing() {
    let tokens = tokenize(r#""a\n""#).unwrap();
    assert_eq!(tokens[0].text, "a\\n");
}

#[test]
fn test_lex_operators_and_delimiters() {
    assert_eq!(
        kinds("+-*/=,(){};"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::Comma,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_lex_skips_whitespace() {
    assert_eq!(
        kinds("fn\tf(\r\n) {\n}"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn test_lex_empty() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t ").unwrap().is_empty());
}

#[test]
fn test_lex_unexpected_char() {
    assert_eq!(
        tokenize("let x = 1 @ 2;"),
        Err(LexError::UnexpectedChar { ch: '@', offset: 10 })
    );
}

#[test]
fn test_lex_unterminated_string() {
    let err = tokenize("print(\"oops);").unwrap_err();
    assert!(matches!(err, LexError::UnexpectedChar { ch: '"', offset: 6 }));
}

#[test]
fn test_lex_error_message() {
    let err = tokenize("#").unwrap_err();
    assert_eq!(err.to_string(), "unexpected character '#' at byte 0");
}

proptest! {
    #[test]
    fn prop_valid_alphabet_always_lexes(source in "[a-z0-9_ +*/=,(){};-]{0,64}") {
        prop_assert!(tokenize(&source).is_ok());
    }

    #[test]
    fn prop_tokens_cover_all_non_whitespace(source in "[a-z0-9 +*/=,(){};-]{0,64}") {
        let tokens = tokenize(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }
}
