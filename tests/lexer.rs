use pretty_assertions::assert_eq;
use stargust::interpreter::lexer::{Lexer, Token, TokenKind};

fn kinds_and_literals(src: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(src).map(|t| (t.kind, t.literal)).collect()
}

fn tok(kind: TokenKind, literal: &str) -> (TokenKind, String) {
    (kind, literal.to_string())
}

#[test]
fn scans_a_small_program() {
    let src = r#"let five = 5;
let add = fun(x, y) { x + y; };
!-/*5 < 10 > 5;
if (5 == 10) { return factos; } else { ret unfactos; }
10 != 9;
"foo bar"
[1, 2];
{"foo": "bar"}"#;

    use TokenKind as K;
    let expected = vec![tok(K::Let, "let"),
                        tok(K::Identifier, "five"),
                        tok(K::Assign, "="),
                        tok(K::Integer, "5"),
                        tok(K::Semicolon, ";"),
                        tok(K::Let, "let"),
                        tok(K::Identifier, "add"),
                        tok(K::Assign, "="),
                        tok(K::Function, "fun"),
                        tok(K::LParen, "("),
                        tok(K::Identifier, "x"),
                        tok(K::Comma, ","),
                        tok(K::Identifier, "y"),
                        tok(K::RParen, ")"),
                        tok(K::LBrace, "{"),
                        tok(K::Identifier, "x"),
                        tok(K::Plus, "+"),
                        tok(K::Identifier, "y"),
                        tok(K::Semicolon, ";"),
                        tok(K::RBrace, "}"),
                        tok(K::Semicolon, ";"),
                        tok(K::Bang, "!"),
                        tok(K::Minus, "-"),
                        tok(K::Slash, "/"),
                        tok(K::Star, "*"),
                        tok(K::Integer, "5"),
                        tok(K::Less, "<"),
                        tok(K::Integer, "10"),
                        tok(K::Greater, ">"),
                        tok(K::Integer, "5"),
                        tok(K::Semicolon, ";"),
                        tok(K::If, "if"),
                        tok(K::LParen, "("),
                        tok(K::Integer, "5"),
                        tok(K::EqualEqual, "=="),
                        tok(K::Integer, "10"),
                        tok(K::RParen, ")"),
                        tok(K::LBrace, "{"),
                        tok(K::Return, "return"),
                        tok(K::True, "factos"),
                        tok(K::Semicolon, ";"),
                        tok(K::RBrace, "}"),
                        tok(K::Else, "else"),
                        tok(K::LBrace, "{"),
                        tok(K::Return, "ret"),
                        tok(K::False, "unfactos"),
                        tok(K::Semicolon, ";"),
                        tok(K::RBrace, "}"),
                        tok(K::Integer, "10"),
                        tok(K::BangEqual, "!="),
                        tok(K::Integer, "9"),
                        tok(K::Semicolon, ";"),
                        tok(K::String, "foo bar"),
                        tok(K::LBracket, "["),
                        tok(K::Integer, "1"),
                        tok(K::Comma, ","),
                        tok(K::Integer, "2"),
                        tok(K::RBracket, "]"),
                        tok(K::Semicolon, ";"),
                        tok(K::LBrace, "{"),
                        tok(K::String, "foo"),
                        tok(K::Colon, ":"),
                        tok(K::String, "bar"),
                        tok(K::RBrace, "}"),
                        tok(K::Eof, "")];

    assert_eq!(kinds_and_literals(src), expected);
}

#[test]
fn identifiers_stop_at_digits() {
    assert_eq!(kinds_and_literals("abc123 _under"),
               vec![tok(TokenKind::Identifier, "abc"),
                    tok(TokenKind::Integer, "123"),
                    tok(TokenKind::Identifier, "_under"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn keywords_inside_identifiers_stay_identifiers() {
    assert_eq!(kinds_and_literals("function lets iffy"),
               vec![tok(TokenKind::Identifier, "function"),
                    tok(TokenKind::Identifier, "lets"),
                    tok(TokenKind::Identifier, "iffy"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn unknown_characters_are_illegal() {
    assert_eq!(kinds_and_literals("a @ b"),
               vec![tok(TokenKind::Identifier, "a"),
                    tok(TokenKind::Illegal, "@"),
                    tok(TokenKind::Identifier, "b"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn strings_have_no_escapes_and_may_be_unterminated() {
    assert_eq!(kinds_and_literals(r#""a\n" "abc"#),
               vec![tok(TokenKind::String, r"a\n"), tok(TokenKind::String, "abc"), tok(TokenKind::Eof, "")]);
    assert_eq!(kinds_and_literals(r#""""#), vec![tok(TokenKind::String, ""), tok(TokenKind::Eof, "")]);
}

#[test]
fn tracks_lines() {
    let lines: Vec<usize> = Lexer::new("a\nb\n\nc").map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn multi_line_strings_report_their_first_line() {
    let tokens: Vec<Token> = Lexer::new("\"one\ntwo\" x").collect();

    assert_eq!(tokens[0], Token::new(TokenKind::String, "one\ntwo", 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 2));
}

#[test]
fn eof_is_produced_once() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn restart_rewinds_the_stream() {
    let mut lexer = Lexer::new("let x = 1;\nx");
    let first: Vec<Token> = lexer.by_ref().collect();

    lexer.restart();
    let second: Vec<Token> = lexer.collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}
