use quill::interpreter::lexer::{Lexer, Token};

fn lex_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

#[test]
fn punctuation_and_operators() {
    assert_eq!(lex_all("=+(){},;"),
               vec![Token::Assign,
                    Token::Plus,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Comma,
                    Token::Semicolon,
                    Token::Eof]);
}

#[test]
fn full_program_token_walk() {
    let source = r#"
let five = 5;
let ten = 10;

let add = fn(x, y) {
    x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
"#;

    let expected = vec![Token::Let,
                        Token::Ident("five".to_string()),
                        Token::Assign,
                        Token::Int("5".to_string()),
                        Token::Semicolon,
                        Token::Let,
                        Token::Ident("ten".to_string()),
                        Token::Assign,
                        Token::Int("10".to_string()),
                        Token::Semicolon,
                        Token::Let,
                        Token::Ident("add".to_string()),
                        Token::Assign,
                        Token::Function,
                        Token::LParen,
                        Token::Ident("x".to_string()),
                        Token::Comma,
                        Token::Ident("y".to_string()),
                        Token::RParen,
                        Token::LBrace,
                        Token::Ident("x".to_string()),
                        Token::Plus,
                        Token::Ident("y".to_string()),
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Semicolon,
                        Token::Let,
                        Token::Ident("result".to_string()),
                        Token::Assign,
                        Token::Ident("add".to_string()),
                        Token::LParen,
                        Token::Ident("five".to_string()),
                        Token::Comma,
                        Token::Ident("ten".to_string()),
                        Token::RParen,
                        Token::Semicolon,
                        Token::Bang,
                        Token::Minus,
                        Token::Slash,
                        Token::Asterisk,
                        Token::Int("5".to_string()),
                        Token::Semicolon,
                        Token::Int("5".to_string()),
                        Token::Lt,
                        Token::Int("10".to_string()),
                        Token::Gt,
                        Token::Int("5".to_string()),
                        Token::Semicolon,
                        Token::If,
                        Token::LParen,
                        Token::Int("5".to_string()),
                        Token::Lt,
                        Token::Int("10".to_string()),
                        Token::RParen,
                        Token::LBrace,
                        Token::Return,
                        Token::True,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Else,
                        Token::LBrace,
                        Token::Return,
                        Token::False,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Int("10".to_string()),
                        Token::Eq,
                        Token::Int("10".to_string()),
                        Token::Semicolon,
                        Token::Int("10".to_string()),
                        Token::NotEq,
                        Token::Int("9".to_string()),
                        Token::Semicolon,
                        Token::Str("foobar".to_string()),
                        Token::Str("foo bar".to_string()),
                        Token::Eof];

    assert_eq!(lex_all(source), expected);
}

#[test]
fn two_character_operators_require_adjacency() {
    assert_eq!(lex_all("=="), vec![Token::Eq, Token::Eof]);
    assert_eq!(lex_all("!="), vec![Token::NotEq, Token::Eof]);
    assert_eq!(lex_all("= ="), vec![Token::Assign, Token::Assign, Token::Eof]);
    assert_eq!(lex_all("! ="), vec![Token::Bang, Token::Assign, Token::Eof]);
}

#[test]
fn string_literals_exclude_quotes() {
    assert_eq!(lex_all(r#""hello world""#),
               vec![Token::Str("hello world".to_string()), Token::Eof]);
    assert_eq!(lex_all(r#""""#), vec![Token::Str(String::new()), Token::Eof]);
}

#[test]
fn identifiers_may_contain_underscores() {
    assert_eq!(lex_all("foo_bar _x"),
               vec![Token::Ident("foo_bar".to_string()),
                    Token::Ident("_x".to_string()),
                    Token::Eof]);
}

#[test]
fn keywords_are_distinguished_from_identifiers() {
    assert_eq!(lex_all("fn let true false if else return fnx letter"),
               vec![Token::Function,
                    Token::Let,
                    Token::True,
                    Token::False,
                    Token::If,
                    Token::Else,
                    Token::Return,
                    Token::Ident("fnx".to_string()),
                    Token::Ident("letter".to_string()),
                    Token::Eof]);
}

#[test]
fn unrecognized_characters_become_illegal_tokens() {
    assert_eq!(lex_all("@"), vec![Token::Illegal("@".to_string()), Token::Eof]);
    assert_eq!(lex_all("5 # 5"),
               vec![Token::Int("5".to_string()),
                    Token::Illegal("#".to_string()),
                    Token::Int("5".to_string()),
                    Token::Eof]);
}

#[test]
fn eof_is_sticky() {
    let mut lexer = Lexer::new("5");

    assert_eq!(lexer.next_token(), Token::Int("5".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn whitespace_separates_tokens() {
    assert_eq!(lex_all("  5\t\r\n 10 "),
               vec![Token::Int("5".to_string()), Token::Int("10".to_string()), Token::Eof]);
}
