use logos::Logos;

/// Represents a lexical token in quill source text.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Payload-carrying variants keep the original source lexeme: integer tokens
/// stay digit strings, so the parser owns the conversion to `i64` and the
/// error that conversion can produce.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; names such as `x` or `newAdder`. A maximal run of
    /// letters and underscores that is not a keyword.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens such as `42`, kept as their digit string.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens such as `"hello"`. The payload excludes the
    /// surrounding quotes; no escape sequences are interpreted.
    #[regex(r#""[^"]*""#, trim_quotes)]
    Str(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// A character no rule above recognizes, carrying the offending lexeme.
    /// Produced by [`Lexer::next_token`], never by a pattern; the lexer
    /// itself does not error, the parser reports the stray token.
    Illegal(String),
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Function => "FN",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{kind}")
    }
}

/// Strips the delimiting quotes from the current string-literal slice.
///
/// # Parameters
/// - `lex`: Reference to the lexer at the current token.
///
/// # Returns
/// The literal contents without the leading and trailing `"`.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// A forward token stream over a source string.
///
/// Wraps the generated token rules behind the one operation the parser
/// needs: [`next_token`](Self::next_token). Whitespace (space, tab, carriage
/// return, newline) separates tokens and is never part of one.
pub struct Lexer<'a> {
    tokens: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { tokens: Token::lexer(source) }
    }

    /// Returns the next token in the source.
    ///
    /// Unrecognized characters become [`Token::Illegal`]. Once the source is
    /// exhausted, this returns [`Token::Eof`] on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.tokens.slice().to_string()),
            None => Token::Eof,
        }
    }
}
