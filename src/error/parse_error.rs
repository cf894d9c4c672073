#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The `Display` output of each variant is part of the external contract:
/// tests compare the rendered messages literally.
pub enum ParseError {
    /// The parser expected one token kind but found another.
    UnexpectedToken {
        /// The token kind that was expected.
        expected: String,
        /// The token kind that was found instead.
        found:    String,
    },
    /// No rule knows how to begin an expression with this token.
    NoPrefixParse {
        /// The token kind with no prefix parse rule.
        token: String,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    InvalidInteger {
        /// The offending literal text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParse { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
