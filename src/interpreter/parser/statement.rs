use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// A trailing semicolon is always optional and never changes meaning.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Grammar: `let := "let" identifier "=" expression ";"?`
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_ident()?;
        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Grammar: `return := "return" expression ";"?`
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expr })
    }

    /// Parses the statements between `{` and `}` (or end of input, for
    /// unterminated blocks). Statements that fail to parse inside the block
    /// are dropped and their errors collected, exactly as at top level.
    ///
    /// The current token must be the opening `{`; on return it is the
    /// closing `}` or `EOF`.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.advance();

        while self.current != Token::RBrace && self.current != Token::Eof {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.errors.push(error),
            }
            self.advance();
        }

        BlockStatement { statements }
    }

    fn skip_semicolon(&mut self) {
        if self.peek == Token::Semicolon {
            self.advance();
        }
    }
}
