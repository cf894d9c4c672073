use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// The prefix parse rule table: the current token decides how an
    /// expression begins.
    ///
    /// - identifiers and literals produce leaf nodes,
    /// - `!` and `-` begin a prefix operation on an operand parsed at
    ///   `Prefix` strength,
    /// - `(` begins a grouped expression,
    /// - `if` and `fn` begin their compound forms.
    ///
    /// A token with no rule here cannot begin an expression; that is the
    /// canonical "no prefix parse function" error.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match &self.current {
            Token::Ident(name) => Ok(Expression::Identifier(name.clone())),
            Token::Int(literal) => {
                literal.parse::<i64>()
                       .map(Expression::IntegerLiteral)
                       .map_err(|_| ParseError::InvalidInteger { literal: literal.clone() })
            },
            Token::True => Ok(Expression::BooleanLiteral(true)),
            Token::False => Ok(Expression::BooleanLiteral(false)),
            Token::Str(value) => Ok(Expression::StringLiteral(value.clone())),
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            token => Err(ParseError::NoPrefixParse { token: token.to_string() }),
        }
    }

    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> ParseResult<Expression> {
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator,
                                right: Box::new(right) })
    }

    /// Parses the right-hand side of a binary operation. The operator's own
    /// strength bounds the right operand, which makes every binary operator
    /// left-associative.
    ///
    /// The current token must be the operator matching `operator`.
    pub(crate) fn parse_infix_expression(&mut self,
                                         left: Expression,
                                         operator: InfixOperator)
                                         -> ParseResult<Expression> {
        let precedence = Precedence::of(&self.current);
        self.advance();

        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right) })
    }

    /// Grammar: `group := "(" expression ")"`
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expression)
    }

    /// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect_peek(&Token::LParen)?;
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;

        let consequence = self.parse_block_statement();

        let alternative = if self.peek == Token::Else {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Grammar: `function := "fn" "(" parameters? ")" block`
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(&Token::LParen)?;

        let parameters = self.parse_function_parameters()?;
        self.expect_peek(&Token::LBrace)?;

        let body = self.parse_block_statement();

        Ok(Expression::Function { parameters, body })
    }

    /// Parses the comma-separated parameter names of a function literal. An
    /// immediately encountered `)` produces an empty list.
    ///
    /// Grammar: `parameters := identifier ("," identifier)*`
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek == Token::RParen {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_ident()?);
        while self.peek == Token::Comma {
            self.advance();
            parameters.push(self.expect_ident()?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(parameters)
    }

    /// Turns an already-parsed expression into the callee of a call. The
    /// current token must be the `(` that follows it.
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments })
    }

    /// Parses the comma-separated argument list up to the closing `)`, each
    /// argument at `Lowest` strength. An immediately encountered `)`
    /// produces an empty list.
    ///
    /// Grammar: `arguments := expression ("," expression)*`
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek == Token::RParen {
            self.advance();
            return Ok(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Token::Comma {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(arguments)
    }
}
