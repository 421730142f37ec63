use crate::{
    ast::{Stmt, TokenKind},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses the declarations of a block up to and including its closing
    /// brace.
    ///
    /// Called after the opening `{` has been consumed. Each inner declaration
    /// recovers from its own errors, so a broken statement inside a block
    /// drops only that statement; a missing `}` fails the whole block.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
