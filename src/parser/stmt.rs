use super::*;
use crate::ast::{FnDef, Stmt};

impl Parser {
    /// Dispatch on the first token of a statement. A bare identifier always
    /// means assignment; call statements need the `beta` prefix.
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::Skibidi => self.parse_var_decl(),
            TokenKind::Ident => self.parse_assign(),
            TokenKind::Gyatt => self.parse_print(),
            TokenKind::Cap => self.parse_if(),
            TokenKind::Bussin => self.parse_while(),
            TokenKind::Gyatfor => self.parse_for(),
            TokenKind::Sigma => self.parse_fn_def(),
            TokenKind::Beta => self.parse_call_stmt(),
            TokenKind::Alpha => self.parse_return(),
            _ => Err(self.error_unexpected()),
        }
    }

    /// `skibidi IDENT rizz expr` without the closing `ohio`, shared by the
    /// statement form and the for-loop initializer.
    fn parse_var_decl_open(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Skibidi)?;
        let name = self.expect(TokenKind::Ident)?.text;
        self.expect_rizz()?;
        let value = self.parse_expression()?;
        Ok(Stmt::VarDecl { name, value })
    }

    /// `IDENT rizz expr` without the closing `ohio`.
    fn parse_assign_open(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Ident)?.text;
        self.expect_rizz()?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign { name, value })
    }

    fn expect_rizz(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Rizz) {
            self.advance();
            Ok(())
        } else {
            let tok = self.current();
            Err(ParseError::ExpectedRizz {
                text: tok.text.clone(),
                line: tok.line,
            })
        }
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let stmt = self.parse_var_decl_open()?;
        self.expect(TokenKind::Ohio)?;
        Ok(stmt)
    }

    fn parse_assign(&mut self) -> Result<Stmt, ParseError> {
        let stmt = self.parse_assign_open()?;
        self.expect(TokenKind::Ohio)?;
        Ok(stmt)
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Gyatt)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Ohio)?;
        Ok(Stmt::Print(value))
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Cap)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let then_block = self.parse_block()?;

        let else_block = if self.check(TokenKind::Nocap) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Bussin)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Stmt::While { condition, body })
    }

    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Gyatfor)?;
        self.expect(TokenKind::LParen)?;

        let init = match self.current().kind {
            TokenKind::Skibidi => Some(Box::new(self.parse_var_decl_open()?)),
            TokenKind::Ident => Some(Box::new(self.parse_assign_open()?)),
            _ => None,
        };
        self.expect(TokenKind::Semicolon)?;

        let condition = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;

        let post = if self.check(TokenKind::Ident) {
            Some(Box::new(self.parse_assign_open()?))
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;
        Ok(Stmt::For {
            init,
            condition,
            post,
            body,
        })
    }

    fn parse_fn_def(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Sigma)?;
        let name = self.expect(TokenKind::Ident)?.text;
        self.expect(TokenKind::LParen)?;

        let mut params = Vec::new();
        if self.check(TokenKind::Ident) {
            params.push(self.advance().text);
            while self.check(TokenKind::Comma) {
                self.advance();
                params.push(self.expect(TokenKind::Ident)?.text);
            }
        }
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;
        Ok(Stmt::FnDef(FnDef { name, params, body }))
    }

    fn parse_call_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Beta)?;
        let name = self.expect(TokenKind::Ident)?.text;
        let args = self.parse_call_args()?;
        self.expect(TokenKind::Ohio)?;
        Ok(Stmt::Call { name, args })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Alpha)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Ohio)?;
        Ok(Stmt::Return(value))
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_eof() {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(statements)
    }
}
