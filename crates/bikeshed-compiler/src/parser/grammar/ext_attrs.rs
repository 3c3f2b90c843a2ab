use bikeshed_core::{ExtAttrValue, ExtendedAttribute};

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::{PResult, Parser};
use crate::parser::lexer::TokenKind;

impl Parser<'_> {
    /// `[A, B=c, D(long x)]`, or nothing.
    pub(crate) fn ext_attr_list(&mut self) -> PResult<Vec<ExtendedAttribute>> {
        let mut attrs = Vec::new();
        if !self.eat(TokenKind::BracketOpen) {
            return Ok(attrs);
        }
        loop {
            attrs.push(self.ext_attr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::BracketClose, "`]`")?;
        Ok(attrs)
    }

    fn ext_attr(&mut self) -> PResult<ExtendedAttribute> {
        let name = self.identifier()?;
        let rhs = if self.eat(TokenKind::Equals) {
            Some(self.ext_attr_value()?)
        } else {
            None
        };

        let takes_args = matches!(rhs, None | Some(ExtAttrValue::Identifier(_)));
        let args = if takes_args && self.at(TokenKind::ParenOpen) {
            Some(self.arguments()?)
        } else {
            None
        };

        Ok(ExtendedAttribute { name, rhs, args })
    }

    fn ext_attr_value(&mut self) -> PResult<ExtAttrValue> {
        match self.current() {
            Some(TokenKind::Identifier) => Ok(ExtAttrValue::Identifier(self.identifier()?)),
            Some(TokenKind::String) => {
                let token = self.bump();
                Ok(ExtAttrValue::String(self.string_value(&token)))
            }
            Some(TokenKind::Integer) => {
                let text = self.current_text().to_string();
                self.bump();
                Ok(ExtAttrValue::Integer(text))
            }
            Some(TokenKind::Decimal) => {
                let text = self.current_text().to_string();
                self.bump();
                Ok(ExtAttrValue::Decimal(text))
            }
            Some(TokenKind::Star) => {
                self.bump();
                Ok(ExtAttrValue::Wildcard)
            }
            Some(TokenKind::ParenOpen) => {
                self.bump();
                let mut ids = vec![self.identifier()?];
                while self.eat(TokenKind::Comma) {
                    ids.push(self.identifier()?);
                }
                self.expect(TokenKind::ParenClose, "`)`")?;
                Ok(ExtAttrValue::IdentifierList(ids))
            }
            _ => Err(self.error(DiagnosticKind::ExpectedValue)),
        }
    }
}
