use bikeshed_core::{
    Callback, Container, ContainerKind, Definition, Enum, ExtendedAttribute, Includes, Typedef,
};

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::{PResult, Parser};
use crate::parser::lexer::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_definitions(&mut self) -> PResult<Vec<Definition>> {
        let mut definitions = Vec::new();
        while !self.eof() {
            let start = self.start();
            let ext_attrs = self.ext_attr_list()?;
            definitions.push(self.definition(start, ext_attrs)?);
        }
        Ok(definitions)
    }

    fn definition(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Definition> {
        if self.eat_word("callback") {
            if self.eat_word("interface") {
                return self.container(start, ContainerKind::CallbackInterface, false, ext_attrs);
            }
            return self.callback(start, ext_attrs);
        }
        if self.eat_word("interface") {
            let kind = if self.eat_word("mixin") {
                ContainerKind::Mixin
            } else {
                ContainerKind::Interface
            };
            return self.container(start, kind, false, ext_attrs);
        }
        if self.eat_word("partial") {
            let kind = if self.eat_word("interface") {
                if self.eat_word("mixin") {
                    ContainerKind::Mixin
                } else {
                    ContainerKind::Interface
                }
            } else if self.eat_word("dictionary") {
                ContainerKind::Dictionary
            } else if self.eat_word("namespace") {
                ContainerKind::Namespace
            } else {
                return Err(self.error(DiagnosticKind::UnknownDefinition));
            };
            return self.container(start, kind, true, ext_attrs);
        }
        if self.eat_word("dictionary") {
            return self.container(start, ContainerKind::Dictionary, false, ext_attrs);
        }
        if self.eat_word("namespace") {
            return self.container(start, ContainerKind::Namespace, false, ext_attrs);
        }
        if self.eat_word("enum") {
            return self.enumeration(start, ext_attrs);
        }
        if self.eat_word("typedef") {
            return self.typedef(start, ext_attrs);
        }
        if self.at(TokenKind::Identifier) && self.nth_is_word(1, "includes") {
            return self.includes(start, ext_attrs);
        }
        Err(self.error(DiagnosticKind::UnknownDefinition))
    }

    fn container(
        &mut self,
        start: u32,
        kind: ContainerKind,
        partial: bool,
        ext_attrs: Vec<ExtendedAttribute>,
    ) -> PResult<Definition> {
        let name = self.identifier()?;

        let may_inherit = matches!(kind, ContainerKind::Interface | ContainerKind::Dictionary);
        let inheritance = if may_inherit && !partial && self.eat(TokenKind::Colon) {
            Some(self.identifier()?)
        } else {
            None
        };

        let open = self.expect(TokenKind::BraceOpen, "`{`")?;
        let mut members = Vec::new();
        while !self.at(TokenKind::BraceClose) {
            if self.eof() {
                return Err(self.error_at(
                    DiagnosticKind::UnclosedBrace,
                    open.span,
                    &format!("`{name}` body"),
                ));
            }
            members.push(self.member(kind)?);
        }
        self.expect(TokenKind::BraceClose, "`}`")?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Definition::Container(Container {
            kind,
            name,
            partial,
            inheritance,
            members,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn enumeration(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Definition> {
        let name = self.identifier()?;
        let open = self.expect(TokenKind::BraceOpen, "`{`")?;

        let mut values = Vec::new();
        while !self.at(TokenKind::BraceClose) {
            if self.eof() {
                return Err(self.error_at(
                    DiagnosticKind::UnclosedBrace,
                    open.span,
                    &format!("`{name}` values"),
                ));
            }
            let token = self.expect(TokenKind::String, "an enum value string")?;
            values.push(self.string_value(&token));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::BraceClose, "`}`")?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Definition::Enum(Enum {
            name,
            values,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn typedef(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Definition> {
        let ty = self.ty()?;
        let name = self.identifier()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Definition::Typedef(Typedef {
            name,
            ty,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn callback(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Definition> {
        let name = self.identifier()?;
        self.expect(TokenKind::Equals, "`=`")?;
        let ret = self.ty()?;
        let args = self.arguments()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Definition::Callback(Callback {
            name,
            ret,
            args,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn includes(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Definition> {
        let target = self.identifier()?;
        self.expect_word("includes")?;
        let mixin = self.identifier()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Definition::Includes(Includes {
            target,
            mixin,
            ext_attrs,
            span: self.span_from(start),
        }))
    }
}
