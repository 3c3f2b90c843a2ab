use bikeshed_core::{
    Argument, Attribute, Const, Constructor, ContainerKind, ExtendedAttribute, Field, Iterable,
    IterableKind, Member, Operation, Special, Stringifier,
};

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::{PResult, Parser};
use crate::parser::lexer::TokenKind;

/// Modifiers collected before an attribute or operation.
#[derive(Default)]
struct Qualifiers {
    is_static: bool,
    stringifier: bool,
    inherit: bool,
    readonly: bool,
}

impl Parser<'_> {
    pub(super) fn member(&mut self, kind: ContainerKind) -> PResult<Member> {
        let start = self.start();
        let ext_attrs = self.ext_attr_list()?;
        if kind == ContainerKind::Dictionary {
            return self.field(start, ext_attrs);
        }

        if self.eat_word("const") {
            return self.constant(start, ext_attrs);
        }
        if self.at_word("constructor") && self.nth(1) == Some(TokenKind::ParenOpen) {
            self.bump();
            let args = self.arguments()?;
            self.expect(TokenKind::Semicolon, "`;`")?;
            return Ok(Member::Constructor(Constructor {
                args,
                ext_attrs,
                span: self.span_from(start),
            }));
        }

        let mut quals = Qualifiers::default();
        if self.eat_word("static") {
            quals.is_static = true;
        } else if self.eat_word("stringifier") {
            if self.eat(TokenKind::Semicolon) {
                return Ok(Member::Stringifier(Stringifier {
                    ext_attrs,
                    span: self.span_from(start),
                }));
            }
            quals.stringifier = true;
        } else if self.eat_word("inherit") {
            quals.inherit = true;
        }

        if self.eat_word("readonly") {
            quals.readonly = true;
            if self.at_word("maplike") || self.at_word("setlike") {
                return self.iterable(start, true, ext_attrs);
            }
        }

        if self.eat_word("attribute") {
            return self.attribute(start, quals, ext_attrs);
        }
        if quals.readonly || quals.inherit {
            return Err(self.unexpected("`attribute`"));
        }

        if self.at_word("iterable")
            || self.at_word("maplike")
            || self.at_word("setlike")
            || (self.at_word("async") && self.nth_is_word(1, "iterable"))
        {
            return self.iterable(start, false, ext_attrs);
        }

        let special = if quals.stringifier {
            Some(Special::Stringifier)
        } else if self.eat_word("getter") {
            Some(Special::Getter)
        } else if self.eat_word("setter") {
            Some(Special::Setter)
        } else if self.eat_word("deleter") {
            Some(Special::Deleter)
        } else {
            None
        };
        self.operation(start, quals.is_static, special, ext_attrs)
    }

    fn constant(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Member> {
        let ty = self.ty()?;
        let name = self.identifier()?;
        self.expect(TokenKind::Equals, "`=`")?;
        let value = self.const_value()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Member::Const(Const {
            name,
            ty,
            value,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn attribute(
        &mut self,
        start: u32,
        quals: Qualifiers,
        ext_attrs: Vec<ExtendedAttribute>,
    ) -> PResult<Member> {
        let ty = self.ty()?;
        let name = self.identifier()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Member::Attribute(Attribute {
            name,
            ty,
            readonly: quals.readonly,
            is_static: quals.is_static,
            inherit: quals.inherit,
            stringifier: quals.stringifier,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn operation(
        &mut self,
        start: u32,
        is_static: bool,
        special: Option<Special>,
        ext_attrs: Vec<ExtendedAttribute>,
    ) -> PResult<Member> {
        let ret = self.ty()?;
        let name = if self.at(TokenKind::Identifier) {
            Some(self.identifier()?)
        } else {
            None
        };
        if name.is_none() && special.is_none() {
            return Err(self.error(DiagnosticKind::ExpectedIdentifier));
        }
        let args = self.arguments()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Member::Operation(Operation {
            name,
            ret,
            args,
            is_static,
            special,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn iterable(
        &mut self,
        start: u32,
        readonly: bool,
        ext_attrs: Vec<ExtendedAttribute>,
    ) -> PResult<Member> {
        let kind = if self.eat_word("iterable") {
            IterableKind::Iterable
        } else if self.eat_word("async") {
            self.expect_word("iterable")?;
            IterableKind::AsyncIterable
        } else if self.eat_word("maplike") {
            IterableKind::Maplike
        } else {
            self.expect_word("setlike")?;
            IterableKind::Setlike
        };

        self.expect(TokenKind::AngleOpen, "`<`")?;
        let first = self.ty()?;
        let (key, value) = match kind {
            IterableKind::Maplike => {
                self.expect(TokenKind::Comma, "`,`")?;
                (Some(first), self.ty()?)
            }
            IterableKind::Setlike => (None, first),
            IterableKind::Iterable | IterableKind::AsyncIterable => {
                if self.eat(TokenKind::Comma) {
                    (Some(first), self.ty()?)
                } else {
                    (None, first)
                }
            }
        };
        self.expect(TokenKind::AngleClose, "`>`")?;

        let args = if kind == IterableKind::AsyncIterable && self.at(TokenKind::ParenOpen) {
            self.arguments()?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Member::Iterable(Iterable {
            kind,
            readonly,
            key,
            value,
            args,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    fn field(&mut self, start: u32, ext_attrs: Vec<ExtendedAttribute>) -> PResult<Member> {
        let required = self.eat_word("required");
        let ty = self.ty()?;
        let name = self.identifier()?;
        let default = if self.eat(TokenKind::Equals) {
            Some(self.default_value()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "`;`")?;

        Ok(Member::Field(Field {
            name,
            ty,
            required,
            default,
            ext_attrs,
            span: self.span_from(start),
        }))
    }

    /// Parenthesized argument list.
    pub(super) fn arguments(&mut self) -> PResult<Vec<Argument>> {
        self.expect(TokenKind::ParenOpen, "`(`")?;
        let mut args = Vec::new();
        if self.eat(TokenKind::ParenClose) {
            return Ok(args);
        }
        loop {
            args.push(self.argument()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::ParenClose, "`)`")?;
        Ok(args)
    }

    fn argument(&mut self) -> PResult<Argument> {
        let ext_attrs = self.ext_attr_list()?;
        let optional = self.eat_word("optional");
        let ty = self.ty()?;
        let variadic = !optional && self.eat(TokenKind::Ellipsis);
        let name = self.identifier()?;
        let default = if optional && self.eat(TokenKind::Equals) {
            Some(self.default_value()?)
        } else {
            None
        };

        Ok(Argument {
            name,
            ty,
            optional,
            variadic,
            default,
            ext_attrs,
        })
    }
}
