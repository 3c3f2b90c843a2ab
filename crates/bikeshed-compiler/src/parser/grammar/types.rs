use bikeshed_core::{ConstValue, DefaultValue, Primitive, Type};

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::{PResult, Parser};
use crate::parser::lexer::{Token, TokenKind, token_text};

impl Parser<'_> {
    /// Type with optional leading extended attributes and trailing `?`.
    pub(crate) fn ty(&mut self) -> PResult<Type> {
        let ext_attrs = self.ext_attr_list()?;
        let ty = if self.at(TokenKind::ParenOpen) {
            self.union()?
        } else {
            self.single_type()?
        };
        let ty = if self.eat(TokenKind::Question) {
            Type::Nullable(Box::new(ty))
        } else {
            ty
        };
        if ext_attrs.is_empty() {
            Ok(ty)
        } else {
            Ok(Type::Annotated(ext_attrs, Box::new(ty)))
        }
    }

    fn union(&mut self) -> PResult<Type> {
        self.expect(TokenKind::ParenOpen, "`(`")?;
        let mut members = vec![self.ty()?];
        while self.eat_word("or") {
            members.push(self.ty()?);
        }
        if members.len() < 2 {
            return Err(self.unexpected("`or`"));
        }
        self.expect(TokenKind::ParenClose, "`)`")?;
        Ok(Type::Union(members))
    }

    fn single_type(&mut self) -> PResult<Type> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.error(DiagnosticKind::ExpectedType));
        }
        let word = self.current_text();

        if matches!(word, "sequence" | "FrozenArray" | "ObservableArray" | "Promise") {
            self.bump();
            self.expect(TokenKind::AngleOpen, "`<`")?;
            let inner = Box::new(self.ty()?);
            self.expect(TokenKind::AngleClose, "`>`")?;
            return Ok(match word {
                "sequence" => Type::Sequence(inner),
                "FrozenArray" => Type::FrozenArray(inner),
                "ObservableArray" => Type::ObservableArray(inner),
                _ => Type::Promise(inner),
            });
        }

        match word {
            "any" => {
                self.bump();
                Ok(Type::Any)
            }
            "record" => self.record(),
            "unsigned" => {
                self.bump();
                if self.eat_word("short") {
                    Ok(Type::Primitive(Primitive::UnsignedShort))
                } else {
                    self.expect_word("long")?;
                    if self.eat_word("long") {
                        Ok(Type::Primitive(Primitive::UnsignedLongLong))
                    } else {
                        Ok(Type::Primitive(Primitive::UnsignedLong))
                    }
                }
            }
            "unrestricted" => {
                self.bump();
                if self.eat_word("float") {
                    Ok(Type::Primitive(Primitive::UnrestrictedFloat))
                } else {
                    self.expect_word("double")?;
                    Ok(Type::Primitive(Primitive::UnrestrictedDouble))
                }
            }
            "long" => {
                self.bump();
                if self.eat_word("long") {
                    Ok(Type::Primitive(Primitive::LongLong))
                } else {
                    Ok(Type::Primitive(Primitive::Long))
                }
            }
            _ => match Primitive::from_word(word) {
                Some(primitive) => {
                    self.bump();
                    Ok(Type::Primitive(primitive))
                }
                None => Ok(Type::Named(self.identifier()?)),
            },
        }
    }

    fn record(&mut self) -> PResult<Type> {
        self.bump();
        self.expect(TokenKind::AngleOpen, "`<`")?;
        let key_start = self.start();
        let key = self.ty()?;
        let key_is_string =
            matches!(key.unannotated(), Type::Primitive(p) if p.is_string());
        if !key_is_string {
            let span = self.span_from(key_start);
            let detail = key.to_string();
            return Err(self.error_at(DiagnosticKind::InvalidRecordKey, span, &detail));
        }
        self.expect(TokenKind::Comma, "`,`")?;
        let value = self.ty()?;
        self.expect(TokenKind::AngleClose, "`>`")?;
        Ok(Type::Record(Box::new(key), Box::new(value)))
    }

    pub(crate) fn const_value(&mut self) -> PResult<ConstValue> {
        let value = match self.current() {
            Some(TokenKind::Integer) => ConstValue::Integer(self.current_text().to_string()),
            Some(TokenKind::Decimal) => ConstValue::Decimal(self.current_text().to_string()),
            Some(TokenKind::Identifier) => match self.current_text() {
                "true" => ConstValue::Boolean(true),
                "false" => ConstValue::Boolean(false),
                "Infinity" => ConstValue::Infinity,
                "-Infinity" => ConstValue::NegativeInfinity,
                "NaN" => ConstValue::NaN,
                _ => return Err(self.error(DiagnosticKind::ExpectedValue)),
            },
            Some(TokenKind::Minus) if self.nth_is_word(1, "Infinity") => {
                self.bump();
                ConstValue::NegativeInfinity
            }
            _ => return Err(self.error(DiagnosticKind::ExpectedValue)),
        };
        self.bump();
        Ok(value)
    }

    pub(crate) fn default_value(&mut self) -> PResult<DefaultValue> {
        if self.at(TokenKind::String) {
            let token = self.bump();
            return Ok(DefaultValue::String(self.string_value(&token)));
        }
        if self.eat(TokenKind::BracketOpen) {
            self.expect(TokenKind::BracketClose, "`]`")?;
            return Ok(DefaultValue::EmptySequence);
        }
        if self.eat(TokenKind::BraceOpen) {
            self.expect(TokenKind::BraceClose, "`}`")?;
            return Ok(DefaultValue::EmptyDictionary);
        }
        if self.eat_word("null") {
            return Ok(DefaultValue::Null);
        }
        if self.eat_word("undefined") {
            return Ok(DefaultValue::Undefined);
        }
        Ok(DefaultValue::Const(self.const_value()?))
    }

    /// Contents of a string token, without the quotes.
    pub(crate) fn string_value(&self, token: &Token) -> String {
        let text = token_text(self.source, self.base, token);
        text[1..text.len() - 1].to_string()
    }
}
