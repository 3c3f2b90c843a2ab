//! Declaration rendering.

use bikeshed_core::{
    Callback, ConstValue, Container, ContainerKind, Definition, Enum, Iterable, IterableKind,
    Member, Operation, Special, Type, Typedef, utils,
};

use super::emitter::{Emitter, Scope};
use super::ts_type::TsType;

/// Extended attribute that suppresses the interface object.
const NO_INTERFACE_OBJECT: &str = "LegacyNoInterfaceObject";

impl Emitter<'_> {
    /// Render one definition as zero or more top-level blocks.
    pub(super) fn render_definition(&self, def: &Definition, scope: Scope) -> Vec<String> {
        match def {
            Definition::Container(c) => match c.kind {
                ContainerKind::Interface => {
                    let mut blocks = vec![self.render_interface(c, scope)];
                    if self.model.is_global(&c.name) && !def.has_ext_attr(NO_INTERFACE_OBJECT) {
                        blocks.push(self.render_interface_object(c, scope));
                    }
                    blocks
                }
                ContainerKind::CallbackInterface | ContainerKind::Dictionary => {
                    vec![self.render_interface(c, scope)]
                }
                ContainerKind::Namespace => vec![self.render_namespace(c, scope)],
                ContainerKind::Mixin => Vec::new(),
            },
            Definition::Enum(e) => vec![self.render_enum(e, scope)],
            Definition::Typedef(t) => vec![self.render_typedef(t, scope)],
            Definition::Callback(c) => vec![self.render_callback(c, scope)],
            Definition::Includes(_) => Vec::new(),
        }
    }

    fn render_interface(&self, c: &Container, scope: Scope) -> String {
        let mut header = format!("{}interface {}", scope.type_prefix(), c.name);
        if let Some(parent) = &c.inheritance {
            header.push_str(&format!(" extends {parent}"));
        }

        let mut lines = Vec::new();
        let branded = self.config.nominal
            && matches!(c.kind, ContainerKind::Interface | ContainerKind::Dictionary);
        if branded {
            lines.push(format!("{};", self.mapper().brand(&c.name)));
        }
        for member in &c.members {
            for line in self.render_member(member, &c.name) {
                if !lines.contains(&line) {
                    lines.push(line);
                }
            }
        }
        self.block(&header, &lines, "")
    }

    /// `var X: { prototype: X; new(...): X; ... }` for an exposed interface.
    fn render_interface_object(&self, c: &Container, scope: Scope) -> String {
        let mapper = self.mapper();
        let mut lines = vec![format!("prototype: {};", c.name)];

        for member in &c.members {
            match member {
                Member::Constructor(ctor) => lines.push(format!(
                    "new({}): {};",
                    mapper.parameters(&ctor.args).join(", "),
                    c.name
                )),
                Member::Const(k) => lines.push(format!(
                    "readonly {}: {};",
                    utils::property_name(&k.name),
                    self.const_type(&k.ty, &k.value)
                )),
                Member::Attribute(a) if a.is_static => {
                    let readonly = if a.readonly { "readonly " } else { "" };
                    lines.push(format!(
                        "{readonly}{}: {};",
                        utils::property_name(&a.name),
                        mapper.map(&a.ty)
                    ));
                }
                Member::Operation(o) if o.is_static => {
                    if let Some(line) = self.render_method(o) {
                        lines.push(line);
                    }
                }
                _ => {}
            }
        }

        let header = format!("{}var {}:", scope.value_prefix(), c.name);
        self.block(&header, &lines, ";")
    }

    fn render_namespace(&self, c: &Container, scope: Scope) -> String {
        let mapper = self.mapper();
        let mut lines = Vec::new();
        for member in &c.members {
            match member {
                Member::Const(k) => lines.push(format!(
                    "const {}: {};",
                    k.name,
                    self.const_type(&k.ty, &k.value)
                )),
                Member::Attribute(a) => {
                    let keyword = if a.readonly { "const" } else { "var" };
                    lines.push(format!("{keyword} {}: {};", a.name, mapper.map(&a.ty)));
                }
                Member::Operation(o) => {
                    if let Some(name) = &o.name {
                        lines.push(format!(
                            "function {name}({}): {};",
                            mapper.parameters(&o.args).join(", "),
                            mapper.map_return(&o.ret)
                        ));
                    }
                }
                _ => {}
            }
        }

        let header = format!("{}namespace {}", scope.value_prefix(), c.name);
        self.block(&header, &lines, "")
    }

    fn render_enum(&self, e: &Enum, scope: Scope) -> String {
        let literals = TsType::union(
            e.values
                .iter()
                .map(|v| TsType::StringLiteral(utils::quote(v))),
        );
        let ty = if self.config.nominal {
            TsType::Intersection(vec![
                literals,
                TsType::Object(vec![self.mapper().brand(&e.name)]),
            ])
        } else {
            literals
        };
        format!("{}type {} = {ty};", scope.type_prefix(), e.name)
    }

    fn render_typedef(&self, t: &Typedef, scope: Scope) -> String {
        format!(
            "{}type {} = {};",
            scope.type_prefix(),
            t.name,
            self.mapper().map(&t.ty)
        )
    }

    fn render_callback(&self, c: &Callback, scope: Scope) -> String {
        let mapper = self.mapper();
        let ty = TsType::Function(
            mapper.parameters(&c.args),
            Box::new(mapper.map_return(&c.ret)),
        );
        format!("{}type {} = {ty};", scope.type_prefix(), c.name)
    }

    /// Instance-side lines for one member of an interface or dictionary.
    fn render_member(&self, member: &Member, owner: &str) -> Vec<String> {
        let mapper = self.mapper();
        match member {
            Member::Const(k) => vec![format!(
                "readonly {}: {};",
                utils::property_name(&k.name),
                self.const_type(&k.ty, &k.value)
            )],
            Member::Attribute(a) if a.is_static => Vec::new(),
            Member::Attribute(a) => {
                let readonly = if a.readonly { "readonly " } else { "" };
                let mut lines = vec![format!(
                    "{readonly}{}: {};",
                    utils::property_name(&a.name),
                    mapper.map(&a.ty)
                )];
                if a.stringifier {
                    lines.push(TO_STRING.to_string());
                }
                lines
            }
            Member::Operation(o) if o.is_static => Vec::new(),
            Member::Operation(o) => self.render_operation(o),
            Member::Constructor(_) => Vec::new(),
            Member::Field(f) => {
                let optional = if f.required { "" } else { "?" };
                vec![format!(
                    "{}{optional}: {};",
                    utils::property_name(&f.name),
                    mapper.map(&f.ty)
                )]
            }
            Member::Iterable(it) => self.render_iterable(it, owner),
            Member::Stringifier(_) => vec![TO_STRING.to_string()],
        }
    }

    fn render_operation(&self, o: &Operation) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(line) = self.render_method(o) {
            lines.push(line);
        }
        match (o.special, &o.name) {
            (Some(Special::Stringifier), _) => lines.push(TO_STRING.to_string()),
            (Some(Special::Getter), None) => {
                if let Some(key) = o.args.first() {
                    let key_type = match self.mapper().map(&key.ty) {
                        TsType::Keyword("number") => "number",
                        _ => "string",
                    };
                    lines.push(format!(
                        "[{}: {key_type}]: {};",
                        utils::parameter_name(&key.name),
                        self.mapper().map(&o.ret)
                    ));
                }
            }
            _ => {}
        }
        lines
    }

    /// `name(params): ret;` for named operations.
    fn render_method(&self, o: &Operation) -> Option<String> {
        let name = o.name.as_ref()?;
        let mapper = self.mapper();
        Some(format!(
            "{}({}): {};",
            utils::property_name(name),
            mapper.parameters(&o.args).join(", "),
            mapper.map_return(&o.ret)
        ))
    }

    fn render_iterable(&self, it: &Iterable, owner: &str) -> Vec<String> {
        let mapper = self.mapper();
        let value = mapper.map(&it.value);
        let key = match &it.key {
            Some(key) => mapper.map(key),
            None if it.kind == IterableKind::Setlike => value.clone(),
            None => TsType::Keyword("number"),
        };
        let pair = TsType::Tuple(vec![key.clone(), value.clone()]);
        let iter = |item: &TsType| TsType::generic("IterableIterator", vec![item.clone()]);
        let for_each = format!(
            "forEach(callbackfn: (value: {value}, key: {key}, parent: {owner}) => void, thisArg?: any): void;"
        );

        let mut lines = Vec::new();
        match it.kind {
            IterableKind::Iterable => {
                let item = if it.key.is_some() { &pair } else { &value };
                lines.push(format!("[Symbol.iterator](): {};", iter(item)));
                lines.push(format!("entries(): {};", iter(&pair)));
                lines.push(format!("keys(): {};", iter(&key)));
                lines.push(format!("values(): {};", iter(&value)));
                lines.push(for_each);
            }
            IterableKind::AsyncIterable => {
                let params = mapper.parameters(&it.args).join(", ");
                let async_iter =
                    |item: &TsType| TsType::generic("AsyncIterableIterator", vec![item.clone()]);
                let item = if it.key.is_some() { &pair } else { &value };
                lines.push(format!(
                    "[Symbol.asyncIterator]({params}): {};",
                    async_iter(item)
                ));
                if it.key.is_some() {
                    lines.push(format!("entries({params}): {};", async_iter(&pair)));
                    lines.push(format!("keys({params}): {};", async_iter(&key)));
                }
                lines.push(format!("values({params}): {};", async_iter(&value)));
            }
            IterableKind::Maplike => {
                lines.push("readonly size: number;".to_string());
                lines.push(format!("[Symbol.iterator](): {};", iter(&pair)));
                lines.push(format!("entries(): {};", iter(&pair)));
                lines.push(format!("keys(): {};", iter(&key)));
                lines.push(format!("values(): {};", iter(&value)));
                lines.push(for_each);
                let maybe = TsType::union([value.clone(), TsType::Keyword("undefined")]);
                lines.push(format!("get(key: {key}): {maybe};"));
                lines.push(format!("has(key: {key}): boolean;"));
                if !it.readonly {
                    lines.push(format!("set(key: {key}, value: {value}): this;"));
                    lines.push(format!("delete(key: {key}): boolean;"));
                    lines.push("clear(): void;".to_string());
                }
            }
            IterableKind::Setlike => {
                lines.push("readonly size: number;".to_string());
                lines.push(format!("[Symbol.iterator](): {};", iter(&value)));
                lines.push(format!("entries(): {};", iter(&pair)));
                lines.push(format!("keys(): {};", iter(&value)));
                lines.push(format!("values(): {};", iter(&value)));
                lines.push(for_each);
                lines.push(format!("has(value: {value}): boolean;"));
                if !it.readonly {
                    lines.push(format!("add(value: {value}): this;"));
                    lines.push(format!("delete(value: {value}): boolean;"));
                    lines.push("clear(): void;".to_string());
                }
            }
        }
        lines
    }

    /// Literal type for integer and boolean constants, mapped type otherwise.
    fn const_type(&self, ty: &Type, value: &ConstValue) -> TsType {
        match value {
            ConstValue::Boolean(b) => TsType::Literal(b.to_string()),
            ConstValue::Integer(_) => match value.as_integer() {
                Some(n) => TsType::Literal(n.to_string()),
                None => self.mapper().map(ty),
            },
            _ => self.mapper().map(ty),
        }
    }

    /// `header {` + indented lines + `}` + `terminator`.
    fn block(&self, header: &str, lines: &[String], terminator: &str) -> String {
        if lines.is_empty() {
            return format!("{header} {{}}{terminator}");
        }
        let mut out = format!("{header} {{\n");
        for line in lines {
            out.push_str(&self.config.indent);
            out.push_str(line);
            out.push('\n');
        }
        out.push('}');
        out.push_str(terminator);
        out
    }
}

const TO_STRING: &str = "toString(): string;";
