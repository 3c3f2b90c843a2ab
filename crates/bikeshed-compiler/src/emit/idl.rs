//! WebIDL serializer.

use bikeshed_core::{
    ArgumentList, Container, Definition, ExtAttrList, Iterable, IterableKind, Member,
};

use crate::analyze::LinkedModel;

/// Configuration for WebIDL emission.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member indentation width, in spaces.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }
}

pub struct Emitter {
    config: Config,
    output: String,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Emit every definition of the linked model, in model order.
    pub fn emit(self, model: &LinkedModel) -> String {
        self.emit_definitions(model.definitions())
    }

    pub fn emit_definitions<'a>(
        mut self,
        definitions: impl IntoIterator<Item = &'a Definition>,
    ) -> String {
        for (i, def) in definitions.into_iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.emit_definition(def);
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    fn emit_definition(&mut self, def: &Definition) {
        if !def.ext_attrs().is_empty() {
            self.output
                .push_str(&format!("{}\n", ExtAttrList(def.ext_attrs())));
        }

        match def {
            Definition::Container(c) => self.emit_container(c),
            Definition::Enum(e) => {
                self.output.push_str(&format!("enum {} {{\n", e.name));
                let pad = self.pad();
                for (i, value) in e.values.iter().enumerate() {
                    let sep = if i + 1 < e.values.len() { "," } else { "" };
                    self.output.push_str(&format!("{pad}\"{value}\"{sep}\n"));
                }
                self.output.push_str("};\n");
            }
            Definition::Typedef(t) => {
                self.output
                    .push_str(&format!("typedef {} {};\n", t.ty, t.name));
            }
            Definition::Callback(c) => {
                self.output.push_str(&format!(
                    "callback {} = {} ({});\n",
                    c.name,
                    c.ret,
                    ArgumentList(&c.args)
                ));
            }
            Definition::Includes(i) => {
                self.output
                    .push_str(&format!("{} includes {};\n", i.target, i.mixin));
            }
        }
    }

    fn emit_container(&mut self, c: &Container) {
        if c.partial {
            self.output.push_str("partial ");
        }
        self.output
            .push_str(&format!("{} {}", c.kind.keyword(), c.name));
        if let Some(parent) = &c.inheritance {
            self.output.push_str(&format!(" : {parent}"));
        }
        self.output.push_str(" {\n");
        let pad = self.pad();
        for member in &c.members {
            self.output
                .push_str(&format!("{pad}{}\n", render_member(member)));
        }
        self.output.push_str("};\n");
    }

    fn pad(&self) -> String {
        " ".repeat(self.config.indent)
    }
}

/// One member, without indentation or newline.
pub fn render_member(member: &Member) -> String {
    let mut out = String::new();
    let attrs = member.ext_attrs();
    if !attrs.is_empty() {
        out.push_str(&format!("{} ", ExtAttrList(attrs)));
    }

    match member {
        Member::Const(c) => {
            out.push_str(&format!("const {} {} = {};", c.ty, c.name, c.value));
        }
        Member::Attribute(a) => {
            if a.is_static {
                out.push_str("static ");
            }
            if a.stringifier {
                out.push_str("stringifier ");
            }
            if a.inherit {
                out.push_str("inherit ");
            }
            if a.readonly {
                out.push_str("readonly ");
            }
            out.push_str(&format!("attribute {} {};", a.ty, a.name));
        }
        Member::Operation(o) => {
            if o.is_static {
                out.push_str("static ");
            }
            if let Some(special) = o.special {
                out.push_str(special.keyword());
                out.push(' ');
            }
            out.push_str(&format!("{} ", o.ret));
            if let Some(name) = &o.name {
                out.push_str(name);
            }
            out.push_str(&format!("({});", ArgumentList(&o.args)));
        }
        Member::Constructor(c) => {
            out.push_str(&format!("constructor({});", ArgumentList(&c.args)));
        }
        Member::Field(f) => {
            if f.required {
                out.push_str("required ");
            }
            out.push_str(&format!("{} {}", f.ty, f.name));
            if let Some(default) = &f.default {
                out.push_str(&format!(" = {default}"));
            }
            out.push(';');
        }
        Member::Iterable(i) => render_iterable(&mut out, i),
        Member::Stringifier(_) => out.push_str("stringifier;"),
    }
    out
}

fn render_iterable(out: &mut String, i: &Iterable) {
    if i.readonly {
        out.push_str("readonly ");
    }
    out.push_str(match i.kind {
        IterableKind::Iterable => "iterable",
        IterableKind::AsyncIterable => "async iterable",
        IterableKind::Maplike => "maplike",
        IterableKind::Setlike => "setlike",
    });
    match &i.key {
        Some(key) => out.push_str(&format!("<{key}, {}>", i.value)),
        None => out.push_str(&format!("<{}>", i.value)),
    }
    if !i.args.is_empty() {
        out.push_str(&format!("({})", ArgumentList(&i.args)));
    }
    out.push(';');
}
