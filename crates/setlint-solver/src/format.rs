//! Type formatting: the checker's display rendering of a `TypeId`.
//!
//! Output follows the TypeScript checker's `typeToString` conventions closely
//! enough that rendered generic names (`Set<number>`) match what editors show.

use crate::intern::TypeInterner;
use crate::types::*;
use std::fmt::Write;

/// Nesting beyond this renders as `...`.
const MAX_FORMAT_DEPTH: u32 = 32;

/// Renders types as TypeScript syntax.
///
/// ```
/// use setlint_solver::{TypeFormatter, TypeId, TypeInterner};
/// let interner = TypeInterner::new();
/// let set = interner.application("Set", vec![TypeId::NUMBER]);
/// assert_eq!(TypeFormatter::new(&interner).format(set), "Set<number>");
/// ```
pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeFormatter { interner }
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, type_id, 0);
        out
    }

    fn write_type(&self, out: &mut String, type_id: TypeId, depth: u32) {
        if depth > MAX_FORMAT_DEPTH {
            out.push_str("...");
            return;
        }

        let Some(data) = self.interner.lookup(type_id) else {
            out.push_str("any");
            return;
        };

        match data {
            TypeData::Intrinsic(kind) => out.push_str(kind.name()),
            // Errors display as `any`, like unresolved types in the checker.
            TypeData::Error => out.push_str("any"),
            TypeData::Literal(literal) => self.write_literal(out, &literal),
            TypeData::Union(list) => {
                let members = self.interner.type_list(list);
                self.write_joined(out, &members, " | ", depth, |data| {
                    matches!(data, TypeData::Intersection(_))
                });
            }
            TypeData::Intersection(list) => {
                let members = self.interner.type_list(list);
                self.write_joined(out, &members, " & ", depth, |data| {
                    matches!(data, TypeData::Union(_))
                });
            }
            TypeData::TypeParameter(info) => out.push_str(&self.interner.resolve_atom(info.name)),
            TypeData::Reference(name) => out.push_str(&self.interner.resolve_atom(name)),
            TypeData::Application(app_id) => {
                let app = self.interner.type_application(app_id);
                out.push_str(&self.interner.resolve_atom(app.base));
                if !app.args.is_empty() {
                    out.push('<');
                    for (i, &arg) in app.args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, arg, depth + 1);
                    }
                    out.push('>');
                }
            }
            TypeData::Array(element) => {
                let needs_parens = matches!(
                    self.interner.lookup(element),
                    Some(TypeData::Union(_) | TypeData::Intersection(_))
                );
                if needs_parens {
                    out.push('(');
                }
                self.write_type(out, element, depth + 1);
                if needs_parens {
                    out.push(')');
                }
                out.push_str("[]");
            }
            TypeData::Object(shape_id) => {
                let shape = self.interner.object_shape(shape_id);
                if shape.properties.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{ ");
                for prop in &shape.properties {
                    out.push_str(&self.interner.resolve_atom(prop.name));
                    if prop.optional {
                        out.push('?');
                    }
                    out.push_str(": ");
                    self.write_type(out, prop.type_id, depth + 1);
                    out.push_str("; ");
                }
                out.push('}');
            }
            TypeData::TemplateLiteral(list) => {
                out.push('`');
                for span in self.interner.template_list(list).iter() {
                    match *span {
                        TemplateSpan::Text(text) => {
                            out.push_str(&self.interner.resolve_atom(text));
                        }
                        TemplateSpan::Type(inner) => {
                            out.push_str("${");
                            self.write_type(out, inner, depth + 1);
                            out.push('}');
                        }
                    }
                }
                out.push('`');
            }
            TypeData::StringIntrinsic { kind, type_arg } => {
                out.push_str(kind.name());
                out.push('<');
                self.write_type(out, type_arg, depth + 1);
                out.push('>');
            }
        }
    }

    fn write_joined(
        &self,
        out: &mut String,
        members: &[TypeId],
        separator: &str,
        depth: u32,
        needs_parens: impl Fn(&TypeData) -> bool,
    ) {
        for (i, &member) in members.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            let parens = self
                .interner
                .lookup(member)
                .is_some_and(|data| needs_parens(&data));
            if parens {
                out.push('(');
            }
            self.write_type(out, member, depth + 1);
            if parens {
                out.push(')');
            }
        }
    }

    fn write_literal(&self, out: &mut String, literal: &LiteralValue) {
        match literal {
            LiteralValue::String(atom) => {
                out.push('"');
                for ch in self.interner.resolve_atom(*atom).chars() {
                    match ch {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        _ => out.push(ch),
                    }
                }
                out.push('"');
            }
            LiteralValue::Number(value) => out.push_str(&format_number(value.0)),
            LiteralValue::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
            LiteralValue::BigInt(digits) => {
                let _ = write!(out, "{}n", self.interner.resolve_atom(*digits));
            }
        }
    }
}

/// JavaScript `Number.prototype.toString` for the common cases.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == value.trunc() && value.abs() < 1e21 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
