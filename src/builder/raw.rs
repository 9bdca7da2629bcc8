//! Raw SQL fragments and identifier escaping.
//!
//! Templates use `??` for an identifier binding and `?` for a value binding.
//! Identifiers are escaped and inlined when the fragment is built; values stay
//! as placeholders and travel alongside the SQL text. `\?` produces a literal
//! question mark.

use crate::builder::value::Value;
use crate::error::{Error, Result};

/// PostgreSQL identifier escaping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Escaper;

impl Escaper {
    /// Escape `ident` as a (possibly dotted, possibly aliased) identifier.
    ///
    /// `products.description` becomes `"products"."description"`,
    /// `description as d` becomes `"description" as "d"` and `*` is left bare.
    pub fn identifier(&self, ident: &str) -> Result<String> {
        let trimmed = ident.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument(
                "identifier",
                "identifier must not be empty",
            ));
        }

        // ASCII lowercasing keeps byte offsets aligned with `trimmed`.
        let lower = trimmed.to_ascii_lowercase();
        if let Some(pos) = lower.find(" as ") {
            let column = &trimmed[..pos];
            let alias = trimmed[pos + 4..].trim();
            return Ok(format!(
                "{} as {}",
                self.identifier(column)?,
                quote_segment(alias)
            ));
        }

        Ok(trimmed
            .split('.')
            .map(quote_segment)
            .collect::<Vec<_>>()
            .join("."))
    }
}

fn quote_segment(segment: &str) -> String {
    if segment == "*" {
        return segment.to_string();
    }
    format!("\"{}\"", segment.replace('"', "\"\""))
}

/// A binding supplied to a raw template.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Ident(String),
    Value(Value),
}

impl Binding {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn value(v: impl Into<Value>) -> Self {
        Self::Value(v.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Sql(String),
    Param,
}

/// A parsed raw SQL fragment with its value bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    segments: Vec<Segment>,
    bindings: Vec<Value>,
}

impl Raw {
    pub fn new(escaper: &Escaper, template: &str, bindings: Vec<Binding>) -> Result<Self> {
        let mut supplied = bindings.into_iter();
        let mut segments = Vec::new();
        let mut values = Vec::new();
        let mut text = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'?') => {
                    chars.next();
                    text.push('?');
                }
                '?' if chars.peek() == Some(&'?') => {
                    chars.next();
                    match supplied.next() {
                        Some(Binding::Ident(name)) => text.push_str(&escaper.identifier(&name)?),
                        Some(Binding::Value(_)) => {
                            return Err(Error::binding_mismatch(
                                template,
                                "value bound to an identifier placeholder",
                            ));
                        }
                        None => {
                            return Err(Error::binding_mismatch(
                                template,
                                "missing identifier binding",
                            ));
                        }
                    }
                }
                '?' => match supplied.next() {
                    Some(Binding::Value(v)) => {
                        if !text.is_empty() {
                            segments.push(Segment::Sql(std::mem::take(&mut text)));
                        }
                        segments.push(Segment::Param);
                        values.push(v);
                    }
                    Some(Binding::Ident(name)) => {
                        return Err(Error::binding_mismatch(
                            template,
                            format!("identifier `{name}` bound to a value placeholder"),
                        ));
                    }
                    None => {
                        return Err(Error::binding_mismatch(template, "missing value binding"));
                    }
                },
                other => text.push(other),
            }
        }

        let extra = supplied.count();
        if extra > 0 {
            return Err(Error::binding_mismatch(
                template,
                format!("{extra} unused binding(s)"),
            ));
        }
        if !text.is_empty() {
            segments.push(Segment::Sql(text));
        }

        Ok(Self {
            segments,
            bindings: values,
        })
    }

    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }

    /// SQL text with `?` placeholders.
    pub fn sql(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, &mut || "?".to_string());
        out
    }

    pub(crate) fn render(&self, out: &mut String, placeholder: &mut dyn FnMut() -> String) {
        for segment in &self.segments {
            match segment {
                Segment::Sql(s) => out.push_str(s),
                Segment::Param => out.push_str(&placeholder()),
            }
        }
    }
}
