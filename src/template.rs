//! Placeholder expansion for templated command lines.
//!
//! Templates are plain strings containing `{name}` placeholders. Doubled
//! braces (`{{`, `}}`) produce literal braces.
//!
//! # Example
//!
//! ```
//! use tent::context::{binding, ContextStack};
//! use tent::template::resolve;
//!
//! let ctx = ContextStack::new(binding("session_name", "acme"));
//! let line = resolve("attach -t {session_name}", &ctx, &Default::default()).unwrap();
//! assert_eq!(line, "attach -t acme");
//! ```

use crate::context::{Bindings, ContextStack};
use crate::error::{Result, TentError};

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text.
    Literal(String),
    /// Placeholder reference: {name}.
    Placeholder(String),
}

/// Parse a template into literal and placeholder segments.
///
/// # Errors
///
/// Returns `TemplateSyntax` for an unterminated `{`.
pub fn parse_template(input: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(TentError::TemplateSyntax {
                                message: format!("unterminated placeholder in '{}'", input),
                            })
                        }
                    }
                }
                segments.push(Segment::Placeholder(name));
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                literal.push('}');
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Expand every placeholder in `template` against the current context
/// frame plus `extra` bindings (extra wins on collision).
///
/// Resolution is a pure function of its inputs; the context is never
/// mutated.
///
/// # Errors
///
/// Returns `MissingBinding` if a placeholder has no binding. A missing
/// binding is a caller configuration bug and must surface, never be
/// substituted with an empty string.
pub fn resolve(template: &str, ctx: &ContextStack, extra: &Bindings) -> Result<String> {
    let mut resolved = String::new();

    for segment in parse_template(template)? {
        match segment {
            Segment::Literal(text) => resolved.push_str(&text),
            Segment::Placeholder(name) => {
                let value = extra.get(&name).or_else(|| ctx.get(&name)).ok_or_else(|| {
                    TentError::MissingBinding { name: name.clone() }
                })?;
                resolved.push_str(&value.to_string());
            }
        }
    }

    Ok(resolved)
}
