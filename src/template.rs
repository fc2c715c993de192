//! Text templating with `{filename}` and `{content}` placeholders.
//!
//! A template is parsed once per run into literal and placeholder segments
//! and the same instance is applied to every file. There is no escaping
//! and no recursive expansion: braces inside substituted content are never
//! re-interpreted.

use crate::constants::{DEFAULT_TEMPLATE, PLACEHOLDER_CONTENT, PLACEHOLDER_FILENAME};
use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    FileName,
    Content,
}

/// A validated template, ready to render any number of files.
///
/// # Examples
///
/// ```
/// use catfiles::template::Template;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let template = Template::parse("F:{filename};C:{content}")?;
/// assert_eq!(template.render("a.txt", "hello"), "F:a.txt;C:hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses template text, validating every placeholder.
    ///
    /// Only `{filename}` and `{content}` are recognized. An unknown
    /// placeholder name or an unterminated `{` is a fatal template error,
    /// since every file would fail to render identically. A lone `}` is
    /// treated as literal text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }
            let mut name = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                return Err(Error::Template(format!(
                    "unterminated placeholder '{{{name}'"
                )));
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            match name.as_str() {
                PLACEHOLDER_FILENAME => segments.push(Segment::FileName),
                PLACEHOLDER_CONTENT => segments.push(Segment::Content),
                other => {
                    return Err(Error::Template(format!("unknown placeholder '{{{other}}}'")))
                }
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Loads a template file, or the built-in default when `path` is `None`.
    ///
    /// An explicitly configured file that cannot be read is a fatal
    /// template error; silently falling back would hide a typoed flag.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| {
                    Error::Template(format!("cannot read '{}': {e}", path.display()))
                })?;
                Self::parse(&text)
            }
            None => Self::parse(DEFAULT_TEMPLATE),
        }
    }

    /// Substitutes both placeholders everywhere they occur.
    pub fn render(&self, display_path: &str, content: &str) -> String {
        let capacity = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.len(),
                Segment::FileName => display_path.len(),
                Segment::Content => content.len(),
            })
            .sum();
        let mut out = String::with_capacity(capacity);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::FileName => out.push_str(display_path),
                Segment::Content => out.push_str(content),
            }
        }
        out
    }
}
