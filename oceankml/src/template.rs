//! Brace-style URL templates, e.g.
//! `http://host/cruise/CTD/CRUISE-{:05d}_CTD.png`.
//!
//! Every placeholder is replaced by the record index. Accepted forms
//! are `{}`, `{0}`, optionally followed by a spec of the form
//! `:[0][width][d]`. `{{` and `}}` produce literal braces.

use crate::OceanError;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Index { width: usize, zero_pad: bool },
}

impl Template {
    pub fn parse(raw: &str) -> Result<Self, OceanError> {
        let err = |reason: &str| OceanError::Template(raw.to_owned(), reason.to_owned());

        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut auto_fields = 0;
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(err("single '}' encountered")),
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(err("nested replacement fields")),
                            Some(c) => field.push(c),
                            None => return Err(err("unclosed '{'")),
                        }
                    }
                    let (name, spec) = field.split_once(':').unwrap_or((&field, ""));
                    match name {
                        "" => {
                            if auto_fields > 0 {
                                return Err(err("only one record index is available"));
                            }
                            auto_fields += 1;
                        }
                        "0" => (),
                        other => {
                            return Err(err(&format!("unknown replacement field {other:?}")));
                        }
                    }
                    let (width, zero_pad) =
                        parse_spec(spec).ok_or_else(|| err(&format!("bad format spec {spec:?}")))?;
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(Part::Index { width, zero_pad });
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_owned(),
            parts,
        })
    }

    /// Returns the template with every placeholder replaced by `index`.
    pub fn render(&self, index: i64) -> String {
        let mut out = String::with_capacity(self.raw.len() + 8);
        for part in &self.parts {
            match *part {
                Part::Literal(ref s) => out.push_str(s),
                Part::Index {
                    width,
                    zero_pad: true,
                } => {
                    let _ = write!(out, "{index:0width$}");
                }
                Part::Index {
                    width,
                    zero_pad: false,
                } => {
                    let _ = write!(out, "{index:>width$}");
                }
            }
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Parses `[0][width][d]`.
fn parse_spec(spec: &str) -> Option<(usize, bool)> {
    let spec = spec.strip_suffix('d').unwrap_or(spec);
    if spec.is_empty() {
        return Some((0, false));
    }
    if !spec.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let zero_pad = spec.starts_with('0');
    let width = spec.parse().ok()?;
    Some((width, zero_pad))
}
