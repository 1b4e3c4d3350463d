use std::fmt;

use crate::errors::MetadataError;

// @module: Syntax-level extraction of script metadata

/// A literal value carried by a leading declaration.
///
/// Only string literals and lists of string literals qualify; anything
/// else in a leading statement rejects the script. Values are obtained
/// purely from the source text, the script is never executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// A single string literal
    Str(String),
    /// A list of string literals
    List(Vec<String>),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Str(s) => f.write_str(s),
            MetaValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Metadata declared at the top of a script.
///
/// The first three top-level statements of an eligible script must be
/// literal declarations: the author (string or list of strings), the
/// creation date (free-form string, not validated as a calendar date)
/// and the description (string, commonly triple-quoted and multi-line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMetadata {
    /// Script author or authors
    pub author: MetaValue,
    /// Declared creation date, kept verbatim
    pub date: String,
    /// Free-form description, may span multiple lines
    pub description: String,
}

impl ScriptMetadata {
    /// Extract metadata from script source text.
    ///
    /// `file` is the script name used in error messages. Comments and
    /// blank lines before and between the declarations are skipped, as a
    /// syntax tree would skip them. Any deviation from the three-leading-
    /// literals contract fails with a [`MetadataError`].
    pub fn extract(file: &str, source: &str) -> Result<Self, MetadataError> {
        let mut scanner = Scanner::new(source);
        let mut values = Vec::with_capacity(3);

        while values.len() < 3 {
            scanner.skip_trivia();
            if scanner.eof() {
                break;
            }

            let index = values.len() + 1;
            let value = scanner.statement().map_err(|reason| MetadataError::NotALiteral {
                file: file.to_string(),
                index,
                reason,
            })?;
            values.push(value);
        }

        if values.len() < 3 {
            return Err(MetadataError::TooFewDeclarations {
                file: file.to_string(),
                found: values.len(),
            });
        }

        let description = values.pop().unwrap_or(MetaValue::Str(String::new()));
        let date = values.pop().unwrap_or(MetaValue::Str(String::new()));
        let author = values.pop().unwrap_or(MetaValue::Str(String::new()));

        let date = match date {
            MetaValue::Str(s) => s,
            MetaValue::List(_) => {
                return Err(MetadataError::WrongShape {
                    file: file.to_string(),
                    field: "date",
                    expected: "a string literal",
                });
            }
        };

        let description = match description {
            MetaValue::Str(s) => s,
            MetaValue::List(_) => {
                return Err(MetadataError::WrongShape {
                    file: file.to_string(),
                    field: "description",
                    expected: "a string literal",
                });
            }
        };

        Ok(ScriptMetadata {
            author,
            date,
            description,
        })
    }
}

/// Character-level scanner over the leading statements of a script.
///
/// Understands just enough surface syntax to evaluate literal
/// declarations: `name = <literal>` assignments and bare literal
/// expressions, where a literal is a quoted string (single, double or
/// triple quotes) or a bracketed list of strings.
struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        // A leading byte-order mark is not part of any statement
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Scanner {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Skip whitespace (including line breaks) and `#` comments
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += 1;
            } else if c == '#' {
                self.skip_to_line_end();
            } else {
                break;
            }
        }
    }

    /// Skip spaces and tabs, staying on the current line
    fn skip_inline_spaces(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.pos += 1;
        }
    }

    fn skip_to_line_end(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Parse one top-level statement and evaluate it to a literal
    fn statement(&mut self) -> Result<MetaValue, String> {
        let c = self.peek().unwrap_or_default();

        let value = if c == '_' || c.is_alphabetic() {
            self.identifier();
            self.skip_inline_spaces();
            match self.peek() {
                Some('=') if self.peek_at(1) != Some('=') => {
                    self.pos += 1;
                    self.skip_inline_spaces();
                    self.literal()?
                }
                _ => return Err("expected `= <literal>` after name".to_string()),
            }
        } else if c == '\'' || c == '"' || c == '[' {
            self.literal()?
        } else {
            return Err(format!("unexpected character `{}`", c));
        };

        self.end_of_statement()?;
        Ok(value)
    }

    fn identifier(&mut self) {
        while let Some(c) = self.peek() {
            if c == '_' || c.is_alphanumeric() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// After a literal, only spaces and an optional comment may follow
    /// on the same line
    fn end_of_statement(&mut self) -> Result<(), String> {
        self.skip_inline_spaces();
        match self.peek() {
            None | Some('\n') => Ok(()),
            Some('#') => {
                self.skip_to_line_end();
                Ok(())
            }
            Some('\r') => Ok(()),
            Some(c) => Err(format!("unexpected trailing `{}` after literal", c)),
        }
    }

    fn literal(&mut self) -> Result<MetaValue, String> {
        match self.peek() {
            Some('\'') | Some('"') => Ok(MetaValue::Str(self.string()?)),
            Some('[') => Ok(MetaValue::List(self.list()?)),
            Some(c) => Err(format!("`{}` does not start a string or list literal", c)),
            None => Err("unexpected end of file".to_string()),
        }
    }

    fn list(&mut self) -> Result<Vec<String>, String> {
        // consume `[`
        self.pos += 1;
        let mut items = Vec::new();

        loop {
            self.skip_trivia();
            match self.peek() {
                Some(']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some('\'') | Some('"') => {
                    items.push(self.string()?);
                    self.skip_trivia();
                    match self.peek() {
                        Some(',') => {
                            self.pos += 1;
                        }
                        Some(']') => {}
                        _ => return Err("expected `,` or `]` in list literal".to_string()),
                    }
                }
                Some(_) => return Err("list elements must be string literals".to_string()),
                None => return Err("unterminated list literal".to_string()),
            }
        }
    }

    fn string(&mut self) -> Result<String, String> {
        let quote = self.bump().ok_or("unexpected end of file")?;
        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.pos += 2;
        }

        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err("unterminated string literal".to_string()),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('0') => out.push('\0'),
                    Some('\\') => out.push('\\'),
                    Some('\'') => out.push('\''),
                    Some('"') => out.push('"'),
                    // backslash-newline is a line continuation
                    Some('\n') => {}
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => return Err("unterminated string literal".to_string()),
                },
                Some(c) if c == quote => {
                    if !triple {
                        return Ok(out);
                    }
                    if self.peek() == Some(quote) && self.peek_at(1) == Some(quote) {
                        self.pos += 2;
                        return Ok(out);
                    }
                    out.push(c);
                }
                Some('\n') if !triple => {
                    return Err("unterminated string literal".to_string());
                }
                Some(c) => out.push(c),
            }
        }
    }
}
