//! Parsing of GraphQL-style value literals into [`LiteralToken`] trees.
//!
//! The parser reads a single value literal, the text a query would carry inline
//! for a key-value argument:
//!
//! ```rust
//! use serde_keyvalue::{parse_literal, LiteralToken};
//!
//! let token = parse_literal(r#"{ hello: "world", count: 3, who: $user }"#).unwrap();
//! assert_eq!(token.to_string(), r#"{hello: "world", count: 3, who: $user}"#);
//! ```
//!
//! ## Supported syntax
//!
//! - Objects `{ name: value }`, strings `"..."` and block strings `"""..."""`
//! - Int and Float numbers (`-12`, `0.5`, `6.02e23`)
//! - `true`, `false`, `null` and variables `$name`
//! - Commas, whitespace and `#` comments are ignored between tokens
//!
//! Lists and enum values have no [`LiteralToken`] form and are rejected.

use crate::literal::{LiteralToken, ObjectField};
use crate::{Error, Result};

/// Parses one value literal. Only ignored tokens may follow it.
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the line and column of the first problem.
pub fn parse_literal(input: &str) -> Result<LiteralToken> {
    let mut parser = Parser::new(input);
    let token = parser.parse_value()?;
    parser.skip_ignored();
    if !parser.at_end() {
        return Err(parser.error("unexpected input after the literal"));
    }
    Ok(token)
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn rest_starts_with(&self, pattern: &str) -> bool {
        self.input[self.position..].starts_with(pattern)
    }

    fn error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    /// Skips whitespace, line terminators, commas, a BOM and `#` comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.next_char();
                }
                '#' => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.next_char();
                    }
                }
                _ => break,
            }
        }
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.next_char();
                Ok(())
            }
            Some(ch) => Err(self.error(&format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(&format!("unexpected end of input, expected '{}'", expected))),
        }
    }

    fn parse_value(&mut self) -> Result<LiteralToken> {
        self.skip_ignored();
        match self.peek_char() {
            None => Err(self.error("unexpected end of input, expected a value")),
            Some('{') => self.parse_object(),
            Some('"') if self.rest_starts_with("\"\"\"") => {
                self.parse_block_string().map(LiteralToken::String)
            }
            Some('"') => self.parse_string().map(LiteralToken::String),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some('$') => {
                self.next_char();
                self.parse_name().map(LiteralToken::Variable)
            }
            Some('[') => Err(Error::syntax_with_hint(
                self.line,
                self.column,
                "list values are not supported in a key-value literal",
                "pass the list through a variable or as an encoded string",
            )),
            Some(ch) if is_name_start(ch) => {
                let (line, col) = (self.line, self.column);
                let name = self.parse_name()?;
                match name.as_str() {
                    "true" => Ok(LiteralToken::Boolean(true)),
                    "false" => Ok(LiteralToken::Boolean(false)),
                    "null" => Ok(LiteralToken::Null),
                    _ => Err(Error::syntax_with_hint(
                        line,
                        col,
                        &format!("enum value '{}' is not supported", name),
                        &format!("did you mean \"{}\"?", name),
                    )),
                }
            }
            Some(ch) => Err(self.error(&format!("unexpected character '{}'", ch))),
        }
    }

    fn parse_object(&mut self) -> Result<LiteralToken> {
        self.expect_char('{')?;
        let mut fields = Vec::new();

        loop {
            self.skip_ignored();
            match self.peek_char() {
                Some('}') => {
                    self.next_char();
                    break;
                }
                None => return Err(self.error("unexpected end of input, expected '}'")),
                Some(_) => {
                    let name = self.parse_name()?;
                    self.skip_ignored();
                    self.expect_char(':')?;
                    let value = self.parse_value()?;
                    fields.push(ObjectField { name, value });
                }
            }
        }

        Ok(LiteralToken::Object(fields))
    }

    fn parse_name(&mut self) -> Result<String> {
        match self.peek_char() {
            Some(ch) if is_name_start(ch) => {}
            Some(ch) => return Err(self.error(&format!("expected a name, found '{}'", ch))),
            None => return Err(self.error("unexpected end of input, expected a name")),
        }

        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch == '_' || ch.is_ascii_alphanumeric() {
                self.next_char();
            } else {
                break;
            }
        }
        Ok(self.input[start..self.position].to_string())
    }

    fn parse_number(&mut self) -> Result<LiteralToken> {
        let start = self.position;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.next_char();
        }

        match self.peek_char() {
            Some('0') => {
                self.next_char();
                if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.error("invalid number, unexpected digit after 0"));
                }
            }
            Some(c) if c.is_ascii_digit() => self.read_digits()?,
            _ => return Err(self.error("invalid number, expected a digit")),
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.next_char();
            self.read_digits()?;
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_float = true;
            self.next_char();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.next_char();
            }
            self.read_digits()?;
        }

        if let Some(ch) = self.peek_char() {
            if ch == '.' || is_name_start(ch) {
                return Err(self.error(&format!("invalid number, unexpected '{}'", ch)));
            }
        }

        let raw = self.input[start..self.position].to_string();
        Ok(if is_float {
            LiteralToken::Float(raw)
        } else {
            LiteralToken::Int(raw)
        })
    }

    fn read_digits(&mut self) -> Result<()> {
        if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            return Err(self.error("invalid number, expected a digit"));
        }
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.next_char();
        }
        Ok(())
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect_char('"')?;
        let mut result = String::new();

        loop {
            match self.next_char() {
                None | Some('\n') | Some('\r') => return Err(self.error("unterminated string")),
                Some('"') => return Ok(result),
                Some('\\') => {
                    let ch = self.parse_escape()?;
                    result.push(ch);
                }
                Some(ch) => result.push(ch),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.next_char() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => {
                let high = self.read_hex4()?;
                if (0xD800..=0xDBFF).contains(&high) {
                    if !self.rest_starts_with("\\u") {
                        return Err(self.error("unpaired surrogate in unicode escape"));
                    }
                    self.next_char();
                    self.next_char();
                    let low = self.read_hex4()?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(self.error("invalid low surrogate in unicode escape"));
                    }
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))
                } else {
                    char::from_u32(high).ok_or_else(|| self.error("invalid unicode escape"))
                }
            }
            Some(ch) => Err(self.error(&format!("invalid escape sequence '\\{}'", ch))),
            None => Err(self.error("unterminated string")),
        }
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .next_char()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid unicode escape, expected 4 hex digits"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn parse_block_string(&mut self) -> Result<String> {
        for _ in 0..3 {
            self.next_char();
        }
        let mut raw = String::new();

        loop {
            if self.rest_starts_with("\\\"\"\"") {
                raw.push_str("\"\"\"");
                for _ in 0..4 {
                    self.next_char();
                }
            } else if self.rest_starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.next_char();
                }
                return Ok(block_string_value(&raw));
            } else {
                match self.next_char() {
                    Some(ch) => raw.push(ch),
                    None => return Err(self.error("unterminated block string")),
                }
            }
        }
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Removes common indentation and surrounding blank lines from a block string.
fn block_string_value(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| indent_of(line))
        .min();

    let mut owned: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            Some(indent) if i > 0 => line.get(indent..).unwrap_or("").to_string(),
            _ => line.to_string(),
        })
        .collect();

    while owned.first().is_some_and(|line| is_blank(line)) {
        owned.remove(0);
    }
    while owned.last().is_some_and(|line| is_blank(line)) {
        owned.pop();
    }

    owned.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(
            parse_literal("\"hi\"").unwrap(),
            LiteralToken::String("hi".to_string())
        );
        assert_eq!(parse_literal("-12").unwrap(), LiteralToken::Int("-12".to_string()));
        assert_eq!(
            parse_literal("6.02e23").unwrap(),
            LiteralToken::Float("6.02e23".to_string())
        );
        assert_eq!(parse_literal("true").unwrap(), LiteralToken::Boolean(true));
        assert_eq!(parse_literal(" null ").unwrap(), LiteralToken::Null);
        assert_eq!(
            parse_literal("$key").unwrap(),
            LiteralToken::Variable("key".to_string())
        );
    }

    #[test]
    fn test_parse_object_with_ignored_tokens() {
        let token = parse_literal(
            "{\n  # greeting\n  hello: \"world\",\n  n: 0.5\n  flag: false,, v: $var\n}",
        )
        .unwrap();

        assert_eq!(
            token,
            LiteralToken::Object(vec![
                ObjectField::new("hello", LiteralToken::String("world".to_string())),
                ObjectField::new("n", LiteralToken::Float("0.5".to_string())),
                ObjectField::new("flag", LiteralToken::Boolean(false)),
                ObjectField::new("v", LiteralToken::Variable("var".to_string())),
            ])
        );
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(
            parse_literal(r#""a\"b\\c\/d\né🚀""#).unwrap(),
            LiteralToken::String("a\"b\\c/d\né\u{1F680}".to_string())
        );
    }

    #[test]
    fn test_parse_block_string() {
        let token = parse_literal("\"\"\"\n    first\n      second\n    say \\\"\"\"\n  \"\"\"").unwrap();
        assert_eq!(
            token,
            LiteralToken::String("first\n  second\nsay \"\"\"".to_string())
        );
    }

    #[test]
    fn test_rejects_lists_and_enums() {
        let err = parse_literal("{ tags: [1, 2] }").unwrap_err();
        assert!(err.to_string().contains("list values are not supported"));
        assert!(err.to_string().contains("column 9"));

        let err = parse_literal("{ color: RED }").unwrap_err();
        assert!(err.to_string().contains("enum value 'RED'"));
        assert!(err.to_string().contains("Help:"));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(parse_literal("012").is_err());
        assert!(parse_literal("1.").is_err());
        assert!(parse_literal("1e").is_err());
        assert!(parse_literal("12abc").is_err());
        assert!(parse_literal("-").is_err());
    }

    #[test]
    fn test_reports_line_and_column() {
        let err = parse_literal("{\n  a: 1\n  b 2\n}").unwrap_err();
        match err {
            Error::Syntax { line, col, .. } => {
                assert_eq!(line, 3);
                assert_eq!(col, 5);
            }
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unterminated_input() {
        assert!(parse_literal("{ a: \"open }").is_err());
        assert!(parse_literal("{ a: 1").is_err());
        assert!(parse_literal("").is_err());
        assert!(parse_literal("{} extra").is_err());
    }
}
