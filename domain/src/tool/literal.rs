//! Literal argument lists
//!
//! Tool arguments arrive as text inside `TOOL_CALL: name(...)`. They are
//! parsed by a small recursive-descent parser that accepts only literals:
//!
//! | Literal | Examples |
//! |---------|----------|
//! | string  | `"Paris"`, `'it\'s'`, `"a" "b"` (adjacent strings concatenate) |
//! | integer | `42`, `-7`, `1_000`, `0x1F`, `0o17`, `0b101` (beyond `i64`: kept as digits) |
//! | float   | `2.5`, `.5`, `1e3`, `-1.5E-2` |
//! | keyword | `True`, `False`, `None` |
//! | list    | `[1, "a", [2]]` |
//! | tuple   | `()`, `(1,)`, `(1, 2)` |
//!
//! Identifiers, calls and operators are rejected, so nothing in a model
//! reply is ever evaluated.

use thiserror::Error;

/// Maximum nesting of lists and tuples
pub const MAX_DEPTH: usize = 32;

/// A parsed literal value
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    /// Integer outside the `i64` range, kept as its decimal spelling
    BigInt(String),
    Float(f64),
    Bool(bool),
    None,
    List(Vec<LiteralValue>),
    Tuple(Vec<LiteralValue>),
}

impl LiteralValue {
    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralValue::Str(_) => "str",
            LiteralValue::Int(_) | LiteralValue::BigInt(_) => "int",
            LiteralValue::Float(_) => "float",
            LiteralValue::Bool(_) => "bool",
            LiteralValue::None => "None",
            LiteralValue::List(_) => "list",
            LiteralValue::Tuple(_) => "tuple",
        }
    }

    /// Text form of a scalar argument.
    ///
    /// Strings are returned as-is, numbers and booleans in their literal
    /// spelling. `None` and sequences are not scalars.
    pub fn as_scalar_text(&self) -> Option<String> {
        match self {
            LiteralValue::Str(s) => Some(s.clone()),
            LiteralValue::Int(i) => Some(i.to_string()),
            LiteralValue::BigInt(digits) => Some(digits.clone()),
            LiteralValue::Float(f) => Some(format_float(*f)),
            LiteralValue::Bool(true) => Some("True".to_string()),
            LiteralValue::Bool(false) => Some("False".to_string()),
            LiteralValue::None | LiteralValue::List(_) | LiteralValue::Tuple(_) => None,
        }
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join(items: &[LiteralValue]) -> String {
            items
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }

        match self {
            LiteralValue::Str(s) => {
                write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            LiteralValue::Int(i) => write!(f, "{}", i),
            LiteralValue::BigInt(digits) => write!(f, "{}", digits),
            LiteralValue::Float(v) => write!(f, "{}", format_float(*v)),
            LiteralValue::Bool(true) => write!(f, "True"),
            LiteralValue::Bool(false) => write!(f, "False"),
            LiteralValue::None => write!(f, "None"),
            LiteralValue::List(items) => write!(f, "[{}]", join(items)),
            LiteralValue::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            LiteralValue::Tuple(items) => write!(f, "({})", join(items)),
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::Str(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

/// Errors produced while parsing a literal list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiteralError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unterminated string starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("invalid escape sequence at position {position}")]
    InvalidEscape { position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("'{name}' at position {position} is not a literal")]
    NotALiteral { name: String, position: usize },

    #[error("literal nesting exceeds {MAX_DEPTH} levels")]
    TooDeep,
}

/// Parse the inside of a bracketed list: `"a", 1, [2, 3]`.
///
/// Equivalent to parsing `[<input>]`; an empty (or blank) input yields an
/// empty list and a single trailing comma is allowed.
pub fn parse_literal_list(input: &str) -> Result<Vec<LiteralValue>, LiteralError> {
    let mut parser = Parser::new(input);
    let (items, _) = parser.parse_items(None, 0)?;
    Ok(items)
}

/// Format a float in its shortest round-trip form.
///
/// Integral values keep a `.0` suffix (`5.0`). Exponents outside
/// `1e-4..1e16` switch to scientific notation with a signed, two-digit
/// exponent (`1e+16`, `1.5e-05`). Non-finite values are `inf`, `-inf`, `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map(|(m, e)| (m.to_string(), e.parse::<i32>().unwrap_or(0)))
        .unwrap_or((scientific.clone(), 0));

    if value == 0.0 || (-4..16).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn unexpected(&self, found: char) -> LiteralError {
        LiteralError::UnexpectedChar {
            found,
            position: self.pos,
        }
    }

    /// Parse comma-separated items up to `close` (or end of input when `None`).
    ///
    /// Returns the items and whether a separating comma was seen, which is
    /// what distinguishes `(1,)` from `(1)`.
    fn parse_items(
        &mut self,
        close: Option<char>,
        depth: usize,
    ) -> Result<(Vec<LiteralValue>, bool), LiteralError> {
        let mut items = Vec::new();
        let mut saw_comma = false;

        loop {
            self.skip_whitespace();
            match (self.peek(), close) {
                (None, None) => return Ok((items, saw_comma)),
                (None, Some(_)) => {
                    return Err(LiteralError::UnexpectedEnd {
                        expected: "closing bracket",
                    });
                }
                (Some(c), Some(expected)) if c == expected => {
                    self.bump();
                    return Ok((items, saw_comma));
                }
                _ => {}
            }

            items.push(self.parse_value(depth)?);
            self.skip_whitespace();

            match (self.peek(), close) {
                (Some(','), _) => {
                    self.bump();
                    saw_comma = true;
                }
                (None, None) => return Ok((items, saw_comma)),
                (Some(c), Some(expected)) if c == expected => {
                    self.bump();
                    return Ok((items, saw_comma));
                }
                (None, Some(_)) => {
                    return Err(LiteralError::UnexpectedEnd {
                        expected: "',' or closing bracket",
                    });
                }
                (Some(c), _) => return Err(self.unexpected(c)),
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<LiteralValue, LiteralError> {
        if depth >= MAX_DEPTH {
            return Err(LiteralError::TooDeep);
        }

        let Some(c) = self.peek() else {
            return Err(LiteralError::UnexpectedEnd { expected: "a value" });
        };

        match c {
            '\'' | '"' => self.parse_strings(),
            '[' => {
                self.bump();
                let (items, _) = self.parse_items(Some(']'), depth + 1)?;
                Ok(LiteralValue::List(items))
            }
            '(' => {
                self.bump();
                let (mut items, saw_comma) = self.parse_items(Some(')'), depth + 1)?;
                // `(x)` is just a parenthesised value, `(x,)` is a tuple
                if items.len() == 1 && !saw_comma {
                    Ok(items.remove(0))
                } else {
                    Ok(LiteralValue::Tuple(items))
                }
            }
            '+' | '-' => {
                let start = self.pos;
                self.bump();
                let negative = c == '-';
                match self.peek() {
                    Some(d) if d.is_ascii_digit() || d == '.' => {}
                    Some(other) => return Err(self.unexpected(other)),
                    None => return Err(LiteralError::UnexpectedEnd { expected: "a number" }),
                }
                self.parse_number(start, negative)
            }
            c if c.is_ascii_digit() => self.parse_number(self.pos, false),
            '.' if self.peek_nth(1).is_some_and(|d| d.is_ascii_digit()) => {
                self.parse_number(self.pos, false)
            }
            c if c.is_alphabetic() || c == '_' => self.parse_keyword(),
            other => Err(self.unexpected(other)),
        }
    }

    fn parse_keyword(&mut self) -> Result<LiteralValue, LiteralError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" => Ok(LiteralValue::Bool(true)),
            "False" => Ok(LiteralValue::Bool(false)),
            "None" => Ok(LiteralValue::None),
            name => Err(LiteralError::NotALiteral {
                name: name.to_string(),
                position: start,
            }),
        }
    }

    /// One or more adjacent string literals, concatenated.
    fn parse_strings(&mut self) -> Result<LiteralValue, LiteralError> {
        let mut value = self.parse_string()?;
        loop {
            let checkpoint = self.pos;
            self.skip_whitespace();
            match self.peek() {
                Some('\'') | Some('"') => value.push_str(&self.parse_string()?),
                _ => {
                    self.pos = checkpoint;
                    return Ok(LiteralValue::Str(value));
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let start = self.pos;
        let quote = self.bump().ok_or(LiteralError::UnexpectedEnd {
            expected: "a string",
        })?;
        let mut out = String::new();

        loop {
            match self.bump() {
                None | Some('\n') => return Err(LiteralError::UnterminatedString { position: start }),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), LiteralError> {
        let position = self.pos - 1;
        let Some(c) = self.bump() else {
            return Err(LiteralError::UnterminatedString { position });
        };
        match c {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            'x' => out.push(self.parse_hex_escape(2, position)?),
            'u' => out.push(self.parse_hex_escape(4, position)?),
            'U' => out.push(self.parse_hex_escape(8, position)?),
            // Unknown escapes are kept verbatim
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn parse_hex_escape(&mut self, digits: usize, position: usize) -> Result<char, LiteralError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or(LiteralError::InvalidEscape { position })?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(LiteralError::InvalidEscape { position })
    }

    /// Parse a number whose sign (if any) was already consumed. `start`
    /// marks where the literal began, sign included, for error reporting.
    fn parse_number(&mut self, start: usize, negative: bool) -> Result<LiteralValue, LiteralError> {
        let body_start = self.pos;

        if self.peek() == Some('0') {
            let radix = match self.peek_nth(1) {
                Some('x') | Some('X') => Some(16),
                Some('o') | Some('O') => Some(8),
                Some('b') | Some('B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.bump();
                self.bump();
                return self.parse_radix_int(radix, start, negative);
            }
        }

        let mut is_float = false;
        self.consume_digits();
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            self.consume_digits();
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.bump();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.invalid_number(start));
            }
            self.consume_digits();
        }

        let raw = &self.src[body_start..self.pos];
        if raw.starts_with('_') || raw.ends_with('_') || raw.contains("__") {
            return Err(self.invalid_number(start));
        }
        let digits: String = raw.chars().filter(|c| *c != '_').collect();

        if is_float {
            return digits
                .parse::<f64>()
                .map(|f| LiteralValue::Float(if negative { -f } else { f }))
                .map_err(|_| self.invalid_number(start));
        }

        // Leading zeros are only allowed for zero itself (`00`)
        if digits.len() > 1 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
            return Err(self.invalid_number(start));
        }

        let text = if negative {
            format!("-{}", digits)
        } else {
            digits
        };
        Ok(Self::integer(text))
    }

    fn parse_radix_int(
        &mut self,
        radix: u32,
        start: usize,
        negative: bool,
    ) -> Result<LiteralValue, LiteralError> {
        let digits_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_digit(radix) || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        let digits: String = self.src[digits_start..self.pos]
            .chars()
            .filter(|c| *c != '_')
            .collect();
        let magnitude =
            u128::from_str_radix(&digits, radix).map_err(|_| self.invalid_number(start))?;
        let text = if negative {
            format!("-{}", magnitude)
        } else {
            magnitude.to_string()
        };
        Ok(Self::integer(text))
    }

    /// `Int` when the decimal text fits in `i64`, `BigInt` otherwise
    fn integer(text: String) -> LiteralValue {
        match text.parse::<i64>() {
            Ok(i) => LiteralValue::Int(i),
            Err(_) => LiteralValue::BigInt(text),
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn invalid_number(&self, start: usize) -> LiteralError {
        LiteralError::InvalidNumber {
            text: self.src[start..self.pos].to_string(),
            position: start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> LiteralValue {
        LiteralValue::Str(value.to_string())
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(parse_literal_list("").unwrap(), vec![]);
        assert_eq!(parse_literal_list("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_string_arguments() {
        assert_eq!(
            parse_literal_list(r#""2", "3""#).unwrap(),
            vec![s("2"), s("3")]
        );
        assert_eq!(
            parse_literal_list(r#"'it\'s', "say \"hi\"""#).unwrap(),
            vec![s("it's"), s("say \"hi\"")]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            parse_literal_list(r#""a\nb\t\x41\u00e9""#).unwrap(),
            vec![s("a\nb\tA\u{e9}")]
        );
        // Unknown escapes keep the backslash
        assert_eq!(parse_literal_list(r#""C:\d""#).unwrap(), vec![s("C:\\d")]);
        assert_eq!(
            parse_literal_list(r#""\x4""#),
            Err(LiteralError::InvalidEscape { position: 1 })
        );
    }

    #[test]
    fn test_adjacent_strings_concatenate() {
        assert_eq!(parse_literal_list(r#""New " 'York'"#).unwrap(), vec![s("New York")]);
    }

    #[test]
    fn test_unicode_strings() {
        assert_eq!(parse_literal_list("'東京', \"30°C\"").unwrap(), vec![s("東京"), s("30°C")]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            parse_literal_list("1, -2, +3, 2.5, .5, 1e3, -1.5E-2, 1_000, 0x1F, 0o17, 0b101, 00")
                .unwrap(),
            vec![
                LiteralValue::Int(1),
                LiteralValue::Int(-2),
                LiteralValue::Int(3),
                LiteralValue::Float(2.5),
                LiteralValue::Float(0.5),
                LiteralValue::Float(1000.0),
                LiteralValue::Float(-0.015),
                LiteralValue::Int(1000),
                LiteralValue::Int(31),
                LiteralValue::Int(15),
                LiteralValue::Int(5),
                LiteralValue::Int(0),
            ]
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            parse_literal_list("07"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_literal_list("1e"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_literal_list("1__0"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        // Only one sign is allowed
        assert!(matches!(
            parse_literal_list("--1"),
            Err(LiteralError::UnexpectedChar { found: '-', .. })
        ));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            parse_literal_list("True, False, None").unwrap(),
            vec![
                LiteralValue::Bool(true),
                LiteralValue::Bool(false),
                LiteralValue::None
            ]
        );
    }

    #[test]
    fn test_nested_sequences() {
        assert_eq!(
            parse_literal_list("[1, ['a']], (), (1,), (2), (3, 4,)").unwrap(),
            vec![
                LiteralValue::List(vec![LiteralValue::Int(1), LiteralValue::List(vec![s("a")])]),
                LiteralValue::Tuple(vec![]),
                LiteralValue::Tuple(vec![LiteralValue::Int(1)]),
                LiteralValue::Int(2),
                LiteralValue::Tuple(vec![LiteralValue::Int(3), LiteralValue::Int(4)]),
            ]
        );
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(parse_literal_list("'x',").unwrap(), vec![s("x")]);
        assert!(parse_literal_list(",").is_err());
        assert!(parse_literal_list("1,,2").is_err());
    }

    #[test]
    fn test_rejects_non_literals() {
        assert_eq!(
            parse_literal_list("city"),
            Err(LiteralError::NotALiteral {
                name: "city".to_string(),
                position: 0
            })
        );
        assert!(matches!(
            parse_literal_list("__import__('os')"),
            Err(LiteralError::NotALiteral { .. })
        ));
        assert!(matches!(
            parse_literal_list("1 + 2"),
            Err(LiteralError::UnexpectedChar { found: '+', .. })
        ));
        assert!(matches!(
            parse_literal_list("'a' * 3"),
            Err(LiteralError::UnexpectedChar { found: '*', .. })
        ));
        assert!(matches!(
            parse_literal_list("{'a': 1}"),
            Err(LiteralError::UnexpectedChar { found: '{', .. })
        ));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            parse_literal_list("'abc"),
            Err(LiteralError::UnterminatedString { position: 0 })
        );
        assert!(matches!(
            parse_literal_list("[1, 2"),
            Err(LiteralError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let deep = "[".repeat(MAX_DEPTH + 1) + &"]".repeat(MAX_DEPTH + 1);
        assert_eq!(parse_literal_list(&deep), Err(LiteralError::TooDeep));
    }

    #[test]
    fn test_integer_range_edges() {
        assert_eq!(
            parse_literal_list("-9223372036854775808, 9223372036854775807").unwrap(),
            vec![LiteralValue::Int(i64::MIN), LiteralValue::Int(i64::MAX)]
        );
        assert_eq!(
            parse_literal_list("-0x8000000000000000").unwrap(),
            vec![LiteralValue::Int(i64::MIN)]
        );
    }

    #[test]
    fn test_integers_beyond_i64_keep_their_digits() {
        let values =
            parse_literal_list("12345678901234567890, -9223372036854775809, 0x1_0000_0000_0000_0000")
                .unwrap();
        assert_eq!(
            values,
            vec![
                LiteralValue::BigInt("12345678901234567890".to_string()),
                LiteralValue::BigInt("-9223372036854775809".to_string()),
                LiteralValue::BigInt("18446744073709551616".to_string()),
            ]
        );
        assert_eq!(
            values[0].as_scalar_text().as_deref(),
            Some("12345678901234567890")
        );
        assert_eq!(values[1].type_name(), "int");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(s("Paris").as_scalar_text().as_deref(), Some("Paris"));
        assert_eq!(LiteralValue::Int(2).as_scalar_text().as_deref(), Some("2"));
        assert_eq!(LiteralValue::Float(2.0).as_scalar_text().as_deref(), Some("2.0"));
        assert_eq!(LiteralValue::Bool(true).as_scalar_text().as_deref(), Some("True"));
        assert_eq!(LiteralValue::None.as_scalar_text(), None);
        assert_eq!(LiteralValue::List(vec![]).as_scalar_text(), None);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn test_display() {
        let value = LiteralValue::Tuple(vec![s("it's"), LiteralValue::Float(1.0)]);
        assert_eq!(value.to_string(), r"('it\'s', 1.0)");
        assert_eq!(LiteralValue::Tuple(vec![LiteralValue::None]).to_string(), "(None,)");
        assert_eq!(
            LiteralValue::List(vec![LiteralValue::BigInt("99999999999999999999".to_string())])
                .to_string(),
            "[99999999999999999999]"
        );
    }
}
