//! Literal reader.
//!
//! Turns Ruby-flavoured literal text (`[1, 2i, 3.14]`, `%w[ant bear]`,
//! `(5..10)`, `{"a" => 1}`, `/t/`, `:+`, `Numeric`) into a [`Value`]. The
//! command-line driver reads every argument through [`read`].

use std::sync::Arc;

use num_bigint::BigInt;
use tracing::debug;

use crate::error::EnumError;
use crate::numeric::NumericType;
use crate::value::{Value, ValueType};

/// Read exactly one literal from `src`.
pub fn read(src: &str) -> Result<Value, EnumError> {
    let mut reader = Reader::new(src);
    let result = reader.read_value().and_then(|value| {
        reader.skip_whitespace();
        if reader.is_eof() {
            Ok(value)
        } else {
            Err(reader.error(format!(
                "unexpected trailing input '{}'",
                reader.current_char()
            )))
        }
    });
    if let Err(e) = &result {
        debug!(src, error = %e, "literal rejected");
    }
    result
}

// ============================================================================
// Reader
// ============================================================================

struct Reader {
    input: Vec<char>,
    position: usize,
}

impl Reader {
    fn new(input: &str) -> Self {
        Reader {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> char {
        self.peek_ahead(0)
    }

    fn peek_ahead(&self, n: usize) -> char {
        self.input.get(self.position + n).copied().unwrap_or('\0')
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_eof() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn error(&self, message: impl Into<String>) -> EnumError {
        EnumError::parse(format!("{} at offset {}", message.into(), self.position))
    }

    fn expect_char(&mut self, expected: char) -> Result<(), EnumError> {
        if self.current_char() == expected {
            self.advance();
            Ok(())
        } else if self.is_eof() {
            Err(self.error(format!("expected '{expected}', found end of input")))
        } else {
            Err(self.error(format!(
                "expected '{expected}', found '{}'",
                self.current_char()
            )))
        }
    }

    fn read_value(&mut self) -> Result<Value, EnumError> {
        self.skip_whitespace();
        let value = match self.current_char() {
            '[' => self.read_array()?,
            '{' => self.read_hash()?,
            '(' => {
                self.advance();
                let inner = self.read_value()?;
                self.skip_whitespace();
                self.expect_char(')')?;
                inner
            }
            '"' => self.read_basic_string()?,
            '\'' => self.read_raw_string()?,
            ':' => self.read_symbol()?,
            '/' => self.read_regex()?,
            '%' if self.peek_ahead(1) == 'w' => self.read_words()?,
            c if c.is_ascii_digit() => self.read_number()?,
            '-' if self.peek_ahead(1).is_ascii_digit() => self.read_number()?,
            c if c.is_alphabetic() => self.read_identifier()?,
            '\0' if self.is_eof() => return Err(self.error("unexpected end of input")),
            c => return Err(self.error(format!("unexpected character '{c}'"))),
        };
        self.read_range_tail(value)
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Read comma-separated items up to `close`. A trailing comma is allowed.
    fn read_delimited<T>(
        &mut self,
        close: char,
        mut item: impl FnMut(&mut Self) -> Result<T, EnumError>,
    ) -> Result<Vec<T>, EnumError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.current_char() == close {
                self.advance();
                return Ok(items);
            }
            items.push(item(self)?);
            self.skip_whitespace();
            match self.current_char() {
                ',' => self.advance(),
                c if c == close => {}
                _ if self.is_eof() => {
                    return Err(self.error(format!("unterminated literal, expected '{close}'")));
                }
                c => return Err(self.error(format!("expected ',' or '{close}', found '{c}'"))),
            }
        }
    }

    fn read_array(&mut self) -> Result<Value, EnumError> {
        self.expect_char('[')?;
        let elements = self.read_delimited(']', Self::read_value)?;
        Ok(Value::array(elements))
    }

    fn read_hash(&mut self) -> Result<Value, EnumError> {
        self.expect_char('{')?;
        let pairs = self.read_delimited('}', |reader| {
            let key = reader.read_value()?;
            reader.skip_whitespace();
            reader.expect_char('=')?;
            reader.expect_char('>')?;
            let value = reader.read_value()?;
            Ok((key, value))
        })?;
        Ok(Value::hash_map(pairs))
    }

    /// `%w[ant bear cat]`
    fn read_words(&mut self) -> Result<Value, EnumError> {
        self.expect_char('%')?;
        self.expect_char('w')?;
        self.expect_char('[')?;
        let mut words = Vec::new();
        let mut word = String::new();
        loop {
            match self.current_char() {
                ']' => {
                    self.advance();
                    break;
                }
                _ if self.is_eof() => return Err(self.error("unterminated word list")),
                c if c.is_whitespace() => {
                    if !word.is_empty() {
                        words.push(Value::string(std::mem::take(&mut word)));
                    }
                    self.advance();
                }
                c => {
                    word.push(c);
                    self.advance();
                }
            }
        }
        if !word.is_empty() {
            words.push(Value::string(word));
        }
        Ok(Value::array(words))
    }

    /// `a..b` or `a...b` following an integer literal.
    fn read_range_tail(&mut self, start: Value) -> Result<Value, EnumError> {
        let save = self.position;
        self.skip_whitespace();
        if !(self.current_char() == '.' && self.peek_ahead(1) == '.') {
            self.position = save;
            return Ok(start);
        }
        self.advance();
        self.advance();
        let exclusive = self.current_char() == '.';
        if exclusive {
            self.advance();
        }
        self.skip_whitespace();
        let end = match self.current_char() {
            c if c.is_ascii_digit() || c == '-' => self.read_number()?,
            _ => return Err(self.error("range end must be an integer")),
        };
        match (start.as_int(), end.as_int()) {
            (Some(s), Some(e)) if exclusive => Ok(Value::exclusive_range(s, e)),
            (Some(s), Some(e)) => Ok(Value::range(s, e)),
            _ => Err(self.error("range bounds must be integers")),
        }
    }

    // ========================================================================
    // Strings, Symbols and Regexes
    // ========================================================================

    fn read_basic_string(&mut self) -> Result<Value, EnumError> {
        self.expect_char('"')?;
        let mut content = String::new();
        while self.current_char() != '"' && !self.is_eof() {
            if self.current_char() == '\\' {
                self.advance();
                content.push(self.read_escape_sequence()?);
            } else {
                content.push(self.current_char());
                self.advance();
            }
        }
        if self.is_eof() {
            return Err(self.error("unterminated string"));
        }
        self.expect_char('"')?;
        Ok(Value::string(content))
    }

    fn read_escape_sequence(&mut self) -> Result<char, EnumError> {
        let c = self.current_char();
        self.advance();
        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '0' => Ok('\0'),
            '\\' | '"' | '\'' => Ok(c),
            'u' => self.read_unicode_escape(),
            '\0' => Err(self.error("unterminated string")),
            _ => Err(self.error(format!("unknown escape sequence \\{c}"))),
        }
    }

    /// `\u{1F600}`
    fn read_unicode_escape(&mut self) -> Result<char, EnumError> {
        self.expect_char('{')?;
        let mut hex = String::new();
        while self.current_char() != '}' && !self.is_eof() {
            if !self.current_char().is_ascii_hexdigit() {
                return Err(self.error("invalid hex digit in unicode escape"));
            }
            hex.push(self.current_char());
            self.advance();
        }
        self.expect_char('}')?;
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error(format!("invalid unicode code point '{hex}'")))
    }

    /// Single-quoted: only `\'` and `\\` are escapes.
    fn read_raw_string(&mut self) -> Result<Value, EnumError> {
        self.expect_char('\'')?;
        let mut content = String::new();
        while self.current_char() != '\'' && !self.is_eof() {
            let c = self.current_char();
            self.advance();
            if c == '\\' && matches!(self.current_char(), '\'' | '\\') {
                content.push(self.current_char());
                self.advance();
            } else {
                content.push(c);
            }
        }
        if self.is_eof() {
            return Err(self.error("unterminated string"));
        }
        self.expect_char('\'')?;
        Ok(Value::string(content))
    }

    fn is_symbol_char(c: char) -> bool {
        c.is_alphanumeric()
            || matches!(c, '_' | '?' | '!' | '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=')
    }

    fn read_symbol(&mut self) -> Result<Value, EnumError> {
        self.expect_char(':')?;
        if self.current_char() == '"' {
            let quoted = self.read_basic_string()?;
            return Ok(Value::symbol(quoted.as_str().unwrap_or_default()));
        }
        let mut name = String::new();
        while Self::is_symbol_char(self.current_char()) {
            name.push(self.current_char());
            self.advance();
        }
        if name.is_empty() {
            return Err(self.error("empty symbol"));
        }
        Ok(Value::symbol(&name))
    }

    /// `/source/`. `\/` stands for a slash; other escapes pass through to
    /// the regex engine.
    fn read_regex(&mut self) -> Result<Value, EnumError> {
        self.expect_char('/')?;
        let mut source = String::new();
        while self.current_char() != '/' && !self.is_eof() {
            let c = self.current_char();
            self.advance();
            if c == '\\' && self.current_char() == '/' {
                source.push('/');
                self.advance();
            } else {
                source.push(c);
                if c == '\\' && !self.is_eof() {
                    source.push(self.current_char());
                    self.advance();
                }
            }
        }
        if self.is_eof() {
            return Err(self.error("unterminated regex"));
        }
        self.expect_char('/')?;
        Value::regex(&source)
    }

    /// `nil`, `true`, `false`, or a type name.
    fn read_identifier(&mut self) -> Result<Value, EnumError> {
        let start = self.position;
        let mut name = String::new();
        while self.current_char().is_alphanumeric() || self.current_char() == '_' {
            name.push(self.current_char());
            self.advance();
        }
        match name.as_str() {
            "nil" => Ok(Value::Nil),
            "true" => Ok(Value::bool(true)),
            "false" => Ok(Value::bool(false)),
            _ => ValueType::from_name(&name).map(Value::Type).ok_or_else(|| {
                self.position = start;
                self.error(format!("unknown identifier '{name}'"))
            }),
        }
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn read_digits(&mut self, text: &mut String) {
        while self.current_char().is_ascii_digit()
            || (self.current_char() == '_' && self.peek_ahead(1).is_ascii_digit())
        {
            if self.current_char() != '_' {
                text.push(self.current_char());
            }
            self.advance();
        }
    }

    /// Integers, floats, `n/dr` rationals and `i`-suffixed imaginaries.
    fn read_number(&mut self) -> Result<Value, EnumError> {
        let mut text = String::new();
        if self.current_char() == '-' {
            text.push('-');
            self.advance();
        }
        self.read_digits(&mut text);

        let mut is_float = false;
        if self.current_char() == '.' && self.peek_ahead(1).is_ascii_digit() {
            is_float = true;
            text.push('.');
            self.advance();
            self.read_digits(&mut text);
        }
        if matches!(self.current_char(), 'e' | 'E') {
            let sign = matches!(self.peek_ahead(1), '+' | '-');
            let digit_at = if sign { 2 } else { 1 };
            if self.peek_ahead(digit_at).is_ascii_digit() {
                is_float = true;
                text.push('e');
                self.advance();
                if sign {
                    text.push(self.current_char());
                    self.advance();
                }
                self.read_digits(&mut text);
            }
        }

        if is_float {
            let x: f64 = text
                .parse()
                .map_err(|_| self.error(format!("invalid float '{text}'")))?;
            return Ok(match self.current_char() {
                'i' => {
                    self.advance();
                    Value::complex(0.0, x)
                }
                _ => Value::float(x),
            });
        }

        match self.current_char() {
            '/' if self.peek_ahead(1).is_ascii_digit() => {
                self.advance();
                let mut denom = String::new();
                self.read_digits(&mut denom);
                self.expect_char('r')?;
                let (n, d) = match (text.parse::<i64>(), denom.parse::<i64>()) {
                    (Ok(n), Ok(d)) => (n, d),
                    _ => return Err(self.error("rational literal out of range")),
                };
                Value::ratio(n, d).map_err(|e| self.error(e.message))
            }
            'r' => {
                self.advance();
                let n = text
                    .parse::<i64>()
                    .map_err(|_| self.error("rational literal out of range"))?;
                Value::ratio(n, 1)
            }
            'i' => {
                self.advance();
                let im: f64 = text
                    .parse()
                    .map_err(|_| self.error(format!("invalid imaginary '{text}i'")))?;
                Ok(Value::complex(0.0, im))
            }
            _ => match text.parse::<i64>() {
                Ok(n) => Ok(Value::int(n)),
                Err(_) => text
                    .parse::<BigInt>()
                    .map(|big| Value::number(NumericType::BigInt(Arc::new(big))))
                    .map_err(|_| self.error(format!("invalid integer '{text}'"))),
            },
        }
    }
}
