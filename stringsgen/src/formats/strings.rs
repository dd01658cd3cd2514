//! Support for the Apple `.strings` format.
//!
//! A `.strings` file is a flat list of `"key" = "value";` statements with
//! optional `//` and `/* */` comments. Files are commonly saved as UTF-16 with
//! a byte order mark; [`Format::read_from`] decodes them transparently.

use std::fs::File;
use std::io::{BufRead, Read};
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::{error::Error, traits::Parser};

/// A parsed `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// All key-value pairs, in file order.
    pub pairs: Vec<Pair>,
}

/// A single `"key" = "value";` statement with escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Format {
    fn parse(content: &str) -> Result<Self, Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut scanner = Scanner::new(content);
        let mut pairs = Vec::new();

        loop {
            scanner.skip_trivia()?;
            if scanner.peek().is_none() {
                break;
            }

            let key = scanner.literal()?;
            scanner.skip_trivia()?;

            // `"key";` is shorthand for `"key" = "key";`
            let value = if scanner.peek() == Some('=') {
                scanner.bump();
                scanner.skip_trivia()?;
                let value = scanner.literal()?;
                scanner.skip_trivia()?;
                value
            } else {
                key.clone()
            };

            scanner.expect(';')?;
            pairs.push(Pair { key, value });
        }

        Ok(Format { pairs })
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Format::parse(&content)
    }

    /// Override default file reading to support BOM-aware decoding (e.g., UTF-16 files).
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        // Auto-detect BOM, decode to UTF-8; passthrough UTF-8
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Format::parse(&decoded)
    }

    fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect()
    }
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str) -> Self {
        Scanner {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(Error::syntax(
                self.line,
                format!("expected `{}`, found `{}`", expected, c),
            )),
            None => Err(Error::syntax(
                self.line,
                format!("expected `{}`, found end of file", expected),
            )),
        }
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let start_line = self.line;
                    self.bump();
                    match self.bump() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            let mut previous = '\0';
                            loop {
                                match self.bump() {
                                    Some('/') if previous == '*' => break,
                                    Some(c) => previous = c,
                                    None => {
                                        return Err(Error::syntax(
                                            start_line,
                                            "unterminated block comment",
                                        ));
                                    }
                                }
                            }
                        }
                        _ => return Err(Error::syntax(start_line, "stray `/`")),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Reads a quoted string or a bare word.
    fn literal(&mut self) -> Result<String, Error> {
        match self.peek() {
            Some('"') => {
                self.bump();
                self.quoted()
            }
            Some(c) if is_bare_char(c) => {
                let mut word = String::new();
                while let Some(c) = self.peek() {
                    if !is_bare_char(c) {
                        break;
                    }
                    word.push(c);
                    self.bump();
                }
                Ok(word)
            }
            Some(c) => Err(Error::syntax(
                self.line,
                format!("expected a string, found `{}`", c),
            )),
            None => Err(Error::syntax(
                self.line,
                "expected a string, found end of file",
            )),
        }
    }

    fn quoted(&mut self) -> Result<String, Error> {
        let start_line = self.line;
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(text),
                Some('\\') => text.push(self.escape(start_line)?),
                Some(c) => text.push(c),
                None => return Err(Error::syntax(start_line, "unterminated string")),
            }
        }
    }

    fn escape(&mut self, start_line: usize) -> Result<char, Error> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            Some('U') | Some('u') => {
                let mut code = self.hex_unit()?;
                // Characters outside the BMP are written as a UTF-16 surrogate pair.
                if (0xD800..0xDC00).contains(&code) {
                    let low = match (self.bump(), self.bump()) {
                        (Some('\\'), Some('U') | Some('u')) => self.hex_unit()?,
                        _ => return Err(Error::syntax(self.line, "unpaired surrogate")),
                    };
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(Error::syntax(self.line, "unpaired surrogate"));
                    }
                    code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                }
                char::from_u32(code)
                    .ok_or_else(|| Error::syntax(self.line, "invalid unicode scalar"))
            }
            // `\"`, `\\`, `\'` and any other escaped character stand for themselves.
            Some(c) => Ok(c),
            None => Err(Error::syntax(start_line, "unterminated string")),
        }
    }

    fn hex_unit(&mut self) -> Result<u32, Error> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| Error::syntax(self.line, "invalid unicode escape"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }
}

fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':' | '-')
}
