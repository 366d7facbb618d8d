//! Lexer (tokenizer) for the netlist format.

use crate::error::{NodalError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (component name, `GND`, `DC`, ...)
    Identifier,
    /// A number, possibly with a scale suffix
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing netlist input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let line = self.line;
        let column = self.column;

        let Some(&ch) = self.chars.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line,
                column,
            });
        };

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            '.' if self.second_is_digit() => (TokenKind::Number, self.read_number()),
            '.' => {
                self.advance();
                (TokenKind::Directive, format!(".{}", self.read_identifier()))
            }
            '-' | '+' | '0'..='9' => (TokenKind::Number, self.read_number()),
            _ if ch.is_alphabetic() || ch == '_' => (TokenKind::Identifier, self.read_identifier()),
            _ => {
                return Err(NodalError::lexer(
                    line,
                    column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(Token {
            kind,
            text,
            line,
            column,
        })
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Whether the character after the current one is an ASCII digit.
    fn second_is_digit(&self) -> bool {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.peek().is_some_and(|c| c.is_ascii_digit())
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' || ch == ';' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_digits(&mut self, text: &mut String) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(&ch) = self.chars.peek() {
            if ch == '-' || ch == '+' {
                text.push(ch);
                self.advance();
            }
        }

        self.read_digits(&mut text);

        // Decimal part
        if let Some(&'.') = self.chars.peek() {
            text.push('.');
            self.advance();
            self.read_digits(&mut text);
        }

        // Exponent part
        if let Some(&ch) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                text.push(ch);
                self.advance();
                if let Some(&sign) = self.chars.peek() {
                    if sign == '-' || sign == '+' {
                        text.push(sign);
                        self.advance();
                    }
                }
                self.read_digits(&mut text);
            }
        }

        // Trailing letters (scale suffix, or junk the value parser rejects)
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push((tok.kind, tok.text));
        }
        out
    }

    #[test]
    fn test_lexer_basic() {
        let toks = kinds("R1 1 0 10k");
        assert_eq!(
            toks,
            vec![
                (TokenKind::Identifier, "R1".to_string()),
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Number, "0".to_string()),
                (TokenKind::Number, "10k".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_exponent_and_suffix() {
        let toks = kinds("V1 2 0 -1.5e-3 3.3M");
        assert_eq!(toks[3], (TokenKind::Number, "-1.5e-3".to_string()));
        assert_eq!(toks[4], (TokenKind::Number, "3.3M".to_string()));
    }

    #[test]
    fn test_lexer_leading_dot_number() {
        let toks = kinds("R1 1 0 .5k\n.end");
        assert_eq!(toks[3], (TokenKind::Number, ".5k".to_string()));
        assert_eq!(toks[5], (TokenKind::Directive, ".end".to_string()));
    }

    #[test]
    fn test_lexer_directive_and_comments() {
        let toks = kinds("# header\n.sweep V1 0 5 1 ; trailing\n");
        assert_eq!(toks[0].0, TokenKind::Newline);
        assert_eq!(toks[1], (TokenKind::Directive, ".sweep".to_string()));
        assert_eq!(toks.last().unwrap().0, TokenKind::Newline);
    }

    #[test]
    fn test_lexer_rejects_stray_character() {
        let mut lexer = Lexer::new("R1 1 0 $5");
        for _ in 0..3 {
            lexer.next_token().unwrap();
        }
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, NodalError::LexerError { line: 1, column: 8, .. }));
    }
}
