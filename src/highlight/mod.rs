//! Tokenizer for serialized JSON text, used to colour the response body.
//!
//! The tokenizer never fails: anything it does not recognise becomes an
//! [`TokenKind::Other`] token so the input text can always be rebuilt by
//! concatenating the token texts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Number,
    Boolean,
    Null,
    Punctuation,
    Whitespace,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let kind = match bytes[pos] {
            b'"' => {
                pos = scan_string(bytes, pos);
                if followed_by_colon(bytes, pos) {
                    TokenKind::Key
                } else {
                    TokenKind::String
                }
            }
            b'{' | b'}' | b'[' | b']' | b':' | b',' => {
                pos += 1;
                TokenKind::Punctuation
            }
            b if b.is_ascii_whitespace() => {
                while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                TokenKind::Whitespace
            }
            b'-' | b'0'..=b'9' => {
                pos = scan_number(bytes, pos);
                TokenKind::Number
            }
            _ => {
                pos = scan_word(bytes, pos);
                match &source[start..pos] {
                    "true" | "false" => TokenKind::Boolean,
                    "null" => TokenKind::Null,
                    _ => TokenKind::Other,
                }
            }
        };

        tokens.push(Token {
            kind,
            text: &source[start..pos],
        });
    }

    tokens
}

/// Returns the index just past the closing quote, or the end of input for an
/// unterminated string.
fn scan_string(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}

fn followed_by_colon(bytes: &[u8], mut pos: usize) -> bool {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    bytes.get(pos) == Some(&b':')
}

fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    if bytes[pos] == b'-' {
        pos += 1;
    }
    while pos < bytes.len() {
        match bytes[pos] {
            b'0'..=b'9' | b'.' => pos += 1,
            b'e' | b'E' => {
                pos += 1;
                if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
                    pos += 1;
                }
            }
            _ => break,
        }
    }
    // A lone minus sign still has to consume something.
    pos.max(start + 1)
}

/// Consumes a run of ASCII letters, or a single (possibly multi-byte)
/// character when none are present.
fn scan_word(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    if pos > start {
        return pos;
    }
    pos += 1;
    while pos < bytes.len() && (bytes[pos] & 0xC0) == 0x80 {
        pos += 1;
    }
    pos
}
