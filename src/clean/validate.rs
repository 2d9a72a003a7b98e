//! Input validation: disallowed control characters and block-comment balance.

use tracing::trace;

use super::diagnostic::CleanError;

/// 1-based line of byte offset `pos`: newlines strictly before it, plus one.
///
/// Offsets past the end count every newline in `text`.
pub fn line_of_pos(text: &str, pos: usize) -> usize {
    let end = pos.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Raw control characters other than tab, newline and carriage return.
pub fn is_disallowed_control(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Report every disallowed control character, in order of appearance.
pub fn check_control_chars(text: &str) -> Vec<CleanError> {
    let mut errors = Vec::new();
    let mut line = 1;
    for ch in text.chars() {
        if ch == '\n' {
            line += 1;
        } else if is_disallowed_control(ch) {
            errors.push(CleanError::ControlChar {
                line,
                code: ch as u32,
            });
        }
    }
    errors
}

/// Block comment delimiter found by [`comment_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentToken {
    Open,
    Close,
}

/// Byte offsets of every `/*` and `*/`, scanned left to right without overlap.
pub fn comment_tokens(text: &str) -> Vec<(usize, CommentToken)> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                tokens.push((i, CommentToken::Open));
                i += 2;
            }
            (b'*', b'/') => {
                tokens.push((i, CommentToken::Close));
                i += 2;
            }
            _ => i += 1,
        }
    }
    tokens
}

/// Check that every `*/` closes an earlier `/*` and every `/*` is closed.
///
/// Expects literal-protected text. Stray closers are reported where they
/// occur; if openers remain, only the last unmatched one is reported.
pub fn check_comment_balance(protected: &str) -> Vec<CleanError> {
    let mut errors = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (pos, token) in comment_tokens(protected) {
        trace!(pos, ?token, "Comment delimiter");
        match token {
            CommentToken::Open => open.push(pos),
            CommentToken::Close => {
                if open.pop().is_none() {
                    errors.push(CleanError::ExtraClose {
                        line: line_of_pos(protected, pos),
                    });
                }
            }
        }
    }

    if let Some(&pos) = open.last() {
        errors.push(CleanError::Unterminated {
            line: line_of_pos(protected, pos),
        });
    }

    errors
}
