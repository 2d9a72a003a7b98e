//! Literal protection
//!
//! Swaps every string (`"..."`) and character (`'...'`) literal for an opaque
//! placeholder so that comment stripping and whitespace handling never see
//! literal contents, then puts the literals back afterwards.
//!
//! Placeholders are `<S><id><S>` where `<S>` is a private-use character that
//! does not occur anywhere in the input, so a placeholder can never collide
//! with source text.

use std::collections::HashSet;

use tracing::{trace, warn};

use super::diagnostic::CleanError;

/// Range of private-use code points tried as placeholder delimiters.
const SENTINEL_RANGE: std::ops::RangeInclusive<char> = '\u{E000}'..='\u{F8FF}';

/// Placeholder id -> original literal text (quotes and escapes included).
///
/// Ids are assigned 0, 1, 2, ... in order of first appearance, so the id is
/// also the index into `literals`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMap {
    sentinel: char,
    literals: Vec<String>,
}

impl LiteralMap {
    fn new(sentinel: char) -> Self {
        Self {
            sentinel,
            literals: Vec::new(),
        }
    }

    /// Record a literal and return the placeholder that stands in for it.
    fn insert(&mut self, literal: &str) -> String {
        let id = self.literals.len();
        self.literals.push(literal.to_string());
        self.placeholder(id)
    }

    /// The delimiter character used by this map's placeholders.
    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Placeholder token for `id`.
    pub fn placeholder(&self, id: usize) -> String {
        format!("{}{}{}", self.sentinel, id, self.sentinel)
    }

    /// Original literal text for `id`.
    pub fn get(&self, id: usize) -> Option<&str> {
        self.literals.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literals in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(String::as_str)
    }
}

/// Replace every literal in `text` with a placeholder.
///
/// A literal starts at `"` or `'` and runs to the next unescaped matching
/// quote; a backslash escapes any following character except a newline, and
/// raw newlines are allowed inside. A quote without a valid closing partner
/// is left as plain text.
///
/// Fails only if every private-use code point already occurs in `text`.
pub fn protect(text: &str) -> Result<(String, LiteralMap), CleanError> {
    let sentinel = choose_sentinel(text).ok_or(CleanError::SentinelExhausted)?;
    let mut map = LiteralMap::new(sentinel);
    let mut protected = String::with_capacity(text.len());

    // Quotes and backslashes are ASCII, so walking bytes is safe: UTF-8
    // continuation bytes never match them and slices land on quote positions.
    let bytes = text.as_bytes();
    let mut flushed = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        if matches!(bytes[pos], b'"' | b'\'') {
            if let Some(end) = literal_end(bytes, pos) {
                protected.push_str(&text[flushed..pos]);
                let literal = &text[pos..end];
                trace!(id = map.len(), literal = %literal, "Protecting literal");
                protected.push_str(&map.insert(literal));
                pos = end;
                flushed = end;
                continue;
            }
        }
        pos += 1;
    }
    protected.push_str(&text[flushed..]);

    Ok((protected, map))
}

/// Put the original literals back in place of their placeholders.
///
/// Single left-to-right pass, so restored literal text is never rescanned.
pub fn restore(text: &str, map: &LiteralMap) -> String {
    let sentinel = map.sentinel;
    let width = sentinel.len_utf8();
    let mut restored = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(sentinel) {
        restored.push_str(&rest[..open]);
        let after = &rest[open + width..];
        let literal = after.find(sentinel).and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|id| map.get(id))
                .map(|literal| (literal, close))
        });
        match literal {
            Some((literal, close)) => {
                restored.push_str(literal);
                rest = &after[close + width..];
            }
            None => {
                warn!(offset = text.len() - rest.len() + open, "Dangling literal placeholder");
                restored.push(sentinel);
                rest = after;
            }
        }
    }
    restored.push_str(rest);

    restored
}

/// Exclusive end of the literal opening at `start`, if it is terminated.
fn literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => match bytes.get(i + 1) {
                Some(b'\n') | None => return None,
                Some(_) => i += 2,
            },
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// First private-use character absent from `text`.
fn choose_sentinel(text: &str) -> Option<char> {
    let used: HashSet<char> = text.chars().filter(|c| SENTINEL_RANGE.contains(c)).collect();
    SENTINEL_RANGE.clone().find(|c| !used.contains(c))
}
