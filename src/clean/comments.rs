//! Comment removal over literal-protected text.

/// Remove every `/* ... */`, each ending at the nearest following `*/`.
///
/// Comments may span lines. An opener with no closer after it is left alone
/// (the balance check rejects such input before this runs).
pub fn remove_block_comments(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("/*") {
        let body = &rest[open + 2..];
        let Some(close) = body.find("*/") else {
            break;
        };
        kept.push_str(&rest[..open]);
        rest = &body[close + 2..];
    }
    kept.push_str(rest);

    kept
}

/// Remove `//` and everything after it up to the end of its line.
///
/// The newline itself is kept.
pub fn remove_line_comments(text: &str) -> String {
    text.split('\n')
        .map(|line| line.find("//").map_or(line, |start| &line[..start]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of characters `after` is shorter than `before`.
pub fn chars_removed(before: &str, after: &str) -> usize {
    before
        .chars()
        .count()
        .saturating_sub(after.chars().count())
}
