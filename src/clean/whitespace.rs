//! Horizontal whitespace normalization and blank line removal.

const HSPACE: [char; 2] = [' ', '\t'];

/// Text after normalization plus the number of lines dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub dropped_lines: usize,
}

/// Canonicalize spaces/tabs and drop blank lines.
///
/// Every line loses its leading and trailing spaces/tabs, and interior runs
/// of two or more collapse to one space. Lines left blank are dropped; a
/// trailing newline in the input counts as one (empty) final line. The
/// result always ends with exactly one `\n`.
pub fn normalize(text: &str) -> Normalized {
    let mut kept: Vec<String> = Vec::new();
    let mut dropped_lines = 0;

    for line in text.split('\n') {
        let line = collapse_runs(line.trim_matches(&HSPACE[..]));
        if line.trim().is_empty() {
            dropped_lines += 1;
        } else {
            kept.push(line);
        }
    }

    let mut text = kept.join("\n").trim().to_string();
    text.push('\n');

    Normalized {
        text,
        dropped_lines,
    }
}

/// Replace each run of two or more spaces/tabs with a single space.
fn collapse_runs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut run = String::new();

    for ch in line.chars() {
        if HSPACE.contains(&ch) {
            run.push(ch);
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(ch);
    }
    flush_run(&mut out, &mut run);

    out
}

fn flush_run(out: &mut String, run: &mut String) {
    match run.len() {
        0 => {}
        1 => out.push_str(run),
        _ => out.push(' '),
    }
    run.clear();
}
