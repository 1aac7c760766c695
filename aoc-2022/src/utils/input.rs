//! Line and paragraph reading over raw puzzle input

use anyhow::anyhow;
use aoc_solver::ParseError;

/// Lines of `input`, tolerant of CRLF line endings.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Blank-line separated paragraphs, each without its trailing newline.
///
/// Runs of several blank lines count as one separator and leading or
/// trailing blank lines produce no empty paragraph.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        rest = rest.trim_start_matches(['\n', '\r']);
        if rest.is_empty() {
            return None;
        }
        let (block, tail) = split_at_blank_line(rest);
        rest = tail;
        Some(block.trim_end_matches(['\n', '\r']))
    })
}

fn split_at_blank_line(text: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']).is_empty() {
            return (&text[..offset], &text[offset..]);
        }
        offset += line.len();
    }
    (text, "")
}

/// Parse every non-empty line with `parse_line`.
///
/// A failure is reported as [`ParseError::InvalidFormat`] prefixed with its
/// 1-based line number.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    lines(input)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| parse_line(line).map_err(|e| anyhow!("(line {}) {}", idx + 1, e)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(ParseError::invalid)
}
