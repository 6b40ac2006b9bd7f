// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Greedy hard-wrapping of a single line of text.
//!
//! Tabs expand to 8-column stops and other ASCII whitespace becomes a plain
//! space before the line is split into word and whitespace chunks. Chunks are
//! packed while they fit; whitespace at a break is dropped and words wider
//! than the limit are cut at the limit. A hyphenated word such as
//! `well-known` may break after its hyphen.

const TAB_SIZE: usize = 8;

fn is_wrap_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Expand tabs and turn every whitespace character into a space.
fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - out.len() % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
            }
            c if is_wrap_space(c) => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

fn is_letter(c: Option<&char>) -> bool {
    c.is_some_and(|&c| c.is_alphabetic() || c == '_')
}

/// Whether a word may break right after the hyphen at `i`.
///
/// The hyphen needs two letters (or `letter-letter`) before it and a letter
/// after it followed by another letter, optionally across one more hyphen.
fn breaks_after_hyphen(word: &[char], i: usize) -> bool {
    if word[i] != '-' || i < 2 {
        return false;
    }

    let before = (is_letter(word.get(i - 2)) && is_letter(word.get(i - 1)))
        || (i >= 3
            && is_letter(word.get(i - 3))
            && word[i - 2] == '-'
            && is_letter(word.get(i - 1)));
    let after = is_letter(word.get(i + 1))
        && (is_letter(word.get(i + 2))
            || (word.get(i + 2) == Some(&'-') && is_letter(word.get(i + 3))));

    before && after
}

/// Split a word into pieces ending at its breakable hyphens.
fn split_word(word: Vec<char>) -> Vec<Vec<char>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for i in 0..word.len() {
        if breaks_after_hyphen(&word, i) {
            pieces.push(word[start..=i].to_vec());
            start = i + 1;
        }
    }
    pieces.push(word[start..].to_vec());
    pieces
}

/// Split into runs of spaces and word pieces.
fn chunks(chars: &[char]) -> Vec<Vec<char>> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    for &c in chars {
        match runs.last_mut() {
            Some(run) if (run[0] == ' ') == (c == ' ') => run.push(c),
            _ => runs.push(vec![c]),
        }
    }

    runs.into_iter()
        .flat_map(|run| {
            if run[0] == ' ' {
                vec![run]
            } else {
                split_word(run)
            }
        })
        .collect()
}

fn is_space_chunk(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

/// Wrap `text` into lines of at most `width` characters.
///
/// Returns no lines for empty or all-whitespace input.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut pending = chunks(&normalize(text));
    pending.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !pending.is_empty() {
        let mut current: Vec<Vec<char>> = Vec::new();
        let mut cur_len = 0;

        if !lines.is_empty() && pending.last().is_some_and(|c| is_space_chunk(c)) {
            pending.pop();
        }

        while let Some(chunk) = pending.last() {
            if cur_len + chunk.len() > width {
                break;
            }
            cur_len += chunk.len();
            if let Some(chunk) = pending.pop() {
                current.push(chunk);
            }
        }

        if let Some(chunk) = pending.last_mut() {
            if chunk.len() > width {
                let rest = chunk.split_off(width - cur_len);
                current.push(std::mem::replace(chunk, rest));
            }
        }

        if current.last().is_some_and(|c| is_space_chunk(c)) {
            current.pop();
        }

        if !current.is_empty() {
            lines.push(current.concat().into_iter().collect());
        }
    }

    lines
}

/// Wrap `text` and join the resulting lines with `\n`.
pub fn fill(text: &str, width: usize) -> String {
    wrap(text, width).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_unchanged() {
        assert_eq!(fill("Fix the parser", 72), "Fix the parser");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(fill("", 72), "");
        assert!(wrap("   ", 72).is_empty());
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        let text = "aaaa bbbb cccc dddd";
        assert_eq!(wrap(text, 9), vec!["aaaa bbbb", "cccc dddd"]);
    }

    #[test]
    fn test_breaks_long_word() {
        let word = "x".repeat(100);
        let lines = wrap(&word, 72);
        assert_eq!(lines, vec!["x".repeat(72), "x".repeat(28)]);
    }

    #[test]
    fn test_long_word_fills_rest_of_line() {
        let text = format!("ab {}", "c".repeat(10));
        assert_eq!(wrap(&text, 6), vec!["ab ccc", "cccccc", "c"]);
    }

    #[test]
    fn test_breaks_after_hyphen() {
        let text = format!("{} well-known", "a".repeat(66));
        assert_eq!(
            wrap(&text, 72),
            vec![format!("{} well-", "a".repeat(66)), "known".to_string()]
        );
    }

    #[test]
    fn test_hyphen_needs_letters_on_both_sides() {
        assert_eq!(split_word("well-known".chars().collect()).len(), 2);
        assert_eq!(split_word("x-ray".chars().collect()).len(), 1);
        assert_eq!(split_word("abc-1".chars().collect()).len(), 1);
        assert_eq!(split_word("abc-d".chars().collect()).len(), 1);
        assert_eq!(split_word("up-to-date".chars().collect()).len(), 3);
    }

    #[test]
    fn test_hyphenated_word_kept_when_it_fits() {
        assert_eq!(fill("a well-known fix", 72), "a well-known fix");
    }

    #[test]
    fn test_tabs_and_whitespace_normalized() {
        assert_eq!(fill("a\tb", 72), "a       b");
        assert_eq!(fill("a\x0cb", 72), "a b");
    }

    #[test]
    fn test_keeps_interior_spacing() {
        assert_eq!(fill("two  spaces", 72), "two  spaces");
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim \
                    ad minim veniam, quis nostrud exercitation ullamco laboris";
        let once = wrap(text, 72);
        assert!(once.iter().all(|l| l.chars().count() <= 72));
        let twice: Vec<String> = once.iter().flat_map(|l| wrap(l, 72)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "é".repeat(72);
        assert_eq!(wrap(&text, 72).len(), 1);
    }
}
