// Line normalization and tokenization.
//
// A line is normalized in a fixed order: every byte that is not an ASCII
// letter, ASCII digit, or space becomes a single space (one for one, runs are
// not collapsed), then the line is lower-cased, then split on whitespace.
// Empty tokens are dropped.
//
// Working on bytes rather than chars means non-UTF-8 input never fails to
// tokenize. Every byte of a multi-byte character is replaced individually,
// which only widens a run of spaces and cannot change the resulting tokens.

/// Apply the replace-then-lowercase steps to a single line.
///
/// The output is pure ASCII and has exactly as many characters as the input
/// has bytes.
pub fn normalize_line(line: &[u8]) -> String {
    line.iter()
        .map(|&b| {
            if b.is_ascii_alphanumeric() || b == b' ' {
                b.to_ascii_lowercase() as char
            } else {
                ' '
            }
        })
        .collect()
}

/// Split a raw line into normalized, non-empty word tokens.
///
/// Yields exactly what splitting `normalize_line(line)` on whitespace would,
/// without building the normalized line first: after normalization the only
/// whitespace left is the space, and every non-alphanumeric byte became one.
pub fn tokenize(line: &[u8]) -> impl Iterator<Item = String> + '_ {
    line.split(|b| !b.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .iter()
                .map(|b| b.to_ascii_lowercase() as char)
                .collect::<String>()
        })
}
