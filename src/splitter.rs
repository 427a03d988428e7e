use std::mem;

/// Splits a raw mappings string into lines of raw segments.
///
/// `;` terminates a line, `,` terminates a segment within a line, every
/// other byte belongs to the current segment. The trailing segment has no
/// delimiter and is still flushed, so an input ending in `;` produces a
/// final line holding one empty segment, and empty input produces a single
/// line with a single empty segment.
pub(crate) fn split_lines(source: &str) -> Vec<Vec<&str>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut start = 0;

    for end in memchr::memchr2_iter(b';', b',', source.as_bytes()) {
        current.push(&source[start..end]);
        if source.as_bytes()[end] == b';' {
            lines.push(mem::take(&mut current));
        }
        start = end + 1;
    }

    current.push(&source[start..]);
    lines.push(current);
    lines
}
