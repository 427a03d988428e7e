use crate::accumulator::{Accumulator, FIELD_COUNT};
use crate::splitter::split_lines;
use crate::vlq::VlqDecoder;
use crate::{DecodeError, DecodeResult};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use tracing::debug;

/// One tokenized line of a mappings string: its raw comma-separated
/// segments, still VLQ-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a>(pub(crate) Vec<&'a str>);

impl<'a> Deref for Line<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.0.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{segment}]")?;
        }
        Ok(())
    }
}

/// A tokenized mappings string: ordered lines of raw segments borrowed
/// from the input buffer.
#[derive(Debug, Clone)]
pub struct MappingsDocument<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> MappingsDocument<'a> {
    /// Splits a raw mappings string on `;` (lines) and `,` (segments).
    ///
    /// Tokenization never fails: delimiters are structure, everything else
    /// is segment text whose validity is checked by [`decode`](Self::decode).
    /// Consecutive delimiters produce empty segments, and the trailing
    /// segment is captured even without a closing delimiter.
    pub fn tokenize(source: &'a str) -> Self {
        let lines = split_lines(source).into_iter().map(Line).collect::<Vec<_>>();
        debug!(lines = lines.len(), "tokenized mappings");
        Self { lines }
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Decodes every segment's packed VLQ values into signed field deltas.
    ///
    /// Each decoded line holds exactly as many segments as its tokenized
    /// counterpart, in the same order. An empty segment decodes to an empty
    /// delta vector; a segment with more than [`FIELD_COUNT`] values is
    /// rejected. Errors carry the zero-based line and segment index of the
    /// offending segment.
    pub fn decode(&self) -> DecodeResult<DecodedMappings> {
        let mut decoder = VlqDecoder::new();
        let mut lines = Vec::with_capacity(self.lines.len());

        for (line_idx, line) in self.lines.iter().enumerate() {
            let mut segments = Vec::with_capacity(line.len());
            for (segment_idx, segment) in line.iter().enumerate() {
                let fields = decoder
                    .decode(segment)
                    .and_then(|fields| {
                        if fields.len() > FIELD_COUNT {
                            Err(DecodeError::TooManyFields(fields.len()))
                        } else {
                            Ok(fields)
                        }
                    })
                    .map_err(|e| DecodeError::in_segment(line_idx, segment_idx, e))?;
                segments.push(fields.to_vec());
            }
            lines.push(DecodedLine(segments));
        }

        debug!(lines = lines.len(), "decoded mappings");
        Ok(DecodedMappings { lines })
    }
}

/// One line of decoded segments, each a vector of signed field deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine(pub(crate) Vec<Vec<i64>>);

impl Deref for DecodedLine {
    type Target = [Vec<i64>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The VLQ-decoded form of a mappings string: per line, per segment, the
/// field deltas before accumulation.
#[derive(Debug, Clone)]
pub struct DecodedMappings {
    lines: Vec<DecodedLine>,
}

impl DecodedMappings {
    pub fn lines(&self) -> &[DecodedLine] {
        &self.lines
    }

    /// Resolves every delta into an absolute value by walking the document
    /// in order with an [`Accumulator`].
    ///
    /// Field 0 starts over on every line; fields 1-4 carry their running
    /// totals across line boundaries.
    pub fn resolve(&self) -> ResolvedMappings {
        let mut accumulator = Accumulator::new();
        let mut lines = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            accumulator.start_line();
            let mut segments = Vec::with_capacity(line.len());
            for fields in line.iter() {
                segments.push(
                    fields
                        .iter()
                        .enumerate()
                        .map(|(field, &delta)| accumulator.advance(field, delta))
                        .collect(),
                );
            }
            lines.push(ResolvedLine(segments));
        }

        ResolvedMappings { lines }
    }
}

/// One line of absolute field tuples, same shape as its decoded
/// counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine(pub(crate) Vec<Vec<i64>>);

impl Deref for ResolvedLine {
    type Target = [Vec<i64>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ResolvedLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, fields) in self.0.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (field_idx, value) in fields.iter().enumerate() {
                if field_idx != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// The fully resolved form of a mappings string: absolute field values per
/// line, per segment.
#[derive(Debug, Clone)]
pub struct ResolvedMappings {
    lines: Vec<ResolvedLine>,
}

impl ResolvedMappings {
    pub fn lines(&self) -> &[ResolvedLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::MappingsDocument;

    #[test]
    fn test_display_tokens() {
        let document = MappingsDocument::tokenize("AAAA,CAAC;AACA");
        let rendered = document
            .lines()
            .iter()
            .map(|line| format!("({line})"))
            .collect::<String>();
        insta::assert_snapshot!(rendered, @"([AAAA], [CAAC])([AACA])");
    }

    #[test]
    fn test_display_resolved() {
        let resolved = MappingsDocument::tokenize("AAAA,CAAC;AACA")
            .decode()
            .unwrap()
            .resolve();
        let rendered = resolved
            .lines()
            .iter()
            .map(|line| format!("({line})"))
            .collect::<String>();
        insta::assert_snapshot!(rendered, @"([0 0 0 0], [1 0 0 1])([0 0 1 1])");
    }
}
