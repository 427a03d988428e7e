pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors produced while decoding a mappings string.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("byte {0:#04x} is not in the base64 vlq alphabet")]
    UnknownCharacter(u8),
    #[error("segment ends in the middle of a vlq value")]
    TruncatedVlq,
    #[error("vlq value does not fit in 64 bits")]
    VlqOverflow,
    #[error("segment decodes to {0} fields, the format allows at most 5")]
    TooManyFields(usize),
    /// A decode failure localized to the zero-based line and segment index
    /// it occurred at.
    #[error("line {line}, segment {segment}: {source}")]
    Segment {
        line: usize,
        segment: usize,
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn in_segment(line: usize, segment: usize, source: DecodeError) -> Self {
        Self::Segment {
            line,
            segment,
            source: Box::new(source),
        }
    }
}
