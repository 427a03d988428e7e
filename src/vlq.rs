use crate::{DecodeError, DecodeResult};

const BASE64_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE64_VALUES: [i8; 256] = get_base64_map();

const fn get_base64_map() -> [i8; 256] {
    let mut res = [-1i8; 256];
    // `for in` is not allowed in const fn
    let mut idx = 0;
    while idx < 64 {
        res[BASE64_CHARS[idx] as usize] = idx as i8;
        idx += 1;
    }
    res
}

const CONTINUATION_BIT: i64 = 0b10_0000;
const PAYLOAD_MASK: i64 = 0b01_1111;

/// Decodes the VLQ values packed into one segment.
///
/// The output buffer is reused across calls so a single decoder can walk a
/// whole document without reallocating per segment.
#[derive(Debug, Default)]
pub(crate) struct VlqDecoder {
    buf: Vec<i64>,
}

impl VlqDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes every value packed into `segment`, however many there are.
    ///
    /// An empty segment decodes to an empty slice. Each value accumulates
    /// in a signed 64-bit intermediate, 5 payload bits per character,
    /// least-significant group first; a value encoding more bits than the
    /// intermediate holds is rejected rather than truncated.
    pub fn decode(&mut self, segment: &str) -> DecodeResult<&[i64]> {
        self.buf.clear();

        let mut cur_value: i64 = 0;
        let mut shift = 0u32;

        for byte in segment.bytes() {
            let value = BASE64_VALUES[byte as usize] as i64;
            if value < 0 {
                return Err(DecodeError::UnknownCharacter(byte));
            }

            let group = value & PAYLOAD_MASK;
            let shifted = group
                .checked_shl(shift)
                .filter(|shifted| shifted >> shift == group)
                .ok_or(DecodeError::VlqOverflow)?;
            cur_value = cur_value
                .checked_add(shifted)
                .ok_or(DecodeError::VlqOverflow)?;
            shift += 5;

            if value & CONTINUATION_BIT == 0 {
                // bit 0 of the finished value is the sign flag
                let is_negative = cur_value & 1 == 1;
                cur_value >>= 1;
                if is_negative {
                    cur_value = -cur_value;
                }
                self.buf.push(cur_value);
                cur_value = 0;
                shift = 0;
            }
        }

        if shift != 0 {
            return Err(DecodeError::TruncatedVlq);
        }
        Ok(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{VlqDecoder, BASE64_CHARS};
    use crate::DecodeError;

    #[test]
    fn test_decode_known_values() {
        let mut decoder = VlqDecoder::new();
        assert_eq!(decoder.decode("AAAA").unwrap(), &[0, 0, 0, 0]);
        assert_eq!(decoder.decode("CAAC").unwrap(), &[1, 0, 0, 1]);
        assert_eq!(decoder.decode("Q").unwrap(), &[8]);
        assert_eq!(decoder.decode("D").unwrap(), &[-1]);
        assert_eq!(decoder.decode("yB").unwrap(), &[25]);
        assert_eq!(decoder.decode("zB").unwrap(), &[-25]);
    }

    #[test]
    fn test_decode_single_characters() {
        // alphabet indices 0-31 are complete values on their own; 32-63
        // carry the continuation bit and cannot end a segment
        let mut decoder = VlqDecoder::new();
        for (idx, &byte) in BASE64_CHARS.iter().enumerate() {
            let segment = (byte as char).to_string();
            let result = decoder.decode(&segment);
            if idx < 32 {
                let mut expected = (idx >> 1) as i64;
                if idx & 1 == 1 {
                    expected = -expected;
                }
                assert_eq!(result.unwrap(), &[expected], "char {}", byte as char);
            } else {
                assert!(
                    matches!(result, Err(DecodeError::TruncatedVlq)),
                    "char {}",
                    byte as char
                );
            }
        }
    }

    #[test]
    fn test_decode_empty_segment() {
        let mut decoder = VlqDecoder::new();
        assert!(decoder.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_is_field_count_agnostic() {
        let mut decoder = VlqDecoder::new();
        assert_eq!(decoder.decode("AAAAAA").unwrap().len(), 6);
    }

    #[test]
    fn test_decode_unknown_character() {
        let mut decoder = VlqDecoder::new();
        assert!(matches!(
            decoder.decode("AA*A"),
            Err(DecodeError::UnknownCharacter(b'*'))
        ));
        assert!(matches!(
            decoder.decode("你好"),
            Err(DecodeError::UnknownCharacter(..))
        ));
    }

    #[test]
    fn test_decode_overflow() {
        // 13 continuation groups push the payload past 64 bits
        let mut decoder = VlqDecoder::new();
        assert!(matches!(
            decoder.decode("/////////////A"),
            Err(DecodeError::VlqOverflow)
        ));
    }
}
