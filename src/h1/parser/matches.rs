//! Byte searching.
//!
//! Searches scan a word at a time using the "has zero byte" trick, then finish the tail bytewise.
const BLOCK: usize = size_of::<usize>();
const LSB: usize = usize::from_ne_bytes([0b0000_0001; BLOCK]);
const MSB: usize = usize::from_ne_bytes([0b1000_0000; BLOCK]);

/// Returns the index of the first `needle` in `haystack`.
pub(crate) fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    let pat = usize::from_ne_bytes([needle; BLOCK]);
    let mut state = haystack;

    while let Some((chunk, rest)) = state.split_first_chunk::<BLOCK>() {
        // little endian so the lowest set bit is the first byte in memory
        let block = usize::from_le_bytes(*chunk) ^ pat;
        let found = block.wrapping_sub(LSB) & !block & MSB;
        if found != 0 {
            let nth = (found.trailing_zeros() / 8) as usize;
            return Some(haystack.len() - state.len() + nth);
        }
        state = rest;
    }

    let offset = haystack.len() - state.len();
    state.iter().position(|b| *b == needle).map(|nth| offset + nth)
}

/// Returns the index of the first `\r\n` in `haystack`.
///
/// A lone `\r` is treated as content.
pub(crate) fn find_crlf(haystack: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while let Some(nth) = find_byte(&haystack[offset..], b'\r') {
        let cr = offset + nth;
        if haystack.get(cr + 1) == Some(&b'\n') {
            return Some(cr);
        }
        offset = cr + 1;
    }
    None
}

/// space, `\r`, `\n` or tab
#[inline(always)]
pub(crate) const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\r' | b'\n' | b'\t')
}

#[inline]
pub(crate) fn trim_start(mut bytes: &[u8]) -> &[u8] {
    while let [byte, rest @ ..] = bytes {
        if !is_whitespace(*byte) {
            break;
        }
        bytes = rest;
    }
    bytes
}
