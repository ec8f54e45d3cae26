//! Matching of character sequences against structure segments

use crate::format::Segment;
use crate::validation::pattern::total_length;

/// Check `chars[offset..offset + length]` against a list of segments
///
/// The sum of the declared segment lengths must equal `length` exactly,
/// including for `Maximum` segments. Each segment then consumes its declared
/// number of characters, every one of which must belong to its class.
pub fn is_match(segments: &[Segment], chars: &[char], offset: usize, length: usize) -> bool {
    let Some(end) = offset.checked_add(length) else {
        return false;
    };
    if end > chars.len() {
        return false;
    }

    if total_length(segments) != length {
        return false;
    }

    let mut pos = offset;
    for segment in segments {
        let class = segment.character_class();
        let segment_end = pos + segment.len();

        if !chars[pos..segment_end].iter().all(|&c| class.contains(c)) {
            return false;
        }
        pos = segment_end;
    }

    true
}

/// Check a whole character sequence against a list of segments
pub fn is_full_match(segments: &[Segment], chars: &[char]) -> bool {
    is_match(segments, chars, 0, chars.len())
}
