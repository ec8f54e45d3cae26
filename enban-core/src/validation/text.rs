//! White space handling for identifier text
//!
//! Pure string functions used by the style normalizers.

use alloc::string::String;

/// Remove white space from the start, the middle and/or the end of a text
///
/// "Middle" is any space or tab between the first and the last non-white
/// character; other white space such as line breaks stays in place. A text
/// consisting only of white space counts as leading white space.
pub fn trim_whitespace(text: &str, leading: bool, intermediate: bool, trailing: bool) -> String {
    let core_start = text
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let core_end = text
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(core_start)
        .max(core_start);

    let mut result = String::with_capacity(text.len());

    if !leading {
        result.push_str(&text[..core_start]);
    }

    let core = &text[core_start..core_end];
    if intermediate {
        result.extend(core.chars().filter(|&c| !is_group_separator(c)));
    } else {
        result.push_str(core);
    }

    if !trailing {
        result.push_str(&text[core_end..]);
    }

    result
}

fn is_group_separator(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Remove surrounding white space and every space or tab in between
pub fn remove_whitespace(text: &str) -> String {
    trim_whitespace(text, true, true, true)
}
